/// Static driver configuration.
///
/// The sensor extent is the raw coordinate range the panel reports; the
/// pointer maximum is the top of the logical range positions are rescaled
/// into.
///
/// # Example
/// ```no_run
/// use ft5x06::Config;
///
/// let config = Config::default()
///   .with_sensor_size(1024, 600)
///   .with_pointer_max(32767)
///   .with_touch_threshold(40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  pub sensor_width: u16,
  pub sensor_height: u16,
  pub pointer_max: u16,
  /// Valid touch detection threshold written to `ThGroup` during setup.
  pub touch_threshold: u8,
  /// Reads allowed for the vendor id to appear, and again for the error
  /// register to clear.
  pub probe_attempts: u8,
  pub probe_interval_ms: u32,
  /// Half period of the alarm blink after a failed bring-up.
  pub blink_interval_ms: u32,
}

impl Config {
  pub const fn new() -> Self {
    Self {
      sensor_width: 800,
      sensor_height: 480,
      pointer_max: 4095,
      touch_threshold: 35,
      probe_attempts: 10,
      probe_interval_ms: 500,
      blink_interval_ms: 250,
    }
  }

  pub const fn with_sensor_size(mut self, width: u16, height: u16) -> Self {
    self.sensor_width = width;
    self.sensor_height = height;
    self
  }

  pub const fn with_pointer_max(mut self, pointer_max: u16) -> Self {
    self.pointer_max = pointer_max;
    self
  }

  pub const fn with_touch_threshold(mut self, threshold: u8) -> Self {
    self.touch_threshold = threshold;
    self
  }

  pub const fn with_probe(mut self, attempts: u8, interval_ms: u32) -> Self {
    self.probe_attempts = attempts;
    self.probe_interval_ms = interval_ms;
    self
  }

  pub const fn with_blink_interval(mut self, interval_ms: u32) -> Self {
    self.blink_interval_ms = interval_ms;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}
