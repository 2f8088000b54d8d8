/// Operating state reported by [`Reg::State`](crate::Reg::State).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipState {
  Configure,
  /// Normal scanning; the only state in which touch data is valid.
  Work,
  Calibration,
  Factory,
  AutoCalibration,
  Unknown(u8),
}

impl ChipState {
  pub const fn from_bits(bits: u8) -> Self {
    match bits {
      0x00 => Self::Configure,
      0x01 => Self::Work,
      0x02 => Self::Calibration,
      0x03 => Self::Factory,
      0x04 => Self::AutoCalibration,
      other => Self::Unknown(other),
    }
  }

  pub const fn is_working(self) -> bool {
    matches!(self, Self::Work)
  }
}

/// Identification bytes read back from the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipInfo {
  /// Chip vendor id (cipher register).
  pub vendor: u8,
  pub firmware: u8,
  /// Vendor id of the touch panel module.
  pub panel_vendor: u8,
  pub device_mode: u8,
}
