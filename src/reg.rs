/******************************************************************************
 * Refer to the FocalTech FT5x06 datasheet and application note for details. *
 * ========================================================================== *
 *                       FT5x06 - Registers & Memory Map                      *
*******************************************************************************/

/// Default 7-bit bus address of the FT5x06 family.
pub const I2C_ADDR: u8 = 0x38;

/// Value of [`Reg::Cipher`] identifying an FT5x06 controller.
pub const CHIP_VENDOR_ID: u8 = 0x55;

/// TD status values meaning "no active touch".
pub(crate) const NO_TOUCH: u8 = 0x00;
pub(crate) const NO_TOUCH_ALT: u8 = 0xFF;
/// Low bits of TD status holding the active contact count.
pub(crate) const POINT_COUNT_MASK: u8 = 0x07;

pub(crate) const GESTURE_ZOOM_IN: u8 = 0x48;
pub(crate) const GESTURE_ZOOM_OUT: u8 = 0x49;

/// Byte returned by a read that failed or timed out; an idle bus reads high.
pub(crate) const EMPTY_READ: u8 = 0xFF;

/// Upper bound on how long a single register read may wait for data.
pub(crate) const READ_TIMEOUT_MS: u32 = 500;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reg {
  // Operating data (0x00..0x06)
  DeviceMode = 0x00,
  GestureId = 0x01,
  TdStatus = 0x02,
  Touch1XHigh = 0x03,
  Touch1XLow = 0x04,
  Touch1YHigh = 0x05,
  Touch1YLow = 0x06,

  // Detection thresholds (0x80..0x85)
  ThGroup = 0x80,
  ThPeak = 0x81,
  ThCal = 0x82,
  ThWater = 0x83,
  ThTemp = 0x84,
  ThDiff = 0x85,

  // Power control and report timing (0x86..0x89)
  Ctrl = 0x86,
  TimeEnterMonitor = 0x87,
  PeriodActive = 0x88,
  PeriodMonitor = 0x89,

  // Identification and status (0xA0..0xA9)
  AutoCalibration = 0xA0,
  LibVersionHigh = 0xA1,
  LibVersionLow = 0xA2,
  Cipher = 0xA3,
  Mode = 0xA4,
  PowerMode = 0xA5,
  FirmwareId = 0xA6,
  State = 0xA7,
  Ft5201Id = 0xA8,
  Error = 0xA9,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}
