use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::{ChipInfo, Ft5x06, Reg, RegisterBus};

impl<B, D, LED> Ft5x06<B, D, LED>
where
  B: RegisterBus,
  D: DelayNs,
  LED: OutputPin,
{
  /// Enable polling. [`poll`](Self::poll) does nothing until this is called.
  pub fn power_on(&mut self) {
    self.powered = true;
  }

  /// Disable polling. The pointer keeps its last state.
  pub fn power_off(&mut self) {
    self.powered = false;
  }

  pub fn is_powered(&self) -> bool {
    self.powered
  }

  /// Set the valid touch detection threshold (`ThGroup`).
  pub async fn set_touch_threshold(&mut self, threshold: u8) {
    self.bus.write_register(Reg::ThGroup, threshold).await;
  }

  /// Read the identification bytes of the controller.
  pub async fn chip_info(&mut self) -> ChipInfo {
    ChipInfo {
      vendor: self.bus.read_register(Reg::Cipher).await,
      firmware: self.bus.read_register(Reg::FirmwareId).await,
      panel_vendor: self.bus.read_register(Reg::Ft5201Id).await,
      device_mode: self.bus.read_register(Reg::DeviceMode).await,
    }
  }
}
