use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::event::{Pointer, TouchPoint};
use crate::reg::{Reg, CHIP_VENDOR_ID};
use crate::{Error, Ft5x06, RegisterBus};

/// Bring-up progress.
///
/// `Configured` and `Failed` are terminal; every other state advances on each
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
  /// Waiting for the vendor id to read back correctly.
  Probing { attempt: u8 },
  /// Vendor confirmed, waiting for the error register to clear.
  Verified { attempt: u8 },
  ErrorChecked,
  Configured,
  Failed(Error),
}

impl InitState {
  pub const fn is_terminal(&self) -> bool {
    matches!(self, Self::Configured | Self::Failed(_))
  }
}

impl<B, D, LED> Ft5x06<B, D, LED>
where
  B: RegisterBus,
  D: DelayNs,
  LED: OutputPin,
{
  /// Bring the controller up, halting forever if it cannot be verified.
  ///
  /// On failure the driver powers off and blinks the indicator pin; this
  /// never returns. Use [`try_setup`](Self::try_setup) to handle the error
  /// instead.
  pub async fn setup(&mut self) {
    if let Err(_e) = self.try_setup().await {
      #[cfg(feature = "defmt")]
      defmt::error!("FT5x06: bring-up failed: {:?}", _e);
      match self.halt().await {}
    }
  }

  /// Bring the controller up.
  ///
  /// Resets the pointer, verifies the vendor id, waits for the error register
  /// to clear, powers on and writes the touch threshold. On error the driver
  /// is left powered off and the threshold is never written.
  pub async fn try_setup(&mut self) -> Result<(), Error> {
    self.powered = false;
    self.pointer = Pointer::default();
    self.touch = TouchPoint::default();

    let mut state = InitState::Probing { attempt: 0 };
    loop {
      state = match self.advance(state).await {
        InitState::Configured => return Ok(()),
        InitState::Failed(e) => {
          self.power_off();
          return Err(e);
        }
        next => next,
      };
    }
  }

  /// Perform the bus work for `state` and return the next state.
  pub async fn advance(&mut self, state: InitState) -> InitState {
    let attempts = self.config.probe_attempts;

    match state {
      InitState::Probing { attempt } => {
        self.delay.delay_ms(self.config.probe_interval_ms).await;
        let vendor = self.bus.read_register(Reg::Cipher).await;
        if vendor == CHIP_VENDOR_ID {
          InitState::Verified { attempt: 0 }
        } else if attempt.saturating_add(1) >= attempts {
          InitState::Failed(Error::InvalidChipId(vendor))
        } else {
          InitState::Probing { attempt: attempt + 1 }
        }
      }

      InitState::Verified { attempt } => {
        let err = self.bus.read_register(Reg::Error).await;
        if err == 0 {
          InitState::ErrorChecked
        } else if attempt.saturating_add(1) >= attempts {
          InitState::Failed(Error::ChipFault(err))
        } else {
          InitState::Verified { attempt: attempt + 1 }
        }
      }

      InitState::ErrorChecked => {
        self.power_on();

        #[cfg(feature = "defmt")]
        {
          let info = self.chip_info().await;
          defmt::info!(
            "FT5x06: vendor: {=u8:#x} firmware: {=u8:#x} panel vendor: {=u8:#x} mode: {=u8:#x}",
            info.vendor,
            info.firmware,
            info.panel_vendor,
            info.device_mode
          );
        }

        self.set_touch_threshold(self.config.touch_threshold).await;
        InitState::Configured
      }

      InitState::Configured | InitState::Failed(_) => state,
    }
  }

  /// Power off and blink the indicator pin forever.
  pub async fn halt(&mut self) -> Infallible {
    self.power_off();
    loop {
      self.blink().await;
    }
  }

  async fn blink(&mut self) {
    let interval = self.config.blink_interval_ms;
    // Nothing useful can be done with a pin error while halted.
    let _ = self.led.set_low();
    self.delay.delay_ms(interval).await;
    let _ = self.led.set_high();
    self.delay.delay_ms(interval).await;
  }
}
