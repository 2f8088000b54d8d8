#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` polling driver for FocalTech FT5x06 capacitive touch
//! controllers.
//!
//! The driver brings the controller up, then turns each polling tick into a
//! single-pointer state suitable for a display layer:
//!
//! - Verifying the chip vendor id and error register during bring-up, with a
//!   fail-stop alarm when either check never passes
//! - Configuring the valid touch detection threshold
//! - Decoding the first touch point and rescaling it into a logical pointer
//!   range
//! - Reporting pinch gestures as a zoom delta
//! - Using `embedded-hal` / `embedded-hal-async` 1.0 traits so the driver works
//!   across MCU families
//!
//! All register access goes through [`RegisterBus`]. [`I2cBus`] implements it
//! on top of any async I²C peripheral.
//!
//! ```no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal_async::{delay::DelayNs, i2c::{I2c, SevenBitAddress}};
//! use ft5x06::{Button, Config, Ft5x06, I2cBus};
//!
//! async fn run<I, D, LED>(i2c: I, bus_delay: D, delay: D, led: LED)
//! where
//!   I: I2c<SevenBitAddress>,
//!   D: DelayNs,
//!   LED: OutputPin,
//! {
//!   let bus = I2cBus::new(i2c, bus_delay);
//!   let mut touch = Ft5x06::new(bus, delay, led, Config::default());
//!   touch.setup().await;
//!
//!   loop {
//!     match touch.poll().await {
//!       Some(Button::Down) => {
//!         let p = touch.pointer();
//!         let _ = (p.x, p.y, p.zoom.delta());
//!       }
//!       Some(Button::Up) => {}
//!       None => {}
//!     }
//!   }
//! }
//! ```
mod config;
mod control;
mod defs;
mod event;
mod init;
#[cfg(test)]
mod mock;
mod reg;
mod rw;

pub use config::Config;
pub use defs::{ChipInfo, ChipState};
pub use event::{scale, Button, Pointer, TouchEvent, TouchPoint, Zoom};
pub use init::InitState;
pub use reg::{Reg, CHIP_VENDOR_ID, I2C_ADDR};
pub use rw::{I2cBus, RegisterBus};

/// Bring-up failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
  /// The vendor id register never matched; carries the last value read.
  InvalidChipId(u8),
  /// The error register never cleared; carries the last value read.
  ChipFault(u8),
}

/// FT5x06 polling driver.
///
/// Owns the register bus, a delay used for bring-up timing and the indicator
/// pin blinked after a failed bring-up. Create with [`Ft5x06::new`], call
/// [`Ft5x06::setup`] once, then [`Ft5x06::poll`] on every tick.
pub struct Ft5x06<B, D, LED> {
  bus: B,
  delay: D,
  led: LED,
  config: Config,
  powered: bool,
  pointer: Pointer,
  touch: TouchPoint,
}

impl<B, D, LED> Ft5x06<B, D, LED> {
  /// Create a powered-off driver with a zeroed pointer. Nothing is sent to
  /// the chip until [`Ft5x06::setup`].
  pub fn new(bus: B, delay: D, led: LED, config: Config) -> Self {
    Self {
      bus,
      delay,
      led,
      config,
      powered: false,
      pointer: Pointer::default(),
      touch: TouchPoint::default(),
    }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Current pointer state.
  pub fn pointer(&self) -> Pointer {
    self.pointer
  }

  /// Last decoded touch sample, in raw sensor coordinates.
  pub fn touch(&self) -> TouchPoint {
    self.touch
  }

  pub fn release(self) -> (B, D, LED) {
    (self.bus, self.delay, self.led)
  }
}
