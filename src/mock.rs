//! Test doubles for the bus, delay and indicator pin.

extern crate std;

use core::convert::Infallible;
use std::collections::VecDeque;
use std::vec::Vec;

use embassy_futures::yield_now;
use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

use crate::reg::Reg;
use crate::rw::RegisterBus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
  Read(Reg),
  Write(Reg, u8),
}

/// Register bus answering from a register file, with optional per-register
/// sequences consumed before falling back to the file.
pub struct MockBus {
  regs: [u8; 256],
  scripts: Vec<(Reg, VecDeque<u8>)>,
  pub log: Vec<Access>,
}

impl Default for MockBus {
  fn default() -> Self {
    Self::new()
  }
}

impl MockBus {
  pub fn new() -> Self {
    Self { regs: [0; 256], scripts: Vec::new(), log: Vec::new() }
  }

  pub fn with(mut self, reg: Reg, value: u8) -> Self {
    self.regs[reg as usize] = value;
    self
  }

  pub fn with_sequence(mut self, reg: Reg, values: &[u8]) -> Self {
    self.scripts.push((reg, values.iter().copied().collect()));
    self
  }

  /// A chip sitting in its working state, reporting a single contact.
  pub fn touching(event: u8, id: u8, x: u16, y: u16) -> Self {
    Self::new()
      .with(Reg::State, 0x01)
      .with(Reg::TdStatus, 0x01)
      .with(Reg::Touch1XHigh, (event << 6) | (x >> 8) as u8)
      .with(Reg::Touch1XLow, x as u8)
      .with(Reg::Touch1YHigh, (id << 4) | (y >> 8) as u8)
      .with(Reg::Touch1YLow, y as u8)
  }

  pub fn reads(&self) -> Vec<Reg> {
    self
      .log
      .iter()
      .filter_map(|a| match a {
        Access::Read(reg) => Some(*reg),
        Access::Write(..) => None,
      })
      .collect()
  }

  pub fn writes(&self) -> Vec<(Reg, u8)> {
    self
      .log
      .iter()
      .filter_map(|a| match a {
        Access::Write(reg, value) => Some((*reg, *value)),
        Access::Read(_) => None,
      })
      .collect()
  }
}

impl RegisterBus for MockBus {
  async fn read_register(&mut self, reg: Reg) -> u8 {
    self.log.push(Access::Read(reg));
    let scripted = self
      .scripts
      .iter_mut()
      .find(|(r, _)| *r == reg)
      .and_then(|(_, values)| values.pop_front());
    scripted.unwrap_or(self.regs[reg as usize])
  }

  async fn write_register(&mut self, reg: Reg, value: u8) {
    self.log.push(Access::Write(reg, value));
    self.regs[reg as usize] = value;
  }
}

/// Delay that yields once and keeps a tally of the requested time.
pub struct MockDelay {
  elapsed_ns: u64,
}

impl Default for MockDelay {
  fn default() -> Self {
    Self::new()
  }
}

impl MockDelay {
  pub fn new() -> Self {
    Self { elapsed_ns: 0 }
  }

  pub fn elapsed_ms(&self) -> u64 {
    self.elapsed_ns / 1_000_000
  }
}

impl DelayNs for MockDelay {
  async fn delay_ns(&mut self, ns: u32) {
    self.elapsed_ns += u64::from(ns);
    yield_now().await;
  }
}

/// Output pin recording every level it was driven to.
pub struct MockPin {
  pub levels: Vec<bool>,
}

impl Default for MockPin {
  fn default() -> Self {
    Self::new()
  }
}

impl MockPin {
  pub fn new() -> Self {
    Self { levels: Vec::new() }
  }
}

impl PinErrorType for MockPin {
  type Error = Infallible;
}

impl OutputPin for MockPin {
  fn set_low(&mut self) -> Result<(), Self::Error> {
    self.levels.push(false);
    Ok(())
  }

  fn set_high(&mut self) -> Result<(), Self::Error> {
    self.levels.push(true);
    Ok(())
  }
}

/// I²C peripheral backed by a register file.
pub struct MockI2c {
  regs: [u8; 256],
  pub address: Option<u8>,
  pub reads: Vec<u8>,
  pub writes: Vec<(u8, u8)>,
  pub fail: bool,
}

impl Default for MockI2c {
  fn default() -> Self {
    Self::new()
  }
}

impl MockI2c {
  pub fn new() -> Self {
    Self { regs: [0; 256], address: None, reads: Vec::new(), writes: Vec::new(), fail: false }
  }

  pub fn set(&mut self, reg: Reg, value: u8) {
    self.regs[reg as usize] = value;
  }
}

impl ErrorType for MockI2c {
  type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for MockI2c {
  async fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    if self.fail {
      return Err(ErrorKind::Other);
    }
    self.address = Some(address);

    let mut pointer = None;
    for op in operations.iter_mut() {
      match op {
        Operation::Write(bytes) => match bytes.len() {
          1 => pointer = Some(bytes[0]),
          2 => {
            self.writes.push((bytes[0], bytes[1]));
            self.regs[bytes[0] as usize] = bytes[1];
          }
          _ => return Err(ErrorKind::Other),
        },
        Operation::Read(buf) => {
          let reg = pointer.ok_or(ErrorKind::Other)?;
          self.reads.push(reg);
          for (i, b) in buf.iter_mut().enumerate() {
            *b = self.regs[(reg as usize + i) & 0xFF];
          }
        }
      }
    }
    Ok(())
  }
}

/// I²C peripheral that never completes a transfer.
pub struct StalledI2c;

impl ErrorType for StalledI2c {
  type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for StalledI2c {
  async fn transaction(&mut self, _address: u8, _operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    core::future::pending().await
  }
}
