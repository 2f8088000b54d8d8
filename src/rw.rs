use embassy_futures::select::{select, Either};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::reg::{Reg, EMPTY_READ, I2C_ADDR, READ_TIMEOUT_MS};

/// Single-byte register access to the touch controller.
///
/// The decoder only ever talks to the chip through this trait, so it can be
/// driven by a scripted bus in tests. Implementations never fail: a transfer
/// that goes wrong yields some byte and the caller carries on.
#[allow(async_fn_in_trait)]
pub trait RegisterBus {
  /// Read one byte from `reg`.
  async fn read_register(&mut self, reg: Reg) -> u8;

  /// Write `value` to `reg` in a single transaction.
  async fn write_register(&mut self, reg: Reg, value: u8);
}

/// [`RegisterBus`] over an `embedded-hal-async` I²C peripheral.
///
/// Reads are bounded by a 500 ms timeout. When a read times out or the bus
/// reports an error `0xFF` is returned, which the decoder treats as
/// "not working" / "no touch".
pub struct I2cBus<I, D> {
  i2c: I,
  delay: D,
  address: u8,
}

impl<I, D> I2cBus<I, D>
where
  I: I2c<SevenBitAddress>,
  D: DelayNs,
{
  pub fn new(i2c: I, delay: D) -> Self {
    Self { i2c, delay, address: I2C_ADDR }
  }

  pub fn with_address(mut self, address: u8) -> Self {
    self.address = address;
    self
  }

  /// Give the peripherals back.
  pub fn release(self) -> (I, D) {
    (self.i2c, self.delay)
  }
}

impl<I, D> RegisterBus for I2cBus<I, D>
where
  I: I2c<SevenBitAddress>,
  D: DelayNs,
{
  async fn read_register(&mut self, reg: Reg) -> u8 {
    let addr = [u8::from(reg)];
    let mut buf = [0u8; 1];

    let transfer = self.i2c.write_read(self.address, &addr, &mut buf);
    let timeout = self.delay.delay_ms(READ_TIMEOUT_MS);

    let outcome = select(transfer, timeout).await;
    match outcome {
      Either::First(Ok(())) => buf[0],
      Either::First(Err(_)) => {
        #[cfg(feature = "defmt")]
        defmt::warn!("FT5x06: read of {:?} failed", reg);
        EMPTY_READ
      }
      Either::Second(()) => {
        #[cfg(feature = "defmt")]
        defmt::warn!("FT5x06: read of {:?} timed out", reg);
        EMPTY_READ
      }
    }
  }

  async fn write_register(&mut self, reg: Reg, value: u8) {
    let buf = [u8::from(reg), value];
    if self.i2c.write(self.address, &buf).await.is_err() {
      #[cfg(feature = "defmt")]
      defmt::warn!("FT5x06: write of {:?} failed", reg);
    }
  }
}
