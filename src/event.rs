use bitfield_struct::bitfield;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::defs::ChipState;
use crate::reg::*;
use crate::{Ft5x06, RegisterBus};

/// Event flag carried in the top two bits of a point's X high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
  PutDown = 0b00,
  LiftUp = 0b01,
  Contact = 0b10,
  NoEvent = 0b11,
}

impl TouchEvent {
  const fn into_bits(self) -> u8 {
    self as _
  }

  const fn from_bits(bits: u8) -> Self {
    match bits & 0b11 {
      0b00 => Self::PutDown,
      0b01 => Self::LiftUp,
      0b10 => Self::Contact,
      _ => Self::NoEvent,
    }
  }
}

/// `Pn_XH:Pn_XL` read as one big-endian word.
#[bitfield(u16)]
struct XWord {
  #[bits(12)]
  x: u16,
  #[bits(2)]
  __: u8,
  #[bits(2)]
  event: TouchEvent,
}

/// `Pn_YH:Pn_YL` read as one big-endian word.
#[bitfield(u16)]
struct YWord {
  #[bits(12)]
  y: u16,
  #[bits(4)]
  id: u8,
}

/// One decoded touch sample, in raw sensor coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
  pub event: TouchEvent,
  /// Contact slot id assigned by the controller.
  pub id: u8,
  pub x: u16,
  pub y: u16,
}

impl TouchPoint {
  /// Decode the four point registers `XH, XL, YH, YL`.
  pub fn from_registers(raw: [u8; 4]) -> Self {
    let xw = XWord::from_bits(u16::from_be_bytes([raw[0], raw[1]]));
    let yw = YWord::from_bits(u16::from_be_bytes([raw[2], raw[3]]));
    Self { event: xw.event(), id: yw.id(), x: xw.x(), y: yw.y() }
  }

  /// `true` for a put-down or a held contact.
  pub const fn is_down(&self) -> bool {
    matches!(self.event, TouchEvent::PutDown | TouchEvent::Contact)
  }
}

impl Default for TouchPoint {
  fn default() -> Self {
    Self { event: TouchEvent::NoEvent, id: 0, x: 0, y: 0 }
  }
}

/// Pinch direction reported alongside a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum Zoom {
  Out = -1,
  #[default]
  None = 0,
  In = 1,
}

impl Zoom {
  pub const fn from_gesture(id: u8) -> Self {
    match id {
      GESTURE_ZOOM_IN => Self::In,
      GESTURE_ZOOM_OUT => Self::Out,
      _ => Self::None,
    }
  }

  pub const fn delta(self) -> i8 {
    self as i8
  }
}

/// Button signal produced by a poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
  Down,
  Up,
}

/// Pointer state exposed to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pointer {
  /// Horizontal position in `0..=pointer_max`.
  pub x: u16,
  /// Vertical position in `0..=pointer_max`.
  pub y: u16,
  pub pressed: bool,
  pub zoom: Zoom,
  /// Active contacts reported by the chip. Only the first is decoded.
  pub points: u8,
}

/// Rescale a raw coordinate from `0..extent` onto `0..=max`.
///
/// Uses truncating division: `raw * max / (extent - 1)`.
pub const fn scale(raw: u16, extent: u16, max: u16) -> u16 {
  let span = if extent > 1 { extent as u32 - 1 } else { 1 };
  let scaled = raw as u32 * max as u32 / span;
  if scaled > u16::MAX as u32 {
    u16::MAX
  } else {
    scaled as u16
  }
}

impl<B, D, LED> Ft5x06<B, D, LED>
where
  B: RegisterBus,
  D: DelayNs,
  LED: OutputPin,
{
  /// Run one polling tick.
  ///
  /// Returns `None` when the driver is powered off or the chip is not in its
  /// working state; the pointer is left untouched in both cases. Otherwise
  /// the pointer is updated and the resulting button signal returned.
  pub async fn poll(&mut self) -> Option<Button> {
    if !self.powered {
      return None;
    }

    let state = ChipState::from_bits(self.bus.read_register(Reg::State).await);
    #[cfg(feature = "defmt")]
    defmt::trace!("FT5x06: state {:?}", state);
    if !state.is_working() {
      return None;
    }

    let status = self.bus.read_register(Reg::TdStatus).await;
    if status == NO_TOUCH || status == NO_TOUCH_ALT {
      return Some(self.button_up());
    }

    self.pointer.points = status & POINT_COUNT_MASK;
    self.touch = self.read_touch_point().await;
    #[cfg(feature = "defmt")]
    defmt::debug!(
      "FT5x06: points: {} id: {} event: {:?}",
      self.pointer.points,
      self.touch.id,
      self.touch.event
    );

    if self.pointer.points >= 1 && self.touch.id == 0 && self.touch.is_down() {
      self.pointer.x = scale(self.touch.x, self.config.sensor_width, self.config.pointer_max);
      self.pointer.y = scale(self.touch.y, self.config.sensor_height, self.config.pointer_max);
      self.pointer.zoom = Zoom::from_gesture(self.bus.read_register(Reg::GestureId).await);
      Some(self.button_down())
    } else {
      Some(self.button_up())
    }
  }

  async fn read_touch_point(&mut self) -> TouchPoint {
    let xh = self.bus.read_register(Reg::Touch1XHigh).await;
    let xl = self.bus.read_register(Reg::Touch1XLow).await;
    let yh = self.bus.read_register(Reg::Touch1YHigh).await;
    let yl = self.bus.read_register(Reg::Touch1YLow).await;
    TouchPoint::from_registers([xh, xl, yh, yl])
  }

  fn button_down(&mut self) -> Button {
    self.pointer.pressed = true;
    Button::Down
  }

  fn button_up(&mut self) -> Button {
    self.pointer.pressed = false;
    Button::Up
  }
}
