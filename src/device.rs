//! Hardware seams for the calendar: a four digit numeric display and a bank
//! of digital output lines. Writes are fire-and-forget; a driver that can
//! fail is expected to deal with it on its own side.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Direction of a digital line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinMode {
    #[default]
    #[display(fmt = "input")]
    Input,
    #[display(fmt = "output")]
    Output,
}

/// A seven-segment style display showing a decimal number.
pub trait NumericDisplay {
    /// Brightness level, `0..=MAX_BRIGHTNESS`
    fn set_brightness(&mut self, level: u8);

    /// Shows `value` on `length` digits starting at digit `position` (0 is leftmost).
    fn show_number_dec(&mut self, value: u16, leading_zero: bool, length: u8, position: u8);
}

/// Numbered digital lines that can be driven high or low.
pub trait DigitalOutput {
    fn set_mode(&mut self, pin: u8, mode: PinMode);

    fn write(&mut self, pin: u8, level: bool);
}

impl<T: NumericDisplay + ?Sized> NumericDisplay for &mut T {
    fn set_brightness(&mut self, level: u8) {
        (**self).set_brightness(level);
    }

    fn show_number_dec(&mut self, value: u16, leading_zero: bool, length: u8, position: u8) {
        (**self).show_number_dec(value, leading_zero, length, position);
    }
}

impl<T: DigitalOutput + ?Sized> DigitalOutput for &mut T {
    fn set_mode(&mut self, pin: u8, mode: PinMode) {
        (**self).set_mode(pin, mode);
    }

    fn write(&mut self, pin: u8, level: bool) {
        (**self).write(pin, level);
    }
}
