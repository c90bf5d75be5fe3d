//! In-memory stand-ins for the board hardware, for host-side tests.
//!
//! Each value owns its own state, so every test starts from a clean board.

use crate::{DigitalOutput, NumericDisplay, PIN_LINE_COUNT, PinMode};

/// Direction and level registers for `PIN_LINE_COUNT` digital lines.
/// All lines start as low inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedPins {
    direction: u32,
    value: u32,
}

impl SimulatedPins {
    /// Level last written to `pin`; lines past the board read low
    pub const fn read(&self, pin: u8) -> bool {
        match mask(pin) {
            Some(bit) => self.value & bit != 0,
            None => false,
        }
    }

    pub const fn mode(&self, pin: u8) -> PinMode {
        match mask(pin) {
            Some(bit) if self.direction & bit != 0 => PinMode::Output,
            _ => PinMode::Input,
        }
    }

    /// Direction register, one bit per line, set for outputs
    pub const fn modes(&self) -> u32 {
        self.direction
    }

    /// Level register, one bit per line
    pub const fn levels(&self) -> u32 {
        self.value
    }

    /// Level register shifted so that line `first` is bit 0
    pub const fn levels_from(&self, first: u8) -> u32 {
        match self.value.checked_shr(first as u32) {
            Some(levels) => levels,
            None => 0,
        }
    }
}

const fn mask(pin: u8) -> Option<u32> {
    if pin < PIN_LINE_COUNT {
        Some(1 << pin)
    } else {
        None
    }
}

const fn set_bit(register: u32, bit: u32, on: bool) -> u32 {
    if on { register | bit } else { register & !bit }
}

impl DigitalOutput for SimulatedPins {
    fn set_mode(&mut self, pin: u8, mode: PinMode) {
        if let Some(bit) = mask(pin) {
            self.direction = set_bit(self.direction, bit, mode == PinMode::Output);
        }
    }

    fn write(&mut self, pin: u8, level: bool) {
        if let Some(bit) = mask(pin) {
            self.value = set_bit(self.value, bit, level);
        }
    }
}

/// One `show_number_dec` call as received by [`RecordingDisplay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWrite {
    pub value: u16,
    pub leading_zero: bool,
    pub length: u8,
    pub position: u8,
}

/// A numeric display that remembers everything it was asked to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    brightness: Option<u8>,
    writes: Vec<DisplayWrite>,
}

impl RecordingDisplay {
    pub const fn brightness(&self) -> Option<u8> {
        self.brightness
    }

    pub fn writes(&self) -> &[DisplayWrite] {
        &self.writes
    }

    pub fn last_value(&self) -> Option<u16> {
        self.writes.last().map(|write| write.value)
    }
}

impl NumericDisplay for RecordingDisplay {
    fn set_brightness(&mut self, level: u8) {
        self.brightness = Some(level);
    }

    fn show_number_dec(&mut self, value: u16, leading_zero: bool, length: u8, position: u8) {
        self.writes.push(DisplayWrite {
            value,
            leading_zero,
            length,
            position,
        });
    }
}
