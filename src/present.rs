use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Date, MOON_PIN_COUNT, MoonPhase, PHASE_COUNT, prelude::*};

/// Day and month packed for a four digit display: `day * 100 + month`.
/// 31 December shows as `3112`, 1 January as `101`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DisplayCode(u16);

impl DisplayCode {
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }
}

/// Lamp pattern for the moon disc, one bit per lamp, bit 0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinPattern(u8);

impl PinPattern {
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether lamp `index` is lit
    pub const fn bit(self, index: u8) -> bool {
        index < u8::BITS as u8 && self.0 & (1 << index) != 0
    }

    /// `(lamp index, lit)` for every lamp on the disc
    pub fn lamps(self) -> impl Iterator<Item = (u8, bool)> {
        (0..MOON_PIN_COUNT).map(move |i| (i, self.bit(i)))
    }
}

impl fmt::Display for PinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06b}", self.0)
    }
}

impl fmt::Binary for PinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// Lamps fill from one side up to the full moon, then empty from the same side.
const PIN_PATTERNS: [u8; PHASE_COUNT] = [
    0b0000, // New
    0b0001, // WaxingCrescent
    0b0011, // FirstQuarter
    0b0111, // WaxingGibbous
    0b1111, // Full
    0b1110, // WaningGibbous
    0b1100, // ThirdQuarter
    0b1000, // WaningCrescent
];

pub fn to_display_code(date: Date) -> DisplayCode {
    DisplayCode(u16::from(date.day()) * 100 + u16::from(date.month()))
}

pub const fn to_pin_pattern(phase: MoonPhase) -> PinPattern {
    PinPattern(PIN_PATTERNS[phase.index()])
}
