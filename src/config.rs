use serde::{Deserialize, Serialize};

use crate::{DISPLAY_DIGITS, MAX_BRIGHTNESS, MOON_PIN_COUNT, PIN_LINE_COUNT};

/// Wiring and display settings for one calendar board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Line driving lamp 0; the other lamps follow on consecutive lines
    pub first_moon_pin: u8,
    pub brightness: u8,
    /// Digits used for the date, counted from `display_position`
    pub display_length: u8,
    pub display_position: u8,
    pub leading_zero: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            first_moon_pin: 2,
            brightness: MAX_BRIGHTNESS,
            display_length: DISPLAY_DIGITS,
            display_position: 0,
            leading_zero: false,
        }
    }
}

/// Error type for board settings that the hardware cannot honour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Moon pins starting at line {first} exceed the {lines} available lines", lines = PIN_LINE_COUNT)]
    MoonPinsOutOfRange { first: u8 },

    #[error("Invalid brightness: {0} (must be 0-{max})", max = MAX_BRIGHTNESS)]
    InvalidBrightness(u8),

    #[error("Display window of {length} digit(s) at position {position} does not fit {digits} digits", digits = DISPLAY_DIGITS)]
    InvalidDisplayWindow { length: u8, position: u8 },
}

impl BoardConfig {
    /// Pin driving lamp `lamp`
    pub const fn moon_pin(&self, lamp: u8) -> u8 {
        self.first_moon_pin.saturating_add(lamp)
    }

    /// Checks the settings against the board limits.
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if u16::from(self.first_moon_pin) + u16::from(MOON_PIN_COUNT) > u16::from(PIN_LINE_COUNT) {
            return Err(ConfigError::MoonPinsOutOfRange {
                first: self.first_moon_pin,
            });
        }

        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::InvalidBrightness(self.brightness));
        }

        if self.display_length == 0
            || u16::from(self.display_length) + u16::from(self.display_position)
                > u16::from(DISPLAY_DIGITS)
        {
            return Err(ConfigError::InvalidDisplayWindow {
                length: self.display_length,
                position: self.display_position,
            });
        }

        Ok(())
    }
}
