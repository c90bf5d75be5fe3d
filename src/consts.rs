/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Reference new moon (year, month, day): 13 October 2015
pub const REFERENCE_NEW_MOON: (u16, u8, u8) = (2015, 10, 13);

/// Length of the synodic month in hundredths of a day (29.53 days)
pub const SYNODIC_MONTH_CENTIDAYS: i64 = 2953;

/// Hundredths of a day per calendar day
pub(crate) const CENTIDAYS_PER_DAY: i64 = 100;

/// Number of discrete phases the cycle is split into
pub const PHASE_COUNT: usize = 8;

/// Number of indicator lamps around the moon disc
pub const MOON_PIN_COUNT: u8 = 4;

/// Number of addressable digital lines on the board
pub const PIN_LINE_COUNT: u8 = 32;

/// Digits on the numeric display
pub const DISPLAY_DIGITS: u8 = 4;

/// Brightest display setting
pub const MAX_BRIGHTNESS: u8 = 7;
