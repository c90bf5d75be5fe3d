use serde::{Deserialize, Serialize};

use crate::consts::CENTIDAYS_PER_DAY;
use crate::{
    Date, PHASE_COUNT, REFERENCE_NEW_MOON, SYNODIC_MONTH_CENTIDAYS, days_in_month, prelude::*,
};

/// One of the eight discrete phases of the lunar cycle, in cyclic order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    #[display(fmt = "New moon")]
    New,
    #[display(fmt = "Waxing crescent")]
    WaxingCrescent,
    #[display(fmt = "First quarter")]
    FirstQuarter,
    #[display(fmt = "Waxing gibbous")]
    WaxingGibbous,
    #[display(fmt = "Full moon")]
    Full,
    #[display(fmt = "Waning gibbous")]
    WaningGibbous,
    #[display(fmt = "Third quarter")]
    ThirdQuarter,
    #[display(fmt = "Waning crescent")]
    WaningCrescent,
}

impl MoonPhase {
    /// All phases, starting at the new moon
    pub const ALL: [Self; PHASE_COUNT] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::ThirdQuarter,
        Self::WaningCrescent,
    ];

    /// Console rendering of the disc, lit quarters drawn as `|` and the limb as `(` / `)`
    const GLYPHS: [&'static str; PHASE_COUNT] = [
        "....", "...)", "..|)", ".||)", "(||)", "(||.", "(|..", "(...",
    ];

    /// Position in the cycle, `0` for `New` through `7` for `WaningCrescent`
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Phase at the given position, wrapping around the cycle
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % PHASE_COUNT]
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn previous(self) -> Self {
        Self::from_index(self.index() + PHASE_COUNT - 1)
    }

    pub const fn glyph(self) -> &'static str {
        Self::GLYPHS[self.index()]
    }
}

/// Days elapsed since 0001-01-01 in the proleptic Gregorian calendar.
pub fn day_number(date: Date) -> i64 {
    civil_day_number(date.year(), date.month(), date.day())
}

fn civil_day_number(year: u16, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - 1;
    let before_month: i64 = (1..month)
        .map(|m| i64::from(days_in_month(year, m)))
        .sum();
    y * 365 + y / 4 - y / 100 + y / 400 + before_month + i64::from(day) - 1
}

/// Phase of the moon on the given date.
///
/// The age of the moon is the time since [`REFERENCE_NEW_MOON`] modulo the
/// synodic month, counted in hundredths of a day. Each phase owns one eighth
/// of the cycle centred on it, so the new moon bucket spans the last and
/// first sixteenth of the cycle.
pub fn moon_phase(date: Date) -> MoonPhase {
    let (year, month, day) = REFERENCE_NEW_MOON;
    let elapsed = (day_number(date) - civil_day_number(year, month, day)) * CENTIDAYS_PER_DAY;
    let age = elapsed.rem_euclid(SYNODIC_MONTH_CENTIDAYS);

    let eighths = (age * PHASE_COUNT as i64 + SYNODIC_MONTH_CENTIDAYS / 2) / SYNODIC_MONTH_CENTIDAYS;
    MoonPhase::from_index(eighths as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    #[test]
    fn test_calibration_points() {
        assert_eq!(moon_phase(date(2015, 10, 13)), MoonPhase::New);
        assert_eq!(moon_phase(date(2015, 10, 20)), MoonPhase::FirstQuarter);
        assert_eq!(moon_phase(date(2015, 10, 27)), MoonPhase::Full);
        assert_eq!(moon_phase(date(2015, 11, 3)), MoonPhase::ThirdQuarter);
    }

    #[test]
    fn test_following_cycle() {
        assert_eq!(moon_phase(date(2015, 11, 11)), MoonPhase::New);
        assert_eq!(moon_phase(date(2015, 11, 25)), MoonPhase::Full);
    }

    #[test]
    fn test_dates_before_reference() {
        assert_eq!(moon_phase(date(2015, 9, 28)), MoonPhase::Full);
        assert_eq!(moon_phase(date(2015, 9, 13)), MoonPhase::New);
    }

    #[test]
    fn test_day_after_calibration_points() {
        assert_eq!(moon_phase(date(2015, 10, 14)), MoonPhase::New);
        assert_eq!(moon_phase(date(2015, 10, 21)), MoonPhase::FirstQuarter);
        assert_eq!(moon_phase(date(2015, 10, 28)), MoonPhase::Full);
        assert_eq!(moon_phase(date(2015, 11, 4)), MoonPhase::ThirdQuarter);
    }

    #[test]
    fn test_phases_advance_without_skipping() {
        let mut day = date(2015, 10, 13);
        let mut seen = [false; PHASE_COUNT];
        for _ in 0..30 {
            let phase = moon_phase(day);
            let next = moon_phase(day.next());
            assert!(
                next == phase || next == phase.next(),
                "{day}: {phase} followed by {next}"
            );
            seen[phase.index()] = true;
            day = day.next();
        }
        assert!(seen.iter().all(|&s| s), "every phase appears in one cycle");
    }

    #[test]
    fn test_day_number() {
        assert_eq!(day_number(Date::MIN), 0);
        assert_eq!(day_number(date(1, 12, 31)), 364);
        assert_eq!(day_number(date(2, 1, 1)), 365);
        assert_eq!(
            day_number(date(2016, 1, 1)) - day_number(date(2015, 1, 1)),
            365
        );
        assert_eq!(
            day_number(date(2017, 1, 1)) - day_number(date(2016, 1, 1)),
            366
        );
        // 1970-01-01 is 719162 days after 0001-01-01
        assert_eq!(day_number(date(1970, 1, 1)), 719_162);
    }

    #[test]
    fn test_index_round_trip_and_wrap() {
        for (i, phase) in MoonPhase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
            assert_eq!(MoonPhase::from_index(i), *phase);
        }
        assert_eq!(MoonPhase::from_index(8), MoonPhase::New);
        assert_eq!(MoonPhase::WaningCrescent.next(), MoonPhase::New);
        assert_eq!(MoonPhase::New.previous(), MoonPhase::WaningCrescent);
    }

    #[test]
    fn test_glyphs() {
        let glyphs: Vec<&str> = MoonPhase::ALL.iter().map(|p| p.glyph()).collect();
        assert_eq!(
            glyphs,
            ["....", "...)", "..|)", ".||)", "(||)", "(||.", "(|..", "(..."]
        );
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(MoonPhase::FirstQuarter.to_string(), "First quarter");
        assert_eq!(
            serde_json::to_string(&MoonPhase::WaningGibbous).unwrap(),
            r#""waning_gibbous""#
        );
        let parsed: MoonPhase = serde_json::from_str(r#""full""#).unwrap();
        assert_eq!(parsed, MoonPhase::Full);
    }
}
