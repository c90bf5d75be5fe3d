use crate::{
    BoardConfig, ConfigError, Date, DigitalOutput, MOON_PIN_COUNT, MoonPhase, NumericDisplay,
    PinMode, moon_phase, next_date, to_display_code, to_pin_pattern,
};

/// The calendar board: a date display and a ring of moon lamps.
///
/// Owns its collaborators for the lifetime of the board. The current date is
/// not stored here; the driving loop passes it in and keeps the returned one.
#[derive(Debug)]
pub struct MoonCalendar<D, P> {
    display: D,
    pins: P,
    config: BoardConfig,
}

impl<D, P> MoonCalendar<D, P>
where
    D: NumericDisplay,
    P: DigitalOutput,
{
    /// Sets up the board: display brightness and the moon lines as outputs.
    ///
    /// # Errors
    /// Returns `ConfigError` if `config` does not fit the hardware; nothing is
    /// written to the collaborators in that case.
    pub fn new(mut display: D, mut pins: P, config: BoardConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.validate() {
            #[cfg(feature = "log")]
            log::warn!("Rejecting board configuration: {err}");
            return Err(err);
        }

        display.set_brightness(config.brightness);
        for lamp in 0..MOON_PIN_COUNT {
            pins.set_mode(config.moon_pin(lamp), PinMode::Output);
        }

        Ok(Self {
            display,
            pins,
            config,
        })
    }

    /// Shows `date` and its moon phase, returning the phase shown.
    pub fn render(&mut self, date: Date) -> MoonPhase {
        render_day(date, &mut self.display, &mut self.pins, &self.config)
    }

    /// One daily cycle: shows `current` with its moon phase and returns the
    /// following day for the next tick.
    ///
    /// The board shows the date passed in, not the returned one: a call with
    /// 13 October 2015 displays `1310` and returns 14 October. The driving loop
    /// hands the returned date back on the next tick.
    pub fn advance_and_render(&mut self, current: Date) -> Date {
        self.render(current);
        next_date(current)
    }

    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub const fn display(&self) -> &D {
        &self.display
    }

    pub const fn pins(&self) -> &P {
        &self.pins
    }

    pub fn into_parts(self) -> (D, P) {
        (self.display, self.pins)
    }
}

/// [`MoonCalendar::advance_and_render`] on borrowed collaborators: shows
/// `current` and returns the day after it.
/// `config` is expected to have passed [`BoardConfig::validate`].
pub fn advance_and_render<D, P>(
    current: Date,
    display: &mut D,
    pins: &mut P,
    config: &BoardConfig,
) -> Date
where
    D: NumericDisplay + ?Sized,
    P: DigitalOutput + ?Sized,
{
    render_day(current, display, pins, config);
    next_date(current)
}

fn render_day<D, P>(date: Date, display: &mut D, pins: &mut P, config: &BoardConfig) -> MoonPhase
where
    D: NumericDisplay + ?Sized,
    P: DigitalOutput + ?Sized,
{
    let phase = moon_phase(date);
    let code = to_display_code(date);
    let pattern = to_pin_pattern(phase);

    #[cfg(feature = "log")]
    log::debug!("{date}: showing {code}, {phase} ({pattern})");

    display.show_number_dec(
        code.get(),
        config.leading_zero,
        config.display_length,
        config.display_position,
    );

    for (lamp, lit) in pattern.lamps() {
        let pin = config.moon_pin(lamp);
        #[cfg(feature = "log")]
        log::trace!("pin {pin} <- {lit}");
        pins.write(pin, lit);
    }

    phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{DisplayWrite, RecordingDisplay, SimulatedPins};

    fn date(year: u16, month: u8, day: u8) -> Date {
        Date::new(year, month, day).unwrap()
    }

    fn board() -> MoonCalendar<RecordingDisplay, SimulatedPins> {
        MoonCalendar::new(
            RecordingDisplay::default(),
            SimulatedPins::default(),
            BoardConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_setup_configures_board() {
        let calendar = board();
        assert_eq!(calendar.display().brightness(), Some(7));
        for pin in 2..6 {
            assert_eq!(calendar.pins().mode(pin), PinMode::Output, "pin {pin}");
        }
        assert_eq!(calendar.pins().mode(1), PinMode::Input);
        assert_eq!(calendar.pins().mode(6), PinMode::Input);
        assert!(calendar.display().writes().is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut display = RecordingDisplay::default();
        let mut pins = SimulatedPins::default();
        let config = BoardConfig {
            brightness: 12,
            ..BoardConfig::default()
        };

        let result = MoonCalendar::new(&mut display, &mut pins, config);
        assert_eq!(result.err(), Some(ConfigError::InvalidBrightness(12)));
        assert_eq!(display.brightness(), None);
        assert_eq!(pins.modes(), 0);
    }

    #[test]
    fn test_advance_renders_once() {
        let mut calendar = board();
        let next = calendar.advance_and_render(date(2015, 10, 20));

        assert_eq!(next, date(2015, 10, 21));
        assert_eq!(
            calendar.display().writes(),
            [DisplayWrite {
                value: 2010,
                leading_zero: false,
                length: 4,
                position: 0,
            }]
        );
        assert_eq!(calendar.pins().levels_from(2), 0b0011);
    }

    #[test]
    fn test_stepping_back_with_render() {
        let mut calendar = board();
        let previous = crate::prev_date(date(2015, 10, 28));
        calendar.render(previous);

        assert_eq!(previous, date(2015, 10, 27));
        assert_eq!(calendar.display().last_value(), Some(2710));
        assert_eq!(calendar.pins().levels_from(2), 0b1111);
    }

    #[test]
    fn test_render_overwrites_previous_lamps() {
        let mut calendar = board();
        calendar.render(date(2015, 10, 27));
        assert_eq!(calendar.pins().levels_from(2), 0b1111);

        let phase = calendar.render(date(2015, 11, 3));
        assert_eq!(phase, MoonPhase::ThirdQuarter);
        assert_eq!(calendar.pins().levels_from(2), 0b1100);
        assert_eq!(calendar.display().writes().len(), 2);
    }

    #[test]
    fn test_configured_display_window() {
        let config = BoardConfig {
            first_moon_pin: 8,
            leading_zero: true,
            display_length: 4,
            display_position: 0,
            ..BoardConfig::default()
        };
        let mut calendar =
            MoonCalendar::new(RecordingDisplay::default(), SimulatedPins::default(), config)
                .unwrap();
        let next = calendar.advance_and_render(date(2016, 1, 1));
        assert_eq!(next, date(2016, 1, 2));

        let (display, pins) = calendar.into_parts();
        assert_eq!(
            display.writes(),
            [DisplayWrite {
                value: 101,
                leading_zero: true,
                length: 4,
                position: 0,
            }]
        );
        assert_eq!(pins.levels_from(8) & 0b1111, 0b1100);
        assert_eq!(pins.levels() & 0b1111_1100, 0, "default moon pins untouched");
    }

    #[test]
    fn test_free_function_uses_borrowed_collaborators() {
        let config = BoardConfig::default();
        let mut display = RecordingDisplay::default();
        let mut pins = SimulatedPins::default();

        let next = advance_and_render(date(2015, 10, 13), &mut display, &mut pins, &config);

        assert_eq!(next, date(2015, 10, 14));
        assert_eq!(display.last_value(), Some(1310));
        assert_eq!(pins.levels_from(config.first_moon_pin), 0b0000);
    }
}
