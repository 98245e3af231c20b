use std::fmt;

use crate::handle::LapTime;

const MILLIS_PER_TICK: u32 = 10;
const TICKS_PER_SECOND: u16 = 100;
const TICKS_PER_MINUTE: u16 = 60 * TICKS_PER_SECOND;

/// Converts milliseconds to centiseconds, clamped to `1..=65535`.
///
/// Durations under 10ms are promoted to 1 because 0 is the empty-slot
/// sentinel and cannot be stored as a lap.
pub fn convert_millis_to_lap_time(millis: u32) -> LapTime {
    (millis / MILLIS_PER_TICK).clamp(1, LapTime::MAX as u32) as LapTime
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// `m:ss`
    Seconds,
    /// `m:ss:dd`
    Hundredths,
}

/// `Display` adapter for a lap time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattedTime {
    pub time: LapTime,
    pub precision: Precision,
}

impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_time(f, self.time, self.precision)
    }
}

pub fn write_time<W: fmt::Write + ?Sized>(
    out: &mut W,
    time: LapTime,
    precision: Precision,
) -> fmt::Result {
    let minutes = time / TICKS_PER_MINUTE;
    let seconds = (time / TICKS_PER_SECOND) % 60;
    write!(out, "{}:{:02}", minutes, seconds)?;
    if precision == Precision::Hundredths {
        write!(out, ":{:02}", time % TICKS_PER_SECOND)?;
    }
    Ok(())
}

pub fn format_time(time: LapTime, precision: Precision) -> String {
    FormattedTime { time, precision }.to_string()
}
