use serde::{Deserialize, Serialize};

use crate::handle::{LapHandle, LapTime};

/// Store-wide counts derived from one scan of every slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub sessions: u16,
    pub laps_recorded: u16,
    pub laps_remaining: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Integer mean of the session's laps.
    pub average: LapTime,
    /// Fastest lap, i.e. the smallest stored time.
    pub best: LapTime,
    pub lap_count: u16,
    pub total_time: u32,
    /// First lap of the following session, if one exists.
    pub next_session: Option<LapHandle>,
}

impl SessionSummary {
    pub(crate) fn from_laps(
        laps: impl IntoIterator<Item = LapTime>,
        next_session: Option<LapHandle>,
    ) -> Option<Self> {
        let mut lap_count = 0u16;
        let mut total_time = 0u32;
        let mut best = LapTime::MAX;
        for lap in laps {
            lap_count += 1;
            total_time += lap as u32;
            best = best.min(lap);
        }
        if lap_count == 0 {
            return None;
        }
        Some(Self {
            average: (total_time / lap_count as u32) as LapTime,
            best,
            lap_count,
            total_time,
            next_session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_from_laps() {
        let summary = SessionSummary::from_laps([300, 250, 400], None).unwrap();
        assert_eq!(summary.lap_count, 3);
        assert_eq!(summary.total_time, 950);
        assert_eq!(summary.best, 250);
        assert_eq!(summary.average, 316);
        assert_eq!(summary.next_session, None);
    }

    #[test]
    fn summary_without_laps() {
        assert!(SessionSummary::from_laps([], Some(LapHandle(3))).is_none());
    }

    #[test]
    fn summary_total_exceeds_lap_range() {
        let summary = SessionSummary::from_laps([u16::MAX; 4], None).unwrap();
        assert_eq!(summary.total_time, 4 * u16::MAX as u32);
        assert_eq!(summary.average, u16::MAX);
        assert_eq!(summary.best, u16::MAX);
    }
}
