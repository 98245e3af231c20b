use crate::handle::{LapHandle, LapTime};
use crate::session::lap_times::LapTimes;
use crate::session::summary::SessionSummary;
use crate::store::LapStore;

pub struct Laps<'a, S: LapStore> {
    lap_times: &'a LapTimes<S>,
    cursor: Option<LapHandle>,
}

impl<'a, S: LapStore> Laps<'a, S> {
    pub(crate) fn new(lap_times: &'a LapTimes<S>, cursor: Option<LapHandle>) -> Self {
        Self { lap_times, cursor }
    }
}

impl<S: LapStore> Iterator for Laps<'_, S> {
    type Item = (LapHandle, LapTime);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        self.cursor = self.lap_times.move_next(handle);
        Some((handle, self.lap_times.lap_time(handle)))
    }
}

/// Walks sessions by following each summary's `next_session` handle.
pub struct Sessions<'a, S: LapStore> {
    lap_times: &'a LapTimes<S>,
    cursor: Option<LapHandle>,
}

impl<'a, S: LapStore> Sessions<'a, S> {
    pub(crate) fn new(lap_times: &'a LapTimes<S>, cursor: Option<LapHandle>) -> Self {
        Self { lap_times, cursor }
    }
}

impl<S: LapStore> Iterator for Sessions<'_, S> {
    type Item = (LapHandle, SessionSummary);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor.take()?;
        let summary = self.lap_times.session_summary(handle)?;
        self.cursor = summary.next_session;
        Some((handle, summary))
    }
}
