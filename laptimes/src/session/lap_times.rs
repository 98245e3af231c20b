//! Sessions are never stored explicitly. A session is a maximal run of
//! non-empty slots; runs are separated by at least one `EMPTY_LAP_TIME`
//! slot. Every operation below rediscovers that structure by scanning.
//!
//! ```text
//! slot:   0    1    2    3    4    5    6
//! value: 3000 3500  0   4000  0    0    0
//!        '-- s0 --'     's1'  '-- free --'
//! ```

use crate::handle::{EMPTY_LAP_TIME, LapHandle, LapTime};
use crate::session::iter::{Laps, Sessions};
use crate::session::summary::{SessionSummary, Totals};
use crate::store::LapStore;

pub struct LapTimes<S: LapStore> {
    store: S,
}

impl<S: LapStore> LapTimes<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn capacity(&self) -> u16 {
        self.store.capacity()
    }

    fn is_lap(&self, index: u16) -> bool {
        self.store.read(LapHandle(index)) != EMPTY_LAP_TIME
    }

    pub fn totals(&self) -> Totals {
        let capacity = self.capacity();
        let mut sessions = 0u16;
        let mut laps_recorded = 0u16;
        let mut prev_empty = true;

        for i in 0..capacity {
            let occupied = self.is_lap(i);
            if occupied {
                laps_recorded += 1;
                if prev_empty {
                    sessions += 1;
                }
            }
            prev_empty = !occupied;
        }

        Totals {
            sessions,
            laps_recorded,
            laps_remaining: capacity - laps_recorded,
        }
    }

    pub fn clear_all(&mut self) {
        self.store.clear_all();
        tracing::debug!(capacity = self.capacity(), "cleared lap store");
    }

    /// Returns the handle for the first lap of a new session. Nothing is
    /// written, so until `add_lap_time` is called the session cannot be told
    /// apart from free space.
    ///
    /// One empty slot is left after the last recorded lap to separate the new
    /// session from the previous one.
    pub fn create_new_session(&self) -> Option<LapHandle> {
        let capacity = self.capacity();
        let start = match (0..capacity).rev().find(|&i| self.is_lap(i)) {
            None => 0,
            Some(last) => last as u32 + 2,
        };

        if start >= capacity as u32 {
            tracing::warn!(capacity, "no room for a new session");
            return None;
        }
        let handle = LapHandle(start as u16);
        tracing::debug!(?handle, "created session");
        Some(handle)
    }

    /// Records `time` at `handle` and returns where the session's next lap
    /// goes. `None` means the store is exhausted and the session cannot grow.
    ///
    /// `EMPTY_LAP_TIME` is the slot sentinel and is never written here.
    pub fn add_lap_time(&mut self, handle: LapHandle, time: LapTime) -> Option<LapHandle> {
        if time == EMPTY_LAP_TIME {
            tracing::warn!(?handle, "refusing to record a zero lap time");
            return None;
        }

        self.store.write(handle, time);
        tracing::trace!(?handle, time, "recorded lap");

        let next = handle.next().filter(|h| h.0 < self.capacity());
        if next.is_none() {
            tracing::warn!(?handle, "lap store exhausted");
        }
        next
    }

    pub fn move_next(&self, handle: LapHandle) -> Option<LapHandle> {
        handle.next().filter(|h| self.is_lap(h.0))
    }

    pub fn move_previous(&self, handle: LapHandle) -> Option<LapHandle> {
        handle.prev().filter(|h| self.is_lap(h.0))
    }

    fn session_starts(&self) -> impl Iterator<Item = LapHandle> + '_ {
        (0..self.capacity())
            .filter(|&i| self.is_lap(i) && (i == 0 || !self.is_lap(i - 1)))
            .map(LapHandle)
    }

    /// First lap of the `n`th session, counting from zero in slot order.
    pub fn session_handle(&self, n: u16) -> Option<LapHandle> {
        self.session_starts().nth(n as usize)
    }

    /// Summarises the session whose first lap is `handle`. Given any other
    /// lap the summary covers the tail of the session from that lap on.
    pub fn session_summary(&self, handle: LapHandle) -> Option<SessionSummary> {
        let laps: Vec<LapTime> = self.laps(handle).map(|(_, time)| time).collect();
        let end = handle.0 as u32 + laps.len() as u32;

        let next_session = (end..self.capacity() as u32)
            .map(|i| i as u16)
            .find(|&i| self.is_lap(i))
            .map(LapHandle);

        SessionSummary::from_laps(laps, next_session)
    }

    pub fn lap_time(&self, handle: LapHandle) -> LapTime {
        self.store.read(handle)
    }

    /// Raw slot write with no session semantics, for inspection and repair.
    pub fn set_lap_time(&mut self, handle: LapHandle, time: LapTime) {
        self.store.write(handle, time);
    }

    /// Laps of the session run starting at `handle`, in slot order.
    pub fn laps(&self, handle: LapHandle) -> Laps<'_, S> {
        let cursor = (self.lap_time(handle) != EMPTY_LAP_TIME).then_some(handle);
        Laps::new(self, cursor)
    }

    /// Every session with its summary, oldest first.
    pub fn sessions(&self) -> Sessions<'_, S> {
        Sessions::new(self, self.session_handle(0))
    }
}
