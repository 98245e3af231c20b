use crate::error::LapStoreError;
use crate::handle::{EMPTY_LAP_TIME, LapHandle, LapTime};
use crate::store::lap_store::LapStore;

/// Lap store held entirely in RAM. Laps are lost when it is dropped.
#[derive(Clone, Debug)]
pub struct MemoryLapStore {
    slots: Box<[LapTime]>,
}

impl MemoryLapStore {
    pub const DEFAULT_CAPACITY: u16 = 100;

    pub fn new(capacity: u16) -> Result<Self, LapStoreError> {
        if capacity == 0 {
            return Err(LapStoreError::ZeroCapacity);
        }
        Ok(Self {
            slots: vec![EMPTY_LAP_TIME; capacity as usize].into_boxed_slice(),
        })
    }
}

impl Default for MemoryLapStore {
    fn default() -> Self {
        Self {
            slots: vec![EMPTY_LAP_TIME; Self::DEFAULT_CAPACITY as usize].into_boxed_slice(),
        }
    }
}

impl LapStore for MemoryLapStore {
    fn read(&self, handle: LapHandle) -> LapTime {
        self.slots
            .get(handle.index())
            .copied()
            .unwrap_or(EMPTY_LAP_TIME)
    }

    fn write(&mut self, handle: LapHandle, time: LapTime) {
        match self.slots.get_mut(handle.index()) {
            Some(slot) => *slot = time,
            None => tracing::warn!(?handle, "ignoring write past end of lap store"),
        }
    }

    fn clear_all(&mut self) {
        self.slots.fill(EMPTY_LAP_TIME);
    }

    fn capacity(&self) -> u16 {
        self.slots.len() as u16
    }
}
