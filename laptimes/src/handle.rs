use std::fmt;

/// Stored lap duration in centiseconds. `EMPTY_LAP_TIME` marks an unused slot.
pub type LapTime = u16;

pub const EMPTY_LAP_TIME: LapTime = 0;

#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct LapHandle(pub u16);

impl LapHandle {
    pub const INVALID: LapHandle = LapHandle(0xFFFF);

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Maps the raw sentinel encoding onto `Option`, `0xFFFF` becoming `None`.
    pub fn from_raw(raw: u16) -> Option<Self> {
        let handle = Self(raw);
        handle.is_valid().then_some(handle)
    }

    pub fn into_raw(handle: Option<Self>) -> u16 {
        handle.unwrap_or(Self::INVALID).0
    }

    pub(crate) fn next(self) -> Option<Self> {
        self.0.checked_add(1).and_then(Self::from_raw)
    }

    pub(crate) fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Debug for LapHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "LapHandle({})", self.0)
        } else {
            write!(f, "LapHandle(INVALID)")
        }
    }
}
