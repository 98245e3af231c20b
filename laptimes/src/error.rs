#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LapStoreError {
    #[error("lap store capacity must be at least one slot")]
    ZeroCapacity,
    #[error("lap image of {0} bytes is not a whole number of slots (max 65535)")]
    ImageLength(usize),
    #[error("lap image holds {found} slots, expected {expected}")]
    CapacityMismatch { expected: u16, found: u16 },
    #[error("unknown storage medium {0:?}")]
    UnknownMedium(String),
}
