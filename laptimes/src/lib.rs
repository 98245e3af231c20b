pub mod config;
pub mod error;
pub mod handle;
pub mod session;
pub mod store;
pub mod time;

pub use error::LapStoreError;
pub use handle::{EMPTY_LAP_TIME, LapHandle, LapTime};
pub use session::{LapTimes, SessionSummary, Totals};
pub use store::{ImageLapStore, LapStore, MemoryLapStore};
