pub mod iter;
pub mod lap_times;
pub mod summary;

pub use lap_times::LapTimes;
pub use summary::{SessionSummary, Totals};
