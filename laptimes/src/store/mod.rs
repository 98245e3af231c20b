pub mod image;
pub mod lap_store;
pub mod memory;

pub use image::{ImageLapStore, encode_image};
pub use lap_store::LapStore;
pub use memory::MemoryLapStore;
