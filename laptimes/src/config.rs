//! Store configuration, loaded from a JSON file with environment overrides.
//!
//! Environment variables:
//! - `LAPTIMES_CAPACITY`: number of lap slots
//! - `LAPTIMES_MEDIUM`: `memory` or `image`

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

use crate::error::LapStoreError;
use crate::handle::LapHandle;
use crate::store::{ImageLapStore, LapStore, MemoryLapStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Memory,
    Image,
}

impl FromStr for Medium {
    type Err = LapStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Medium::Memory),
            "image" => Ok(Medium::Image),
            _ => Err(LapStoreError::UnknownMedium(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_capacity")]
    pub capacity: u16,
    #[serde(default = "default_medium")]
    pub medium: Medium,
}

fn default_capacity() -> u16 {
    MemoryLapStore::DEFAULT_CAPACITY
}

fn default_medium() -> Medium {
    Medium::Memory
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            medium: default_medium(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Reads a JSON config file, then applies environment overrides.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading config {:?}", path))?;
        let cfg: StoreConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing config {:?}", path))?;
        tracing::debug!(?path, ?cfg, "loaded lap store config");
        cfg.with_env_overrides()
    }

    fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        if let Some(capacity) = lookup("LAPTIMES_CAPACITY") {
            self.capacity = capacity
                .parse()
                .with_context(|| format!("LAPTIMES_CAPACITY={:?}", capacity))?;
        }
        if let Some(medium) = lookup("LAPTIMES_MEDIUM") {
            self.medium = medium.parse()?;
        }
        Ok(self)
    }

    /// Opens a blank store of the configured medium and capacity.
    pub fn open(&self) -> Result<Box<dyn LapStore>, LapStoreError> {
        Ok(match self.medium {
            Medium::Memory => Box::new(MemoryLapStore::new(self.capacity)?),
            Medium::Image => Box::new(ImageLapStore::new(self.capacity)?),
        })
    }

    /// Reopens a store from a saved slot image. The image must hold exactly
    /// `capacity` slots.
    pub fn restore(&self, image: &[u8]) -> Result<Box<dyn LapStore>, LapStoreError> {
        let saved = ImageLapStore::from_image(image)?;
        if saved.capacity() != self.capacity {
            return Err(LapStoreError::CapacityMismatch {
                expected: self.capacity,
                found: saved.capacity(),
            });
        }
        Ok(match self.medium {
            Medium::Image => Box::new(saved),
            Medium::Memory => {
                let mut store = MemoryLapStore::new(self.capacity)?;
                for i in 0..self.capacity {
                    store.write(LapHandle(i), saved.read(LapHandle(i)));
                }
                Box::new(store)
            }
        })
    }
}
