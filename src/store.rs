//! JSON slot store - durable key-value persistence for widget collections
//!
//! Each widget owns one slot; a slot holds the entire collection as a JSON
//! array in a single file. Missing or corrupt data loads as an empty
//! collection, never as an error.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Slot name for the task manager collection
pub const TASKS_SLOT: &str = "tasks";
/// Slot name for the expense tracker collection
pub const TRANSACTIONS_SLOT: &str = "transactions";

/// Persistence adapter backed by one JSON file per slot
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    /// Open the store at the default data directory
    pub fn open() -> Result<Self> {
        let base_dir = crate::config::data_dir()?.join("widgets");
        Self::with_dir(base_dir)
    }

    /// Open the store at a custom base directory
    pub fn with_dir(base_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&base_dir)
            .context("Failed to create widget data directory")?;
        Ok(Self { base_dir })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", slot))
    }

    /// Load the collection stored under `slot`.
    ///
    /// A missing file or unparsable content yields an empty collection;
    /// a parse failure is traced but never propagated.
    pub fn load<T: DeserializeOwned>(&self, slot: &str) -> Vec<T> {
        let path = self.slot_path(slot);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                debug!("Discarding unparsable slot '{}': {}", slot, e);
                Vec::new()
            }
        }
    }

    /// Write the full collection under `slot`, replacing any prior value.
    pub fn save<T: Serialize>(&self, slot: &str, records: &[T]) -> Result<()> {
        let contents = serde_json::to_string(records)
            .with_context(|| format!("Failed to serialize slot '{}'", slot))?;
        std::fs::write(self.slot_path(slot), contents)
            .with_context(|| format!("Failed to write slot '{}'", slot))?;
        Ok(())
    }
}
