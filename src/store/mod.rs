//! # Record Store
//!
//! Supplies the full record collection to the table pipeline.
//!
//! Stores are read-only after construction. Handlers receive a store
//! through router state; there is no process-wide dataset.

mod errors;
mod file;
mod memory;
pub mod sample;

use std::path::Path;
use std::sync::Arc;

use crate::table::Record;

pub use errors::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;

/// Source of "all current records"
pub trait RecordStore: Send + Sync {
    /// Return every record, in storage order
    fn records(&self) -> StoreResult<Arc<[Record]>>;

    /// Number of records currently held
    fn len(&self) -> StoreResult<usize> {
        Ok(self.records()?.len())
    }

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Open the configured store: the JSON file at `path`, or the sample
/// listings when no file is configured
pub fn open(path: Option<&Path>) -> StoreResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match path {
        Some(path) => Arc::new(JsonFileStore::load(path)?),
        None => Arc::new(InMemoryStore::sample()),
    };
    Ok(store)
}
