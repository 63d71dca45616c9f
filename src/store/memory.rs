//! In-memory record store

use std::sync::Arc;

use super::errors::StoreResult;
use super::sample;
use super::RecordStore;
use crate::table::Record;

/// Immutable records held in memory
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: Arc<[Record]>,
}

impl InMemoryStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Store holding the sample property listings
    pub fn sample() -> Self {
        Self::new(sample::property_listings())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RecordStore for InMemoryStore {
    fn records(&self) -> StoreResult<Arc<[Record]>> {
        Ok(Arc::clone(&self.records))
    }
}
