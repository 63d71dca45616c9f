//! JSON file record store
//!
//! Loads a JSON array of objects once, at startup.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::errors::{StoreError, StoreResult};
use super::RecordStore;
use crate::table::Record;

/// Records loaded from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    records: Arc<[Record]>,
}

impl JsonFileStore {
    /// Read and parse the file
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;

        let items = match value {
            Value::Array(items) => items,
            _ => return Err(StoreError::NotAnArray(path)),
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Record::from_value(item).ok_or(StoreError::NotAnObject(index)))
            .collect::<StoreResult<Vec<_>>>()?;

        info!(path = %path.display(), records = records.len(), "loaded record file");

        Ok(Self {
            path,
            records: records.into(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn records(&self) -> StoreResult<Arc<[Record]>> {
        Ok(Arc::clone(&self.records))
    }
}
