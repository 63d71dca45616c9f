//! Shared application state
//!
//! Every handler receives the same `Arc<AppState>`; the record store is
//! injected here rather than held in a global.

use std::sync::Arc;

use crate::auth::{CredentialStore, JwtConfig, JwtManager};
use crate::config::AppConfig;
use crate::store::{self, InMemoryStore, RecordStore, StoreResult};
use crate::table::{PageLimits, QueryProcessor, TableSchema};

/// State shared across all handlers
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub processor: QueryProcessor,
    pub jwt: JwtManager,
    pub credentials: CredentialStore,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore>,
        processor: QueryProcessor,
        jwt: JwtManager,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            store,
            processor,
            jwt,
            credentials,
        }
    }

    /// Sample listings, built-in accounts, default token settings
    pub fn with_sample_data() -> Self {
        Self::new(
            Arc::new(InMemoryStore::sample()),
            QueryProcessor::default(),
            JwtManager::new(JwtConfig::default()),
            CredentialStore::builtin(),
        )
    }

    /// Build state from configuration, loading the data file if one is set
    pub fn from_config(config: &AppConfig) -> StoreResult<Self> {
        Ok(Self::new(
            store::open(config.data_file.as_deref())?,
            QueryProcessor::with_limits(TableSchema::property_listings(), config.page_limits()),
            JwtManager::new(config.jwt_config()),
            CredentialStore::builtin(),
        ))
    }

    pub fn limits(&self) -> &PageLimits {
        self.processor.limits()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_sample_data()
    }
}
