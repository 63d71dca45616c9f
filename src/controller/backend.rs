//! Where the controller's requests go.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

use crate::store::{RecordStore, StoreError};
use crate::table::{QueryError, QueryProcessor, ResultPage, TableQuery};

/// Result type for table fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Boxed future returned by [`TableBackend::fetch`]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = FetchResult<ResultPage>> + Send + 'a>>;

/// Failed table request as seen by the controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Request parameters were rejected
    #[error("{0}")]
    Rejected(#[from] QueryError),

    /// Backend could not be reached or failed internally
    #[error("{0}")]
    Unavailable(String),
}

impl From<StoreError> for FetchError {
    fn from(err: StoreError) -> Self {
        FetchError::Unavailable(err.to_string())
    }
}

/// Anything that can answer a [`TableQuery`] with a [`ResultPage`]
pub trait TableBackend: Send + Sync {
    fn fetch<'a>(&'a self, query: &'a TableQuery) -> FetchFuture<'a>;
}

/// Backend that runs the query pipeline in-process over a store
pub struct LocalBackend {
    store: Arc<dyn RecordStore>,
    processor: QueryProcessor,
}

impl LocalBackend {
    pub fn new(store: Arc<dyn RecordStore>, processor: QueryProcessor) -> Self {
        Self { store, processor }
    }

    /// Synchronous form of [`TableBackend::fetch`]
    pub fn query(&self, query: &TableQuery) -> FetchResult<ResultPage> {
        let records = self.store.records()?;
        Ok(self.processor.process(&records, query)?)
    }
}

impl TableBackend for LocalBackend {
    fn fetch<'a>(&'a self, query: &'a TableQuery) -> FetchFuture<'a> {
        Box::pin(async move { self.query(query) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn backend() -> LocalBackend {
        LocalBackend::new(Arc::new(InMemoryStore::sample()), QueryProcessor::default())
    }

    #[tokio::test]
    async fn test_local_fetch() {
        let page = backend().fetch(&TableQuery::new()).await.unwrap();
        assert_eq!(page.total, 8);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_local_fetch_rejects_unknown_field() {
        let query = TableQuery::new().with_filter("colour", "blue");
        let err = backend().fetch(&query).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Rejected(QueryError::UnknownField("colour".to_string()))
        );
    }

    #[test]
    fn test_store_failure_is_unavailable() {
        let err: FetchError = StoreError::NotAnObject(3).into();
        assert!(matches!(err, FetchError::Unavailable(_)));
    }
}
