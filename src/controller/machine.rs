//! Stateful table controller.

use tracing::debug;

use super::backend::{FetchError, FetchResult, TableBackend};
use super::events::{transition, TableEvent, TransitionError};
use super::view::{SortIndicator, TableView};
use crate::table::{ResultPage, TableQuery, TableSchema};

/// A request the caller must send to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub seq: u64,
    pub query: TableQuery,
}

/// Outcome of handing a response back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Response belonged to the latest request and updated the state
    Applied,
    /// A newer request was issued since; the response was dropped
    Stale,
}

/// Lifecycle of the most recent request
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// No request issued yet
    Idle,
    Loading,
    Loaded(ResultPage),
    Failed(FetchError),
}

/// Owns the current query and reconciles out-of-order responses.
pub struct TableController {
    schema: TableSchema,
    query: TableQuery,
    status: LoadStatus,
    next_seq: u64,
    in_flight: Option<u64>,
    last_total_pages: usize,
}

impl TableController {
    pub fn new(schema: TableSchema) -> Self {
        Self::with_query(schema, TableQuery::new())
    }

    pub fn with_query(schema: TableSchema, query: TableQuery) -> Self {
        Self {
            schema,
            query,
            status: LoadStatus::Idle,
            next_seq: 1,
            in_flight: None,
            last_total_pages: 0,
        }
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Whether a response is still awaited
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Page count reported by the last successful response
    pub fn total_pages(&self) -> usize {
        self.last_total_pages
    }

    /// Issue the request for the current query (initial mount)
    pub fn start(&mut self) -> PendingRequest {
        self.issue()
    }

    /// Apply a user event and issue exactly one request for the new query.
    ///
    /// Rejected events leave the query untouched and issue nothing.
    pub fn dispatch(&mut self, event: TableEvent) -> Result<PendingRequest, TransitionError> {
        self.check_event(&event)?;
        self.query = transition(&self.query, &event, self.last_total_pages)?;
        Ok(self.issue())
    }

    /// Hand back the backend's answer for request `seq`
    pub fn complete(&mut self, seq: u64, result: FetchResult<ResultPage>) -> Completion {
        if self.in_flight != Some(seq) {
            debug!(seq, latest = ?self.in_flight, "Discarding stale table response");
            return Completion::Stale;
        }

        self.in_flight = None;
        self.status = match result {
            Ok(page) => {
                self.last_total_pages = page.total_pages;
                LoadStatus::Loaded(page)
            }
            Err(err) => LoadStatus::Failed(err),
        };
        Completion::Applied
    }

    /// Dispatch an event and await its response from `backend`.
    ///
    /// With one caller at a time this always applies; concurrent callers
    /// should use [`dispatch`](Self::dispatch) and [`complete`](Self::complete).
    pub async fn run<B>(
        &mut self,
        backend: &B,
        event: TableEvent,
    ) -> Result<Completion, TransitionError>
    where
        B: TableBackend + ?Sized,
    {
        let request = self.dispatch(event)?;
        let result = backend.fetch(&request.query).await;
        Ok(self.complete(request.seq, result))
    }

    /// Current render model
    pub fn view(&self) -> TableView {
        match &self.status {
            LoadStatus::Idle | LoadStatus::Loading => TableView::Loading,
            LoadStatus::Failed(err) => TableView::Error {
                message: err.to_string(),
                retryable: true,
            },
            LoadStatus::Loaded(page) => TableView::from_page(page),
        }
    }

    /// Header indicator for each schema column, in column order
    pub fn sort_indicators(&self) -> Vec<(&str, SortIndicator)> {
        self.schema
            .columns()
            .iter()
            .map(|col| {
                (
                    col.key.as_str(),
                    SortIndicator::for_column(self.query.sort.as_ref(), &col.key),
                )
            })
            .collect()
    }

    fn check_event(&self, event: &TableEvent) -> Result<(), TransitionError> {
        match event {
            TableEvent::ClickSortableColumn(field) => match self.schema.column(field) {
                None => Err(TransitionError::UnknownColumn(field.clone())),
                Some(col) if !col.sortable => Err(TransitionError::NotSortable(field.clone())),
                Some(_) => Ok(()),
            },
            TableEvent::ChangeFilter { field, .. } => match self.schema.column(field) {
                None => Err(TransitionError::UnknownColumn(field.clone())),
                Some(col) if !col.filterable => Err(TransitionError::NotFilterable(field.clone())),
                Some(_) => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn issue(&mut self) -> PendingRequest {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);
        self.status = LoadStatus::Loading;

        debug!(seq, query = ?self.query, "Issuing table request");
        PendingRequest {
            seq,
            query: self.query.clone(),
        }
    }
}

impl Default for TableController {
    fn default() -> Self {
        Self::new(TableSchema::default())
    }
}
