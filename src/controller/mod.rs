//! # Table Controller
//!
//! Client side of the table contract. Owns the current [`TableQuery`],
//! turns user events into exactly one request each, and decides which
//! response may update the visible state.
//!
//! # Ordering
//!
//! Every issued request carries an increasing sequence number. Only the
//! response to the most recent request is applied; anything older is
//! reported as [`Completion::Stale`] and dropped (last request wins).
//! In-flight requests are never cancelled.
//!
//! [`TableQuery`]: crate::table::TableQuery

mod backend;
mod events;
mod machine;
mod view;

pub use backend::{FetchError, FetchFuture, FetchResult, LocalBackend, TableBackend};
pub use events::{transition, TableEvent, TransitionError};
pub use machine::{Completion, LoadStatus, PendingRequest, TableController};
pub use view::{PageButton, PaginationControls, SortIndicator, TableView, EMPTY_MESSAGE};
