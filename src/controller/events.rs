//! User events and the pure query transition function.

use thiserror::Error;

use crate::table::{SortDirection, SortSpec, TableQuery};

/// A user interaction with the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Header click: sort by this column, or flip direction if already sorted by it
    ClickSortableColumn(String),
    /// Filter input edit; an empty value clears the filter
    ChangeFilter { field: String, value: String },
    /// Page button click (1-based)
    ClickPage(u32),
    PreviousPage,
    NextPage,
    /// Re-issue the current query unchanged
    Retry,
}

/// Event rejected before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: u32, total_pages: usize },

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column is not sortable: {0}")]
    NotSortable(String),

    #[error("Column is not filterable: {0}")]
    NotFilterable(String),
}

/// Compute the next query for an event.
///
/// `total_pages` comes from the last successful response. Filter
/// changes always return to page 1.
pub fn transition(
    query: &TableQuery,
    event: &TableEvent,
    total_pages: usize,
) -> Result<TableQuery, TransitionError> {
    let mut next = query.clone();

    match event {
        TableEvent::ClickSortableColumn(field) => {
            next.sort = Some(match &query.sort {
                Some(current) if &current.field == field => SortSpec {
                    field: field.clone(),
                    direction: current.direction.toggled(),
                },
                _ => SortSpec {
                    field: field.clone(),
                    direction: SortDirection::Ascending,
                },
            });
        }
        TableEvent::ChangeFilter { field, value } => {
            next = if value.is_empty() {
                TableQuery { filter: None, ..next }
            } else {
                next.with_filter(field.clone(), value.clone())
            };
            next.page = 1;
        }
        TableEvent::ClickPage(page) => {
            next.page = checked_page(i64::from(*page), total_pages)?;
        }
        TableEvent::PreviousPage => {
            next.page = checked_page(i64::from(query.page) - 1, total_pages)?;
        }
        TableEvent::NextPage => {
            next.page = checked_page(i64::from(query.page) + 1, total_pages)?;
        }
        TableEvent::Retry => {}
    }

    Ok(next)
}

fn checked_page(page: i64, total_pages: usize) -> Result<u32, TransitionError> {
    if page >= 1 && (page as u64) <= total_pages as u64 {
        Ok(page as u32)
    } else {
        Err(TransitionError::PageOutOfRange {
            page: page.clamp(0, i64::from(u32::MAX)) as u32,
            total_pages,
        })
    }
}
