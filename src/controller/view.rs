//! Render model derived from controller state.

use serde::Serialize;

use crate::table::{Record, ResultPage, SortDirection, SortSpec};

/// Shown when a successful response carries no rows
pub const EMPTY_MESSAGE: &str = "No data found";

/// What the table area displays
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum TableView {
    Loading,
    Error { message: String, retryable: bool },
    Empty { message: String },
    Rows {
        rows: Vec<Record>,
        summary: String,
        controls: PaginationControls,
    },
}

impl TableView {
    /// View for a successfully applied page
    pub fn from_page(page: &ResultPage) -> Self {
        if page.is_empty() {
            return TableView::Empty {
                message: EMPTY_MESSAGE.to_string(),
            };
        }

        TableView::Rows {
            rows: page.data.clone(),
            summary: summary(page),
            controls: PaginationControls::new(page.page, page.total_pages),
        }
    }
}

/// "Showing {from} to {to} of {total} results"
fn summary(page: &ResultPage) -> String {
    let limit = page.limit as usize;
    let from = (page.page.saturating_sub(1) as usize) * limit + 1;
    let to = (page.page as usize * limit).min(page.total);
    format!("Showing {} to {} of {} results", from, to, page.total)
}

/// One numbered page button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: u32,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationControls {
    pub pages: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationControls {
    pub fn new(page: u32, total_pages: usize) -> Self {
        let pages = (1..=total_pages as u32)
            .map(|number| PageButton {
                number,
                current: number == page,
            })
            .collect();

        Self {
            pages,
            previous_enabled: page > 1,
            next_enabled: (page as usize) < total_pages,
        }
    }
}

/// Header decoration for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn for_column(sort: Option<&SortSpec>, field: &str) -> Self {
        match sort {
            Some(spec) if spec.field == field => match spec.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::Unsorted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::from_value(json!({ "id": i })).unwrap())
            .collect()
    }

    #[test]
    fn test_summary_last_partial_page() {
        let page = ResultPage::new(rows(2), 12, 2, 10);
        match TableView::from_page(&page) {
            TableView::Rows { summary, controls, .. } => {
                assert_eq!(summary, "Showing 11 to 12 of 12 results");
                assert!(controls.previous_enabled);
                assert!(!controls.next_enabled);
                assert_eq!(controls.pages.len(), 2);
                assert!(controls.pages[1].current);
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn test_single_page_controls() {
        let controls = PaginationControls::new(1, 1);
        assert!(!controls.previous_enabled);
        assert!(!controls.next_enabled);
        assert_eq!(
            controls.pages,
            vec![PageButton {
                number: 1,
                current: true
            }]
        );
    }

    #[test]
    fn test_empty_page() {
        let page = ResultPage::new(Vec::new(), 0, 1, 10);
        assert_eq!(
            TableView::from_page(&page),
            TableView::Empty {
                message: "No data found".to_string()
            }
        );
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::desc("price");
        assert_eq!(
            SortIndicator::for_column(Some(&spec), "price"),
            SortIndicator::Descending
        );
        assert_eq!(SortIndicator::for_column(Some(&spec), "sqft"), SortIndicator::Unsorted);
        assert_eq!(SortIndicator::for_column(None, "price"), SortIndicator::Unsorted);
    }

    #[test]
    fn test_view_serializes_with_state_tag() {
        let view = TableView::Error {
            message: "Something went wrong!".to_string(),
            retryable: true,
        };
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({ "state": "error", "message": "Something went wrong!", "retryable": true })
        );
    }
}
