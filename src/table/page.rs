//! # Result Page
//!
//! The paginated response to a table query.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// One page of a filtered, sorted record set.
///
/// Serialized as `{data, total, page, limit, totalPages}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Records on this page, in sorted order
    pub data: Vec<Record>,
    /// Matching records after filtering, before pagination
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

impl ResultPage {
    pub fn new(data: Vec<Record>, total: usize, page: u32, limit: u32) -> Self {
        Self {
            data,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// `ceil(total / limit)`; zero when nothing matched
pub fn total_pages(total: usize, limit: u32) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as usize)
}
