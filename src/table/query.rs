//! # Table Query
//!
//! The complete description of a requested view (filter, sort, page),
//! plus its transport form as HTTP query parameters:
//!
//! - `filterBy` / `filterValue` - substring filter on one field
//! - `sortBy` / `sortOrder` - sort field and `asc` | `desc`
//! - `page` / `limit` - 1-based page number and page size

use serde::{Deserialize, Serialize};

use super::errors::{QueryError, QueryResult};

/// Page size used when the request does not carry one
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size accepted unless configured otherwise
pub const MAX_LIMIT: u32 = 100;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Parse `asc` / `desc` (case-insensitive)
    pub fn parse(value: &str) -> QueryResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(QueryError::InvalidSortOrder(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Sort clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Substring filter on a single field.
///
/// An empty `value` names the field but retains every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub field: String,
    pub value: String,
}

impl FilterSpec {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Filter, sort, and pagination state for one table view.
///
/// Invariant: `page >= 1` and `limit >= 1` for every query that passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    pub filter: Option<FilterSpec>,
    pub sort: Option<SortSpec>,
    pub page: u32,
    pub limit: u32,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            filter: None,
            sort: None,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some(FilterSpec::new(field, value));
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec {
            field: field.into(),
            direction,
        });
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Index of the first record on the requested page
    pub fn start_index(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit as usize)
    }

    /// Check pagination bounds
    pub fn validate_pagination(&self, limits: &PageLimits) -> QueryResult<()> {
        if self.page < 1 {
            return Err(QueryError::InvalidPage(self.page.to_string()));
        }
        if self.limit < 1 {
            return Err(QueryError::InvalidLimit(self.limit.to_string()));
        }
        if self.limit > limits.max_limit {
            return Err(QueryError::LimitExceeded(self.limit, limits.max_limit));
        }
        Ok(())
    }

    /// Encode as transport query parameters, in a stable order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];

        if let Some(sort) = &self.sort {
            pairs.push(("sortBy", sort.field.clone()));
            pairs.push(("sortOrder", sort.direction.as_str().to_string()));
        }

        if let Some(filter) = self.filter.as_ref().filter(|f| f.is_active()) {
            pairs.push(("filterBy", filter.field.clone()));
            pairs.push(("filterValue", filter.value.clone()));
        }

        pairs
    }
}

/// Default and maximum page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_limit: u32,
    pub max_limit: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

/// Raw query parameters as received over HTTP.
///
/// Everything is kept as text so malformed numbers surface as
/// [`QueryError`]s instead of extractor rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQueryParams {
    pub filter_by: Option<String>,
    pub filter_value: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl TableQueryParams {
    /// Validate and convert into a [`TableQuery`].
    ///
    /// Field names are checked later against the table schema.
    pub fn into_query(self, limits: &PageLimits) -> QueryResult<TableQuery> {
        let page = match non_empty(self.page) {
            Some(raw) => parse_positive(&raw).ok_or(QueryError::InvalidPage(raw))?,
            None => 1,
        };

        let limit = match non_empty(self.limit) {
            Some(raw) => parse_positive(&raw).ok_or(QueryError::InvalidLimit(raw))?,
            None => limits.default_limit,
        };

        let direction = match non_empty(self.sort_order) {
            Some(raw) => SortDirection::parse(&raw)?,
            None => SortDirection::Ascending,
        };

        let sort = non_empty(self.sort_by).map(|field| SortSpec { field, direction });

        let filter = non_empty(self.filter_by)
            .map(|field| FilterSpec::new(field, self.filter_value.unwrap_or_default()));

        let query = TableQuery {
            filter,
            sort,
            page,
            limit,
        };
        query.validate_pagination(limits)?;

        Ok(query)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> TableQueryParams {
        let mut p = TableQueryParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "filterBy" => p.filter_by = value,
                "filterValue" => p.filter_value = value,
                "sortBy" => p.sort_by = value,
                "sortOrder" => p.sort_order = value,
                "page" => p.page = value,
                "limit" => p.limit = value,
                other => panic!("unexpected key {other}"),
            }
        }
        p
    }

    #[test]
    fn test_defaults() {
        let query = TableQueryParams::default()
            .into_query(&PageLimits::default())
            .unwrap();
        assert_eq!(query, TableQuery::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_full_params() {
        let query = params(&[
            ("filterBy", "builder"),
            ("filterValue", "blue"),
            ("sortBy", "price"),
            ("sortOrder", "DESC"),
            ("page", "2"),
            ("limit", "5"),
        ])
        .into_query(&PageLimits::default())
        .unwrap();

        assert_eq!(query.filter, Some(FilterSpec::new("builder", "blue")));
        assert_eq!(query.sort, Some(SortSpec::desc("price")));
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 5);
    }

    #[test]
    fn test_invalid_page_and_limit() {
        let limits = PageLimits::default();
        assert_eq!(
            params(&[("page", "0")]).into_query(&limits),
            Err(QueryError::InvalidPage("0".to_string()))
        );
        assert_eq!(
            params(&[("page", "-3")]).into_query(&limits),
            Err(QueryError::InvalidPage("-3".to_string()))
        );
        assert_eq!(
            params(&[("limit", "ten")]).into_query(&limits),
            Err(QueryError::InvalidLimit("ten".to_string()))
        );
        assert_eq!(
            params(&[("limit", "500")]).into_query(&limits),
            Err(QueryError::LimitExceeded(500, MAX_LIMIT))
        );
    }

    #[test]
    fn test_invalid_sort_order() {
        let result = params(&[("sortBy", "price"), ("sortOrder", "sideways")])
            .into_query(&PageLimits::default());
        assert_eq!(
            result,
            Err(QueryError::InvalidSortOrder("sideways".to_string()))
        );
    }

    #[test]
    fn test_filter_field_without_value_is_kept_inactive() {
        let query = params(&[("filterBy", "builder")])
            .into_query(&PageLimits::default())
            .unwrap();
        let filter = query.filter.unwrap();
        assert_eq!(filter.field, "builder");
        assert!(!filter.is_active());
    }

    #[test]
    fn test_query_pairs_skip_inactive_filter() {
        let query = TableQuery::new()
            .with_sort("sqft", SortDirection::Descending)
            .with_filter("builder", "")
            .with_page(3);

        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "3".to_string()),
                ("limit", "10".to_string()),
                ("sortBy", "sqft".to_string()),
                ("sortOrder", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_start_index() {
        assert_eq!(TableQuery::new().with_page(1).start_index(), 0);
        assert_eq!(TableQuery::new().with_page(3).with_limit(10).start_index(), 20);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }
}
