//! # Query Processor
//!
//! Produces a [`ResultPage`] from a record set and a [`TableQuery`].
//! Purely functional: the input records are never modified and nothing
//! is cached between calls.

use super::errors::QueryResult;
use super::filter::SubstringFilter;
use super::page::ResultPage;
use super::query::{PageLimits, TableQuery};
use super::record::Record;
use super::schema::TableSchema;
use super::sorter::RecordSorter;

/// Filter → sort → paginate over one table schema
#[derive(Debug, Clone)]
pub struct QueryProcessor {
    schema: TableSchema,
    limits: PageLimits,
}

impl QueryProcessor {
    /// Create a processor with default page limits
    pub fn new(schema: TableSchema) -> Self {
        Self::with_limits(schema, PageLimits::default())
    }

    pub fn with_limits(schema: TableSchema, limits: PageLimits) -> Self {
        Self { schema, limits }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn limits(&self) -> &PageLimits {
        &self.limits
    }

    /// Validate a query against the schema and page limits
    pub fn validate(&self, query: &TableQuery) -> QueryResult<()> {
        query.validate_pagination(&self.limits)?;

        if let Some(filter) = &query.filter {
            self.schema.filterable_column(&filter.field)?;
        }
        if let Some(sort) = &query.sort {
            self.schema.sortable_column(&sort.field)?;
        }

        Ok(())
    }

    /// Run the pipeline.
    ///
    /// Pages past the end are valid and come back empty, with the
    /// metadata of the full match set.
    pub fn process(&self, records: &[Record], query: &TableQuery) -> QueryResult<ResultPage> {
        self.validate(query)?;

        let mut matched: Vec<&Record> = match query.filter.as_ref().filter(|f| f.is_active()) {
            Some(filter) => {
                SubstringFilter::new(filter.field.as_str(), &filter.value).apply(records)
            }
            None => records.iter().collect(),
        };

        if let Some(sort) = &query.sort {
            // Validated above; the column is known to exist
            if let Some(kind) = self.schema.kind_of(&sort.field) {
                RecordSorter::sort(&mut matched, sort, kind);
            }
        }

        let total = matched.len();
        let data: Vec<Record> = matched
            .into_iter()
            .skip(query.start_index())
            .take(query.limit as usize)
            .cloned()
            .collect();

        Ok(ResultPage::new(data, total, query.page, query.limit))
    }
}

impl Default for QueryProcessor {
    fn default() -> Self {
        Self::new(TableSchema::property_listings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::errors::QueryError;
    use crate::table::query::SortDirection;
    use serde_json::json;

    fn two_builders() -> Vec<Record> {
        vec![
            Record::from_value(json!({"builder": "A", "price": "$100"})).unwrap(),
            Record::from_value(json!({"builder": "B", "price": "$50"})).unwrap(),
        ]
    }

    fn builders(page: &ResultPage) -> Vec<String> {
        page.data
            .iter()
            .map(|r| r.text("builder").unwrap().into_owned())
            .collect()
    }

    #[test]
    fn test_sort_by_price() {
        let processor = QueryProcessor::default();
        let records = two_builders();

        let asc = processor
            .process(&records, &TableQuery::new().with_sort("price", SortDirection::Ascending))
            .unwrap();
        assert_eq!(builders(&asc), vec!["B", "A"]);

        let desc = processor
            .process(&records, &TableQuery::new().with_sort("price", SortDirection::Descending))
            .unwrap();
        assert_eq!(builders(&desc), vec!["A", "B"]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let processor = QueryProcessor::default();
        let records: Vec<Record> = (1..=8)
            .map(|i| Record::from_value(json!({"id": i, "builder": format!("B{i}")})).unwrap())
            .collect();

        let page = processor
            .process(&records, &TableQuery::new().with_page(3).with_limit(10))
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.total, 8);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_unknown_filter_field_fails() {
        let processor = QueryProcessor::default();
        let result = processor.process(
            &two_builders(),
            &TableQuery::new().with_filter("colour", "red"),
        );
        assert_eq!(result, Err(QueryError::UnknownField("colour".to_string())));
    }

    #[test]
    fn test_unknown_filter_field_fails_without_value() {
        let processor = QueryProcessor::default();
        let query = TableQuery::new().with_filter("colour", "");
        let result = processor.process(&two_builders(), &query);
        assert!(matches!(result, Err(QueryError::UnknownField(_))));
    }

    #[test]
    fn test_unknown_sort_field_fails() {
        let processor = QueryProcessor::default();
        let result = processor.process(
            &two_builders(),
            &TableQuery::new().with_sort("id", SortDirection::Ascending),
        );
        assert_eq!(result, Err(QueryError::UnknownField("id".to_string())));
    }

    #[test]
    fn test_zero_page_or_limit_fails() {
        let processor = QueryProcessor::default();
        let records = two_builders();

        assert!(matches!(
            processor.process(&records, &TableQuery::new().with_page(0)),
            Err(QueryError::InvalidPage(_))
        ));
        assert!(matches!(
            processor.process(&records, &TableQuery::new().with_limit(0)),
            Err(QueryError::InvalidLimit(_))
        ));
    }

    #[test]
    fn test_limit_above_maximum_fails() {
        let processor = QueryProcessor::with_limits(
            TableSchema::property_listings(),
            PageLimits {
                default_limit: 10,
                max_limit: 20,
            },
        );
        let result = processor.process(&two_builders(), &TableQuery::new().with_limit(21));
        assert_eq!(result, Err(QueryError::LimitExceeded(21, 20)));
    }

    #[test]
    fn test_empty_filter_value_keeps_all() {
        let processor = QueryProcessor::default();
        let page = processor
            .process(&two_builders(), &TableQuery::new().with_filter("builder", ""))
            .unwrap();
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_input_untouched() {
        let processor = QueryProcessor::default();
        let records = two_builders();
        let before = records.clone();

        processor
            .process(&records, &TableQuery::new().with_sort("price", SortDirection::Ascending))
            .unwrap();

        assert_eq!(records, before);
    }
}
