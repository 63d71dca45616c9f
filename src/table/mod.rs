//! # Table Pipeline
//!
//! Server side of the tabular data contract: filter, then sort, then
//! paginate an immutable set of records.
//!
//! # Execution Flow (strict order)
//!
//! 1. Validate the query against the table schema
//! 2. Retain records whose filter field contains the filter value (case-insensitive)
//! 3. Stable sort on the sort field, using the field kind declared by the schema
//! 4. Slice the requested page
//! 5. Return the page together with pagination metadata

pub mod errors;
pub mod filter;
pub mod page;
pub mod processor;
pub mod query;
pub mod record;
pub mod schema;
pub mod sorter;

pub use errors::{QueryError, QueryResult};
pub use filter::SubstringFilter;
pub use page::ResultPage;
pub use processor::QueryProcessor;
pub use query::{
    FilterSpec, PageLimits, SortDirection, SortSpec, TableQuery, TableQueryParams, DEFAULT_LIMIT,
    MAX_LIMIT,
};
pub use record::Record;
pub use schema::{ColumnDef, FieldKind, TableSchema};
pub use sorter::RecordSorter;
