//! # Table Schema
//!
//! Declares every queryable column and how its values compare.
//! The sorter consults the declared [`FieldKind`] instead of guessing
//! from the field name.

use serde::{Deserialize, Serialize};

use super::errors::{QueryError, QueryResult};

/// How values of a column are compared when sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Case-sensitive text comparison
    Text,
    /// Currency/size text compared by numeric magnitude
    Numeric,
}

/// A single column definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Record field name (wire name)
    pub key: String,
    /// Human readable header
    pub label: String,
    pub kind: FieldKind,
    pub sortable: bool,
    pub filterable: bool,
}

impl ColumnDef {
    /// Sortable and filterable text column
    pub fn text(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            sortable: true,
            filterable: true,
        }
    }

    /// Sortable and filterable numeric column
    pub fn numeric(key: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Numeric,
            ..Self::text(key, label)
        }
    }

    /// Disable sorting on this column
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Disable filtering on this column
    pub fn unfilterable(mut self) -> Self {
        self.filterable = false;
        self
    }
}

/// Ordered set of column definitions for one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<ColumnDef>,
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self { columns }
    }

    /// Schema of the property listings table.
    pub fn property_listings() -> Self {
        Self::new(vec![
            ColumnDef::text("builder", "Builder"),
            ColumnDef::text("lots", "Lots"),
            ColumnDef::numeric("price", "Price"),
            ColumnDef::numeric("sqft", "Sq. ft"),
            ColumnDef::numeric("avgPrice", "Average Price / Sq.ft"),
            ColumnDef::text("status", "Status"),
            ColumnDef::text("region", "Region"),
        ])
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.column(key).is_some()
    }

    pub fn kind_of(&self, key: &str) -> Option<FieldKind> {
        self.column(key).map(|c| c.kind)
    }

    /// Look up a column that may be sorted on
    pub fn sortable_column(&self, key: &str) -> QueryResult<&ColumnDef> {
        let column = self
            .column(key)
            .ok_or_else(|| QueryError::UnknownField(key.to_string()))?;
        if !column.sortable {
            return Err(QueryError::FieldNotSortable(key.to_string()));
        }
        Ok(column)
    }

    /// Look up a column that may be filtered on
    pub fn filterable_column(&self, key: &str) -> QueryResult<&ColumnDef> {
        let column = self
            .column(key)
            .ok_or_else(|| QueryError::UnknownField(key.to_string()))?;
        if !column.filterable {
            return Err(QueryError::FieldNotFilterable(key.to_string()));
        }
        Ok(column)
    }
}

impl Default for TableSchema {
    fn default() -> Self {
        Self::property_listings()
    }
}
