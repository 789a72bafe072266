//! Core types describing an analyzed report specification

use serde::Serialize;

/// Sentinel used for both derived names when a report has no model path.
pub const NO_MODEL_PATH: &str = "No model path found";

/// Everything extracted from one report specification.
///
/// All sequences preserve the order of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Report display name
    pub report_name: String,
    /// Number of layout pages in the report
    pub page_count: usize,
    /// Package the report depends on, derived from the model path
    pub package_name: String,
    /// Data model the report depends on, derived from the model path
    pub model_name: String,
    /// Queries defined by the report, in document order
    pub datasources: Vec<QueryInfo>,
    /// Layout pages, in document order
    pub pages: Vec<PageInfo>,
}

/// A named data-retrieval query within the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryInfo {
    /// Query name (empty if the attribute is absent)
    pub name: String,
    /// Columns produced by the query, in document order
    pub columns: Vec<ColumnInfo>,
    /// Row-level filters applied by the query
    pub detail_filters: Vec<FilterInfo>,
}

/// A single expression-defined column produced by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Source expression defining the column (e.g., `[Sales].[Revenue]`)
    pub expression: String,
    /// Rollup aggregation, `"none"` when unspecified
    pub rollup_aggregate: String,
    /// Detail aggregation, `"none"` when unspecified
    pub aggregate: String,
}

/// A row-level predicate restricting a query's result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterInfo {
    pub expression: String,
}

/// One layout page of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub name: String,
    /// List elements on the page; other visual element kinds are not modeled
    pub content: Vec<ListInfo>,
}

/// A tabular visual element on a page, bound to one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListInfo {
    pub name: String,
    /// Name of the query this list is bound to (not validated against
    /// the report's queries)
    pub ref_query: String,
    /// Column references shown in the list, in document order
    pub columns: Vec<String>,
}
