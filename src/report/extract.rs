//! Extraction engine for report specifications

use roxmltree::Document;

use crate::error::ReportAnalyzerError;
use crate::report::model_path::split_model_path;
use crate::report::summary::{
    ColumnInfo, FilterInfo, ListInfo, PageInfo, QueryInfo, ReportSummary, NO_MODEL_PATH,
};
use crate::report::xml::{find_child, find_children, find_descendants};

/// Extract the structured summary of a report specification.
///
/// Pure function over the XML text: no I/O, no shared state, the same
/// input always yields an equal summary. Fails only on non-well-formed
/// XML or when a structurally mandatory field (`reportName`, or a data
/// item's `expression`) is absent; every other missing element or
/// attribute degrades to a documented default.
pub fn extract_report(xml: &str) -> Result<ReportSummary, ReportAnalyzerError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let report_name = find_child(&root, "reportName")
        .ok_or_else(|| ReportAnalyzerError::MissingFieldError {
            field: "reportName".to_string(),
        })?
        .text()
        .unwrap_or("")
        .to_string();

    // Pages can sit several grouping wrappers below reportPages.
    let page_wrappers = find_descendants(&root, "reportPages");
    let page_nodes: Vec<_> = page_wrappers
        .iter()
        .flat_map(|wrapper| find_descendants(wrapper, "page"))
        .collect();

    // When modelPath is absent both names carry the sentinel verbatim;
    // the splitter is not consulted.
    let (package_name, model_name) = match find_child(&root, "modelPath") {
        Some(node) => split_model_path(node.text().unwrap_or("")),
        None => (NO_MODEL_PATH.to_string(), NO_MODEL_PATH.to_string()),
    };

    let datasources = extract_queries(&root)?;

    let pages = page_nodes.iter().map(extract_page).collect();

    Ok(ReportSummary {
        report_name,
        page_count: page_nodes.len(),
        package_name,
        model_name,
        datasources,
        pages,
    })
}

fn extract_queries(root: &roxmltree::Node) -> Result<Vec<QueryInfo>, ReportAnalyzerError> {
    let mut queries = Vec::new();

    let wrappers = find_descendants(root, "queries");
    for wrapper in &wrappers {
        for query in find_descendants(wrapper, "query") {
            queries.push(extract_query(&query)?);
        }
    }

    Ok(queries)
}

fn extract_query(query: &roxmltree::Node) -> Result<QueryInfo, ReportAnalyzerError> {
    let name = query.attribute("name").unwrap_or("").to_string();

    let mut columns = Vec::new();
    let selections = find_descendants(query, "selection");
    for selection in &selections {
        for item in find_descendants(selection, "dataItem") {
            columns.push(extract_column(&item)?);
        }
    }

    let mut detail_filters = Vec::new();
    let filter_groups = find_descendants(query, "detailFilters");
    for group in &filter_groups {
        for filter in find_descendants(group, "detailFilter") {
            let expression = find_child(&filter, "filterExpression")
                .and_then(|e| e.text())
                .unwrap_or("")
                .to_string();
            detail_filters.push(FilterInfo { expression });
        }
    }

    Ok(QueryInfo {
        name,
        columns,
        detail_filters,
    })
}

fn extract_column(item: &roxmltree::Node) -> Result<ColumnInfo, ReportAnalyzerError> {
    let name = item.attribute("name").unwrap_or("").to_string();

    // The expression child is the one mandatory piece of a data item.
    let expression = find_child(item, "expression")
        .ok_or_else(|| ReportAnalyzerError::MissingFieldError {
            field: format!("expression for data item '{}'", name),
        })?
        .text()
        .unwrap_or("")
        .to_string();

    let rollup_aggregate = item
        .attribute("rollupAggregate")
        .unwrap_or("none")
        .to_string();
    let aggregate = item.attribute("aggregate").unwrap_or("none").to_string();

    Ok(ColumnInfo {
        name,
        expression,
        rollup_aggregate,
        aggregate,
    })
}

fn extract_page(page: &roxmltree::Node) -> PageInfo {
    let name = page.attribute("name").unwrap_or("").to_string();

    let lists = find_descendants(page, "list");
    let content = lists.iter().map(extract_list).collect();

    PageInfo { name, content }
}

fn extract_list(list: &roxmltree::Node) -> ListInfo {
    let name = list.attribute("name").unwrap_or("").to_string();
    let ref_query = list.attribute("refQuery").unwrap_or("").to_string();

    // Column references live under one exact child chain; dataItemValue
    // elements anywhere else do not count.
    let mut columns = Vec::new();
    let bodies = find_descendants(list, "listColumnBody");
    for body in &bodies {
        for contents in find_children(body, "contents") {
            for text_item in find_children(&contents, "textItem") {
                for data_source in find_children(&text_item, "dataSource") {
                    for value in find_children(&data_source, "dataItemValue") {
                        columns.push(value.attribute("refDataItem").unwrap_or("").to_string());
                    }
                }
            }
        }
    }

    ListInfo {
        name,
        ref_query,
        columns,
    }
}
