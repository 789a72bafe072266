//! Human-readable report summary printer

use crate::report::ReportSummary;

/// Print the extracted summary to stdout as labelled sections.
pub fn print_summary(summary: &ReportSummary) {
    println!("=== Report Details ===");
    println!("Report name:  {}", summary.report_name);
    println!("Pages:        {}", summary.page_count);
    println!("Package name: {}", summary.package_name);
    println!("Model name:   {}", summary.model_name);
    println!();

    println!("=== Datasource Details ===");
    if summary.datasources.is_empty() {
        println!("  (none)");
        println!();
    }
    for query in &summary.datasources {
        println!("--- Query: {} ---", query.name);

        println!("Columns ({}):", query.columns.len());
        if query.columns.is_empty() {
            println!("  (none)");
        }
        for column in &query.columns {
            println!(
                "  {} = {} [rollupAggregate={}, aggregate={}]",
                column.name, column.expression, column.rollup_aggregate, column.aggregate
            );
        }

        println!("Detail filters ({}):", query.detail_filters.len());
        if query.detail_filters.is_empty() {
            println!("  (none)");
        }
        for filter in &query.detail_filters {
            println!("  {}", filter.expression);
        }
        println!();
    }

    println!("=== Page Details ===");
    if summary.pages.is_empty() {
        println!("  (none)");
    }
    for page in &summary.pages {
        println!("--- Page: {} ---", page.name);
        if page.content.is_empty() {
            println!("  (no lists)");
        }
        for list in &page.content {
            println!("  List: {} (query: {})", list.name, list.ref_query);
            if list.columns.is_empty() {
                println!("    Columns: (none)");
            } else {
                println!("    Columns: {}", list.columns.join(", "));
            }
        }
        println!();
    }
}
