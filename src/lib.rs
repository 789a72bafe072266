//! cognos-report-analyzer: A fast Rust analyzer for IBM Cognos report specifications
//!
//! This library parses Cognos report definitions (the XML dialect under
//! `http://developer.cognos.com/schemas/report/16.2/`) and extracts the
//! report's identity, queries, filters, and page layout for inspection.

pub mod display;
pub mod error;
pub mod report;

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

pub use error::ReportAnalyzerError;
use report::ReportSummary;

/// Options for analyzing report specifications
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// A report specification file, or a directory to scan for reports
    pub input_path: PathBuf,
    /// Enable verbose output
    pub verbose: bool,
}

/// One analyzed report specification
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzedReport {
    /// Source file the summary was extracted from
    pub path: PathBuf,
    pub summary: ReportSummary,
}

/// Analyze a single report file or every report file under a directory
pub fn analyze_reports(options: &AnalyzeOptions) -> Result<Vec<AnalyzedReport>> {
    let input_files = if options.input_path.is_dir() {
        report::reader::find_report_files(&options.input_path)
    } else {
        vec![options.input_path.clone()]
    };

    if options.verbose {
        println!("Found {} report file(s)", input_files.len());
    }

    let mut analyzed = Vec::new();
    for path in input_files {
        if options.verbose {
            println!("Analyzing report: {}", path.display());
        }

        let summary = analyze_file(&path)?;

        if options.verbose {
            println!(
                "Extracted {} quer(ies) and {} page(s)",
                summary.datasources.len(),
                summary.page_count
            );
        }

        analyzed.push(AnalyzedReport { path, summary });
    }

    Ok(analyzed)
}

/// Read and extract one report specification file
pub fn analyze_file(path: &Path) -> Result<ReportSummary> {
    let xml = report::reader::read_report_file(path)?;
    let summary = report::extract_report(&xml)?;
    Ok(summary)
}
