//! File-based tests for the analyze flow: read, decode, extract.

use std::path::PathBuf;

use tempfile::TempDir;

use cognos_report_analyzer::{analyze_file, analyze_reports, AnalyzeOptions};

const MINIMAL_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<report xmlns="http://developer.cognos.com/schemas/report/16.2/">
  <modelPath>/content/folder[@name='Finance']/model[@name='LedgerModel']</modelPath>
  <queries>
    <query name="Ledger">
      <selection>
        <dataItem name="Account"><expression>[Ledger].[Account]</expression></dataItem>
      </selection>
    </query>
  </queries>
  <layouts>
    <layout>
      <reportPages>
        <page name="Main"/>
      </reportPages>
    </layout>
  </layouts>
  <reportName>Ledger Overview</reportName>
</report>"#;

/// Helper to create a test directory holding report files
fn create_report_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for (name, content) in files {
        let path = temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
    }

    temp_dir
}

// ============================================================================
// Single File Tests
// ============================================================================

#[test]
fn test_analyze_file_end_to_end() {
    let temp_dir = create_report_dir(&[("ledger.xml", MINIMAL_REPORT)]);

    let summary = analyze_file(&temp_dir.path().join("ledger.xml")).unwrap();

    assert_eq!(summary.report_name, "Ledger Overview");
    assert_eq!(summary.page_count, 1);
    assert_eq!(summary.package_name, "Finance");
    assert_eq!(summary.model_name, "LedgerModel");
    assert_eq!(summary.datasources.len(), 1);
    assert_eq!(summary.datasources[0].columns[0].name, "Account");
}

#[test]
fn test_analyze_missing_file_returns_error() {
    let result = analyze_file(&PathBuf::from("/nonexistent/report.xml"));
    assert!(result.is_err(), "Missing file should return error");
}

#[test]
fn test_analyze_malformed_report_returns_error() {
    let temp_dir = create_report_dir(&[("broken.xml", "<report><unclosed>")]);

    let result = analyze_file(&temp_dir.path().join("broken.xml"));
    assert!(result.is_err(), "Malformed XML should return error");
}

// ============================================================================
// Encoding Tests
// ============================================================================

#[test]
fn test_analyze_report_with_utf8_bom() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bom.xml");

    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(MINIMAL_REPORT.as_bytes());
    std::fs::write(&path, bytes).unwrap();

    let summary = analyze_file(&path).unwrap();
    assert_eq!(summary.report_name, "Ledger Overview");
}

#[test]
fn test_analyze_windows_1252_report() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("latin.txt");

    // "Résumé" with 0xE9 bytes, as Windows-1252 encodes é.
    let xml = r#"<report xmlns="http://developer.cognos.com/schemas/report/16.2/">
  <reportName>R?sum?</reportName>
</report>"#;
    let bytes: Vec<u8> = xml.bytes().map(|b| if b == b'?' { 0xE9 } else { b }).collect();
    std::fs::write(&path, bytes).unwrap();

    let summary = analyze_file(&path).unwrap();
    assert_eq!(summary.report_name, "R\u{e9}sum\u{e9}");
}

// ============================================================================
// Directory Scan Tests
// ============================================================================

#[test]
fn test_analyze_reports_scans_directory_recursively() {
    let temp_dir = create_report_dir(&[
        ("b_report.xml", MINIMAL_REPORT),
        ("nested/a_report.txt", MINIMAL_REPORT),
        ("notes.md", "not a report"),
    ]);

    let options = AnalyzeOptions {
        input_path: temp_dir.path().to_path_buf(),
        verbose: false,
    };

    let analyzed = analyze_reports(&options).unwrap();
    assert_eq!(analyzed.len(), 2, "Only .xml/.txt files should be analyzed");

    // Sorted order: b_report.xml before nested/a_report.txt
    assert!(analyzed[0].path.ends_with("b_report.xml"));
    assert!(analyzed[1].path.ends_with("nested/a_report.txt"));
    assert_eq!(analyzed[0].summary, analyzed[1].summary);
}

#[test]
fn test_analyze_reports_single_file_input() {
    let temp_dir = create_report_dir(&[("one.xml", MINIMAL_REPORT)]);

    let options = AnalyzeOptions {
        input_path: temp_dir.path().join("one.xml"),
        verbose: false,
    };

    let analyzed = analyze_reports(&options).unwrap();
    assert_eq!(analyzed.len(), 1);
    assert_eq!(analyzed[0].summary.report_name, "Ledger Overview");
}

#[test]
fn test_analyze_reports_stops_on_broken_report() {
    let temp_dir = create_report_dir(&[
        ("a_good.xml", MINIMAL_REPORT),
        ("b_broken.xml", "<report>"),
    ]);

    let options = AnalyzeOptions {
        input_path: temp_dir.path().to_path_buf(),
        verbose: false,
    };

    let result = analyze_reports(&options);
    assert!(result.is_err(), "A malformed report should fail the run");
}
