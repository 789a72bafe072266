//! Reading report specification files from disk

use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;

use crate::error::ReportAnalyzerError;

/// Read a report file as a string, trying UTF-8 first, then Windows-1252
/// as fallback (common for exports saved on Windows).
pub fn read_report_file(path: &Path) -> Result<String, ReportAnalyzerError> {
    let bytes = std::fs::read(path).map_err(|e| ReportAnalyzerError::ReportReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(strip_bom(text)),
        Err(err) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(err.as_bytes());
            if had_errors {
                Err(ReportAnalyzerError::InvalidEncoding {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

/// Recursively discover report files (.xml, or .txt as Cognos exports are
/// often saved) under a directory. Sorted for stable output order.
pub fn find_report_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_report = path.extension().map_or(false, |ext| {
            ext.eq_ignore_ascii_case("xml") || ext.eq_ignore_ascii_case("txt")
        });
        if is_report {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

/// Drop a leading byte-order mark; Cognos exports frequently carry one.
fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}
