//! Error types for cognos-report-analyzer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing a report specification
#[derive(Error, Debug)]
pub enum ReportAnalyzerError {
    #[error("Failed to read report file: {path}")]
    ReportReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report file contains invalid characters: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Report specification is not well-formed XML")]
    XmlParseError {
        #[source]
        source: roxmltree::Error,
    },

    #[error("Report specification is missing mandatory field: {field}")]
    MissingFieldError { field: String },
}

impl From<roxmltree::Error> for ReportAnalyzerError {
    fn from(err: roxmltree::Error) -> Self {
        ReportAnalyzerError::XmlParseError { source: err }
    }
}
