//! Parsing and extraction of report specifications

mod extract;
mod model_path;
pub mod reader;
mod summary;
pub mod xml;

pub use extract::extract_report;
pub use model_path::split_model_path;
pub use summary::*;
