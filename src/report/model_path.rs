//! Splitting a report's composite model path into package and model names

const NAME_MARKER: &str = "@name='";

/// Split a model path such as
/// `/content/folder[@name='Sales']/model[@name='SalesModel']` into the
/// package name (first quoted `@name` segment) and model name (second).
///
/// This is a best-effort textual scan, not a parser for the embedded path
/// language: it only recognizes single-quoted `@name='...'` segments in
/// the order they appear. A segment that cannot be found yields an empty
/// string for that name.
pub fn split_model_path(model_path: &str) -> (String, String) {
    match next_name_segment(model_path) {
        Some((package, rest)) => {
            let model = next_name_segment(rest).map(|(m, _)| m).unwrap_or("");
            (package.to_string(), model.to_string())
        }
        None => (String::new(), String::new()),
    }
}

/// Scan for the next `@name='...'` segment, returning its content and the
/// remainder of the text starting at the closing quote.
fn next_name_segment(text: &str) -> Option<(&str, &str)> {
    let start = text.find(NAME_MARKER)? + NAME_MARKER.len();
    let end = start + text[start..].find('\'')?;
    Some((&text[start..end], &text[end..]))
}
