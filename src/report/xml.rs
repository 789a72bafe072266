//! Namespace-aware lookups over a parsed report specification
//!
//! The report dialect nests most elements under grouping wrappers of
//! unspecified depth, so callers need two distinct primitives: an
//! unbounded-depth descendant search and a single-level child lookup.
//! Keep them separate; fixed child paths are built by chaining the
//! child lookup.

/// The one namespace this analyzer understands.
pub const REPORT_NS: &str = "http://developer.cognos.com/schemas/report/16.2/";

/// Check if a node is an element with the given local name in the report namespace.
pub fn is_report_element(node: &roxmltree::Node, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(REPORT_NS)
}

/// Find the first direct child element with the given local name.
pub fn find_child<'a>(
    parent: &'a roxmltree::Node<'a, 'a>,
    local_name: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    parent
        .children()
        .find(|c| is_report_element(c, local_name))
}

/// Find all direct child elements with the given local name, in document order.
pub fn find_children<'a>(
    parent: &'a roxmltree::Node<'a, 'a>,
    local_name: &str,
) -> Vec<roxmltree::Node<'a, 'a>> {
    parent
        .children()
        .filter(|c| is_report_element(c, local_name))
        .collect()
}

/// Find all descendant elements with the given local name, at any depth,
/// in document order. The start node itself is never included.
pub fn find_descendants<'a>(
    start: &'a roxmltree::Node<'a, 'a>,
    local_name: &str,
) -> Vec<roxmltree::Node<'a, 'a>> {
    start
        .descendants()
        .filter(|n| n.id() != start.id() && is_report_element(n, local_name))
        .collect()
}
