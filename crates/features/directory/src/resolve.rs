use ipnt_domain::models::Node;

/// Finds the node addressed by `/{area}/{short_id}`.
///
/// Matches either the full identifier `<short_id>.<area>.<domain>` or the raw
/// `short_id`. Exact comparison, first match in input order wins.
pub fn resolve_node<'a>(
    area: &str,
    short_id: &str,
    domain: &str,
    nodes: &'a [Node],
) -> Option<&'a Node> {
    let full_id = format!("{short_id}.{area}.{domain}");
    nodes.iter().find(|node| node.id() == full_id || node.id() == short_id)
}
