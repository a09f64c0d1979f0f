use ipnt_domain::constants::REPEATER_ROLE;
use ipnt_domain::models::Node;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrowing applied to the node listing, usually taken from the query string.
///
/// Empty strings mean "no constraint". Testing nodes are hidden unless `testing` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFilter {
    /// Case-insensitive substring of the node's `hardware`.
    pub hardware: Option<String>,
    /// Exact `meshRole`.
    pub role: Option<String>,
    /// Exact `memberId`.
    pub owner: Option<String>,
    /// Only nodes not flagged offline.
    #[serde(deserialize_with = "flag")]
    pub online: bool,
    /// Include nodes flagged `isTesting`.
    #[serde(deserialize_with = "flag")]
    pub testing: bool,
}

impl NodeFilter {
    pub fn matches(&self, node: &Node) -> bool {
        let hardware = constraint(self.hardware.as_ref()).is_none_or(|wanted| {
            node.hardware()
                .is_some_and(|hw| hw.to_lowercase().contains(&wanted.to_lowercase()))
        });
        let role = constraint(self.role.as_ref()).is_none_or(|wanted| node.mesh_role() == Some(wanted));
        let owner = constraint(self.owner.as_ref()).is_none_or(|wanted| node.member_id() == Some(wanted));
        let online = !self.online || node.is_online();
        let testing = self.testing || !node.is_testing();

        hardware && role && owner && online && testing
    }

    /// Nodes passing the filter, in input order.
    pub fn apply<'a>(&self, nodes: &'a [Node]) -> Vec<&'a Node> {
        nodes.iter().filter(|node| self.matches(node)).collect()
    }

    /// `true` when the filter differs from the default listing.
    pub fn is_active(&self) -> bool {
        self != &Self::default()
    }
}

/// Checkbox-style switch: `true`, `1`, `on`, `yes` or a bare key turn it on,
/// any other value turns it off. Never rejects the request.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean switch")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            let value = value.trim();
            Ok(value.is_empty()
                || ["true", "1", "on", "yes"].iter().any(|on| value.eq_ignore_ascii_case(on)))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value == 1)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value == 1)
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<bool, D::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

fn constraint(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).map(str::trim).filter(|v| !v.is_empty())
}

/// Distinct values offered as filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// First-seen order.
    pub hardware: Vec<String>,
    /// First-seen order.
    pub roles: Vec<String>,
    /// Sorted.
    pub owners: Vec<String>,
}

impl Facets {
    pub fn collect(nodes: &[Node]) -> Self {
        let mut owners = distinct(nodes.iter().filter_map(Node::member_id));
        owners.sort_unstable();

        Self {
            hardware: distinct(nodes.iter().filter_map(Node::hardware)),
            roles: distinct(nodes.iter().filter_map(Node::mesh_role)),
            owners,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|seen| seen == value) {
            out.push(value.to_owned());
        }
    }
    out
}

/// Nodes not flagged `isOnline: false`.
pub fn online_count<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> usize {
    nodes.into_iter().filter(|node| node.is_online()).count()
}

/// Nodes whose `meshRole` is `repeater`.
pub fn repeater_count<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> usize {
    nodes.into_iter().filter(|node| node.mesh_role() == Some(REPEATER_ROLE)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn fleet() -> Vec<Node> {
        [
            json!({ "id": "rep01.ip3.ipnt.uk", "hardware": "Heltec V3", "meshRole": "repeater", "memberId": "zed" }),
            json!({ "id": "cli01.ip3.ipnt.uk", "hardware": "RAK4631", "meshRole": "client", "memberId": "amy", "isOnline": false }),
            json!({ "id": "rep02.ip4.ipnt.uk", "hardware": "heltec v3", "meshRole": "repeater", "memberId": "amy" }),
            json!({ "id": "lab01.ip4.ipnt.uk", "hardware": "T-Beam", "meshRole": "repeater", "isTesting": true }),
        ]
        .into_iter()
        .map(|v: Value| serde_json::from_value(v).expect("node"))
        .collect()
    }

    fn ids<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
        nodes.iter().map(|node| node.id()).collect()
    }

    #[test]
    fn default_filter_hides_testing_nodes_only() {
        let nodes = fleet();
        let visible = NodeFilter::default().apply(&nodes);
        assert_eq!(ids(&visible), ["rep01.ip3.ipnt.uk", "cli01.ip3.ipnt.uk", "rep02.ip4.ipnt.uk"]);
        assert!(!NodeFilter::default().is_active());
    }

    #[test]
    fn hardware_is_case_insensitive_substring() {
        let nodes = fleet();
        let filter = NodeFilter { hardware: Some("HELTEC".to_owned()), ..NodeFilter::default() };
        assert_eq!(ids(&filter.apply(&nodes)), ["rep01.ip3.ipnt.uk", "rep02.ip4.ipnt.uk"]);
        assert!(filter.is_active());
    }

    #[test]
    fn role_owner_and_online_combine() {
        let nodes = fleet();
        let filter = NodeFilter {
            owner: Some("amy".to_owned()),
            online: true,
            ..NodeFilter::default()
        };
        assert_eq!(ids(&filter.apply(&nodes)), ["rep02.ip4.ipnt.uk"]);

        let repeaters = NodeFilter {
            role: Some("repeater".to_owned()),
            testing: true,
            ..NodeFilter::default()
        };
        assert_eq!(repeaters.apply(&nodes).len(), 3);
    }

    #[test]
    fn blank_constraints_are_ignored() {
        let nodes = fleet();
        let filter = NodeFilter {
            hardware: Some(String::new()),
            role: Some("  ".to_owned()),
            ..NodeFilter::default()
        };
        assert_eq!(filter.apply(&nodes).len(), 3);
    }

    fn parse(value: Value) -> NodeFilter {
        serde_json::from_value(value).expect("filter never rejects")
    }

    #[test]
    fn switches_accept_checkbox_spellings() {
        for on in ["true", "1", "on", "YES", ""] {
            assert!(parse(json!({ "online": on })).online, "{on:?}");
        }
        for off in ["false", "0", "off", "maybe"] {
            assert!(!parse(json!({ "testing": off })).testing, "{off:?}");
        }
        assert!(parse(json!({ "online": true, "testing": 1 })).testing);
        assert_eq!(parse(json!({ "online": null })), NodeFilter::default());
    }

    #[test]
    fn facets_keep_first_seen_order_and_sort_owners() {
        let facets = Facets::collect(&fleet());
        assert_eq!(facets.hardware, ["Heltec V3", "RAK4631", "heltec v3", "T-Beam"]);
        assert_eq!(facets.roles, ["repeater", "client"]);
        assert_eq!(facets.owners, ["amy", "zed"]);
    }

    #[test]
    fn counters_follow_flags() {
        let nodes = fleet();
        assert_eq!(online_count(&nodes), 3);
        assert_eq!(repeater_count(&nodes), 3);
        assert_eq!(repeater_count(NodeFilter::default().apply(&nodes)), 2);
    }
}
