//! Template contexts.
//!
//! Every view borrows from a [`Snapshot`] taken for the current request and
//! exposes the site configuration as `config`.

use ipnt_directory::filter::{online_count, repeater_count};
use ipnt_directory::{Facets, NodeFilter, Snapshot};
use ipnt_domain::models::{Document, Member, Node, Stats};
use serde::Serialize;

/// Context of `/`.
#[derive(Debug, Serialize)]
pub struct HomeView<'a> {
    pub config: &'a Document,
    pub nodes: &'a [Node],
    pub members: &'a [Member],
    pub stats: Stats,
}

impl<'a> HomeView<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            config: &snapshot.config,
            nodes: &snapshot.nodes,
            members: &snapshot.members,
            stats: snapshot.stats(),
        }
    }
}

/// A node prepared for display: the raw record plus resolved links and owner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCard<'a> {
    pub id: &'a str,
    pub short_id: &'a str,
    pub area: Option<String>,
    /// Permalink, absent when the area cannot be derived.
    pub href: Option<String>,
    pub owner: &'a str,
    pub online: bool,
    pub testing: bool,
    pub node: &'a Node,
}

impl<'a> NodeCard<'a> {
    pub fn new(snapshot: &'a Snapshot, node: &'a Node) -> Self {
        let short_id = node.short_id();
        let area = node.area_slug();
        let href = area.as_deref().map(|area| format!("/nodes/{area}/{short_id}"));

        Self {
            id: node.id(),
            short_id,
            area,
            href,
            owner: snapshot.owner_name(node),
            online: node.is_online(),
            testing: node.is_testing(),
            node,
        }
    }
}

/// Context of `/nodes/` and `/nodes/{area}/{node_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodesView<'a> {
    pub config: &'a Document,
    pub members: &'a [Member],
    /// Cards for the nodes passing `filter`.
    pub nodes: Vec<NodeCard<'a>>,
    /// Raw records behind `nodes`, embedded for client-side scripts.
    pub records: Vec<&'a Node>,
    pub current_node: Option<NodeCard<'a>>,
    pub showing_individual_node: bool,
    pub facets: Facets,
    pub filter: &'a NodeFilter,
    pub filtered: bool,
    pub shown_count: usize,
    pub total_nodes: usize,
    pub online_count: usize,
    pub repeater_count: usize,
}

impl<'a> NodesView<'a> {
    pub fn new(snapshot: &'a Snapshot, filter: &'a NodeFilter, current: Option<&'a Node>) -> Self {
        let records = filter.apply(&snapshot.nodes);
        let current_node = current.map(|node| NodeCard::new(snapshot, node));

        Self {
            config: &snapshot.config,
            members: &snapshot.members,
            nodes: records.iter().map(|&node| NodeCard::new(snapshot, node)).collect(),
            shown_count: records.len(),
            online_count: online_count(records.iter().copied()),
            repeater_count: repeater_count(records.iter().copied()),
            records,
            showing_individual_node: current_node.is_some(),
            current_node,
            facets: Facets::collect(&snapshot.nodes),
            filter,
            filtered: filter.is_active(),
            total_nodes: snapshot.nodes.len(),
        }
    }
}

/// A member with the number of public nodes it owns.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub node_count: usize,
    /// Node listing filtered to this member.
    pub nodes_href: String,
    pub member: &'a Member,
}

/// Context of `/members/`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembersView<'a> {
    pub config: &'a Document,
    pub members: Vec<MemberCard<'a>>,
    pub total_members: usize,
}

impl<'a> MembersView<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        let members = snapshot
            .members
            .iter()
            .map(|member| MemberCard {
                id: member.id(),
                name: member.name().unwrap_or_else(|| member.id()),
                node_count: snapshot.node_count(member.id()),
                nodes_href: format!("/nodes/?owner={}", urlencoding::encode(member.id())),
                member,
            })
            .collect();

        Self { config: &snapshot.config, members, total_members: snapshot.members.len() }
    }
}

/// Context of `/contact/`; configuration only.
#[derive(Debug, Serialize)]
pub struct ContactView<'a> {
    pub config: &'a Document,
}

impl<'a> ContactView<'a> {
    pub const fn new(snapshot: &'a Snapshot) -> Self {
        Self { config: &snapshot.config }
    }
}
