use crate::coverage::coverage_area;
use crate::error::DirectoryError;
use crate::resolve::resolve_node;
use crate::store::DataStore;
use ipnt_derive::api_model;
use ipnt_domain::constants::{
    CONFIG_FILE, MEMBERS_FILE, MEMBERS_KEY, NODES_FILE, NODES_KEY, UNKNOWN_OWNER,
};
use ipnt_domain::models::{Document, Member, Node, Stats};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Public view of the data directory, as served by `/api/data`.
#[api_model]
#[derive(Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Site configuration, passed through untouched.
    #[cfg_attr(feature = "server", schema(value_type = Object))]
    pub config: Document,
    /// Public nodes in file order.
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub nodes: Vec<Node>,
    /// Public members in file order.
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub members: Vec<Member>,
}

impl Snapshot {
    /// Reads all three data files.
    ///
    /// # Errors
    /// Propagates [`DataStore::load`] failures; missing files are not errors.
    pub async fn load(store: &DataStore) -> Result<Self, DirectoryError> {
        let config = store.load(CONFIG_FILE).await?;
        let nodes = store.load(NODES_FILE).await?;
        let members = store.load(MEMBERS_FILE).await?;

        Ok(Self::from_documents(config, &nodes, &members))
    }

    /// Builds the public view from already parsed documents.
    pub fn from_documents(config: Document, nodes: &Document, members: &Document) -> Self {
        Self {
            config,
            nodes: public_entries(nodes, NODES_KEY, Node::is_public),
            members: public_entries(members, MEMBERS_KEY, Member::is_public),
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total_nodes: self.nodes.len(),
            total_members: self.members.len(),
            coverage_area: coverage_area(&self.nodes),
        }
    }

    /// See [`resolve_node`].
    pub fn find_node(&self, area: &str, short_id: &str, domain: &str) -> Option<&Node> {
        resolve_node(area, short_id, domain, &self.nodes)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|member| member.id() == id)
    }

    /// Display name of the member owning a node, `Unknown` when unresolved.
    pub fn owner_name(&self, node: &Node) -> &str {
        node.member_id()
            .and_then(|id| self.member(id))
            .and_then(Member::name)
            .unwrap_or(UNKNOWN_OWNER)
    }

    /// Number of public nodes attributed to `member_id`.
    pub fn node_count(&self, member_id: &str) -> usize {
        self.nodes.iter().filter(|node| node.member_id() == Some(member_id)).count()
    }
}

fn public_entries<T>(doc: &Document, key: &str, is_public: fn(&T) -> bool) -> Vec<T>
where
    T: DeserializeOwned,
{
    let entries = match doc.get(key) {
        None => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            warn!(key, "Collection is not an array, treating as empty");
            return Vec::new();
        }
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(_) => serde_json::from_value::<T>(entry.clone()).ok(),
            _ => {
                warn!(key, "Skipping non-object entry");
                None
            }
        })
        .filter(is_public)
        .collect()
}
