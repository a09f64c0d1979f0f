//! Node and member records.
//!
//! The JSON files have no enforced schema, so records keep the original object
//! verbatim (it is what the API and the templates see) and resolve the few
//! fields the site relies on once, at construction time. Absent or malformed
//! known fields fall back to safe defaults instead of failing the load.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A raw JSON object as read from a data file.
pub type Document = Map<String, Value>;

const ID: &str = "id";
const IS_PUBLIC: &str = "isPublic";
const LOCATION: &str = "location";

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Both coordinates must be present and numeric. Zero is a real coordinate
    /// (the equator or the Greenwich meridian), so `0.0` still counts as located.
    fn from_value(value: Option<&Value>) -> Option<Self> {
        let object = value?.as_object()?;
        Some(Self { lat: object.get("lat")?.as_f64()?, lng: object.get("lng")?.as_f64()? })
    }
}

/// A mesh access point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Document")]
pub struct Node {
    id: String,
    is_public: bool,
    location: Option<Location>,
    fields: Document,
}

impl Node {
    /// Full identifier, conventionally `<name>.<area>.<domain>`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `true` when `isPublic` is `true` or absent.
    pub const fn is_public(&self) -> bool {
        self.is_public
    }

    pub const fn location(&self) -> Option<Location> {
        self.location
    }

    /// First dotted component of the identifier (`rep01` for `rep01.ip3.ipnt.uk`).
    pub fn short_id(&self) -> &str {
        self.id.split('.').next().unwrap_or_default()
    }

    /// Lowercased `area` field, falling back to the second dotted component of the id.
    pub fn area_slug(&self) -> Option<String> {
        self.text("area")
            .map(str::to_lowercase)
            .or_else(|| self.id.split('.').nth(1).map(str::to_lowercase))
            .filter(|area| !area.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    pub fn hardware(&self) -> Option<&str> {
        self.text("hardware")
    }

    pub fn mesh_role(&self) -> Option<&str> {
        self.text("meshRole")
    }

    pub fn member_id(&self) -> Option<&str> {
        self.text("memberId")
    }

    /// Nodes count as online unless explicitly flagged `isOnline: false`.
    pub fn is_online(&self) -> bool {
        self.fields.get("isOnline").and_then(Value::as_bool) != Some(false)
    }

    /// Only an explicit `isTesting: true` marks a node as testing.
    pub fn is_testing(&self) -> bool {
        self.fields.get("isTesting").and_then(Value::as_bool) == Some(true)
    }

    /// The original JSON object, unchanged.
    pub const fn fields(&self) -> &Document {
        &self.fields
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl From<Document> for Node {
    fn from(fields: Document) -> Self {
        Self {
            id: identifier(&fields),
            is_public: visibility(&fields),
            location: Location::from_value(fields.get(LOCATION)),
            fields,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// A participant or organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Document")]
pub struct Member {
    id: String,
    is_public: bool,
    fields: Document,
}

impl Member {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `true` when `isPublic` is `true` or absent.
    pub const fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// The original JSON object, unchanged.
    pub const fn fields(&self) -> &Document {
        &self.fields
    }
}

impl From<Document> for Member {
    fn from(fields: Document) -> Self {
        Self { id: identifier(&fields), is_public: visibility(&fields), fields }
    }
}

impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Headline numbers shown on the home page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_nodes: usize,
    pub total_members: usize,
    /// Approximate coverage in km².
    pub coverage_area: u64,
}

fn identifier(fields: &Document) -> String {
    fields.get(ID).and_then(Value::as_str).unwrap_or_default().to_owned()
}

// Absent means public; anything other than a boolean is treated as private.
fn visibility(fields: &Document) -> bool {
    match fields.get(IS_PUBLIC) {
        None => true,
        Some(value) => value.as_bool().unwrap_or(false),
    }
}
