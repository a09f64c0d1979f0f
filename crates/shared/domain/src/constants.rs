//! Well-known names shared by the loader, the API and the pages.

/// Site-wide settings file.
pub const CONFIG_FILE: &str = "config.json";
/// Node registry file, `{ "nodes": [...] }`.
pub const NODES_FILE: &str = "nodes.json";
/// Member registry file, `{ "members": [...] }`.
pub const MEMBERS_FILE: &str = "members.json";

/// Collection key inside [`NODES_FILE`].
pub const NODES_KEY: &str = "nodes";
/// Collection key inside [`MEMBERS_FILE`].
pub const MEMBERS_KEY: &str = "members";

/// Domain suffix of full node identifiers (`<name>.<area>.<domain>`).
pub const DEFAULT_DOMAIN: &str = "ipnt.uk";

/// Empirical km² per square degree used by the coverage estimate.
pub const COVERAGE_KM2_PER_SQ_DEGREE: f64 = 12_400.0;
/// Smallest coverage reported once at least one node has coordinates.
pub const MIN_COVERAGE_KM2: u64 = 50;

/// Mesh role counted as a repeater.
pub const REPEATER_ROLE: &str = "repeater";
/// Owner label when a node's member cannot be resolved.
pub const UNKNOWN_OWNER: &str = "Unknown";

pub const SYSTEM_TAG: &str = "System";
pub const DIRECTORY_TAG: &str = "Directory";
