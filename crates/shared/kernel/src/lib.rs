//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the application state
//! registry and the system routes every deployment exposes.
//!
//! ## Config loading
//! ```rust,no_run
//! use ipnt_kernel::config::load_config;
//! use ipnt_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use ipnt_domain as domain;
