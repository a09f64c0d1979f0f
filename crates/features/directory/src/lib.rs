//! Directory feature slice: the public view of nodes and members.
//!
//! Data lives in three JSON files under the configured data directory and is
//! re-read on every request, so edits show up without a restart.

pub mod coverage;
mod error;
pub mod filter;
#[cfg(feature = "server")]
mod handlers;
pub mod resolve;
pub mod snapshot;
pub mod store;

pub use crate::error::{DirectoryError, DirectoryErrorExt};
pub use crate::filter::{Facets, NodeFilter};
pub use crate::snapshot::Snapshot;
pub use crate::store::DataStore;
use ipnt_kernel::domain::config::ApiConfig;
use ipnt_kernel::domain::registry::InitializedSlice;

/// Directory feature state
#[ipnt_derive::ipnt_slice]
pub struct Directory {
    pub store: DataStore,
    /// Suffix of full node identifiers.
    pub domain: String,
}

impl Directory {
    /// Fresh snapshot of the data directory.
    ///
    /// # Errors
    /// See [`Snapshot::load`].
    pub async fn snapshot(&self) -> Result<Snapshot, DirectoryError> {
        Snapshot::load(&self.store).await
    }
}

/// Initialize the directory feature.
///
/// # Errors
/// Returns [`DirectoryError::Internal`] if the site domain is blank.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, DirectoryError> {
    let domain = config.site.domain.trim();
    if domain.is_empty() {
        return Err(DirectoryError::from("Site domain must not be empty")).context("Directory init");
    }

    let data_dir = &config.storage.data_dir;
    if !data_dir.is_dir() {
        tracing::warn!(path = %data_dir.display(), "Data directory not found, pages will render empty");
    }

    let slice = Directory::new(DirectoryInner {
        store: DataStore::new(data_dir),
        domain: domain.to_owned(),
    });

    tracing::info!(path = %data_dir.display(), domain, "Directory slice initialized");
    Ok(InitializedSlice::new(slice))
}

/// Routes served by the directory slice.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<ipnt_kernel::prelude::ApiState> {
    use utoipa_axum::routes;

    utoipa_axum::router::OpenApiRouter::new().routes(routes!(handlers::api_data))
}
