//! Facade over the IPNT site crates.
//! Re-exports the shared domain and kernel, and initialises every feature slice
//! in dependency order. Business logic belongs in the slices, not here.

pub use ipnt_domain as domain;
use ipnt_domain::config::ApiConfig;
use ipnt_domain::registry::InitializedSlice;
pub use ipnt_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use ipnt_directory::router as directory_router;
        pub use ipnt_kernel::server::router::system_router;
        pub use ipnt_pages::router as pages_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use ipnt_directory as directory;
    pub use ipnt_pages as pages;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "directory",
        "pages",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns the first slice initialisation failure.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let slices = vec![features::directory::init(config)?, features::pages::init()?];
    Ok(slices)
}
