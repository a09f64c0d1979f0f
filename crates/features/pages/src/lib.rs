//! Pages feature slice: HTML views rendered with handlebars.
//!
//! Templates are compiled into the binary at build time; the data behind them
//! comes from the directory slice on every request.

mod error;
#[cfg(feature = "server")]
mod handlers;
pub mod renderer;
pub mod views;

pub use crate::error::{PagesError, PagesErrorExt};
pub use crate::renderer::{Page, Renderer};
use ipnt_kernel::domain::registry::InitializedSlice;

/// Pages feature state
#[ipnt_derive::ipnt_slice]
pub struct Pages {
    pub renderer: Renderer,
}

/// Initialize the pages feature.
///
/// # Errors
/// Returns [`PagesError::Template`] if a bundled template is invalid.
pub fn init() -> Result<InitializedSlice, PagesError> {
    let renderer = Renderer::new()?;
    tracing::info!("Pages slice initialized");

    Ok(InitializedSlice::new(Pages::new(PagesInner { renderer })))
}

/// HTML routes. They are not part of the OpenAPI document.
#[cfg(feature = "server")]
pub fn router() -> axum::Router<ipnt_kernel::prelude::ApiState> {
    use axum::routing::get;

    axum::Router::new()
        .route("/", get(handlers::home))
        .route("/{area}/{node_id}", get(handlers::short_link))
        .route("/nodes", get(handlers::trailing_slash))
        .route("/nodes/", get(handlers::nodes))
        .route("/nodes/{area}/{node_id}", get(handlers::node_detail))
        .route("/members", get(handlers::trailing_slash))
        .route("/members/", get(handlers::members))
        .route("/contact", get(handlers::trailing_slash))
        .route("/contact/", get(handlers::contact))
}
