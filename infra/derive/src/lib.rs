#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate in the workspace: error enums,
//! feature slices and the API model/handler glue for `utoipa`.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its
//! own macros; the integration tests under `tests/` exercise them for real.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Defines a standard API data model.
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` if missing.
/// * **`OpenAPI`**: adds `utoipa::ToSchema` behind the consumer's `server` feature.
/// * **Serde policy**: `rename_all = "camelCase"` unless overridden with
///   `#[api_model(rename_all = "...")]`.
///
/// ```rust,ignore
/// #[ipnt_derive::api_model]
/// pub struct HealthResponse {
///     pub status: String,
///     pub uptime_secs: u64,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Bridges an Axum handler with `utoipa::path` documentation.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `path = "..."`,
/// `responses(...)`, `tag = ...`). The attribute is only applied when the
/// consuming crate enables its `server` feature.
///
/// ```rust,ignore
/// #[ipnt_derive::api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a workspace error type.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` when not already derived.
/// * `<Name>Ext` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant carrying a source.
/// * `From<Source>` for variants with a `source` field (or `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper used by the `#[error]` strings.
///
/// # Requirements
///
/// Variants use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[ipnt_derive::ipnt_error]
/// pub enum DirectoryError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<Vec<u8>, DirectoryError> {
///     std::fs::read("nodes.json").context("Reading nodes")
/// }
/// ```
#[proc_macro_attribute]
pub fn ipnt_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Defines a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is a cheap `Arc`
/// wrapper that derefs to it and implements the kernel's `FeatureSlice`.
///
/// ```rust,ignore
/// #[ipnt_derive::ipnt_slice]
/// pub struct Directory {
///     pub domain: String,
/// }
///
/// let slice = Directory::new(DirectoryInner { domain: "ipnt.uk".to_owned() });
/// ```
#[proc_macro_attribute]
pub fn ipnt_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
