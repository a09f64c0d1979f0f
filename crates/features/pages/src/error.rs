use ipnt_directory::DirectoryError;
use std::borrow::Cow;

/// A specialized [`PagesError`] enum of this crate.
#[ipnt_derive::ipnt_error]
pub enum PagesError {
    /// A bundled template failed to compile.
    #[error("Template error{}: {source}", format_context(.context))]
    Template { source: handlebars::TemplateError, context: Option<Cow<'static, str>> },

    /// Rendering a page failed.
    #[error("Render error{}: {source}", format_context(.context))]
    Render { source: handlebars::RenderError, context: Option<Cow<'static, str>> },

    #[error("Directory error{}: {source}", format_context(.context))]
    Directory { source: DirectoryError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal pages error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for PagesError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Page request failed");
        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
