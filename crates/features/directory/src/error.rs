use std::borrow::Cow;

/// A specialized [`DirectoryError`] enum of this crate.
#[ipnt_derive::ipnt_error]
pub enum DirectoryError {
    /// The data file exists but could not be read.
    #[error("Data file I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The data file is not a valid JSON object.
    #[error("Malformed data file{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal directory error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for DirectoryError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self, "Directory request failed");
        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
