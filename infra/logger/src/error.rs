use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[ipnt_derive::ipnt_error]
pub enum LoggerError {
    /// The log directory could not be created.
    #[error("Log directory error{}: {source}", format_context(.context))]
    Directory { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The rolling file appender rejected its settings.
    #[error("Rolling file appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// Level or filter directive that does not parse, or nothing to log to.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal logic errors.
    #[error("Internal logger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
