// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

pub type TermGlowResult<T> = Result<T, TermGlowError>;

/// Every fallible operation in this crate returns this error. Color support detection
/// and color rendering never fail (they degrade instead), so the variants are all about
/// the output sink, the async runtime, and configuration loading.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum TermGlowError {
    /// The output device rejected a write or a flush.
    #[error("Failed to write to the output device")]
    #[diagnostic(
        code(termglow::sink::write),
        help("The output stream may have been closed, eg a broken pipe")
    )]
    SinkWrite(#[source] std::io::Error),

    /// [`crate::Spinner::start`] needs a tokio runtime to spawn its ticking task.
    #[error("No tokio runtime is available to run the spinner task")]
    #[diagnostic(
        code(termglow::spinner::no_runtime),
        help("Call this from inside a tokio runtime, eg in a #[tokio::main] function")
    )]
    NoAsyncRuntime,

    /// The spinner task panicked or was cancelled before it could be joined.
    #[error("The spinner task did not shut down cleanly: {0}")]
    #[diagnostic(code(termglow::spinner::task_join))]
    TaskJoin(String),

    /// A configuration document could not be parsed.
    #[error("Failed to parse configuration")]
    #[diagnostic(
        code(termglow::config::parse),
        help("Check the field names and value types against the config struct")
    )]
    ConfigParse(#[source] serde_json::Error),
}

impl From<std::io::Error> for TermGlowError {
    fn from(error: std::io::Error) -> Self { Self::SinkWrite(error) }
}

impl From<tokio::task::JoinError> for TermGlowError {
    fn from(error: tokio::task::JoinError) -> Self { Self::TaskJoin(error.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_sink_write() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let error: TermGlowError = io_error.into();
        assert!(matches!(error, TermGlowError::SinkWrite(_)));
        assert_eq!(error.to_string(), "Failed to write to the output device");
    }

    #[test]
    fn test_diagnostic_code() {
        let error = TermGlowError::NoAsyncRuntime;
        let code = error.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("termglow::spinner::no_runtime"));
    }
}
