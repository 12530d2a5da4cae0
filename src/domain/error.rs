use std::io;

use thiserror::Error;

/// Library-wide error type for suitegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No project preferences in the current directory.
    #[error("{0} file not found. Not a project folder; run 'suitegen create' first")]
    ConfigNotFound(String),

    /// A preference file exists but is not well-formed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Malformed template or substitution failure.
    #[error("Template error: {0}")]
    Template(String),

    /// Empty required field, invalid name, or similar input problem.
    #[error("{0}")]
    Validation(String),

    /// The external project tool exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    ExternalTool { command: String, details: String },

    /// The external project tool is not on PATH.
    #[error("{0} CLI is not available in the command line")]
    ToolNotInstalled(String),

    /// The user declined an interactive prompt.
    #[error("Cancelled")]
    UserCancelled,
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigNotFound(_) | AppError::ToolNotInstalled(_) => {
                io::ErrorKind::NotFound
            }
            AppError::ParseError { .. } => io::ErrorKind::InvalidData,
            AppError::Template(_) | AppError::Validation(_) => io::ErrorKind::InvalidInput,
            AppError::ExternalTool { .. } => io::ErrorKind::Other,
            AppError::UserCancelled => io::ErrorKind::Interrupted,
        }
    }

    /// Process exit status for this error. Cancellation is not a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UserCancelled => 0,
            _ => 1,
        }
    }
}
