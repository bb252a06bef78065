//! Error types and exit codes for scrollkeep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data/state error (missing state file, corrupted state, unknown scroll)
//!
//! Degenerate inputs (empty segments, empty codex, zero denominators) and
//! malformed timestamps never surface here; they resolve to neutral values.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/state error - missing or corrupted state (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during scrollkeep operations
#[derive(Error, Debug)]
pub enum ScrollError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data/state errors (exit code 3)
    #[error("state not found at {path:?} (run `scrollkeep init` first)")]
    StateNotFound { path: PathBuf },

    #[error("state already exists at {path:?}")]
    StateAlreadyExists { path: PathBuf },

    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    #[error("scroll not found: {id}")]
    ScrollNotFound { id: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl ScrollError {
    /// Build a state-corruption error
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        ScrollError::InvalidState {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScrollError::UnknownFormat(_) | ScrollError::UsageError(_) => ExitCode::Usage,

            ScrollError::StateNotFound { .. }
            | ScrollError::StateAlreadyExists { .. }
            | ScrollError::InvalidState { .. }
            | ScrollError::ScrollNotFound { .. } => ExitCode::Data,

            ScrollError::Io(_)
            | ScrollError::Json(_)
            | ScrollError::Toml(_)
            | ScrollError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ScrollError::UnknownFormat(_) => "unknown_format",
            ScrollError::UsageError(_) => "usage_error",
            ScrollError::StateNotFound { .. } => "state_not_found",
            ScrollError::StateAlreadyExists { .. } => "state_already_exists",
            ScrollError::InvalidState { .. } => "invalid_state",
            ScrollError::ScrollNotFound { .. } => "scroll_not_found",
            ScrollError::Io(_) => "io_error",
            ScrollError::Json(_) => "json_error",
            ScrollError::Toml(_) => "toml_error",
            ScrollError::Other(_) => "other",
        }
    }
}

/// Result type alias for scrollkeep operations
pub type Result<T> = std::result::Result<T, ScrollError>;
