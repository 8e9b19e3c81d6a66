//! Error types and exit codes for frontier
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, rejected run requests)
//! - 3: Input error (malformed frequencies, unknown nodes, empty input)

mod macros;

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
    /// Input error - malformed or inconsistent input data (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building inputs or running engines
#[derive(Error, Debug)]
pub enum FrontierError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("start and target are the same node: {node}")]
    SameEndpoints { node: String },

    #[error("a replay is already running; wait for it to finish or cancel it")]
    RunInProgress,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Input errors (exit code 3)
    #[error("malformed frequency entry '{entry}': {reason}")]
    MalformedFrequencies { entry: String, reason: String },

    #[error("empty input: {what}")]
    EmptyInput { what: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),

    #[error("replay interrupted")]
    Interrupted,
}

impl FrontierError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FrontierError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a file that could not be read
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        FrontierError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        FrontierError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node that is not part of the graph
    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        FrontierError::NodeNotFound { id: id.to_string() }
    }

    /// Create an error for a malformed `symbol:frequency` entry
    pub fn malformed(entry: &str, reason: impl std::fmt::Display) -> Self {
        FrontierError::MalformedFrequencies {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for input that has nothing to work on
    pub fn empty_input(what: &str) -> Self {
        FrontierError::EmptyInput {
            what: what.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FrontierError::UnknownFormat(_)
            | FrontierError::UsageError(_)
            | FrontierError::SameEndpoints { .. }
            | FrontierError::RunInProgress
            | FrontierError::InvalidValue { .. } => ExitCode::Usage,

            FrontierError::MalformedFrequencies { .. }
            | FrontierError::EmptyInput { .. }
            | FrontierError::NodeNotFound { .. }
            | FrontierError::AlreadyExists { .. } => ExitCode::Data,

            FrontierError::Io { .. }
            | FrontierError::Json(_)
            | FrontierError::Toml(_)
            | FrontierError::Other(_)
            | FrontierError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            FrontierError::UnknownFormat(_) => "unknown_format",
            FrontierError::UsageError(_) => "usage_error",
            FrontierError::SameEndpoints { .. } => "same_endpoints",
            FrontierError::RunInProgress => "run_in_progress",
            FrontierError::InvalidValue { .. } => "invalid_value",
            FrontierError::MalformedFrequencies { .. } => "malformed_frequencies",
            FrontierError::EmptyInput { .. } => "empty_input",
            FrontierError::NodeNotFound { .. } => "node_not_found",
            FrontierError::AlreadyExists { .. } => "already_exists",
            FrontierError::Io { .. } => "io_error",
            FrontierError::Json(_) => "json_error",
            FrontierError::Toml(_) => "toml_error",
            FrontierError::Other(_) => "other",
            FrontierError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for frontier operations
pub type Result<T> = std::result::Result<T, FrontierError>;
