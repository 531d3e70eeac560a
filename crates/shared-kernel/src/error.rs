// crates/shared-kernel/src/error.rs
use thiserror::Error;

use crate::value_objects::FieldRole;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AggregateError>,
    },

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, AggregateError>;

impl AggregateError {
    /// Category of the innermost error, looking through any context layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Context { source, .. } => source.kind(),
            Self::Domain(err) => err.kind(),
            Self::Infrastructure(err) => err.kind(),
        }
    }
}

/// Coarse classification used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    UnknownSortField,
    Parse,
    MalformedInput,
    Io,
}

impl ErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Configuration => "configuration error",
            Self::UnknownSortField => "unknown sort field",
            Self::Parse => "parse error",
            Self::MalformedInput => "malformed input",
            Self::Io => "I/O error",
        }
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("field '{field}' is assigned to both --{first} and --{second}")]
    OverlappingRoles {
        field: String,
        first: FieldRole,
        second: FieldRole,
    },

    #[error("unknown field name '{field}' given to --{role}")]
    UnknownField { field: String, role: FieldRole },

    #[error("unknown field name '{field}' given to --sort")]
    UnknownSortField { field: String },

    #[error("column '{name}' appears more than once in the header")]
    DuplicateColumn { name: String },

    #[error("line {line}: column '{field}' value {value:?} is not a number")]
    InvalidNumber { field: String, value: String, line: u64 },

    #[error("line {line}: expected {expected} fields, found {found}")]
    RecordWidthMismatch { line: u64, expected: usize, found: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

impl DomainError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OverlappingRoles { .. } | Self::UnknownField { .. } | Self::DuplicateColumn { .. } => {
                ErrorKind::Configuration
            }
            Self::UnknownSortField { .. } => ErrorKind::UnknownSortField,
            Self::InvalidNumber { .. } => ErrorKind::Parse,
            Self::RecordWidthMismatch { .. } => ErrorKind::MalformedInput,
        }
    }
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("failed to read input{}: {details}", line_suffix(.line))]
    InputRead {
        line: Option<u64>,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl InfrastructureError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InputRead { .. } => ErrorKind::MalformedInput,
            Self::SerializationError { .. } | Self::OutputError { .. } => ErrorKind::Io,
        }
    }
}

#[allow(clippy::ref_option)]
fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for AggregateError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AggregateError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AggregateError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| AggregateError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AggregateError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
