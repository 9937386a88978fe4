use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipError {
    #[error("Usage error: {message}")]
    Usage { message: String },

    #[error("Unable to open file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unable to rewind input: {0}")]
    Seek(#[source] io::Error),

    #[error("Read error: {0}")]
    Read(#[source] io::Error),

    #[error("Input changed between passes: counted {expected} integers, found {found}")]
    SourceChanged { expected: usize, found: usize },

    #[error("Write error: {0}")]
    Write(#[source] io::Error),

    #[error("Unable to allocate storage for {requested} integers")]
    Allocation { requested: usize },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Open,
    Io,
    Resource,
}

impl FlipError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FlipError::Usage { .. } | FlipError::InvalidConfig { .. } => ErrorCategory::Usage,
            FlipError::Open { .. } => ErrorCategory::Open,
            FlipError::Seek(_)
            | FlipError::Read(_)
            | FlipError::SourceChanged { .. }
            | FlipError::Write(_) => ErrorCategory::Io,
            FlipError::Allocation { .. } => ErrorCategory::Resource,
        }
    }

    /// Process exit status for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Usage => 1,
            ErrorCategory::Open => 2,
            ErrorCategory::Io => 3,
            ErrorCategory::Resource => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FlipError::Usage { .. } => "Usage: flip-nums <input> <output>".to_string(),
            FlipError::Open { path, .. } => format!("Unable to open file {}", path),
            FlipError::Seek(_) => {
                "The input cannot be rewound; try --strategy growable".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlipError>;
