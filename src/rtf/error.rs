//! Error types for RTF parsing.

use thiserror::Error;

/// Result type for RTF operations.
pub type RtfResult<T> = Result<T, RtfError>;

/// RTF parsing errors.
///
/// The scanner never fails; every variant here is raised by the parser's
/// structural checks or by the file/serialization collaborators around it.
#[derive(Error, Debug)]
pub enum RtfError {
    /// A group end was found with no open scope left to close
    #[error("Unbalanced groups: too many group endings at byte {offset}")]
    UnbalancedGroups { offset: usize },

    /// A control word carries a numeric parameter that is not a valid integer
    #[error("Invalid parameter '{parameter}' for control word \\{name} at byte {offset}")]
    InvalidControlParameter {
        name: String,
        parameter: String,
        offset: usize,
    },

    /// A token was requested from an exhausted token stream
    #[error("Token stream is empty")]
    EmptyTokenStream,

    /// IO error while reading a document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl RtfError {
    /// Byte offset of the offending token, when the error has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            RtfError::UnbalancedGroups { offset }
            | RtfError::InvalidControlParameter { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
