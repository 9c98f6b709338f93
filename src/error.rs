//! Error types for CIDR expansion and output.

use std::io;
use thiserror::Error;

/// Why a CIDR string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid CIDR address: empty input")]
    Empty,
    #[error("invalid CIDR address: {0} (missing '/<prefix-length>')")]
    MissingPrefix(String),
    #[error("invalid CIDR address: {input} (bad address {addr:?})")]
    InvalidAddress { input: String, addr: String },
    #[error("invalid CIDR address: {input} (bad prefix length {prefix:?})")]
    InvalidPrefix { input: String, prefix: String },
    #[error("invalid CIDR address: {input} (prefix /{prefix} exceeds {width}-bit address)")]
    PrefixOutOfRange { input: String, prefix: u32, width: u8 },
}

/// Any failure of a single expand invocation.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Usage(String),
}

impl ExpandError {
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        ExpandError::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExpandError::Usage(_) => 2,
            ExpandError::Parse(_) | ExpandError::Io { .. } => 1,
        }
    }
}
