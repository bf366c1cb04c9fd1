use std::io;

use regex::Error as RegexError;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ZettelError {
    /// Repository unreachable or its output malformed. Construction returns no
    /// partial object and attempts no retry.
    #[error("Catalog construction failed: {0}")]
    Construction(String),
    #[error("File System error: {0}")]
    Io(String),
    /// The identifier matched neither a known ID nor a known title.
    #[error("No node with identifier: {0}")]
    NotFound(String),
    #[error("Invalid tag pattern: {0}")]
    Pattern(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
}

impl From<io::Error> for ZettelError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => ZettelError::NotFound(format!("{x}")),
            _ => ZettelError::Io(format!("IOError: {}", x.kind())),
        }
    }
}

impl From<RegexError> for ZettelError {
    fn from(x: RegexError) -> Self {
        ZettelError::Pattern(format!("Regex parse failed: {x}"))
    }
}

impl From<JsonError> for ZettelError {
    fn from(x: JsonError) -> Self {
        ZettelError::Serialization(format!("JSON (de)serialization error: {x}"))
    }
}
