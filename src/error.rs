//! Error types for loading and resolving a circuit.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A definition line matched none of the gate forms
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("wire '{name}' is already defined")]
    DuplicateWire { name: String },

    #[error("wire '{name}' is not defined")]
    UndefinedWire { name: String },

    /// Resolution reached a wire that was still being computed
    #[error("wire '{name}' depends on itself")]
    Cycle { name: String },
}

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn undefined(name: impl Into<String>) -> Self {
        Self::UndefinedWire { name: name.into() }
    }
}
