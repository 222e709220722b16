//! Error Handling
//!
//! Every fallible operation in the workspace reports one of three kinds of
//! failure:
//!
//! - `KeyNotFound`: strict lookup of a key the dict does not hold
//! - `VariantMismatch`: the requested type cannot be produced from the
//!   active variant
//! - `ConversionFailure`: the bridge could not classify, recurse into, or
//!   construct a foreign node
//!
//! The defaulting accessor (`Dict::get`) is the only place these are
//! swallowed. Everything else surfaces them to the caller.

use crate::value::ValueKind;

/// Error produced by accessors and by foreign-runtime conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Strict lookup on an absent key
    KeyNotFound { key: String },
    /// Requested type is incompatible with the active variant
    VariantMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
    /// A node could not be converted to or from a foreign runtime
    ConversionFailure { path: String, reason: String },
}

impl Error {
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound { key: key.into() }
    }

    pub fn mismatch(expected: ValueKind, found: ValueKind) -> Self {
        Error::VariantMismatch { expected, found }
    }

    pub fn conversion(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::ConversionFailure {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Location of a conversion failure, if this is one
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::ConversionFailure { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::KeyNotFound { key } => write!(f, "key not found in dictionary: {:?}", key),
            Error::VariantMismatch { expected, found } => {
                write!(f, "variant mismatch: expected {}, found {}", expected, found)
            }
            Error::ConversionFailure { path, reason } => {
                write!(f, "cannot convert value at {}: {}", path, reason)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
