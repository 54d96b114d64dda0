use thiserror::Error;

/// Everything that can go wrong while parsing or generating a UUID. Every
/// variant is recoverable by the caller supplying corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UuidError {
    #[error("invalid UUID string {0:?}: expected 32 hex characters after stripping dashes")]
    Format(String),
    #[error("unknown namespace name {0:?}: expected DNS, URL, OID, or X500")]
    UnknownNamespace(String),
    #[error("namespace must be exactly 16 bytes, found {0}")]
    InvalidNamespace(usize),
    #[error("version {0} requires a namespace")]
    MissingNamespace(u8),
    #[error("version {0} requires a name")]
    MissingName(u8),
    #[error("unsupported UUID version {0:?}")]
    UnknownVersion(String),
}
