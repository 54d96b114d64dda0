//! Deterministic UUID generation engine.
//!
//! Implements the seven standard version algorithms (v1, v2, v4, v6, v7 from
//! the clock and random source; v3, v5 from hand-rolled MD5/SHA-1 over a
//! namespace and name) plus the canonical string codec and the well-known
//! namespace registry.

pub mod codec;
pub mod digest;
pub mod error;
pub mod generator;
pub mod namespace;
pub mod source;
pub mod version;

pub use codec::{FormatOptions, Uuid};
pub use error::UuidError;
pub use generator::{GenerateOptions, UuidGenerator, format_uuid, generate_uuid};
pub use namespace::{NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};
pub use version::UuidVersion;
