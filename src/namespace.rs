use crate::codec::Uuid;
use crate::error::UuidError;
use case_insensitive_hashmap::CaseInsensitiveHashMap;
use lazy_static::lazy_static;
use unicase::UniCase;

// RFC 4122 Appendix C well-known namespace IDs.
pub const NAMESPACE_DNS: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);
pub const NAMESPACE_URL: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);
pub const NAMESPACE_OID: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);
pub const NAMESPACE_X500: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

lazy_static! {
    static ref WELL_KNOWN: CaseInsensitiveHashMap<Uuid> = [
        ("DNS", NAMESPACE_DNS),
        ("URL", NAMESPACE_URL),
        ("OID", NAMESPACE_OID),
        ("X500", NAMESPACE_X500),
    ]
    .into_iter()
    .map(|(name, uuid)| (UniCase::new(name.to_string()), uuid))
    .collect();
}

/// Looks up a well-known namespace by name, case-insensitively.
pub fn lookup(name: &str) -> Result<Uuid, UuidError> {
    WELL_KNOWN
        .get(name)
        .copied()
        .ok_or_else(|| UuidError::UnknownNamespace(name.to_string()))
}

/// Resolves a namespace argument: a registry name first, otherwise a
/// canonical UUID string. Inputs of canonical length (36 chars, or 32
/// undashed) go through the codec's parse contract; anything else is taken
/// for a registry name and fails as unknown.
pub fn resolve(value: &str) -> Result<Uuid, UuidError> {
    if let Some(uuid) = WELL_KNOWN.get(value) {
        return Ok(*uuid);
    }
    if value.len() == 36 || value.len() == 32 {
        return value.parse();
    }
    Err(UuidError::UnknownNamespace(value.to_string()))
}
