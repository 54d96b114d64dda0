mod name_based;
mod random_based;
mod time_based;

pub use name_based::{uuid_v3, uuid_v5};
pub use random_based::{uuid_v4, uuid_v7};
pub use time_based::{uuid_v1, uuid_v2, uuid_v6};

use crate::error::UuidError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The seven construction algorithms this engine implements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UuidVersion {
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
}

impl UuidVersion {
    pub fn version_num(self) -> u8 {
        use UuidVersion::*;
        match self {
            V1 => 1,
            V2 => 2,
            V3 => 3,
            V4 => 4,
            V5 => 5,
            V6 => 6,
            V7 => 7,
        }
    }

    /// v3 and v5 derive their bytes from a namespace and name instead of the
    /// clock or random source.
    pub fn is_name_based(self) -> bool {
        matches!(self, UuidVersion::V3 | UuidVersion::V5)
    }
}

impl Display for UuidVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("v{}", self.version_num()))
    }
}

impl FromStr for UuidVersion {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<UuidVersion, UuidError> {
        use UuidVersion::*;
        let trimmed = s.trim();
        let number = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed);
        match number {
            "1" => Ok(V1),
            "2" => Ok(V2),
            "3" => Ok(V3),
            "4" => Ok(V4),
            "5" => Ok(V5),
            "6" => Ok(V6),
            "7" => Ok(V7),
            _ => Err(UuidError::UnknownVersion(s.to_string())),
        }
    }
}

/// Overwrites the version nibble in byte 6 and forces the RFC 4122 variant
/// bits in byte 8.
pub(crate) fn stamp(bytes: &mut [u8; 16], version: u8) {
    bytes[6] &= 0x0f;
    bytes[6] |= version << 4;
    bytes[8] &= 0x3f;
    bytes[8] |= 0x80;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_prefixed_numbers() {
        assert_eq!("4".parse::<UuidVersion>().unwrap(), UuidVersion::V4);
        assert_eq!("v7".parse::<UuidVersion>().unwrap(), UuidVersion::V7);
        assert_eq!("V1".parse::<UuidVersion>().unwrap(), UuidVersion::V1);
        assert!(matches!(
            "8".parse::<UuidVersion>(),
            Err(UuidError::UnknownVersion(_))
        ));
    }

    #[test]
    fn rejects_repeated_version_prefixes() {
        for bad in ["vv7", "vV7", "VV4", "v v4"] {
            assert!(matches!(
                bad.parse::<UuidVersion>(),
                Err(UuidError::UnknownVersion(_))
            ), "{bad:?}");
        }
    }

    #[test]
    fn stamp_forces_version_and_variant() {
        let mut bytes = [0xff; 16];
        stamp(&mut bytes, 4);
        assert_eq!(bytes[6], 0x4f);
        assert_eq!(bytes[8], 0xbf);
    }
}
