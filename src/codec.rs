use crate::error::UuidError;
use serde::de::{Error as DeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter, Write};
use std::str::FromStr;

/// A 128-bit identifier. Byte 6's high nibble carries the version, byte 8's
/// top two bits carry the variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uuid([u8; 16]);

/// Rendering options for [`Uuid::format`]. The default is the lowercase
/// dashed canonical form.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub uppercase: bool,
    pub no_dashes: bool,
}

// Byte indices that a dash precedes in the 8-4-4-4-12 grouping.
const DASH_BEFORE: [usize; 4] = [4, 6, 8, 10];

impl Uuid {
    pub const NIL: Uuid = Uuid([0; 16]);

    pub const fn from_bytes(bytes: [u8; 16]) -> Uuid {
        Uuid(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// The version nibble: which of the seven construction algorithms
    /// produced this value.
    pub const fn version_num(&self) -> u8 {
        self.0[6] >> 4
    }

    /// The top two bits of byte 8; `0b10` for every layout this crate
    /// produces.
    pub const fn variant(&self) -> u8 {
        self.0[8] >> 6
    }

    pub fn format(&self, options: FormatOptions) -> String {
        let mut result = String::with_capacity(36);
        for (index, byte) in self.0.iter().enumerate() {
            if !options.no_dashes && DASH_BEFORE.contains(&index) {
                result.push('-');
            }
            if options.uppercase {
                let _ = write!(result, "{byte:02X}");
            } else {
                let _ = write!(result, "{byte:02x}");
            }
        }
        result
    }
}

impl Display for Uuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatOptions::default()))
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Uuid, UuidError> {
        let hex: Vec<u8> = s.bytes().filter(|b| *b != b'-').collect();
        if hex.len() != 32 || !hex.iter().all(|b| b.is_ascii_hexdigit()) {
            return Err(UuidError::Format(s.to_string()));
        }
        let mut bytes = [0u8; 16];
        for (index, pair) in hex.chunks_exact(2).enumerate() {
            let pair = std::str::from_utf8(pair).map_err(|_| UuidError::Format(s.to_string()))?;
            bytes[index] =
                u8::from_str_radix(pair, 16).map_err(|_| UuidError::Format(s.to_string()))?;
        }
        Ok(Uuid(bytes))
    }
}

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
        struct UuidVisitor;

        impl Visitor<'_> for UuidVisitor {
            type Value = Uuid;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a canonical UUID string")
            }

            fn visit_str<E: DeError>(self, value: &str) -> Result<Uuid, E> {
                value.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(UuidVisitor)
    }
}
