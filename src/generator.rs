use crate::codec::{FormatOptions, Uuid};
use crate::error::UuidError;
use crate::namespace;
use crate::source::{Clock, RandomSource, SystemClock, SystemRandom};
use crate::version;
use crate::version::UuidVersion;
use log::trace;

/// Per-call parameters. Only v3/v5 read any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// A registry name ("DNS", "URL", "OID", "X500") or a canonical UUID
    /// string.
    pub namespace: Option<String>,
    /// The name hashed under the namespace.
    pub name: Option<String>,
}

/// The engine's entry point: dispatches to the version constructors, feeding
/// them the clock and random source it owns.
pub struct UuidGenerator {
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
}

impl UuidGenerator {
    pub fn new() -> UuidGenerator {
        UuidGenerator::with_sources(Box::new(SystemClock), Box::new(SystemRandom))
    }

    /// Swap in deterministic sources for reproducible output.
    pub fn with_sources(clock: Box<dyn Clock>, random: Box<dyn RandomSource>) -> UuidGenerator {
        UuidGenerator { clock, random }
    }

    pub fn generate(
        &mut self,
        version: UuidVersion,
        options: &GenerateOptions,
    ) -> Result<Uuid, UuidError> {
        use UuidVersion::*;
        let uuid = match version {
            V1 => version::uuid_v1(self.clock.as_ref(), self.random.as_mut()),
            V2 => version::uuid_v2(self.clock.as_ref(), self.random.as_mut()),
            V3 | V5 => {
                let namespace = self.resolve_namespace(version, options)?;
                let name = options
                    .name
                    .as_deref()
                    .ok_or(UuidError::MissingName(version.version_num()))?;
                if version == V3 {
                    version::uuid_v3(namespace.as_bytes(), name)?
                } else {
                    version::uuid_v5(namespace.as_bytes(), name)?
                }
            }
            V4 => version::uuid_v4(self.random.as_mut()),
            V6 => version::uuid_v6(self.clock.as_ref(), self.random.as_mut()),
            V7 => version::uuid_v7(self.clock.as_ref(), self.random.as_mut()),
        };
        trace!("Generated {version} UUID {uuid}");
        Ok(uuid)
    }

    /// Generates `count` independent UUIDs of the same version.
    pub fn generate_batch(
        &mut self,
        version: UuidVersion,
        count: usize,
        options: &GenerateOptions,
    ) -> Result<Vec<Uuid>, UuidError> {
        (0..count).map(|_| self.generate(version, options)).collect()
    }

    fn resolve_namespace(
        &self,
        version: UuidVersion,
        options: &GenerateOptions,
    ) -> Result<Uuid, UuidError> {
        let value = options
            .namespace
            .as_deref()
            .ok_or(UuidError::MissingNamespace(version.version_num()))?;
        namespace::resolve(value)
    }
}

impl Default for UuidGenerator {
    fn default() -> UuidGenerator {
        UuidGenerator::new()
    }
}

/// One-shot generation against the system clock and random source, rendered
/// in canonical form.
pub fn generate_uuid(version: UuidVersion, options: &GenerateOptions) -> Result<String, UuidError> {
    Ok(UuidGenerator::new().generate(version, options)?.to_string())
}

/// Re-renders an existing UUID string with the given case and dash options.
pub fn format_uuid(uuid: &str, options: FormatOptions) -> Result<String, UuidError> {
    Ok(uuid.parse::<Uuid>()?.format(options))
}
