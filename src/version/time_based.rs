//! v1, v2, and v6: built around the 60-bit Gregorian timestamp.

use crate::codec::Uuid;
use crate::source::{Clock, RandomSource};
use byteorder::{BigEndian, ByteOrder};

/// 100-ns intervals between the Gregorian reform (1582-10-15) and the Unix
/// epoch.
const GREGORIAN_OFFSET_100NS: u64 = 122_192_928_000_000_000;

fn gregorian_timestamp(clock: &dyn Clock) -> u64 {
    clock
        .now_millis()
        .wrapping_mul(10_000)
        .wrapping_add(GREGORIAN_OFFSET_100NS)
}

/// Gregorian time-based UUID: time-low(32), time-mid(16), time-high(12),
/// random 14-bit clock sequence, random 48-bit node.
pub fn uuid_v1(clock: &dyn Clock, random: &mut dyn RandomSource) -> Uuid {
    let timestamp = gregorian_timestamp(clock);
    let mut bytes = [0u8; 16];
    BigEndian::write_u32(&mut bytes[0..4], timestamp as u32);
    BigEndian::write_u16(&mut bytes[4..6], (timestamp >> 32) as u16);
    BigEndian::write_u16(&mut bytes[6..8], ((timestamp >> 48) & 0x0fff) as u16);
    write_clock_seq_and_node(&mut bytes, random);
    super::stamp(&mut bytes, 1);
    Uuid::from_bytes(bytes)
}

/// DCE Security UUID, simulated: a random 32-bit local-id replaces time-low
/// and a random local domain (person, group, or org) sits in the low
/// clock-sequence byte. No real UID/GID lookup is performed.
pub fn uuid_v2(clock: &dyn Clock, random: &mut dyn RandomSource) -> Uuid {
    let timestamp = gregorian_timestamp(clock);
    let mut bytes = [0u8; 16];
    BigEndian::write_u32(&mut bytes[0..4], random.next_u32());
    BigEndian::write_u16(&mut bytes[4..6], (timestamp >> 32) as u16);
    BigEndian::write_u16(&mut bytes[6..8], ((timestamp >> 48) & 0x0fff) as u16);
    bytes[8] = (random.next_u32() & 0x3f) as u8;
    bytes[9] = (random.next_u32() % 3) as u8;
    random.fill_bytes(&mut bytes[10..16]);
    super::stamp(&mut bytes, 2);
    Uuid::from_bytes(bytes)
}

/// Reordered Gregorian time-based UUID: time-high(32), time-mid(16),
/// time-low(12), so lexicographic order follows creation order.
pub fn uuid_v6(clock: &dyn Clock, random: &mut dyn RandomSource) -> Uuid {
    let timestamp = gregorian_timestamp(clock);
    let mut bytes = [0u8; 16];
    BigEndian::write_u32(&mut bytes[0..4], (timestamp >> 28) as u32);
    BigEndian::write_u16(&mut bytes[4..6], ((timestamp >> 12) & 0xffff) as u16);
    BigEndian::write_u16(&mut bytes[6..8], (timestamp & 0x0fff) as u16);
    write_clock_seq_and_node(&mut bytes, random);
    super::stamp(&mut bytes, 6);
    Uuid::from_bytes(bytes)
}

fn write_clock_seq_and_node(bytes: &mut [u8; 16], random: &mut dyn RandomSource) {
    let clock_seq = (random.next_u32() & 0x3fff) as u16;
    BigEndian::write_u16(&mut bytes[8..10], clock_seq);
    random.fill_bytes(&mut bytes[10..16]);
}
