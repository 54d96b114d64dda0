use crate::codec::Uuid;
use crate::source::{Clock, RandomSource};
use byteorder::{BigEndian, ByteOrder};

/// Fully random UUID: 16 random bytes with the version and variant stamped
/// over them.
pub fn uuid_v4(random: &mut dyn RandomSource) -> Uuid {
    let mut bytes = [0u8; 16];
    random.fill_bytes(&mut bytes);
    super::stamp(&mut bytes, 4);
    Uuid::from_bytes(bytes)
}

/// Unix-epoch time-ordered UUID: 48-bit millisecond timestamp, then 74 random
/// bits around the version and variant fields. Two values generated within
/// the same millisecond share a prefix but have no defined relative order —
/// there is no monotonic counter.
pub fn uuid_v7(clock: &dyn Clock, random: &mut dyn RandomSource) -> Uuid {
    let mut bytes = [0u8; 16];
    BigEndian::write_u48(&mut bytes[0..6], clock.now_millis() & 0xffff_ffff_ffff);
    random.fill_bytes(&mut bytes[6..16]);
    super::stamp(&mut bytes, 7);
    Uuid::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FixedClock, SequenceRandom, SystemRandom};

    #[test]
    fn v4_stamps_version_and_variant_over_random_bytes() {
        let mut random = SequenceRandom::new(vec![0xff]);
        let uuid = uuid_v4(&mut random);
        assert_eq!(uuid.version_num(), 4);
        assert_eq!(uuid.variant(), 0b10);
        assert_eq!(uuid.as_bytes()[0], 0xff);
        assert_eq!(uuid.as_bytes()[15], 0xff);
    }

    #[test]
    fn v4_values_differ_between_calls() {
        let mut random = SystemRandom;
        assert_ne!(uuid_v4(&mut random), uuid_v4(&mut random));
    }

    #[test]
    fn v7_leads_with_the_unix_millisecond_timestamp() {
        let millis = 1_700_000_000_123u64;
        let mut random = SequenceRandom::new(vec![0x00]);
        let uuid = uuid_v7(&FixedClock(millis), &mut random);
        let b = uuid.as_bytes();
        assert_eq!(BigEndian::read_u48(&b[0..6]), millis);
        assert_eq!(uuid.version_num(), 7);
        assert_eq!(uuid.variant(), 0b10);
    }

    #[test]
    fn v7_timestamps_order_across_milliseconds() {
        let mut random = SystemRandom;
        let earlier = uuid_v7(&FixedClock(1_000), &mut random);
        let later = uuid_v7(&FixedClock(1_001), &mut random);
        assert!(earlier.as_bytes()[0..6] < later.as_bytes()[0..6]);
    }
}
