//! Fixed-width 32-bit helpers shared by the MD5 and SHA-1 block functions.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

pub fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}

/// Pads a message up to 56 mod 64 bytes: a single 0x80 marker followed by
/// zeros. The caller appends its own 8-byte bit-length field, bringing the
/// total to a multiple of 64.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(input.len() + 72);
    padded.extend_from_slice(input);
    padded.push(0x80);
    while padded.len() % 64 != 56 {
        padded.push(0);
    }
    padded
}

/// Loads a 64-byte block as 16 little-endian words.
pub fn words_le(block: &[u8]) -> [u32; 16] {
    let mut words = [0u32; 16];
    LittleEndian::read_u32_into(block, &mut words);
    words
}

/// Loads a 64-byte block as 16 big-endian words.
pub fn words_be(block: &[u8]) -> [u32; 16] {
    let mut words = [0u32; 16];
    BigEndian::read_u32_into(block, &mut words);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotl_wraps_around() {
        assert_eq!(rotl(0x8000_0001, 1), 3);
        assert_eq!(rotl(0x1234_5678, 0), 0x1234_5678);
        assert_eq!(rotl(0xdead_beef, 16), 0xbeef_dead);
    }

    #[test]
    fn pad_leaves_room_for_the_length_field() {
        for len in [0, 1, 54, 55, 56, 63, 64, 119, 120] {
            let padded = pad(&vec![0xaa; len]);
            assert_eq!(padded.len() % 64, 56, "input length {len}");
            assert_eq!(padded[len], 0x80);
            assert!(padded[len + 1..].iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn word_loads_respect_endianness() {
        let mut block = [0u8; 64];
        block[0..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(words_le(&block)[0], 0x0403_0201);
        assert_eq!(words_be(&block)[0], 0x0102_0304);
    }
}
