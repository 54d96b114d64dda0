//! Ambient capabilities injected into the time/random based versions, so
//! tests can substitute deterministic sources for reproducible fixtures.

use chrono::Utc;
use rand::RngCore;

pub trait RandomSource {
    fn fill_bytes(&mut self, buf: &mut [u8]);

    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }
}

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// The thread-local CSPRNG from `rand`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        rand::thread_rng().fill_bytes(buf);
    }
}

#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        Utc::now().timestamp_millis() as u64
    }
}

/// Deterministic source that cycles through a fixed byte pattern.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    pattern: Vec<u8>,
    position: usize,
}

impl SequenceRandom {
    /// Panics if `pattern` is empty.
    pub fn new(pattern: Vec<u8>) -> SequenceRandom {
        assert!(!pattern.is_empty(), "pattern must not be empty");
        SequenceRandom { pattern, position: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf {
            *byte = self.pattern[self.position];
            self.position = (self.position + 1) % self.pattern.len();
        }
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
