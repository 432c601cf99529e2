//! Software random sources for targets without a hardware generator.
//!
//! With the `nanorand` feature, [`nanorand::WyRand`] implements
//! [`RandomSource`] directly. [`MinStdRand`] reproduces the Park-Miller
//! sequence of avr-libc's `rand()` for boards that should replay the same
//! colors as the original firmware.

use crate::platform::RandomSource;

const MODULUS: u64 = 0x7FFF_FFFF;
const MULTIPLIER: u64 = 16_807;
const ZERO_SEED_REPLACEMENT: u32 = 123_459_876;

#[cfg(feature = "nanorand")]
impl RandomSource for nanorand::WyRand {
    fn next_random(&mut self) -> u16 {
        use nanorand::Rng;
        self.generate::<u16>() & 0x7FFF
    }
}

/// Park-Miller "minimal standard" generator, reduced to 15 bits per draw.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MinStdRand {
    state: u32,
}

impl MinStdRand {
    /// Creates a generator from `seed`.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Replaces the generator state.
    pub fn reseed(&mut self, seed: u32) {
        self.state = seed;
    }
}

impl Default for MinStdRand {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for MinStdRand {
    fn next_random(&mut self) -> u16 {
        let mut state = u64::from(self.state) % MODULUS;
        if state == 0 {
            state = u64::from(ZERO_SEED_REPLACEMENT);
        }
        state = state * MULTIPLIER % MODULUS;
        self.state = state as u32;
        (state & 0x7FFF) as u16
    }
}
