//! The six orderings of three channel slots.
//!
//! Each ordering is packed into 6 bits as three 2-bit slot numbers: bits 0-1
//! hold the destination of the first value, bits 2-3 the destination of the
//! second and bits 4-5 the destination of the third.

use crate::types::{ColorTriple, PermutationError};

/// Number of distinct permutations.
pub const PERMUTATION_COUNT: u8 = 6;

const PATTERNS: [u8; PERMUTATION_COUNT as usize] = [0x24, 0x21, 0x12, 0x18, 0x09, 0x06];

/// One of the six bijections of `{0, 1, 2}` onto itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Permutation(u8);

impl Permutation {
    /// The ordering that leaves every value in place.
    pub const IDENTITY: Permutation = Permutation(0);

    /// Selects a permutation by any index, reduced modulo 6.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Permutation(index % PERMUTATION_COUNT)
    }

    /// Index in `0..6`.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Destination slots for the first, second and third value.
    #[inline]
    pub const fn targets(self) -> [usize; 3] {
        let pattern = PATTERNS[self.0 as usize];
        [
            (pattern & 3) as usize,
            ((pattern >> 2) & 3) as usize,
            (pattern >> 4) as usize,
        ]
    }

    /// Moves each value of `values` to its destination slot.
    pub fn apply(self, values: [u8; 3]) -> [u8; 3] {
        let mut out = [0; 3];
        for (value, slot) in values.into_iter().zip(self.targets()) {
            out[slot] = value;
        }
        out
    }

    /// Applies the permutation to a color's channels.
    pub fn apply_color(self, color: ColorTriple) -> ColorTriple {
        let [red, green, blue] = self.apply([color.red, color.green, color.blue]);
        ColorTriple::new(red, green, blue)
    }
}

impl TryFrom<u8> for Permutation {
    type Error = PermutationError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index < PERMUTATION_COUNT {
            Ok(Permutation(index))
        } else {
            Err(PermutationError::OutOfRange(index))
        }
    }
}

impl From<Permutation> for u8 {
    fn from(permutation: Permutation) -> Self {
        permutation.0
    }
}

/// Applies permutation `index mod 6` to `color`.
#[inline]
pub fn permute(index: u8, color: ColorTriple) -> ColorTriple {
    Permutation::from_index(index).apply_color(color)
}
