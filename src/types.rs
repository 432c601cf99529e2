//! Core types shared by the effects.

use palette::Srgb;

/// Three 8-bit channel intensities (red = 0, green = 1, blue = 2).
pub type ColorTriple = Srgb<u8>;

/// How long each interpolation step of a color transition is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionPace {
    /// 70 ms per step.
    Quick,

    /// 100 ms per step.
    Slow,
}

impl TransitionPace {
    /// Hold time of a single step in milliseconds.
    #[inline]
    pub const fn step_millis(self) -> u32 {
        match self {
            TransitionPace::Quick => 70,
            TransitionPace::Slow => 100,
        }
    }
}

/// A symbol of the Morse message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MorseSymbol {
    /// Short pulse.
    Dot,

    /// Long pulse.
    Dash,

    /// Gap between letters. Also selects the color for the next letter.
    LetterPause,
}

/// Color policy for the letter currently being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MorseStyle {
    /// Bright white pulses over a dim white rest level.
    White,

    /// A fresh random color after every dot and dash.
    Crazy,

    /// One or two channels fully on, the rest off.
    Extreme,
}

impl MorseStyle {
    /// Style active at the given letter counter.
    #[inline]
    pub const fn for_position(morse_pos: u8) -> Self {
        match (morse_pos / crate::morse::LETTERS) % crate::morse::STYLES {
            0 => MorseStyle::White,
            1 => MorseStyle::Crazy,
            _ => MorseStyle::Extreme,
        }
    }
}

/// Permutation construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PermutationError {
    /// Index outside `0..6`.
    OutOfRange(u8),
}

impl core::fmt::Display for PermutationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PermutationError::OutOfRange(index) => {
                write!(f, "permutation index {} out of range 0..6", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PermutationError {}
