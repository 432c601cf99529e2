//! The packed "COOPER" Morse message and its decoder.
//!
//! Symbols use a prefix code read from the least significant end after
//! discarding bit 0: `0` is a dash, `10` a dot and `11` a letter pause. The
//! last dot of the message does not fit into 32 bits and is appended after
//! the fixed number of decode steps.

use crate::types::MorseSymbol;
use heapless::Vec;

/// "COOPER" (`-.-. --- --- .--. . .-.`) minus its final dot.
pub const COOPER: u32 = 4_002_296_228;

/// Decode steps that consume [`COOPER`].
pub const DECODE_STEPS: usize = 22;

/// Letters in the message.
pub const LETTERS: u8 = 6;

/// Number of [`MorseStyle`](crate::types::MorseStyle)s rotated through.
pub const STYLES: u8 = 3;

/// Wrap point of the letter counter: the largest multiple of
/// `LETTERS * STYLES` that fits in a `u8`.
pub const POSITION_WRAP: u8 = (u8::MAX / (LETTERS * STYLES)) * LETTERS * STYLES;

/// Symbols in one rendering: the leading pause, the decoded stream and the
/// trailing dot.
pub const MESSAGE_SYMBOLS: usize = DECODE_STEPS + 2;

/// Dot on-time in milliseconds.
pub const DOT_MILLIS: u32 = 70;

/// Dash on-time in milliseconds.
pub const DASH_MILLIS: u32 = 210;

/// Rest time after every dot or dash in milliseconds.
pub const BREAK_MILLIS: u32 = 70;

/// Letter pause in milliseconds.
pub const PAUSE_MILLIS: u32 = 210;

/// Iterator over the symbols of a packed stream.
///
/// Yields exactly `steps` decoded symbols followed by one trailing dot.
#[derive(Debug, Clone)]
pub struct MorseDecoder {
    bits: u32,
    remaining: usize,
    trailing_dot: bool,
}

impl MorseDecoder {
    /// Decoder over `bits` running for `steps` decode steps.
    pub const fn new(bits: u32, steps: usize) -> Self {
        Self {
            bits,
            remaining: steps,
            trailing_dot: true,
        }
    }

    /// Decoder over the fixed [`COOPER`] stream.
    pub const fn cooper() -> Self {
        Self::new(COOPER, DECODE_STEPS)
    }

    fn next_bit(&mut self) -> bool {
        self.bits >>= 1;
        self.bits & 1 == 1
    }
}

impl Iterator for MorseDecoder {
    type Item = MorseSymbol;

    fn next(&mut self) -> Option<MorseSymbol> {
        if self.remaining == 0 {
            return if core::mem::take(&mut self.trailing_dot) {
                Some(MorseSymbol::Dot)
            } else {
                None
            };
        }
        self.remaining -= 1;

        let symbol = if !self.next_bit() {
            MorseSymbol::Dash
        } else if !self.next_bit() {
            MorseSymbol::Dot
        } else {
            MorseSymbol::LetterPause
        };
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining + usize::from(self.trailing_dot);
        (len, Some(len))
    }
}

impl ExactSizeIterator for MorseDecoder {}

/// Full symbol sequence of one rendering, starting with the letter pause
/// that picks the first letter's color.
pub fn cooper_message() -> Vec<MorseSymbol, MESSAGE_SYMBOLS> {
    // Capacity matches the decoder length plus the leading pause exactly.
    let mut symbols = Vec::new();
    let _ = symbols.push(MorseSymbol::LetterPause);
    for symbol in MorseDecoder::cooper() {
        let _ = symbols.push(symbol);
    }
    symbols
}
