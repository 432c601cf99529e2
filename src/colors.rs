//! Color generation helpers.
//!
//! Random colors keep `red + green + blue == 255` so that every color the
//! show picks has the same total duty cycle. All helpers are pure; the
//! engine owns the random source and the current colors.

use crate::permutation::permute;
use crate::types::ColorTriple;

/// All channels off.
pub const OFF: ColorTriple = ColorTriple::new(0, 0, 0);

/// Full white, the "on" color of the white Morse style.
pub const WHITE: ColorTriple = ColorTriple::new(255, 255, 255);

/// Rest level paired with [`WHITE`].
pub const DIM_WHITE: ColorTriple = ColorTriple::new(64, 64, 64);

/// Channel sum of every generated random color.
pub const COLOR_TOTAL: u8 = 255;

/// A generated color together with its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomColor {
    /// The constant-total color, already permuted.
    pub color: ColorTriple,

    /// Raw first channel value before permutation. Callers derive counts from it.
    pub id: u8,
}

/// Builds a constant-total color from a random draw.
///
/// Only the low 15 bits of `draw` are used.
pub fn color_from_draw(draw: u16) -> RandomColor {
    let draw = draw & 0x7FFF;
    let first = (draw & 0xFF) as u8;
    let second = ((draw >> 7) % (256 - u16::from(first))) as u8;
    let third = COLOR_TOTAL - first - second;

    RandomColor {
        color: permute(first, ColorTriple::new(first, second, third)),
        id: first,
    }
}

/// The 1/8 intensity companion of `color`.
#[inline]
pub fn dim(color: ColorTriple) -> ColorTriple {
    ColorTriple::new(color.red / 8, color.green / 8, color.blue / 8)
}

/// `color` at half intensity.
#[inline]
pub fn half(color: ColorTriple) -> ColorTriple {
    ColorTriple::new(color.red / 2, color.green / 2, color.blue / 2)
}

/// One of six single- or dual-channel colors selected by the letter position.
///
/// Even positions light one channel at 255, odd positions light the other two
/// at 127.
pub fn extreme(position: u8) -> ColorTriple {
    let mut mask = 1u8 << ((position / 2 + position / 6) % 3);
    let level = if position & 1 == 1 {
        mask = !mask & 0x0F;
        127
    } else {
        255
    };
    let channel = |bit: u8| if mask & bit != 0 { level } else { 0 };

    ColorTriple::new(channel(1), channel(2), channel(4))
}

/// Sum of all channels, widened so it cannot wrap.
#[inline]
pub fn channel_sum(color: ColorTriple) -> u16 {
    u16::from(color.red) + u16::from(color.green) + u16::from(color.blue)
}
