//! One-second staggered pulse across the three channels.
//!
//! The envelope is a 50-sample `sin²` pulse. Channels 1 and 2 read it 8 and
//! 16 samples late, so the peaks sweep across the LED.

use crate::permutation::permute;
use crate::types::ColorTriple;

/// Samples per swish (one second at 50 Hz).
pub const SWISH_FRAMES: u8 = 50;

/// Per-channel lag in samples.
pub const CHANNEL_LAG: u8 = 8;

/// Hold time of each frame in milliseconds. Computation time comes on top.
pub const FRAME_MILLIS: u32 = 25;

#[rustfmt::skip]
const SIN2: [u8; SWISH_FRAMES as usize] = [
    0x00, 0x02, 0x08, 0x12, 0x20, 0x31, 0x44, 0x5a, 0x70, 0x88,
    0x9f, 0xb5, 0xc9, 0xdb, 0xe9, 0xf5, 0xfc, 0xff, 0xfe, 0xf9,
    0xf0, 0xe4, 0xd3, 0xc1, 0xac, 0x95, 0x7e, 0x67, 0x51, 0x3c,
    0x29, 0x1a, 0x0d, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Envelope sample `index mod 50`.
#[inline]
pub fn envelope(index: u8) -> u8 {
    SIN2[(index % SWISH_FRAMES) as usize]
}

/// Duty cycle of `channel` (0..=2) at frame `frame`.
#[inline]
pub fn channel_duty(frame: u8, channel: u8) -> u8 {
    let lag = CHANNEL_LAG * (channel % 3);
    envelope((frame % SWISH_FRAMES) + SWISH_FRAMES - lag)
}

/// Color of frame `frame` for the swish selected by `permutation`.
pub fn swish_frame(frame: u8, permutation: u8) -> ColorTriple {
    permute(
        permutation,
        ColorTriple::new(
            channel_duty(frame, 0),
            channel_duty(frame, 1),
            channel_duty(frame, 2),
        ),
    )
}
