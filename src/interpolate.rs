//! Integer linear interpolation between colors.

use crate::types::ColorTriple;

/// Channel value at step `step` of a `total_steps` blend from `from` to `to`.
///
/// The delta is scaled in 16 bits and truncated toward `from`, so step
/// `total_steps` lands exactly on `to` and step 0 stays on `from`. A zero
/// `total_steps` yields `to`.
pub fn lerp_step(step: u8, from: u8, to: u8, total_steps: u8) -> u8 {
    if total_steps == 0 {
        return to;
    }
    let step = step.min(total_steps);
    let scaled = |delta: u8| (u16::from(delta) * u16::from(step) / u16::from(total_steps)) as u8;

    if to > from {
        from + scaled(to - from)
    } else {
        from - scaled(from - to)
    }
}

/// Applies [`lerp_step`] to every channel independently.
pub fn lerp_color(step: u8, from: ColorTriple, to: ColorTriple, total_steps: u8) -> ColorTriple {
    ColorTriple::new(
        lerp_step(step, from.red, to.red, total_steps),
        lerp_step(step, from.green, to.green, total_steps),
        lerp_step(step, from.blue, to.blue, total_steps),
    )
}
