//! Integration tests for permutations, color generation and interpolation

mod common;
use common::*;

use cooper_glow::colors::{self, COLOR_TOTAL, channel_sum, color_from_draw};
use cooper_glow::permutation::PERMUTATION_COUNT;
use cooper_glow::{ColorTriple, TransitionPace, envelope, lerp_step, permute};

fn sorted(color: ColorTriple) -> [u8; 3] {
    let mut values = channels(color);
    values.sort_unstable();
    values
}

#[test]
fn permute_preserves_the_multiset_of_values() {
    let samples = [
        ColorTriple::new(0, 0, 0),
        ColorTriple::new(1, 2, 3),
        ColorTriple::new(255, 0, 255),
        ColorTriple::new(10, 10, 200),
        ColorTriple::new(99, 142, 14),
    ];
    for index in 0..=255u8 {
        for color in samples {
            assert_eq!(sorted(permute(index, color)), sorted(color));
        }
    }
}

#[test]
fn permute_reaches_all_six_orderings() {
    let color = ColorTriple::new(1, 2, 3);
    let mut seen: heapless::Vec<[u8; 3], 6> = heapless::Vec::new();
    for index in 0..PERMUTATION_COUNT {
        let permuted = channels(permute(index, color));
        assert!(!seen.contains(&permuted));
        seen.push(permuted).unwrap();
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn every_random_color_sums_to_255() {
    for draw in 0..0x8000u16 {
        let generated = color_from_draw(draw);
        assert_eq!(
            channel_sum(generated.color),
            u16::from(COLOR_TOTAL),
            "draw {draw:#06x}"
        );

        // Unpermuted triple has the same values.
        let first = (draw & 0xFF) as u8;
        assert_eq!(generated.id, first);
        assert!(channels(generated.color).contains(&first));
    }
}

#[test]
fn random_color_sets_dim_companion() {
    let mut engine = engine_with(&[0x1234]);
    let id = engine.random_color();

    assert_eq!(id, 0x34);
    assert_eq!(channel_sum(engine.hi()), 255);
    assert_eq!(engine.lo(), colors::dim(engine.hi()));
}

#[cfg(feature = "nanorand")]
#[test]
fn wyrand_colors_keep_the_constant_total() {
    let rng = nanorand::WyRand::new_seed(7);
    let mut engine = cooper_glow::EffectsEngine::new(MockLed::new(), MockDelay::new(), rng);
    for _ in 0..256 {
        engine.random_color();
        assert_eq!(channel_sum(engine.hi()), 255);
        assert_eq!(engine.lo(), colors::dim(engine.hi()));
    }
}

#[test]
fn lerp_final_step_lands_on_target() {
    for total in 1..=255u8 {
        for from in (0..=255u8).step_by(3) {
            for to in (0..=255u8).step_by(7) {
                assert_eq!(lerp_step(total, from, to, total), to);
            }
        }
    }
}

#[test]
fn lerp_stays_in_range_and_monotonic_for_extreme_inputs() {
    for total in 1..=255u8 {
        let mut last_up = 0;
        let mut last_down = 255;
        for step in 0..=total {
            let up = lerp_step(step, 0, 255, total);
            let down = lerp_step(step, 255, 0, total);
            assert!(up >= last_up && down <= last_down);
            last_up = up;
            last_down = down;
        }
        assert_eq!((last_up, last_down), (255, 0));
    }
}

#[test]
fn transition_from_black_reaches_half_target_monotonically() {
    let mut engine = engine_with(&[0x1234]);
    let target = colors::half(color_from_draw(0x1234).color);

    let id = engine.transition_to_random(4, TransitionPace::Quick);
    assert_eq!(id, 0x34);
    assert_eq!(engine.rng().draws(), 1);

    let history = engine.led().color_history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[3], target);

    let mut previous = [0u8; 3];
    for color in history {
        let current = channels(*color);
        for channel in 0..3 {
            assert!(current[channel] >= previous[channel]);
            assert!(current[channel] <= channels(target)[channel]);
        }
        previous = current;
    }

    assert_eq!(engine.delay().history(), &[70, 70, 70, 70]);
    assert_eq!(engine.hi(), target);
}

#[test]
fn repeated_color_holds_steady() {
    let mut engine = engine_with(&[0]);
    engine.transition_to_random(1, TransitionPace::Quick);
    assert_eq!(engine.hi(), ColorTriple::new(0, 0, 127));

    engine.transition_to_random(8, TransitionPace::Slow);
    let held = &engine.led().color_history()[1..];
    assert!(held.iter().all(|c| *c == ColorTriple::new(0, 0, 127)));
    assert_eq!(engine.delay().total_millis(), 70 + 8 * 100);
}

#[test]
fn transition_moves_each_channel_toward_its_own_target() {
    // Second draw: (5, 0, 250) permuted by 5 into (250, 0, 5).
    let mut engine = engine_with(&[0, 5]);
    engine.transition_to_random(1, TransitionPace::Quick);
    engine.led_mut().clear_history();

    engine.transition_to_random(5, TransitionPace::Slow);
    let history = engine.led().color_history();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0], ColorTriple::new(25, 0, 102));
    assert_eq!(history[4], ColorTriple::new(125, 0, 2));
    for pair in history.windows(2) {
        assert!(pair[1].red > pair[0].red);
        assert!(pair[1].blue < pair[0].blue);
    }
}

#[test]
fn transition_keeps_full_intensity_companion_in_lo() {
    let mut engine = engine_with(&[0]);
    engine.transition_to_random(4, TransitionPace::Slow);
    assert_eq!(engine.lo(), ColorTriple::new(0, 0, 31));
}

#[test]
fn envelope_peaks_in_the_middle_of_the_pulse() {
    assert_eq!(envelope(0), 0x00);
    assert_eq!(envelope(17), 0xFF);
    assert_eq!(envelope(49), 0x00);
    assert_eq!(envelope(50), envelope(0));
    assert!((0..50).all(|i| envelope(i) <= envelope(17)));
}

#[test]
fn envelope_is_symmetric_around_peak_within_sampling_error() {
    for offset in 1..=17u8 {
        let before = i16::from(envelope(17 - offset));
        let after = i16::from(envelope(17 + offset));
        assert!((before - after).abs() <= 14, "offset {offset}");
    }
    assert!((34..50).all(|i| envelope(i) == 0));
}
