//! The fixed light show and its power cycle.

use crate::engine::{EffectsEngine, RgbLed};
use crate::platform::{PowerControl, RandomSource};
use crate::types::TransitionPace;
use embedded_hal::delay::DelayNs;

/// Sets played per power cycle.
pub const SETS_PER_CYCLE: u8 = 10;

/// Steps of the settle transition at the start of a cycle.
pub const SETTLE_STEPS: u8 = 16;

/// Steps of a medium transition.
pub const MEDIUM_STEPS: u8 = 64;

/// Medium transitions before the flicker.
pub const LEADING_TRANSITIONS: u8 = 6;

/// Single-step transitions making up the flicker.
pub const FLICKER_TRANSITIONS: u8 = 100;

/// Medium transitions after the flicker, not counting the one picking the swish count.
pub const TRAILING_TRANSITIONS: u8 = 2;

/// Pause between the last swish and the Morse message in milliseconds.
pub const POST_SWISH_MILLIS: u32 = 100;

/// Pause before powering down in milliseconds.
pub const PRE_SLEEP_MILLIS: u32 = 50;

/// Where the show currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShowPhase {
    /// LED cleared at the start of a cycle.
    Blank,
    /// Initial quick transition out of darkness.
    Settle,
    /// Playing set `n` (0-based).
    Set(u8),
    /// Dark and asleep until the wake line changes.
    PowerDown,
}

/// Runs the fixed show: ten sets of effects, then sleep until woken.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `D` - Blocking delay provider
/// * `R` - Random source
/// * `P` - Power management
pub struct LightShow<L: RgbLed, D: DelayNs, R: RandomSource, P: PowerControl> {
    engine: EffectsEngine<L, D, R>,
    power: P,
    phase: ShowPhase,
    cycles: u32,
}

impl<L: RgbLed, D: DelayNs, R: RandomSource, P: PowerControl> LightShow<L, D, R, P> {
    /// Creates a show with the LED off.
    pub fn new(led: L, delay: D, rng: R, power: P) -> Self {
        Self::from_engine(EffectsEngine::new(led, delay, rng), power)
    }

    /// Creates a show around an existing engine, keeping its counters.
    pub fn from_engine(engine: EffectsEngine<L, D, R>, power: P) -> Self {
        Self {
            engine,
            power,
            phase: ShowPhase::Blank,
            cycles: 0,
        }
    }

    /// Plays the show forever.
    pub fn run(mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }

    /// Plays one full cycle and returns once the device has been woken.
    pub fn run_cycle(&mut self) {
        self.enter(ShowPhase::Blank);
        self.engine.blank();

        self.enter(ShowPhase::Settle);
        self.engine.transition_to_random(SETTLE_STEPS, TransitionPace::Quick);

        for set in 0..SETS_PER_CYCLE {
            self.enter(ShowPhase::Set(set));
            self.play_set();
        }

        self.enter(ShowPhase::PowerDown);
        self.engine.blank();
        self.engine.wait(PRE_SLEEP_MILLIS);

        #[cfg(feature = "defmt")]
        defmt::info!("powering down after cycle {}", self.cycles);
        self.power.sleep_until_wake();
        #[cfg(feature = "defmt")]
        defmt::info!("woken");

        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Plays one set: medium transitions around a fast flicker, a few
    /// swishes and the Morse message.
    pub fn play_set(&mut self) {
        for _ in 0..LEADING_TRANSITIONS {
            self.engine.transition_to_random(MEDIUM_STEPS, TransitionPace::Slow);
        }
        for _ in 0..FLICKER_TRANSITIONS {
            self.engine.transition_to_random(1, TransitionPace::Quick);
        }
        for _ in 0..TRAILING_TRANSITIONS {
            self.engine.transition_to_random(MEDIUM_STEPS, TransitionPace::Slow);
        }

        let id = self.engine.transition_to_random(MEDIUM_STEPS, TransitionPace::Slow);
        for _ in 0..swish_count(id) {
            self.engine.next_swish();
        }
        self.engine.wait(POST_SWISH_MILLIS);

        self.engine.play_morse();
    }

    fn enter(&mut self, phase: ShowPhase) {
        #[cfg(feature = "defmt")]
        defmt::debug!("show phase {}", phase);
        self.phase = phase;
    }

    /// Returns the current phase.
    pub fn phase(&self) -> ShowPhase {
        self.phase
    }

    /// Returns the number of completed power cycles.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Returns a reference to the effects engine.
    pub fn engine(&self) -> &EffectsEngine<L, D, R> {
        &self.engine
    }

    /// Returns a reference to the power controller.
    pub fn power(&self) -> &P {
        &self.power
    }
}

/// Swishes played for a color identifier: `1..=6`.
#[inline]
pub const fn swish_count(id: u8) -> u8 {
    id % 6 + 1
}
