//! Effects engine owning the LED, the timing and the color state.
//!
//! Provides [`EffectsEngine`] which renders color transitions, swishes and
//! the Morse message onto an [`RgbLed`], blocking on a
//! [`DelayNs`](embedded_hal::delay::DelayNs) between frames.

use crate::colors::{self, OFF, RandomColor};
use crate::interpolate::lerp_color;
use crate::morse;
use crate::permutation::PERMUTATION_COUNT;
use crate::platform::RandomSource;
use crate::swish::{self, SWISH_FRAMES};
use crate::types::{ColorTriple, MorseStyle, MorseSymbol, TransitionPace};
use embedded_hal::delay::DelayNs;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, etc.) to allow
/// the engine to control it.
pub trait RgbLed {
    /// Drives the LED at the given channel intensities.
    ///
    /// The LED must hold this color until the next call. Handle any hardware
    /// errors internally - this method cannot fail.
    fn set_color(&mut self, color: ColorTriple);
}

/// Renders the light effects onto a single RGB LED.
///
/// All effect state lives here: the active `hi` color, its `lo` rest
/// companion, the Morse letter counter and the swish counter. Every method
/// blocks until its effect has finished.
///
/// # Type Parameters
/// * `L` - LED implementation type
/// * `D` - Blocking delay provider
/// * `R` - Random source
pub struct EffectsEngine<L: RgbLed, D: DelayNs, R: RandomSource> {
    led: L,
    delay: D,
    rng: R,
    hi: ColorTriple,
    lo: ColorTriple,
    morse_pos: u8,
    crazy: bool,
    swish_pos: u8,
}

impl<L: RgbLed, D: DelayNs, R: RandomSource> EffectsEngine<L, D, R> {
    /// Creates a new engine with the LED turned off.
    pub fn new(mut led: L, delay: D, rng: R) -> Self {
        led.set_color(OFF);

        Self {
            led,
            delay,
            rng,
            hi: OFF,
            lo: OFF,
            morse_pos: 0,
            crazy: false,
            swish_pos: 0,
        }
    }

    /// Picks a new random `hi` color and its 1/8 `lo` companion.
    ///
    /// Returns the color identifier (first channel before permutation).
    pub fn random_color(&mut self) -> u8 {
        let RandomColor { color, id } = colors::color_from_draw(self.rng.next_random());
        self.hi = color;
        self.lo = colors::dim(color);
        id
    }

    /// Sets `hi` to off and pushes it to the LED.
    pub fn blank(&mut self) {
        self.hi = OFF;
        self.show_hi();
    }

    /// Morphs from the current `hi` to half of a new random color in `steps` steps.
    ///
    /// Pushes one color per step and holds it for the pace's step time. The
    /// last push is exactly the halved target. `lo` is left at the new
    /// color's dim companion.
    ///
    /// Returns the identifier of the new random color.
    pub fn transition_to_random(&mut self, steps: u8, pace: TransitionPace) -> u8 {
        let from = self.hi;
        let id = self.random_color();
        let to = colors::half(self.hi);

        for step in 1..=steps {
            self.hi = lerp_color(step, from, to, steps);
            self.show_hi();
            self.delay.delay_ms(pace.step_millis());
        }
        id
    }

    /// Plays one swish using permutation `permutation`.
    pub fn swish(&mut self, permutation: u8) {
        for frame in 0..SWISH_FRAMES {
            self.hi = swish::swish_frame(frame, permutation);
            self.show_hi();
            self.delay.delay_ms(swish::FRAME_MILLIS);
        }
    }

    /// Plays a swish with the next permutation in rotation.
    pub fn next_swish(&mut self) {
        let permutation = self.swish_pos;
        self.swish_pos = (self.swish_pos + 1) % PERMUTATION_COUNT;
        self.swish(permutation);
    }

    /// Sends the full "COOPER" message.
    pub fn play_morse(&mut self) {
        for symbol in morse::cooper_message() {
            self.morse_symbol(symbol);
        }
    }

    /// Renders one Morse symbol.
    pub fn morse_symbol(&mut self, symbol: MorseSymbol) {
        match symbol {
            MorseSymbol::Dot => self.pulse(morse::DOT_MILLIS),
            MorseSymbol::Dash => self.pulse(morse::DASH_MILLIS),
            MorseSymbol::LetterPause => self.letter_pause(),
        }
    }

    /// Selects the next letter's colors and holds the letter gap.
    pub fn letter_pause(&mut self) {
        self.advance_style();
        self.delay.delay_ms(morse::PAUSE_MILLIS);
    }

    /// Applies the style for the current letter and advances the letter counter.
    pub fn advance_style(&mut self) {
        self.crazy = false;
        match MorseStyle::for_position(self.morse_pos) {
            MorseStyle::White => {
                self.hi = colors::WHITE;
                self.lo = colors::DIM_WHITE;
            }
            MorseStyle::Crazy => {
                self.random_color();
                self.crazy = true;
            }
            MorseStyle::Extreme => {
                self.hi = colors::extreme(self.morse_pos);
                self.lo = OFF;
            }
        }
        self.morse_pos = (self.morse_pos + 1) % morse::POSITION_WRAP;
    }

    /// Blocks for `millis` milliseconds.
    pub fn wait(&mut self, millis: u32) {
        self.delay.delay_ms(millis);
    }

    fn pulse(&mut self, on_millis: u32) {
        self.show_hi();
        self.delay.delay_ms(on_millis);
        self.led.set_color(self.lo);
        self.delay.delay_ms(morse::BREAK_MILLIS);
        if self.crazy {
            self.random_color();
        }
    }

    fn show_hi(&mut self) {
        self.led.set_color(self.hi);
    }

    /// Returns the active color.
    pub fn hi(&self) -> ColorTriple {
        self.hi
    }

    /// Returns the rest color used between Morse pulses.
    pub fn lo(&self) -> ColorTriple {
        self.lo
    }

    /// Returns the Morse letter counter (`0..252`).
    pub fn morse_pos(&self) -> u8 {
        self.morse_pos
    }

    /// Returns the style the next letter pause will select.
    pub fn morse_style(&self) -> MorseStyle {
        MorseStyle::for_position(self.morse_pos)
    }

    /// Returns true if every dot and dash currently gets a new random color.
    pub fn is_crazy(&self) -> bool {
        self.crazy
    }

    /// Returns the permutation the next swish will use (`0..6`).
    pub fn swish_pos(&self) -> u8 {
        self.swish_pos
    }

    /// Returns a reference to the LED.
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Returns a mutable reference to the LED.
    pub fn led_mut(&mut self) -> &mut L {
        &mut self.led
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Returns a reference to the random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Consumes the engine and returns the LED, delay and random source.
    pub fn release(self) -> (L, D, R) {
        (self.led, self.delay, self.rng)
    }
}
