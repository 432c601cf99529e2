#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorTriple`**: Three 8-bit channel intensities (`palette::Srgb<u8>`)
//! - **`Permutation`**: One of six ways to reassign three values to three channels
//! - **`EffectsEngine`**: Owns the LED and the color state and renders single effects
//! - **`LightShow`**: Plays the fixed show and powers down between cycles
//! - **`RgbLed`**: Trait to implement for your LED hardware
//! - **`RandomSource`**: Trait to implement for your random number source
//! - **`PowerControl`**: Trait to implement for sleep and wake-up
//!
//! Waits use `embedded_hal::delay::DelayNs`. `PwmRgbLed` implements `RgbLed`
//! for any three `embedded_hal::pwm::SetDutyCycle` channels and `MinStdRand`
//! implements `RandomSource` in software.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod types;
pub mod permutation;
pub mod colors;
pub mod interpolate;
pub mod swish;
pub mod morse;
pub mod platform;
pub mod random;
pub mod engine;
pub mod show;
pub mod pwm;

pub use types::{ColorTriple, MorseStyle, MorseSymbol, PermutationError, TransitionPace};
pub use permutation::{Permutation, permute};
pub use colors::{DIM_WHITE, OFF, WHITE};
pub use interpolate::{lerp_color, lerp_step};
pub use swish::envelope;
pub use morse::MorseDecoder;
pub use platform::{PowerControl, RandomSource};
pub use random::MinStdRand;
pub use engine::{EffectsEngine, RgbLed};
pub use show::{LightShow, ShowPhase};
pub use pwm::PwmRgbLed;
