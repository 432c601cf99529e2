//! Shared test infrastructure for cooper-glow integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use cooper_glow::{ColorTriple, EffectsEngine, OFF, PowerControl, RandomSource, RgbLed};
use embedded_hal::delay::DelayNs;

// ============================================================================
// Mock LED
// ============================================================================

/// Mock LED that records the first color changes and counts all of them
pub struct MockLed {
    current_color: ColorTriple,
    color_history: heapless::Vec<ColorTriple, 128>,
    updates: usize,
}

impl MockLed {
    pub fn new() -> Self {
        Self {
            current_color: OFF,
            color_history: heapless::Vec::new(),
            updates: 0,
        }
    }

    pub fn get_last_color(&self) -> ColorTriple {
        self.current_color
    }

    pub fn color_history(&self) -> &[ColorTriple] {
        &self.color_history
    }

    pub fn updates(&self) -> usize {
        self.updates
    }

    pub fn clear_history(&mut self) {
        self.color_history.clear();
        self.updates = 0;
    }
}

impl RgbLed for MockLed {
    fn set_color(&mut self, color: ColorTriple) {
        self.current_color = color;
        self.updates += 1;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Mock delay that sums the requested time instead of blocking
///
/// Keeps the first requests verbatim and every request as run-length
/// encoded `(ms, count)` pairs, so the order of a whole show can be checked.
pub struct MockDelay {
    total_millis: u64,
    calls: usize,
    history: heapless::Vec<u32, 128>,
    runs: heapless::Vec<(u32, usize), 4096>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            total_millis: 0,
            calls: 0,
            history: heapless::Vec::new(),
            runs: heapless::Vec::new(),
        }
    }

    pub fn total_millis(&self) -> u64 {
        self.total_millis
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn runs(&self) -> &[(u32, usize)] {
        &self.runs
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_millis += u64::from(ns / 1_000_000);
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_millis += u64::from(ms);
        self.calls += 1;
        let _ = self.history.push(ms);
        if let Some((last, count)) = self.runs.last_mut() {
            if *last == ms {
                *count += 1;
                return;
            }
        }
        self.runs.push((ms, 1)).expect("run capacity exceeded");
    }
}

// ============================================================================
// Mock Random Source
// ============================================================================

/// Random source replaying a fixed script, wrapping around at the end
pub struct ScriptedRandom {
    script: &'static [u16],
    next: usize,
}

impl ScriptedRandom {
    pub fn new(script: &'static [u16]) -> Self {
        Self { script, next: 0 }
    }

    pub fn constant(value: &'static [u16; 1]) -> Self {
        Self::new(value)
    }

    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn next_random(&mut self) -> u16 {
        let value = self.script[self.next % self.script.len()];
        self.next += 1;
        value
    }
}

// ============================================================================
// Mock Power Control
// ============================================================================

/// Power controller that returns immediately and counts sleeps
pub struct MockPower {
    sleeps: usize,
}

impl MockPower {
    pub fn new() -> Self {
        Self { sleeps: 0 }
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps
    }
}

impl PowerControl for MockPower {
    fn sleep_until_wake(&mut self) {
        self.sleeps += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestEngine = EffectsEngine<MockLed, MockDelay, ScriptedRandom>;

/// Engine with fresh mocks and the LED history cleared of the initial "off"
pub fn engine_with(script: &'static [u16]) -> TestEngine {
    let mut engine = EffectsEngine::new(
        MockLed::new(),
        MockDelay::new(),
        ScriptedRandom::new(script),
    );
    engine.led_mut().clear_history();
    engine
}

/// Channels as an array, for per-channel comparisons
pub fn channels(color: ColorTriple) -> [u8; 3] {
    [color.red, color.green, color.blue]
}
