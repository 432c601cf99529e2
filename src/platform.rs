//! Traits for the platform services the show runs on.
//!
//! Blocking waits go through [`embedded_hal::delay::DelayNs`]; the LED sink
//! is [`RgbLed`](crate::engine::RgbLed).

/// Source of uniformly distributed 15-bit random numbers.
pub trait RandomSource {
    /// Returns the next value. Only the low 15 bits are used.
    fn next_random(&mut self) -> u16;
}

/// Low-power sleep with wake on an external signal.
pub trait PowerControl {
    /// Suspends execution until the wake line changes state.
    ///
    /// Implementations must disable wake detection again before returning so
    /// every call behaves the same.
    fn sleep_until_wake(&mut self);
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    #[inline]
    fn next_random(&mut self) -> u16 {
        T::next_random(self)
    }
}

impl<T: PowerControl + ?Sized> PowerControl for &mut T {
    #[inline]
    fn sleep_until_wake(&mut self) {
        T::sleep_until_wake(self)
    }
}
