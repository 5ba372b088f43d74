//! Hardware seams the probe polls.
//!
//! `embedded-hal` 1.0 has no ADC trait, so the probe defines the two
//! primitives it needs: a one-shot analog read and a millisecond counter.

/// A single analog channel that can be converted on demand.
pub trait AnalogSource {
    /// Perform one conversion and return the raw reading.
    fn read(&mut self) -> u16;

    /// Pin or channel number this source converts, as wired on the board.
    fn channel(&self) -> u8;
}

/// A monotonic millisecond counter that wraps at `u32::MAX`, like Arduino's `millis()`.
pub trait MillisClock {
    fn now_ms(&mut self) -> u32;
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    fn read(&mut self) -> u16 {
        T::read(self)
    }

    fn channel(&self) -> u8 {
        T::channel(self)
    }
}

impl<T: MillisClock + ?Sized> MillisClock for &mut T {
    fn now_ms(&mut self) -> u32 {
        T::now_ms(self)
    }
}
