//! Probe calibration constants.

use fugit::MillisDurationU32;

/// Default sampling window (50 ms, i.e. 20 readings per second).
pub const DEFAULT_SAMPLE_WINDOW: MillisDurationU32 = MillisDurationU32::from_ticks(50);

/// Analog pin the MAX4466 output is wired to (GPIO32 / ADC1 channel 4 on the ESP32).
///
/// The pin belongs to the [`AnalogSource`](crate::AnalogSource), not to
/// [`ProbeConfig`]; see [`AnalogSource::channel`](crate::AnalogSource::channel).
pub const DEFAULT_AMP_PIN: u8 = 32;

/// Default saturation threshold.
///
/// The ESP32 ADC reads 0..=4095; anything at or above this value is treated
/// as a spurious reading. Lower it to ignore more of the top of the range.
pub const DEFAULT_MAX_ANALOG_READ: u16 = 4000;

/// Settings for one [`Max4466`](crate::Max4466) probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeConfig {
    /// How long each call samples the input.
    pub sample_window: MillisDurationU32,
    /// Seed for the running minimum, and the rejection threshold for samples.
    pub max_analog_read: u16,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sample_window: DEFAULT_SAMPLE_WINDOW,
            max_analog_read: DEFAULT_MAX_ANALOG_READ,
        }
    }

    #[must_use]
    pub const fn with_sample_window(mut self, sample_window: MillisDurationU32) -> Self {
        self.sample_window = sample_window;
        self
    }

    /// Convenience for [`with_sample_window`](Self::with_sample_window) in whole milliseconds.
    #[must_use]
    pub const fn with_sample_window_ms(self, ms: u32) -> Self {
        self.with_sample_window(MillisDurationU32::millis(ms))
    }

    #[must_use]
    pub const fn with_max_analog_read(mut self, max_analog_read: u16) -> Self {
        self.max_analog_read = max_analog_read;
        self
    }
}
