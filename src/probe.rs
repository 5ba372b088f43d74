//! MAX4466 peak-to-peak amplitude probe.
//!
//! Each call samples the amplifier output for one window and reports the
//! spread between the loudest and quietest accepted readings. The result is a
//! coarse loudness figure, not a calibrated level.

use embassy_futures::yield_now;
use fugit::MicrosDurationU32;

use crate::{
    ProbeConfig,
    hal::{
        AnalogSource,
        MillisClock,
    },
    window::{
        PeakToPeak,
        Reading,
    },
};

/// Amplitude probe over one analog channel.
pub struct Max4466<A, C> {
    source: A,
    clock: C,
    config: ProbeConfig,
}

impl<A: AnalogSource, C: MillisClock> Max4466<A, C> {
    pub const fn new(source: A, clock: C, config: ProbeConfig) -> Self {
        Self {
            source,
            clock,
            config,
        }
    }

    pub const fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ProbeConfig) {
        self.config = config;
    }

    /// Pin the amplifier is read from, as reported by the source.
    pub fn amp_pin(&self) -> u8 {
        self.source.channel()
    }

    /// Give back the source and clock.
    pub fn release(self) -> (A, C) {
        (self.source, self.clock)
    }

    /// Sample for one window and return the peak-to-peak amplitude.
    ///
    /// Spins on the ADC for the whole window without yielding.
    pub fn probe_amplitude(&mut self) -> i32 {
        self.probe().amplitude
    }

    /// Like [`probe_amplitude`](Self::probe_amplitude), with the full window statistics.
    pub fn probe(&mut self) -> Reading {
        let start = self.begin();
        let mut window = PeakToPeak::new(self.config.max_analog_read);

        while self.within_window(start) {
            window.push(self.source.read());
        }

        self.finish(&window)
    }

    /// Blocking probe that sleeps `interval` between conversions.
    ///
    /// The window is still measured on the clock, so slow delays reduce the
    /// number of samples but never shorten the window.
    pub fn probe_paced<D>(&mut self, delay: &mut D, interval: MicrosDurationU32) -> Reading
    where
        D: embedded_hal::delay::DelayNs,
    {
        let start = self.begin();
        let mut window = PeakToPeak::new(self.config.max_analog_read);

        while self.within_window(start) {
            window.push(self.source.read());
            delay.delay_us(interval.ticks());
        }

        self.finish(&window)
    }

    /// Cooperative probe for async executors.
    ///
    /// Awaits `interval` between conversions, or just yields to the executor
    /// when `interval` is zero.
    pub async fn probe_async<D>(&mut self, delay: &mut D, interval: MicrosDurationU32) -> Reading
    where
        D: embedded_hal_async::delay::DelayNs,
    {
        let start = self.begin();
        let mut window = PeakToPeak::new(self.config.max_analog_read);

        while self.within_window(start) {
            window.push(self.source.read());
            if interval.ticks() == 0 {
                yield_now().await;
            } else {
                delay.delay_us(interval.ticks()).await;
            }
        }

        self.finish(&window)
    }

    fn begin(&mut self) -> u32 {
        let start = self.clock.now_ms();
        trace!(
            "max4466: sampling pin {} for {} ms",
            self.source.channel(),
            self.config.sample_window.ticks()
        );
        start
    }

    // Wrapping subtraction keeps windows that straddle the u32 rollover at full length.
    fn within_window(&mut self, start: u32) -> bool {
        self.clock.now_ms().wrapping_sub(start) < self.config.sample_window.ticks()
    }

    fn finish(&self, window: &PeakToPeak) -> Reading {
        let reading = window.reading();
        if reading.is_degenerate() {
            warn!(
                "max4466: no sample below {} on pin {} ({} rejected)",
                self.config.max_analog_read,
                self.source.channel(),
                reading.rejected
            );
        } else {
            debug!(
                "max4466: p-p {} (max {}, min {}, {} accepted, {} rejected)",
                reading.amplitude,
                reading.signal_max,
                reading.signal_min,
                reading.accepted,
                reading.rejected
            );
        }
        reading
    }
}
