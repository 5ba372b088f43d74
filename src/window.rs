//! Running extrema over one sampling window.

/// Outcome of one sampling window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    /// `signal_max - signal_min`, in raw ADC units. May be negative, see [`PeakToPeak::push`].
    pub amplitude: i32,
    pub signal_max: u16,
    pub signal_min: u16,
    /// Samples that passed the saturation filter.
    pub accepted: u32,
    /// Samples tossed as spurious.
    pub rejected: u32,
}

impl Reading {
    /// No sample was accepted. `amplitude` then reports `max_analog_read`
    /// and says nothing about the signal.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.accepted == 0
    }

    /// Loudness alert check: strictly above `threshold`.
    #[must_use]
    pub const fn exceeds(&self, threshold: i32) -> bool {
        self.amplitude > threshold
    }
}

/// Peak-to-peak accumulator for a single window.
#[derive(Clone, Debug)]
pub struct PeakToPeak {
    max_analog_read: u16,
    signal_max: u16,
    signal_min: u16,
    accepted: u32,
    rejected: u32,
}

impl PeakToPeak {
    #[must_use]
    pub const fn new(max_analog_read: u16) -> Self {
        Self {
            max_analog_read,
            signal_max: 0,
            signal_min: max_analog_read,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Feed one raw sample. Returns `false` if it was tossed as saturated.
    ///
    /// A sample that raises the maximum is never compared against the
    /// minimum. A strictly rising stream therefore leaves `signal_min` at its
    /// `max_analog_read` seed and the amplitude comes out negative.
    pub fn push(&mut self, sample: u16) -> bool {
        if sample >= self.max_analog_read {
            self.rejected = self.rejected.saturating_add(1);
            return false;
        }

        self.accepted = self.accepted.saturating_add(1);
        if sample > self.signal_max {
            self.signal_max = sample;
        } else if sample < self.signal_min {
            self.signal_min = sample;
        }
        true
    }

    /// `signal_max - signal_min`, or `max_analog_read` for a window with no
    /// accepted sample.
    #[must_use]
    pub fn amplitude(&self) -> i32 {
        if self.accepted == 0 {
            return i32::from(self.max_analog_read);
        }
        i32::from(self.signal_max) - i32::from(self.signal_min)
    }

    #[must_use]
    pub fn reading(&self) -> Reading {
        Reading {
            amplitude: self.amplitude(),
            signal_max: self.signal_max,
            signal_min: self.signal_min,
            accepted: self.accepted,
            rejected: self.rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        RngExt,
        SeedableRng,
    };
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn feed(max_analog_read: u16, samples: &[u16]) -> Reading {
        let mut window = PeakToPeak::new(max_analog_read);
        for &s in samples {
            window.push(s);
        }
        window.reading()
    }

    #[test]
    fn fresh_window_is_degenerate() {
        let reading = PeakToPeak::new(4000).reading();
        assert!(reading.is_degenerate());
        assert_eq!(reading.signal_max, 0);
        assert_eq!(reading.signal_min, 4000);
        assert_eq!(reading.amplitude, 4000);
    }

    #[test]
    fn mixed_sequence_follows_exclusive_update() {
        // 100 -> max, 200 -> max, 50 -> min, 3999 -> max
        let reading = feed(4000, &[100, 200, 50, 3999]);
        assert_eq!(reading.signal_max, 3999);
        assert_eq!(reading.signal_min, 50);
        assert_eq!(reading.amplitude, 3949);
        assert_eq!(reading.accepted, 4);
        assert_eq!(reading.rejected, 0);
    }

    #[test]
    fn constant_stream_has_zero_amplitude() {
        let reading = feed(4000, &[2048; 64]);
        assert_eq!(reading.amplitude, 0);
        assert!(!reading.is_degenerate());
    }

    #[test]
    fn saturated_samples_never_become_extrema() {
        let reading = feed(4000, &[4000, 1000, 4095, 900, u16::MAX, 1100]);
        assert_eq!(reading.signal_max, 1100);
        assert_eq!(reading.signal_min, 900);
        assert_eq!(reading.accepted, 3);
        assert_eq!(reading.rejected, 3);
    }

    #[test]
    fn all_saturated_returns_the_seed() {
        let reading = feed(4000, &[4000, 4001, 4095]);
        assert!(reading.is_degenerate());
        assert_eq!(reading.amplitude, 4000);
    }

    #[test]
    fn rising_stream_leaves_min_at_seed() {
        let reading = feed(4000, &[100, 200, 300]);
        assert_eq!(reading.signal_min, 4000);
        assert_eq!(reading.amplitude, 300 - 4000);
    }

    #[test]
    fn single_sample_goes_negative() {
        let reading = feed(4000, &[1]);
        assert_eq!(reading.amplitude, -3999);
    }

    #[test]
    fn amplitude_stays_in_signed_range() {
        let reading = feed(4000, &[0, 3999]);
        assert_eq!(reading.amplitude, 3999);
        assert!(reading.amplitude <= 4000);
        assert!(feed(4000, &[0]).amplitude >= -4000);
    }

    #[test]
    fn zero_first_lowers_min() {
        let reading = feed(4000, &[0, 0, 0]);
        assert_eq!(reading.signal_min, 0);
        assert_eq!(reading.signal_max, 0);
        assert_eq!(reading.amplitude, 0);
    }

    #[test]
    fn falling_after_first_peak_matches_plain_max_minus_min() {
        let samples = [2100, 1800, 2400, 1500, 2000, 2350, 1600];
        let reading = feed(4000, &samples);
        let max = *samples.iter().max().unwrap_or(&0);
        let min = *samples.iter().min().unwrap_or(&0);
        assert_eq!(reading.amplitude, i32::from(max) - i32::from(min));
    }

    #[test]
    fn exceeds_is_strict() {
        let reading = feed(4000, &[2000, 1950]);
        assert_eq!(reading.amplitude, 50);
        assert!(!reading.exceeds(50));
        assert!(reading.exceeds(49));
    }

    /// Straight-line restatement of the update rule: the max is the largest
    /// accepted sample, the min is the smallest accepted sample that did not
    /// raise the running max at the time it arrived.
    fn model(max_analog_read: u16, samples: &[u16]) -> (i32, Option<u16>) {
        let accepted: Vec<u16> = samples
            .iter()
            .copied()
            .filter(|&s| s < max_analog_read)
            .collect();
        if accepted.is_empty() {
            return (i32::from(max_analog_read), None);
        }

        let mut running_max = 0;
        let mut min = max_analog_read;
        for &s in &accepted {
            if s > running_max {
                running_max = s;
            } else {
                min = min.min(s);
            }
        }
        let max = accepted.iter().copied().max().unwrap_or(0);
        let true_min = accepted.iter().copied().min();
        (i32::from(max) - i32::from(min), true_min.filter(|&m| m == min))
    }

    #[test]
    fn generated_windows_match_the_model() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x4466);
        let mut plain_spread = 0;

        for _ in 0..20_000 {
            let len = 1 + (rng.random::<u32>() % 60) as usize;
            let samples: Vec<u16> = (0..len).map(|_| rng.random::<u16>() % 4200).collect();

            let reading = feed(4000, &samples);
            let (expected, min_reached) = model(4000, &samples);
            assert_eq!(reading.amplitude, expected, "samples {samples:?}");

            // Whenever the true minimum was compared against the min, the
            // result is plain max - min over the accepted samples.
            if let Some(min) = min_reached {
                let max = samples.iter().copied().filter(|&s| s < 4000).max().unwrap_or(0);
                assert_eq!(reading.amplitude, i32::from(max) - i32::from(min));
                plain_spread += 1;
            }
            assert!((-4000..=4000).contains(&reading.amplitude));
        }

        assert!(plain_spread > 10_000);
    }
}
