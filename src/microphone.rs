//! MAX4466 analog front end on the ESP32 ADC.
//!
//! The amplifier output (biased at VCC/2) is wired to GPIO32, which is
//! ADC1 channel 4. Conversions are blocking one-shot reads at 11 dB
//! attenuation so the full 0–3.3 V swing maps onto 0..=4095.

use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        AdcPin,
        Attenuation,
    },
    peripherals::{
        ADC1,
        GPIO32,
    },
};

use crate::{
    AmpResources,
    DEFAULT_AMP_PIN,
    hal::{
        AnalogSource,
        MillisClock,
    },
};

/// ADC channel the amplifier is read from.
pub struct Microphone<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO32<'d>, ADC1<'d>>,
}

impl<'d> Microphone<'d> {
    pub fn new(res: AmpResources<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(res.pin, Attenuation::_11dB);
        let adc = Adc::new(res.adc, config);
        info!("max4466: ADC1 ready on GPIO{}", DEFAULT_AMP_PIN);
        Self { adc, pin }
    }
}

impl AnalogSource for Microphone<'_> {
    fn read(&mut self) -> u16 {
        match nb::block!(self.adc.read_oneshot(&mut self.pin)) {
            Ok(sample) => sample,
            Err(()) => {
                // Full scale, so the saturation filter drops it.
                warn!("max4466: ADC conversion failed");
                u16::MAX
            }
        }
    }

    fn channel(&self) -> u8 {
        DEFAULT_AMP_PIN
    }
}

/// Millisecond counter backed by the esp-hal system timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct EspClock;

impl MillisClock for EspClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&mut self) -> u32 {
        // Truncation gives the same 49.7-day wrap as Arduino's millis().
        esp_hal::time::Instant::now()
            .duration_since_epoch()
            .as_millis() as u32
    }
}
