//! ESP32 board bring-up and pin assignment.

use esp_hal::{
    assign_resources,
    clock::CpuClock,
};

use crate::{
    Max4466,
    ProbeConfig,
    microphone::{
        EspClock,
        Microphone,
    },
};

/// The probe as wired on the ESP32 board.
pub type EspProbe<'d> = Max4466<Microphone<'d>, EspClock>;

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        amp: AmpResources<'d> {
            pin: GPIO32,
            adc: ADC1,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the ESP32 and return the raw peripheral set.
///
/// Call this once at the top of your `main`. Then use [`split_resources!`] to
/// break the peripherals into typed resource groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl<'d> From<AmpResources<'d>> for EspProbe<'d> {
    fn from(res: AmpResources<'d>) -> Self {
        Max4466::new(Microphone::new(res), EspClock, ProbeConfig::default())
    }
}
