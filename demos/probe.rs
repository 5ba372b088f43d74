//! Polls the MAX4466 from the main loop and logs the peak-to-peak amplitude.

#![no_std]
#![no_main]

use defmt::{
    info,
    warn,
};
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use max4466::*;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

/// Amplitude above which the room counts as loud.
const LOUD_THRESHOLD: i32 = 50;

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = max4466::init();
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 16 * 1024);
    esp_rtos::start(timg0.timer0);

    let mut probe: EspProbe<'static> = resources.amp.into();
    info!("Probing GPIO{} with {}", probe.amp_pin(), probe.config());

    loop {
        let reading = probe.probe();
        if reading.is_degenerate() {
            warn!("Every sample saturated, check the amplifier gain");
        } else if reading.exceeds(LOUD_THRESHOLD) {
            info!("Loud: {}", reading.amplitude);
        } else {
            info!("Amplitude: {}", reading.amplitude);
        }

        Timer::after(Duration::from_millis(100)).await;
    }
}
