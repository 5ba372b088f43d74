//! Runs the probe in its own embassy task, yielding between conversions so
//! other tasks keep running during the sampling window.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{
    Delay,
    Duration,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use fugit::MicrosDurationU32;
#[allow(clippy::wildcard_imports)]
use max4466::*;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

/// Time between conversions; roughly 50 samples per 50 ms window.
const INTERVAL: MicrosDurationU32 = MicrosDurationU32::from_ticks(1_000);

#[embassy_executor::task]
async fn probe_task(mut probe: EspProbe<'static>) {
    info!("Probe task started");

    let mut delay = Delay;
    loop {
        let reading = probe.probe_async(&mut delay, INTERVAL).await;
        info!(
            "p-p {} from {} samples ({} tossed)",
            reading.amplitude, reading.accepted, reading.rejected
        );
        Timer::after(Duration::from_millis(100)).await;
    }
}

#[embassy_executor::task]
async fn heartbeat_task() {
    loop {
        Timer::after(Duration::from_secs(5)).await;
        info!("Still alive");
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = max4466::init();
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 16 * 1024);
    esp_rtos::start(timg0.timer0);

    let probe: EspProbe<'static> = resources.amp.into();
    spawner.must_spawn(probe_task(probe));
    spawner.must_spawn(heartbeat_task());

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
