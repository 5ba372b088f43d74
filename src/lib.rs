//! # max4466
//!
//! Peak-to-peak amplitude probe for the MAX4466 electret microphone amplifier.
//!
//! The probe reads one ADC channel for a fixed window (50 ms by default),
//! tracks the highest and lowest readings, tosses saturated samples, and
//! returns `max - min` as a coarse loudness figure.
//!
//! The sampling core is hardware independent: it runs against any
//! [`AnalogSource`] and [`MillisClock`]. With the `esp32` feature the crate
//! also provides the board binding for an ESP32 with the amplifier on GPIO32:
//!
//! ```rust,ignore
//! let peripherals = max4466::init();
//! let resources = max4466::split_resources!(peripherals);
//!
//! let mut probe: max4466::EspProbe = resources.amp.into();
//! let amplitude = probe.probe_amplitude();
//! ```

#![cfg_attr(not(test), no_std)]

// This must go first so the logging macros are visible in every module.
#[macro_use]
mod fmt;

#[cfg(feature = "esp32")]
mod board;
pub mod config;
pub mod hal;
#[cfg(feature = "esp32")]
pub mod microphone;
mod probe;
mod window;

#[cfg(feature = "esp32")]
pub use board::*;
pub use config::{
    DEFAULT_AMP_PIN,
    DEFAULT_MAX_ANALOG_READ,
    DEFAULT_SAMPLE_WINDOW,
    ProbeConfig,
};
pub use hal::{
    AnalogSource,
    MillisClock,
};
#[cfg(feature = "esp32")]
pub use microphone::{
    EspClock,
    Microphone,
};
pub use probe::Max4466;
pub use window::{
    PeakToPeak,
    Reading,
};
