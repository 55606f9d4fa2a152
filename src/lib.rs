//! DHT11 / DHT22 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 and DHT22 (AM2302)
//! temperature and humidity sensors, built on top of the [`embedded-hal`] traits.
//!
//! The host sends a start pulse on the single data line; the sensor answers with
//! a 40-bit frame where each bit is encoded in the length of its high pulse. The
//! driver samples the line in a busy loop, classifies each bit by comparing how
//! many samples its low and high phases lasted, validates the checksum for the
//! selected [`DeviceProfile`] and retries on failure.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - DHT11 (integer) and DHT22 (fixed-point) byte layouts
//! - Bounded busy-waits: a silent line times out instead of hanging
//! - Optional logging support via `defmt` or `log`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access, through [`OpenDrainLine`]
//! - [`DelayNs`] for the start signal and the pause between attempts
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs through `defmt`
//! - `log`: Logs through the `log` facade
//!
//! # Example
//!
//! ```ignore
//! use dht_sensor::{DeviceProfile, Dht, OpenDrainLine};
//!
//! let mut dht = Dht::new(OpenDrainLine::new(pin), delay, DeviceProfile::DHT22)?;
//! let reading = dht.measure(5)?;
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

// This must go first so the macros are visible to the other modules.
#[macro_use]
mod fmt;

pub mod acquire;
pub mod config;
pub mod dht;
pub mod error;
pub mod line;
pub mod profile;

#[cfg(test)]
mod mock;

pub use acquire::{BitSample, RawMessage};
pub use config::Config;
pub use dht::Dht;
pub use error::{DhtError, Phase};
pub use line::{OpenDrainLine, SignalLine};
pub use profile::{DeviceProfile, IntegerChecksum, Reading, TemperatureSign};
