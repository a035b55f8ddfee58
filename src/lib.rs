//! embedded-hal drivers for the sensors of an indoor air-quality node:
//!
//! - [`Sps30`]: Sensirion SPS30 particulate matter sensor (PM1.0 to PM10 mass and
//!   number concentrations, typical particle size).
//! - [`Hdc1050`]: TI HDC1050 temperature and relative humidity sensor.
//!
//! Both drivers are blocking and hold no state besides the SPS30 measurement mode.
//! When they share one bus, hand each of them its own device handle (for example an
//! `embedded-hal-bus` `RefCellDevice`); serializing access is up to the caller.
//! Bus timeouts are configured by the HAL as well; [`BUS_TIMEOUT_MS`] is the
//! recommended value.
//!
//! ```ignore
//! let mut sps30 = Sps30::new(sps30_bus, delay.clone());
//! let mut hdc1050 = Hdc1050::new(hdc1050_bus, delay);
//!
//! sps30.start()?;
//! loop {
//!     match sps30.sense() {
//!         Ok(pm) => log::info!("PM2.5 {} μg/m³", pm.mass_pm2_5),
//!         Err(e) if e.is_retryable() => {}
//!         Err(e) => return Err(e),
//!     }
//!     let th = hdc1050.sense()?;
//!     log::info!("{} °C {} %RH", th.temperature_celsius, th.relative_humidity_percent);
//!     sleep_secs(10);
//! }
//! ```
//!
//! ## Features
//!
//! - `log` (default): emit warnings on CRC mismatch and not-ready responses.
//! - `thiserror`: implement `core::error::Error` for [`Error`].
//! - `serde`: derive `Serialize` for the reading records.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod commands;
mod crc;
mod error;
mod hdc1050;
mod sps30;
#[cfg(test)]
mod test_util;
mod types;

pub use commands::{BUS_TIMEOUT_MS, HDC1050_CONVERSION_MS, SPS30_START_SETTLE_MS};
pub use error::Error;
pub use hdc1050::{Hdc1050, HDC1050_I2C_ADDRESS};
pub use sps30::{Sps30, SPS30_I2C_ADDRESS};
pub use types::{Hdc1050Data, Hdc1050DataRaw, Sps30Data, SPS30_RECORD_LEN};
