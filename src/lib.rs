//! This is a platform agnostic Rust driver for the LIS2MDL ultra-low-power
//! 3-axis magnetometer, based on the [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal
//!
//! This driver allows you to:
//! - Read the device ID. See: [`device_id()`].
//! - Reset the device and reload the trimming parameters. See: [`software_reset()`].
//! - Set the output data rate, power mode and operating mode. See: [`set_output_data_rate()`].
//! - Configure the set/reset pulse and offset cancellation. See: [`set_set_reset_mode()`].
//! - Enable temperature compensation. See: [`set_temperature_compensation()`].
//! - Program the hard-iron offset registers. See: [`set_hard_iron_offset()`].
//! - Read the magnetic field in raw LSB or milligauss. See: [`magnetic_field()`].
//! - Read the die temperature. See: [`temperature()`].
//! - Estimate a hard-iron offset from a set of samples. See: [`HardIronEstimator`].
//! - Run the complete hard-iron cancellation sequence. See: [`HardIronDemo`].
//!
//! [`device_id()`]: Lis2mdl::device_id
//! [`software_reset()`]: Lis2mdl::software_reset
//! [`set_output_data_rate()`]: Lis2mdl::set_output_data_rate
//! [`set_set_reset_mode()`]: Lis2mdl::set_set_reset_mode
//! [`set_temperature_compensation()`]: Lis2mdl::set_temperature_compensation
//! [`set_hard_iron_offset()`]: Lis2mdl::set_hard_iron_offset
//! [`magnetic_field()`]: Lis2mdl::magnetic_field
//! [`temperature()`]: Lis2mdl::temperature
//!
//! ## The device
//!
//! The LIS2MDL is a 3-axis magnetometer with a ±50 gauss full scale and a
//! fixed sensitivity of 1.5 mG/LSB. It can talk over I2C or SPI (3-wire by
//! default, 4-wire after configuration).
//!
//! The device has three offset registers which are subtracted from the
//! measured field before it is written to the output registers. This allows
//! cancelling the hard-iron distortion of the environment (PCB components,
//! enclosures...) directly in the sensor. The offset itself needs to be
//! computed by the host, for example with [`HardIronEstimator`].
//!
//! ## Usage examples (see also examples folder in the board crates)
//!
//! ### Read the magnetic field
//!
//! ```no_run
//! use linux_embedded_hal::I2cdev;
//! use lis2mdl::{Lis2mdl, OperatingMode};
//!
//! let dev = I2cdev::new("/dev/i2c-1").unwrap();
//! let mut sensor = Lis2mdl::new_with_i2c(dev);
//! sensor.set_operating_mode(OperatingMode::Continuous).unwrap();
//! loop {
//!     if sensor.mag_data_ready().unwrap() {
//!         let field = sensor.magnetic_field().unwrap();
//!         println!("x: {}, y: {}, z: {}", field.x, field.y, field.z);
//!     }
//! }
//! ```
//!
//! ### Run the hard-iron cancellation sequence
//!
//! ```no_run
//! use linux_embedded_hal::{Delay, I2cdev};
//! use lis2mdl::{HardIronConfig, HardIronDemo, Lis2mdl};
//!
//! let dev = I2cdev::new("/dev/i2c-1").unwrap();
//! let sensor = Lis2mdl::new_with_i2c(dev);
//! let mut demo = HardIronDemo::new(sensor, HardIronConfig::default());
//! demo.setup(&mut Delay).unwrap();
//! let mut report = String::new();
//! loop {
//!     if let Some(measurement) = demo.poll().unwrap() {
//!         report.clear();
//!         measurement.write_report(&mut report).unwrap();
//!         print!("{}", report);
//!     }
//! }
//! ```
#![deny(unsafe_code, missing_docs)]
#![no_std]

mod calibration;
mod conversion;
mod device_impl;
mod hard_iron;
pub mod interface;
mod register;
mod types;

pub use crate::calibration::HardIronEstimator;
pub use crate::conversion::{from_lsb_to_celsius, from_lsb_to_mgauss};
pub use crate::hard_iron::{HardIronConfig, HardIronDemo, Measurement};
pub use crate::types::{
    Error, MagOffset, MagneticField, OperatingMode, OutputDataRate, PowerMode, RawMagneticField,
    SetResetMode, SpiMode, Status,
};
pub use nb;

/// Expected content of the WHO_AM_I register.
pub const DEVICE_ID: u8 = 0x40;

/// LIS2MDL device driver
#[derive(Debug)]
pub struct Lis2mdl<DI> {
    /// Digital interface: I2C or SPI
    iface: DI,
}
