//! Configure the LIS2MDL hard-iron offset cancellation, then continuously
//! print the magnetic field and temperature whenever new data is available.
//!
//! The I2C device defaults to `/dev/i2c-1` and can be changed with the
//! `LIS2MDL_I2C_DEV` environment variable. Set `RUST_LOG=debug` for more
//! output.
//!
//! ```
//! RPi   <-> LIS2MDL
//! GND   <-> GND
//! 3.3V  <-> VCC
//! Pin 5 <-> SCL
//! Pin 3 <-> SDA
//! ```
//!
//! Run with:
//! `cargo run --example lis2mdl-hard-iron-rpi`
//!

use embedded_hal::blocking::delay::DelayMs;
use linux_embedded_hal::{Delay, I2cdev};
use lis2mdl::{Error, HardIronConfig, HardIronDemo, Lis2mdl};
use log::{debug, error, info};

fn main() {
    env_logger::init();

    let path = std::env::var("LIS2MDL_I2C_DEV").unwrap_or_else(|_| "/dev/i2c-1".to_string());
    let dev = match I2cdev::new(&path) {
        Ok(dev) => dev,
        Err(e) => {
            error!("Cannot open {}: {}", path, e);
            std::process::exit(1);
        }
    };
    let mut delay = Delay {};

    let config = HardIronConfig::default();
    debug!("Configuration: {:?}", config);
    let mut demo = HardIronDemo::new(Lis2mdl::new_with_i2c(dev), config);
    match demo.setup(&mut delay) {
        Ok(()) => info!("LIS2MDL ready on {}, offset {:?}", path, config.offset),
        Err(Error::InvalidDeviceId(id)) => {
            error!("Device not found. WHO_AM_I: {:#04x}", id);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Setup failed: {:?}", e);
            std::process::exit(1);
        }
    }

    let mut report = String::new();
    loop {
        match demo.poll() {
            Ok(Some(measurement)) => {
                report.clear();
                measurement.write_report(&mut report).unwrap();
                print!("{}", report);
            }
            Ok(None) => delay.delay_ms(5_u16),
            Err(e) => error!("Read error: {:?}", e),
        }
    }
}
