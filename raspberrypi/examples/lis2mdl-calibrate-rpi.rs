//! Measure the hard-iron offset of the LIS2MDL in its current environment.
//!
//! The offset registers are cleared, then the sensor is sampled for about
//! one minute while you rotate it slowly through all orientations.
//! The center of the measured range on each axis is printed at the end.
//! Use it as `HardIronConfig::offset` in the other examples.
//!
//! Keep away from laptops, phones, speakers and metal desks while measuring.
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
//! `cargo run --example lis2mdl-calibrate-rpi`
//!

use embedded_hal::blocking::delay::DelayMs;
use linux_embedded_hal::{Delay, I2cdev};
use lis2mdl::{
    from_lsb_to_mgauss, HardIronConfig, HardIronDemo, HardIronEstimator, Lis2mdl, MagOffset,
};
use log::{error, info, warn};

const SAMPLE_COUNT: u32 = 600; // 60 seconds at 10 Hz
const MAX_CONSECUTIVE_FAILURES: u32 = 50;

fn main() {
    env_logger::init();

    let path = std::env::var("LIS2MDL_I2C_DEV").unwrap_or_else(|_| "/dev/i2c-1".to_string());
    let dev = I2cdev::new(&path).unwrap();
    let mut delay = Delay {};

    let config = HardIronConfig {
        offset: MagOffset::default(),
        ..HardIronConfig::default()
    };
    let mut demo = HardIronDemo::new(Lis2mdl::new_with_i2c(dev), config);
    if let Err(e) = demo.setup(&mut delay) {
        error!("Setup failed: {:?}", e);
        std::process::exit(1);
    }

    for i in (1..=5).rev() {
        info!("Starting in {}...", i);
        delay.delay_ms(1000_u16);
    }
    info!("Rotate the sensor now");

    let sensor = demo.sensor();
    let mut estimator = HardIronEstimator::new();
    let mut failed_reads = 0;
    let mut consecutive_failures = 0;
    while estimator.sample_count() < SAMPLE_COUNT {
        let sample = match sensor.mag_data_ready() {
            Ok(true) => sensor.magnetic_field_raw().map(Some),
            Ok(false) => Ok(None),
            Err(e) => Err(e),
        };
        match sample {
            Ok(Some(sample)) => {
                consecutive_failures = 0;
                estimator.add_sample(sample);
                if estimator.sample_count() % 10 == 0 {
                    if let Some(offset) = estimator.offset() {
                        info!(
                            "[{}/{}] x {} y {} z {}",
                            estimator.sample_count(),
                            SAMPLE_COUNT,
                            offset.x,
                            offset.y,
                            offset.z
                        );
                    }
                }
            }
            Ok(None) => delay.delay_ms(5_u16),
            Err(e) => {
                failed_reads += 1;
                consecutive_failures += 1;
                warn!("Read error: {:?}", e);
                if consecutive_failures >= MAX_CONSECUTIVE_FAILURES {
                    error!(
                        "Giving up after {} consecutive read errors ({} samples collected)",
                        consecutive_failures,
                        estimator.sample_count()
                    );
                    std::process::exit(1);
                }
                delay.delay_ms(5_u16);
            }
        }
    }
    if failed_reads > 0 {
        warn!("{} reads failed", failed_reads);
    }

    // SAMPLE_COUNT > 0 so there is always an estimate here.
    if let Some(offset) = estimator.offset() {
        println!(
            "Hard-iron offset [LSB]: x {} y {} z {}",
            offset.x, offset.y, offset.z
        );
        println!(
            "Hard-iron offset [mG]: x {:.2} y {:.2} z {:.2}",
            from_lsb_to_mgauss(offset.x),
            from_lsb_to_mgauss(offset.y),
            from_lsb_to_mgauss(offset.z)
        );
        println!("Offset registers: {:02X?}", offset.to_le_bytes());
    }
}
