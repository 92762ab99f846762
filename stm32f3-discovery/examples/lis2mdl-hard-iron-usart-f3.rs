//! Configure the LIS2MDL hard-iron offset cancellation, then continuously
//! read the magnetic field and temperature and transmit them per USART.
//!
//! The offset programmed into the sensor is the default of `HardIronConfig`.
//! Replace it with the value measured for your setup, for example with the
//! `lis2mdl-calibrate-rpi` example.
//!
//! When running you should be able to see the readings in your
//! serial communication program.
//!
//! This example is runs on the STM32F3 Discovery board using I2C1 and USART1.
//!
//! To setup the serial communication, have a look at the discovery book:
//! https://rust-embedded.github.io/discovery/10-serial-communication/index.html
//!
//! ```
//! F3    <-> LIS2MDL
//! GND   <-> GND
//! +3.3V <-> VCC
//! PB7   <-> SDA
//! PB6   <-> SCL
//!
//! F3   <-> Serial device
//! GND  <-> GND
//! PA9  <-> TX
//! PA10 <-> RX
//! ```
//!
//! Run with:
//! `cargo run --example lis2mdl-hard-iron-usart-f3 --target thumbv7em-none-eabihf`,

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f3xx_hal::{self as hal, delay::Delay, pac, prelude::*, serial::Serial};

use lis2mdl::{Error, HardIronConfig, HardIronDemo, Lis2mdl};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("LIS2MDL hard-iron example");

    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);

    let mut delay = Delay::new(cp.SYST, clocks);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);
    let pins = (
        gpioa
            .pa9
            .into_af7_push_pull(&mut gpioa.moder, &mut gpioa.otyper, &mut gpioa.afrh),
        gpioa
            .pa10
            .into_af7_push_pull(&mut gpioa.moder, &mut gpioa.otyper, &mut gpioa.afrh),
    );
    let mut serial = Serial::new(dp.USART1, pins, 115_200.Bd(), clocks, &mut rcc.apb2);

    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);
    let mut scl =
        gpiob
            .pb6
            .into_af4_open_drain(&mut gpiob.moder, &mut gpiob.otyper, &mut gpiob.afrl);
    let mut sda =
        gpiob
            .pb7
            .into_af4_open_drain(&mut gpiob.moder, &mut gpiob.otyper, &mut gpiob.afrl);
    scl.internal_pull_up(&mut gpiob.pupdr, true);
    sda.internal_pull_up(&mut gpiob.pupdr, true);

    let i2c = hal::i2c::I2c::new(
        dp.I2C1,
        (scl, sda),
        100.kHz().try_into().unwrap(),
        clocks,
        &mut rcc.apb1,
    );

    let sensor = Lis2mdl::new_with_i2c(i2c);
    let mut demo = HardIronDemo::new(sensor, HardIronConfig::default());
    match demo.setup(&mut delay) {
        Ok(()) => rprintln!("Offset: {:?}", demo.config().offset),
        Err(Error::InvalidDeviceId(id)) => {
            rprintln!("Device not found. WHO_AM_I: {:#04x}", id);
            loop {
                cortex_m::asm::nop();
            }
        }
        Err(e) => panic!("Setup failed: {:?}", e),
    }

    let mut buffer: heapless::String<128> = heapless::String::new();
    loop {
        if let Some(measurement) = demo.poll().unwrap() {
            buffer.clear();
            measurement.write_report(&mut buffer).unwrap();

            // send buffer
            serial.bwrite_all(buffer.as_bytes()).unwrap();
            serial.bflush().unwrap();
        }
    }
}
