//! Configure the LIS2MDL hard-iron offset cancellation over 4-wire SPI,
//! then continuously read the magnetic field and temperature and send
//! them through the serial interface.
//!
//! The sensor starts in 3-wire SPI mode. `HardIronDemo::setup()` switches
//! it to 4-wire mode before reading the device ID.
//!
//! This example is runs on the STM32F103 "Bluepill" board using SPI1 and USART1.
//!
//! To setup the serial communication, have a look at the discovery book:
//! https://rust-embedded.github.io/discovery/10-serial-communication/index.html
//!
//! ```
//! BP   <-> LIS2MDL <-> Serial module
//! GND  <-> GND     <-> GND
//! 3.3V <-> VCC
//! PA5  <-> SCL
//! PA6  <-> SDO
//! PA7  <-> SDA
//! PA4  <-> CS
//! PA9              <-> RX
//! ```
//!
//! Run with:
//! `cargo run --example lis2mdl-hard-iron-spi-bp`,

#![deny(unsafe_code)]
#![no_std]
#![no_main]

use core::fmt::Write;
use cortex_m_rt::entry;
use embedded_hal::{digital::v2::OutputPin, spi::MODE_3};
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f1xx_hal::{delay::Delay, pac, prelude::*, serial, spi::Spi};

use lis2mdl::{HardIronConfig, HardIronDemo, Lis2mdl};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("LIS2MDL hard-iron SPI example");

    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut afio = dp.AFIO.constrain(&mut rcc.apb2);
    let mut delay = Delay::new(cp.SYST, clocks);

    let mut gpioa = dp.GPIOA.split(&mut rcc.apb2);

    // SPI configuration
    let sck = gpioa.pa5.into_alternate_push_pull(&mut gpioa.crl);
    let miso = gpioa.pa6;
    let mosi = gpioa.pa7.into_alternate_push_pull(&mut gpioa.crl);
    let spi = Spi::spi1(
        dp.SPI1,
        (sck, miso, mosi),
        &mut afio.mapr,
        MODE_3,
        1.mhz(),
        clocks,
        &mut rcc.apb2,
    );

    let mut chip_select = gpioa.pa4.into_push_pull_output(&mut gpioa.crl);
    chip_select.set_high().unwrap();

    let tx = gpioa.pa9.into_alternate_push_pull(&mut gpioa.crh);
    let rx = gpioa.pa10;
    let serial = serial::Serial::usart1(
        dp.USART1,
        (tx, rx),
        &mut afio.mapr,
        serial::Config::default().baudrate(115200.bps()),
        clocks,
        &mut rcc.apb2,
    );
    let (mut tx, _rx) = serial.split();

    let sensor = Lis2mdl::new_with_spi(spi, chip_select);
    let mut demo = HardIronDemo::new(sensor, HardIronConfig::default());
    if let Err(e) = demo.setup(&mut delay) {
        rprintln!("Setup failed: {:?}", e);
        loop {
            cortex_m::asm::nop();
        }
    }
    writeln!(tx, "start\r").unwrap();

    loop {
        match demo.poll() {
            Ok(Some(measurement)) => measurement.write_report(&mut tx).unwrap(),
            Ok(None) => (),
            Err(e) => rprintln!("Read error: {:?}", e),
        }
    }
}
