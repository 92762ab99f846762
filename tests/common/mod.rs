#![allow(dead_code)]

use embedded_hal_mock::eh0::{
    i2c::{Mock as I2cMock, Transaction as I2cTrans},
    digital::{Mock as PinMock, State as PinState, Transaction as PinTrans},
    spi::{Mock as SpiMock, Transaction as SpiTrans},
};
use lis2mdl::{
    interface::{I2cInterface, SpiInterface},
    Lis2mdl,
};

pub const ADDR: u8 = 0x1E;
pub const DEVICE_ID: u8 = 0x40;

pub struct Register;
impl Register {
    pub const OFFSET_X_REG_L: u8 = 0x45;
    pub const WHO_AM_I: u8 = 0x4F;
    pub const CFG_REG_A: u8 = 0x60;
    pub const CFG_REG_B: u8 = 0x61;
    pub const CFG_REG_C: u8 = 0x62;
    pub const STATUS_REG: u8 = 0x67;
    pub const OUTX_L_REG: u8 = 0x68;
    pub const TEMP_OUT_L_REG: u8 = 0x6E;
}

const I2C_MULTI: u8 = 0x80;
const SPI_WRITE: u8 = 0x40;
const SPI_READ: u8 = 0xC0;

pub fn new_i2c(transactions: &[I2cTrans]) -> Lis2mdl<I2cInterface<I2cMock>> {
    Lis2mdl::new_with_i2c(I2cMock::new(transactions))
}

pub fn destroy_i2c(sensor: Lis2mdl<I2cInterface<I2cMock>>) {
    sensor.destroy_i2c().done();
}

pub fn i2c_read(register: u8, data: &[u8]) -> I2cTrans {
    I2cTrans::write_read(ADDR, vec![register | I2C_MULTI], data.to_vec())
}

pub fn i2c_write(register: u8, data: &[u8]) -> I2cTrans {
    let mut payload = vec![register | I2C_MULTI];
    payload.extend_from_slice(data);
    I2cTrans::write(ADDR, payload)
}

pub fn new_spi(
    transactions: &[SpiTrans],
    register_accesses: usize,
) -> Lis2mdl<SpiInterface<SpiMock, PinMock>> {
    let mut pin_transactions = Vec::new();
    for _ in 0..register_accesses {
        pin_transactions.push(PinTrans::set(PinState::Low));
        pin_transactions.push(PinTrans::set(PinState::High));
    }
    Lis2mdl::new_with_spi(SpiMock::new(transactions), PinMock::new(&pin_transactions))
}

pub fn destroy_spi(sensor: Lis2mdl<SpiInterface<SpiMock, PinMock>>) {
    let (mut spi, mut cs) = sensor.destroy_spi();
    spi.done();
    cs.done();
}

pub fn spi_read(register: u8, data: &[u8]) -> [SpiTrans; 2] {
    [
        SpiTrans::write(vec![register | SPI_READ]),
        SpiTrans::transfer(vec![0; data.len()], data.to_vec()),
    ]
}

pub fn spi_write(register: u8, data: &[u8]) -> [SpiTrans; 2] {
    [
        SpiTrans::write(vec![register | SPI_WRITE]),
        SpiTrans::write(data.to_vec()),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

/// SPI bus on which every transaction fails.
pub struct FailingSpi;

impl embedded_hal::blocking::spi::Write<u8> for FailingSpi {
    type Error = BusFault;

    fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
        Err(BusFault)
    }
}

impl embedded_hal::blocking::spi::Transfer<u8> for FailingSpi {
    type Error = BusFault;

    fn transfer<'w>(&mut self, _words: &'w mut [u8]) -> Result<&'w [u8], Self::Error> {
        Err(BusFault)
    }
}

/// Chip-select pin recording every level it is set to (`true` is high).
#[derive(Default)]
pub struct RecordingPin {
    pub levels: Vec<bool>,
    pub fail_on_high: bool,
}

impl embedded_hal::digital::v2::OutputPin for RecordingPin {
    type Error = PinFault;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        if self.fail_on_high {
            Err(PinFault)
        } else {
            Ok(())
        }
    }
}
