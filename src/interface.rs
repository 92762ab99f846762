//! I2C/SPI interfaces

use crate::Error;
use embedded_hal::{
    blocking::{i2c, spi},
    digital::v2::OutputPin,
};

/// LIS2MDL I2C address (7-bit)
pub const I2C_ADDRESS: u8 = 0x1E;

/// Maximum number of bytes written in a single multi-byte transaction.
pub(crate) const MAX_WRITE_LEN: usize = 6;

const I2C_MULTI: u8 = 0x80;
const SPI_WRITE: u8 = 0x40;
const SPI_READ: u8 = 0xC0;

/// I2C interface
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    pub(crate) i2c: I2C,
}

/// SPI interface
#[derive(Debug)]
pub struct SpiInterface<SPI, CS> {
    pub(crate) spi: SPI,
    pub(crate) cs: CS,
}

/// Write data
pub trait WriteData: private::Sealed {
    /// Error type
    type Error;

    /// Write to a register.
    fn write_register(&mut self, register: u8, data: u8) -> Result<(), Self::Error> {
        self.write_registers(register, &[data])
    }

    /// Write consecutive registers starting at `register`.
    ///
    /// At most 6 bytes can be written at once.
    fn write_registers(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<I2C, E> WriteData for I2cInterface<I2C>
where
    I2C: i2c::Write<Error = E>,
{
    type Error = Error<E, ()>;

    fn write_registers(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        debug_assert!(data.len() <= MAX_WRITE_LEN);
        let len = data.len().min(MAX_WRITE_LEN);
        let mut payload = [0; MAX_WRITE_LEN + 1];
        payload[0] = register | I2C_MULTI;
        payload[1..=len].copy_from_slice(&data[..len]);
        self.i2c
            .write(I2C_ADDRESS, &payload[..=len])
            .map_err(Error::Comm)
    }
}

impl<SPI, CS, CommE, PinE> WriteData for SpiInterface<SPI, CS>
where
    SPI: spi::Write<u8, Error = CommE>,
    CS: OutputPin<Error = PinE>,
{
    type Error = Error<CommE, PinE>;

    fn write_registers(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        debug_assert!(data.len() <= MAX_WRITE_LEN);
        self.cs.set_low().map_err(Error::Pin)?;
        let result = self
            .spi
            .write(&[register | SPI_WRITE])
            .and_then(|_| self.spi.write(data))
            .map_err(Error::Comm);
        let released = self.cs.set_high().map_err(Error::Pin);
        result.and(released)
    }
}

/// Read data
pub trait ReadData: private::Sealed {
    /// Error type
    type Error;

    /// Read a register.
    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut data = [0];
        self.read_registers(register, &mut data)?;
        Ok(data[0])
    }

    /// Read consecutive registers starting at `register`.
    fn read_registers(&mut self, register: u8, data: &mut [u8]) -> Result<(), Self::Error>;
}

impl<I2C, E> ReadData for I2cInterface<I2C>
where
    I2C: i2c::WriteRead<Error = E>,
{
    type Error = Error<E, ()>;

    fn read_registers(&mut self, register: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c
            .write_read(I2C_ADDRESS, &[register | I2C_MULTI], data)
            .map_err(Error::Comm)
    }
}

impl<SPI, CS, CommE, PinE> ReadData for SpiInterface<SPI, CS>
where
    SPI: spi::Transfer<u8, Error = CommE> + spi::Write<u8, Error = CommE>,
    CS: OutputPin<Error = PinE>,
{
    type Error = Error<CommE, PinE>;

    fn read_registers(&mut self, register: u8, data: &mut [u8]) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(Error::Pin)?;
        let result = self
            .spi
            .write(&[register | SPI_READ])
            .and_then(|_| {
                data.iter_mut().for_each(|byte| *byte = 0);
                self.spi.transfer(data).map(|_| ())
            })
            .map_err(Error::Comm);
        let released = self.cs.set_high().map_err(Error::Pin);
        result.and(released)
    }
}

pub(crate) mod private {
    use super::{I2cInterface, SpiInterface};

    pub trait Sealed {
        const IS_SPI: bool;
    }

    impl<I2C> Sealed for I2cInterface<I2C> {
        const IS_SPI: bool = false;
    }
    impl<SPI, CS> Sealed for SpiInterface<SPI, CS> {
        const IS_SPI: bool = true;
    }
}
