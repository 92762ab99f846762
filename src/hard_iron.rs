//! Hard-iron offset cancellation sequence.

use crate::{
    conversion::{from_lsb_to_celsius, from_lsb_to_mgauss},
    interface::{ReadData, WriteData},
    Error, Lis2mdl, MagOffset, OperatingMode, OutputDataRate, SetResetMode, SpiMode, DEVICE_ID,
};
use core::fmt;
use embedded_hal::blocking::delay::DelayMs;

/// Configuration for [`HardIronDemo`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardIronConfig {
    /// Offset programmed into the offset registers.
    pub offset: MagOffset,
    /// Output data rate
    pub data_rate: OutputDataRate,
    /// Set/reset pulse mode
    pub set_reset: SetResetMode,
    /// Enable temperature compensation
    pub temperature_compensation: bool,
    /// Time to wait for the device to boot (ms)
    pub boot_time_ms: u16,
    /// Number of reads of the reset flag before giving up
    pub reset_poll_limit: u32,
}

impl Default for HardIronConfig {
    fn default() -> Self {
        HardIronConfig {
            offset: MagOffset::from_le_bytes([0x00, 0xF5, 0x00, 0xF8, 0x00, 0xF4]),
            data_rate: OutputDataRate::Hz10,
            set_reset: SetResetMode::SensorOffsetCancellationEveryOdr,
            temperature_compensation: true,
            boot_time_ms: 20,
            reset_poll_limit: 1000,
        }
    }
}

/// A magnetic field and temperature measurement
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Magnetic field in milligauss, X/Y/Z
    pub magnetic_mg: [f32; 3],
    /// Temperature in degrees Celsius
    pub temperature_c: f32,
}

impl Measurement {
    /// Write the measurement as two CRLF-terminated text lines.
    ///
    /// ```
    /// use lis2mdl::Measurement;
    ///
    /// let m = Measurement { magnetic_mg: [1.5, -3.0, 450.0], temperature_c: 25.25 };
    /// let mut text = String::new();
    /// m.write_report(&mut text).unwrap();
    /// assert_eq!(
    ///     "Magnetic field [mG]:1.50\t-3.00\t450.00\r\nTemperature [degC]: 25.25\r\n",
    ///     text
    /// );
    /// ```
    pub fn write_report<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let [x, y, z] = self.magnetic_mg;
        write!(out, "Magnetic field [mG]:{:4.2}\t{:4.2}\t{:4.2}\r\n", x, y, z)?;
        write!(out, "Temperature [degC]:{:6.2}\r\n", self.temperature_c)
    }
}

/// Configures the device for hard-iron offset cancellation and polls it.
#[derive(Debug)]
pub struct HardIronDemo<DI> {
    sensor: Lis2mdl<DI>,
    config: HardIronConfig,
}

impl<DI> HardIronDemo<DI> {
    /// Create a new instance.
    pub fn new(sensor: Lis2mdl<DI>, config: HardIronConfig) -> Self {
        HardIronDemo { sensor, config }
    }

    /// Configuration in use
    pub fn config(&self) -> &HardIronConfig {
        &self.config
    }

    /// Access the underlying driver.
    pub fn sensor(&mut self) -> &mut Lis2mdl<DI> {
        &mut self.sensor
    }

    /// Destroy the instance and return the driver.
    pub fn release(self) -> Lis2mdl<DI> {
        self.sensor
    }
}

impl<DI, CommE, PinE> HardIronDemo<DI>
where
    DI: ReadData<Error = Error<CommE, PinE>> + WriteData<Error = Error<CommE, PinE>>,
{
    /// Bring the device from power-on to continuous measurement with the
    /// configured hard-iron offset.
    ///
    /// Returns `Error::InvalidDeviceId` if the device does not answer with
    /// the LIS2MDL ID and `Error::ResetTimeout` if the reset does not finish.
    pub fn setup<D: DelayMs<u16>>(&mut self, delay: &mut D) -> Result<(), Error<CommE, PinE>> {
        delay.delay_ms(self.config.boot_time_ms);

        if self.sensor.is_spi() {
            self.sensor.set_spi_mode(SpiMode::FourWire)?;
        }

        let id = self.sensor.device_id()?;
        if id != DEVICE_ID {
            return Err(Error::InvalidDeviceId(id));
        }

        self.reset()?;
        self.sensor.set_block_data_update(true)?;
        self.sensor.set_output_data_rate(self.config.data_rate)?;
        self.sensor.set_set_reset_mode(self.config.set_reset)?;
        self.sensor
            .set_temperature_compensation(self.config.temperature_compensation)?;
        self.sensor.set_operating_mode(OperatingMode::Continuous)?;
        self.sensor.set_hard_iron_offset(&self.config.offset)
    }

    /// Read a new measurement if one is available.
    pub fn poll(&mut self) -> Result<Option<Measurement>, Error<CommE, PinE>> {
        if !self.sensor.mag_data_ready()? {
            return Ok(None);
        }
        let raw = self.sensor.magnetic_field_raw()?;
        let temperature = self.sensor.temperature_raw()?;
        Ok(Some(Measurement {
            magnetic_mg: [
                from_lsb_to_mgauss(raw.x),
                from_lsb_to_mgauss(raw.y),
                from_lsb_to_mgauss(raw.z),
            ],
            temperature_c: from_lsb_to_celsius(temperature),
        }))
    }

    fn reset(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.sensor.software_reset()?;
        for _ in 0..self.config.reset_poll_limit {
            if !self.sensor.is_resetting()? {
                return Ok(());
            }
        }
        Err(Error::ResetTimeout)
    }
}
