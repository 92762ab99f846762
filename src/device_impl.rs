use crate::{
    conversion::from_lsb_to_celsius,
    interface::{private::Sealed, I2cInterface, ReadData, SpiInterface, WriteData},
    register::{with_field, with_flag, BitFlags, Register},
    Error, Lis2mdl, MagOffset, MagneticField, OperatingMode, OutputDataRate, PowerMode,
    RawMagneticField, SetResetMode, SpiMode, Status,
};

impl<I2C> Lis2mdl<I2cInterface<I2C>> {
    /// Create new instance of the LIS2MDL device communicating through I2C.
    pub fn new_with_i2c(i2c: I2C) -> Self {
        Lis2mdl {
            iface: I2cInterface { i2c },
        }
    }

    /// Destroy driver instance, return I2C bus.
    pub fn destroy_i2c(self) -> I2C {
        self.iface.i2c
    }
}

impl<SPI, CS> Lis2mdl<SpiInterface<SPI, CS>> {
    /// Create new instance of the LIS2MDL device communicating through SPI.
    ///
    /// The device starts in 3-wire SPI mode. Call
    /// `set_spi_mode(SpiMode::FourWire)` before reading anything.
    pub fn new_with_spi(spi: SPI, chip_select: CS) -> Self {
        Lis2mdl {
            iface: SpiInterface {
                spi,
                cs: chip_select,
            },
        }
    }

    /// Destroy driver instance, return SPI bus and chip-select pin.
    pub fn destroy_spi(self) -> (SPI, CS) {
        (self.iface.spi, self.iface.cs)
    }
}

impl<DI: Sealed> Lis2mdl<DI> {
    pub(crate) fn is_spi(&self) -> bool {
        DI::IS_SPI
    }
}

impl<DI, CommE, PinE> Lis2mdl<DI>
where
    DI: ReadData<Error = Error<CommE, PinE>> + WriteData<Error = Error<CommE, PinE>>,
{
    /// Read the device ID (WHO_AM_I). This should be 0x40.
    pub fn device_id(&mut self) -> Result<u8, Error<CommE, PinE>> {
        self.iface.read_register(Register::WHO_AM_I)
    }

    /// Restore the default configuration of the user registers.
    ///
    /// The reset bit clears itself when done. See [`is_resetting()`](Lis2mdl::is_resetting).
    pub fn software_reset(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_A, BitFlags::SOFT_RST, true)
    }

    /// Whether a software reset is still in progress.
    pub fn is_resetting(&mut self) -> Result<bool, Error<CommE, PinE>> {
        self.read_flag(Register::CFG_REG_A, BitFlags::SOFT_RST)
    }

    /// Reload the trimming parameters from memory.
    pub fn reboot_memory(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_A, BitFlags::REBOOT, true)
    }

    /// Enable or disable block data update.
    ///
    /// When enabled the output registers are not updated until both the
    /// low and high bytes have been read.
    pub fn set_block_data_update(&mut self, enable: bool) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_C, BitFlags::BDU, enable)
    }

    /// Whether block data update is enabled.
    pub fn block_data_update(&mut self) -> Result<bool, Error<CommE, PinE>> {
        self.read_flag(Register::CFG_REG_C, BitFlags::BDU)
    }

    /// Set the output data rate.
    pub fn set_output_data_rate(&mut self, odr: OutputDataRate) -> Result<(), Error<CommE, PinE>> {
        let cfg = self.iface.read_register(Register::CFG_REG_A)?;
        let cfg = with_field(cfg, BitFlags::ODR_MASK, BitFlags::ODR_SHIFT, odr.bits());
        self.iface.write_register(Register::CFG_REG_A, cfg)
    }

    /// Read the output data rate.
    pub fn output_data_rate(&mut self) -> Result<OutputDataRate, Error<CommE, PinE>> {
        let cfg = self.iface.read_register(Register::CFG_REG_A)?;
        Ok(OutputDataRate::from_bits(
            (cfg & BitFlags::ODR_MASK) >> BitFlags::ODR_SHIFT,
        ))
    }

    /// Set the power mode (high resolution or low power).
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(
            Register::CFG_REG_A,
            BitFlags::LP,
            mode == PowerMode::LowPower,
        )
    }

    /// Set the set/reset pulse mode.
    pub fn set_set_reset_mode(&mut self, mode: SetResetMode) -> Result<(), Error<CommE, PinE>> {
        let cfg = self.iface.read_register(Register::CFG_REG_B)?;
        let cfg = with_field(
            cfg,
            BitFlags::SET_RST_MASK,
            BitFlags::SET_RST_SHIFT,
            mode.bits(),
        );
        self.iface.write_register(Register::CFG_REG_B, cfg)
    }

    /// Read the set/reset pulse mode.
    pub fn set_reset_mode(&mut self) -> Result<SetResetMode, Error<CommE, PinE>> {
        let cfg = self.iface.read_register(Register::CFG_REG_B)?;
        Ok(SetResetMode::from_bits(
            (cfg & BitFlags::SET_RST_MASK) >> BitFlags::SET_RST_SHIFT,
        ))
    }

    /// Enable or disable the magnetometer temperature compensation.
    pub fn set_temperature_compensation(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_A, BitFlags::COMP_TEMP_EN, enable)
    }

    /// Whether temperature compensation is enabled.
    pub fn temperature_compensation(&mut self) -> Result<bool, Error<CommE, PinE>> {
        self.read_flag(Register::CFG_REG_A, BitFlags::COMP_TEMP_EN)
    }

    /// Set the operating mode.
    pub fn set_operating_mode(&mut self, mode: OperatingMode) -> Result<(), Error<CommE, PinE>> {
        let cfg = self.iface.read_register(Register::CFG_REG_A)?;
        let cfg = with_field(cfg, BitFlags::MD_MASK, 0, mode.bits());
        self.iface.write_register(Register::CFG_REG_A, cfg)
    }

    /// Read the operating mode.
    pub fn operating_mode(&mut self) -> Result<OperatingMode, Error<CommE, PinE>> {
        let cfg = self.iface.read_register(Register::CFG_REG_A)?;
        Ok(OperatingMode::from_bits(cfg))
    }

    /// Enable or disable the digital low-pass filter (bandwidth ODR/4).
    pub fn set_low_pass_filter(&mut self, enable: bool) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_B, BitFlags::LPF, enable)
    }

    /// Enable or disable offset cancellation in single measurement mode.
    pub fn set_offset_cancellation_one_shot(
        &mut self,
        enable: bool,
    ) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_B, BitFlags::OFF_CANC_ONE_SHOT, enable)
    }

    /// Select 3-wire or 4-wire SPI.
    pub fn set_spi_mode(&mut self, mode: SpiMode) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(
            Register::CFG_REG_C,
            BitFlags::SPI_4WIRE,
            mode == SpiMode::FourWire,
        )
    }

    /// Route the data-ready signal to the INT/DRDY pin.
    pub fn set_data_ready_on_pin(&mut self, enable: bool) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_C, BitFlags::DRDY_ON_PIN, enable)
    }

    /// Enable or disable the self-test.
    pub fn set_self_test(&mut self, enable: bool) -> Result<(), Error<CommE, PinE>> {
        self.update_flag(Register::CFG_REG_C, BitFlags::SELF_TEST, enable)
    }

    /// Program the hard-iron offset registers.
    ///
    /// The device subtracts this offset from every measurement.
    pub fn set_hard_iron_offset(&mut self, offset: &MagOffset) -> Result<(), Error<CommE, PinE>> {
        self.set_hard_iron_offset_raw(offset.to_le_bytes())
    }

    /// Program the hard-iron offset registers from their raw contents,
    /// in register order (`OFFSET_X_REG_L` first).
    pub fn set_hard_iron_offset_raw(&mut self, data: [u8; 6]) -> Result<(), Error<CommE, PinE>> {
        self.iface.write_registers(Register::OFFSET_X_REG_L, &data)
    }

    /// Read the hard-iron offset registers.
    pub fn hard_iron_offset(&mut self) -> Result<MagOffset, Error<CommE, PinE>> {
        let mut data = [0; 6];
        self.iface
            .read_registers(Register::OFFSET_X_REG_L, &mut data)?;
        Ok(MagOffset::from_le_bytes(data))
    }

    /// Read the data status.
    pub fn status(&mut self) -> Result<Status, Error<CommE, PinE>> {
        self.iface
            .read_register(Register::STATUS_REG)
            .map(Status::new)
    }

    /// Whether new data is available on all axes.
    pub fn mag_data_ready(&mut self) -> Result<bool, Error<CommE, PinE>> {
        Ok(self.status()?.xyz_new_data())
    }

    /// Read the raw magnetic field in LSB.
    pub fn magnetic_field_raw(&mut self) -> Result<RawMagneticField, Error<CommE, PinE>> {
        let mut data = [0; 6];
        self.iface.read_registers(Register::OUTX_L_REG, &mut data)?;
        Ok(RawMagneticField::from_le_bytes(data))
    }

    /// Read the magnetic field in milligauss.
    pub fn magnetic_field(&mut self) -> Result<MagneticField, Error<CommE, PinE>> {
        self.magnetic_field_raw().map(MagneticField::from)
    }

    /// Read the magnetic field in milligauss if new data is available.
    ///
    /// Returns `nb::Error::WouldBlock` otherwise.
    pub fn magnetic_field_nb(&mut self) -> nb::Result<MagneticField, Error<CommE, PinE>> {
        if self.mag_data_ready()? {
            Ok(self.magnetic_field()?)
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Read the raw temperature.
    pub fn temperature_raw(&mut self) -> Result<i16, Error<CommE, PinE>> {
        let mut data = [0; 2];
        self.iface
            .read_registers(Register::TEMP_OUT_L_REG, &mut data)?;
        Ok(i16::from_le_bytes(data))
    }

    /// Read the temperature in degrees Celsius.
    pub fn temperature(&mut self) -> Result<f32, Error<CommE, PinE>> {
        self.temperature_raw().map(from_lsb_to_celsius)
    }

    fn update_flag(&mut self, register: u8, mask: u8, enable: bool) -> Result<(), Error<CommE, PinE>> {
        let value = self.iface.read_register(register)?;
        self.iface
            .write_register(register, with_flag(value, mask, enable))
    }

    fn read_flag(&mut self, register: u8, mask: u8) -> Result<bool, Error<CommE, PinE>> {
        Ok(self.iface.read_register(register)? & mask != 0)
    }
}
