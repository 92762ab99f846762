use crate::conversion::from_lsb_to_mgauss;
use crate::register::BitFlags;

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<CommE, PinE> {
    /// I²C / SPI communication error
    Comm(CommE),
    /// Chip-select pin error (SPI)
    Pin(PinE),
    /// The WHO_AM_I register did not contain the expected value.
    InvalidDeviceId(u8),
    /// The software reset did not complete in time.
    ResetTimeout,
}

/// Output data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDataRate {
    /// 10 Hz (default)
    Hz10,
    /// 20 Hz
    Hz20,
    /// 50 Hz
    Hz50,
    /// 100 Hz
    Hz100,
}

impl OutputDataRate {
    pub(crate) fn bits(self) -> u8 {
        match self {
            OutputDataRate::Hz10 => 0b00,
            OutputDataRate::Hz20 => 0b01,
            OutputDataRate::Hz50 => 0b10,
            OutputDataRate::Hz100 => 0b11,
        }
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => OutputDataRate::Hz10,
            0b01 => OutputDataRate::Hz20,
            0b10 => OutputDataRate::Hz50,
            _ => OutputDataRate::Hz100,
        }
    }
}

impl Default for OutputDataRate {
    fn default() -> Self {
        OutputDataRate::Hz10
    }
}

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingMode {
    /// Continuous measurement
    Continuous,
    /// A single measurement, then back to idle
    SingleTrigger,
    /// Idle (default)
    PowerDown,
}

impl OperatingMode {
    pub(crate) fn bits(self) -> u8 {
        match self {
            OperatingMode::Continuous => 0b00,
            OperatingMode::SingleTrigger => 0b01,
            OperatingMode::PowerDown => 0b10,
        }
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & BitFlags::MD_MASK {
            0b00 => OperatingMode::Continuous,
            0b01 => OperatingMode::SingleTrigger,
            _ => OperatingMode::PowerDown,
        }
    }
}

/// Set/reset pulse mode
///
/// The set/reset pulse removes the sensor's own offset. When done on every
/// ODR cycle the offset cancellation is performed by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetResetMode {
    /// Set pulse every 63 ODR cycles (default)
    SetSensorOdrDiv63,
    /// Set pulse and offset cancellation on every ODR cycle
    SensorOffsetCancellationEveryOdr,
    /// Set pulse only at power on
    SetSensorOnlyAtPowerOn,
}

impl SetResetMode {
    pub(crate) fn bits(self) -> u8 {
        match self {
            SetResetMode::SetSensorOdrDiv63 => 0b00,
            SetResetMode::SensorOffsetCancellationEveryOdr => 0b01,
            SetResetMode::SetSensorOnlyAtPowerOn => 0b10,
        }
    }

    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b01 => SetResetMode::SensorOffsetCancellationEveryOdr,
            0b10 => SetResetMode::SetSensorOnlyAtPowerOn,
            _ => SetResetMode::SetSensorOdrDiv63,
        }
    }
}

/// Power mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    /// High resolution (default)
    HighResolution,
    /// Low power
    LowPower,
}

/// SPI wiring mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiMode {
    /// 3-wire SPI (default)
    ThreeWire,
    /// 4-wire SPI
    FourWire,
}

/// Data status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    bits: u8,
}

impl Status {
    pub(crate) const fn new(bits: u8) -> Self {
        Self { bits }
    }

    /// New X-axis data available
    pub const fn x_new_data(&self) -> bool {
        self.bits & BitFlags::XDA != 0
    }

    /// New Y-axis data available
    pub const fn y_new_data(&self) -> bool {
        self.bits & BitFlags::YDA != 0
    }

    /// New Z-axis data available
    pub const fn z_new_data(&self) -> bool {
        self.bits & BitFlags::ZDA != 0
    }

    /// New data available on all axes
    pub const fn xyz_new_data(&self) -> bool {
        self.bits & BitFlags::ZYXDA != 0
    }

    /// X-axis data was overwritten before it was read
    pub const fn x_overrun(&self) -> bool {
        self.bits & BitFlags::XOR != 0
    }

    /// Y-axis data was overwritten before it was read
    pub const fn y_overrun(&self) -> bool {
        self.bits & BitFlags::YOR != 0
    }

    /// Z-axis data was overwritten before it was read
    pub const fn z_overrun(&self) -> bool {
        self.bits & BitFlags::ZOR != 0
    }

    /// Data on some axis was overwritten before it was read
    pub const fn xyz_overrun(&self) -> bool {
        self.bits & BitFlags::ZYXOR != 0
    }
}

/// Raw magnetic field measurement in LSB
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawMagneticField {
    /// X-axis
    pub x: i16,
    /// Y-axis
    pub y: i16,
    /// Z-axis
    pub z: i16,
}

impl RawMagneticField {
    pub(crate) fn from_le_bytes(data: [u8; 6]) -> Self {
        RawMagneticField {
            x: i16::from_le_bytes([data[0], data[1]]),
            y: i16::from_le_bytes([data[2], data[3]]),
            z: i16::from_le_bytes([data[4], data[5]]),
        }
    }
}

/// Magnetic field measurement in milligauss (mG)
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MagneticField {
    /// X-axis
    pub x: f32,
    /// Y-axis
    pub y: f32,
    /// Z-axis
    pub z: f32,
}

impl From<RawMagneticField> for MagneticField {
    fn from(raw: RawMagneticField) -> Self {
        MagneticField {
            x: from_lsb_to_mgauss(raw.x),
            y: from_lsb_to_mgauss(raw.y),
            z: from_lsb_to_mgauss(raw.z),
        }
    }
}

/// Hard-iron offset in LSB (1.5 mG/LSB)
///
/// The device subtracts this value from each measurement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MagOffset {
    /// X-axis
    pub x: i16,
    /// Y-axis
    pub y: i16,
    /// Z-axis
    pub z: i16,
}

impl MagOffset {
    /// Create an offset from LSB values.
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        MagOffset { x, y, z }
    }

    /// Create an offset from values in milligauss.
    ///
    /// Values are rounded to the nearest LSB and saturate to the register range.
    pub fn from_milligauss(x: f32, y: f32, z: f32) -> Self {
        MagOffset {
            x: mgauss_to_lsb(x),
            y: mgauss_to_lsb(y),
            z: mgauss_to_lsb(z),
        }
    }

    /// Create an offset from the register contents, in register order
    /// (`OFFSET_X_REG_L`, `OFFSET_X_REG_H`, ..., `OFFSET_Z_REG_H`).
    pub const fn from_le_bytes(data: [u8; 6]) -> Self {
        MagOffset {
            x: i16::from_le_bytes([data[0], data[1]]),
            y: i16::from_le_bytes([data[2], data[3]]),
            z: i16::from_le_bytes([data[4], data[5]]),
        }
    }

    /// Register contents for this offset, in register order.
    pub fn to_le_bytes(&self) -> [u8; 6] {
        let [xl, xh] = self.x.to_le_bytes();
        let [yl, yh] = self.y.to_le_bytes();
        let [zl, zh] = self.z.to_le_bytes();
        [xl, xh, yl, yh, zl, zh]
    }
}

// `as` saturates on float to integer conversion.
fn mgauss_to_lsb(value: f32) -> i16 {
    let lsb = value / 1.5;
    let rounded = if lsb >= 0.0 { lsb + 0.5 } else { lsb - 0.5 };
    rounded as i16
}
