use embedded_hal_mock::eh0::{i2c::Transaction as I2cTrans, MockError};
use lis2mdl::{
    Error, MagOffset, MagneticField, OperatingMode, OutputDataRate, PowerMode, RawMagneticField,
    SetResetMode, SpiMode,
};
mod common;
use crate::common::{destroy_i2c, i2c_read, i2c_write, new_i2c, Register, DEVICE_ID};

#[test]
fn can_create_and_destroy() {
    let sensor = new_i2c(&[]);
    destroy_i2c(sensor);
}

#[test]
fn can_get_device_id() {
    let mut sensor = new_i2c(&[i2c_read(Register::WHO_AM_I, &[DEVICE_ID])]);
    assert_eq!(DEVICE_ID, sensor.device_id().unwrap());
    destroy_i2c(sensor);
}

#[test]
fn bus_error_is_returned() {
    let mut sensor = new_i2c(&[I2cTrans::write_read(
        common::ADDR,
        vec![Register::WHO_AM_I | 0x80],
        vec![0],
    )
    .with_error(MockError::Io(std::io::ErrorKind::Other))]);
    assert!(matches!(sensor.device_id(), Err(Error::Comm(_))));
    destroy_i2c(sensor);
}

macro_rules! update_test {
    ($name:ident, $method:ident, $arg:expr, $reg:expr, $before:expr, $after:expr) => {
        #[test]
        fn $name() {
            let mut sensor = new_i2c(&[i2c_read($reg, &[$before]), i2c_write($reg, &[$after])]);
            sensor.$method($arg).unwrap();
            destroy_i2c(sensor);
        }
    };
    ($name:ident, $method:ident, $reg:expr, $before:expr, $after:expr) => {
        #[test]
        fn $name() {
            let mut sensor = new_i2c(&[i2c_read($reg, &[$before]), i2c_write($reg, &[$after])]);
            sensor.$method().unwrap();
            destroy_i2c(sensor);
        }
    };
}

macro_rules! get_test {
    ($name:ident, $method:ident, $reg:expr, $value:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let mut sensor = new_i2c(&[i2c_read($reg, &[$value])]);
            assert_eq!($expected, sensor.$method().unwrap());
            destroy_i2c(sensor);
        }
    };
}

update_test!(can_reset, software_reset, Register::CFG_REG_A, 0x03, 0x23);
update_test!(can_reboot, reboot_memory, Register::CFG_REG_A, 0x03, 0x43);
get_test!(resetting, is_resetting, Register::CFG_REG_A, 0x23, true);
get_test!(not_resetting, is_resetting, Register::CFG_REG_A, 0x03, false);

update_test!(en_bdu, set_block_data_update, true, Register::CFG_REG_C, 0x04, 0x14);
update_test!(dis_bdu, set_block_data_update, false, Register::CFG_REG_C, 0x14, 0x04);
get_test!(bdu_enabled, block_data_update, Register::CFG_REG_C, 0x10, true);

update_test!(odr_10, set_output_data_rate, OutputDataRate::Hz10, Register::CFG_REG_A, 0x8F, 0x83);
update_test!(odr_20, set_output_data_rate, OutputDataRate::Hz20, Register::CFG_REG_A, 0x03, 0x07);
update_test!(odr_50, set_output_data_rate, OutputDataRate::Hz50, Register::CFG_REG_A, 0x03, 0x0B);
update_test!(odr_100, set_output_data_rate, OutputDataRate::Hz100, Register::CFG_REG_A, 0x03, 0x0F);
get_test!(get_odr, output_data_rate, Register::CFG_REG_A, 0x8B, OutputDataRate::Hz50);

update_test!(low_power, set_power_mode, PowerMode::LowPower, Register::CFG_REG_A, 0x03, 0x13);
update_test!(high_res, set_power_mode, PowerMode::HighResolution, Register::CFG_REG_A, 0x13, 0x03);

update_test!(
    set_rst_every_odr,
    set_set_reset_mode,
    SetResetMode::SensorOffsetCancellationEveryOdr,
    Register::CFG_REG_B,
    0x11,
    0x13
);
update_test!(
    set_rst_odr_div_63,
    set_set_reset_mode,
    SetResetMode::SetSensorOdrDiv63,
    Register::CFG_REG_B,
    0x06,
    0x00
);
update_test!(
    set_rst_power_on,
    set_set_reset_mode,
    SetResetMode::SetSensorOnlyAtPowerOn,
    Register::CFG_REG_B,
    0x00,
    0x04
);
get_test!(
    get_set_rst,
    set_reset_mode,
    Register::CFG_REG_B,
    0x03,
    SetResetMode::SensorOffsetCancellationEveryOdr
);

update_test!(en_temp_comp, set_temperature_compensation, true, Register::CFG_REG_A, 0x03, 0x83);
update_test!(dis_temp_comp, set_temperature_compensation, false, Register::CFG_REG_A, 0x83, 0x03);
get_test!(temp_comp_enabled, temperature_compensation, Register::CFG_REG_A, 0x80, true);

update_test!(continuous, set_operating_mode, OperatingMode::Continuous, Register::CFG_REG_A, 0x83, 0x80);
update_test!(single, set_operating_mode, OperatingMode::SingleTrigger, Register::CFG_REG_A, 0x80, 0x81);
update_test!(power_down, set_operating_mode, OperatingMode::PowerDown, Register::CFG_REG_A, 0x80, 0x82);
get_test!(get_idle, operating_mode, Register::CFG_REG_A, 0x03, OperatingMode::PowerDown);
get_test!(get_continuous, operating_mode, Register::CFG_REG_A, 0x8C, OperatingMode::Continuous);

update_test!(en_lpf, set_low_pass_filter, true, Register::CFG_REG_B, 0x02, 0x03);
update_test!(en_off_canc_one_shot, set_offset_cancellation_one_shot, true, Register::CFG_REG_B, 0x02, 0x12);
update_test!(four_wire, set_spi_mode, SpiMode::FourWire, Register::CFG_REG_C, 0x10, 0x14);
update_test!(three_wire, set_spi_mode, SpiMode::ThreeWire, Register::CFG_REG_C, 0x14, 0x10);
update_test!(en_drdy_pin, set_data_ready_on_pin, true, Register::CFG_REG_C, 0x10, 0x11);
update_test!(en_self_test, set_self_test, true, Register::CFG_REG_C, 0x10, 0x12);

#[test]
fn can_set_hard_iron_offset() {
    let mut sensor = new_i2c(&[i2c_write(
        Register::OFFSET_X_REG_L,
        &[0x00, 0xF5, 0x00, 0xF8, 0x00, 0xF4],
    )]);
    sensor
        .set_hard_iron_offset(&MagOffset::new(-2816, -2048, -3072))
        .unwrap();
    destroy_i2c(sensor);
}

#[test]
fn can_set_hard_iron_offset_raw() {
    let mut sensor = new_i2c(&[i2c_write(
        Register::OFFSET_X_REG_L,
        &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
    )]);
    sensor
        .set_hard_iron_offset_raw([0x01, 0x02, 0x03, 0x04, 0x05, 0x06])
        .unwrap();
    destroy_i2c(sensor);
}

#[test]
fn can_get_hard_iron_offset() {
    let mut sensor = new_i2c(&[i2c_read(
        Register::OFFSET_X_REG_L,
        &[0x64, 0x00, 0x9C, 0xFF, 0x00, 0x00],
    )]);
    assert_eq!(
        MagOffset::new(100, -100, 0),
        sensor.hard_iron_offset().unwrap()
    );
    destroy_i2c(sensor);
}

#[test]
fn can_get_status() {
    let mut sensor = new_i2c(&[i2c_read(Register::STATUS_REG, &[0b1000_1111])]);
    let status = sensor.status().unwrap();
    assert!(status.xyz_new_data());
    assert!(status.x_new_data());
    assert!(status.y_new_data());
    assert!(status.z_new_data());
    assert!(status.xyz_overrun());
    assert!(!status.x_overrun());
    destroy_i2c(sensor);
}

get_test!(data_ready, mag_data_ready, Register::STATUS_REG, 0x08, true);
get_test!(data_not_ready, mag_data_ready, Register::STATUS_REG, 0x07, false);

#[test]
fn can_read_raw_magnetic_field() {
    let mut sensor = new_i2c(&[i2c_read(
        Register::OUTX_L_REG,
        &[0x64, 0x00, 0x9C, 0xFF, 0x00, 0x01],
    )]);
    assert_eq!(
        RawMagneticField {
            x: 100,
            y: -100,
            z: 256
        },
        sensor.magnetic_field_raw().unwrap()
    );
    destroy_i2c(sensor);
}

#[test]
fn can_read_magnetic_field() {
    let mut sensor = new_i2c(&[i2c_read(
        Register::OUTX_L_REG,
        &[0x64, 0x00, 0x9C, 0xFF, 0x00, 0x01],
    )]);
    assert_eq!(
        MagneticField {
            x: 150.0,
            y: -150.0,
            z: 384.0
        },
        sensor.magnetic_field().unwrap()
    );
    destroy_i2c(sensor);
}

#[test]
fn magnetic_field_nb_would_block() {
    let mut sensor = new_i2c(&[i2c_read(Register::STATUS_REG, &[0x00])]);
    assert!(matches!(
        sensor.magnetic_field_nb(),
        Err(nb::Error::WouldBlock)
    ));
    destroy_i2c(sensor);
}

#[test]
fn magnetic_field_nb_returns_data() {
    let mut sensor = new_i2c(&[
        i2c_read(Register::STATUS_REG, &[0x08]),
        i2c_read(Register::OUTX_L_REG, &[0x02, 0x00, 0x00, 0x00, 0xFE, 0xFF]),
    ]);
    let field = nb::block!(sensor.magnetic_field_nb()).unwrap();
    assert_eq!(
        MagneticField {
            x: 3.0,
            y: 0.0,
            z: -3.0
        },
        field
    );
    destroy_i2c(sensor);
}

#[test]
fn can_read_temperature() {
    let mut sensor = new_i2c(&[
        i2c_read(Register::TEMP_OUT_L_REG, &[0xF8, 0xFF]),
        i2c_read(Register::TEMP_OUT_L_REG, &[0x10, 0x00]),
    ]);
    assert_eq!(-8, sensor.temperature_raw().unwrap());
    assert_eq!(27.0, sensor.temperature().unwrap());
    destroy_i2c(sensor);
}
