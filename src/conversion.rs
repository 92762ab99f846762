/// Convert a raw magnetic field value to milligauss (1.5 mG/LSB).
pub fn from_lsb_to_mgauss(lsb: i16) -> f32 {
    f32::from(lsb) * 1.5
}

/// Convert a raw temperature value to degrees Celsius.
///
/// The output is 8 LSB/°C with 0 LSB at 25 °C.
pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    f32::from(lsb) / 8.0 + 25.0
}
