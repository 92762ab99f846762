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

pub struct BitFlags;
impl BitFlags {
    // CFG_REG_A
    pub const MD_MASK: u8 = 0b0000_0011;
    pub const ODR_MASK: u8 = 0b0000_1100;
    pub const ODR_SHIFT: u8 = 2;
    pub const LP: u8 = 1 << 4;
    pub const SOFT_RST: u8 = 1 << 5;
    pub const REBOOT: u8 = 1 << 6;
    pub const COMP_TEMP_EN: u8 = 1 << 7;

    // CFG_REG_B
    pub const LPF: u8 = 1;
    pub const SET_RST_MASK: u8 = 0b0000_0110;
    pub const SET_RST_SHIFT: u8 = 1;
    pub const OFF_CANC_ONE_SHOT: u8 = 1 << 4;

    // CFG_REG_C
    pub const DRDY_ON_PIN: u8 = 1;
    pub const SELF_TEST: u8 = 1 << 1;
    pub const SPI_4WIRE: u8 = 1 << 2;
    pub const BDU: u8 = 1 << 4;

    // STATUS_REG
    pub const XDA: u8 = 1;
    pub const YDA: u8 = 1 << 1;
    pub const ZDA: u8 = 1 << 2;
    pub const ZYXDA: u8 = 1 << 3;
    pub const XOR: u8 = 1 << 4;
    pub const YOR: u8 = 1 << 5;
    pub const ZOR: u8 = 1 << 6;
    pub const ZYXOR: u8 = 1 << 7;
}

/// Set or clear `mask` in `value`.
pub(crate) fn with_flag(value: u8, mask: u8, enable: bool) -> u8 {
    if enable {
        value | mask
    } else {
        value & !mask
    }
}

/// Replace the field selected by `mask` with `bits` shifted by `shift`.
pub(crate) fn with_field(value: u8, mask: u8, shift: u8, bits: u8) -> u8 {
    (value & !mask) | ((bits << shift) & mask)
}
