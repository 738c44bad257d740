//! Register addresses and bit masks of the ICM-20948, per TDK DS-000189.
//!
//! The chip multiplexes one 7-bit register address range over four user
//! banks; a register name below is only meaningful while its bank is
//! selected through `REG_BANK_SEL` (which itself is reachable from every
//! bank).

/* User bank 0 */

pub const WHO_AM_I: u8 = 0x00; // reads 0xEA on a healthy chip

pub const PWR_MGMT_1: u8 = 0x06;
pub const PWR_MGMT_2: u8 = 0x07;

pub const ACCEL_XOUT_H: u8 = 0x2D;
pub const ACCEL_XOUT_L: u8 = 0x2E;
pub const ACCEL_YOUT_H: u8 = 0x2F;
pub const ACCEL_YOUT_L: u8 = 0x30;
pub const ACCEL_ZOUT_H: u8 = 0x31;
pub const ACCEL_ZOUT_L: u8 = 0x32;

pub const GYRO_XOUT_H: u8 = 0x33;
pub const GYRO_XOUT_L: u8 = 0x34;
pub const GYRO_YOUT_H: u8 = 0x35;
pub const GYRO_YOUT_L: u8 = 0x36;
pub const GYRO_ZOUT_H: u8 = 0x37;
pub const GYRO_ZOUT_L: u8 = 0x38;

pub const TEMP_OUT_H: u8 = 0x39;
pub const TEMP_OUT_L: u8 = 0x3A;

/// Write a bank code to this register to select a register bank. Available
/// from every bank.
pub const REG_BANK_SEL: u8 = 0x7F;

/* User bank 2 */

pub const GYRO_CONFIG_1: u8 = 0x01; // holds the gyroscope sensitivity bits
pub const ACCEL_CONFIG_1: u8 = 0x14; // holds the accelerometer sensitivity bits

/* PWR_MGMT_1 bits */

pub const SLEEP_BIT: u8 = 6;
pub const TEMP_DIS_BIT: u8 = 3;
pub const LP_EN_BIT: u8 = 5;
pub const DEVICE_RESET_BIT: u8 = 7;

/// Clock source select field, bits 2:0 of PWR_MGMT_1.
pub const CLKSEL_MASK: u8 = 0b111;

/* PWR_MGMT_2 bits */

pub const ACCEL_AXES_MASK: u8 = 0b111 << 3; // all zero = all axes enabled
pub const GYRO_AXES_MASK: u8 = 0b111; // all zero = all axes enabled

/* Sensitivity field, shared by GYRO_CONFIG_1 and ACCEL_CONFIG_1 */

pub const SENSITIVITY_SHIFT: u8 = 1;
pub const SENSITIVITY_MASK: u8 = 0b11 << SENSITIVITY_SHIFT;
