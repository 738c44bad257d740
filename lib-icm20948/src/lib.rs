#![cfg_attr(not(test), no_std)]

pub mod bank;
pub use bank::*;

pub mod accel_scale_range;
pub use accel_scale_range::*;

pub mod gyro_scale_range;
pub use gyro_scale_range::*;

pub mod clock_source;
pub use clock_source::*;

pub mod data;
pub use data::*;

pub mod conversion;
pub use conversion::*;

pub mod registers;

pub mod icm20948;
pub use icm20948::*;

#[cfg(test)]
mod tests;

/// Default i2c address of the ICM-20948 chip (AD0 pin logic high).
///
pub const ICM20948_DEFAULT_I2C_ADDR: u8 = 0x69;

/// i2c address of the ICM-20948 chip when the AD0 pin is pulled low.
///
pub const ICM20948_AD0_LOW_I2C_ADDR: u8 = 0x68;

/// The device ID an ICM-20948 reports in its WHO_AM_I register.
///
pub const ICM20948_DEVICE_ID: u8 = 0xEA;

/// Default i2c bus number the sensor hangs off of.
///
pub const ICM20948_DEFAULT_I2C_BUS: u8 = 2;

/// Driver errors.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E>
{
    /// The bus transport reported an error; carried unchanged, never retried.
    Transport(E),

    /// The live sensitivity register holds a code outside the scale table,
    /// so raw readings cannot be converted to physical units.
    UnknownSensitivity,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Transport(error)
    }
}
