use crate::registers::{SENSITIVITY_MASK, SENSITIVITY_SHIFT};

/// Gyroscope full scale range setting (the 2-bit GYRO_FS_SEL code in the
/// `GYRO_CONFIG_1` register, bank 2).
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GyroScaleRange
{
    D250 = 0,
    D500 = 1,
    D1000 = 2,
    D2000 = 3,
}

impl GyroScaleRange {

    /// Converts the given full scale range setting into the bits one would
    /// need to write into the sensitivity field of the `GYRO_CONFIG_1`
    /// register to configure the sensor to use that scale range.
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << SENSITIVITY_SHIFT
    }

    /// Looks up a bare 2-bit sensitivity code. Codes outside the table give
    /// `None`, so an unexpected register value surfaces as a sentinel
    /// instead of a bogus scale factor.
    ///
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GyroScaleRange::D250),
            1 => Some(GyroScaleRange::D500),
            2 => Some(GyroScaleRange::D1000),
            3 => Some(GyroScaleRange::D2000),
            _ => None,
        }
    }

    /// Gets the full scale range currently configured in the `GYRO_CONFIG_1`
    /// register based on its contents.
    ///
    pub fn from_register(value: u8) -> Option<Self> {
        Self::from_code((value & SENSITIVITY_MASK) >> SENSITIVITY_SHIFT)
    }

    /// Gets the sensitivity scale factor for the given scale range.
    /// (Note scale factor is in LSB / (deg/s)).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::D250 => 131.0,
            Self::D500 => 65.5,
            Self::D1000 => 32.8,
            Self::D2000 => 16.4,
        }
    }
}

impl Default for GyroScaleRange {
    fn default() -> Self {
        GyroScaleRange::D250
    }
}
