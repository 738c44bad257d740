use crate::registers::{SENSITIVITY_MASK, SENSITIVITY_SHIFT};

/// Accelerometer full scale range setting (the 2-bit ACCEL_FS_SEL code in
/// the `ACCEL_CONFIG` register, bank 2).
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelScaleRange
{
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelScaleRange {

    /// Converts the given full scale range setting into the bits one would
    /// need to write into the sensitivity field of the `ACCEL_CONFIG`
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
            0 => Some(AccelScaleRange::G2),
            1 => Some(AccelScaleRange::G4),
            2 => Some(AccelScaleRange::G8),
            3 => Some(AccelScaleRange::G16),
            _ => None,
        }
    }

    /// Gets the full scale range currently configured in the `ACCEL_CONFIG`
    /// register based on its contents.
    ///
    pub fn from_register(value: u8) -> Option<Self> {
        Self::from_code((value & SENSITIVITY_MASK) >> SENSITIVITY_SHIFT)
    }

    /// Gets the sensitivity scale factor for the given scale range.
    /// (Note scale factor is in LSB/g).
    ///
    pub fn as_scale_factor(&self) -> f32 {
        match self {
            Self::G2 => 16384.0,
            Self::G4 => 8192.0,
            Self::G8 => 4096.0,
            Self::G16 => 2048.0,
        }
    }
}

impl Default for AccelScaleRange {
    fn default() -> Self {
        AccelScaleRange::G2
    }
}
