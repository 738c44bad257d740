//! Pure conversions from raw register bytes to physical units. Nothing in
//! here touches the bus; the caller supplies the raw block, the live scale
//! setting and the byte order it was read under.

use i2c::Endianness;

use crate::{AccelScaleRange, GyroScaleRange, Vector};

/// Sensitivity of the die temperature sensor in LSB per degree C.
pub const TEMP_SENSITIVITY: f32 = 333.87;

/// Offset of the temperature formula; raw 21 maps to 21 degrees C.
pub const TEMP_OFFSET: f32 = 21.0;

/// Typical die temperature range on a bench setup; readings outside it are
/// flagged as a diagnostic hint, not rejected.
pub const TEMP_PLAUSIBLE_MIN: f32 = 10.0;
pub const TEMP_PLAUSIBLE_MAX: f32 = 40.0;

/// Converts a contiguous 6-byte output block (x, y, z as two's-complement
/// 16 bit values) into a physical-unit vector by dividing through the scale
/// factor.
///
pub fn axes_from_raw(raw: &[u8; 6], scale_factor: f32, endianness: Endianness) -> Vector {
    let mut axes = [0.0f32; 3];
    for (i, axis) in axes.iter_mut().enumerate() {
        let value = endianness.word_from_bytes(raw[i * 2], raw[i * 2 + 1]) as i16;
        *axis = value as f32 / scale_factor;
    }
    Vector::from(axes)
}

/// Converts a raw accelerometer block into g.
///
pub fn accel_from_raw(raw: &[u8; 6], scale: AccelScaleRange, endianness: Endianness) -> Vector {
    axes_from_raw(raw, scale.as_scale_factor(), endianness)
}

/// Converts a raw gyroscope block into deg/s.
///
pub fn gyro_from_raw(raw: &[u8; 6], scale: GyroScaleRange, endianness: Endianness) -> Vector {
    axes_from_raw(raw, scale.as_scale_factor(), endianness)
}

/// Converts the raw two's-complement temperature reading into degrees C.
/// Formula from the datasheet: `((raw - 21) / 333.87) + 21`. Does not depend
/// on any sensitivity setting.
///
pub fn temperature_from_raw(raw: i16) -> f32 {
    ((raw as f32 - TEMP_OFFSET) / TEMP_SENSITIVITY) + TEMP_OFFSET
}

/// Whether a converted temperature falls inside the typical bench range.
///
pub fn temperature_plausible(temperature: f32) -> bool {
    (TEMP_PLAUSIBLE_MIN..=TEMP_PLAUSIBLE_MAX).contains(&temperature)
}
