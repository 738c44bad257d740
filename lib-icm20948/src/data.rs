use crate::ClockSource;

/// A three axis sample in physical units (g for the accelerometer, deg/s
/// for the gyroscope).
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Componentwise comparison within an absolute tolerance.
    ///
    pub fn approx_eq(&self, other: &Vector, epsilon: f32) -> bool {
        libm::fabsf(self.x - other.x) < epsilon
            && libm::fabsf(self.y - other.y) < epsilon
            && libm::fabsf(self.z - other.z) < epsilon
    }
}

impl From<[f32; 3]> for Vector {
    fn from(axes: [f32; 3]) -> Self {
        Vector::new(axes[0], axes[1], axes[2])
    }
}

/// One full snapshot of the sensor: acceleration, angular rate and the die
/// temperature, all converted to physical units.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorData
{
    pub accel: Vector,
    pub gyro: Vector,
    pub temp: f32,
}

/// Decoded contents of the two power management registers.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerStatus
{
    pub sleep: bool,
    pub low_power: bool,
    pub temperature_disabled: bool,
    pub reset: bool,
    pub clock: ClockSource,

    /// True when all three accelerometer axes are enabled.
    pub accel_enabled: bool,

    /// True when all three gyroscope axes are enabled.
    pub gyro_enabled: bool,
}
