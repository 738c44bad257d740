use i2c::{Endianness, I2cDevice, I2cTransport};

use crate::conversion;
use crate::registers::*;
use crate::{
    AccelScaleRange, Bank, ClockSource, Error, GyroScaleRange, PowerStatus, SensorData, Vector,
    ICM20948_DEFAULT_I2C_ADDR, ICM20948_DEFAULT_I2C_BUS, ICM20948_DEVICE_ID,
};

/// Driver for the ICM-20948 9-axis inertial measurement unit.
///
/// Wraps a register accessor bound to the sensor's bus address and layers
/// the bank-addressed register map on top of it. The driver keeps no sensor
/// state of its own: the register bank is re-selected before every
/// bank-specific access and the sensitivity configuration is re-read from
/// the live register before every conversion, so external changes between
/// calls cannot poison a reading.
///
pub struct Icm20948<T: I2cTransport>
{
    i2c: I2cDevice<T>,
}

impl<T: I2cTransport> Icm20948<T> {

    /// Create a new driver for a sensor at the given 7-bit address.
    ///
    pub fn new(transport: T, bus: u8, address: u8, endianness: Endianness) -> Self {
        Icm20948 {
            i2c: I2cDevice::new(transport, bus, address, endianness),
        }
    }

    /// Create a new driver with the default wiring: bus 2, AD0 pulled high
    /// (address 0x69), big-endian register words.
    ///
    pub fn default_wiring(transport: T) -> Self {
        Self::new(
            transport,
            ICM20948_DEFAULT_I2C_BUS,
            ICM20948_DEFAULT_I2C_ADDR,
            Endianness::Big,
        )
    }

    /// Consume the driver and return the transport.
    pub fn release(self) -> T {
        self.i2c.release()
    }

    /// Selects a register bank by writing its code to `REG_BANK_SEL`.
    ///
    /// Called internally immediately before every bank-specific register
    /// access; the selection is never cached because there is no way to
    /// detect an external bank change between calls.
    ///
    pub fn select_bank(&mut self, bank: Bank) -> Result<(), Error<T::Error>> {
        self.i2c.write_byte(REG_BANK_SEL, bank.as_register())?;
        Ok(())
    }

    /// Reads the contents of the `WHO_AM_I` register (bank 0).
    ///
    pub fn who_am_i(&mut self) -> Result<u8, Error<T::Error>> {
        self.select_bank(Bank::Bank0)?;
        Ok(self.i2c.read_byte(WHO_AM_I)?)
    }

    /// Checks if the i2c connection with the sensor is working as expected:
    /// true if and only if `WHO_AM_I` reads the expected 0xEA. A transport
    /// error counts as not-okay rather than being raised.
    ///
    pub fn connection_okay(&mut self) -> bool {
        match self.who_am_i() {
            Ok(ICM20948_DEVICE_ID) => true,
            Ok(id) => {
                log::error!("unexpected WHO_AM_I value {:#04x}", id);
                false
            }
            Err(_) => {
                log::error!("could not read the WHO_AM_I register");
                false
            }
        }
    }

    /// Takes the sensor out of sleep mode. Necessary after power-up before
    /// any output register holds live data.
    ///
    pub fn disable_sleep(&mut self) -> Result<(), Error<T::Error>> {
        self.set_sleep(false)
    }

    /// Puts the sensor into sleep mode.
    ///
    pub fn enable_sleep(&mut self) -> Result<(), Error<T::Error>> {
        self.set_sleep(true)
    }

    fn set_sleep(&mut self, sleep: bool) -> Result<(), Error<T::Error>> {
        self.select_bank(Bank::Bank0)?;
        let mut state = self.i2c.read_byte(PWR_MGMT_1)?;
        state &= !(1 << SLEEP_BIT);
        if sleep {
            state |= 1 << SLEEP_BIT;
        }
        self.i2c.write_byte(PWR_MGMT_1, state)?;
        Ok(())
    }

    /// Selects the clock source by rewriting only the CLKSEL field of
    /// `PWR_MGMT_1`.
    ///
    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), Error<T::Error>> {
        log::info!("setting clock source={:?}", source);
        self.select_bank(Bank::Bank0)?;
        let mut state = self.i2c.read_byte(PWR_MGMT_1)?;
        state = (state & !CLKSEL_MASK) | source.as_register();
        self.i2c.write_byte(PWR_MGMT_1, state)?;
        Ok(())
    }

    /// Reads and decodes both power management registers.
    ///
    pub fn power_status(&mut self) -> Result<PowerStatus, Error<T::Error>> {
        self.select_bank(Bank::Bank0)?;
        let pm1 = self.i2c.read_byte(PWR_MGMT_1)?;
        let pm2 = self.i2c.read_byte(PWR_MGMT_2)?;

        let status = PowerStatus {
            sleep: pm1 & (1 << SLEEP_BIT) != 0,
            low_power: pm1 & (1 << LP_EN_BIT) != 0,
            temperature_disabled: pm1 & (1 << TEMP_DIS_BIT) != 0,
            reset: pm1 & (1 << DEVICE_RESET_BIT) != 0,
            clock: ClockSource::from_register(pm1),
            accel_enabled: pm2 & ACCEL_AXES_MASK == 0,
            gyro_enabled: pm2 & GYRO_AXES_MASK == 0,
        };

        log::debug!(
            "power status: sleep={} clock={:?} temp_disabled={} accel_on={} gyro_on={}",
            status.sleep, status.clock, status.temperature_disabled,
            status.accel_enabled, status.gyro_enabled
        );

        Ok(status)
    }

    /// Sets the accelerometer full scale range, leaving every other bit of
    /// the configuration register (filter selects, reserved bits) as is.
    ///
    pub fn set_accel_scale(&mut self, scale: AccelScaleRange) -> Result<(), Error<T::Error>> {
        self.select_bank(Bank::Bank2)?;
        let config = self.i2c.read_byte(ACCEL_CONFIG_1)?;
        let config = (config & !SENSITIVITY_MASK) | scale.as_register();
        self.i2c.write_byte(ACCEL_CONFIG_1, config)?;
        Ok(())
    }

    /// Reads the accelerometer full scale range from the live configuration
    /// register.
    ///
    pub fn get_accel_scale(&mut self) -> Result<AccelScaleRange, Error<T::Error>> {
        self.select_bank(Bank::Bank2)?;
        let config = self.i2c.read_byte(ACCEL_CONFIG_1)?;
        AccelScaleRange::from_register(config).ok_or(Error::UnknownSensitivity)
    }

    /// Sets the gyroscope full scale range, leaving every other bit of the
    /// configuration register as is.
    ///
    pub fn set_gyro_scale(&mut self, scale: GyroScaleRange) -> Result<(), Error<T::Error>> {
        self.select_bank(Bank::Bank2)?;
        let config = self.i2c.read_byte(GYRO_CONFIG_1)?;
        let config = (config & !SENSITIVITY_MASK) | scale.as_register();
        self.i2c.write_byte(GYRO_CONFIG_1, config)?;
        Ok(())
    }

    /// Reads the gyroscope full scale range from the live configuration
    /// register.
    ///
    pub fn get_gyro_scale(&mut self) -> Result<GyroScaleRange, Error<T::Error>> {
        self.select_bank(Bank::Bank2)?;
        let config = self.i2c.read_byte(GYRO_CONFIG_1)?;
        GyroScaleRange::from_register(config).ok_or(Error::UnknownSensitivity)
    }

    /// Get the current accelerometer sensor values (in g).
    ///
    /// The scale factor is re-read from the sensitivity register first; a
    /// configuration change between calls is always picked up.
    ///
    pub fn get_accel(&mut self) -> Result<Vector, Error<T::Error>> {
        let scale = self.get_accel_scale()?;
        self.select_bank(Bank::Bank0)?;
        let raw: [u8; 6] = self.i2c.read_bytes(ACCEL_XOUT_H)?;
        Ok(conversion::accel_from_raw(&raw, scale, self.i2c.endianness()))
    }

    /// Get the current gyroscope sensor values (in deg/s).
    ///
    pub fn get_gyro(&mut self) -> Result<Vector, Error<T::Error>> {
        let scale = self.get_gyro_scale()?;
        self.select_bank(Bank::Bank0)?;
        let raw: [u8; 6] = self.i2c.read_bytes(GYRO_XOUT_H)?;
        Ok(conversion::gyro_from_raw(&raw, scale, self.i2c.endianness()))
    }

    /// Get the die temperature in degrees celsius. Readings outside the
    /// typical bench range are logged as a hint but returned unchanged.
    ///
    pub fn get_temp(&mut self) -> Result<f32, Error<T::Error>> {
        self.select_bank(Bank::Bank0)?;
        let raw = self.i2c.read_word(TEMP_OUT_H)? as i16;
        let temperature = conversion::temperature_from_raw(raw);

        if !conversion::temperature_plausible(temperature) {
            log::warn!("temperature {} C is outside the typical debugging range", temperature);
        }
        Ok(temperature)
    }

    /// Gets the current acceleration, angular rate and temperature all at
    /// once. The output registers are contiguous in bank 0, so after the two
    /// sensitivity reads this takes a single 14 byte transaction, which is
    /// more efficient than calling `get_accel` and `get_gyro` after one
    /// another.
    ///
    pub fn get_data(&mut self) -> Result<SensorData, Error<T::Error>> {
        let accel_scale = self.get_accel_scale()?;
        let gyro_scale = self.get_gyro_scale()?;

        self.select_bank(Bank::Bank0)?;
        let raw: [u8; 14] = self.i2c.read_bytes(ACCEL_XOUT_H)?;
        let endianness = self.i2c.endianness();

        // First 6 bytes are the accelerometer registers.
        let accel_raw: [u8; 6] = raw[0..6].try_into().unwrap();
        let accel = conversion::accel_from_raw(&accel_raw, accel_scale, endianness);

        // Next 6 bytes are the gyroscope registers.
        let gyro_raw: [u8; 6] = raw[6..12].try_into().unwrap();
        let gyro = conversion::gyro_from_raw(&gyro_raw, gyro_scale, endianness);

        // Last 2 bytes are the built-in temperature sensor.
        let temp_raw = endianness.word_from_bytes(raw[12], raw[13]) as i16;
        let temp = conversion::temperature_from_raw(temp_raw);

        if !conversion::temperature_plausible(temp) {
            log::warn!("temperature {} C is outside the typical debugging range", temp);
        }

        Ok(SensorData { accel, gyro, temp })
    }
}
