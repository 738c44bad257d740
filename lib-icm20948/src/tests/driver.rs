use i2c::{Endianness, I2cDevice};

use super::bank_bus::{BankRegisterFile, BusError};
use crate::registers::*;
use crate::*;

fn driver_on(bus: &mut BankRegisterFile) -> Icm20948<&mut BankRegisterFile> {
    Icm20948::new(bus, 2, ICM20948_DEFAULT_I2C_ADDR, Endianness::Big)
}

#[test]
fn identity_check_accepts_only_expected_id() {
    let mut bus = BankRegisterFile::new();
    let mut imu = driver_on(&mut bus);
    assert_eq!(imu.who_am_i().unwrap(), 0xEA);
    assert!(imu.connection_okay());

    drop(imu);
    bus.banks[0][WHO_AM_I as usize] = 0x00;
    assert!(!driver_on(&mut bus).connection_okay());

    bus.banks[0][WHO_AM_I as usize] = 0xFF;
    assert!(!driver_on(&mut bus).connection_okay());
}

#[test]
fn identity_check_maps_transport_error_to_false() {
    let mut bus = BankRegisterFile::new();
    bus.fail_sends = true;
    assert!(!driver_on(&mut bus).connection_okay());
}

#[test]
fn bank_reselected_before_every_access() {
    let mut bus = BankRegisterFile::new();
    let mut imu = driver_on(&mut bus);

    imu.get_accel_scale().unwrap();
    imu.get_accel_scale().unwrap();

    drop(imu);
    assert_eq!(
        bus.bank_selects(),
        2,
        "the bank select write must never be elided or cached"
    );
}

#[test]
fn bank_isolation_same_register_number() {
    let mut bus = BankRegisterFile::new();
    // Register 0x01 exists in bank 0 (junk here) and in bank 2 (gyro
    // config). The driver has to read the bank 2 copy.
    bus.banks[0][GYRO_CONFIG_1 as usize] = 0xAA;
    bus.banks[2][GYRO_CONFIG_1 as usize] = GyroScaleRange::D500.as_register();

    let mut imu = driver_on(&mut bus);
    assert_eq!(imu.get_gyro_scale().unwrap(), GyroScaleRange::D500);
}

#[test]
fn bank_isolation_raw_register_file() {
    let mut bus = BankRegisterFile::new();
    let mut device = I2cDevice::new(&mut bus, 2, 0x69, Endianness::Big);

    device.write_byte(REG_BANK_SEL, Bank::Bank1.as_register()).unwrap();
    device.write_byte(0x10, 0x11).unwrap();
    device.write_byte(REG_BANK_SEL, Bank::Bank3.as_register()).unwrap();
    device.write_byte(0x10, 0x33).unwrap();

    device.write_byte(REG_BANK_SEL, Bank::Bank1.as_register()).unwrap();
    assert_eq!(device.read_byte(0x10).unwrap(), 0x11);
    device.write_byte(REG_BANK_SEL, Bank::Bank3.as_register()).unwrap();
    assert_eq!(device.read_byte(0x10).unwrap(), 0x33);
}

#[test]
fn sleep_toggle_preserves_other_bits() {
    let mut bus = BankRegisterFile::new();
    // Pre-set byte with known non-sleep bits: reset clear, temp disabled,
    // CLKSEL = 3.
    bus.banks[0][PWR_MGMT_1 as usize] = 0b0000_1011;

    let mut imu = driver_on(&mut bus);
    imu.enable_sleep().unwrap();
    drop(imu);
    assert_eq!(bus.banks[0][PWR_MGMT_1 as usize], 0b0100_1011);

    let mut imu = driver_on(&mut bus);
    imu.disable_sleep().unwrap();
    drop(imu);
    assert_eq!(bus.banks[0][PWR_MGMT_1 as usize], 0b0000_1011);
}

#[test]
fn clock_source_rewrites_only_clksel() {
    let mut bus = BankRegisterFile::new();
    bus.banks[0][PWR_MGMT_1 as usize] = 0b0100_1001;

    let mut imu = driver_on(&mut bus);
    imu.set_clock_source(ClockSource::Internal20Mhz).unwrap();
    drop(imu);
    assert_eq!(bus.banks[0][PWR_MGMT_1 as usize], 0b0100_1000);
}

#[test]
fn sensitivity_write_preserves_reserved_bits() {
    let mut bus = BankRegisterFile::new();
    // Filter and reserved bits set around the 2-bit sensitivity field.
    bus.banks[2][ACCEL_CONFIG_1 as usize] = 0b1111_1001;

    let mut imu = driver_on(&mut bus);
    imu.set_accel_scale(AccelScaleRange::G4).unwrap();
    drop(imu);
    assert_eq!(bus.banks[2][ACCEL_CONFIG_1 as usize], 0b1111_1011);

    let mut imu = driver_on(&mut bus);
    assert_eq!(imu.get_accel_scale().unwrap(), AccelScaleRange::G4);
}

#[test]
fn gyro_sensitivity_round_trip() {
    let mut bus = BankRegisterFile::new();
    let mut imu = driver_on(&mut bus);

    for scale in [
        GyroScaleRange::D250,
        GyroScaleRange::D500,
        GyroScaleRange::D1000,
        GyroScaleRange::D2000,
    ] {
        imu.set_gyro_scale(scale).unwrap();
        assert_eq!(imu.get_gyro_scale().unwrap(), scale);
    }
}

#[test]
fn accel_reading_uses_live_scale() {
    let mut bus = BankRegisterFile::new();
    bus.banks[2][ACCEL_CONFIG_1 as usize] = AccelScaleRange::G2.as_register();
    // x = +16384 (1 g at +-2g), y = -16384, z = +8192.
    bus.banks[0][ACCEL_XOUT_H as usize..=ACCEL_ZOUT_L as usize]
        .copy_from_slice(&[0x40, 0x00, 0xC0, 0x00, 0x20, 0x00]);

    let mut imu = driver_on(&mut bus);
    let accel = imu.get_accel().unwrap();
    assert!(accel.approx_eq(&Vector::new(1.0, -1.0, 0.5), 1e-6));

    // Sensitivity changed behind the driver's back; the same raw counts now
    // mean twice the acceleration.
    imu.set_accel_scale(AccelScaleRange::G4).unwrap();
    let accel = imu.get_accel().unwrap();
    assert!(accel.approx_eq(&Vector::new(2.0, -2.0, 1.0), 1e-6));
}

#[test]
fn gyro_reading_converts_per_scale() {
    let mut bus = BankRegisterFile::new();
    bus.banks[2][GYRO_CONFIG_1 as usize] = GyroScaleRange::D500.as_register();
    // x = +131 counts (2 deg/s at 65.5 LSB per deg/s), y = 0, z = -131.
    bus.banks[0][GYRO_XOUT_H as usize..=GYRO_ZOUT_L as usize]
        .copy_from_slice(&[0x00, 0x83, 0x00, 0x00, 0xFF, 0x7D]);

    let mut imu = driver_on(&mut bus);
    let gyro = imu.get_gyro().unwrap();
    assert!(gyro.approx_eq(&Vector::new(2.0, 0.0, -2.0), 1e-6));
}

#[test]
fn temperature_reading() {
    let mut bus = BankRegisterFile::new();
    // Raw 21 maps to exactly 21 degrees.
    bus.banks[0][TEMP_OUT_H as usize] = 0x00;
    bus.banks[0][TEMP_OUT_L as usize] = 21;

    let mut imu = driver_on(&mut bus);
    assert_eq!(imu.get_temp().unwrap(), 21.0);

    drop(imu);
    // Raw 21 + 334 is one sensitivity step up, about 22 degrees.
    bus.banks[0][TEMP_OUT_H as usize] = 0x01;
    bus.banks[0][TEMP_OUT_L as usize] = 0x63;
    let mut imu = driver_on(&mut bus);
    assert!(libm::fabsf(imu.get_temp().unwrap() - 22.0) < 1e-3);
}

#[test]
fn snapshot_reads_one_block() {
    let mut bus = BankRegisterFile::new();
    bus.banks[2][ACCEL_CONFIG_1 as usize] = AccelScaleRange::G2.as_register();
    bus.banks[2][GYRO_CONFIG_1 as usize] = GyroScaleRange::D250.as_register();
    bus.banks[0][ACCEL_XOUT_H as usize..=TEMP_OUT_L as usize].copy_from_slice(&[
        0x40, 0x00, 0x00, 0x00, 0xC0, 0x00, // accel: 1 g, 0, -1 g
        0x00, 0x83, 0xFF, 0x7D, 0x00, 0x00, // gyro: 1 deg/s, -1 deg/s, 0
        0x00, 0x15, // temp: raw 21
    ]);

    let mut imu = driver_on(&mut bus);
    let data = imu.get_data().unwrap();
    assert!(data.accel.approx_eq(&Vector::new(1.0, 0.0, -1.0), 1e-6));
    assert!(data.gyro.approx_eq(&Vector::new(1.0, -1.0, 0.0), 1e-6));
    assert_eq!(data.temp, 21.0);

    drop(imu);
    // Scale reads live in bank 2, then exactly one 14 byte block read.
    let block_reads: Vec<_> = bus
        .transactions
        .iter()
        .filter(|seq| seq.len() == 4 + 14)
        .collect();
    assert_eq!(block_reads.len(), 1);
    assert_eq!(block_reads[0][1], ACCEL_XOUT_H as u16);
}

#[test]
fn transport_errors_propagate_and_release_handles() {
    let mut bus = BankRegisterFile::new();
    bus.fail_sends = true;

    let mut imu = driver_on(&mut bus);
    assert_eq!(imu.get_temp(), Err(Error::Transport(BusError(-5))));

    drop(imu);
    assert_eq!(bus.opens, bus.closes, "handles must be released on failure");
    assert_eq!(bus.transactions.len(), 1, "no retries on transport failure");
}

#[test]
fn power_status_decodes_both_registers() {
    let mut bus = BankRegisterFile::new();
    bus.banks[0][PWR_MGMT_1 as usize] = 0b0100_1001; // sleep, temp off, auto clock
    bus.banks[0][PWR_MGMT_2 as usize] = 0b0011_1000; // accel axes disabled

    let mut imu = driver_on(&mut bus);
    let status = imu.power_status().unwrap();
    assert!(status.sleep);
    assert!(status.temperature_disabled);
    assert!(!status.reset);
    assert_eq!(status.clock, ClockSource::Auto);
    assert!(!status.accel_enabled);
    assert!(status.gyro_enabled);
}
