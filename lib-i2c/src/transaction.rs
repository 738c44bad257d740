//! Builds the fixed-shape word sequences for register reads and writes and
//! issues them through the bus transport, one fully independent transaction
//! per call.

use crate::{I2cTransport, I2C_READ, I2C_RESTART, MAX_DATA_LEN};

/// A write sequence starts with `[write-address, register]`.
const WRITE_HEADER_LEN: usize = 2;

/// A read sequence starts with `[write-address, register, RESTART, read-address]`.
const READ_HEADER_LEN: usize = 4;

pub(crate) const WRITE_SEQ_CAP: usize = WRITE_HEADER_LEN + MAX_DATA_LEN;
pub(crate) const READ_SEQ_CAP: usize = READ_HEADER_LEN + MAX_DATA_LEN;

/// Lays out the write sequence `[write-address, register, data...]` in a
/// bounded scratch buffer and returns it along with the used length.
///
pub(crate) fn write_sequence(
    write_addr: u8,
    reg: u8,
    data: &[u8],
) -> ([u16; WRITE_SEQ_CAP], usize) {
    assert!(
        data.len() <= MAX_DATA_LEN,
        "write of {} bytes exceeds the {} byte transaction limit",
        data.len(),
        MAX_DATA_LEN
    );

    let mut sequence = [0u16; WRITE_SEQ_CAP];
    sequence[0] = write_addr as u16;
    sequence[1] = reg as u16;
    for (i, byte) in data.iter().enumerate() {
        sequence[WRITE_HEADER_LEN + i] = *byte as u16;
    }
    (sequence, WRITE_HEADER_LEN + data.len())
}

/// Lays out the read sequence
/// `[write-address, register, RESTART, read-address, READ x count]`.
///
pub(crate) fn read_sequence(
    write_addr: u8,
    read_addr: u8,
    reg: u8,
    count: usize,
) -> ([u16; READ_SEQ_CAP], usize) {
    assert!(
        count <= MAX_DATA_LEN,
        "read of {} bytes exceeds the {} byte transaction limit",
        count,
        MAX_DATA_LEN
    );

    let mut sequence = [I2C_READ; READ_SEQ_CAP];
    sequence[0] = write_addr as u16;
    sequence[1] = reg as u16;
    sequence[2] = I2C_RESTART;
    sequence[3] = read_addr as u16;
    (sequence, READ_HEADER_LEN + count)
}

/// Issues one complete transaction: acquire a bus handle, replay the
/// sequence, release the handle. The handle is released on the failure path
/// as well, and the transport's error is propagated unchanged.
///
pub(crate) fn issue<T: I2cTransport>(
    transport: &mut T,
    bus: u8,
    sequence: &[u16],
    received: Option<&mut [u8]>,
) -> Result<(), T::Error> {
    let mut handle = transport.open(bus)?;
    let status = transport.send_sequence(&mut handle, sequence, received);
    transport.close(handle);
    status
}
