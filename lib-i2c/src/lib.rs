#![cfg_attr(not(test), no_std)]

pub mod endianness;
pub use endianness::*;

pub mod transport;
pub use transport::*;

pub mod transaction;

pub mod device;
pub use device::*;


/// Control word that inserts a repeated-start condition between the addressing
/// (write) phase and the read phase of a combined transaction.
///
pub const I2C_RESTART: u16 = 1 << 8;

/// Control word that asks the bus transport to clock in one byte from the
/// device into the receive buffer.
///
pub const I2C_READ: u16 = 2 << 8;

/// Upper bound on the number of data bytes in a single read or write
/// transaction. Longer transfers have to be split up by the caller.
///
pub const MAX_DATA_LEN: usize = 32;
