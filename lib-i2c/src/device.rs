use crate::transaction;
use crate::{Endianness, I2cTransport};

/// Register accessor bound to one device on one bus.
///
/// Derives the two 8-bit bus addresses from the 7-bit device address (write
/// address is the device address shifted up one bit, read address is the
/// same with the read/write bit set) and exposes byte, word and n-byte
/// register operations on top of the transaction layer.
///
/// Every operation is a fully independent transaction: the bus handle is
/// acquired and released per call, nothing is pooled or cached.
///
pub struct I2cDevice<T: I2cTransport>
{
    transport: T,

    /// Bus number handed to the transport on every open.
    bus: u8,

    write_addr: u8,
    read_addr: u8,

    endianness: Endianness,
}

impl<T: I2cTransport> I2cDevice<T> {

    /// Create a new accessor for the device at the given 7-bit address.
    ///
    pub fn new(transport: T, bus: u8, address: u8, endianness: Endianness) -> Self {
        let mut device = I2cDevice {
            transport,
            bus,
            write_addr: 0,
            read_addr: 1,
            endianness,
        };
        device.set_address(address);
        device
    }

    /// Re-derives the write and read bus addresses from a new 7-bit device
    /// address. The read address is always the write address with the lowest
    /// bit set.
    ///
    pub fn set_address(&mut self, address: u8) {
        self.write_addr = address << 1;
        self.read_addr = (address << 1) | 1;
        log::debug!(
            "i2c device address {:#04x} (write {:#04x}, read {:#04x})",
            address, self.write_addr, self.read_addr
        );
    }

    /// The 7-bit device address this accessor currently points at.
    ///
    pub fn address(&self) -> u8 {
        (self.write_addr >> 1) & 0x7F
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Consume the accessor and return the transport.
    pub fn release(self) -> T {
        self.transport
    }

    /// Writes 1 byte of data into the register.
    ///
    pub fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), T::Error> {
        self.write_bytes(reg, &[value])
    }

    /// Writes 2 bytes of data into `reg` and `reg + 1` as two independent
    /// single-byte transactions; which byte lands in which register follows
    /// the configured endianness (big-endian puts the high byte at `reg`).
    ///
    /// A failure on the first write is returned immediately and the second
    /// register is left untouched, so a transport error can still leave the
    /// pair partially updated.
    ///
    pub fn write_word(&mut self, reg: u8, value: u16) -> Result<(), T::Error> {
        let (first, second) = self.endianness.word_to_bytes(value);
        self.write_byte(reg, first)?;
        self.write_byte(reg.wrapping_add(1), second)
    }

    /// Writes n bytes of data into consecutive registers starting at `reg`,
    /// in one transaction. At most [`MAX_DATA_LEN`](crate::MAX_DATA_LEN)
    /// bytes.
    ///
    pub fn write_bytes(&mut self, reg: u8, data: &[u8]) -> Result<(), T::Error> {
        let (sequence, len) = transaction::write_sequence(self.write_addr, reg, data);
        transaction::issue(&mut self.transport, self.bus, &sequence[..len], None)
    }

    /// Reads 1 byte of data from the register.
    ///
    pub fn read_byte(&mut self, reg: u8) -> Result<u8, T::Error> {
        let data: [u8; 1] = self.read_bytes(reg)?;
        Ok(data[0])
    }

    /// Reads 2 bytes from `reg` and `reg + 1` in one transaction and
    /// assembles them into a 16 bit value per the configured endianness.
    ///
    pub fn read_word(&mut self, reg: u8) -> Result<u16, T::Error> {
        let data: [u8; 2] = self.read_bytes(reg)?;
        Ok(self.endianness.word_from_bytes(data[0], data[1]))
    }

    /// Reads `N` bytes from consecutive registers starting at `reg` in one
    /// transaction. The bytes are returned in bus order without any
    /// reordering; assembling wider fields is up to the caller, per field.
    ///
    pub fn read_bytes<const N: usize>(&mut self, reg: u8) -> Result<[u8; N], T::Error> {
        let (sequence, len) =
            transaction::read_sequence(self.write_addr, self.read_addr, reg, N);
        let mut received = [0u8; N];
        transaction::issue(
            &mut self.transport,
            self.bus,
            &sequence[..len],
            Some(&mut received),
        )?;
        Ok(received)
    }
}
