/// Byte order used when assembling or splitting two-byte register values.
///
/// Fixed at device construction; most register-addressed sensors (including
/// the ICM-20948 output registers) store the high byte at the lower address,
/// which corresponds to `Endianness::Big`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness
{
    Big,
    Little,
}

impl Endianness {

    /// Assembles a 16 bit value from two bytes, where `first` is the byte
    /// received first (i.e. the byte at the lower register address).
    ///
    pub fn word_from_bytes(&self, first: u8, second: u8) -> u16 {
        match self {
            Endianness::Big => u16::from_be_bytes([first, second]),
            Endianness::Little => u16::from_le_bytes([first, second]),
        }
    }

    /// Splits a 16 bit value into the byte destined for the lower register
    /// address and the byte destined for the one after it, in that order.
    ///
    pub fn word_to_bytes(&self, value: u16) -> (u8, u8) {
        let bytes = match self {
            Endianness::Big => value.to_be_bytes(),
            Endianness::Little => value.to_le_bytes(),
        };
        (bytes[0], bytes[1])
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Endianness::Big
    }
}
