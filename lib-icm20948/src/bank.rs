/// One of the four user register banks of the ICM-20948.
///
/// All four banks share the same physical register address range; a named
/// register is only valid while its bank is selected. The driver re-selects
/// the bank with a fresh write to `REG_BANK_SEL` immediately before every
/// bank-specific access, because nothing prevents another agent from having
/// changed the bank since the last call.
///
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank
{
    Bank0 = 0,
    Bank1 = 1,
    Bank2 = 2,
    Bank3 = 3,
}

impl Bank {

    /// Converts the bank into the value one would need to write into the
    /// `REG_BANK_SEL` register to select it (bank code in bits 5:4).
    ///
    pub fn as_register(&self) -> u8 {
        ((*self) as u8) << 4
    }
}
