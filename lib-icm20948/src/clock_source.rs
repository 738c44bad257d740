use crate::registers::CLKSEL_MASK;

/// Clock source selection, the CLKSEL field of `PWR_MGMT_1`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource
{
    /// Internal 20 MHz oscillator.
    Internal20Mhz,
    /// Auto-select the best available source (PLL if ready).
    Auto,
    /// Clock stopped, keeps timing in reset.
    Stopped,
}

impl ClockSource {

    /// The CLKSEL bits selecting this source.
    ///
    pub fn as_register(&self) -> u8 {
        match self {
            ClockSource::Internal20Mhz => 0,
            ClockSource::Auto => 1,
            ClockSource::Stopped => 7,
        }
    }

    /// Decodes the CLKSEL field out of a raw `PWR_MGMT_1` byte. Codes 0 and
    /// 6 both select the internal oscillator, 7 stops the clock, everything
    /// in between is auto-select.
    ///
    pub fn from_register(value: u8) -> Self {
        match value & CLKSEL_MASK {
            0 | 6 => ClockSource::Internal20Mhz,
            7 => ClockSource::Stopped,
            _ => ClockSource::Auto,
        }
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        ClockSource::Internal20Mhz
    }
}
