/// Interface to an external bus-transport service that can replay a sequence
/// of 9-bit i2c protocol words as one bus transaction.
///
/// A sequence consists of 8-bit address/data words plus the
/// [`I2C_RESTART`](crate::I2C_RESTART) and [`I2C_READ`](crate::I2C_READ)
/// control words. Every byte requested with a read control word is written
/// into the `received` buffer in bus order.
///
/// This crate never talks to hardware except through this trait, so tests
/// (and platforms without a real bus) can substitute a simulated device.
///
pub trait I2cTransport {
    /// Token for one open claim on the bus, returned by `open` and consumed
    /// by `close`.
    type Handle;

    /// Error reported by the underlying transport. Propagated unchanged, no
    /// retries are ever attempted on top of it.
    type Error;

    /// Acquires a handle on the given bus.
    fn open(&mut self, bus: u8) -> Result<Self::Handle, Self::Error>;

    /// Replays `sequence` as a single bus transaction, filling `received`
    /// with the bytes clocked in by read control words (if any).
    fn send_sequence(
        &mut self,
        handle: &mut Self::Handle,
        sequence: &[u16],
        received: Option<&mut [u8]>,
    ) -> Result<(), Self::Error>;

    /// Releases the handle. Must be called on every exit path, success or
    /// failure.
    fn close(&mut self, handle: Self::Handle);
}

impl<T: I2cTransport> I2cTransport for &mut T {
    type Handle = T::Handle;
    type Error = T::Error;

    fn open(&mut self, bus: u8) -> Result<Self::Handle, Self::Error> {
        (**self).open(bus)
    }

    fn send_sequence(
        &mut self,
        handle: &mut Self::Handle,
        sequence: &[u16],
        received: Option<&mut [u8]>,
    ) -> Result<(), Self::Error> {
        (**self).send_sequence(handle, sequence, received)
    }

    fn close(&mut self, handle: Self::Handle) {
        (**self).close(handle)
    }
}
