use embedded_hal::i2c as hal_i2c;

/// Blanket trait for types implementing `i2c::I2c`
pub trait I2cBus: hal_i2c::I2c {
    type BusError: From<<Self as hal_i2c::ErrorType>::Error>;
}

impl<T, E> I2cBus for T
where
    T: hal_i2c::I2c<Error = E>,
    E: hal_i2c::Error,
{
    type BusError = E;
}

/// Single-byte transfers.  The PCF8574 has no register pointer, every transaction is exactly one
/// data byte in either direction.
pub(crate) trait I2cExt {
    type Error;

    fn write_byte(&mut self, addr: u8, value: u8) -> Result<(), Self::Error>;
    fn read_byte(&mut self, addr: u8) -> Result<u8, Self::Error>;
}

impl<I2C: I2cBus> I2cExt for I2C {
    type Error = I2C::BusError;

    fn write_byte(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
        self.write(addr, &[value])?;
        Ok(())
    }

    fn read_byte(&mut self, addr: u8) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.read(addr, &mut buf)?;
        Ok(buf[0])
    }
}
