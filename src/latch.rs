//! The output latch of a single `PCF8574` / `PCF8574A`.
//!
//! The chip has exactly one port register.  Writing a byte sets the output latch, reading a byte
//! returns the current level of all eight pins.  There is no way to read the latch back, so the
//! driver keeps a shadow copy of the last byte it wrote.
use crate::{Address, I2cExt, Mode, Pin};

/// Driver for the port register of one expander.
///
/// All operations are a single one-byte bus transaction.  [`set_pin_mode()`][Self::set_pin_mode]
/// is a read-modify-write on the local shadow, so sharing one device between several users needs
/// external locking (see [`Pcf8574`][crate::Pcf8574] and [`PortMutex`][crate::PortMutex]).
pub struct OutputLatch<I2C> {
    i2c: I2C,
    addr: Address,
    out: u8,
}

impl<I2C> OutputLatch<I2C> {
    /// Create a latch for the device at `addr`.
    ///
    /// No bus traffic happens here and the shadow starts out as `0x00`, independent of what the
    /// chip currently holds.
    pub fn new(i2c: I2C, addr: Address) -> Self {
        Self { i2c, addr, out: 0x00 }
    }

    /// Retarget all following transactions to another device.  The shadow is kept.
    pub fn set_address(&mut self, addr: Address) {
        self.addr = addr;
    }

    pub fn address(&self) -> Address {
        self.addr
    }

    /// The byte most recently written to the device by this latch.
    pub fn output_shadow(&self) -> u8 {
        self.out
    }

    /// Give back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: crate::I2cBus> OutputLatch<I2C> {
    /// Overwrite all eight outputs with `value`.
    pub fn write_register(&mut self, value: u8) -> Result<(), I2C::BusError> {
        self.out = value;
        self.flush()
    }

    /// Drive `pin` low or release it high, keeping all other pins as they are.
    pub fn set_pin_mode(&mut self, pin: Pin, mode: Mode) -> Result<(), I2C::BusError> {
        match mode {
            Mode::ReleaseHigh => self.out |= pin.mask(),
            Mode::Low => self.out &= !pin.mask(),
        }
        self.flush()
    }

    /// Read the level of all eight pins.  The shadow is not involved.
    pub fn read_register(&mut self) -> Result<u8, I2C::BusError> {
        let value = self.i2c.read_byte(self.addr.get())?;
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8574 {=u8:#x}: read {=u8:#b}", self.addr.get(), value);
        Ok(value)
    }

    /// Read the level of a single pin.  Every call is its own bus transaction.
    pub fn read_pin_state(&mut self, pin: Pin) -> Result<bool, I2C::BusError> {
        Ok(self.read_register()? & pin.mask() != 0)
    }

    fn flush(&mut self) -> Result<(), I2C::BusError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("pcf8574 {=u8:#x}: write {=u8:#b}", self.addr.get(), self.out);
        self.i2c.write_byte(self.addr.get(), self.out)
    }
}

impl<I2C: crate::I2cBus> crate::PortDriver for OutputLatch<I2C> {
    type Error = I2C::BusError;

    fn set(&mut self, mask_high: u32, mask_low: u32) -> Result<(), Self::Error> {
        self.out |= mask_high as u8;
        self.out &= !mask_low as u8;
        self.flush()
    }

    fn is_set(&mut self, mask_high: u32, mask_low: u32) -> Result<u32, Self::Error> {
        Ok(((self.out as u32) & mask_high) | (!(self.out as u32) & mask_low))
    }

    fn get(&mut self, mask_high: u32, mask_low: u32) -> Result<u32, Self::Error> {
        let in_ = self.read_register()? as u32;
        Ok((in_ & mask_high) | (!in_ & mask_low))
    }
}
