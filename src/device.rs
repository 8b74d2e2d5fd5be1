//! Shared access to a `PCF8574` / `PCF8574A` "Remote 8-bit I/O expander for I2C-bus with
//! interrupt"
use crate::{Address, Mode, OutputLatch, Pin};

/// `PCF8574` or `PCF8574A` with its latch behind a mutex, ready to be split into pins.
pub struct Pcf8574<M>(M);

impl<I2C> Pcf8574<core::cell::RefCell<OutputLatch<I2C>>>
where
    I2C: crate::I2cBus,
{
    pub fn new(i2c: I2C, address: Address) -> Self {
        Self::with_mutex(i2c, address)
    }
}

impl<I2C, M> Pcf8574<M>
where
    I2C: crate::I2cBus,
    M: crate::PortMutex<Port = OutputLatch<I2C>>,
{
    pub fn with_mutex(i2c: I2C, address: Address) -> Self {
        Self(crate::PortMutex::create(OutputLatch::new(i2c, address)))
    }

    pub fn split(&mut self) -> Parts<'_, I2C, M> {
        Parts {
            p0: crate::IoPin::new(Pin::P0, &self.0),
            p1: crate::IoPin::new(Pin::P1, &self.0),
            p2: crate::IoPin::new(Pin::P2, &self.0),
            p3: crate::IoPin::new(Pin::P3, &self.0),
            p4: crate::IoPin::new(Pin::P4, &self.0),
            p5: crate::IoPin::new(Pin::P5, &self.0),
            p6: crate::IoPin::new(Pin::P6, &self.0),
            p7: crate::IoPin::new(Pin::P7, &self.0),
        }
    }

    /// Lock the latch and hand it to `f`.
    pub fn with_latch<R, F: FnOnce(&mut OutputLatch<I2C>) -> R>(&self, f: F) -> R {
        self.0.lock(f)
    }

    /// See [`OutputLatch::set_address()`].
    pub fn set_address(&self, address: Address) {
        self.0.lock(|drv| drv.set_address(address))
    }

    /// See [`OutputLatch::write_register()`].
    pub fn write_register(&self, value: u8) -> Result<(), I2C::BusError> {
        self.0.lock(|drv| drv.write_register(value))
    }

    /// See [`OutputLatch::set_pin_mode()`].
    pub fn set_pin_mode(&self, pin: Pin, mode: Mode) -> Result<(), I2C::BusError> {
        self.0.lock(|drv| drv.set_pin_mode(pin, mode))
    }

    /// See [`OutputLatch::read_register()`].
    pub fn read_register(&self) -> Result<u8, I2C::BusError> {
        self.0.lock(|drv| drv.read_register())
    }

    /// See [`OutputLatch::read_pin_state()`].
    pub fn read_pin_state(&self, pin: Pin) -> Result<bool, I2C::BusError> {
        self.0.lock(|drv| drv.read_pin_state(pin))
    }

    pub fn output_shadow(&self) -> u8 {
        self.0.lock(|drv| drv.output_shadow())
    }
}

pub struct Parts<'a, I2C, M = core::cell::RefCell<OutputLatch<I2C>>>
where
    I2C: crate::I2cBus,
    M: crate::PortMutex<Port = OutputLatch<I2C>>,
{
    pub p0: crate::IoPin<'a, M>,
    pub p1: crate::IoPin<'a, M>,
    pub p2: crate::IoPin<'a, M>,
    pub p3: crate::IoPin<'a, M>,
    pub p4: crate::IoPin<'a, M>,
    pub p5: crate::IoPin<'a, M>,
    pub p6: crate::IoPin<'a, M>,
    pub p7: crate::IoPin<'a, M>,
}
