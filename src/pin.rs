use crate::{Mode, Pin};
use embedded_hal::digital::{self as hal_digital, ErrorKind};

/// Representation of one pin of a shared expander.
///
/// `IoPin` is not constructed directly, this type is created by instantiating a
/// [`Pcf8574`][crate::Pcf8574] and then getting access to all its pins using the `.split()`
/// method.
///
/// All PCF8574 pins are quasi-bidirectional: the same handle can drive the pin low, release it
/// high and read its level.
pub struct IoPin<'a, MUTEX> {
    pin: Pin,
    port_driver: &'a MUTEX,
}

/// Error of a pin operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError<E> {
    /// The bus transaction failed.
    Bus(E),
}

impl<E: core::fmt::Debug> hal_digital::Error for PinError<E> {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl<'a, MUTEX, PD> IoPin<'a, MUTEX>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
{
    pub(crate) fn new(pin: Pin, port_driver: &'a MUTEX) -> Self {
        Self { pin, port_driver }
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }

    pub(crate) fn pin_mask(&self) -> u32 {
        self.pin.mask() as u32
    }

    pub(crate) fn port_driver(&self) -> &MUTEX {
        self.port_driver
    }

    pub fn is_high(&self) -> Result<bool, PinError<PD::Error>> {
        let mask = self.pin_mask();
        let res = self.port_driver.lock(|drv| drv.get(mask, 0));
        Ok(res.map_err(PinError::Bus)? == mask)
    }

    pub fn is_low(&self) -> Result<bool, PinError<PD::Error>> {
        let mask = self.pin_mask();
        let res = self.port_driver.lock(|drv| drv.get(0, mask));
        Ok(res.map_err(PinError::Bus)? == mask)
    }

    /// Drive the pin low or release it high.
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), PinError<PD::Error>> {
        let mask = self.pin_mask();
        let (mask_high, mask_low) = match mode {
            Mode::ReleaseHigh => (mask, 0),
            Mode::Low => (0, mask),
        };
        self.port_driver
            .lock(|drv| drv.set(mask_high, mask_low))
            .map_err(PinError::Bus)
    }

    pub fn set_high(&mut self) -> Result<(), PinError<PD::Error>> {
        self.set_mode(Mode::ReleaseHigh)
    }

    pub fn set_low(&mut self) -> Result<(), PinError<PD::Error>> {
        self.set_mode(Mode::Low)
    }

    /// Whether the last value written for this pin was HIGH.  No bus traffic.
    pub fn is_set_high(&self) -> Result<bool, PinError<PD::Error>> {
        let mask = self.pin_mask();
        let res = self.port_driver.lock(|drv| drv.is_set(mask, 0));
        Ok(res.map_err(PinError::Bus)? == mask)
    }

    pub fn is_set_low(&self) -> Result<bool, PinError<PD::Error>> {
        let mask = self.pin_mask();
        let res = self.port_driver.lock(|drv| drv.is_set(0, mask));
        Ok(res.map_err(PinError::Bus)? == mask)
    }

    pub fn toggle(&mut self) -> Result<(), PinError<PD::Error>> {
        let mask = self.pin_mask();
        self.port_driver
            .lock(|drv| drv.toggle(mask))
            .map_err(PinError::Bus)
    }
}

impl<'a, MUTEX, PD> hal_digital::ErrorType for IoPin<'a, MUTEX>
where
    PD: crate::PortDriver,
    PD::Error: core::fmt::Debug,
    MUTEX: crate::PortMutex<Port = PD>,
{
    type Error = PinError<PD::Error>;
}

impl<'a, MUTEX, PD> hal_digital::InputPin for IoPin<'a, MUTEX>
where
    PD: crate::PortDriver,
    PD::Error: core::fmt::Debug,
    MUTEX: crate::PortMutex<Port = PD>,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        IoPin::is_high(self)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        IoPin::is_low(self)
    }
}

impl<'a, MUTEX, PD> hal_digital::OutputPin for IoPin<'a, MUTEX>
where
    PD: crate::PortDriver,
    PD::Error: core::fmt::Debug,
    MUTEX: crate::PortMutex<Port = PD>,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        IoPin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        IoPin::set_high(self)
    }
}

impl<'a, MUTEX, PD> hal_digital::StatefulOutputPin for IoPin<'a, MUTEX>
where
    PD: crate::PortDriver,
    PD::Error: core::fmt::Debug,
    MUTEX: crate::PortMutex<Port = PD>,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        IoPin::is_set_high(self)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        IoPin::is_set_low(self)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        IoPin::toggle(self)
    }
}
