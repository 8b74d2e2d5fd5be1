//! Driver for the `PCF8574` and `PCF8574A` 8-bit I2C I/O expanders.
//!
//! The chip has a single port register and no configuration: each pin is either actively pulled
//! LOW or released HIGH, and a released pin doubles as an input.  [`OutputLatch`] drives one chip
//! directly, [`Pcf8574`] shares it between individual [`IoPin`]s through a [`PortMutex`].
//!
//! ```no_run
//! use pcf8574x::{Address, Mode, OutputLatch, Pin, Variant};
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//!
//! let mut latch = OutputLatch::new(i2c, Address::new(Variant::Pcf8574, false, false, false));
//! latch.write_register(0x00).unwrap();
//! latch.set_pin_mode(Pin::P0, Mode::IN).unwrap();
//! let pressed = !latch.read_pin_state(Pin::P0).unwrap();
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod address;
mod bus;
mod common;
mod device;
mod latch;
#[cfg(feature = "async")]
mod monitor;
mod multi;
mod mutex;
mod pin;

pub use address::{Address, Variant};
pub use bus::I2cBus;
pub use common::{Mode, Pin, PortDriver};
pub use device::{Parts, Pcf8574};
pub use latch::OutputLatch;
#[cfg(feature = "async")]
pub use monitor::{Changes, Edge, InputMonitor, MonitorError};
pub use multi::{read_multiple, write_multiple};
pub use mutex::PortMutex;
pub use pin::{IoPin, PinError};

pub(crate) use bus::I2cExt;
