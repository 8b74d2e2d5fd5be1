//! Input change tracking, driven by the expander's INT line.
//!
//! This module is only built if the `"async"` feature is enabled.
//!
//! The PCF8574 pulls its open-drain INT output low whenever an input differs from the value
//! captured by the last read, and releases it again on the next read.  [`InputMonitor`] keeps the
//! last sampled port byte and turns every new sample into a list of per-pin [`Edge`]s.
//!
//! ```no_run
//! # use embedded_hal_async::digital::Wait;
//! # async fn run<INT: Wait>(mut int: INT) {
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! let mut latch = pcf8574x::OutputLatch::new(i2c, pcf8574x::Address::raw(0x20));
//! latch.write_register(0xff).unwrap();
//! let mut monitor = pcf8574x::InputMonitor::new(latch.read_register().unwrap());
//! loop {
//!     for edge in monitor.wait_for_changes(&mut latch, &mut int).await.unwrap() {
//!         if edge.is_falling() {
//!             // button on `edge.pin` pressed
//!         }
//!     }
//! }
//! # }
//! ```
use crate::{Pin, PortDriver};
use embedded_hal_async::digital::Wait;
use heapless::Vec;

/// Edges found in one sample, ordered from `P0` to `P7`.
pub type Changes = Vec<Edge, 8>;

/// A pin that changed level between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edge {
    pub pin: Pin,
    /// Level after the change.
    pub level: bool,
}

impl Edge {
    pub fn is_rising(&self) -> bool {
        self.level
    }

    pub fn is_falling(&self) -> bool {
        !self.level
    }
}

/// Error of [`InputMonitor::wait_for_changes()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError<B, I> {
    /// Reading the port failed.
    Bus(B),
    /// Waiting on the INT line failed.
    Interrupt(I),
}

/// Last known input state of one expander.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputMonitor {
    last_known_state: u8,
}

impl InputMonitor {
    /// Start from a known port byte, usually the result of a first
    /// [`read_register()`][crate::OutputLatch::read_register].
    pub fn new(initial: u8) -> Self {
        Self {
            last_known_state: initial,
        }
    }

    pub fn last_known(&self) -> u8 {
        self.last_known_state
    }

    /// Record a new port sample and return the pins that changed since the previous one.
    pub fn update(&mut self, sample: u8) -> Changes {
        let changed = self.last_known_state ^ sample;
        self.last_known_state = sample;

        let mut changes = Changes::new();
        for pin in Pin::ALL {
            if changed & pin.mask() != 0 {
                // at most eight pins, the vector can hold all of them
                let _ = changes.push(Edge {
                    pin,
                    level: sample & pin.mask() != 0,
                });
            }
        }
        changes
    }

    /// Read the port once and report the changes.
    pub fn sample<D: PortDriver>(&mut self, driver: &mut D) -> Result<Changes, D::Error> {
        let sample = driver.get(0xff, 0)? as u8;
        Ok(self.update(sample))
    }

    /// Wait for the INT line to go low, then read the port.
    ///
    /// The read clears the interrupt on the chip.  An empty result means the inputs changed and
    /// changed back before the read happened.
    pub async fn wait_for_changes<D, INT>(
        &mut self,
        driver: &mut D,
        int: &mut INT,
    ) -> Result<Changes, MonitorError<D::Error, INT::Error>>
    where
        D: PortDriver,
        INT: Wait,
    {
        int.wait_for_low().await.map_err(MonitorError::Interrupt)?;
        self.sample(driver).map_err(MonitorError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, InputMonitor, MonitorError};
    use crate::{Address, OutputLatch, Pin};
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use embedded_hal_async::digital::Wait;
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    /// INT line stub that is either asserted right away or broken.
    struct IntLine {
        waits: usize,
        fail: bool,
    }

    impl ErrorType for IntLine {
        type Error = ErrorKind;
    }

    impl Wait for IntLine {
        async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
            unimplemented!()
        }

        async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
            self.waits += 1;
            if self.fail {
                Err(ErrorKind::Other)
            } else {
                Ok(())
            }
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
            unimplemented!()
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
            unimplemented!()
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
            unimplemented!()
        }
    }

    #[test]
    fn update_reports_edges_in_pin_order() {
        let mut monitor = InputMonitor::new(0b1111_0000);

        let changes = monitor.update(0b0111_0001);
        assert_eq!(
            changes.as_slice(),
            &[
                Edge {
                    pin: Pin::P0,
                    level: true
                },
                Edge {
                    pin: Pin::P7,
                    level: false
                },
            ]
        );
        assert!(changes[0].is_rising());
        assert!(changes[1].is_falling());
        assert_eq!(monitor.last_known(), 0b0111_0001);

        assert!(monitor.update(0b0111_0001).is_empty());
        assert_eq!(monitor.update(!0b0111_0001).len(), 8);
    }

    #[test]
    fn sample_reads_once() {
        let expectations = [
            mock_i2c::Transaction::read(0x20, vec![0b1111_1011]),
            mock_i2c::Transaction::read(0x20, vec![0b1111_1011]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);
        let mut latch = OutputLatch::new(bus.clone(), Address::raw(0x20));

        let mut monitor = InputMonitor::new(0xff);
        let changes = monitor.sample(&mut latch).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].pin, Pin::P2);
        assert!(changes[0].is_falling());

        assert!(monitor.sample(&mut latch).unwrap().is_empty());

        bus.done();
    }

    #[test]
    fn wait_for_changes() {
        let expectations = [mock_i2c::Transaction::read(0x38, vec![0b0000_0010])];
        let mut bus = mock_i2c::Mock::new(&expectations);
        let mut latch = OutputLatch::new(bus.clone(), Address::raw(0x38));
        let mut int = IntLine {
            waits: 0,
            fail: false,
        };

        let mut monitor = InputMonitor::new(0x00);
        let changes =
            futures::executor::block_on(monitor.wait_for_changes(&mut latch, &mut int)).unwrap();
        assert_eq!(int.waits, 1);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].pin, Pin::P1);
        assert!(changes[0].is_rising());

        bus.done();
    }

    #[test]
    fn wait_for_changes_interrupt_error() {
        let mut bus = mock_i2c::Mock::new(&[]);
        let mut latch = OutputLatch::new(bus.clone(), Address::raw(0x38));
        let mut int = IntLine {
            waits: 0,
            fail: true,
        };

        let mut monitor = InputMonitor::new(0x00);
        let res = futures::executor::block_on(monitor.wait_for_changes(&mut latch, &mut int));
        assert_eq!(res, Err(MonitorError::Interrupt(ErrorKind::Other)));

        bus.done();
    }
}
