pub trait PortDriver {
    type Error;

    /// Set all pins in `mask_high` to HIGH and all pins in `mask_low` to LOW.
    ///
    /// The driver should implement this such that all pins change state at the same time.
    fn set(&mut self, mask_high: u32, mask_low: u32) -> Result<(), Self::Error>;

    /// Check whether pins in `mask_high` were set HIGH and pins in `mask_low` were set LOW.
    ///
    /// For each pin in either of the masks, the returned `u32` should have a 1 if they meet the
    /// expected state and a 0 otherwise.  All other bits MUST always stay 0.
    ///
    /// If a bit is set in both `mask_high` and `mask_low`, the resulting bit must be 1.
    fn is_set(&mut self, mask_high: u32, mask_low: u32) -> Result<u32, Self::Error>;

    /// Check whether pins in `mask_high` are driven HIGH and pins in `mask_low` are driven LOW.
    ///
    /// For each pin in either of the masks, the returned `u32` should have a 1 if they meet the
    /// expected state and a 0 otherwise.  All other bits MUST always stay 0.
    ///
    /// If a bit is set in both `mask_high` and `mask_low`, the resulting bit must be 1.
    fn get(&mut self, mask_high: u32, mask_low: u32) -> Result<u32, Self::Error>;

    fn toggle(&mut self, mask: u32) -> Result<(), Self::Error> {
        // for all pins which are currently low, make them high.
        let mask_high = self.is_set(0, mask)?;
        // for all pins which are currently high, make them low.
        let mask_low = self.is_set(mask, 0)?;
        self.set(mask_high, mask_low)
    }
}

/// One of the eight I/O pins of the expander.
///
/// The discriminant of each variant is the pin's bit in the port register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pin {
    P0 = 0x01,
    P1 = 0x02,
    P2 = 0x04,
    P3 = 0x08,
    P4 = 0x10,
    P5 = 0x20,
    P6 = 0x40,
    P7 = 0x80,
}

impl Pin {
    /// All pins, ordered from `P0` to `P7`.
    pub const ALL: [Pin; 8] = [
        Pin::P0,
        Pin::P1,
        Pin::P2,
        Pin::P3,
        Pin::P4,
        Pin::P5,
        Pin::P6,
        Pin::P7,
    ];

    /// Bit mask of this pin in the port register.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Pin number, `0..=7`.
    pub const fn index(self) -> u8 {
        (self as u8).trailing_zeros() as u8
    }

    /// Look up a pin by its number.  Returns `None` for numbers above 7.
    pub fn from_index(index: u8) -> Option<Pin> {
        Self::ALL.get(index as usize).copied()
    }
}

impl From<Pin> for u8 {
    fn from(pin: Pin) -> u8 {
        pin.mask()
    }
}

/// Drive mode of a single pin.
///
/// The PCF8574 has open-drain outputs with a weak pull-up: a pin can only be actively pulled
/// LOW.  Writing a 1 releases the pin, which makes it read HIGH unless something external pulls
/// it down.  "Output HIGH" and "input" are therefore the very same operation and share the code
/// `0x01`, named [`Mode::ReleaseHigh`] here.  [`Mode::HIGH`] and [`Mode::IN`] are aliases for it
/// and cannot be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Actively drive the pin LOW.
    Low = 0x00,
    /// Release the pin to the pull-up (output HIGH, or usable as input).
    ReleaseHigh = 0x01,
}

impl Mode {
    pub const HIGH: Mode = Mode::ReleaseHigh;
    pub const IN: Mode = Mode::ReleaseHigh;

    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Mode {
    fn from(high: bool) -> Mode {
        if high {
            Mode::ReleaseHigh
        } else {
            Mode::Low
        }
    }
}
