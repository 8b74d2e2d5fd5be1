//! 7-bit bus addresses of the `PCF8574` and `PCF8574A`.

/// Chip variant, which selects the base of the address range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// `PCF8574`, addresses `0x20..=0x27`
    Pcf8574,
    /// `PCF8574A`, addresses `0x38..=0x3F`
    Pcf8574a,
}

impl Variant {
    const fn base(self) -> u8 {
        match self {
            Variant::Pcf8574 => 0x20,
            Variant::Pcf8574a => 0x38,
        }
    }
}

/// 7-bit I2C address of an expander.  The R/W bit is added by the bus.
///
/// The driver never checks the address.  A value outside the two chip ranges is sent on the bus
/// as-is and whatever the bus reports (usually a NACK) is returned to the caller.  Use
/// [`Address::is_valid()`] to check beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address(u8);

impl Address {
    /// Address of a chip with the given strap pin levels.
    pub const fn new(variant: Variant, a0: bool, a1: bool, a2: bool) -> Self {
        Self(variant.base() | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8))
    }

    /// Use a raw 7-bit address without any checks.
    pub const fn raw(addr: u8) -> Self {
        Self(addr)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The chip variant this address belongs to, if it is in one of the two ranges.
    pub const fn variant(self) -> Option<Variant> {
        match self.0 {
            0x20..=0x27 => Some(Variant::Pcf8574),
            0x38..=0x3f => Some(Variant::Pcf8574a),
            _ => None,
        }
    }

    pub const fn is_valid(self) -> bool {
        self.variant().is_some()
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self::raw(addr)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> u8 {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Variant};

    #[test]
    fn strap_pins() {
        assert_eq!(Address::new(Variant::Pcf8574, false, false, false).get(), 0x20);
        assert_eq!(Address::new(Variant::Pcf8574, true, false, false).get(), 0x21);
        assert_eq!(Address::new(Variant::Pcf8574, false, true, true).get(), 0x26);
        assert_eq!(Address::new(Variant::Pcf8574a, true, false, false).get(), 0x39);
        assert_eq!(Address::new(Variant::Pcf8574a, true, true, true).get(), 0x3f);
    }

    #[test]
    fn ranges() {
        assert_eq!(Address::raw(0x27).variant(), Some(Variant::Pcf8574));
        assert_eq!(Address::raw(0x38).variant(), Some(Variant::Pcf8574a));
        assert!(!Address::raw(0x00).is_valid());
        assert!(!Address::raw(0x28).is_valid());
        assert!(!Address::raw(0x40).is_valid());
    }
}
