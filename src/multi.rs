/// Set multiple pins at the same time.
///
/// The usual method of setting multiple pins
///
/// ```no_run
/// # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// # let mut pcf = pcf8574x::Pcf8574::new(i2c, pcf8574x::Address::raw(0x20));
/// # let p = pcf.split();
/// # let mut io0 = p.p0;
/// # let mut io1 = p.p1;
/// io0.set_high().unwrap();
/// io1.set_low().unwrap();
/// ```
///
/// costs two bus transactions, and the two pins change state at different times.
/// `write_multiple()` merges all changes into the shadow and writes it once.
///
/// ## Example
/// ```no_run
/// # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// # let mut pcf = pcf8574x::Pcf8574::new(i2c, pcf8574x::Address::raw(0x20));
/// # let p = pcf.split();
/// # let mut io0 = p.p0;
/// # let mut io1 = p.p1;
/// pcf8574x::write_multiple(
///     [&mut io0, &mut io1],
///     [true, false],
/// ).unwrap();
/// ```
///
/// # Panics
/// If the pins do not all belong to the same expander.
pub fn write_multiple<PD, MUTEX, const N: usize>(
    pins: [&mut crate::IoPin<'_, MUTEX>; N],
    states: [bool; N],
) -> Result<(), PD::Error>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
{
    let mut mask_set_high = 0x00;
    let mut mask_set_low = 0x00;

    let port_driver = pins[0].port_driver();
    for (pin, state) in pins.iter().zip(states.iter()) {
        assert!(core::ptr::eq(pin.port_driver(), port_driver));
        if *state {
            mask_set_high |= pin.pin_mask();
        } else {
            mask_set_low |= pin.pin_mask();
        }
    }

    port_driver.lock(|drv| drv.set(mask_set_high, mask_set_low))
}

/// Read multiple pins at the same time.
///
/// Checking inputs one after the other with `is_high()` reads the port once per pin, so the
/// values may come from different moments.  `read_multiple()` reads the port once and reports
/// every requested pin from that single sample.
///
/// ## Example
/// ```no_run
/// # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// # let mut pcf = pcf8574x::Pcf8574::new(i2c, pcf8574x::Address::raw(0x20));
/// # let p = pcf.split();
/// # let io0 = p.p0;
/// # let io1 = p.p1;
/// let values = pcf8574x::read_multiple([&io0, &io1]).unwrap();
/// if values[0] {
///     // ...
/// } else if values[1] {
///     // ...
/// }
/// ```
///
/// # Panics
/// If the pins do not all belong to the same expander.
pub fn read_multiple<PD, MUTEX, const N: usize>(
    pins: [&crate::IoPin<'_, MUTEX>; N],
) -> Result<[bool; N], PD::Error>
where
    PD: crate::PortDriver,
    MUTEX: crate::PortMutex<Port = PD>,
{
    let mask = pins.iter().map(|p| p.pin_mask()).fold(0, |m, p| m | p);
    let port_driver = pins[0].port_driver();
    let mask_in = port_driver.lock(|drv| drv.get(mask, 0))?;

    let mut ret = [false; N];
    for (pin, state) in pins.iter().zip(ret.iter_mut()) {
        assert!(core::ptr::eq(pin.port_driver(), port_driver));
        *state = mask_in & pin.pin_mask() != 0;
    }

    Ok(ret)
}
