//! Power supply control.

use core::fmt;

use embedded_hal::digital::OutputPin;

/// A switchable power supply feeding the panel.
///
/// Enabling an already enabled supply, or disabling a disabled one, must
/// succeed without side effects.
pub trait Supply {
    /// Error type
    type Error: core::fmt::Debug;

    /// Turns the supply on.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Turns the supply off.
    fn disable(&mut self) -> Result<(), Self::Error>;
}

impl<T: Supply + ?Sized> Supply for &mut T {
    type Error = T::Error;

    fn enable(&mut self) -> Result<(), Self::Error> {
        T::enable(self)
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        T::disable(self)
    }
}

/// The two supplies of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rail {
    /// Core logic and analog supply (`vcc`).
    Vcc,
    /// I/O logic supply (`iovcc`).
    Iovcc,
}

impl fmt::Display for Rail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rail::Vcc => write!(f, "vcc"),
            Rail::Iovcc => write!(f, "iovcc"),
        }
    }
}

/// A supply switched by a load switch or LDO enable pin.
///
/// ```
/// use st7703_async::power::{GpioSupply, Supply};
///
/// # let pin = st7703_async::_mock::MockOutputPin;
/// let mut iovcc = GpioSupply::new(pin);
/// iovcc.enable().unwrap();
/// iovcc.disable().unwrap();
/// ```
pub struct GpioSupply<P> {
    pin: P,
    active_low: bool,
}

impl<P> GpioSupply<P>
where
    P: OutputPin,
{
    /// Creates a supply that is on while the pin is high.
    ///
    /// This does not change the state of the pin.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Creates a supply that is on while the pin is low.
    ///
    /// This does not change the state of the pin.
    pub fn new_active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Consumes the supply and returns the pin. This does not change the state of the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> Supply for GpioSupply<P>
where
    P: OutputPin,
{
    type Error = P::Error;

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.active_low {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        }
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        if self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct Pin {
        high: Option<bool>,
    }

    impl embedded_hal::digital::ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = Some(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = Some(true);
            Ok(())
        }
    }

    #[test]
    fn active_high() {
        let mut supply = GpioSupply::new(Pin::default());
        assert_eq!(supply.pin.high, None);
        supply.enable().unwrap();
        assert_eq!(supply.pin.high, Some(true));
        supply.enable().unwrap();
        assert_eq!(supply.pin.high, Some(true));
        supply.disable().unwrap();
        assert_eq!(supply.release().high, Some(false));
    }

    #[test]
    fn active_low() {
        let mut supply = GpioSupply::new_active_low(Pin::default());
        supply.enable().unwrap();
        assert_eq!(supply.pin.high, Some(false));
        supply.disable().unwrap();
        assert_eq!(supply.pin.high, Some(true));
    }
}
