use core::convert::Infallible;

use embedded_hal::digital;
use embedded_hal_async::delay::DelayNs;

use crate::{
    interface::{DsiConfig, Framing, Interface},
    power::Supply,
};

pub struct MockOutputPin;

impl digital::OutputPin for MockOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl digital::ErrorType for MockOutputPin {
    type Error = Infallible;
}

pub struct MockSupply;

impl Supply for MockSupply {
    type Error = Infallible;

    fn enable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub struct MockDelay;

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

pub struct MockInterface;

impl Interface for MockInterface {
    type Error = Infallible;

    async fn attach(&mut self, _config: &DsiConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn detach(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn write(
        &mut self,
        _framing: Framing,
        _command: u8,
        _args: &[u8],
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
