//! DSI host interface trait

use crate::options::{ModeFlags, PixelFormat};

/// Command channel to the panel, provided by the DSI host controller.
///
/// The driver only needs to send short and long write packets and to tell the
/// host how the link must be configured. Video mode pixel transport is handled
/// entirely by the host and never goes through this trait.
pub trait Interface {
    /// Error type
    type Error: core::fmt::Debug;

    /// Configure the host side of the link and attach the peripheral.
    ///
    /// Called once while the panel is built. The host is expected to reject
    /// configurations it can't provide, e.g. more lanes than it has wired up.
    fn attach(
        &mut self,
        config: &DsiConfig,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Detach the peripheral from the host.
    fn detach(&mut self) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Send one command frame: `command` followed by `args`, as a single
    /// transaction using the given packet `framing`.
    fn write(
        &mut self,
        framing: Framing,
        command: u8,
        args: &[u8],
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}

impl<T: Interface + ?Sized> Interface for &mut T {
    type Error = T::Error;

    async fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error> {
        T::attach(self, config).await
    }

    async fn detach(&mut self) -> Result<(), Self::Error> {
        T::detach(self).await
    }

    async fn write(&mut self, framing: Framing, command: u8, args: &[u8]) -> Result<(), Self::Error> {
        T::write(self, framing, command, args).await
    }
}

/// Packet framing of a command frame.
///
/// Both carry the same bytes on the wire, but use different DSI data types.
/// Some vendor sequences mix them within one init sequence, so the framing is
/// kept per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Framing {
    /// DCS short/long write (data types 0x05, 0x15, 0x39).
    Dcs,

    /// Generic short/long write (data types 0x03, 0x13, 0x23, 0x29).
    Generic,
}

/// Link parameters the panel requires from the DSI host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DsiConfig {
    /// Number of data lanes, 1 to 4.
    pub lanes: u8,
    /// Pixel stream format.
    pub format: PixelFormat,
    /// Transmission mode flags.
    pub mode_flags: ModeFlags,
}
