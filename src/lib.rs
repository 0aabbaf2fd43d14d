#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]
// associated re-typing not supported in rust yet
#![allow(clippy::type_complexity)]

//! This crate provides an asynchronous driver for MIPI-DSI panels built around
//! the Sitronix ST7703 controller.
//!
//! The driver handles power and reset sequencing and sends the vendor init
//! sequence of the panel. Pixel data is streamed by the DSI host in video mode
//! and never passes through this crate.
//!
//! # Lifecycle
//!
//! A [`Panel`] is created unprepared by the [`Builder`] and is then driven by
//! the display pipeline:
//!
//! ```text
//! Unprepared --prepare--> Prepared --enable--> Enabled
//!            <-unprepare-          <-disable--
//! ```
//!
//! # Example
//!
//! ```
//! use st7703_async::{Builder, State, models::Variant};
//!
//! # tokio_test::block_on(async {
//! # let di = st7703_async::_mock::MockInterface;
//! # let rst = st7703_async::_mock::MockOutputPin;
//! # let vcc = st7703_async::_mock::MockSupply;
//! # let iovcc = st7703_async::_mock::MockSupply;
//! # let mut delay = st7703_async::_mock::MockDelay;
//! let mut panel = Builder::new(Variant::Xbd599, di)
//!     .supplies(vcc, iovcc)
//!     .reset_pin(rst)
//!     .rotation(Some(90))
//!     .init()
//!     .await
//!     .unwrap();
//!
//! let mode = panel.desc().mode;
//! assert_eq!((mode.hdisplay, mode.vdisplay), (720, 1440));
//!
//! panel.prepare(&mut delay).await.unwrap();
//! panel.enable(&mut delay).await.unwrap();
//! assert_eq!(panel.state(), State::Enabled);
//!
//! panel.disable(&mut delay).await.unwrap();
//! panel.unprepare(&mut delay).await.unwrap();
//! # });
//! ```

use core::fmt;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal_async::delay::DelayNs;

pub mod interface;
use interface::Interface;

pub mod options;
use options::Orientation;

mod builder;
pub use builder::*;

pub mod batch;
use batch::CommandBatch;

pub mod dcs;
use dcs::{EnterSleepMode, ExitSleepMode, SetDisplayOff, SetDisplayOn};

pub mod debug;
use debug::DebugControl;

pub mod mode;
use mode::{BusFormat, Connector, DisplayInfo, DisplayMode, ModeType};

pub mod models;
use models::PanelDesc;

pub mod power;
use power::{Rail, Supply};

pub mod _troubleshooting;

#[doc(hidden)]
pub mod _mock;

const BUS_FORMATS: &[BusFormat] = &[BusFormat::Rgb888_1x24];

// Reset pulse width and the time the controller needs before it accepts commands.
const RESET_PULSE_US: u32 = 20;
const RESET_SETTLE_MS: u32 = 20;

/// Lifecycle state of a [`Panel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Supplies are off. The reset pin is untouched until the first prepare
    /// and asserted after every power down.
    Unprepared,
    /// Supplies are on and the controller is initialized, display is off.
    Prepared,
    /// Display is on.
    Enabled,
}

///
/// Driver for one ST7703 based panel.
///
/// Owns the DSI interface, both supplies and the reset pin for its entire
/// lifetime. Use [`Builder`] to create it and [`Panel::release`] to get the
/// resources back.
///
pub struct Panel<DI, VCC, IOVCC, RST>
where
    DI: Interface,
    VCC: Supply,
    IOVCC: Supply<Error = VCC::Error>,
    RST: OutputPin,
{
    // DSI command channel
    di: DI,
    // Core supply
    vcc: VCC,
    // I/O supply
    iovcc: IOVCC,
    // Reset pin, active low
    rst: RST,
    // Panel model
    desc: &'static PanelDesc,
    // Mounting orientation, read from the platform at construction
    orientation: Orientation,
    state: State,
}

/// Error type of the [`Panel`] lifecycle methods.
pub type PanelError<DI, VCC, RST> = Error<
    <DI as Interface>::Error,
    <VCC as Supply>::Error,
    <RST as digital::ErrorType>::Error,
>;

impl<DI, VCC, IOVCC, RST> Panel<DI, VCC, IOVCC, RST>
where
    DI: Interface,
    VCC: Supply,
    IOVCC: Supply<Error = VCC::Error>,
    RST: OutputPin,
{
    pub(crate) fn new(
        desc: &'static PanelDesc,
        di: DI,
        vcc: VCC,
        iovcc: IOVCC,
        rst: RST,
        orientation: Orientation,
    ) -> Self {
        Self {
            di,
            vcc,
            iovcc,
            rst,
            desc,
            orientation,
            state: State::Unprepared,
        }
    }

    ///
    /// Returns the descriptor of the panel model.
    ///
    pub fn desc(&self) -> &'static PanelDesc {
        self.desc
    }

    ///
    /// Returns the current lifecycle state.
    ///
    pub fn state(&self) -> State {
        self.state
    }

    ///
    /// Returns the mounting orientation determined at construction.
    ///
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    ///
    /// Powers the panel up and sends the init sequence.
    ///
    /// Enables `vcc`, then `iovcc`, pulses the reset pin and sends the init
    /// sequence of the model. On failure reset is asserted again if it was
    /// released, everything that was turned on is turned off, `iovcc` first,
    /// and the panel stays unprepared.
    ///
    pub async fn prepare<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), PanelError<DI, VCC, RST>> {
        self.expect_state(State::Unprepared)?;

        log::debug!("Resetting the panel");
        if let Err(error) = self.vcc.enable() {
            log::error!("Failed to enable vcc supply: {:?}", error);
            return Err(Error::Supply {
                rail: Rail::Vcc,
                error,
            });
        }
        if let Err(error) = self.iovcc.enable() {
            log::error!("Failed to enable iovcc supply: {:?}", error);
            self.disable_rail(Rail::Vcc).ok();
            return Err(Error::Supply {
                rail: Rail::Iovcc,
                error,
            });
        }

        if let Err(error) = self.reset(delay).await {
            self.rst.set_low().ok();
            self.power_off().ok();
            return Err(Error::Reset(error));
        }

        let desc = self.desc;
        let mut batch = CommandBatch::new(&mut self.di, delay);
        desc.run_init(&mut batch).await;
        if let Err(error) = batch.finish() {
            log::error!("Panel init sequence failed: {:?}", error);
            self.rst.set_low().ok();
            self.power_off().ok();
            return Err(Error::Transmission(error));
        }

        log::debug!("Panel init sequence done");
        self.state = State::Prepared;
        Ok(())
    }

    ///
    /// Wakes the controller and turns the display on.
    ///
    pub async fn enable<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), PanelError<DI, VCC, RST>> {
        self.expect_state(State::Prepared)?;

        let mut batch = CommandBatch::new(&mut self.di, delay);
        batch.write_command(ExitSleepMode).await;
        // The internal timing generator needs time to stabilize.
        batch.delay_ms(250).await;
        batch.write_command(SetDisplayOn).await;
        batch.delay_ms(50).await;
        batch.finish().map_err(Error::Transmission)?;

        self.state = State::Enabled;
        Ok(())
    }

    ///
    /// Turns the display off.
    ///
    /// The panel is considered prepared afterwards even if the command failed,
    /// so that it can always be unprepared.
    ///
    pub async fn disable<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), PanelError<DI, VCC, RST>> {
        self.expect_state(State::Enabled)?;

        let mut batch = CommandBatch::new(&mut self.di, delay);
        batch.write_command(SetDisplayOff).await;
        batch.delay_ms(120).await;
        let result = batch.finish().map_err(Error::Transmission);

        self.state = State::Prepared;
        result
    }

    ///
    /// Puts the controller to sleep and powers the panel down.
    ///
    /// Reset is asserted and both supplies are turned off, `iovcc` first, even
    /// if the sleep command fails. The first error encountered is returned.
    ///
    pub async fn unprepare<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), PanelError<DI, VCC, RST>> {
        self.expect_state(State::Prepared)?;

        let mut batch = CommandBatch::new(&mut self.di, delay);
        batch.write_command(EnterSleepMode).await;
        batch.delay_ms(120).await;
        let sleep = batch.finish().map_err(Error::Transmission);

        let reset = self.rst.set_low().map_err(Error::Reset);
        let power = self.power_off();

        self.state = State::Unprepared;
        sleep.and(reset).and(power)
    }

    ///
    /// Reports the preferred mode of the panel to `connector`.
    ///
    /// Adds a single mode, flagged as preferred, and sets the physical size and
    /// bus format of the panel. Returns the added mode.
    ///
    pub fn get_modes<C: Connector>(&self, connector: &mut C) -> Result<DisplayMode, C::Error> {
        let mut mode = self.desc.mode;
        mode.mode_type = ModeType::DRIVER | ModeType::PREFERRED;

        if let Err(error) = connector.add_probed_mode(mode) {
            log::error!("Failed to add mode {}@{}", mode.name(), mode.vrefresh());
            return Err(error);
        }

        connector.set_display_info(DisplayInfo {
            width_mm: mode.width_mm,
            height_mm: mode.height_mm,
            bus_formats: BUS_FORMATS,
        });

        Ok(mode)
    }

    ///
    /// Returns the diagnostic controls of this panel.
    ///
    pub fn debug(&mut self) -> DebugControl<'_, DI> {
        DebugControl::new(&mut self.di)
    }

    ///
    /// Detaches from the DSI host and releases all resources.
    ///
    /// This returns the interface, the `vcc` and `iovcc` supplies and the reset
    /// pin. Their state is left untouched; unprepare the panel first to power
    /// it down.
    ///
    pub async fn release(mut self) -> (DI, VCC, IOVCC, RST) {
        if let Err(error) = self.di.detach().await {
            log::error!("Failed to detach from DSI host: {:?}", error);
        }

        (self.di, self.vcc, self.iovcc, self.rst)
    }

    fn expect_state(&self, expected: State) -> Result<(), PanelError<DI, VCC, RST>> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidState {
                expected,
                actual: self.state,
            })
        }
    }

    async fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), RST::Error> {
        self.rst.set_low()?;
        delay.delay_us(RESET_PULSE_US).await;
        self.rst.set_high()?;
        delay.delay_ms(RESET_SETTLE_MS).await;
        Ok(())
    }

    fn disable_rail(&mut self, rail: Rail) -> Result<(), PanelError<DI, VCC, RST>> {
        let result = match rail {
            Rail::Vcc => self.vcc.disable(),
            Rail::Iovcc => self.iovcc.disable(),
        };

        result.map_err(|error| {
            log::error!("Failed to disable {} supply: {:?}", rail, error);
            Error::Supply { rail, error }
        })
    }

    // iovcc always goes down before vcc.
    fn power_off(&mut self) -> Result<(), PanelError<DI, VCC, RST>> {
        let iovcc = self.disable_rail(Rail::Iovcc);
        let vcc = self.disable_rail(Rail::Vcc);
        iovcc.and(vcc)
    }
}

/// Error returned by the [`Panel`] lifecycle methods.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<DI, PWR, RST> {
    /// A command could not be sent.
    Transmission(DI),
    /// A supply could not be switched.
    Supply {
        /// The failing supply.
        rail: Rail,
        /// Error reported by the supply.
        error: PWR,
    },
    /// The reset pin could not be set.
    Reset(RST),
    /// The method was called in the wrong lifecycle state.
    InvalidState {
        /// State required by the method.
        expected: State,
        /// State the panel is in.
        actual: State,
    },
}

impl<DI, PWR, RST> fmt::Display for Error<DI, PWR, RST>
where
    DI: fmt::Debug,
    PWR: fmt::Debug,
    RST: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transmission(error) => write!(f, "DSI write failed: {:?}", error),
            Error::Supply { rail, error } => write!(f, "{} supply failed: {:?}", rail, error),
            Error::Reset(error) => write!(f, "reset pin failed: {:?}", error),
            Error::InvalidState { expected, actual } => write!(
                f,
                "panel is {:?}, needs to be {:?}",
                actual, expected
            ),
        }
    }
}
