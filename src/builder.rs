//! [super::Panel] builder module

use core::{convert::Infallible, fmt};

use embedded_hal::digital::{self, OutputPin};

use crate::{
    interface::Interface,
    models::{PanelDesc, Variant},
    options::{Orientation, OrientationError},
    power::Supply,
    Panel,
};

/// Builder for [Panel] instances.
///
/// Collects the panel variant, the DSI interface, both supplies, the reset pin
/// and the platform orientation, then attaches to the DSI host in
/// [`init`](Self::init).
///
/// # Examples
/// ```
/// use st7703_async::{Builder, models::Variant};
///
/// # tokio_test::block_on(async {
/// # let di = st7703_async::_mock::MockInterface;
/// # let rst = st7703_async::_mock::MockOutputPin;
/// # let vcc = st7703_async::_mock::MockSupply;
/// # let iovcc = st7703_async::_mock::MockSupply;
/// let panel = Builder::from_compatible("gx040hd,gx040hd-30mb-a1", di)
///     .unwrap()
///     .supplies(vcc, iovcc)
///     .reset_pin(rst)
///     .rotation(Some(180))
///     .init()
///     .await
///     .unwrap();
/// # });
/// ```
pub struct Builder<DI, VCC, IOVCC, RST> {
    desc: &'static PanelDesc,
    di: DI,
    vcc: Option<VCC>,
    iovcc: Option<IOVCC>,
    rst: Option<RST>,
    orientation: Result<Orientation, OrientationError>,
}

impl<DI> Builder<DI, NoSupply, NoSupply, NoResetPin>
where
    DI: Interface,
{
    ///
    /// Constructs a new builder for the given panel variant.
    ///
    #[must_use]
    pub fn new(variant: Variant, di: DI) -> Self {
        Self::with_desc(variant.desc(), di)
    }

    ///
    /// Constructs a new builder for the variant matching a platform
    /// compatible string.
    ///
    pub fn from_compatible(compatible: &str, di: DI) -> Result<Self, ConfigurationError> {
        let variant = Variant::from_compatible(compatible)?;
        Ok(Self::new(variant, di))
    }

    ///
    /// Constructs a new builder from a panel descriptor.
    ///
    #[must_use]
    pub fn with_desc(desc: &'static PanelDesc, di: DI) -> Self {
        Self {
            desc,
            di,
            vcc: None,
            iovcc: None,
            rst: None,
            orientation: Ok(Orientation::Unknown),
        }
    }
}

impl<DI, VCC, IOVCC, RST> Builder<DI, VCC, IOVCC, RST>
where
    DI: Interface,
    VCC: Supply,
    IOVCC: Supply<Error = VCC::Error>,
    RST: OutputPin,
{
    ///
    /// Sets the core (`vcc`) and I/O (`iovcc`) supplies.
    ///
    #[must_use]
    pub fn supplies<V, I>(self, vcc: V, iovcc: I) -> Builder<DI, V, I, RST>
    where
        V: Supply,
        I: Supply<Error = V::Error>,
    {
        Builder {
            desc: self.desc,
            di: self.di,
            vcc: Some(vcc),
            iovcc: Some(iovcc),
            rst: self.rst,
            orientation: self.orientation,
        }
    }

    ///
    /// Sets the reset pin.
    ///
    /// The pin is driven low to hold the controller in reset.
    ///
    #[must_use]
    pub fn reset_pin<RST2: OutputPin>(self, rst: RST2) -> Builder<DI, VCC, IOVCC, RST2> {
        Builder {
            desc: self.desc,
            di: self.di,
            vcc: self.vcc,
            iovcc: self.iovcc,
            rst: Some(rst),
            orientation: self.orientation,
        }
    }

    ///
    /// Sets the mounting orientation.
    ///
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Ok(orientation);
        self
    }

    ///
    /// Sets the mounting orientation from the platform `rotation` property,
    /// in degrees. `None` means the platform doesn't specify one.
    ///
    /// Invalid values are reported by [`init`](Self::init).
    ///
    #[must_use]
    pub fn rotation(mut self, degrees: Option<u32>) -> Self {
        self.orientation = Orientation::from_rotation_property(degrees);
        self
    }

    ///
    /// Consumes the builder, attaches to the DSI host and returns the panel.
    ///
    /// No supply or pin is touched; the panel starts out unprepared.
    ///
    /// Returns [`InitError`] if a resource is missing, the orientation is
    /// invalid or the host refuses the link configuration.
    ///
    pub async fn init(self) -> Result<Panel<DI, VCC, IOVCC, RST>, InitError<DI::Error>> {
        let desc = self.desc;
        let vcc = self
            .vcc
            .ok_or(ConfigurationError::MissingResource(Resource::Vcc))?;
        let iovcc = self
            .iovcc
            .ok_or(ConfigurationError::MissingResource(Resource::Iovcc))?;
        let rst = self
            .rst
            .ok_or(ConfigurationError::MissingResource(Resource::Reset))?;
        let orientation = self.orientation.map_err(ConfigurationError::Orientation)?;

        let mut di = self.di;
        let config = desc.dsi_config();
        if let Err(error) = di.attach(&config).await {
            log::error!("DSI attach failed ({:?}). Is host ready?", error);
            return Err(InitError::Attach(error));
        }

        log::info!(
            "{}@{} {}bpp dsi {}dl - ready",
            desc.mode.name(),
            desc.mode.vrefresh(),
            config.format.bits_per_pixel(),
            config.lanes
        );

        Ok(Panel::new(desc, di, vcc, iovcc, rst, orientation))
    }
}

/// Error returned by [`Builder::init`].
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError<DI> {
    /// The DSI host refused to attach the panel.
    Attach(DI),

    /// Invalid configuration error.
    ///
    /// This error is returned when the configuration passed to the builder is
    /// invalid. For example, when a supply or the reset pin wasn't provided.
    InvalidConfiguration(ConfigurationError),
}

impl<DI> From<ConfigurationError> for InitError<DI> {
    fn from(value: ConfigurationError) -> Self {
        Self::InvalidConfiguration(value)
    }
}

impl<DI: fmt::Debug> fmt::Display for InitError<DI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Attach(error) => write!(f, "DSI attach failed: {:?}", error),
            InitError::InvalidConfiguration(error) => write!(f, "{}", error),
        }
    }
}

/// Specifics of [InitError::InvalidConfiguration] if configuration was found invalid
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigurationError {
    /// No panel variant matches the compatible string.
    UnsupportedVariant,
    /// A required resource wasn't provided.
    MissingResource(Resource),
    /// The platform orientation is invalid.
    Orientation(OrientationError),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::UnsupportedVariant => write!(f, "unsupported panel variant"),
            ConfigurationError::MissingResource(resource) => {
                write!(f, "failed to get {}", resource)
            }
            ConfigurationError::Orientation(error) => {
                write!(f, "failed to get orientation: {}", error)
            }
        }
    }
}

/// Resources a panel needs at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    /// Core supply.
    Vcc,
    /// I/O supply.
    Iovcc,
    /// Reset pin.
    Reset,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Vcc => write!(f, "vcc regulator"),
            Resource::Iovcc => write!(f, "iovcc regulator"),
            Resource::Reset => write!(f, "reset gpio"),
        }
    }
}

/// Marker type for no reset pin.
pub enum NoResetPin {}

impl digital::OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}

impl digital::ErrorType for NoResetPin {
    type Error = Infallible;
}

/// Marker type for no supply.
pub enum NoSupply {}

impl Supply for NoSupply {
    type Error = Infallible;

    fn enable(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}
