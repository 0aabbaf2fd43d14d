//! Display timing modes and reporting them to the display pipeline.

use core::fmt;

bitflags::bitflags! {
    /// Sync signal polarity flags of a mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SyncFlags: u32 {
        /// Positive horizontal sync
        const PHSYNC = 1 << 0;
        /// Negative horizontal sync
        const NHSYNC = 1 << 1;
        /// Positive vertical sync
        const PVSYNC = 1 << 2;
        /// Negative vertical sync
        const NVSYNC = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Where a mode comes from and how the pipeline should rank it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeType: u32 {
        /// Preferred mode of the sink.
        const PREFERRED = 1 << 3;
        /// Mode provided by the panel driver.
        const DRIVER = 1 << 6;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SyncFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SyncFlags({=u32:#x})", self.bits())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModeType {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ModeType({=u32:#x})", self.bits())
    }
}

/// Video timing of a panel.
///
/// Horizontal values are in pixels, vertical values in lines, all counted from
/// the start of the active area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayMode {
    /// Active pixels per line.
    pub hdisplay: u16,
    /// Start of horizontal sync (active + front porch).
    pub hsync_start: u16,
    /// End of horizontal sync.
    pub hsync_end: u16,
    /// Total pixels per line.
    pub htotal: u16,
    /// Active lines.
    pub vdisplay: u16,
    /// Start of vertical sync (active + front porch).
    pub vsync_start: u16,
    /// End of vertical sync.
    pub vsync_end: u16,
    /// Total lines per frame.
    pub vtotal: u16,
    /// Pixel clock in kHz.
    pub clock: u32,
    /// Sync polarity.
    pub flags: SyncFlags,
    /// Mode type, empty for the descriptor's own copy.
    pub mode_type: ModeType,
    /// Physical width of the active area in millimeters.
    pub width_mm: u16,
    /// Physical height of the active area in millimeters.
    pub height_mm: u16,
}

impl DisplayMode {
    /// Refresh rate in Hz, rounded to the nearest integer.
    pub const fn vrefresh(&self) -> u32 {
        let num = self.clock as u64 * 1000;
        let den = self.htotal as u64 * self.vtotal as u64;
        if den == 0 {
            return 0;
        }
        ((num + den / 2) / den) as u32
    }

    /// Returns the mode name, `"<hdisplay>x<vdisplay>"`.
    pub const fn name(&self) -> ModeName {
        ModeName {
            hdisplay: self.hdisplay,
            vdisplay: self.vdisplay,
        }
    }
}

/// Name of a [`DisplayMode`], formatted on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeName {
    hdisplay: u16,
    vdisplay: u16,
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.hdisplay, self.vdisplay)
    }
}

/// Media bus formats a panel can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum BusFormat {
    /// 24-bit RGB, one sample per clock.
    Rgb888_1x24,
}

/// Panel properties announced alongside its modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayInfo {
    /// Physical width in millimeters.
    pub width_mm: u16,
    /// Physical height in millimeters.
    pub height_mm: u16,
    /// Supported bus formats.
    pub bus_formats: &'static [BusFormat],
}

/// Sink for the modes of a panel, implemented by the display pipeline.
pub trait Connector {
    /// Error type, returned when the mode can't be stored.
    type Error: core::fmt::Debug;

    /// Adds a probed mode.
    fn add_probed_mode(&mut self, mode: DisplayMode) -> Result<(), Self::Error>;

    /// Updates the display info of the connector.
    fn set_display_info(&mut self, info: DisplayInfo);
}

impl<T: Connector + ?Sized> Connector for &mut T {
    type Error = T::Error;

    fn add_probed_mode(&mut self, mode: DisplayMode) -> Result<(), Self::Error> {
        T::add_probed_mode(self, mode)
    }

    fn set_display_info(&mut self, info: DisplayInfo) {
        T::set_display_info(self, info)
    }
}

/// Returned by [`ModeList`] when it has no room left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfMemory;

impl fmt::Display for OutOfMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no room for another mode")
    }
}

/// Fixed capacity [`Connector`].
///
/// ```
/// use st7703_async::mode::ModeList;
/// use st7703_async::models::Variant;
///
/// let mut modes = ModeList::<1>::new();
/// modes.add(Variant::Xbd599.desc().mode).unwrap();
/// assert!(modes.add(Variant::Xbd599.desc().mode).is_err());
/// ```
#[cfg(feature = "mode-list")]
#[derive(Debug, Clone, Default)]
pub struct ModeList<const N: usize> {
    modes: heapless::Vec<DisplayMode, N>,
    info: Option<DisplayInfo>,
}

#[cfg(feature = "mode-list")]
impl<const N: usize> ModeList<N> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            modes: heapless::Vec::new(),
            info: None,
        }
    }

    /// Appends a mode.
    pub fn add(&mut self, mode: DisplayMode) -> Result<(), OutOfMemory> {
        self.modes.push(mode).map_err(|_| OutOfMemory)
    }

    /// Returns the stored modes.
    pub fn modes(&self) -> &[DisplayMode] {
        &self.modes
    }

    /// Returns the first mode flagged as preferred.
    pub fn preferred(&self) -> Option<&DisplayMode> {
        self.modes
            .iter()
            .find(|mode| mode.mode_type.contains(ModeType::PREFERRED))
    }

    /// Returns the last display info set by the panel.
    pub fn display_info(&self) -> Option<&DisplayInfo> {
        self.info.as_ref()
    }
}

#[cfg(feature = "mode-list")]
impl<const N: usize> Connector for ModeList<N> {
    type Error = OutOfMemory;

    fn add_probed_mode(&mut self, mode: DisplayMode) -> Result<(), Self::Error> {
        self.add(mode)
    }

    fn set_display_info(&mut self, info: DisplayInfo) {
        self.info = Some(info);
    }
}
