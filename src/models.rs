//! Panel models.
//!
//! Every supported panel is described by one static [`PanelDesc`]: its
//! preferred timing, the link configuration it needs and the vendor init
//! sequence. [`Variant`] is the closed set of supported panels and maps the
//! platform compatible string to the matching descriptor.

use core::{fmt, str::FromStr};

use embedded_hal_async::delay::DelayNs;

use crate::{
    batch::{CommandBatch, InitCmd},
    interface::{DsiConfig, Interface},
    mode::DisplayMode,
    options::{ModeFlags, PixelFormat},
};

pub use crate::builder::ConfigurationError;

mod gx040hd;
mod jh057n00900;
mod xbd599;

pub use gx040hd::*;
pub use jh057n00900::*;
pub use xbd599::*;

/// Static description of one panel model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelDesc {
    /// Short model name, used in log messages.
    pub name: &'static str,
    /// Platform compatible string.
    pub compatible: &'static str,
    /// Preferred (and only) display mode.
    pub mode: DisplayMode,
    /// Number of DSI data lanes.
    pub lanes: u8,
    /// Pixel format on the link.
    pub format: PixelFormat,
    /// DSI transmission mode flags.
    pub mode_flags: ModeFlags,
    /// Vendor init sequence, sent once per prepare.
    pub init_sequence: &'static [InitCmd],
}

impl PanelDesc {
    /// Link configuration the DSI host has to provide for this panel.
    pub const fn dsi_config(&self) -> DsiConfig {
        DsiConfig {
            lanes: self.lanes,
            format: self.format,
            mode_flags: self.mode_flags,
        }
    }

    /// Sends the init sequence through `batch`.
    pub async fn run_init<DI, D>(&self, batch: &mut CommandBatch<'_, DI, D>)
    where
        DI: Interface,
        D: DelayNs,
    {
        batch.run(self.init_sequence).await
    }
}

/// Supported panel variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// Rocktech JH057N00900, 5.5" 720x1440.
    Jh057n00900,
    /// Xingbangda XBD599, 5.99" 720x1440.
    Xbd599,
    /// GX040HD-30MB-A1, 4.0" 720x720.
    Gx040hd,
}

impl Variant {
    /// All supported variants.
    pub const ALL: [Variant; 3] = [Variant::Gx040hd, Variant::Jh057n00900, Variant::Xbd599];

    /// Looks up the variant for a platform compatible string.
    ///
    /// # Examples
    ///
    /// ```
    /// use st7703_async::models::{ConfigurationError, Variant};
    ///
    /// let variant = Variant::from_compatible("xingbangda,xbd599").unwrap();
    /// assert_eq!(variant.desc().lanes, 4);
    ///
    /// assert_eq!(
    ///     Variant::from_compatible("sitronix,st7701"),
    ///     Err(ConfigurationError::UnsupportedVariant)
    /// );
    /// ```
    pub fn from_compatible(compatible: &str) -> Result<Self, ConfigurationError> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.compatible() == compatible)
            .ok_or(ConfigurationError::UnsupportedVariant)
    }

    /// Returns the descriptor of this variant.
    pub const fn desc(self) -> &'static PanelDesc {
        match self {
            Variant::Jh057n00900 => &JH057N00900,
            Variant::Xbd599 => &XBD599,
            Variant::Gx040hd => &GX040HD,
        }
    }

    /// Returns the platform compatible string of this variant.
    pub const fn compatible(self) -> &'static str {
        self.desc().compatible
    }
}

impl FromStr for Variant {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_compatible(s)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.desc().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcs::st7703::{SETEXTC, SETGAMMA};

    #[test]
    fn compatible_lookup() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_compatible(variant.compatible()), Ok(variant));
        }
        assert_eq!(
            "rocktech,jh057n00900".parse::<Variant>(),
            Ok(Variant::Jh057n00900)
        );
        assert_eq!(
            Variant::from_compatible(""),
            Err(ConfigurationError::UnsupportedVariant)
        );
    }

    #[test]
    fn xbd599_descriptor() {
        let desc = Variant::Xbd599.desc();
        assert_eq!(desc.lanes, 4);
        assert_eq!(desc.format, PixelFormat::Rgb888);
        assert_eq!(desc.mode.hdisplay, 720);
        assert_eq!(desc.mode.vdisplay, 1440);
        assert_eq!(desc.mode.clock, 69000);
        assert_eq!(
            desc.mode_flags,
            ModeFlags::VIDEO | ModeFlags::VIDEO_SYNC_PULSE
        );
    }

    #[test]
    fn timings_are_ordered() {
        for variant in Variant::ALL {
            let mode = variant.desc().mode;
            assert!(mode.hdisplay < mode.hsync_start);
            assert!(mode.hsync_start < mode.hsync_end);
            assert!(mode.hsync_end < mode.htotal);
            assert!(mode.vdisplay < mode.vsync_start);
            assert!(mode.vsync_start < mode.vsync_end);
            assert!(mode.vsync_end < mode.vtotal);
            assert!((1..=4).contains(&variant.desc().lanes));
        }
    }

    #[test]
    fn sequences_unlock_first_and_end_with_gamma() {
        for variant in Variant::ALL {
            let sequence = variant.desc().init_sequence;
            match sequence.first() {
                Some(InitCmd::Dcs(command, args)) | Some(InitCmd::Generic(command, args)) => {
                    assert_eq!(*command, SETEXTC);
                    assert_eq!(*args, &[0xF1, 0x12, 0x83]);
                }
                other => panic!("unexpected first step {:?}", other),
            }
            match sequence.last() {
                Some(InitCmd::Dcs(command, args)) => {
                    assert_eq!(*command, SETGAMMA);
                    assert_eq!(args.len(), 34);
                }
                other => panic!("unexpected last step {:?}", other),
            }
        }
    }

    #[test]
    fn jh057n00900_uses_generic_framing() {
        let sequence = Variant::Jh057n00900.desc().init_sequence;
        let generic = sequence
            .iter()
            .filter(|step| matches!(step, InitCmd::Generic(..)))
            .count();
        let delays: std::vec::Vec<_> = sequence
            .iter()
            .filter_map(|step| match step {
                InitCmd::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect();
        assert_eq!(generic, 13);
        assert_eq!(delays, [20]);
        assert!(Variant::Xbd599
            .desc()
            .init_sequence
            .iter()
            .all(|step| matches!(step, InitCmd::Dcs(..))));
    }

    #[test]
    fn gx040hd_differs_from_xbd599_in_gip1_only() {
        let gx = Variant::Gx040hd.desc().init_sequence;
        let xbd = Variant::Xbd599.desc().init_sequence;
        assert_eq!(gx.len(), xbd.len());
        let differing: std::vec::Vec<_> = gx
            .iter()
            .zip(xbd)
            .filter(|(a, b)| a != b)
            .map(|(a, _)| *a)
            .collect();
        assert_eq!(differing.len(), 1);
        assert!(matches!(
            differing[0],
            InitCmd::Dcs(crate::dcs::st7703::SETGIP1, _)
        ));
    }
}
