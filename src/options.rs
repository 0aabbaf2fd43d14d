//! Panel and link options.

use core::{fmt, str::FromStr};

/// Physical mounting orientation of the panel.
///
/// Describes which edge of the panel points up once it is built into the
/// device. The driver never rotates anything itself; the value is handed to the
/// display pipeline as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// No orientation information provided by the platform.
    #[default]
    Unknown,
    /// Panel is mounted in its natural orientation.
    Normal,
    /// Panel is mounted upside down.
    BottomUp,
    /// Panel's left side is up.
    LeftUp,
    /// Panel's right side is up.
    RightUp,
}

impl Orientation {
    /// Converts a platform `rotation` property, in degrees clockwise, into an
    /// orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use st7703_async::options::Orientation;
    ///
    /// assert_eq!(Orientation::from_rotation(90), Ok(Orientation::RightUp));
    /// assert!(Orientation::from_rotation(45).is_err());
    /// ```
    pub const fn from_rotation(degrees: u32) -> Result<Self, OrientationError> {
        match degrees {
            0 => Ok(Self::Normal),
            90 => Ok(Self::RightUp),
            180 => Ok(Self::BottomUp),
            270 => Ok(Self::LeftUp),
            other => Err(OrientationError::InvalidRotation(other)),
        }
    }

    /// Converts an optional `rotation` property. A missing property yields
    /// [`Orientation::Unknown`].
    pub const fn from_rotation_property(degrees: Option<u32>) -> Result<Self, OrientationError> {
        match degrees {
            Some(degrees) => Self::from_rotation(degrees),
            None => Ok(Self::Unknown),
        }
    }
}

impl FromStr for Orientation {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Orientation::Unknown),
            "normal" => Ok(Orientation::Normal),
            "upside-down" | "bottom-up" => Ok(Orientation::BottomUp),
            "left-side-up" | "left-up" => Ok(Orientation::LeftUp),
            "right-side-up" | "right-up" => Ok(Orientation::RightUp),
            _ => Err(OrientationError::UnknownName),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Unknown => write!(f, "unknown"),
            Orientation::Normal => write!(f, "normal"),
            Orientation::BottomUp => write!(f, "upside-down"),
            Orientation::LeftUp => write!(f, "left-side-up"),
            Orientation::RightUp => write!(f, "right-side-up"),
        }
    }
}

/// Error returned when the platform orientation can't be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OrientationError {
    /// Rotation isn't one of 0, 90, 180 or 270 degrees.
    InvalidRotation(u32),
    /// Orientation name isn't recognized.
    UnknownName,
}

impl fmt::Display for OrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationError::InvalidRotation(degrees) => {
                write!(f, "invalid panel rotation: {} degrees", degrees)
            }
            OrientationError::UnknownName => write!(f, "unknown panel orientation"),
        }
    }
}

/// Pixel stream format on the DSI link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    /// 24-bit packed RGB
    Rgb888,
    /// 18-bit RGB, loosely packed into 24 bits
    Rgb666,
    /// 18-bit RGB, tightly packed
    Rgb666Packed,
    /// 16-bit RGB
    Rgb565,
}

impl PixelFormat {
    /// Bits per pixel as transmitted on the link.
    pub const fn bits_per_pixel(&self) -> u32 {
        match self {
            PixelFormat::Rgb888 | PixelFormat::Rgb666 => 24,
            PixelFormat::Rgb666Packed => 18,
            PixelFormat::Rgb565 => 16,
        }
    }
}

bitflags::bitflags! {
    /// DSI transmission mode flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModeFlags: u32 {
        /// Video mode (as opposed to command mode).
        const VIDEO = 1 << 0;
        /// Burst video mode.
        const VIDEO_BURST = 1 << 1;
        /// Video mode with sync pulses.
        const VIDEO_SYNC_PULSE = 1 << 2;
        /// Don't send end-of-transmission packets.
        const NO_EOT_PACKET = 1 << 9;
        /// Transmit commands in low power mode.
        const LPM = 1 << 11;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModeFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ModeFlags({=u32:#x})", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_property() {
        assert_eq!(Orientation::from_rotation(0), Ok(Orientation::Normal));
        assert_eq!(Orientation::from_rotation(180), Ok(Orientation::BottomUp));
        assert_eq!(Orientation::from_rotation(270), Ok(Orientation::LeftUp));
        assert_eq!(
            Orientation::from_rotation(30),
            Err(OrientationError::InvalidRotation(30))
        );
        assert_eq!(
            Orientation::from_rotation_property(None),
            Ok(Orientation::Unknown)
        );
    }

    #[test]
    fn names_round_trip() {
        for orientation in [
            Orientation::Unknown,
            Orientation::Normal,
            Orientation::BottomUp,
            Orientation::LeftUp,
            Orientation::RightUp,
        ] {
            let name = std::format!("{}", orientation);
            assert_eq!(name.parse::<Orientation>(), Ok(orientation));
        }
        assert_eq!(
            "sideways".parse::<Orientation>(),
            Err(OrientationError::UnknownName)
        );
    }

    #[test]
    fn bits_per_pixel() {
        assert_eq!(PixelFormat::Rgb888.bits_per_pixel(), 24);
        assert_eq!(PixelFormat::Rgb666Packed.bits_per_pixel(), 18);
        assert_eq!(PixelFormat::Rgb565.bits_per_pixel(), 16);
    }
}
