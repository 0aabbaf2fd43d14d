//! MIPI DCS commands.

/// Common trait for DCS commands.
///
/// The methods in this trait are used to convert a DCS command into bytes.
pub trait DcsCommand {
    /// Returns the instruction code.
    fn instruction(&self) -> u8;

    /// Returns the parameter bytes sent after the instruction.
    fn params(&self) -> &[u8] {
        &[]
    }
}

macro_rules! dcs_basic_command {
    (
        #[doc = $tt:tt]
        $instr_name:ident,
        $instr:expr
    ) => {
        #[doc = $tt]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $instr_name;

        impl DcsCommand for $instr_name {
            fn instruction(&self) -> u8 {
                $instr
            }
        }
    };
}

dcs_basic_command!(
    /// Enter Sleep Mode
    EnterSleepMode,
    0x10
);
dcs_basic_command!(
    /// Exit Sleep Mode
    ExitSleepMode,
    0x11
);
dcs_basic_command!(
    /// Turn Display Off
    SetDisplayOff,
    0x28
);
dcs_basic_command!(
    /// Turn Display On
    SetDisplayOn,
    0x29
);

/// Sitronix ST7703 manufacturer command set.
///
/// Everything from `0xB1` upwards is only accepted after [`SETEXTC`] has been
/// sent with the unlock key `F1 12 83`.
pub mod st7703 {
    /// All pixels off (display shows black).
    pub const ALL_PIXEL_OFF: u8 = 0x22;
    /// All pixels on (display shows white), bypassing the frame memory.
    pub const ALL_PIXEL_ON: u8 = 0x23;
    /// Set panel ID.
    pub const SETAPID: u8 = 0xB1;
    /// Set display related registers (resolution, timing).
    pub const SETDISP: u8 = 0xB2;
    /// Set RGB interface.
    pub const SETRGBIF: u8 = 0xB3;
    /// Set display waveform cycles (inversion).
    pub const SETCYC: u8 = 0xB4;
    /// Set VREF voltage.
    pub const SETBGP: u8 = 0xB5;
    /// Set VCOM voltage.
    pub const SETVCOM: u8 = 0xB6;
    /// Set OTP.
    pub const SETOTP: u8 = 0xB7;
    /// Set power control extension.
    pub const SETPOWER_EXT: u8 = 0xB8;
    /// Enable extended command set.
    pub const SETEXTC: u8 = 0xB9;
    /// Set MIPI DSI receiver configuration.
    pub const SETMIPI: u8 = 0xBA;
    /// Set VDC.
    pub const SETVDC: u8 = 0xBC;
    /// Undocumented.
    pub const UNKNOWN_BF: u8 = 0xBF;
    /// Set source control.
    pub const SETSCR: u8 = 0xC0;
    /// Set power control.
    pub const SETPOWER: u8 = 0xC1;
    /// Set ECO.
    pub const SETECO: u8 = 0xC6;
    /// Set IO.
    pub const SETIO: u8 = 0xC7;
    /// Set CABC.
    pub const SETCABC: u8 = 0xC8;
    /// Set panel control.
    pub const SETPANEL: u8 = 0xCC;
    /// Set gamma curve.
    pub const SETGAMMA: u8 = 0xE0;
    /// Set EQ timing.
    pub const SETEQ: u8 = 0xE3;
    /// Set GIP timing, part 1.
    pub const SETGIP1: u8 = 0xE9;
    /// Set GIP timing, part 2.
    pub const SETGIP2: u8 = 0xEA;
    /// Undocumented.
    pub const UNKNOWN_EF: u8 = 0xEF;
}

