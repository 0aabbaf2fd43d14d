//! Rocktech JH057N00900 5.5" 720x1440 panel.
//!
//! The vendor sequence looks like it was written for an ST7703 clone: most
//! commands match, but several take a different number of parameters. It is
//! sent with generic writes, except for the gamma curve.

use crate::{
    batch::InitCmd,
    dcs::st7703::*,
    mode::{DisplayMode, ModeType, SyncFlags},
    options::{ModeFlags, PixelFormat},
};

use super::PanelDesc;

/// Descriptor of the Rocktech JH057N00900.
pub const JH057N00900: PanelDesc = PanelDesc {
    name: "jh057n00900",
    compatible: "rocktech,jh057n00900",
    mode: DisplayMode {
        hdisplay: 720,
        hsync_start: 720 + 90,
        hsync_end: 720 + 90 + 20,
        htotal: 720 + 90 + 20 + 20,
        vdisplay: 1440,
        vsync_start: 1440 + 20,
        vsync_end: 1440 + 20 + 4,
        vtotal: 1440 + 20 + 4 + 12,
        clock: 75276,
        flags: SyncFlags::NHSYNC.union(SyncFlags::NVSYNC),
        mode_type: ModeType::empty(),
        width_mm: 65,
        height_mm: 130,
    },
    lanes: 4,
    format: PixelFormat::Rgb888,
    mode_flags: ModeFlags::VIDEO
        .union(ModeFlags::VIDEO_BURST)
        .union(ModeFlags::VIDEO_SYNC_PULSE),
    init_sequence: INIT_SEQUENCE,
};

#[rustfmt::skip]
const INIT_SEQUENCE: &[InitCmd] = &[
    InitCmd::Generic(SETEXTC, &[0xF1, 0x12, 0x83]),
    InitCmd::Generic(SETRGBIF, &[0x10, 0x10, 0x05, 0x05, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    InitCmd::Generic(SETSCR, &[0x73, 0x73, 0x50, 0x50, 0x00, 0x00, 0x08, 0x70, 0x00]),
    InitCmd::Generic(SETVDC, &[0x4E]),
    InitCmd::Generic(SETPANEL, &[0x0B]),
    InitCmd::Generic(SETCYC, &[0x80]),
    InitCmd::Generic(SETDISP, &[0xF0, 0x12, 0x30]),
    InitCmd::Generic(
        SETEQ,
        &[
            0x07, 0x07, 0x0B, 0x0B, 0x03, 0x0B, 0x00, 0x00,
            0x00, 0x00, 0xFF, 0x00, 0xC0, 0x10,
        ],
    ),
    InitCmd::Generic(SETBGP, &[0x08, 0x08]),
    InitCmd::Delay(20),
    InitCmd::Generic(SETVCOM, &[0x3F, 0x3F]),
    InitCmd::Generic(UNKNOWN_BF, &[0x02, 0x11, 0x00]),
    InitCmd::Generic(
        SETGIP1,
        &[
            0x82, 0x10, 0x06, 0x05, 0x9E, 0x0A, 0xA5, 0x12,
            0x31, 0x23, 0x37, 0x83, 0x04, 0xBC, 0x27, 0x38,
            0x0C, 0x00, 0x03, 0x00, 0x00, 0x00, 0x0C, 0x00,
            0x03, 0x00, 0x00, 0x00, 0x75, 0x75, 0x31, 0x88,
            0x88, 0x88, 0x88, 0x88, 0x88, 0x13, 0x88, 0x64,
            0x64, 0x20, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88,
            0x02, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    InitCmd::Generic(
        SETGIP2,
        &[
            0x02, 0x21, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x02, 0x46, 0x02, 0x88,
            0x88, 0x88, 0x88, 0x88, 0x88, 0x64, 0x88, 0x13,
            0x57, 0x13, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88,
            0x75, 0x88, 0x23, 0x14, 0x00, 0x00, 0x02, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x0A,
            0xA5, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    InitCmd::Dcs(
        SETGAMMA,
        &[
            0x00, 0x09, 0x0D, 0x23, 0x27, 0x3C, 0x41, 0x35,
            0x07, 0x0D, 0x0E, 0x12, 0x13, 0x10, 0x12, 0x12,
            0x18, 0x00, 0x09, 0x0D, 0x23, 0x27, 0x3C, 0x41,
            0x35, 0x07, 0x0D, 0x0E, 0x12, 0x13, 0x10, 0x12,
            0x12, 0x18,
        ],
    ),
];
