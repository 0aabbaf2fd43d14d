//! GX040HD-30MB-A1 4.0" 720x720 IPS panel.
//!
//! Shares most of its sequence with the XBD599 but uses a different GIP1 table
//! and runs in burst mode without EoT packets.

use crate::{
    batch::InitCmd,
    dcs::st7703::*,
    mode::{DisplayMode, ModeType, SyncFlags},
    options::{ModeFlags, PixelFormat},
};

use super::PanelDesc;

/// Descriptor of the GX040HD-30MB-A1.
pub const GX040HD: PanelDesc = PanelDesc {
    name: "gx040hd-30mb-a1",
    compatible: "gx040hd,gx040hd-30mb-a1",
    mode: DisplayMode {
        hdisplay: 720,
        hsync_start: 720 + 80,
        hsync_end: 720 + 80 + 20,
        htotal: 720 + 80 + 20 + 80,
        vdisplay: 720,
        vsync_start: 720 + 30,
        vsync_end: 720 + 30 + 4,
        vtotal: 720 + 30 + 4 + 12,
        clock: 41400,
        flags: SyncFlags::NHSYNC.union(SyncFlags::NVSYNC),
        mode_type: ModeType::empty(),
        // 89.6 mm square
        width_mm: 89,
        height_mm: 89,
    },
    lanes: 4,
    format: PixelFormat::Rgb888,
    mode_flags: ModeFlags::VIDEO
        .union(ModeFlags::VIDEO_BURST)
        .union(ModeFlags::NO_EOT_PACKET)
        .union(ModeFlags::LPM),
    init_sequence: INIT_SEQUENCE,
};

#[rustfmt::skip]
const INIT_SEQUENCE: &[InitCmd] = &[
    InitCmd::Dcs(SETEXTC, &[0xF1, 0x12, 0x83]),
    InitCmd::Dcs(
        SETMIPI,
        &[
            0x33, 0x81, 0x05, 0xF9, 0x0E, 0x0E, 0x20, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x44, 0x25,
            0x00, 0x90, 0x0A, 0x00, 0x00, 0x01, 0x4F, 0x01,
            0x00, 0x00, 0x37,
        ],
    ),
    InitCmd::Dcs(SETPOWER_EXT, &[0x25, 0x22, 0xF0, 0x63]),
    InitCmd::Dcs(UNKNOWN_BF, &[0x02, 0x11, 0x00]),
    InitCmd::Dcs(SETRGBIF, &[0x10, 0x10, 0x28, 0x28, 0x03, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    InitCmd::Dcs(SETSCR, &[0x73, 0x73, 0x50, 0x50, 0x00, 0x00, 0x12, 0x70, 0x00]),
    InitCmd::Dcs(SETVDC, &[0x46]),
    InitCmd::Dcs(SETPANEL, &[0x0B]),
    InitCmd::Dcs(SETCYC, &[0x80]),
    InitCmd::Dcs(SETDISP, &[0x3C, 0x12, 0x30]),
    InitCmd::Dcs(
        SETEQ,
        &[
            0x07, 0x07, 0x0B, 0x0B, 0x03, 0x0B, 0x00, 0x00,
            0x00, 0x00, 0xFF, 0x00, 0xC0, 0x10,
        ],
    ),
    InitCmd::Dcs(
        SETPOWER,
        &[
            0x36, 0x00, 0x32, 0x32, 0x77, 0xF1, 0xCC, 0xCC,
            0x77, 0x77, 0x33, 0x33,
        ],
    ),
    InitCmd::Dcs(SETBGP, &[0x0A, 0x0A]),
    InitCmd::Dcs(SETVCOM, &[0xB2, 0xB2]),
    InitCmd::Dcs(
        SETGIP1,
        &[
            0xC8, 0x10, 0x0A, 0x10, 0x0F, 0xA1, 0x80, 0x12,
            0x31, 0x23, 0x47, 0x86, 0xA1, 0x80, 0x47, 0x08,
            0x00, 0x00, 0x0D, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x0D, 0x00, 0x00, 0x00, 0x48, 0x02, 0x8B, 0xAF,
            0x46, 0x02, 0x88, 0x88, 0x88, 0x88, 0x88, 0x48,
            0x13, 0x8B, 0xAF, 0x57, 0x13, 0x88, 0x88, 0x88,
            0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    InitCmd::Dcs(
        SETGIP2,
        &[
            0x96, 0x12, 0x01, 0x01, 0x01, 0x78, 0x02, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x4F, 0x31, 0x8B, 0xA8,
            0x31, 0x75, 0x88, 0x88, 0x88, 0x88, 0x88, 0x4F,
            0x20, 0x8B, 0xA8, 0x20, 0x64, 0x88, 0x88, 0x88,
            0x88, 0x88, 0x23, 0x00, 0x00, 0x01, 0x02, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0xA1,
            0x80, 0x00, 0x00, 0x00, 0x00,
        ],
    ),
    InitCmd::Dcs(
        SETGAMMA,
        &[
            0x00, 0x0A, 0x0F, 0x29, 0x3B, 0x3F, 0x42, 0x39,
            0x06, 0x0D, 0x10, 0x13, 0x15, 0x14, 0x15, 0x10,
            0x17, 0x00, 0x0A, 0x0F, 0x29, 0x3B, 0x3F, 0x42,
            0x39, 0x06, 0x0D, 0x10, 0x13, 0x15, 0x14, 0x15,
            0x10, 0x17,
        ],
    ),
];
