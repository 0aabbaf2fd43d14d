//! # Troubleshooting guide
//!
//! This guide lists common issues that can cause a blank or unstable panel.
//!
//! ## Panel stays black
//!
//! ### Reset pin
//!
//! The reset input of the ST7703 is active low. The driver drives the pin
//! **low** to hold the controller in reset and **high** to release it, so the
//! pin passed to the builder must not be inverted by the HAL. The pin is only
//! touched by [`Panel::prepare`](crate::Panel::prepare) and
//! [`Panel::unprepare`](crate::Panel::unprepare); if the bootloader left it low
//! the controller simply stays in reset until the first prepare.
//!
//! ### Supplies
//!
//! Both `vcc` and `iovcc` are switched by the driver. If one of them is
//! actually hard-wired on the board, pass a [`Supply`](crate::power::Supply)
//! that always succeeds instead. `iovcc` is enabled after `vcc` and disabled
//! before it; boards that route the reset line through a level shifter fed
//! from `iovcc` rely on that order.
//!
//! ### Backlight
//!
//! This driver does **NOT** handle the backlight to keep the code simpler.
//! Users must control the backlight manually. First thing to try is to see if
//! turning the backlight on fixes the issue.
//!
//! ### All pixels on
//!
//! To tell a broken video stream from a broken panel, prepare the panel and
//! force every pixel on. The panel should turn white regardless of what the
//! DSI host is sending:
//!
//! ```
//! use st7703_async::{Builder, models::Variant};
//!
//! # tokio_test::block_on(async {
//! # let di = st7703_async::_mock::MockInterface;
//! # let rst = st7703_async::_mock::MockOutputPin;
//! # let (vcc, iovcc) = (st7703_async::_mock::MockSupply, st7703_async::_mock::MockSupply);
//! # let mut delay = st7703_async::_mock::MockDelay;
//! let mut panel = Builder::new(Variant::Jh057n00900, di)
//!     .supplies(vcc, iovcc)
//!     .reset_pin(rst)
//!     .init()
//!     .await
//!     .unwrap();
//!
//! panel.prepare(&mut delay).await.unwrap();
//! panel.debug().all_pixels_on(&mut delay).await.unwrap();
//! # });
//! ```
//!
//! ## Prepare fails
//!
//! ### Attach or link configuration
//!
//! All supported panels need 4 data lanes in video mode. A host that can't
//! provide the [`DsiConfig`](crate::interface::DsiConfig) of the model should
//! already fail in [`Builder::init`](crate::Builder::init).
//!
//! ### Commands not acknowledged
//!
//! The manufacturer commands are only accepted after the unlock command, which
//! is the first entry of every init sequence. A transmission error on the first
//! command usually means the controller is still in reset or unpowered; later
//! errors point at the DSI host, e.g. commands sent in high speed mode while
//! the panel expects low power mode. After an error the remaining commands are
//! skipped and the panel is powered down again, so a retry always starts from
//! a clean state.
//!
//! ## Flicker or unstable image
//!
//! The init sequences are vendor calibration data. They are sent as-is and
//! must not be altered or merged between models, even where they look almost
//! identical (the GX040HD and XBD599 differ only in their GIP1 table).
