//! Diagnostic controls.

use embedded_hal_async::delay::DelayNs;

use crate::{batch::CommandBatch, dcs::st7703::ALL_PIXEL_ON, interface::Interface};

/// Diagnostic controls of one panel, borrowed from [`Panel::debug`](crate::Panel::debug).
pub struct DebugControl<'a, DI> {
    di: &'a mut DI,
}

impl<'a, DI> DebugControl<'a, DI>
where
    DI: Interface,
{
    pub(crate) fn new(di: &'a mut DI) -> Self {
        Self { di }
    }

    /// Turns all pixels on, bypassing the frame memory.
    ///
    /// Useful to check the panel and its supplies independently of the video
    /// stream. The panel must be prepared. Normal operation resumes on the
    /// next display on or sleep out command.
    pub async fn all_pixels_on<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DI::Error> {
        log::debug!("Setting all pixels on");

        let mut batch = CommandBatch::new(&mut *self.di, delay);
        batch.generic_write(ALL_PIXEL_ON, &[]).await;
        batch.delay_ms(20).await;
        batch.finish()
    }
}
