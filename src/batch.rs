//! Command batches with sticky error tracking.
//!
//! A [`CommandBatch`] wraps the interface for the duration of one lifecycle
//! transition. Every write goes through the batch, and the first failing write
//! is remembered: from then on all writes and delays are skipped without
//! touching the bus. Long vendor sequences can therefore be written as flat,
//! unconditional lists and checked once at the end with
//! [`finish`](CommandBatch::finish).
//!
//! ```
//! use st7703_async::batch::CommandBatch;
//! use st7703_async::dcs::{ExitSleepMode, SetDisplayOn};
//!
//! # tokio_test::block_on(async {
//! # let mut di = st7703_async::_mock::MockInterface;
//! # let mut delay = st7703_async::_mock::MockDelay;
//! let mut batch = CommandBatch::new(&mut di, &mut delay);
//! batch.write_command(ExitSleepMode).await;
//! batch.delay_ms(250).await;
//! batch.write_command(SetDisplayOn).await;
//! batch.delay_ms(50).await;
//! batch.finish().unwrap();
//! # });
//! ```

use embedded_hal_async::delay::DelayNs;

use crate::{
    dcs::DcsCommand,
    interface::{Framing, Interface},
};

/// One step of a panel init sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitCmd {
    /// DCS write of a command with its parameters.
    Dcs(u8, &'static [u8]),
    /// Generic write of a command with its parameters.
    Generic(u8, &'static [u8]),
    /// Wait for the given number of milliseconds.
    Delay(u32),
}

/// Sticky-error command batch for one lifecycle transition.
pub struct CommandBatch<'a, DI, D>
where
    DI: Interface,
    D: DelayNs,
{
    di: &'a mut DI,
    delay: &'a mut D,
    error: Option<DI::Error>,
}

impl<'a, DI, D> CommandBatch<'a, DI, D>
where
    DI: Interface,
    D: DelayNs,
{
    /// Starts a new batch with a clear error state.
    pub fn new(di: &'a mut DI, delay: &'a mut D) -> Self {
        Self {
            di,
            delay,
            error: None,
        }
    }

    /// Returns `true` as long as no write in this batch has failed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the first error seen by this batch, if any.
    pub fn error(&self) -> Option<&DI::Error> {
        self.error.as_ref()
    }

    /// Sends one command frame unless an earlier write has failed.
    pub async fn write(&mut self, framing: Framing, command: u8, args: &[u8]) {
        if self.error.is_some() {
            return;
        }

        if let Err(error) = self.di.write(framing, command, args).await {
            log::debug!("write of command {:#04x} failed: {:?}", command, error);
            self.error = Some(error);
        }
    }

    /// Sends a DCS write.
    pub async fn dcs_write(&mut self, command: u8, args: &[u8]) {
        self.write(Framing::Dcs, command, args).await
    }

    /// Sends a generic write.
    pub async fn generic_write(&mut self, command: u8, args: &[u8]) {
        self.write(Framing::Generic, command, args).await
    }

    /// Sends a standard DCS command.
    pub async fn write_command(&mut self, command: impl DcsCommand) {
        self.write(Framing::Dcs, command.instruction(), command.params())
            .await
    }

    /// Waits for `ms` milliseconds unless an earlier write has failed.
    pub async fn delay_ms(&mut self, ms: u32) {
        if self.error.is_none() {
            self.delay.delay_ms(ms).await;
        }
    }

    /// Waits for `us` microseconds unless an earlier write has failed.
    pub async fn delay_us(&mut self, us: u32) {
        if self.error.is_none() {
            self.delay.delay_us(us).await;
        }
    }

    /// Executes an init sequence.
    ///
    /// Stops at the first failing write; the remaining steps are skipped.
    pub async fn run(&mut self, sequence: &[InitCmd]) {
        for step in sequence {
            if self.error.is_some() {
                break;
            }

            match *step {
                InitCmd::Dcs(command, args) => self.dcs_write(command, args).await,
                InitCmd::Generic(command, args) => self.generic_write(command, args).await,
                InitCmd::Delay(ms) => self.delay_ms(ms).await,
            }
        }
    }

    /// Ends the batch and returns the first error it has seen.
    pub fn finish(self) -> Result<(), DI::Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcs::{ExitSleepMode, SetDisplayOn};
    use std::vec::Vec;

    #[derive(Default)]
    struct FailingInterface {
        fail_at: Option<usize>,
        sent: Vec<(Framing, u8, Vec<u8>)>,
        attempts: usize,
    }

    impl Interface for FailingInterface {
        type Error = usize;

        async fn attach(&mut self, _config: &crate::interface::DsiConfig) -> Result<(), usize> {
            Ok(())
        }

        async fn detach(&mut self) -> Result<(), usize> {
            Ok(())
        }

        async fn write(&mut self, framing: Framing, command: u8, args: &[u8]) -> Result<(), usize> {
            let index = self.attempts;
            self.attempts += 1;
            if self.fail_at == Some(index) {
                return Err(index);
            }
            self.sent.push((framing, command, args.to_vec()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        total_us: u64,
    }

    impl DelayNs for CountingDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_us += u64::from(ns) / 1_000;
        }

        async fn delay_us(&mut self, us: u32) {
            self.total_us += u64::from(us);
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.total_us += u64::from(ms) * 1_000;
        }
    }

    const SEQUENCE: &[InitCmd] = &[
        InitCmd::Dcs(0xB9, &[0xF1, 0x12, 0x83]),
        InitCmd::Generic(0xBC, &[0x4E]),
        InitCmd::Delay(20),
        InitCmd::Dcs(0xE0, &[0x00, 0x09]),
    ];

    #[test]
    fn runs_whole_sequence() {
        let mut di = FailingInterface::default();
        let mut delay = CountingDelay::default();

        tokio_test::block_on(async {
            let mut batch = CommandBatch::new(&mut di, &mut delay);
            batch.run(SEQUENCE).await;
            assert!(batch.finish().is_ok());
        });

        assert_eq!(di.sent.len(), 3);
        assert_eq!(di.sent[0], (Framing::Dcs, 0xB9, std::vec![0xF1, 0x12, 0x83]));
        assert_eq!(di.sent[1], (Framing::Generic, 0xBC, std::vec![0x4E]));
        assert_eq!(di.sent[2], (Framing::Dcs, 0xE0, std::vec![0x00, 0x09]));
        assert_eq!(delay.total_us, 20_000);
    }

    #[test]
    fn first_error_is_sticky() {
        let mut di = FailingInterface {
            fail_at: Some(1),
            ..Default::default()
        };
        let mut delay = CountingDelay::default();

        let result = tokio_test::block_on(async {
            let mut batch = CommandBatch::new(&mut di, &mut delay);
            batch.run(SEQUENCE).await;
            assert!(!batch.is_ok());
            assert_eq!(batch.error(), Some(&1));

            // Writes after the failure never reach the interface.
            batch.dcs_write(0x29, &[]).await;
            batch.delay_ms(50).await;
            batch.finish()
        });

        assert_eq!(result, Err(1));
        assert_eq!(di.attempts, 2);
        assert_eq!(di.sent.len(), 1);
        assert_eq!(delay.total_us, 0);
    }

    #[test]
    fn commands_use_dcs_framing() {
        let mut di = FailingInterface::default();
        let mut delay = CountingDelay::default();

        tokio_test::block_on(async {
            let mut batch = CommandBatch::new(&mut di, &mut delay);
            batch.write_command(ExitSleepMode).await;
            batch.delay_us(150).await;
            batch.write_command(SetDisplayOn).await;
            batch.delay_ms(1).await;
            batch.finish().unwrap();
        });

        assert_eq!(
            di.sent,
            [
                (Framing::Dcs, 0x11, Vec::new()),
                (Framing::Dcs, 0x29, Vec::new()),
            ]
        );
        assert_eq!(delay.total_us, 1_150);
    }

    #[test]
    fn microsecond_delay_is_skipped_after_error() {
        let mut di = FailingInterface {
            fail_at: Some(0),
            ..Default::default()
        };
        let mut delay = CountingDelay::default();

        let result = tokio_test::block_on(async {
            let mut batch = CommandBatch::new(&mut di, &mut delay);
            batch.write_command(ExitSleepMode).await;
            batch.delay_us(150).await;
            batch.finish()
        });

        assert_eq!(result, Err(0));
        assert_eq!(delay.total_us, 0);
    }
}
