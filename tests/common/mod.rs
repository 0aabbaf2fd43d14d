#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc};

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;
use st7703_async::{
    interface::{DsiConfig, Framing, Interface},
    models::Variant,
    power::{Rail, Supply},
    Builder, Panel,
};

/// Everything the panel did to its collaborators, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Attach(DsiConfig),
    Detach,
    Write(Framing, u8, Vec<u8>),
    Delay { ns: u64 },
    Supply { rail: Rail, on: bool },
    Reset { asserted: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::digital::Error for MockError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Failures to inject, shared with the mocks.
#[derive(Debug, Default)]
pub struct Faults {
    /// Index of the write that fails, counted over all writes.
    pub write: Option<usize>,
    pub attach: bool,
    pub detach: bool,
    pub enable: Option<Rail>,
    pub disable: Option<Rail>,
    /// Every attempt to drive reset fails.
    pub reset: bool,
}

#[derive(Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    faults: Rc<RefCell<Faults>>,
    writes: Rc<RefCell<usize>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Forgets all events and restarts write counting at zero.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        *self.writes.borrow_mut() = 0;
    }

    pub fn faults(&self) -> std::cell::RefMut<'_, Faults> {
        self.faults.borrow_mut()
    }

    pub fn writes(&self) -> Vec<(Framing, u8, Vec<u8>)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write(framing, command, args) => Some((framing, command, args)),
                _ => None,
            })
            .collect()
    }

    /// Last recorded level of each supply and of reset.
    pub fn hardware_state(&self) -> HardwareState {
        let mut state = HardwareState::default();
        for event in self.events() {
            match event {
                Event::Supply {
                    rail: Rail::Vcc,
                    on,
                } => state.vcc = on,
                Event::Supply {
                    rail: Rail::Iovcc,
                    on,
                } => state.iovcc = on,
                Event::Reset { asserted } => state.reset_asserted = Some(asserted),
                _ => {}
            }
        }
        state
    }

    /// Supply switching events, in order.
    pub fn supply_events(&self) -> Vec<(Rail, bool)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Supply { rail, on } => Some((rail, on)),
                _ => None,
            })
            .collect()
    }

    pub fn interface(&self) -> RecordingInterface {
        RecordingInterface {
            recorder: self.clone(),
        }
    }

    pub fn supply(&self, rail: Rail) -> RecordingSupply {
        RecordingSupply {
            recorder: self.clone(),
            rail,
        }
    }

    pub fn reset_pin(&self) -> RecordingPin {
        RecordingPin {
            recorder: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            recorder: self.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HardwareState {
    pub vcc: bool,
    pub iovcc: bool,
    pub reset_asserted: Option<bool>,
}

pub struct RecordingInterface {
    recorder: Recorder,
}

impl Interface for RecordingInterface {
    type Error = MockError;

    async fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error> {
        if self.recorder.faults.borrow().attach {
            return Err(MockError);
        }
        self.recorder.push(Event::Attach(*config));
        Ok(())
    }

    async fn detach(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Detach);
        if self.recorder.faults.borrow().detach {
            return Err(MockError);
        }
        Ok(())
    }

    async fn write(&mut self, framing: Framing, command: u8, args: &[u8]) -> Result<(), Self::Error> {
        let index = {
            let mut writes = self.recorder.writes.borrow_mut();
            let index = *writes;
            *writes += 1;
            index
        };
        if self.recorder.faults.borrow().write == Some(index) {
            return Err(MockError);
        }
        self.recorder
            .push(Event::Write(framing, command, args.to_vec()));
        Ok(())
    }
}

pub struct RecordingSupply {
    recorder: Recorder,
    rail: Rail,
}

impl Supply for RecordingSupply {
    type Error = MockError;

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.recorder.faults.borrow().enable == Some(self.rail) {
            return Err(MockError);
        }
        self.recorder.push(Event::Supply {
            rail: self.rail,
            on: true,
        });
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::Supply {
            rail: self.rail,
            on: false,
        });
        if self.recorder.faults.borrow().disable == Some(self.rail) {
            return Err(MockError);
        }
        Ok(())
    }
}

pub struct RecordingPin {
    recorder: Recorder,
}

impl RecordingPin {
    fn drive(&mut self, asserted: bool) -> Result<(), MockError> {
        if self.recorder.faults.borrow().reset {
            return Err(MockError);
        }
        self.recorder.push(Event::Reset { asserted });
        Ok(())
    }
}

impl ErrorType for RecordingPin {
    type Error = MockError;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }
}

pub struct RecordingDelay {
    recorder: Recorder,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.recorder.push(Event::Delay { ns: u64::from(ns) });
    }

    async fn delay_us(&mut self, us: u32) {
        self.recorder.push(Event::Delay {
            ns: u64::from(us) * 1_000,
        });
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.recorder.push(Event::Delay {
            ns: u64::from(ms) * 1_000_000,
        });
    }
}

pub type TestPanel = Panel<RecordingInterface, RecordingSupply, RecordingSupply, RecordingPin>;

pub fn ms(ms: u64) -> Event {
    Event::Delay { ns: ms * 1_000_000 }
}

pub fn us(us: u64) -> Event {
    Event::Delay { ns: us * 1_000 }
}

/// Builds a panel wired to a fresh recorder.
pub fn panel(variant: Variant) -> (TestPanel, Recorder) {
    let recorder = Recorder::new();
    let panel = tokio_test::block_on(
        Builder::new(variant, recorder.interface())
            .supplies(recorder.supply(Rail::Vcc), recorder.supply(Rail::Iovcc))
            .reset_pin(recorder.reset_pin())
            .init(),
    )
    .unwrap();
    recorder.clear();
    (panel, recorder)
}

/// Number of command writes in the init sequence of `variant`.
pub fn init_writes(variant: Variant) -> usize {
    use st7703_async::batch::InitCmd;

    variant
        .desc()
        .init_sequence
        .iter()
        .filter(|step| !matches!(step, InitCmd::Delay(_)))
        .count()
}
