//! Shared test doubles for the audio subsystem.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rtrb::Consumer;
use sentidos_audio::backend::{BackendError, OutputHandle, OutputState, SynthesisBackend};
use sentidos_audio::config::FeedbackConfig;
use sentidos_audio::tone::ToneCommand;

/// Deterministic synthesis backend.
///
/// With capability, `open` hands out a handle and parks the queue's
/// consumer side where the test can pick it up; without capability it
/// fails the probe the way a host with no output device would. Shared
/// counters let tests assert on probe and resume traffic after the
/// backend has been boxed away.
pub struct FakeBackend {
    capability: bool,
    pub sample_rate: f32,
    pub initial_state: OutputState,
    pub probes: Rc<Cell<usize>>,
    pub resumes: Rc<Cell<usize>>,
    pub consumer: Rc<RefCell<Option<Consumer<ToneCommand>>>>,
}

impl FakeBackend {
    pub fn with_capability() -> Self {
        Self::new(true)
    }

    pub fn without_capability() -> Self {
        Self::new(false)
    }

    fn new(capability: bool) -> Self {
        Self {
            capability,
            sample_rate: 48_000.0,
            initial_state: OutputState::Running,
            probes: Rc::new(Cell::new(0)),
            resumes: Rc::new(Cell::new(0)),
            consumer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn suspended(mut self) -> Self {
        self.initial_state = OutputState::Suspended;
        self
    }

    pub fn at_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Drain everything the subsystem has scheduled so far.
    pub fn drain(consumer: &Rc<RefCell<Option<Consumer<ToneCommand>>>>) -> Vec<ToneCommand> {
        let mut queued = Vec::new();
        if let Some(rx) = consumer.borrow_mut().as_mut() {
            while let Ok(cmd) = rx.pop() {
                queued.push(cmd);
            }
        }
        queued
    }
}

impl SynthesisBackend for FakeBackend {
    fn open(
        &mut self,
        tones: Consumer<ToneCommand>,
        _config: &FeedbackConfig,
    ) -> Result<Box<dyn OutputHandle>, BackendError> {
        self.probes.set(self.probes.get() + 1);

        if !self.capability {
            return Err(BackendError::NoOutputDevice);
        }

        *self.consumer.borrow_mut() = Some(tones);
        Ok(Box::new(FakeHandle {
            sample_rate: self.sample_rate,
            state: self.initial_state,
            resumes: Rc::clone(&self.resumes),
        }))
    }
}

struct FakeHandle {
    sample_rate: f32,
    state: OutputState,
    resumes: Rc<Cell<usize>>,
}

impl OutputHandle for FakeHandle {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn state(&self) -> OutputState {
        self.state
    }

    fn resume(&mut self) -> Result<(), BackendError> {
        self.resumes.set(self.resumes.get() + 1);
        self.state = OutputState::Running;
        Ok(())
    }
}
