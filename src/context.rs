//! Ownership and lifecycle of the single process-wide audio context.

use rtrb::{Producer, RingBuffer};

use crate::backend::{OutputHandle, OutputState, SynthesisBackend};
use crate::config::FeedbackConfig;
use crate::tone::ToneCommand;

/// Capacity of the tone command queue, preallocated once at context
/// creation. A full queue drops tones silently.
const TONE_QUEUE_SIZE: usize = 64;

/// Lifecycle of the audio subsystem as a whole.
///
/// Transitions happen at most once, on the first qualifying gesture:
/// `Uninitialized -> Initialized` when the host has synthesis capability,
/// `Uninitialized -> Degraded` when it does not. Both targets are terminal,
/// and `Degraded` is observably identical to `Uninitialized` for play
/// callers - everything stays silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsystemState {
    Uninitialized,
    Initialized,
    Degraded,
}

/// The single audio context: the command producer, the live output handle,
/// and the stream's sample rate.
pub struct AudioContext {
    tones: Producer<ToneCommand>,
    handle: Box<dyn OutputHandle>,
    sample_rate: f32,
}

impl AudioContext {
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Issue a resume if the output reports itself suspended.
    ///
    /// Fire-and-forget: scheduling proceeds without waiting on the resume,
    /// so whether the very next tone is audible after a suspension is
    /// host-dependent. Best-effort by design.
    pub fn resume_if_suspended(&mut self) {
        if self.handle.state() == OutputState::Suspended {
            if let Err(err) = self.handle.resume() {
                log::warn!("audio resume failed: {err}");
            }
        }
    }

    /// Push one command toward the audio thread. A full queue drops the
    /// tone; feedback degrades to silence, never to an error.
    pub fn submit(&mut self, command: ToneCommand) {
        if self.tones.push(command).is_err() {
            log::debug!("tone queue full, dropping scheduled tone");
        }
    }
}

/// Owns the at-most-one audio context and its lazy, gesture-gated creation.
///
/// An explicitly constructed service object rather than a module-level
/// singleton, so tests can hand it a backend that deterministically reports
/// missing capability.
pub struct AudioContextManager {
    state: SubsystemState,
    backend: Box<dyn SynthesisBackend>,
    context: Option<AudioContext>,
    config: FeedbackConfig,
}

impl AudioContextManager {
    pub fn new(backend: Box<dyn SynthesisBackend>, config: FeedbackConfig) -> Self {
        Self {
            state: SubsystemState::Uninitialized,
            backend,
            context: None,
            config,
        }
    }

    /// Manager over the production cpal backend.
    pub fn with_default_backend(config: FeedbackConfig) -> Self {
        Self::new(Box::new(crate::backend::CpalBackend::new()), config)
    }

    /// Idempotent context creation.
    ///
    /// The first call probes the backend. Success stores the single context
    /// for the rest of the process lifetime; failure is terminal and never
    /// retried - later gestures will not probe again.
    pub fn ensure_initialized(&mut self) {
        if self.state != SubsystemState::Uninitialized {
            return;
        }

        let (tx, rx) = RingBuffer::new(TONE_QUEUE_SIZE);
        match self.backend.open(rx, &self.config) {
            Ok(handle) => {
                let sample_rate = handle.sample_rate();
                self.context = Some(AudioContext {
                    tones: tx,
                    handle,
                    sample_rate,
                });
                self.state = SubsystemState::Initialized;
                log::info!("audio context initialized at {sample_rate} Hz");
            }
            Err(err) => {
                self.state = SubsystemState::Degraded;
                log::warn!("audio capability unavailable, staying muted: {err}");
            }
        }
    }

    pub fn state(&self) -> SubsystemState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state == SubsystemState::Initialized
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    pub(crate) fn context_mut(&mut self) -> Option<&mut AudioContext> {
        self.context.as_mut()
    }
}
