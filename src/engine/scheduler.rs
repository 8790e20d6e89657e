use std::time::Duration;

use crate::context::AudioContextManager;
use crate::tone::{ToneCommand, ToneSpec};

/// One step of a tone cascade: what to play and when, relative to the
/// cascade's submission.
#[derive(Debug, Clone, Copy)]
pub struct CascadeStep {
    pub offset_ms: u64,
    pub spec: ToneSpec,
}

/// Fire-and-forget tone scheduling against the shared audio context.
///
/// The scheduler owns the context manager; the gesture gate, the
/// interaction binder, and the welcome sequencer all talk through it. Every
/// call degrades to a silent no-op while the subsystem has no context, and
/// no call ever blocks, waits, or reports back.
pub struct ToneScheduler {
    manager: AudioContextManager,
}

impl ToneScheduler {
    pub fn new(manager: AudioContextManager) -> Self {
        Self { manager }
    }

    /// Play one tone now.
    ///
    /// Precondition: the subsystem is initialized. Otherwise this returns
    /// immediately - no synthesis unit is created and nothing is queued.
    pub fn play(&mut self, spec: ToneSpec) {
        self.play_after(spec, Duration::ZERO);
    }

    /// Play the baseline texture (432 Hz sine, 0.5 s).
    pub fn play_default(&mut self) {
        self.play(ToneSpec::default());
    }

    /// Play one tone after a fixed offset.
    ///
    /// If the context reports itself suspended a resume is issued first,
    /// fire-and-forget; the submission is not ordered against it.
    pub fn play_after(&mut self, spec: ToneSpec, offset: Duration) {
        let Some(context) = self.manager.context_mut() else {
            log::trace!("tone ignored: audio subsystem not initialized");
            return;
        };

        context.resume_if_suspended();
        let delay_frames = (offset.as_secs_f32() * context.sample_rate()).round() as u32;
        context.submit(ToneCommand { spec, delay_frames });
    }

    /// Submit a cascade as data: every step is an independent deferred
    /// play, so the envelopes overlap freely and nothing nests.
    pub fn play_cascade(&mut self, steps: &[CascadeStep]) {
        for step in steps {
            self.play_after(step.spec, Duration::from_millis(step.offset_ms));
        }
    }

    pub fn manager(&self) -> &AudioContextManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut AudioContextManager {
        &mut self.manager
    }
}
