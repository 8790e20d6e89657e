//! The welcome call-to-action: a layered triangle cascade plus a short
//! visual press cue.

use std::time::{Duration, Instant};

use crate::dsp::oscillator::Waveform;
use crate::engine::scheduler::{CascadeStep, ToneScheduler};
use crate::tone::ToneSpec;

/// The welcome chord: three overlapping triangle tones. Each step is an
/// independent deferred play, so their envelopes layer into a chord
/// instead of chaining.
pub const WELCOME_CASCADE: [CascadeStep; 3] = [
    CascadeStep {
        offset_ms: 0,
        spec: ToneSpec::new(432.0, Waveform::Triangle, 2.0),
    },
    CascadeStep {
        offset_ms: 100,
        spec: ToneSpec::new(544.0, Waveform::Triangle, 1.8),
    },
    CascadeStep {
        offset_ms: 200,
        spec: ToneSpec::new(648.0, Waveform::Triangle, 1.6),
    },
];

/// How long the control renders pressed after an activation.
pub const PRESS_HOLD: Duration = Duration::from_millis(200);

/// Bound to the page's designated call-to-action control.
pub struct WelcomeSequencer {
    pressed_at: Option<Instant>,
}

impl WelcomeSequencer {
    pub fn new() -> Self {
        Self { pressed_at: None }
    }

    /// Activation: make sure the context exists, submit the cascade, and
    /// arm the visual press cue.
    ///
    /// The cue runs on its own timer and is armed unconditionally - it is
    /// not contingent on any of the audio succeeding.
    pub fn activate(&mut self, scheduler: &mut ToneScheduler, now: Instant) {
        scheduler.manager_mut().ensure_initialized();
        scheduler.play_cascade(&WELCOME_CASCADE);
        self.pressed_at = Some(now);
    }

    /// Whether the control should still render pressed (scaled down).
    pub fn is_pressed(&self, now: Instant) -> bool {
        self.pressed_at
            .is_some_and(|at| now.duration_since(at) < PRESS_HOLD)
    }
}

impl Default for WelcomeSequencer {
    fn default() -> Self {
        Self::new()
    }
}
