//! Tone specifications and the commands that cross into the audio thread.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::Waveform;

/// What to synthesize: one enveloped tone.
///
/// Plain data, immutable once constructed. Frequency and duration are
/// expected positive; degenerate durations are clamped at the rendering
/// edge rather than validated here, so the welcome cascade can live in a
/// `const` table.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Pitch in Hz.
    pub frequency: f32,
    pub waveform: Waveform,
    /// Seconds from start to stop. The envelope decays to near-silence by
    /// this point, so stopping is click-free.
    pub duration: f32,
}

impl ToneSpec {
    pub const fn new(frequency: f32, waveform: Waveform, duration: f32) -> Self {
        Self {
            frequency,
            waveform,
            duration,
        }
    }
}

impl Default for ToneSpec {
    /// The baseline texture: 432 Hz sine, half a second.
    fn default() -> Self {
        Self::new(432.0, Waveform::Sine, 0.5)
    }
}

/// One scheduled tone, as sent over the ring buffer to the audio callback.
#[derive(Debug, Clone, Copy)]
pub struct ToneCommand {
    pub spec: ToneSpec,
    /// Frames to wait before the tone starts sounding.
    pub delay_frames: u32,
}
