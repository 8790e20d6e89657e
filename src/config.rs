#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::Waveform;
use crate::tone::ToneSpec;

/// Tuning for the feedback subsystem.
///
/// Start from `Default` and override with the builder methods:
///
/// ```
/// use sentidos_audio::config::FeedbackConfig;
///
/// let config = FeedbackConfig::default().with_master_gain(0.8);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct FeedbackConfig {
    /// Applied to the mixed output, on top of the per-tone envelope.
    pub master_gain: f32,
    /// Played when the pointer enters a bound element.
    pub hover_tone: ToneSpec,
    /// Played when a bound element receives focus.
    pub focus_tone: ToneSpec,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            master_gain: 1.0,
            hover_tone: ToneSpec::new(432.0, Waveform::Sine, 0.8),
            focus_tone: ToneSpec::new(528.0, Waveform::Sine, 0.8),
        }
    }
}

impl FeedbackConfig {
    pub fn with_master_gain(mut self, gain: f32) -> Self {
        self.master_gain = gain;
        self
    }

    pub fn with_hover_tone(mut self, spec: ToneSpec) -> Self {
        self.hover_tone = spec;
        self
    }

    pub fn with_focus_tone(mut self, spec: ToneSpec) -> Self {
        self.focus_tone = spec;
        self
    }
}
