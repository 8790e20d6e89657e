#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Tone Oscillator
===============

The oscillator is the raw sound source behind every feedback tone. It
produces a repeating waveform at a fixed frequency; the envelope then
shapes that material into a short, quiet chime.

Waveform character, purest to brightest:

Sine: the fundamental alone, no harmonics.
  - Sound: smooth, almost tactile
  - Use: hover and focus textures

Triangle: odd harmonics falling off as 1/n².
  - Sound: soft, flute-like, between sine and square
  - Use: the layered welcome chord

Square: odd harmonics falling off as 1/n.
  - Sound: hollow, woody

Sawtooth: every harmonic, falling off as 1/n.
  - Sound: bright, buzzy

Phase runs in [0, 1) and advances by frequency/sample_rate each sample;
wrapping with fract() keeps long tones from drifting.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

/// Phase-accumulator oscillator at a fixed frequency.
///
/// Feedback tones never track note pitch, so the frequency is set once at
/// construction and stays put for the life of the voice.
pub struct OscillatorBlock {
    waveform: Waveform,
    phase: f32,
    phase_inc: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: Waveform, frequency: f32, sample_rate: f32) -> Self {
        Self {
            waveform,
            phase: 0.0,
            phase_inc: frequency / sample_rate,
        }
    }

    /// Produce the sample at the current phase, then advance.
    pub fn next_sample(&mut self) -> f32 {
        let sample = shape(self.waveform, self.phase);
        self.phase = (self.phase + self.phase_inc).fract();
        sample
    }

    /// Fill a buffer with consecutive samples.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

fn shape(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Sine => (std::f32::consts::TAU * phase).sin(),
        // Rises from zero so the attack ramp stays click-free.
        Waveform::Triangle => {
            if phase < 0.25 {
                4.0 * phase
            } else if phase < 0.75 {
                2.0 - 4.0 * phase
            } else {
                4.0 * phase - 4.0
            }
        }
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Sawtooth => 2.0 * phase - 1.0,
    }
}
