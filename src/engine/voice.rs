use crate::dsp::envelope::ChimeEnvelope;
use crate::dsp::oscillator::OscillatorBlock;
use crate::tone::ToneSpec;

/// A transient synthesis unit: one oscillator through one envelope gain
/// stage.
///
/// Created per scheduled tone and destroyed when the tone stops. Voices are
/// never reused or pooled, and they share nothing; concurrent tones overlap
/// simply because several voices are live at once.
pub struct ToneVoice {
    osc: OscillatorBlock,
    env: ChimeEnvelope,
    delay_frames: u32,
}

impl ToneVoice {
    pub fn new(spec: ToneSpec, sample_rate: f32, delay_frames: u32) -> Self {
        Self {
            osc: OscillatorBlock::new(spec.waveform, spec.frequency, sample_rate),
            env: ChimeEnvelope::new(sample_rate, spec.duration),
            delay_frames,
        }
    }

    /// Mix this voice into `out`.
    ///
    /// Leading delay frames contribute nothing. Once the envelope finishes
    /// the voice is permanently silent and reports finished, which is its
    /// stop event: exactly delay + duration frames after it was spawned.
    pub fn accumulate(&mut self, out: &mut [f32]) {
        for slot in out.iter_mut() {
            if self.delay_frames > 0 {
                self.delay_frames -= 1;
                continue;
            }
            if self.env.is_finished() {
                break;
            }
            *slot += self.osc.next_sample() * self.env.next_sample();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.env.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::Waveform;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn runs_for_exactly_its_duration() {
        let spec = ToneSpec::new(200.0, Waveform::Sine, 0.2);
        let mut voice = ToneVoice::new(spec, SAMPLE_RATE, 0);

        let mut out = vec![0.0f32; 200];
        voice.accumulate(&mut out);
        assert!(voice.is_finished());
        assert!(out.iter().any(|&s| s.abs() > 0.0));

        out.fill(0.0);
        voice.accumulate(&mut out);
        assert!(out.iter().all(|&s| s == 0.0), "stopped voices stay silent");
    }

    #[test]
    fn stop_does_not_arrive_early() {
        let spec = ToneSpec::new(200.0, Waveform::Sine, 0.2);
        let mut voice = ToneVoice::new(spec, SAMPLE_RATE, 0);

        let mut out = vec![0.0f32; 199];
        voice.accumulate(&mut out);
        assert!(!voice.is_finished());
    }

    #[test]
    fn delay_postpones_the_onset() {
        let spec = ToneSpec::new(432.0, Waveform::Sine, 0.1);
        let mut voice = ToneVoice::new(spec, SAMPLE_RATE, 50);

        let mut out = vec![0.0f32; 60];
        voice.accumulate(&mut out);

        assert!(out[..50].iter().all(|&s| s == 0.0), "delay frames are silent");
        // frame 50 is the envelope's t = 0 (gain 0); the ramp follows
        assert!(out[51..].iter().any(|&s| s.abs() > 0.0));
        assert!(!voice.is_finished());
    }
}
