use crate::MIN_TIME;

/*
Chime Envelope
==============

One-shot gain curve shaping every feedback tone.

  gain
  0.05 ┐   ╱╲
       │  ╱  ╲_
       │ ╱     ╲╲__
       │╱          ╲╲╲╲______
  0.0  └──────────────────────→ time
        attack   decay
        (50 ms)  (to 0.001 at the tone's duration)

The attack is a linear ramp from silence to a 0.05 peak - deliberately
quiet, these are textures, not notes. The decay is exponential: each
sample multiplies the level by a constant factor chosen so the curve
passes through 0.001 as the tone ends. Exponential decay is how struck
and plucked sounds die out, which is why the chime reads as "soft bell"
rather than "beep".

    factor = (floor / peak) ^ (1 / decay_samples)

Tones shorter than 100 ms get a proportionally shortened ramp so the
peak still lands before the decay begins.

The stage machine is strictly one-way: Attack -> Decay -> Done. There is
no gate, no sustain, and no retrigger; a finished envelope stays silent
forever and its voice is retired.
*/

/// Peak gain reached at the end of the attack ramp.
pub const PEAK_GAIN: f32 = 0.05;
/// Gain the decay converges to as the tone ends.
pub const FLOOR_GAIN: f32 = 0.001;
/// Attack ramp length in seconds.
pub const ATTACK_TIME: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeStage {
    Attack,
    Decay,
    Done,
}

pub struct ChimeEnvelope {
    stage: EnvelopeStage,
    level: f32,
    attack_samples: u32,
    total_samples: u32,
    elapsed: u32,
    decay_factor: f32,
}

impl ChimeEnvelope {
    pub fn new(sample_rate: f32, duration: f32) -> Self {
        let duration = duration.max(MIN_TIME);
        let total_samples = (duration * sample_rate).round().max(1.0) as u32;

        // The peak must land before the decay starts.
        let attack = ATTACK_TIME.min(duration * 0.5);
        let attack_samples = (attack * sample_rate).round().max(1.0) as u32;

        let decay_samples = total_samples.saturating_sub(attack_samples).max(1);
        let decay_factor = (FLOOR_GAIN / PEAK_GAIN).powf(1.0 / decay_samples as f32);

        Self {
            stage: EnvelopeStage::Attack,
            level: 0.0,
            attack_samples,
            total_samples,
            elapsed: 0,
            decay_factor,
        }
    }

    /// Gain for the current sample. The first call returns exactly 0.0;
    /// each call advances one sample.
    pub fn next_sample(&mut self) -> f32 {
        let gain = match self.stage {
            EnvelopeStage::Attack => {
                PEAK_GAIN * (self.elapsed as f32 / self.attack_samples as f32)
            }
            EnvelopeStage::Decay => self.level,
            EnvelopeStage::Done => 0.0,
        };

        self.elapsed = self.elapsed.saturating_add(1);
        match self.stage {
            EnvelopeStage::Attack => {
                if self.elapsed >= self.attack_samples {
                    self.stage = EnvelopeStage::Decay;
                    self.level = PEAK_GAIN;
                }
            }
            EnvelopeStage::Decay => {
                self.level *= self.decay_factor;
                if self.elapsed >= self.total_samples {
                    self.stage = EnvelopeStage::Done;
                }
            }
            EnvelopeStage::Done => {}
        }

        gain
    }

    /// Fill a buffer with consecutive gain values.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// True once the tone's full duration has elapsed.
    pub fn is_finished(&self) -> bool {
        self.stage == EnvelopeStage::Done
    }

    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn collect(env: &mut ChimeEnvelope, samples: usize) -> Vec<f32> {
        (0..samples).map(|_| env.next_sample()).collect()
    }

    #[test]
    fn starts_from_silence() {
        let mut env = ChimeEnvelope::new(SAMPLE_RATE, 0.5);
        assert_eq!(env.next_sample(), 0.0);
    }

    #[test]
    fn peak_lands_at_the_end_of_the_attack() {
        let mut env = ChimeEnvelope::new(SAMPLE_RATE, 0.5);

        // 50 ms at 1 kHz = 50 samples of ramp; sample 50 carries the peak
        let ramp = collect(&mut env, 50);
        let peak = env.next_sample();

        assert!((peak - PEAK_GAIN).abs() < 1e-6, "peak {peak}");
        assert!(ramp.windows(2).all(|w| w[0] <= w[1]), "ramp is monotonic");
        assert!(ramp.iter().all(|&g| g < PEAK_GAIN));
    }

    #[test]
    fn decay_reaches_the_floor_at_the_duration() {
        let duration = 0.5;
        let mut env = ChimeEnvelope::new(SAMPLE_RATE, duration);

        let samples = collect(&mut env, (duration * SAMPLE_RATE) as usize);
        let last = *samples.last().unwrap();

        assert!(
            (last - FLOOR_GAIN).abs() < FLOOR_GAIN * 0.05,
            "final gain {last}"
        );
        assert!(env.is_finished());
        assert_eq!(env.next_sample(), 0.0, "finished envelopes stay silent");
    }

    #[test]
    fn decay_is_strictly_monotonic_after_the_peak() {
        let mut env = ChimeEnvelope::new(SAMPLE_RATE, 0.5);
        let samples = collect(&mut env, 500);

        let decay = &samples[51..];
        assert!(decay.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn short_tones_shorten_the_ramp() {
        // 40 ms tone: attack is capped at 20 ms, decay still gets room
        let mut env = ChimeEnvelope::new(SAMPLE_RATE, 0.04);
        let samples = collect(&mut env, 40);

        let peak = samples.iter().copied().fold(f32::MIN, f32::max);
        assert!((peak - PEAK_GAIN).abs() < 1e-6);
        assert!(env.is_finished());
    }
}
