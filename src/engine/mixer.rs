use rtrb::Consumer;

use crate::engine::voice::ToneVoice;
use crate::tone::ToneCommand;

/// Mixes every live voice into the output stream.
///
/// Lives on the audio thread. Each block it drains newly scheduled
/// commands, spawns their voices, accumulates all live voices into the
/// block, applies the master gain, and retires voices whose tones have
/// ended. A voice's removal here is the tone's stop event.
pub struct Mixer {
    rx: Consumer<ToneCommand>,
    voices: Vec<ToneVoice>,
    sample_rate: f32,
    master_gain: f32,
}

impl Mixer {
    pub fn new(rx: Consumer<ToneCommand>, sample_rate: f32, master_gain: f32) -> Self {
        Self {
            rx,
            voices: Vec::new(),
            sample_rate,
            master_gain,
        }
    }

    pub fn render_block(&mut self, out: &mut [f32]) {
        while let Ok(cmd) = self.rx.pop() {
            self.voices
                .push(ToneVoice::new(cmd.spec, self.sample_rate, cmd.delay_frames));
        }

        out.fill(0.0);
        for voice in &mut self.voices {
            voice.accumulate(out);
        }
        self.voices.retain(|v| !v.is_finished());

        if self.master_gain != 1.0 {
            for sample in out.iter_mut() {
                *sample *= self.master_gain;
            }
        }
    }

    /// Voices still sounding, or waiting out their start delay.
    pub fn live_voices(&self) -> usize {
        self.voices.len()
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::Waveform;
    use crate::tone::ToneSpec;
    use rtrb::RingBuffer;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn mixer_with(cmds: &[ToneCommand], master_gain: f32) -> Mixer {
        let (mut tx, rx) = RingBuffer::new(16);
        for &cmd in cmds {
            tx.push(cmd).unwrap();
        }
        // The producer side is dropped; queued commands stay poppable.
        Mixer::new(rx, SAMPLE_RATE, master_gain)
    }

    #[test]
    fn empty_queue_renders_silence() {
        let mut mixer = mixer_with(&[], 1.0);
        let mut out = vec![1.0f32; 64];
        mixer.render_block(&mut out);
        assert!(out.iter().all(|&s| s == 0.0));
        assert_eq!(mixer.live_voices(), 0);
    }

    #[test]
    fn overlapping_tones_are_independent() {
        let spec = ToneSpec::new(432.0, Waveform::Sine, 0.2);
        let mut mixer = mixer_with(
            &[
                ToneCommand {
                    spec,
                    delay_frames: 0,
                },
                ToneCommand {
                    spec,
                    delay_frames: 100,
                },
            ],
            1.0,
        );

        // After 150 frames both voices are live: the first mid-decay, the
        // second past its delayed onset.
        let mut out = vec![0.0f32; 150];
        mixer.render_block(&mut out);
        assert_eq!(mixer.live_voices(), 2);

        // First voice stops at frame 200, second at frame 300.
        let mut out = vec![0.0f32; 100];
        mixer.render_block(&mut out);
        assert_eq!(mixer.live_voices(), 1);

        mixer.render_block(&mut out);
        assert_eq!(mixer.live_voices(), 0);
    }

    #[test]
    fn master_gain_scales_the_mix() {
        let spec = ToneSpec::new(250.0, Waveform::Square, 0.2);
        let cmd = ToneCommand {
            spec,
            delay_frames: 0,
        };

        let mut full = mixer_with(&[cmd], 1.0);
        let mut half = mixer_with(&[cmd], 0.5);

        let mut out_full = vec![0.0f32; 150];
        let mut out_half = vec![0.0f32; 150];
        full.render_block(&mut out_full);
        half.render_block(&mut out_half);

        for (f, h) in out_full.iter().zip(&out_half) {
            assert!((f * 0.5 - h).abs() < 1e-7);
        }
    }
}
