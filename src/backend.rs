//! Synthesis backends: the seam between the context manager and the host
//! audio system.
//!
//! Production use goes through [`CpalBackend`]. The traits exist so the
//! subsystem can be driven against a deterministic double - in particular
//! one that reports no synthesis capability at all, which on real hosts
//! only happens when there is no output device to probe.

use std::fmt;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::Consumer;

use crate::config::FeedbackConfig;
use crate::engine::Mixer;
use crate::tone::ToneCommand;
use crate::MAX_BLOCK_SIZE;

/// Why a backend could not come up, or stream.
#[derive(Debug)]
pub enum BackendError {
    /// The host offers no audio output at all.
    NoOutputDevice,
    OutputConfig(String),
    Stream(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::NoOutputDevice => {
                write!(f, "no default audio output device available")
            }
            BackendError::OutputConfig(e) => {
                write!(f, "failed to fetch default output config: {e}")
            }
            BackendError::Stream(e) => write!(f, "audio stream error: {e}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// Whether the output is actively consuming the mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    Running,
    Suspended,
}

/// A live audio output owned by the context.
pub trait OutputHandle {
    fn sample_rate(&self) -> f32;
    fn state(&self) -> OutputState;
    /// Ask a suspended output to start consuming again. Callers treat this
    /// as best-effort and never wait on it.
    fn resume(&mut self) -> Result<(), BackendError>;
}

/// Probes the host for synthesis capability and, when it is present, opens
/// the single output the subsystem will ever use.
pub trait SynthesisBackend {
    fn open(
        &mut self,
        tones: Consumer<ToneCommand>,
        config: &FeedbackConfig,
    ) -> Result<Box<dyn OutputHandle>, BackendError>;
}

/// cpal production backend: default host, default output device, mono
/// render fanned out to every channel.
#[derive(Debug, Default)]
pub struct CpalBackend;

impl CpalBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SynthesisBackend for CpalBackend {
    fn open(
        &mut self,
        tones: Consumer<ToneCommand>,
        config: &FeedbackConfig,
    ) -> Result<Box<dyn OutputHandle>, BackendError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(BackendError::NoOutputDevice)?;
        let stream_config = device
            .default_output_config()
            .map_err(|e| BackendError::OutputConfig(e.to_string()))?;

        let sample_rate = stream_config.sample_rate().0 as f32;
        let channels = stream_config.channels() as usize;

        let mut mixer = Mixer::new(tones, sample_rate, config.master_gain);
        let mut block = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device
            .build_output_stream(
                &stream_config.into(),
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                        let rendered = &mut block[..frames];
                        mixer.render_block(rendered);

                        // Copy the mono render to all channels.
                        let out_off = frames_written * channels;
                        for (i, &s) in rendered.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        frames_written += frames;
                    }
                },
                |err| log::error!("audio stream error: {err}"),
                None,
            )
            .map_err(|e| BackendError::Stream(e.to_string()))?;

        // A failed initial play leaves the handle suspended; a later
        // resume_if_suspended retries, fire-and-forget.
        let state = match stream.play() {
            Ok(()) => OutputState::Running,
            Err(err) => {
                log::warn!("audio output suspended at open: {err}");
                OutputState::Suspended
            }
        };

        Ok(Box::new(CpalHandle {
            stream,
            sample_rate,
            state,
        }))
    }
}

struct CpalHandle {
    stream: cpal::Stream,
    sample_rate: f32,
    state: OutputState,
}

impl OutputHandle for CpalHandle {
    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn state(&self) -> OutputState {
        self.state
    }

    fn resume(&mut self) -> Result<(), BackendError> {
        self.stream
            .play()
            .map_err(|e| BackendError::Stream(e.to_string()))?;
        self.state = OutputState::Running;
        Ok(())
    }
}
