//! Benchmarks for the DSP primitives behind the feedback tones.
//!
//! Run with: cargo bench
//!
//! These measure the per-sample paths that run inside the audio callback,
//! to keep them well within real-time deadlines.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline

use criterion::{criterion_group, criterion_main};

mod dsp;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(benches, dsp::bench_oscillator, dsp::bench_envelope);
criterion_main!(benches);
