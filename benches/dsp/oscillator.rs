//! Benchmarks for the tone oscillator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sentidos_audio::dsp::oscillator::{OscillatorBlock, Waveform};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        for (name, waveform) in [
            ("sine", Waveform::Sine),
            ("triangle", Waveform::Triangle),
            ("square", Waveform::Square),
            ("sawtooth", Waveform::Sawtooth),
        ] {
            let mut osc = OscillatorBlock::new(waveform, 432.0, 48_000.0);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    osc.render(black_box(&mut buffer));
                })
            });
        }
    }

    group.finish();
}
