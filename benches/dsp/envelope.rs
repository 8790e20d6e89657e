//! Benchmarks for the chime envelope generator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sentidos_audio::dsp::envelope::ChimeEnvelope;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Attack phase (ramping up)
        let mut env = ChimeEnvelope::new(48_000.0, 3_600.0);
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer));
            })
        });

        // Decay phase; a long tone keeps the envelope in decay for the
        // whole measurement.
        let mut env = ChimeEnvelope::new(48_000.0, 3_600.0);
        for _ in 0..3_000 {
            env.next_sample();
        }
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
