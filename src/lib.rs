pub mod backend; // Synthesis capability seam (cpal in production, fakeable in tests)
pub mod binder; // Hover/focus wiring over the element snapshot
pub mod config;
pub mod context; // Lifecycle of the single audio context
pub mod dsp;
pub mod engine; // Transient voices, audio-thread mixer, tone scheduler
pub mod gate; // First-gesture unlock
pub mod tone;
pub mod welcome; // Call-to-action cascade

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
