//! The tone engine: transient voices, the audio-thread mixer, and the
//! scheduler the feedback components talk to.
//!
//! Commands flow one way. The scheduler pushes `ToneCommand`s into a
//! preallocated ring buffer; the mixer drains it inside the audio callback,
//! spawns one voice per command, and retires each voice as its tone ends.
//! Nothing is cancelled and nothing is pooled - overlap is just multiple
//! live voices.

/// Audio-callback-side mixing of live voices.
pub mod mixer;
/// Fire-and-forget scheduling API over the shared context.
pub mod scheduler;
/// A single transient synthesis unit.
pub mod voice;

pub use mixer::Mixer;
pub use scheduler::{CascadeStep, ToneScheduler};
pub use voice::ToneVoice;
