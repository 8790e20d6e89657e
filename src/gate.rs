//! First-gesture detection that unlocks the audio subsystem.

use crate::engine::scheduler::ToneScheduler;

/// A user gesture kind that may, per host policy, be required to unlock
/// audio playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    PointerDown,
    TouchStart,
}

/// Once-then-disarm gate over the two qualifying gesture kinds.
///
/// Both handlers are registered together and removed together: whichever
/// gesture kind arrives first triggers initialization exactly once, and the
/// losing kind's handler is discarded with it even if the two race. The
/// gate never re-arms; if initialization degrades, no later gesture retries
/// it.
pub struct GestureGate {
    // Single-assignment guard: present while armed, taken exactly once.
    handlers: Option<HandlerPair>,
}

/// The two single-fire subscriptions, held as one unit so disarming both is
/// one assignment.
#[derive(Debug)]
struct HandlerPair {
    pointer: Gesture,
    touch: Gesture,
}

impl GestureGate {
    pub fn new() -> Self {
        Self {
            handlers: Some(HandlerPair {
                pointer: Gesture::PointerDown,
                touch: Gesture::TouchStart,
            }),
        }
    }

    /// Whether the gate is still waiting for its first gesture.
    pub fn armed(&self) -> bool {
        self.handlers.is_some()
    }

    /// Feed one gesture through the gate.
    ///
    /// Returns true when this gesture fired the gate. Any qualifying
    /// gesture matches one of the two handlers, so the first observation
    /// while armed unsubscribes both and runs initialization; everything
    /// after that falls through.
    pub fn observe(&mut self, gesture: Gesture, scheduler: &mut ToneScheduler) -> bool {
        let Some(handlers) = self.handlers.take() else {
            return false;
        };

        debug_assert!(gesture == handlers.pointer || gesture == handlers.touch);
        log::debug!("gesture gate fired on {gesture:?}");
        scheduler.manager_mut().ensure_initialized();
        true
    }
}

impl Default for GestureGate {
    fn default() -> Self {
        Self::new()
    }
}
