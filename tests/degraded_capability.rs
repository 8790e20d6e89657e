mod common;

use std::rc::Rc;

use common::FakeBackend;
use sentidos_audio::config::FeedbackConfig;
use sentidos_audio::context::{AudioContextManager, SubsystemState};
use sentidos_audio::dsp::oscillator::Waveform;
use sentidos_audio::engine::scheduler::ToneScheduler;
use sentidos_audio::gate::{Gesture, GestureGate};
use sentidos_audio::tone::ToneSpec;

#[test]
fn play_is_a_silent_no_op_without_capability() {
    let backend = FakeBackend::without_capability();
    let consumer = Rc::clone(&backend.consumer);
    let manager = AudioContextManager::new(Box::new(backend), FeedbackConfig::default());
    let mut scheduler = ToneScheduler::new(manager);
    let mut gate = GestureGate::new();

    gate.observe(Gesture::PointerDown, &mut scheduler);
    assert_eq!(scheduler.manager().state(), SubsystemState::Degraded);

    scheduler.play_default();
    scheduler.play(ToneSpec::new(700.0, Waveform::Square, 1.0));

    // No context means no queue and no synthesis units, ever.
    assert!(consumer.borrow().is_none());
}

#[test]
fn play_before_any_gesture_is_ignored() {
    let backend = FakeBackend::with_capability();
    let probes = Rc::clone(&backend.probes);
    let consumer = Rc::clone(&backend.consumer);
    let manager = AudioContextManager::new(Box::new(backend), FeedbackConfig::default());
    let mut scheduler = ToneScheduler::new(manager);

    // Initialization is pending until a gesture arrives; playing now is
    // dropped without touching the backend.
    scheduler.play_default();

    assert_eq!(probes.get(), 0);
    assert!(consumer.borrow().is_none());
    assert_eq!(scheduler.manager().state(), SubsystemState::Uninitialized);
}
