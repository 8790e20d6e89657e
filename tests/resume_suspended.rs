mod common;

use std::rc::Rc;

use common::FakeBackend;
use sentidos_audio::config::FeedbackConfig;
use sentidos_audio::context::AudioContextManager;
use sentidos_audio::engine::scheduler::ToneScheduler;

#[test]
fn suspended_output_gets_a_fire_and_forget_resume() {
    let backend = FakeBackend::with_capability().suspended();
    let resumes = Rc::clone(&backend.resumes);
    let consumer = Rc::clone(&backend.consumer);
    let manager = AudioContextManager::new(Box::new(backend), FeedbackConfig::default());
    let mut scheduler = ToneScheduler::new(manager);

    scheduler.manager_mut().ensure_initialized();
    assert_eq!(resumes.get(), 0, "initialization alone does not resume");

    // The resume is issued before the submission, and the tone is queued
    // without waiting on it.
    scheduler.play_default();
    assert_eq!(resumes.get(), 1);
    assert_eq!(FakeBackend::drain(&consumer).len(), 1);

    // Once running, later plays leave the output alone.
    scheduler.play_default();
    assert_eq!(resumes.get(), 1);
}
