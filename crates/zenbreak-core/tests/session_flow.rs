//! Integration tests for whole sessions on a paused tokio clock.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use zenbreak_core::{
    drive_session, AdviceContent, AdviceSource, AdviceState, AppPhase, ContentError, CueStage,
    Event, Message, MessageReceiver, Mode, SessionController, StaticAdvice, VisualCue,
};

struct Unreachable;

#[async_trait]
impl AdviceSource for Unreachable {
    async fn fetch(&self, mode: Mode) -> Result<AdviceContent, ContentError> {
        tokio::time::sleep(Duration::from_millis(600)).await;
        Err(ContentError::Unavailable {
            mode,
            message: "connection refused".into(),
        })
    }
}

fn setup(source: Arc<dyn AdviceSource>) -> (SessionController, CueStage, MessageReceiver) {
    let (tx, rx) = zenbreak_core::message::channel();
    let ctrl = SessionController::new(source, tx.clone());
    (ctrl, CueStage::new(tx), rx)
}

fn drain(rx: &mut MessageReceiver) -> Vec<Message> {
    let mut out = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        out.push(msg);
    }
    out
}

#[tokio::test(start_paused = true)]
async fn one_minute_session_runs_to_completion() {
    let (mut ctrl, _stage, mut rx) = setup(Arc::new(StaticAdvice::default()));
    ctrl.select_duration(1);
    ctrl.start();

    let started = tokio::time::Instant::now();
    let mut events = Vec::new();
    let last = drive_session(&mut ctrl, &mut rx, |e| events.push(e.clone())).await;

    assert!(matches!(last, Some(Event::SessionFinished { duration_minutes: 1, .. })));
    assert_eq!(ctrl.phase(), AppPhase::Finished);
    assert_eq!(ctrl.remaining_secs(), Some(0));
    assert!(!ctrl.is_ticking());
    assert!(started.elapsed() >= Duration::from_secs(60));

    let ticks = events
        .iter()
        .filter(|e| matches!(e, Event::CountdownTicked { .. }))
        .count();
    assert_eq!(ticks, 59);
    let finished = events
        .iter()
        .filter(|e| matches!(e, Event::SessionFinished { .. }))
        .count();
    assert_eq!(finished, 1);
    assert!(events
        .iter()
        .any(|e| matches!(e, Event::AdviceLoaded { title, .. } if title == "Deep Breathing")));
    assert_eq!(
        ctrl.advice().content().map(|c| c.title.as_str()),
        Some("Deep Breathing")
    );

    // Nothing keeps ticking after the finish.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test(start_paused = true)]
async fn start_reset_cycles_leave_a_single_ticker() {
    let (mut ctrl, _stage, mut rx) = setup(Arc::new(StaticAdvice::default()));
    for _ in 0..5 {
        ctrl.start();
        ctrl.reset();
    }
    ctrl.start();
    ctrl.start();
    let current = ctrl.session_id();

    tokio::time::sleep(Duration::from_millis(3500)).await;
    let ticks: Vec<_> = drain(&mut rx)
        .into_iter()
        .filter(|m| matches!(m, Message::CountdownTick { .. }))
        .collect();
    assert_eq!(ticks.len(), 3);
    assert!(ticks.iter().all(|m| m.session() == current));
}

#[tokio::test(start_paused = true)]
async fn stale_fetches_are_ignored_after_restart() {
    let (mut ctrl, _stage, mut rx) = setup(Arc::new(StaticAdvice::default()));
    ctrl.select_mode(Mode::Eyes);
    ctrl.start();
    ctrl.reset();
    ctrl.select_mode(Mode::Meditation);
    ctrl.start();

    tokio::time::sleep(Duration::from_millis(700)).await;
    let mut loaded = Vec::new();
    for msg in drain(&mut rx) {
        if let Some(Event::AdviceLoaded { title, .. }) = ctrl.handle(msg) {
            loaded.push(title);
        }
    }
    assert_eq!(loaded, vec!["A Moment of Meditation".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn failed_fetch_does_not_disturb_countdown() {
    let (mut ctrl, _stage, mut rx) = setup(Arc::new(Unreachable));
    ctrl.select_duration(1);
    ctrl.start();

    let mut failures = 0;
    let last = drive_session(&mut ctrl, &mut rx, |e| {
        if matches!(e, Event::AdviceFailed { .. }) {
            failures += 1;
        }
    })
    .await;

    assert_eq!(failures, 1);
    assert!(matches!(last, Some(Event::SessionFinished { .. })));
    assert_eq!(ctrl.advice(), &AdviceState::Failed);
    assert!(ctrl.last_fetch_error().is_some());
}

#[tokio::test(start_paused = true)]
async fn again_from_finished_reuses_config_and_refetches() {
    let (mut ctrl, _stage, mut rx) = setup(Arc::new(StaticAdvice::default()));
    ctrl.select_mode(Mode::Eyes);
    ctrl.select_duration(1);
    ctrl.start();
    drive_session(&mut ctrl, &mut rx, |_| {}).await;
    let first = ctrl.session_id();

    assert!(matches!(
        ctrl.start(),
        Some(Event::SessionStarted {
            mode: Mode::Eyes,
            duration_secs: 60,
            ..
        })
    ));
    assert!(ctrl.session_id() > first);
    assert_eq!(ctrl.advice(), &AdviceState::Loading);

    let msg = rx.recv().await.unwrap();
    assert!(matches!(
        ctrl.handle(msg),
        Some(Event::AdviceLoaded { title, .. }) if title == "Eye Relief"
    ));
}

#[tokio::test(start_paused = true)]
async fn mode_change_on_home_picks_next_sessions_cue() {
    let (mut ctrl, mut stage, mut rx) = setup(Arc::new(StaticAdvice::default()));

    ctrl.start();
    stage.sync(&ctrl);
    assert_eq!(stage.cue().map(VisualCue::mode), Some(Mode::Breathing));

    ctrl.reset();
    stage.sync(&ctrl);
    assert!(!stage.is_mounted());

    ctrl.select_mode(Mode::Eyes);
    ctrl.start();
    stage.sync(&ctrl);
    assert_eq!(stage.cue().map(VisualCue::mode), Some(Mode::Eyes));

    // The eye cue steps every three seconds on its own ticker.
    tokio::time::sleep(Duration::from_millis(6500)).await;
    for msg in drain(&mut rx) {
        stage.handle(&msg);
        ctrl.handle(msg);
    }
    match stage.cue() {
        Some(VisualCue::Eyes(cue)) => assert_eq!(cue.index(), 2),
        other => panic!("unexpected cue {other:?}"),
    }
    assert_eq!(ctrl.remaining_secs(), Some(180 - 6));
}

/// Apply messages to the controller and the cue stage until the session
/// finishes. Returns how many cue steps the stage applied on the way.
async fn pump_to_finish(
    ctrl: &mut SessionController,
    stage: &mut CueStage,
    rx: &mut MessageReceiver,
) -> usize {
    let mut cue_steps = 0;
    while ctrl.phase() == AppPhase::Session {
        let msg = rx.recv().await.expect("channel closed mid-session");
        if matches!(msg, Message::CueStep { .. }) {
            if stage.handle(&msg) {
                cue_steps += 1;
            }
        } else {
            ctrl.handle(msg);
        }
        stage.sync(ctrl);
    }
    cue_steps
}

fn timer_messages(messages: &[Message]) -> usize {
    messages
        .iter()
        .filter(|m| matches!(m, Message::CueStep { .. } | Message::CountdownTick { .. }))
        .count()
}

#[tokio::test(start_paused = true)]
async fn no_timer_fires_after_a_session_finishes() {
    let (mut ctrl, mut stage, mut rx) = setup(Arc::new(StaticAdvice::default()));
    ctrl.select_mode(Mode::Eyes);
    ctrl.select_duration(1);
    ctrl.start();
    stage.sync(&ctrl);
    assert!(stage.is_ticking());

    let cue_steps = pump_to_finish(&mut ctrl, &mut stage, &mut rx).await;
    assert!(cue_steps >= 19, "eye cue stepped only {cue_steps} times");
    assert_eq!(ctrl.phase(), AppPhase::Finished);
    assert!(!ctrl.is_ticking());
    assert!(!stage.is_mounted());

    // Anything queued at the instant of teardown is already stale.
    for msg in drain(&mut rx) {
        assert!(!stage.handle(&msg));
        assert!(ctrl.handle(msg).is_none());
    }

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(timer_messages(&drain(&mut rx)), 0);
}

#[tokio::test(start_paused = true)]
async fn no_timer_fires_after_a_mid_session_reset() {
    let (mut ctrl, mut stage, mut rx) = setup(Arc::new(StaticAdvice::default()));
    ctrl.select_mode(Mode::Eyes);
    ctrl.start();
    stage.sync(&ctrl);

    tokio::time::sleep(Duration::from_millis(4500)).await;
    let before = drain(&mut rx);
    assert_eq!(timer_messages(&before), 4 + 1);
    for msg in before {
        stage.handle(&msg);
        ctrl.handle(msg);
    }

    assert!(matches!(ctrl.reset(), Some(Event::SessionReset { .. })));
    stage.sync(&ctrl);
    assert!(!ctrl.is_ticking());
    assert!(!stage.is_ticking());

    tokio::time::sleep(Duration::from_secs(10)).await;
    let after = drain(&mut rx);
    assert_eq!(timer_messages(&after), 0, "late timer messages: {after:?}");
}
