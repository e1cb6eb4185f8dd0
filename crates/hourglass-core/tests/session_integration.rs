//! Cross-module integration tests: controller, timer, and projection
//! working together the way a host shell drives them.

use hourglass_core::{
    format_remaining, project, AuthResult, AuthState, CountdownTimer, Event, Screen,
    SessionController,
};

const PASSWORD: &str = "uts123";

#[test]
fn full_session_flow() {
    let mut session = SessionController::new(PASSWORD);
    let mut timer = CountdownTimer::new();

    // Splash -> prompt -> unlock.
    assert_eq!(project(&session, &timer).screen, Screen::Splash);
    session.splash_complete();
    assert_eq!(project(&session, &timer).screen, Screen::PasswordPrompt);
    assert_eq!(session.submit_password(PASSWORD), AuthResult::Accepted);
    assert_eq!(project(&session, &timer).screen, Screen::Menu);

    // Configure Instagram with a ten-second limit.
    session.toggle_app("Instagram");
    session.ensure_time_limit("Instagram").unwrap();
    session.set_time_limit("Instagram", 0, 0, 10).unwrap();

    // Arm and run down.
    match session.start_countdown(&mut timer) {
        Some(Event::CountdownArmed {
            platform,
            total_secs,
            ..
        }) => {
            assert_eq!(platform, "Instagram");
            assert_eq!(total_secs, 10);
        }
        other => panic!("expected CountdownArmed, got {other:?}"),
    }
    assert!(timer.is_running());

    let mut completions = 0;
    for _ in 0..10 {
        if timer.tick().is_some() {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);

    let snap = timer.snapshot();
    assert_eq!(snap.remaining_secs, 0);
    assert!(!snap.running);
    assert_eq!(project(&session, &timer).remaining_label, "00h 00m 00s");
}

#[test]
fn deselecting_the_armed_platform_shifts_the_pick() {
    let mut session = SessionController::new(PASSWORD);
    let mut timer = CountdownTimer::new();

    session.toggle_app("Instagram");
    session.toggle_app("TikTok");
    session.ensure_time_limit("Instagram").unwrap();
    session.set_time_limit("Instagram", 0, 5, 0).unwrap();
    session.ensure_time_limit("TikTok").unwrap();
    session.set_time_limit("TikTok", 0, 7, 0).unwrap();

    // Dropping Instagram leaves TikTok as the first configured limit.
    session.toggle_app("Instagram");
    match session.start_countdown(&mut timer) {
        Some(Event::CountdownArmed {
            platform,
            total_secs,
            ..
        }) => {
            assert_eq!(platform, "TikTok");
            assert_eq!(total_secs, 420);
        }
        other => panic!("expected CountdownArmed, got {other:?}"),
    }
}

#[test]
fn zero_limit_arms_an_expired_countdown() {
    let mut session = SessionController::new(PASSWORD);
    let mut timer = CountdownTimer::new();

    session.toggle_app("Snapchat");
    session.ensure_time_limit("Snapchat").unwrap();

    let event = session.start_countdown(&mut timer);
    assert!(matches!(
        event,
        Some(Event::CountdownArmed { total_secs: 0, .. })
    ));
    assert!(!timer.is_running());
    assert!(timer.tick().is_none());
}

#[test]
fn cancel_prompt_round_trips_through_locked() {
    let mut session = SessionController::new(PASSWORD);
    session.splash_complete();
    session.cancel_prompt();
    assert_eq!(session.auth(), AuthState::Locked);

    // The splash can hand control back to the prompt again.
    session.splash_complete();
    assert_eq!(session.auth(), AuthState::Prompting);
    assert_eq!(session.submit_password(PASSWORD), AuthResult::Accepted);
}

#[test]
fn controller_state_survives_a_serde_round_trip() {
    let mut session = SessionController::new(PASSWORD);
    session.splash_complete();
    session.submit_password(PASSWORD);
    session.toggle_app("YouTube");
    session.ensure_time_limit("YouTube").unwrap();
    session.set_time_limit("YouTube", 2, 30, 0).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let mut restored: SessionController = serde_json::from_str(&json).unwrap();
    restored.set_password(PASSWORD);

    assert!(restored.is_authenticated());
    assert!(restored.is_selected("YouTube"));
    let limit = restored.time_limit("YouTube").unwrap();
    assert_eq!((limit.hours, limit.minutes, limit.seconds), (2, 30, 0));

    // The password is not part of the persisted payload.
    assert!(!json.contains(PASSWORD));
}

#[test]
fn formatted_label_tracks_the_countdown() {
    let mut session = SessionController::new(PASSWORD);
    let mut timer = CountdownTimer::new();

    session.toggle_app("Facebook");
    session.ensure_time_limit("Facebook").unwrap();
    session.set_time_limit("Facebook", 0, 1, 5).unwrap();
    session.start_countdown(&mut timer);

    timer.tick();
    assert_eq!(format_remaining(timer.remaining_secs()), "00h 01m 04s");
    for _ in 0..64 {
        timer.tick();
    }
    assert_eq!(format_remaining(timer.remaining_secs()), "00h 00m 00s");
    assert!(!timer.is_running());
}
