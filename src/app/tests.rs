use super::*;
use crate::config::{PlaybackSettings, UiSettings};
use std::time::{Duration, Instant};

#[test]
fn new_session_matches_documented_defaults() {
    let app = App::new();
    assert_eq!(app.current_index, 0);
    assert_eq!(app.selection_index, 0);
    assert!(!app.paused);
    assert!(!app.repeat);
    assert!(!app.shuffle);
    assert_eq!(app.volume, 0.7);
    assert_eq!(app.elapsed, Duration::ZERO);
    assert_eq!(app.viz_phase, 0.0);
    assert!(app.status_message.is_empty());
    assert!(!app.show_keys);
}

#[test]
fn from_settings_applies_startup_toggles_and_clamps_volume() {
    let playback = PlaybackSettings {
        volume: 3.0,
        repeat: true,
        shuffle: true,
        ..PlaybackSettings::default()
    };
    let ui = UiSettings {
        show_keys: true,
        ..UiSettings::default()
    };
    let app = App::from_settings(&playback, &ui);
    assert_eq!(app.volume, 1.0);
    assert!(app.repeat);
    assert!(app.shuffle);
    assert!(app.show_keys);
}

#[test]
fn advance_clock_moves_elapsed_and_phase_together() {
    let mut app = App::new();
    app.advance_clock(Duration::from_millis(500));
    assert_eq!(app.elapsed, Duration::from_millis(500));
    assert!((app.viz_phase - 2.0).abs() < 1e-9);
}

#[test]
fn selection_moves_are_clamped_without_wraparound() {
    let mut app = App::new();
    app.select_up();
    assert_eq!(app.selection_index, 0);

    app.select_down(3);
    app.select_down(3);
    app.select_down(3);
    assert_eq!(app.selection_index, 2);

    app.select_down(0);
    assert_eq!(app.selection_index, 0);
}

#[test]
fn status_message_expires_after_its_deadline() {
    let mut app = App::new();
    let t0 = Instant::now();
    app.set_status("hello", t0, Duration::from_secs(2));

    app.expire_status(t0 + Duration::from_secs(1));
    assert_eq!(app.status_message, "hello");

    app.expire_status(t0 + Duration::from_secs(3));
    assert!(app.status_message.is_empty());
}

#[test]
fn input_guard_window() {
    let mut app = App::new();
    let t0 = Instant::now();
    assert!(!app.input_blocked(t0));

    app.block_input(t0, Duration::from_millis(150));
    assert!(app.input_blocked(t0 + Duration::from_millis(100)));
    assert!(!app.input_blocked(t0 + Duration::from_millis(151)));
}

#[test]
fn reset_for_new_catalog_rewinds_everything_positional() {
    let mut app = App::new();
    app.current_index = 4;
    app.selection_index = 2;
    app.paused = true;
    app.elapsed = Duration::from_secs(30);
    app.repeat = true;

    app.reset_for_new_catalog();
    assert_eq!(app.current_index, 0);
    assert_eq!(app.selection_index, 0);
    assert!(!app.paused);
    assert_eq!(app.elapsed, Duration::ZERO);
    // Modes survive a catalog swap.
    assert!(app.repeat);
}

#[test]
fn volume_percent_rounds() {
    let mut app = App::new();
    app.volume = 0.75;
    assert_eq!(app.volume_percent(), 75);
    app.volume = 0.7;
    assert_eq!(app.volume_percent(), 70);
}
