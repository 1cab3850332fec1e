use std::path::PathBuf;
use std::time::Duration;

use super::fake::{Call, FakeEngine};
use super::{Controller, EngineEvent, EventQueue};
use crate::app::App;
use crate::library::{Catalog, Track};

fn track(name: &str, secs: Option<u64>) -> Track {
    Track {
        path: PathBuf::from(format!("/music/{name}.mp3")),
        title: name.to_string(),
        duration: secs.map(Duration::from_secs),
    }
}

fn catalog(n: usize) -> Catalog {
    Catalog::new(
        (0..n)
            .map(|i| track(&format!("t{i}"), Some(180)))
            .collect(),
    )
}

fn path_of(c: &Catalog, i: usize) -> PathBuf {
    c.get(i).unwrap().path.clone()
}

#[test]
fn next_wraps_from_last_to_first() {
    let c = catalog(3);
    let mut app = App::new();
    let mut ctl = Controller::new(FakeEngine::new());

    app.current_index = 2;
    ctl.next(&mut app, &c).unwrap();
    assert_eq!(app.current_index, 0);
    assert_eq!(app.selection_index, 0);
    assert_eq!(ctl.engine().last_load(), Some((path_of(&c, 0), Duration::ZERO)));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let c = catalog(3);
    let mut app = App::new();
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.previous(&mut app, &c).unwrap();
    assert_eq!(app.current_index, 2);
    assert_eq!(app.selection_index, 2);
}

#[test]
fn play_resets_elapsed_and_paused() {
    let c = catalog(2);
    let mut app = App::new();
    app.elapsed = Duration::from_secs(99);
    app.paused = true;
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.next(&mut app, &c).unwrap();
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(!app.paused);
}

#[test]
fn play_selected_moves_now_playing_to_the_cursor() {
    let c = catalog(4);
    let mut app = App::new();
    app.selection_index = 3;
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.play_selected(&mut app, &c).unwrap();
    assert_eq!(app.current_index, 3);
    assert_eq!(ctl.engine().last_load().unwrap().0, path_of(&c, 3));
}

#[test]
fn failed_load_keeps_previous_track() {
    let c = catalog(3);
    let mut app = App::new();
    app.elapsed = Duration::from_secs(12);
    let mut ctl = Controller::new(FakeEngine::new().fail_on(path_of(&c, 1)));

    let err = ctl.next(&mut app, &c).unwrap_err();
    assert!(err.to_string().contains("t1"));
    assert_eq!(app.current_index, 0);
    assert_eq!(app.selection_index, 0);
    assert_eq!(app.elapsed, Duration::from_secs(12));
    assert!(ctl.engine().loads().is_empty());
}

#[test]
fn finished_with_repeat_replays_same_track() {
    let c = catalog(3);
    let mut app = App::new();
    app.repeat = true;
    app.current_index = 1;
    app.selection_index = 2;
    app.elapsed = Duration::from_secs(180);
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.on_track_finished(&mut app, &c).unwrap();
    assert_eq!(app.current_index, 1);
    assert_eq!(app.selection_index, 2);
    assert_eq!(app.elapsed, Duration::ZERO);
    assert_eq!(ctl.engine().last_load(), Some((path_of(&c, 1), Duration::ZERO)));
}

#[test]
fn finished_without_modes_advances_by_one() {
    let c = catalog(3);
    let mut app = App::new();
    let mut ctl = Controller::new(FakeEngine::new());

    for expected in [1, 2, 0, 1] {
        ctl.on_track_finished(&mut app, &c).unwrap();
        assert_eq!(app.current_index, expected);
        assert_eq!(app.selection_index, expected);
    }
}

#[test]
fn finished_with_shuffle_uses_picker() {
    let c = catalog(5);
    let mut app = App::new();
    app.shuffle = true;
    let mut ctl = Controller::with_picker(FakeEngine::new(), |len| len - 2);

    ctl.on_track_finished(&mut app, &c).unwrap();
    assert_eq!(app.current_index, 3);
    assert_eq!(app.selection_index, 3);
}

#[test]
fn finished_with_shuffle_stays_in_range_with_random_picker() {
    let c = catalog(4);
    let mut app = App::new();
    app.shuffle = true;
    let mut ctl = Controller::new(FakeEngine::new());

    for _ in 0..50 {
        ctl.on_track_finished(&mut app, &c).unwrap();
        assert!(app.current_index < c.len());
    }
}

#[test]
fn repeat_wins_over_shuffle() {
    let c = catalog(5);
    let mut app = App::new();
    app.repeat = true;
    app.shuffle = true;
    app.current_index = 2;
    let mut ctl = Controller::with_picker(FakeEngine::new(), |_| 0);

    ctl.on_track_finished(&mut app, &c).unwrap();
    assert_eq!(app.current_index, 2);
}

#[test]
fn seek_back_clamps_at_zero() {
    let c = catalog(1);
    let mut app = App::new();
    app.elapsed = Duration::from_secs(3);
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.seek(&mut app, &c, -5).unwrap();
    assert_eq!(app.elapsed, Duration::ZERO);
    assert_eq!(ctl.engine().last_load(), Some((path_of(&c, 0), Duration::ZERO)));
}

#[test]
fn seek_forward_restarts_from_offset() {
    let c = catalog(1);
    let mut app = App::new();
    app.elapsed = Duration::from_millis(10_500);
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.seek(&mut app, &c, 5).unwrap();
    assert_eq!(app.elapsed, Duration::from_millis(15_500));
    assert_eq!(
        ctl.engine().last_load(),
        Some((path_of(&c, 0), Duration::from_millis(15_500)))
    );
}

#[test]
fn seek_while_paused_pauses_again() {
    let c = catalog(1);
    let mut app = App::new();
    app.paused = true;
    app.elapsed = Duration::from_secs(20);
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.seek(&mut app, &c, 5).unwrap();
    assert!(app.paused);
    assert_eq!(ctl.engine().calls.last(), Some(&Call::Pause));
}

#[test]
fn failed_seek_keeps_elapsed() {
    let c = catalog(1);
    let mut app = App::new();
    app.elapsed = Duration::from_secs(20);
    let mut ctl = Controller::new(FakeEngine::new().fail_on(path_of(&c, 0)));

    assert!(ctl.seek(&mut app, &c, 5).is_err());
    assert_eq!(app.elapsed, Duration::from_secs(20));
}

#[test]
fn pause_and_resume_leave_elapsed_alone() {
    let c = catalog(1);
    let mut app = App::new();
    app.elapsed = Duration::from_secs(7);
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.toggle_pause(&mut app, &c);
    assert!(app.paused);
    ctl.toggle_pause(&mut app, &c);
    assert!(!app.paused);
    assert_eq!(app.elapsed, Duration::from_secs(7));
    assert_eq!(ctl.engine().calls, vec![Call::Pause, Call::Unpause]);
}

#[test]
fn stop_resets_elapsed_and_clears_paused() {
    let mut app = App::new();
    app.elapsed = Duration::from_secs(40);
    app.paused = true;
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.stop(&mut app);
    assert_eq!(app.elapsed, Duration::ZERO);
    assert!(!app.paused);
    assert_eq!(ctl.engine().calls, vec![Call::Stop]);
}

#[test]
fn volume_is_clamped_to_unit_range() {
    let mut app = App::new();
    app.volume = 0.98;
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.adjust_volume(&mut app, 0.05);
    assert_eq!(app.volume, 1.0);
    ctl.adjust_volume(&mut app, 0.05);
    assert_eq!(app.volume, 1.0);
    assert_eq!(ctl.engine().calls.last(), Some(&Call::Volume(1.0)));

    app.volume = 0.03;
    ctl.adjust_volume(&mut app, -0.05);
    assert_eq!(app.volume, 0.0);

    ctl.set_volume(&mut app, 7.0);
    assert_eq!(app.volume, 1.0);
    ctl.set_volume(&mut app, -1.0);
    assert_eq!(app.volume, 0.0);
}

#[test]
fn volume_steps_land_on_whole_percents() {
    let mut app = App::new();
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.adjust_volume(&mut app, 0.05);
    assert_eq!(app.volume_percent(), 75);
    ctl.adjust_volume(&mut app, -0.05);
    ctl.adjust_volume(&mut app, -0.05);
    assert_eq!(app.volume_percent(), 65);
}

#[test]
fn empty_catalog_makes_navigation_a_no_op() {
    let c = Catalog::default();
    let mut app = App::new();
    let mut ctl = Controller::new(FakeEngine::new());

    ctl.next(&mut app, &c).unwrap();
    ctl.previous(&mut app, &c).unwrap();
    ctl.play_selected(&mut app, &c).unwrap();
    ctl.seek(&mut app, &c, 5).unwrap();
    ctl.on_track_finished(&mut app, &c).unwrap();
    ctl.toggle_pause(&mut app, &c);

    assert_eq!(app.current_index, 0);
    assert!(!app.paused);
    assert!(ctl.engine().calls.is_empty());
}

#[test]
fn shutdown_stops_then_releases() {
    let mut ctl = Controller::new(FakeEngine::new());
    ctl.shutdown();
    assert_eq!(ctl.engine().calls, vec![Call::Stop, Call::Shutdown]);
    assert!(ctl.engine().shut_down);
}

#[test]
fn event_queue_is_bounded_and_drains_in_order() {
    let mut q = EventQueue::with_capacity(2);
    q.push(EngineEvent::TrackFinished);
    q.push(EngineEvent::TrackFinished);
    q.push(EngineEvent::TrackFinished);
    assert_eq!(q.len(), 2);
    assert_eq!(q.drain(), vec![EngineEvent::TrackFinished; 2]);
    assert!(q.is_empty());
}
