//! Countdown behaviour through the public engine API
//!
//! Ticks are delivered by a `ManualScheduler`, so no test waits on a clock.

use digital_timer::{ManualScheduler, TimerEngine, TimerError, TimerState};

fn new_engine() -> (TimerEngine<ManualScheduler>, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    (TimerEngine::new(scheduler.clone()), scheduler)
}

/// Lower the limit from the default to `minutes`
fn set_limit(engine: &TimerEngine<ManualScheduler>, minutes: u64) {
    while engine.limit_minutes() > minutes {
        engine.decrease_limit().unwrap();
    }
    while engine.limit_minutes() < minutes {
        engine.increase_limit().unwrap();
    }
}

fn assert_elapsed_in_range(state: &TimerState) {
    assert!(state.elapsed_seconds <= state.limit_seconds(), "{:?}", state);
}

#[test]
fn test_default_readout() {
    let (engine, _) = new_engine();
    assert_eq!(engine.state(), TimerState::default());
    assert_eq!(engine.remaining_time_formatted(), "25:00 ");
    assert_eq!(engine.status_label(), "Paused");
    assert!(!engine.is_running());
}

#[test]
fn test_start_and_one_tick() {
    let (engine, scheduler) = new_engine();

    engine.start_or_pause();
    assert_eq!(scheduler.fire(), 1);

    assert_eq!(engine.state().elapsed_seconds, 1);
    assert_eq!(engine.remaining_time_formatted(), "24:59 ");
    assert_eq!(engine.status_label(), "Running");
}

#[test]
fn test_completion_is_detected_one_tick_late() {
    let (engine, scheduler) = new_engine();
    set_limit(&engine, 1);
    engine.start_or_pause();

    scheduler.fire_times(60);
    let state = engine.state();
    assert_eq!(state.elapsed_seconds, 60);
    assert!(state.is_running);
    assert_eq!(engine.remaining_time_formatted(), "00:00 ");
    assert_eq!(scheduler.active_count(), 1);

    scheduler.fire();
    let state = engine.state();
    assert!(!state.is_running);
    assert_eq!(state.elapsed_seconds, 60);
    assert_eq!(engine.status_label(), "Paused");
    assert_eq!(scheduler.active_count(), 0);
    assert_eq!(engine.status().last_action.as_deref(), Some("complete"));

    // Nothing left to fire
    assert_eq!(scheduler.fire(), 0);
    assert_eq!(engine.state().elapsed_seconds, 60);
}

#[test]
fn test_direct_ticks_complete_the_countdown() {
    let (engine, scheduler) = new_engine();
    set_limit(&engine, 1);
    engine.start_or_pause();

    for _ in 0..61 {
        engine.tick();
    }
    assert!(!engine.is_running());
    assert_eq!(scheduler.active_count(), 0);
}

#[test]
fn test_restart_after_completion_rewinds() {
    let (engine, scheduler) = new_engine();
    set_limit(&engine, 1);
    engine.start_or_pause();
    scheduler.fire_times(61);
    assert!(!engine.is_running());

    let state = engine.start_or_pause();
    assert!(state.is_running);
    assert_eq!(state.elapsed_seconds, 0);
    assert_eq!(state.limit_minutes, 1);
    assert_eq!(engine.remaining_time_formatted(), "01:00 ");
    assert_eq!(scheduler.active_count(), 1);
}

#[test]
fn test_limit_adjustment() {
    let (engine, _) = new_engine();
    assert_eq!(engine.increase_limit().unwrap().limit_minutes, 26);

    let (engine, _) = new_engine();
    assert_eq!(engine.decrease_limit().unwrap().limit_minutes, 24);
    assert_eq!(engine.decrease_limit().unwrap().limit_minutes, 23);
}

#[test]
fn test_limit_never_below_one() {
    let (engine, _) = new_engine();
    for _ in 0..40 {
        engine.decrease_limit().unwrap();
    }
    assert_eq!(engine.limit_minutes(), 1);
    assert_eq!(engine.remaining_time_formatted(), "01:00 ");
}

#[test]
fn test_limit_has_no_small_upper_bound() {
    let (engine, _) = new_engine();
    for _ in 0..200 {
        engine.increase_limit().unwrap();
    }
    assert_eq!(engine.limit_minutes(), 225);
    assert_eq!(engine.remaining_time_formatted(), "225:00 ");
}

#[test]
fn test_limit_locked_once_time_elapsed() {
    let (engine, scheduler) = new_engine();
    engine.start_or_pause();
    scheduler.fire_times(5);

    let locked = TimerError::LimitLocked { elapsed_seconds: 5 };
    assert_eq!(engine.increase_limit(), Err(locked.clone()));
    assert_eq!(engine.decrease_limit(), Err(locked));
    assert_eq!(engine.limit_minutes(), 25);

    // Pausing does not unlock the limit, only a reset does
    engine.start_or_pause();
    assert!(engine.increase_limit().is_err());
    engine.reset();
    assert_eq!(engine.increase_limit().unwrap().limit_minutes, 26);
}

#[test]
fn test_limit_adjustable_while_running_before_first_tick() {
    let (engine, _) = new_engine();
    engine.start_or_pause();
    assert_eq!(engine.increase_limit().unwrap().limit_minutes, 26);
}

#[test]
fn test_start_then_pause_without_ticks() {
    let (engine, scheduler) = new_engine();

    engine.start_or_pause();
    assert_eq!(scheduler.active_count(), 1);
    let state = engine.start_or_pause();

    assert!(!state.is_running);
    assert_eq!(state.elapsed_seconds, 0);
    assert_eq!(scheduler.active_count(), 0);
}

#[test]
fn test_pause_keeps_elapsed_and_resume_continues() {
    let (engine, scheduler) = new_engine();
    engine.start_or_pause();
    scheduler.fire_times(3);
    engine.start_or_pause();

    assert_eq!(scheduler.fire(), 0);
    assert_eq!(engine.state().elapsed_seconds, 3);

    engine.start_or_pause();
    scheduler.fire();
    assert_eq!(engine.state().elapsed_seconds, 4);
    assert_eq!(engine.remaining_time_formatted(), "24:56 ");
}

#[test]
fn test_at_most_one_tick_stream() {
    let (engine, scheduler) = new_engine();
    for _ in 0..5 {
        engine.start_or_pause();
        engine.start_or_pause();
    }
    engine.start_or_pause();

    assert_eq!(scheduler.active_count(), 1);
    assert_eq!(scheduler.fire(), 1);
    assert_eq!(engine.state().elapsed_seconds, 1);
}

#[test]
fn test_reset_restores_defaults_and_is_idempotent() {
    let (engine, scheduler) = new_engine();
    engine.increase_limit().unwrap();
    engine.start_or_pause();
    scheduler.fire_times(10);

    let once = engine.reset();
    assert_eq!(once, TimerState::default());
    assert_eq!(scheduler.active_count(), 0);

    let twice = engine.reset();
    assert_eq!(twice, once);
    assert_eq!(engine.state(), TimerState::default());
}

#[test]
fn test_reset_when_idle_is_safe() {
    let (engine, scheduler) = new_engine();
    assert_eq!(engine.reset(), TimerState::default());
    assert_eq!(scheduler.active_count(), 0);
}

#[test]
fn test_drop_cancels_running_ticker() {
    let (engine, scheduler) = new_engine();
    engine.start_or_pause();
    assert_eq!(scheduler.active_count(), 1);

    drop(engine);
    assert_eq!(scheduler.active_count(), 0);
    assert_eq!(scheduler.fire(), 0);
}

#[test]
fn test_elapsed_stays_in_range_through_mixed_operations() {
    let (engine, scheduler) = new_engine();
    set_limit(&engine, 2);

    for round in 0..300 {
        match round % 7 {
            0 => {
                engine.start_or_pause();
            }
            3 if round % 5 == 0 => {
                engine.reset();
                set_limit(&engine, 2);
            }
            5 => {
                let before = engine.limit_minutes();
                if engine.increase_limit().is_err() {
                    assert_eq!(engine.limit_minutes(), before);
                }
            }
            _ => {
                scheduler.fire();
            }
        }

        let state = engine.state();
        assert_elapsed_in_range(&state);
        if state.is_completed() && scheduler.active_count() == 0 {
            assert!(!state.is_running);
        }
    }
}
