//! Timer engine: owns the countdown state and drives the tick scheduler

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    error::TimerError,
    scheduler::{Scheduler, TICK_PERIOD},
    state::{StatusSnapshot, TimerState, MAX_LIMIT_MINUTES, MIN_LIMIT_MINUTES},
};

/// Active scheduler registration, tagged so late ticks from an old one are ignored
struct Ticker<H> {
    generation: u64,
    handle: H,
}

struct EngineInner<S: Scheduler> {
    /// Countdown state. Lock order: `state` before `ticker`.
    state: Mutex<TimerState>,
    ticker: Mutex<Option<Ticker<S::Handle>>>,
    next_generation: AtomicU64,
    scheduler: S,
    /// Last action tracking
    last_action: Mutex<Option<String>>,
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for state change notifications
    update_tx: watch::Sender<StatusSnapshot>,
}

/// Countdown timer with start/pause, reset and limit adjustment.
///
/// Every mutation is published to [`TimerEngine::subscribe`] receivers.
/// Dropping the engine cancels any running tick registration.
pub struct TimerEngine<S: Scheduler> {
    inner: Arc<EngineInner<S>>,
}

impl<S: Scheduler> TimerEngine<S> {
    /// Create a paused engine with default state
    pub fn new(scheduler: S) -> Self {
        let state = TimerState::new();
        let (update_tx, _) = watch::channel(StatusSnapshot::from(&state));

        Self {
            inner: Arc::new(EngineInner {
                state: Mutex::new(state),
                ticker: Mutex::new(None),
                next_generation: AtomicU64::new(0),
                scheduler,
                last_action: Mutex::new(None),
                last_action_time: Mutex::new(None),
                update_tx,
            }),
        }
    }

    /// Toggle between running and paused.
    ///
    /// A completed countdown is rewound to zero before it is toggled.
    pub fn start_or_pause(&self) -> TimerState {
        let mut state = self.inner.lock_state();

        if state.is_completed() {
            debug!("Countdown was complete, rewinding elapsed time");
            state.elapsed_seconds = 0;
        }

        let action = if state.is_running {
            self.inner.cancel_ticker();
            info!("Timer paused at {}", state.remaining_time_formatted().trim_end());
            "pause"
        } else {
            EngineInner::start_ticker(&self.inner);
            info!(
                "Timer started with {} remaining",
                state.remaining_time_formatted().trim_end()
            );
            "start"
        };

        state.is_running = !state.is_running;
        self.inner.publish(Some(action), &state)
    }

    /// Advance the countdown by one second. Normally invoked by the scheduler.
    ///
    /// Completion is detected on the tick after the elapsed time reaches the
    /// limit: that tick stops the scheduler instead of incrementing.
    pub fn tick(&self) -> TimerState {
        let mut state = self.inner.lock_state();
        self.inner.apply_tick(&mut state)
    }

    /// Stop the countdown and restore the default state
    pub fn reset(&self) -> TimerState {
        let mut state = self.inner.lock_state();
        self.inner.cancel_ticker();
        *state = TimerState::new();
        info!("Timer reset");
        self.inner.publish(Some("reset"), &state)
    }

    /// Lower the limit by one minute, never below one minute
    pub fn decrease_limit(&self) -> Result<TimerState, TimerError> {
        self.adjust_limit("decrease-limit", |limit| {
            if limit > MIN_LIMIT_MINUTES {
                limit - 1
            } else {
                limit
            }
        })
    }

    /// Raise the limit by one minute
    pub fn increase_limit(&self) -> Result<TimerState, TimerError> {
        self.adjust_limit("increase-limit", |limit| (limit + 1).min(MAX_LIMIT_MINUTES))
    }

    fn adjust_limit<F>(&self, action: &str, adjust: F) -> Result<TimerState, TimerError>
    where
        F: FnOnce(u64) -> u64,
    {
        let mut state = self.inner.lock_state();

        if state.elapsed_seconds > 0 {
            warn!(
                "Rejecting {} while {}s have elapsed",
                action, state.elapsed_seconds
            );
            return Err(TimerError::LimitLocked {
                elapsed_seconds: state.elapsed_seconds,
            });
        }

        let previous = state.limit_minutes;
        state.limit_minutes = adjust(previous);
        if state.limit_minutes == previous {
            debug!("{} left the limit at {} min", action, previous);
        } else {
            info!("Timer limit changed from {} to {} min", previous, state.limit_minutes);
        }

        Ok(self.inner.publish(Some(action), &state))
    }

    /// Current state
    pub fn state(&self) -> TimerState {
        *self.inner.lock_state()
    }

    pub fn is_running(&self) -> bool {
        self.state().is_running
    }

    pub fn limit_minutes(&self) -> u64 {
        self.state().limit_minutes
    }

    /// Remaining time as `MM:SS `
    pub fn remaining_time_formatted(&self) -> String {
        self.state().remaining_time_formatted()
    }

    /// `Running` or `Paused`
    pub fn status_label(&self) -> &'static str {
        self.state().status_label()
    }

    /// Current state with derived values and last action information
    pub fn status(&self) -> StatusSnapshot {
        let state = self.inner.lock_state();
        self.inner.snapshot(&state)
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<StatusSnapshot> {
        self.inner.update_tx.subscribe()
    }

    /// Get last action information
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        self.inner.last_action()
    }
}

impl<S: Scheduler> Drop for TimerEngine<S> {
    fn drop(&mut self) {
        debug!("Timer engine dropped, cancelling ticker");
        self.inner.cancel_ticker();
    }
}

impl<S: Scheduler> EngineInner<S> {
    fn lock_state(&self) -> MutexGuard<'_, TimerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_ticker(&self) -> MutexGuard<'_, Option<Ticker<S::Handle>>> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a fresh tick stream, replacing any existing one
    fn start_ticker(this: &Arc<Self>) {
        let generation = this.next_generation.fetch_add(1, Ordering::Relaxed);
        let weak = Arc::downgrade(this);
        let handle = this.scheduler.schedule_every(
            TICK_PERIOD,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.scheduled_tick(generation);
                }
            }),
        );

        let previous = this.lock_ticker().replace(Ticker { generation, handle });
        if let Some(previous) = previous {
            warn!("Replacing ticker {} that was still registered", previous.generation);
            this.scheduler.cancel(previous.handle);
        }
        debug!("Ticker {} registered", generation);
    }

    fn cancel_ticker(&self) {
        let ticker = self.lock_ticker().take();
        if let Some(ticker) = ticker {
            debug!("Ticker {} cancelled", ticker.generation);
            self.scheduler.cancel(ticker.handle);
        }
    }

    fn scheduled_tick(&self, generation: u64) {
        let mut state = self.lock_state();

        let current = self.lock_ticker().as_ref().map(|ticker| ticker.generation);
        if current != Some(generation) {
            debug!("Ignoring late tick from ticker {}", generation);
            return;
        }

        self.apply_tick(&mut state);
    }

    fn apply_tick(&self, state: &mut TimerState) -> TimerState {
        let limit = state.limit_seconds();

        if state.elapsed_seconds == limit {
            self.cancel_ticker();
            state.is_running = false;
            info!("Timer completed after {} min", state.limit_minutes);
            self.publish(Some("complete"), state)
        } else {
            state.elapsed_seconds += 1;
            debug!("Tick: {} remaining", state.remaining_time_formatted().trim_end());
            self.publish(None, state)
        }
    }

    /// Record the action and notify watchers. Called with the state lock held
    /// so notifications are delivered in mutation order.
    fn publish(&self, action: Option<&str>, state: &TimerState) -> TimerState {
        if let Some(action) = action {
            *self.last_action.lock().unwrap_or_else(PoisonError::into_inner) =
                Some(action.to_string());
            *self.last_action_time.lock().unwrap_or_else(PoisonError::into_inner) =
                Some(Utc::now());
        }

        self.update_tx.send_replace(self.snapshot(state));
        *state
    }

    fn snapshot(&self, state: &TimerState) -> StatusSnapshot {
        let (last_action, last_action_time) = self.last_action();
        StatusSnapshot::new(state, last_action, last_action_time)
    }

    fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self
            .last_action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let last_action_time = *self
            .last_action_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        (last_action, last_action_time)
    }
}
