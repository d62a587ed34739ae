//! Scheduler backed by a tokio interval task

use std::time::Duration;
use tokio::{
    runtime::{Handle, TryCurrentError},
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::debug;

use super::{Scheduler, TickCallback};

/// Runs each registration as its own task on a tokio runtime
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    /// Create a scheduler bound to the runtime of the calling context
    pub fn new() -> Result<Self, TryCurrentError> {
        Ok(Self::with_handle(Handle::try_current()?))
    }

    /// Create a scheduler that spawns onto the given runtime
    pub fn with_handle(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule_every(&self, period: Duration, mut callback: TickCallback) -> Self::Handle {
        debug!("Registering tick task every {:?}", period);

        self.runtime.spawn(async move {
            // interval() would complete its first tick immediately
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                callback();
            }
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        debug!("Cancelling tick task");
        handle.abort();
    }
}
