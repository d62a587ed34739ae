//! Hand-driven scheduler for deterministic tests and simulations

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use super::{Scheduler, TickCallback};

/// Registration id handed out by [`ManualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManualHandle(u64);

struct Registration {
    period: Duration,
    callback: Arc<Mutex<TickCallback>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    registrations: BTreeMap<u64, Registration>,
}

/// Scheduler whose callbacks only run when [`ManualScheduler::fire`] is called.
///
/// Clones share the same registry, so a test can keep one clone while the
/// engine owns the other.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    registry: Arc<Mutex<Registry>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run every live callback once and return how many ran.
    ///
    /// Callbacks may cancel registrations (including their own) while running.
    pub fn fire(&self) -> usize {
        let ids: Vec<u64> = self.registry().registrations.keys().copied().collect();
        let mut fired = 0;

        for id in ids {
            // Re-check: an earlier callback may have cancelled this one
            let callback = match self.registry().registrations.get(&id) {
                Some(registration) => Arc::clone(&registration.callback),
                None => continue,
            };
            let mut guard = callback.lock().unwrap_or_else(PoisonError::into_inner);
            let tick: &mut TickCallback = &mut guard;
            tick();
            fired += 1;
        }

        fired
    }

    /// Fire `times` rounds, returning the total number of callbacks run
    pub fn fire_times(&self, times: usize) -> usize {
        (0..times).map(|_| self.fire()).sum()
    }

    /// Number of registrations that have not been cancelled
    pub fn active_count(&self) -> usize {
        self.registry().registrations.len()
    }

    /// Periods of the live registrations, in registration order
    pub fn periods(&self) -> Vec<Duration> {
        self.registry()
            .registrations
            .values()
            .map(|registration| registration.period)
            .collect()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_every(&self, period: Duration, callback: TickCallback) -> Self::Handle {
        let mut registry = self.registry();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.registrations.insert(
            id,
            Registration {
                period,
                callback: Arc::new(Mutex::new(callback)),
            },
        );
        ManualHandle(id)
    }

    fn cancel(&self, handle: Self::Handle) {
        self.registry().registrations.remove(&handle.0);
    }
}
