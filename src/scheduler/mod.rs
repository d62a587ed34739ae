//! Tick scheduling module
//!
//! The engine never owns a clock. It registers a recurring callback with a
//! [`Scheduler`] and cancels the registration when the countdown stops.

pub mod interval;
pub mod manual;

use std::time::Duration;

// Re-export main types
pub use interval::TokioScheduler;
pub use manual::{ManualHandle, ManualScheduler};

/// Cadence of the countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Callback invoked on every scheduled tick
pub type TickCallback = Box<dyn FnMut() + Send + 'static>;

/// Capability to run a callback periodically and to cancel it again
pub trait Scheduler: Send + Sync + 'static {
    /// Identifies one registration
    type Handle: Send + 'static;

    /// Register `callback` to run every `period`, starting one period from now
    fn schedule_every(&self, period: Duration, callback: TickCallback) -> Self::Handle;

    /// Cancel a registration. Cancelling a finished registration is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
