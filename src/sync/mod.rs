//! Keeps a local copy of the host's session list fresh.

mod engine;
mod scheduler;

pub use engine::{SessionSyncEngine, SyncView, DEFAULT_POLL_INTERVAL};
pub use scheduler::{PollHandle, PollScheduler, MAX_IN_FLIGHT};
