//! Client-side session browser core.
//!
//! Keeps a polled copy of the host's running agent sessions, layers local
//! name/URL overrides on top for display, and records the global hotkey.

pub mod bridge;
pub mod config;
pub mod deck;
pub mod error;
pub mod hotkey;
pub mod logging;
pub mod overrides;
pub mod presentation;
pub mod session;
pub mod storage;
pub mod sync;

#[cfg(test)]
mod tests;

pub use bridge::HostBridge;
pub use config::DeckConfig;
pub use deck::SessionDeck;
pub use error::StorageError;
pub use overrides::{OverrideKind, OverrideStore};
pub use session::{Session, SessionSnapshot, SessionStatus, SessionsResponse};
pub use sync::SessionSyncEngine;
