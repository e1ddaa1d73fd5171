//! Remote-call boundary to the host process
//!
//! The host owns session discovery, status classification, window focusing,
//! the tray indicator and the OS-level global shortcut. This crate only sees it
//! through [`HostBridge`]. Errors cross the boundary as human-readable strings,
//! the same shape the host's command handlers return.

use crate::session::SessionsResponse;

pub trait HostBridge: Send + Sync {
    /// List every active session with aggregate counts.
    fn list_sessions(&self) -> Result<SessionsResponse, String>;

    /// Bring the terminal hosting `pid` (or, failing that, `project_path`) to front.
    fn focus_session(&self, pid: u32, project_path: &str) -> Result<(), String>;

    /// Push aggregate counts to the tray indicator.
    fn update_indicator(&self, total: usize, waiting: usize) -> Result<(), String>;

    /// Register `shortcut` (e.g. `Option+Space`) as the global toggle hotkey.
    fn register_shortcut(&self, shortcut: &str) -> Result<(), String>;

    /// Unregister the current global hotkey, if any.
    fn unregister_shortcut(&self) -> Result<(), String>;
}
