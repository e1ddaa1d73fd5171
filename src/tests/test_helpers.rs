use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use crate::bridge::HostBridge;
use crate::error::StorageError;
use crate::session::{Session, SessionStatus, SessionsResponse};
use crate::storage::{KeyValueStore, MemoryStore};

pub const TEST_PID: u32 = 12345;
pub const TEST_CPU_USAGE: f32 = 0.0;

/// Build a session with the fields tests care about
pub fn make_session(id: &str, project_name: &str, status: SessionStatus) -> Session {
    Session {
        id: id.to_string(),
        project_name: project_name.to_string(),
        project_path: format!("/Users/test/Projects/{}", project_name),
        git_branch: Some("main".to_string()),
        github_url: None,
        status,
        last_message: None,
        last_message_role: None,
        last_activity_at: chrono::Utc::now().to_rfc3339(),
        pid: TEST_PID,
        cpu_usage: TEST_CPU_USAGE,
    }
}

/// Response with counts derived from the sessions
pub fn make_response(sessions: Vec<Session>) -> SessionsResponse {
    let waiting_count = sessions
        .iter()
        .filter(|session| session.status == SessionStatus::Waiting)
        .count();
    SessionsResponse {
        total_count: sessions.len(),
        waiting_count,
        sessions,
    }
}

/// Poll `condition` until it holds or `timeout` passes
pub fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

type ScriptedFetch = (Duration, Result<SessionsResponse, String>);

/// Scripted host bridge that records every call.
///
/// `list_sessions` pops scripted results in order; once the script runs out
/// it returns an empty response.
#[derive(Default)]
pub struct MockBridge {
    script: Mutex<VecDeque<ScriptedFetch>>,
    list_delay: Mutex<Duration>,
    pub list_calls: AtomicUsize,
    pub indicator_calls: Mutex<Vec<(usize, usize)>>,
    pub focus_calls: Mutex<Vec<(u32, String)>>,
    pub registered: Mutex<Vec<String>>,
    pub unregister_calls: AtomicUsize,
    indicator_error: Mutex<Option<String>>,
    focus_error: Mutex<Option<String>>,
    register_error: Mutex<Option<String>>,
    unregister_error: Mutex<Option<String>>,
}

impl MockBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, response: SessionsResponse) {
        self.push_delayed(Duration::ZERO, Ok(response));
    }

    pub fn push_err(&self, message: &str) {
        self.push_delayed(Duration::ZERO, Err(message.to_string()));
    }

    pub fn push_delayed(&self, delay: Duration, result: Result<SessionsResponse, String>) {
        self.script.lock().unwrap().push_back((delay, result));
    }

    /// Delay applied to every unscripted `list_sessions` call
    pub fn set_list_delay(&self, delay: Duration) {
        *self.list_delay.lock().unwrap() = delay;
    }

    pub fn fail_indicator(&self, message: &str) {
        *self.indicator_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_focus(&self, message: &str) {
        *self.focus_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_register(&self, message: &str) {
        *self.register_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_unregister(&self, message: &str) {
        *self.unregister_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn registered(&self) -> Vec<String> {
        self.registered.lock().unwrap().clone()
    }

    fn scripted_error(slot: &Mutex<Option<String>>) -> Result<(), String> {
        match slot.lock().unwrap().clone() {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

impl HostBridge for MockBridge {
    fn list_sessions(&self) -> Result<SessionsResponse, String> {
        let next = self.script.lock().unwrap().pop_front();
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match next {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                result
            }
            None => {
                let delay = *self.list_delay.lock().unwrap();
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                Ok(SessionsResponse::default())
            }
        }
    }

    fn focus_session(&self, pid: u32, project_path: &str) -> Result<(), String> {
        self.focus_calls
            .lock()
            .unwrap()
            .push((pid, project_path.to_string()));
        Self::scripted_error(&self.focus_error)
    }

    fn update_indicator(&self, total: usize, waiting: usize) -> Result<(), String> {
        self.indicator_calls.lock().unwrap().push((total, waiting));
        Self::scripted_error(&self.indicator_error)
    }

    fn register_shortcut(&self, shortcut: &str) -> Result<(), String> {
        Self::scripted_error(&self.register_error)?;
        self.registered.lock().unwrap().push(shortcut.to_string());
        Ok(())
    }

    fn unregister_shortcut(&self) -> Result<(), String> {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        Self::scripted_error(&self.unregister_error)
    }
}

/// Memory store that counts writes
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    pub writes: AtomicUsize,
}

impl CountingStore {
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for CountingStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove_item(key)
    }
}

/// Store whose reads always fail
pub struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
