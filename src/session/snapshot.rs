use super::model::{Session, SessionsResponse};

/// The locally held copy of the remote session list.
///
/// A snapshot is never edited in place. Each successful poll builds a new one
/// and swaps it in whole, so readers see either the old list or the new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub sessions: Vec<Session>,
    pub total_count: usize,
    pub waiting_count: usize,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Title-bar summary, e.g. `3 active · 1 waiting`. Empty when nothing runs.
    pub fn summary(&self) -> String {
        if self.total_count == 0 {
            return String::new();
        }
        if self.waiting_count > 0 {
            format!("{} active · {} waiting", self.total_count, self.waiting_count)
        } else {
            format!("{} active", self.total_count)
        }
    }
}

impl From<SessionsResponse> for SessionSnapshot {
    fn from(response: SessionsResponse) -> Self {
        Self {
            sessions: response.sessions,
            total_count: response.total_count,
            waiting_count: response.waiting_count,
        }
    }
}
