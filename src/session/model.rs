use serde::{Deserialize, Serialize};

/// One running coding-agent session as reported by the host.
///
/// `id` is stable for the lifetime of the underlying process; two records with
/// the same id describe the same session even if every other field changed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub project_name: String,
    pub project_path: String,
    pub git_branch: Option<String>,
    pub github_url: Option<String>,
    pub status: SessionStatus,
    pub last_message: Option<String>,
    pub last_message_role: Option<MessageRole>,
    pub last_activity_at: String,
    pub pid: u32,
    pub cpu_usage: f32,
}

/// Status of a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Waiting,
    Thinking,
    Processing,
    Idle,
}

impl SessionStatus {
    /// Human-readable label shown on a session card
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::Waiting => "Waiting for input",
            SessionStatus::Thinking => "Thinking...",
            SessionStatus::Processing => "Processing",
            SessionStatus::Idle => "Idle",
        }
    }
}

/// Author of the last message in a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Response of the host's "list sessions" call
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionsResponse {
    pub sessions: Vec<Session>,
    pub total_count: usize,
    pub waiting_count: usize,
}
