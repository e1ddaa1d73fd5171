//! Read-time composition of session data with local overrides, plus the
//! display formatters used by session cards.

mod format;
mod merge;

pub use format::{display_url, format_time_ago, truncate_path};
pub use merge::{present, present_all, SessionView};
