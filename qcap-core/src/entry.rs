//! Journal line rendering.
//!
//! `- TODO **HH:MM** <content> [#user #tags] #[[raycast quick capture]]`

use chrono::NaiveTime;

/// Appended to every captured line.
pub const DEFAULT_TAG: &str = "#[[raycast quick capture]]";

/// `22:13`
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Render one newline-terminated journal line.
pub fn format_journal_entry(content: &str, user_tags: Option<&str>, timestamp: &str) -> String {
    match user_tags {
        Some(tags) => format!("- TODO **{timestamp}** {content} {tags} {DEFAULT_TAG}\n"),
        None => format!("- TODO **{timestamp}** {content} {DEFAULT_TAG}\n"),
    }
}
