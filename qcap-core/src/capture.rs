//! The capture pipeline: enrich the text, render a line, append it to today's journal.

use crate::clock::Clock;
use crate::entry::{format_journal_entry, format_timestamp};
use crate::error::Result;
use crate::link::format_content_if_url;
use crate::paths::{day_path, journals_dir};
use crate::store::{FileStore, append_line, ensure_dir};
use crate::tags::normalize_tags;
use crate::title::TitleResolver;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a capture landed and what was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub path: PathBuf,
    pub line: String,
}

/// Wires the collaborators for a single capture.
///
/// Nothing here reaches for process-wide state: the caller chooses the
/// filesystem, the clock and (optionally) the title resolver.
pub struct QuickCapture<'a> {
    store: &'a dyn FileStore,
    clock: &'a dyn Clock,
    resolver: Option<&'a dyn TitleResolver>,
}

impl<'a> QuickCapture<'a> {
    pub fn new(
        store: &'a dyn FileStore,
        clock: &'a dyn Clock,
        resolver: &'a dyn TitleResolver,
    ) -> Self {
        Self {
            store,
            clock,
            resolver: Some(resolver),
        }
    }

    /// A pipeline that never looks up page titles; URLs are kept as typed.
    pub fn offline(store: &'a dyn FileStore, clock: &'a dyn Clock) -> Self {
        Self {
            store,
            clock,
            resolver: None,
        }
    }

    /// Appends one entry to `{knowledge_base}/journals/{yyyy_mm_dd}.md`.
    ///
    /// # Arguments
    ///
    /// * `content` - the captured text; an `http(s)` URL is turned into a Markdown link when possible.
    /// * `raw_tags` - optional comma-separated tags (e.g. `work, deep work`).
    pub fn capture(
        &self,
        knowledge_base: &Path,
        content: &str,
        raw_tags: Option<&str>,
    ) -> Result<CaptureOutcome> {
        let content = match self.resolver {
            Some(resolver) => format_content_if_url(content, resolver),
            None => content.to_string(),
        };
        let tags = raw_tags.and_then(normalize_tags);

        // Date and time come from the same instant so a capture at midnight stays consistent.
        let now = self.clock.now();
        let timestamp = format_timestamp(now.time());
        let line = format_journal_entry(&content, tags.as_deref(), &timestamp);

        let dir = journals_dir(knowledge_base);
        ensure_dir(self.store, &dir)?;

        let path = day_path(knowledge_base, now.date_naive());
        append_line(self.store, &path, &line)?;
        info!(path = %path.display(), "appended journal entry");

        Ok(CaptureOutcome { path, line })
    }
}
