use clap::Parser;
use qcap_core::title::DEFAULT_TIMEOUT;
use std::path::PathBuf;

/// qcap — Quick capture into a daily Markdown journal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Text to capture. Falls back to the clipboard when absent or empty.
    /// URLs are turned into `[title](url)` links when the page title can be fetched.
    #[arg()]
    pub text: Option<String>,
    /// Comma-separated tags (e.g. `qcap "Call Bob" "work, follow up"`).
    #[arg()]
    pub tags: Option<String>,
    /// Knowledge base root. Overrides the path stored in `~/.config/raycast/knowledge-base`.
    #[arg(long, env = "QCAP_KNOWLEDGE_BASE")]
    pub knowledge_base: Option<PathBuf>,
    /// Keep URLs as typed instead of fetching page titles.
    #[arg(long)]
    pub offline: bool,
    /// Seconds to wait for a page title before keeping the raw URL.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
    /// Log debug details (title lookups, redirects) to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}
