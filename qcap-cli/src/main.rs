mod cli;
mod clipboard;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use clipboard::SystemClipboard;
use qcap_core::{
    HomeConfigSource, PageTitleResolver, QuickCapture, ReqwestFetcher, StdFileStore, SystemClock,
    knowledge_base_path, resolve_input,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(path) => {
            println!("Successfully added to journal: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("qcap: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("qcap={level},qcap_core={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<PathBuf> {
    let input = resolve_input(cli.text.as_deref(), &SystemClipboard)?;
    let knowledge_base = match cli.knowledge_base {
        Some(kb) => kb,
        None => knowledge_base_path(&HomeConfigSource)?,
    };

    let store = StdFileStore;
    let clock = SystemClock;

    // Title lookup is optional; a client that cannot be built only costs the link text.
    let resolver = if cli.offline {
        None
    } else {
        match ReqwestFetcher::with_timeout(Duration::from_secs(cli.timeout)) {
            Ok(fetcher) => Some(PageTitleResolver::new(fetcher)),
            Err(error) => {
                warn!(%error, "page titles disabled");
                None
            }
        }
    };
    let capture = match &resolver {
        Some(resolver) => QuickCapture::new(&store, &clock, resolver),
        None => QuickCapture::offline(&store, &clock),
    };

    let outcome = capture.capture(&knowledge_base, &input, cli.tags.as_deref())?;
    Ok(outcome.path)
}
