pub mod capture;
pub mod clock;
pub mod config;
pub mod entry;
pub mod error;
pub mod input;
pub mod link;
pub mod paths;
pub mod store;
pub mod tags;
pub mod title;

#[cfg(test)]
mod tests;

pub use capture::{CaptureOutcome, QuickCapture};
pub use clock::{Clock, SystemClock};
pub use config::{ConfigSource, HomeConfigSource, knowledge_base_path};
pub use error::{CaptureError, Result};
pub use input::{ClipboardReader, resolve_input};
pub use store::{FileStore, StdFileStore};
pub use title::{PageTitleResolver, ReqwestFetcher, TitleResolver};
