//! In-memory stand-ins for every external collaborator.

use crate::clock::Clock;
use crate::config::ConfigSource;
use crate::input::ClipboardReader;
use crate::store::FileStore;
use crate::title::{HttpFetcher, HttpResponse, ResolvedTitle, TitleFetchError, TitleResolver};
use chrono::{DateTime, Local, TimeZone};
use reqwest::Url;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    CreateDir(PathBuf),
    WriteNew(PathBuf, String),
    Append(PathBuf, String),
}

/// A `FileStore` that keeps files in a map and records every mutation.
#[derive(Default)]
pub struct MemoryStore {
    files: RefCell<HashMap<PathBuf, String>>,
    dirs: RefCell<HashSet<PathBuf>>,
    ops: RefCell<Vec<StoreOp>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn with_file(path: impl Into<PathBuf>, contents: &str) -> Self {
        let store = Self::default();
        store
            .files
            .borrow_mut()
            .insert(path.into(), contents.to_string());
        store
    }

    pub fn fail_reads(&self) {
        self.fail_reads.set(true);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn ops(&self) -> Vec<StoreOp> {
        self.ops.borrow().clone()
    }

    fn check_write(&self) -> io::Result<()> {
        if self.fail_writes.get() {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "write refused"))
        } else {
            Ok(())
        }
    }
}

impl FileStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_write()?;
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            dirs.insert(ancestor.to_path_buf());
        }
        self.ops
            .borrow_mut()
            .push(StoreOp::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        if self.fail_reads.get() {
            return Err(io::Error::new(io::ErrorKind::Other, "read refused"));
        }
        self.contents(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write_new(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_write()?;
        let mut files = self.files.borrow_mut();
        if files.contains_key(path) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        files.insert(path.to_path_buf(), contents.to_string());
        self.ops
            .borrow_mut()
            .push(StoreOp::WriteNew(path.to_path_buf(), contents.to_string()));
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_write()?;
        let mut files = self.files.borrow_mut();
        let existing = files
            .get_mut(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        existing.push_str(contents);
        self.ops
            .borrow_mut()
            .push(StoreOp::Append(path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        let t = Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .expect("valid local time");
        Self(t)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Answers every lookup with the same result and counts calls.
pub struct StubResolver {
    result: Result<ResolvedTitle, TitleFetchError>,
    calls: Cell<usize>,
}

impl StubResolver {
    pub fn title(title: &str, final_url: &str) -> Self {
        Self {
            result: Ok(ResolvedTitle {
                title: title.to_string(),
                final_url: final_url.to_string(),
            }),
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: TitleFetchError) -> Self {
        Self {
            result: Err(error),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TitleResolver for StubResolver {
    fn resolve_title(&self, _url: &str) -> Result<ResolvedTitle, TitleFetchError> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone()
    }
}

/// Serves canned responses per URL; anything unscripted is a network error.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, HttpResponse>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, url: &str, response: HttpResponse) -> Self {
        let key = Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string());
        self.responses.insert(key, response);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl HttpFetcher for ScriptedFetcher {
    fn get(&self, url: &Url) -> Result<HttpResponse, TitleFetchError> {
        self.calls.borrow_mut().push(url.to_string());
        self.responses
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| TitleFetchError::Network(format!("no route to {url}")))
    }
}

pub fn html_page(title: &str) -> String {
    format!("<!doctype html><html><head><title>{title}</title></head><body></body></html>")
}

pub fn ok_page(title: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        location: None,
        body: html_page(title),
    }
}

pub fn redirect(status: u16, location: &str) -> HttpResponse {
    HttpResponse {
        status,
        location: Some(location.to_string()),
        body: String::new(),
    }
}

pub struct StaticClipboard(Option<String>);

impl StaticClipboard {
    pub fn text(s: &str) -> Self {
        Self(Some(s.to_string()))
    }

    pub fn empty() -> Self {
        Self(None)
    }
}

impl ClipboardReader for StaticClipboard {
    fn read_text(&self) -> Option<String> {
        self.0.clone()
    }
}

pub struct MapConfigSource {
    home: Option<PathBuf>,
    files: HashMap<PathBuf, String>,
}

impl MapConfigSource {
    pub fn new(home: &str) -> Self {
        Self {
            home: Some(PathBuf::from(home)),
            files: HashMap::new(),
        }
    }

    pub fn homeless() -> Self {
        Self {
            home: None,
            files: HashMap::new(),
        }
    }

    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(PathBuf::from(path), contents.to_string());
        self
    }
}

impl ConfigSource for MapConfigSource {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
