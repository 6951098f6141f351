//! Page title lookup for captured URLs.
//!
//! [`PageTitleResolver`] owns the protocol logic (scheme checks, redirect
//! following, status handling, `<title>` extraction) and delegates the raw
//! request to an [`HttpFetcher`]. Production code plugs in [`ReqwestFetcher`].

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use std::error::Error as _;
use std::io::Read;
use std::time::Duration;
use tracing::debug;

/// Redirect hops followed before giving up.
pub const MAX_REDIRECTS: usize = 10;
/// Upper bound for a single request, connect time included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Only this much of a page is read; `<title>` sits in the head.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

const USER_AGENT: &str = concat!("qcap/", env!("CARGO_PKG_VERSION"));

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title\s*>").expect("valid title regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleFetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("resource unavailable (HTTP {0})")]
    UnavailableResource(u16),
    #[error("page has no <title> element")]
    MissingTitle,
    #[error("stopped after {0} redirects")]
    TooManyRedirects(usize),
    #[error("network error: {0}")]
    Network(String),
}

/// A decoded page title and the URL it was finally served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub title: String,
    pub final_url: String,
}

pub trait TitleResolver {
    fn resolve_title(&self, url: &str) -> Result<ResolvedTitle, TitleFetchError>;
}

/// What the resolver needs from a single, non-redirecting GET.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

/// Performs one HTTP GET without following redirects.
pub trait HttpFetcher {
    fn get(&self, url: &Url) -> Result<HttpResponse, TitleFetchError>;
}

/// Parses `input` and accepts it only when the scheme is `http` or `https`.
pub fn parse_http_url(input: &str) -> Option<Url> {
    let url = Url::parse(input).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 307 | 308)
}

pub struct PageTitleResolver<F> {
    fetcher: F,
    max_redirects: usize,
}

impl<F: HttpFetcher> PageTitleResolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            max_redirects: MAX_REDIRECTS,
        }
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}

impl<F: HttpFetcher> TitleResolver for PageTitleResolver<F> {
    fn resolve_title(&self, url: &str) -> Result<ResolvedTitle, TitleFetchError> {
        let mut current =
            parse_http_url(url).ok_or_else(|| TitleFetchError::InvalidUrl(url.to_string()))?;
        // Reported verbatim unless a redirect moves us elsewhere.
        let mut final_url = url.to_string();
        let mut hops = 0;

        loop {
            let response = self.fetcher.get(&current)?;

            if is_redirect(response.status) {
                if let Some(location) = response.location.as_deref() {
                    if hops == self.max_redirects {
                        return Err(TitleFetchError::TooManyRedirects(self.max_redirects));
                    }
                    hops += 1;
                    let next = current
                        .join(location)
                        .ok()
                        .filter(|u| matches!(u.scheme(), "http" | "https"))
                        .ok_or_else(|| TitleFetchError::InvalidUrl(location.to_string()))?;
                    debug!(from = %current, to = %next, status = response.status, "following redirect");
                    final_url = next.to_string();
                    current = next;
                    continue;
                }
            }

            if response.status != 200 {
                return Err(TitleFetchError::UnavailableResource(response.status));
            }

            let title = extract_title(&response.body)?;
            return Ok(ResolvedTitle { title, final_url });
        }
    }
}

/// Finds the first `<title>` element, decodes entities and trims it.
///
/// Internal whitespace runs (including newlines) collapse to one space so the
/// title always fits on a single journal line.
pub fn extract_title(html: &str) -> Result<String, TitleFetchError> {
    let raw = TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(TitleFetchError::MissingTitle)?;
    let decoded = html_escape::decode_html_entities(raw);
    Ok(WHITESPACE_RE.replace_all(decoded.trim(), " ").into_owned())
}

/// Blocking `reqwest` client with redirects disabled; [`PageTitleResolver`] follows them.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn with_timeout(timeout: Duration) -> Result<Self, TitleFetchError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(network_error)?;
        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn get(&self, url: &Url) -> Result<HttpResponse, TitleFetchError> {
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .map_err(network_error)?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = if status == 200 {
            let mut bytes = Vec::new();
            response
                .take(MAX_BODY_BYTES)
                .read_to_end(&mut bytes)
                .map_err(|e| TitleFetchError::Network(e.to_string()))?;
            String::from_utf8_lossy(&bytes).into_owned()
        } else {
            String::new()
        };

        Ok(HttpResponse {
            status,
            location,
            body,
        })
    }
}

/// Flattens the error chain so the cause (DNS, timeout, reset...) survives.
fn network_error(e: reqwest::Error) -> TitleFetchError {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TitleFetchError::Network(message)
}
