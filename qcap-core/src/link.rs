//! Turns captured URLs into Markdown links.

use crate::title::{TitleResolver, parse_http_url};
use tracing::debug;

/// True for `http`/`https` URLs given verbatim. Any whitespace disqualifies the
/// input: the URL parser would strip or percent-encode it, and the surrounding
/// note text would be lost behind the link.
pub fn is_url(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    parse_http_url(input).is_some()
}

/// `[title](final_url)` when `input` is a URL whose title resolves to something
/// non-blank; the input unchanged otherwise. Lookup failures never escape.
pub fn format_content_if_url(input: &str, resolver: &dyn TitleResolver) -> String {
    if !is_url(input) {
        return input.to_string();
    }

    match resolver.resolve_title(input) {
        Ok(resolved) if !resolved.title.trim().is_empty() => {
            format!("[{}]({})", resolved.title, resolved.final_url)
        }
        Ok(_) => {
            debug!(url = input, "blank page title, keeping raw URL");
            input.to_string()
        }
        Err(error) => {
            debug!(url = input, %error, "title lookup failed, keeping raw URL");
            input.to_string()
        }
    }
}
