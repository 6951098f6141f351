//! Tag annotation helpers.
//!
//! Input:  `work,, spaced tag `
//! Output: `#work #[[spaced tag]]`

/// Split a comma-separated tag string into trimmed, non-empty tokens, keeping input order.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// `#tag`, or `#[[multi word tag]]` when the token contains whitespace.
pub fn render_tag(tag: &str) -> String {
    if tag.chars().any(char::is_whitespace) {
        format!("#[[{tag}]]")
    } else {
        format!("#{tag}")
    }
}

/// Normalize a raw tag argument into a space-separated annotation string.
/// Returns `None` when no usable tag remains.
pub fn normalize_tags(raw: &str) -> Option<String> {
    let rendered: Vec<String> = parse_tags(raw).iter().map(|t| render_tag(t)).collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join(" "))
    }
}
