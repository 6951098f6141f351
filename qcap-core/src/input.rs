use crate::error::{CaptureError, Result};

/// Read access to the system clipboard's text.
pub trait ClipboardReader {
    /// `None` when the clipboard holds no text or cannot be read.
    fn read_text(&self) -> Option<String>;
}

/// A non-empty argument wins; otherwise non-empty clipboard text.
pub fn resolve_input(arg: Option<&str>, clipboard: &dyn ClipboardReader) -> Result<String> {
    if let Some(text) = arg.filter(|a| !a.is_empty()) {
        return Ok(text.to_string());
    }
    clipboard
        .read_text()
        .filter(|c| !c.is_empty())
        .ok_or(CaptureError::InputUnavailable)
}
