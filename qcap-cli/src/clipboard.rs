use arboard::Clipboard;
use qcap_core::ClipboardReader;
use tracing::debug;

/// System clipboard via `arboard`. Access failures read as "no text".
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardReader for SystemClipboard {
    fn read_text(&self) -> Option<String> {
        match Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => Some(text),
            Err(error) => {
                debug!(%error, "clipboard has no readable text");
                None
            }
        }
    }
}
