//! Text <-> byte boundary.
//!
//! Text is carried as UTF-8. Going back from bytes is total: anything that
//! is not valid UTF-8 becomes [`INVALID_TEXT`] instead of an error.

use tracing::debug;

/// Placeholder returned when decoded bytes are not valid UTF-8.
pub const INVALID_TEXT: &str = "[Invalid UTF-8]";

/// Encode text as UTF-8 bytes.
#[inline]
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes, substituting [`INVALID_TEXT`] for malformed input.
///
/// No replacement characters are produced; the whole result is either the
/// exact text or the placeholder.
pub fn bytes_to_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(err) => {
            debug!(
                valid_up_to = err.valid_up_to(),
                len = bytes.len(),
                "bytes are not valid UTF-8"
            );
            INVALID_TEXT.to_owned()
        }
    }
}

/// Escape control characters for terminal display.
///
/// Printable text, including non-ASCII, passes through unchanged; control
/// characters become Rust-style escapes (`\n`, `\u{14}`).
pub fn escape_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}
