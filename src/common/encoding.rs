//! Text decoding for raw document bytes.
//!
//! RTF is nominally 7-bit ASCII, but files found in the wild carry UTF-8,
//! byte order marks, or raw Windows-1252 bytes outside the `\'hh` escapes.

use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;

/// Decode document bytes into text.
///
/// A byte order mark selects its encoding and is dropped. Without one the
/// bytes are taken as UTF-8 when valid (borrowed, no copy) and as
/// Windows-1252 otherwise, which never fails.
///
/// # Examples
///
/// ```
/// use rtfdoc::common::encoding::decode_text;
///
/// assert_eq!(decode_text(b"{\\rtf1 plain}"), "{\\rtf1 plain}");
/// assert_eq!(decode_text(b"caf\xe9"), "caf\u{e9}");
/// ```
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            log::debug!("{} input contained malformed sequences", encoding.name());
        }
        return text;
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            log::debug!("input is not valid UTF-8, decoding as windows-1252");
            WINDOWS_1252.decode_without_bom_handling(bytes).0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_is_borrowed() {
        let decoded = decode_text("{\\rtf1 \u{4e2d}}".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "{\\rtf1 \u{4e2d}}");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        assert_eq!(decode_text(b"\xEF\xBB\xBF{\\rtf1}"), "{\\rtf1}");
    }

    #[test]
    fn test_utf16le_bom() {
        let bytes = [0xFF, 0xFE, b'{', 0, b'\\', 0, b'r', 0, b't', 0, b'f', 0];
        assert_eq!(decode_text(&bytes), "{\\rtf");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0x93/0x94 are curly quotes in cp1252, invalid as UTF-8
        assert_eq!(decode_text(b"\x93hi\x94"), "\u{201c}hi\u{201d}");
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode_text(b""), "");
    }
}
