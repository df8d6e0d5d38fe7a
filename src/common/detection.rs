//! RTF signature detection.
//!
//! RTF is plain text, so the only reliable marker is the `{\rtf` opening at
//! the very start of the data. The version digit that usually follows is
//! not checked.

/// Opening bytes of every RTF document.
const RTF_SIGNATURE: &[u8] = b"{\\rtf";

/// Check whether `bytes` starts with the RTF signature.
///
/// # Examples
///
/// ```rust
/// use rtfdoc::common::detection::is_rtf;
///
/// assert!(is_rtf(b"{\\rtf1\\ansi\\deff0 Hello World}"));
/// assert!(!is_rtf(b"Plain text file"));
/// ```
#[inline]
pub fn is_rtf(bytes: &[u8]) -> bool {
    bytes.starts_with(RTF_SIGNATURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_rtf_valid() {
        assert!(is_rtf(
            b"{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Times New Roman;}} Hello World}"
        ));
    }

    #[test]
    fn test_detect_rtf_minimal() {
        assert!(is_rtf(b"{\\rtf}"));
    }

    #[test]
    fn test_detect_rtf_invalid() {
        assert!(!is_rtf(b"Plain text file"));
        assert!(!is_rtf(b" {\\rtf1 leading space}"));
    }

    #[test]
    fn test_detect_rtf_too_short() {
        assert!(!is_rtf(b"{\\rt"));
        assert!(!is_rtf(b""));
    }
}
