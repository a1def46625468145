//! UTF-8 Module
//!
//! Decoding never fails: each maximal invalid subsequence becomes one
//! U+FFFD. Writing into a bounded destination never splits a character.

/// Decode bytes, replacing malformed sequences
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Encoded length of `text`
pub fn byte_length(text: &str) -> usize {
    text.len()
}

/// Longest prefix of `text` that fits `limit` bytes without splitting a
/// character
pub fn fitting_prefix(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }
    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// True if `bytes` is well-formed UTF-8
pub fn is_utf8(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_replacement() {
        assert_eq!(decode(b"ab\xFFcd"), "ab\u{FFFD}cd");
        // truncated three-byte sequence is one maximal subpart
        assert_eq!(decode(b"\xE2\x82"), "\u{FFFD}");
        assert_eq!(decode(b"\xE2\x82\xAC"), "€");
        assert_eq!(decode(b"\xC0\x80"), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_fitting_prefix() {
        assert_eq!(fitting_prefix("a€b", 3), "a");
        assert_eq!(fitting_prefix("a€b", 4), "a€");
        assert_eq!(fitting_prefix("a€b", 10), "a€b");
        assert_eq!(fitting_prefix("€", 0), "");
    }

    #[test]
    fn test_is_utf8() {
        assert!(is_utf8("héllo".as_bytes()));
        assert!(!is_utf8(b"\xFF"));
        assert!(is_utf8(b""));
    }
}
