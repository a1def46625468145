//! Transcoder Module
//!
//! Dispatches text conversion on an [`Encoding`]. The byte operations and
//! the buffer facade only go through this module.

use crate::base64_codec::{self, Base64Variant};
use crate::{hex_codec, single_byte, utf16, utf8};
use entities_data_handling::{BufferResult, Encoding};

/// Encode `text`
///
/// Only base64 and base64url can fail, on malformed input.
pub fn encode(text: &str, encoding: Encoding) -> BufferResult<Vec<u8>> {
    let bytes = match encoding {
        Encoding::Utf8 => text.as_bytes().to_vec(),
        Encoding::Utf16le => utf16::encode(text),
        Encoding::Latin1 => single_byte::encode_latin1(text),
        Encoding::Ascii => single_byte::encode_ascii(text),
        Encoding::Hex => hex_codec::decode(text),
        Encoding::Base64 => base64_codec::decode(text, Base64Variant::Standard)?,
        Encoding::Base64Url => base64_codec::decode(text, Base64Variant::UrlSafe)?,
    };
    Ok(bytes)
}

/// Decode `bytes`; never fails
pub fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => utf8::decode(bytes),
        Encoding::Utf16le => utf16::decode(bytes),
        Encoding::Latin1 => single_byte::decode_latin1(bytes),
        Encoding::Ascii => single_byte::decode_ascii(bytes),
        Encoding::Hex => hex_codec::encode(bytes),
        Encoding::Base64 => base64_codec::encode(bytes, Base64Variant::Standard),
        Encoding::Base64Url => base64_codec::encode(bytes, Base64Variant::UrlSafe),
    }
}

/// Encoded length of `text` without producing the bytes
///
/// For hex and base64 this is the arithmetic estimate from the input
/// length, which can exceed the decoded length of malformed input.
///
/// ```rust
/// use entities_data_handling::Encoding;
/// use infrastructure_data_handling::transcoder::byte_length;
///
/// assert_eq!(byte_length("€", Encoding::Utf8), 3);
/// assert_eq!(byte_length("€", Encoding::Utf16le), 2);
/// assert_eq!(byte_length("AA==", Encoding::Base64), 1);
/// assert_eq!(byte_length("abc", Encoding::Hex), 1);
/// ```
pub fn byte_length(text: &str, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Utf8 => utf8::byte_length(text),
        Encoding::Utf16le => utf16::byte_length(text),
        Encoding::Latin1 | Encoding::Ascii => single_byte::byte_length(text),
        Encoding::Hex => hex_codec::byte_length(text),
        Encoding::Base64 | Encoding::Base64Url => base64_codec::byte_length(text),
    }
}

/// Encode `text` into `dst`, returning the number of bytes written
///
/// When `dst` is too small the output is cut: utf8 never writes a partial
/// character and utf16le never writes half a code unit.
pub fn write_into(dst: &mut [u8], text: &str, encoding: Encoding) -> BufferResult<usize> {
    let written = match encoding {
        Encoding::Utf8 => {
            let prefix = utf8::fitting_prefix(text, dst.len());
            dst[..prefix.len()].copy_from_slice(prefix.as_bytes());
            prefix.len()
        }
        _ => {
            let bytes = encode(text, encoding)?;
            let mut count = bytes.len().min(dst.len());
            if encoding == Encoding::Utf16le {
                count &= !1;
            }
            dst[..count].copy_from_slice(&bytes[..count]);
            count
        }
    };
    Ok(written)
}

/// True if `bytes` is well-formed UTF-8
pub fn is_utf8(bytes: &[u8]) -> bool {
    utf8::is_utf8(bytes)
}

/// True if every byte is ASCII
pub fn is_ascii(bytes: &[u8]) -> bool {
    single_byte::is_ascii(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let bytes = encode("Hello", Encoding::Utf8).unwrap();
        assert_eq!(decode(&bytes, Encoding::Hex), "48656c6c6f");
        assert_eq!(encode("48656c6c6f", Encoding::Hex).unwrap(), bytes);
    }

    #[test]
    fn test_write_into_utf8_partial() {
        let mut dst = [0u8; 4];
        assert_eq!(write_into(&mut dst, "ab€", Encoding::Utf8).unwrap(), 2);
        assert_eq!(&dst[..2], b"ab");
        assert_eq!(dst[2], 0);
    }

    #[test]
    fn test_write_into_utf16_even() {
        let mut dst = [0u8; 3];
        assert_eq!(write_into(&mut dst, "ab", Encoding::Utf16le).unwrap(), 2);
        assert_eq!(dst, [0x61, 0, 0]);
    }

    #[test]
    fn test_write_into_base64_error() {
        let mut dst = [0u8; 8];
        let err = write_into(&mut dst, "***", Encoding::Base64).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(dst, [0u8; 8]);
    }

    #[test]
    fn test_latin1_ascii_decode() {
        assert_eq!(decode(&[0xE9], Encoding::Latin1), "é");
        assert_eq!(decode(&[0xE9], Encoding::Ascii), "i");
    }

    #[test]
    fn test_predicates() {
        assert!(is_ascii(b"plain"));
        assert!(!is_ascii(&[0x80]));
        assert!(is_utf8("ñ".as_bytes()));
        assert!(!is_utf8(&[0xC3]));
    }
}
