//! Base64 Module
//!
//! RFC 4648 base64 and base64url on top of the `base64` crate.
//!
//! Encoding pads base64 output with `=` and leaves base64url unpadded.
//! Decoding follows the forgiving-base64 algorithm:
//!
//! 1. ASCII whitespace is removed
//! 2. if the length is a multiple of 4, up to two trailing `=` are removed
//! 3. a length with `len % 4 == 1` is rejected
//! 4. any character outside the encoding's alphabet is rejected, which
//!    includes `=` anywhere but the stripped tail
//!
//! Leftover bits in the final group are discarded.

use base64::alphabet;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use entities_data_handling::{BufferError, BufferResult};

const FORGIVING: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_allow_trailing_bits(true)
    .with_decode_padding_mode(DecodePaddingMode::RequireNone);

const STANDARD_FORGIVING: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, FORGIVING);
const URL_SAFE_FORGIVING: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, FORGIVING);

/// Which alphabet a base64 operation uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Variant {
    Standard,
    UrlSafe,
}

impl Base64Variant {
    fn accepts(&self, c: u8) -> bool {
        match (self, c) {
            (_, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9') => true,
            (Base64Variant::Standard, b'+' | b'/') => true,
            (Base64Variant::UrlSafe, b'-' | b'_') => true,
            _ => false,
        }
    }

    fn engine(&self) -> &'static GeneralPurpose {
        match self {
            Base64Variant::Standard => &STANDARD_FORGIVING,
            Base64Variant::UrlSafe => &URL_SAFE_FORGIVING,
        }
    }
}

pub fn encode(bytes: &[u8], variant: Base64Variant) -> String {
    match variant {
        Base64Variant::Standard => STANDARD.encode(bytes),
        Base64Variant::UrlSafe => URL_SAFE_NO_PAD.encode(bytes),
    }
}

fn is_ascii_whitespace(c: u8) -> bool {
    matches!(c, b'\t' | b'\n' | b'\x0C' | b'\r' | b' ')
}

/// Decode with the forgiving-base64 rules
///
/// # Errors
/// TypeError `The string to be decoded is not correctly encoded.`
///
/// ```rust
/// use infrastructure_data_handling::base64_codec::{decode, Base64Variant};
///
/// assert_eq!(decode("AA==", Base64Variant::Standard).unwrap(), vec![0x00]);
/// assert_eq!(decode("////", Base64Variant::Standard).unwrap(), vec![0xFF; 3]);
/// assert_eq!(decode(" SGk ", Base64Variant::Standard).unwrap(), b"Hi".to_vec());
/// assert!(decode("A", Base64Variant::Standard).is_err());
/// ```
pub fn decode(text: &str, variant: Base64Variant) -> BufferResult<Vec<u8>> {
    let mut data: Vec<u8> = text
        .bytes()
        .filter(|&c| !is_ascii_whitespace(c))
        .collect();
    if data.len() % 4 == 0 {
        for _ in 0..2 {
            if data.last() == Some(&b'=') {
                data.pop();
            }
        }
    }
    if data.len() % 4 == 1 || !data.iter().all(|&c| variant.accepts(c)) {
        return Err(BufferError::invalid_character());
    }
    variant
        .engine()
        .decode(&data)
        .map_err(|_| BufferError::invalid_character())
}

/// Decoded length estimate: trailing `=` (at most two) are discounted, then
/// three bytes per four characters
pub fn byte_length(text: &str) -> usize {
    let mut len = text.len();
    for _ in 0..2 {
        if len > 0 && text.as_bytes()[len - 1] == b'=' {
            len -= 1;
        }
    }
    (len * 3) >> 2
}

/// Decode base64 into a Latin-1 string
pub fn atob(text: &str) -> BufferResult<String> {
    let bytes = decode(text, Base64Variant::Standard)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Encode a Latin-1 string as padded base64
///
/// # Errors
/// TypeError `Invalid character` for code points above U+00FF.
pub fn btoa(text: &str) -> BufferResult<String> {
    let bytes = text
        .chars()
        .map(|c| u8::try_from(c as u32).map_err(|_| BufferError::invalid_latin1_character()))
        .collect::<BufferResult<Vec<u8>>>()?;
    Ok(encode(&bytes, Base64Variant::Standard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_padding() {
        assert_eq!(encode(b"a", Base64Variant::Standard), "YQ==");
        assert_eq!(encode(b"a", Base64Variant::UrlSafe), "YQ");
        assert_eq!(encode(&[0xFB, 0xFF], Base64Variant::Standard), "+/8=");
        assert_eq!(encode(&[0xFB, 0xFF], Base64Variant::UrlSafe), "-_8");
    }

    #[test]
    fn test_decode_unpadded_and_trailing_bits() {
        assert_eq!(decode("YQ", Base64Variant::Standard).unwrap(), b"a".to_vec());
        assert_eq!(decode("YR", Base64Variant::Standard).unwrap(), b"a".to_vec());
        assert_eq!(decode("YWI", Base64Variant::UrlSafe).unwrap(), b"ab".to_vec());
        assert_eq!(decode("", Base64Variant::Standard).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejections() {
        let err = decode("YQ=a", Base64Variant::Standard).unwrap_err();
        assert!(err.is_type_error());
        assert_eq!(err.message(), "The string to be decoded is not correctly encoded.");
        assert!(decode("YQ=", Base64Variant::Standard).is_err());
        assert!(decode("YQ===", Base64Variant::Standard).is_err());
        assert!(decode("-_8", Base64Variant::Standard).is_err());
        assert!(decode("+/8", Base64Variant::UrlSafe).is_err());
        assert!(decode("ab!c", Base64Variant::Standard).is_err());
    }

    #[test]
    fn test_decode_whitespace() {
        assert_eq!(decode("Y Q\n=\t=", Base64Variant::Standard).unwrap(), b"a".to_vec());
    }

    #[test]
    fn test_byte_length() {
        assert_eq!(byte_length("AA=="), 1);
        assert_eq!(byte_length("////"), 3);
        assert_eq!(byte_length("YWI"), 2);
        assert_eq!(byte_length(""), 0);
    }

    #[test]
    fn test_atob_btoa() {
        assert_eq!(btoa("Hello").unwrap(), "SGVsbG8=");
        assert_eq!(atob("SGVsbG8=").unwrap(), "Hello");
        assert_eq!(btoa("\u{FF}").unwrap(), "/w==");
        assert_eq!(atob("/w==").unwrap(), "\u{FF}");
        let err = btoa("€").unwrap_err();
        assert_eq!(err.message(), "Invalid character");
    }
}
