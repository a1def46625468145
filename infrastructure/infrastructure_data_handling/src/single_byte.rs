//! Single-Byte Encodings
//!
//! latin1 (alias binary) stores the low byte of every UTF-16 code unit and
//! decodes byte `b` to code point `b`. ascii behaves the same but clears the
//! top bit in both directions.

/// Encode as latin1
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| unit as u8).collect()
}

/// Encode as ascii
pub fn encode_ascii(text: &str) -> Vec<u8> {
    text.encode_utf16().map(|unit| unit as u8 & 0x7F).collect()
}

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

pub fn decode_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| (b & 0x7F) as char).collect()
}

/// Number of UTF-16 code units, the encoded length in both encodings
pub fn byte_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// True if every byte is below 0x80
pub fn is_ascii(bytes: &[u8]) -> bool {
    bytes.is_ascii()
}
