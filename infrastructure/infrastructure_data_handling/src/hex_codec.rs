//! Hex Module
//!
//! Two lowercase digits per byte on encode. Decoding reads digit pairs and
//! stops at the first pair that is not valid hex (or a trailing lone digit),
//! returning what was decoded so far.

pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn decode(text: &str) -> Vec<u8> {
    let digits = text.as_bytes();
    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(high), Some(low)) => bytes.push(high << 4 | low),
            _ => break,
        }
    }
    bytes
}

fn hex_value(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}

/// Upper bound on the decoded length
pub fn byte_length(text: &str) -> usize {
    text.len() >> 1
}
