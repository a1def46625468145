//! UTF-16LE Module
//!
//! Two bytes per code unit, least significant first. Surrogate pairs are
//! written as two independent units. A trailing odd byte is ignored on
//! decode and unpaired surrogates decode to U+FFFD.

pub fn encode(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

pub fn decode(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

pub fn byte_length(text: &str) -> usize {
    text.encode_utf16().count() * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("Hi"), vec![0x48, 0, 0x69, 0]);
        assert_eq!(encode("😀"), vec![0x3D, 0xD8, 0x00, 0xDE]);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(&[0x48, 0, 0x69, 0, 0x21]), "Hi");
        assert_eq!(decode(&[0x3D, 0xD8, 0x00, 0xDE]), "😀");
        assert_eq!(decode(&[0x3D, 0xD8]), "\u{FFFD}");
    }

    #[test]
    fn test_byte_length() {
        assert_eq!(byte_length("😀a"), 6);
    }
}
