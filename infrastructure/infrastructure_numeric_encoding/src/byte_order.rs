//! Byte Order Helpers
//!
//! Packs the low `bytes.len()` bytes of a 64-bit word into a slice and back,
//! in either byte order. All fixed-width codecs go through these two
//! functions.

use entities_data_handling::Endianness;

/// Store the low `dst.len()` bytes of `raw`
pub(crate) fn put_uint(dst: &mut [u8], raw: u64, endianness: Endianness) {
    let width = dst.len();
    for (i, slot) in dst.iter_mut().enumerate() {
        let shift = match endianness {
            Endianness::Big => 8 * (width - 1 - i),
            Endianness::Little => 8 * i,
        };
        *slot = (raw >> shift) as u8;
    }
}

/// Load `src.len()` bytes into the low bytes of a 64-bit word
pub(crate) fn get_uint(src: &[u8], endianness: Endianness) -> u64 {
    let fold = |acc: u64, byte: &u8| (acc << 8) | *byte as u64;
    match endianness {
        Endianness::Big => src.iter().fold(0, fold),
        Endianness::Little => src.iter().rev().fold(0, fold),
    }
}

/// Sign-extend the low `bits` bits of `raw`
pub(crate) fn sign_extend(raw: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((raw << shift) as i64) >> shift
}
