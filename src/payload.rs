use base64::{
    Engine as _,
    alphabet,
    engine::{ DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig },
};
use tracing::{ debug, trace, warn };

/// Standard alphabet, padding optional, stray trailing bits ignored.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true)
);

/// Decodes the data segment of a data URI into raw bytes.
///
/// The segment is always percent-decoded first; if `is_base64` is set the
/// result is then decoded as base64.
pub fn decode_payload(data: &str, is_base64: bool) -> Vec<u8> {
    if is_base64 { base64_decode(data) } else { percent_decode(data) }
}

/// Percent-decodes `data` into bytes.
///
/// `%XX` with two hex digits becomes the byte `0xXX`. Every other character,
/// including a `%` that doesn't start a valid escape, becomes the single byte
/// of its code point (the low byte for characters above U+00FF). Characters
/// are never expanded to UTF-8.
///
/// # Example
///
/// ```rust
/// # use data_uri_parse::percent_decode;
/// assert_eq!(percent_decode("%f9%ECa%zz"), vec![0xF9, 0xEC, b'a', b'%', b'z', b'z']);
/// ```
pub fn percent_decode(data: &str) -> Vec<u8> {
    let bytes = data.as_bytes();
    let mut out = Vec::with_capacity(data.len());
    let mut chars = data.char_indices();
    while let Some((idx, ch)) = chars.next() {
        if ch == '%' {
            if let Some(byte) = bytes.get(idx + 1..idx + 3).and_then(hex_byte) {
                out.push(byte);
                // Both hex digits are ASCII, one char each
                chars.nth(1);
                continue;
            }
        }
        out.push(ch as u8);
    }
    out
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
    let mut byte = [0u8; 1];
    hex::decode_to_slice(pair, &mut byte).ok().map(|_| byte[0])
}

/// Decodes a base64 data segment, as forgivingly as possible.
///
/// Percent escapes are resolved first. Whitespace and characters outside the
/// standard alphabet are skipped, decoding stops at the first `=`, and a
/// single dangling character at the end (which can't encode a whole byte) is
/// dropped. Never fails; the worst case is an empty result.
///
/// # Example
///
/// ```rust
/// # use data_uri_parse::base64_decode;
/// assert_eq!(base64_decode("SGVs\nbG8"), b"Hello");
/// assert_eq!(base64_decode("SGVsbG8%3D"), b"Hello");
/// ```
pub fn base64_decode(data: &str) -> Vec<u8> {
    let unescaped = percent_decode(data);
    let mut sextets = Vec::with_capacity(unescaped.len());
    let mut skipped = 0usize;
    for &byte in &unescaped {
        match byte {
            b'=' => break,
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' => sextets.push(byte),
            _ if byte.is_ascii_whitespace() => {}
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        trace!(skipped, "skipped characters outside the base64 alphabet");
    }
    if sextets.len() % 4 == 1 {
        debug!(len = sextets.len(), "dropping dangling base64 character");
        sextets.pop();
    }

    LENIENT.decode(&sextets).unwrap_or_else(|e| {
        warn!("base64 payload could not be decoded: {e}");
        Vec::new()
    })
}
