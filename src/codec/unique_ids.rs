//! Random unique identifiers in several textual widths

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use uuid::Uuid;

const RADIX32_DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Hyphenated v4 UUID, 36 characters
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// v4 UUID without hyphens: 32 characters of `0-9a-f`
pub fn uuid_32() -> String {
    Uuid::new_v4().simple().to_string()
}

/// v4 UUID with each 64-bit half written in unsigned base 32 (`0-9a-v`).
///
/// Halves are not zero-padded, so the result is at most 26 characters.
pub fn uuid_26() -> String {
    let (high, low) = split(Uuid::new_v4());
    let mut out = to_radix32(high);
    out.push_str(&to_radix32(low));
    out
}

/// v4 UUID bytes in URL-safe base64 without padding: 22 characters of
/// `A-Za-z0-9-_`
pub fn uuid_22() -> String {
    URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
}

fn split(id: Uuid) -> (u64, u64) {
    let value = id.as_u128();
    ((value >> 64) as u64, value as u64)
}

fn to_radix32(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(RADIX32_DIGITS[(value & 31) as usize]);
        value >>= 5;
    }
    digits.reverse();
    // Digits are drawn from an ASCII table.
    digits.into_iter().map(char::from).collect()
}
