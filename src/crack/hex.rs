// Hex codec
// Encoding and comparison helpers for digest strings

/// Convert bytes to a lowercase hexadecimal string, two characters per
/// byte, no separators. Empty input yields the empty string.
pub fn encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Case-insensitive equality between two hex strings. Exact otherwise: no
/// whitespace tolerance, no partial-length matching.
pub fn matches(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// True when `s` is non-empty and composed entirely of hex digits
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}
