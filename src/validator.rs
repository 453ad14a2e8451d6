//! IPv4 address validation
//!
//! The extraction layer matches anything shaped like a dotted quad; this
//! module decides which of those tokens are acceptable endpoints.

/// Syntactically valid addresses that are still useless as endpoints
const RESERVED: [&str; 3] = ["0.0.0.0", "127.0.0.1", "255.255.255.255"];

/// Decide whether a textual token is an acceptable IPv4 address.
///
/// Accepts exactly four `.`-separated segments, each non-empty, composed
/// entirely of ASCII digits, and numerically within `0..=255`, excluding
/// the reserved literals `0.0.0.0`, `127.0.0.1` and `255.255.255.255`.
///
/// Leading zeros are tolerated (`"8.8.8.08"` passes); an empty segment as
/// in `"1..2.3"` fails the digits check. Pure and deterministic; never
/// panics.
pub fn is_valid_ip(token: &str) -> bool {
    let mut segments = 0usize;
    for segment in token.split('.') {
        segments += 1;
        if segments > 4 {
            return false;
        }
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match segment.parse::<u32>() {
            Ok(value) if value <= 255 => {}
            _ => return false,
        }
    }
    if segments != 4 {
        return false;
    }
    !RESERVED.contains(&token)
}
