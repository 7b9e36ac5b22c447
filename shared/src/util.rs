//! Parsing helpers for identifiers coming from text inputs

/// Coerce an amenity id to an integer, reading only the leading digits
///
/// Accepts surrounding whitespace and an optional sign, and ignores any
/// trailing non-digit text (`"12abc"` is 12). Returns `None` when no digit
/// leads the input.
pub fn parse_amenity_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
