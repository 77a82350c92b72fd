//! Character-level helpers for field content.
//!
//! All offsets exchanged with the input method count Unicode scalar
//! values, while `String` is indexed by bytes. These helpers are the only
//! place the two meet.

/// U+00A0 NO-BREAK SPACE.
pub const NBSP: char = '\u{00A0}';

/// Replace every non-breaking space with a regular space.
///
/// Input methods tend to lose track of word boundaries around U+00A0,
/// so text pushed to them is normalized first.
pub fn normalize_nbsp(s: &str) -> String {
    if !s.contains(NBSP) {
        return s.to_string();
    }
    s.chars()
        .map(|c| if c == NBSP { ' ' } else { c })
        .collect()
}

/// Length of `s` in characters.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the `offset`-th character of `s`.
///
/// Offsets past the end map to `s.len()`.
pub fn byte_index(s: &str, offset: usize) -> usize {
    s.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Clamp a signed offset coming from the input method into `[0, len]`.
#[inline]
pub fn clamp_offset(offset: i64, len: usize) -> usize {
    if offset <= 0 {
        0
    } else {
        (offset as u64).min(len as u64) as usize
    }
}
