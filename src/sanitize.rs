//! Sanitize
//!
//! Character filters applied to raw field input before it is stored in form
//! state. Invalid characters are discarded, never reported.

use tracing::trace;

/// Strips everything except ASCII letters from a raw name input.
pub fn sanitize_name(raw: &str) -> String {
    retain(raw, |ch| ch.is_ascii_alphabetic())
}

/// Strips everything except ASCII letters and spaces from a raw description input.
pub fn sanitize_description(raw: &str) -> String {
    retain(raw, |ch| ch.is_ascii_alphabetic() || ch == ' ')
}

/// Parses a raw price input, ignoring every non-digit character.
///
/// Empty input (or input with no digits) is `0`. Values too large for a
/// `u64` saturate to [`u64::MAX`].
pub fn sanitize_price(raw: &str) -> u64 {
    let digits = retain(raw, |ch| ch.is_ascii_digit());

    digits.bytes().fold(0_u64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'))
    })
}

fn retain(raw: &str, keep: impl Fn(char) -> bool) -> String {
    let kept: String = raw.chars().filter(|&ch| keep(ch)).collect();

    if kept.len() != raw.len() {
        trace!(
            discarded = raw.chars().count() - kept.chars().count(),
            "discarded characters from input"
        );
    }

    kept
}
