//! Escape hiding for literal modifier delimiters.
//!
//! User text may contain a backslash-escaped delimiter (e.g. `\+x`) that must
//! not be mistaken for the start of a modifier. [`hide`] replaces each such
//! two-character sequence with a pair of private sentinel bytes that the
//! scanners never match; [`reveal`] is the exact inverse. The sentinel is a
//! non-printable code point asserted absent from normal input, so a lone
//! sentinel cannot occur.

/// Private stand-in for an escaped delimiter. Must not occur in input text.
const SENTINEL: char = '\u{1}';

/// Hide every `\<key>` sequence behind a pair of sentinel bytes, in place.
///
/// Length-preserving: two bytes in, two bytes out, so byte offsets computed
/// on the hidden copy remain valid against the original. No-op on empty text.
pub fn hide(text: &mut String, key: char) {
    if text.is_empty() {
        return;
    }
    debug_assert!(
        !text.contains(SENTINEL),
        "escape sentinel must not occur in input text"
    );
    let escaped = format!("\\{key}");
    if text.contains(&escaped) {
        let hidden = format!("{SENTINEL}{SENTINEL}");
        *text = text.replace(&escaped, &hidden);
    }
}

/// Restore every sentinel pair back to `\<key>`, in place.
///
/// Each pair is consumed as a unit; the second sentinel is never matched on
/// its own. `reveal(hide(text)) == text` for all text. No-op on empty text.
pub fn reveal(text: &mut String, key: char) {
    if text.is_empty() {
        return;
    }
    let hidden = format!("{SENTINEL}{SENTINEL}");
    if text.contains(&hidden) {
        let escaped = format!("\\{key}");
        *text = text.replace(&hidden, &escaped);
    }
}
