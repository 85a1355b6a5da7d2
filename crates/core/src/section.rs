//! Section extraction for options with multiple separator-delimited parts.
//!
//! Some options carry one sub-argument group per axis or dimension, joined by
//! a fixed separator (`/` or `,`). [`take_section`] isolates the k-th group
//! as a borrowed slice; the caller reassembles translated sections with the
//! same separator.

/// One separator-delimited section of an option argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// The section's text, excluding separators.
    pub text: &'a str,
    /// Byte offset of the section's first character within the source string.
    pub start: usize,
    /// Byte offset of the separator terminating this section, or `None` when
    /// the section runs to the end of the source string.
    pub sep_pos: Option<usize>,
}

/// Extract the `k`-th (0-based) `separator`-delimited section of `text`.
///
/// When `text` contains fewer than `k + 1` separators, the remainder after
/// the last separator (or the whole string, when there is none) is returned
/// as the final section with `sep_pos` of `None`. For `k = 0..n-1` over a
/// string with `n - 1` separators this yields exactly `n` sections whose
/// concatenation, separators re-inserted, reproduces the string.
pub fn take_section(text: &str, separator: char, k: usize) -> Section<'_> {
    let mut start = 0usize;
    let mut seen = 0usize;
    for (i, ch) in text.char_indices() {
        if ch == separator {
            if seen == k {
                return Section {
                    text: &text[start..i],
                    start,
                    sep_pos: Some(i),
                };
            }
            seen += 1;
            start = i + ch.len_utf8();
        }
    }
    Section {
        text: &text[start..],
        start,
        sep_pos: None,
    }
}
