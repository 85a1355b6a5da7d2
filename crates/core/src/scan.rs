//! Modifier and separator scanning over option argument text.
//!
//! Two scanners cooperate to find the boundaries inside a long-form option
//! argument: [`first_modifier`] / [`next_modifier`] walk the `+modifier`
//! chain, and [`find_separator`] locates the colon that splits a directive or
//! modifier from its trailing free-text argument while skipping colons that
//! sit inside sexagesimal-style numbers (`12:30:45`).
//!
//! All offsets are byte offsets. The delimiters involved are ASCII, so byte
//! scanning never lands inside a UTF-8 sequence at a match position.

/// Remembers where [`next_modifier`] resumes scanning across calls.
///
/// Always points at a position from which rescanning yields the next modifier
/// or confirms none remain. Zero (the default) before the first call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCursor(usize);

impl ScanCursor {
    /// The current byte offset into the source string.
    pub fn pos(self) -> usize {
        self.0
    }
}

/// Find the first modifier introducer in `text`.
///
/// A modifier introducer is a `+` immediately followed by an ASCII letter and
/// not immediately preceded by `=` (so the sign in `key=+5` is not mistaken
/// for a modifier). A qualifying `+` at position 0 counts.
pub fn first_modifier(text: &str) -> Option<usize> {
    let b = text.as_bytes();
    (0..b.len()).find(|&i| {
        b[i] == b'+'
            && i + 1 < b.len()
            && b[i + 1].is_ascii_alphabetic()
            && (i == 0 || b[i - 1] != b'=')
    })
}

/// Extract the next modifier substring, advancing `cursor` past it.
///
/// The returned slice starts one byte past the `+` (the modifier name) and
/// runs to just before the following modifier's `+`, or to the end of `text`
/// when no modifier follows. Successive calls starting from a zeroed cursor
/// partition the text from the first modifier onward; `text` itself is never
/// mutated. Returns `None` (without moving the cursor) when no modifier
/// remains.
pub fn next_modifier<'a>(text: &'a str, cursor: &mut ScanCursor) -> Option<&'a str> {
    let rest = text.get(cursor.0..)?;
    let m = first_modifier(rest)?;
    let name_start = cursor.0 + m + 1;
    let end = match first_modifier(&text[name_start..]) {
        Some(q) => name_start + q,
        None => text.len(),
    };
    cursor.0 = end;
    Some(&text[name_start..end])
}

/// Find the first `delimiter` in `text` that is not flanked by decimal digits
/// on both sides.
///
/// Used to locate the separator between a directive/modifier and its trailing
/// free-text argument when that text may contain the delimiter inside a
/// sexagesimal number (an `hh:mm:ss` value must not be split). Returns `None`
/// when every occurrence is digit-flanked or the delimiter is absent.
pub fn find_separator(text: &str, delimiter: char) -> Option<usize> {
    let b = text.as_bytes();
    let d = delimiter as u8;
    (0..b.len()).find(|&i| {
        b[i] == d
            && !((i > 0 && b[i - 1].is_ascii_digit())
                && (i + 1 < b.len() && b[i + 1].is_ascii_digit()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── first_modifier ──────────────────────────────────────────────────

    #[test]
    fn first_modifier_basic() {
        assert_eq!(first_modifier("af+title:Map"), Some(2));
    }

    #[test]
    fn first_modifier_at_start() {
        assert_eq!(first_modifier("+title:Map"), Some(0));
    }

    #[test]
    fn first_modifier_none() {
        assert_eq!(first_modifier("plain text"), None);
        assert_eq!(first_modifier(""), None);
    }

    #[test]
    fn first_modifier_requires_letter() {
        // A plus followed by a digit is a numeric sign, not a modifier.
        assert_eq!(first_modifier("value+5"), None);
        assert_eq!(first_modifier("trailing+"), None);
    }

    #[test]
    fn first_modifier_skips_equals_sign() {
        // key=+e5 style exponents must not read as modifiers.
        assert_eq!(first_modifier("key=+e5+unit:m"), Some(7));
    }

    #[test]
    fn first_modifier_equals_then_real_modifier() {
        assert_eq!(first_modifier("=+x"), None);
    }

    // ── next_modifier ───────────────────────────────────────────────────

    #[test]
    fn next_modifier_single() {
        let mut cur = ScanCursor::default();
        assert_eq!(next_modifier("af+title:Map", &mut cur), Some("title:Map"));
        assert_eq!(cur.pos(), 12);
        assert_eq!(next_modifier("af+title:Map", &mut cur), None);
    }

    #[test]
    fn next_modifier_chain() {
        let text = "circle+size:5+fill:red";
        let mut cur = ScanCursor::default();
        assert_eq!(next_modifier(text, &mut cur), Some("size:5"));
        assert_eq!(next_modifier(text, &mut cur), Some("fill:red"));
        assert_eq!(next_modifier(text, &mut cur), None);
    }

    #[test]
    fn next_modifier_none_leaves_cursor() {
        let mut cur = ScanCursor::default();
        assert_eq!(next_modifier("no modifiers", &mut cur), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn next_modifier_value_with_plus_sign() {
        // The +5 is digit-led, so it stays inside the previous modifier's value.
        let text = "+offset:+5+label:x";
        let mut cur = ScanCursor::default();
        assert_eq!(next_modifier(text, &mut cur), Some("offset:+5"));
        assert_eq!(next_modifier(text, &mut cur), Some("label:x"));
        assert_eq!(next_modifier(text, &mut cur), None);
    }

    #[test]
    fn next_modifier_partitions_without_gaps() {
        // Concatenating "+" + each substring reproduces the tail of the text
        // from the first modifier onward.
        let text = "lead+alpha:1+beta+gamma:x y";
        let first = first_modifier(text).unwrap();
        let mut cur = ScanCursor::default();
        let mut rebuilt = String::new();
        while let Some(sub) = next_modifier(text, &mut cur) {
            rebuilt.push('+');
            rebuilt.push_str(sub);
        }
        assert_eq!(rebuilt, &text[first..]);
    }

    // ── find_separator ──────────────────────────────────────────────────

    #[test]
    fn separator_basic() {
        assert_eq!(find_separator("blue:23skidoo", ':'), Some(4));
    }

    #[test]
    fn separator_absent() {
        assert_eq!(find_separator("no colon here", ':'), None);
    }

    #[test]
    fn separator_skips_sexagesimal() {
        // Every colon is digit-flanked, so none is a separator.
        assert_eq!(find_separator("12:30:45", ':'), None);
    }

    #[test]
    fn separator_after_sexagesimal_prefix() {
        // The trailing colon is followed by a letter, so it qualifies.
        assert_eq!(find_separator("12:30:face", ':'), Some(5));
    }

    #[test]
    fn separator_at_string_edges() {
        assert_eq!(find_separator(":lead", ':'), Some(0));
        assert_eq!(find_separator("9:", ':'), Some(1));
    }
}
