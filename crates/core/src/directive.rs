//! Directive and modifier list translation.
//!
//! [`translate_list`] matches a textual directive (or modifier name) against
//! a comma-joined list of recognized long-form members, emitting the
//! positionally aligned short-form code character(s) and the residual
//! free-text argument. Each long member may itself be a pipe-joined set of
//! alias spellings. Three list-joining policies govern comma-separated
//! multi-directive input; see [`MultiDirective`].

use longopt_keyword_tables::MultiDirective;

/// Successful outcome of a list translation.
///
/// `codes.len()` is the number of characters emitted: 0 when nothing matched
/// (in which case `arg` carries the whole unmodified input), otherwise the
/// code characters plus any joining commas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMatch {
    /// The accumulated short-form code characters.
    pub codes: String,
    /// The residual argument text: whatever followed the separator on a
    /// match, or the whole unmodified input when nothing matched.
    pub arg: String,
}

/// Hard failure of a list translation.
///
/// Any of these leaves the caller's option untranslated; no partial output
/// is ever committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// Appending the next code character(s) would exceed the output capacity.
    #[error("short-form code output would exceed the capacity of {0} bytes")]
    Overflow(usize),
    /// A multi-directive candidate matched nothing in the long list.
    #[error("no match for directive {0:?} in a multi-directive list")]
    UnknownCandidate(String),
    /// The caller supplied a zero output capacity.
    #[error("output capacity must be nonzero")]
    BadCapacity,
}

/// Translate `input` against aligned `longlist`/`shortlist` members.
///
/// `longlist` is comma-joined; each member may be pipe-joined aliases.
/// `shortlist` is a comma-joined list of single-character codes positionally
/// aligned with `longlist`. `sep` is the byte index of the separator between
/// the matchable head and trailing free text, located beforehand by the
/// caller (see [`crate::scan::find_separator`]); the separator byte itself is
/// consumed. `cap` bounds the bytes written to the code output.
///
/// With [`MultiDirective::Disabled`] the head is a single candidate; exact
/// alias match emits one code, no match emits none. With a joining policy the
/// head is a comma-separated candidate list: every candidate must match or
/// the whole call fails with [`ListError::UnknownCandidate`], and matched
/// codes are appended back to back ([`MultiDirective::Concatenate`]) or
/// comma-joined ([`MultiDirective::CommaJoined`]). Capacity is checked before
/// every append; overflow fails the whole call.
pub fn translate_list(
    longlist: &str,
    shortlist: &str,
    input: &str,
    sep: Option<usize>,
    policy: MultiDirective,
    cap: usize,
) -> Result<ListMatch, ListError> {
    if cap == 0 {
        return Err(ListError::BadCapacity);
    }
    let head = sep.map_or(input, |p| &input[..p]);
    let trail = sep.map_or("", |p| &input[p + 1..]);

    let mut codes = String::new();
    match policy {
        MultiDirective::Disabled => {
            if let Some(code) = lookup_code(longlist, shortlist, head) {
                if code.len() > cap {
                    return Err(ListError::Overflow(cap));
                }
                codes.push_str(code);
            }
        }
        MultiDirective::Concatenate | MultiDirective::CommaJoined => {
            for candidate in head.split(',') {
                let Some(code) = lookup_code(longlist, shortlist, candidate) else {
                    return Err(ListError::UnknownCandidate(candidate.to_string()));
                };
                let joining_comma =
                    !codes.is_empty() && policy == MultiDirective::CommaJoined;
                if codes.len() + code.len() + usize::from(joining_comma) > cap {
                    return Err(ListError::Overflow(cap));
                }
                if joining_comma {
                    codes.push(',');
                }
                codes.push_str(code);
            }
        }
    }

    let arg = if codes.is_empty() {
        input.to_string()
    } else {
        trail.to_string()
    };
    Ok(ListMatch { codes, arg })
}

/// Exact-match lookup of `candidate` among the pipe-joined aliases of each
/// comma-joined `longlist` member, returning the aligned `shortlist` code.
fn lookup_code<'a>(longlist: &str, shortlist: &'a str, candidate: &str) -> Option<&'a str> {
    if candidate.is_empty() {
        return None;
    }
    longlist
        .split(',')
        .zip(shortlist.split(','))
        .find(|(long, _)| long.split('|').any(|alias| alias == candidate))
        .map(|(_, code)| code)
}
