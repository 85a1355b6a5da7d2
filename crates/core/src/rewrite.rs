//! The long-option to short-option rewrite driver.
//!
//! [`rewrite_options`] is the single entry point the host invokes over its
//! parsed option tokens. For every token in `--keyword[=...]` shape it hides
//! escaped delimiters, resolves the keyword against the supplied
//! dictionaries, splits the argument into sections, translates directives and
//! modifiers to their short codes, and commits the reassembled short form
//! back into the token. Tokens no dictionary knows are left untouched; that
//! is a normal outcome, not an error.

use std::collections::BTreeMap;

use longopt_diagnostics::{Diagnostic, Span, codes};
use longopt_keyword_tables::{KeywordDictionary, KeywordEntry, MultiDirective};

use crate::directive::{ListError, translate_list};
use crate::keyword::find_keyword;
use crate::section::take_section;
use crate::{escape, scan};

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Identifying code the host assigns to `--keyword...` tokens before translation.
pub const LONG_OPTION_CODE: char = '-';
/// Identifying code for bare (non-option) tokens such as file names.
pub const BARE_TOKEN_CODE: char = ' ';
/// Reserved keyword that arms the rewrite self-test. The host prints the
/// fully rewritten command line and exits once the rewrite pass completes.
pub const SELFTEST_KEYWORD: &str = "translate-selftest";

/// Modifier introducer in both notations.
const MODIFIER_KEY: char = '+';
/// Separator between a directive/modifier and its trailing free-text argument.
const ARG_SEPARATOR: char = ':';
/// Lead-in between a keyword and its directive in the long form.
const DIRECTIVE_LEAD_IN: char = '=';
/// Capacity for the short-form codes accumulated per list translation.
const CODE_CAPACITY: usize = 64;

/// The two fixed aliases that share one short code with an `i`/`o` prefix
/// spliced into the rewritten argument.
const IO_ALIAS_IN: &str = "nodata-in";
const IO_ALIAS_OUT: &str = "nodata-out";

/// A single parsed command token: an identifying character code plus a
/// mutable argument string.
///
/// The host owns the token sequence; the rewriter reads each token and, on a
/// successful translation, replaces `arg` with the short form and `code` with
/// the entry's short-form letter. At most one mutation per token.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LongOption {
    /// The identifying option code ([`LONG_OPTION_CODE`] for `--` tokens,
    /// [`BARE_TOKEN_CODE`] for non-option tokens, the option letter otherwise).
    pub code: char,
    /// The argument text following the code.
    pub arg: String,
}

impl LongOption {
    /// Create a token from a code and argument text.
    pub fn new(code: char, arg: impl Into<String>) -> Self {
        Self {
            code,
            arg: arg.into(),
        }
    }

    /// Classify one raw command-line token.
    ///
    /// `--rest` becomes a long-form token, `-Xrest` a short-form token with
    /// code `X`, anything else a bare token.
    pub fn from_token(token: &str) -> Self {
        if let Some(rest) = token.strip_prefix("--") {
            Self::new(LONG_OPTION_CODE, rest)
        } else if let Some(rest) = token.strip_prefix('-')
            && let Some(code) = rest.chars().next()
        {
            Self::new(code, &rest[code.len_utf8()..])
        } else {
            Self::new(BARE_TOKEN_CODE, token)
        }
    }
}

impl std::fmt::Display for LongOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            LONG_OPTION_CODE => write!(f, "--{}", self.arg),
            BARE_TOKEN_CODE => write!(f, "{}", self.arg),
            code => write!(f, "-{}{}", code, self.arg),
        }
    }
}

/// Outcome of one rewrite pass over a token sequence.
#[derive(Debug, Default, serde::Serialize)]
pub struct RewriteReport {
    /// Warnings collected across all tokens. A warning never aborts the pass.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of tokens whose argument was rewritten.
    pub rewritten: usize,
    /// Whether the reserved self-test keyword was seen. The host is expected
    /// to print the rewritten command line and exit successfully.
    pub selftest: bool,
}

/// Render a token sequence back into one command line.
///
/// Used by the self-test surface after a rewrite pass, and handy in tests.
pub fn render_command_line(options: &[LongOption]) -> String {
    options
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite every translatable long-form token in `options` to its short form.
///
/// `dicts` are consulted in precedence order (common first, then
/// context-specific); pass however many apply. Each token is processed
/// independently: a failure local to one token (capacity overflow, parameter
/// misuse) restores that token's original text and never affects the others.
pub fn rewrite_options(
    options: &mut [LongOption],
    dicts: &[&KeywordDictionary],
) -> RewriteReport {
    let mut report = RewriteReport::default();
    for opt in options.iter_mut() {
        let mark = report.diagnostics.len();
        let original = opt.arg.clone();
        rewrite_option(opt, dicts, &mut report);
        // Stamp the pre-rewrite argument into each new diagnostic so hosts
        // can resolve spans, which are offsets into that text.
        for diag in &mut report.diagnostics[mark..] {
            diag.context
                .get_or_insert_with(BTreeMap::new)
                .entry("argument".to_string())
                .or_insert_with(|| original.clone());
        }
    }
    report
}

/// States: Scan → Classify → SplitEscapes → ResolveKeyword →
/// PerSection(ExtractDirective, ExtractModifiers) → Reassemble → Commit.
fn rewrite_option(opt: &mut LongOption, dicts: &[&KeywordDictionary], report: &mut RewriteReport) {
    // ── Scan/Classify ───────────────────────────────────────────────────
    if opt.code != LONG_OPTION_CODE {
        return;
    }
    // Uppercase lead letter selects the settings channel, which this
    // rewriter does not touch.
    if opt
        .arg
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
    {
        return;
    }

    // ── SplitEscapes ────────────────────────────────────────────────────
    // Scan a hidden copy so a literal `\+` in free text is invisible to the
    // modifier scanner. hide() preserves length, so offsets remain valid
    // against the original argument.
    let mut scanned = opt.arg.clone();
    escape::hide(&mut scanned, MODIFIER_KEY);

    let first_mod = scan::first_modifier(&scanned);
    let mut lead_in = scanned.find(DIRECTIVE_LEAD_IN);
    if let (Some(e), Some(m)) = (lead_in, first_mod)
        && e > m
    {
        // The '=' sits inside modifier text; it is not a directive lead-in.
        lead_in = None;
    }
    let kw_end = match (lead_in, first_mod) {
        (Some(e), _) => e,
        (None, Some(m)) => m,
        (None, None) => scanned.len(),
    };
    let keyword = &scanned[..kw_end];

    if keyword == SELFTEST_KEYWORD {
        report.selftest = true;
        return;
    }

    // ── ResolveKeyword ──────────────────────────────────────────────────
    let Some((_, entry)) = find_keyword(dicts, keyword) else {
        // Possibly a long option this dictionary set does not know; leave
        // the token exactly as supplied.
        return;
    };

    let io_prefix = match keyword {
        IO_ALIAS_IN => "i",
        IO_ALIAS_OUT => "o",
        _ => "",
    };

    // ── PerSection ──────────────────────────────────────────────────────
    let n_sections = entry
        .separator
        .map_or(1, |sep| opt.arg.matches(sep).count() + 1);

    let mut out = String::from(io_prefix);
    for k in 0..n_sections {
        if k > 0 {
            // Separator presence implied by n_sections > 1.
            if let Some(sep) = entry.separator {
                out.push(sep);
            }
        }
        let (text, base) = match entry.separator {
            Some(sep) if n_sections > 1 => {
                let sect = take_section(&opt.arg, sep, k);
                (sect.text, sect.start)
            }
            _ => (opt.arg.as_str(), 0),
        };
        match rewrite_section(text, base, entry, keyword, k == 0, report) {
            Ok(piece) => out.push_str(&piece),
            Err(err) => {
                // Hard failure local to this option: restore-and-skip, no
                // partial output is ever committed.
                let (code, message) = match err {
                    ListError::Overflow(cap) => (
                        codes::REWRITE_OVERFLOW,
                        format!(
                            "short-form output for --{keyword} exceeds {cap} bytes; \
                             option left untranslated"
                        ),
                    ),
                    ListError::BadCapacity | ListError::UnknownCandidate(_) => (
                        codes::REWRITE_BAD_CAPACITY,
                        format!("cannot translate --{keyword}; option left untranslated"),
                    ),
                };
                report.diagnostics.push(
                    Diagnostic::warn(code, message, None)
                        .with_context(ctx!("option" => keyword)),
                );
                return;
            }
        }
    }

    // ── Reassemble/Commit ───────────────────────────────────────────────
    escape::reveal(&mut out, MODIFIER_KEY);
    opt.arg = out;
    opt.code = entry.short_code;
    report.rewritten += 1;
}

/// Translate one section: directive region first, then each `+modifier`.
///
/// `lead_in` is true for the section containing the `--keyword=` prefix; in
/// later sections the directive region starts at offset 0 and any `=` is
/// ordinary text (the lead-in role never carries across section boundaries).
/// Returns the section's short-form fragment, or a hard [`ListError`] that
/// aborts the whole option.
fn rewrite_section(
    text: &str,
    base: usize,
    entry: &KeywordEntry,
    keyword: &str,
    lead_in: bool,
    report: &mut RewriteReport,
) -> Result<String, ListError> {
    let mut scanned = text.to_string();
    escape::hide(&mut scanned, MODIFIER_KEY);

    let first_mod = scan::first_modifier(&scanned);
    let dir_start = if lead_in {
        let mut eq = scanned.find(DIRECTIVE_LEAD_IN);
        if let (Some(e), Some(m)) = (eq, first_mod)
            && e > m
        {
            eq = None;
        }
        eq.map(|e| e + 1)
    } else {
        Some(0)
    };
    let dir_end = first_mod.unwrap_or(scanned.len());

    let mut piece = String::new();

    // ── ExtractDirective ────────────────────────────────────────────────
    if let Some(ds) = dir_start
        && ds < dir_end
    {
        let region = &scanned[ds..dir_end];
        let sep = scan::find_separator(region, ARG_SEPARATOR);
        match translate_list(
            &entry.long_directives,
            &entry.short_directives,
            region,
            sep,
            entry.multi_directive,
            CODE_CAPACITY,
        ) {
            Ok(m) => {
                piece.push_str(&m.codes);
                piece.push_str(&m.arg);
            }
            Err(ListError::UnknownCandidate(candidate)) => {
                // One member of a multi-directive list matched nothing; the
                // region contributes nothing and processing continues.
                report.diagnostics.push(
                    Diagnostic::warn(
                        codes::REWRITE_UNKNOWN_DIRECTIVE,
                        format!("unrecognized directive {candidate:?} for --{keyword}"),
                        Some(Span::new(base + ds, base + dir_end)),
                    )
                    .with_context(ctx!("option" => keyword, "directive" => candidate)),
                );
            }
            Err(err) => return Err(err),
        }
    }

    // ── ExtractModifiers ────────────────────────────────────────────────
    let mut cursor = scan::ScanCursor::default();
    while let Some(modstr) = scan::next_modifier(&scanned, &mut cursor) {
        let sep = scan::find_separator(modstr, ARG_SEPARATOR);
        // Modifiers are matched one at a time; the multi-directive joining
        // policies never apply here.
        match translate_list(
            &entry.long_modifiers,
            &entry.short_modifiers,
            modstr,
            sep,
            MultiDirective::Disabled,
            CODE_CAPACITY,
        ) {
            Ok(m) if !m.codes.is_empty() => {
                piece.push(MODIFIER_KEY);
                piece.push_str(&m.codes);
                piece.push_str(&m.arg);
            }
            Ok(_) => {
                let name = &modstr[..sep.unwrap_or(modstr.len())];
                let start = base + cursor.pos() - modstr.len();
                report.diagnostics.push(
                    Diagnostic::warn(
                        codes::REWRITE_UNKNOWN_MODIFIER,
                        format!("unrecognized modifier +{name} for --{keyword}"),
                        Some(Span::new(start, base + cursor.pos())),
                    )
                    .with_context(ctx!("option" => keyword, "modifier" => name)),
                );
            }
            Err(err) => return Err(err),
        }
    }

    Ok(piece)
}
