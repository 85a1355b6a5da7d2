//! longopt toolchain core library.
//!
//! Translates verbose long-form command options
//! (`--keyword[=directive[:arg]][+modifier[:arg]]...`) into their compact
//! short-form equivalents (`-<code><directive-codes><arg>[+<mod-code><arg>]...`)
//! against externally supplied keyword dictionaries. The main entry point is
//! [`rewrite_options`]; the individual scanners and matchers are exposed for
//! hosts that need finer-grained access.

#![warn(missing_docs)]

/// Directive and modifier list translation.
pub mod directive;
/// Escape hiding for literal modifier delimiters.
pub mod escape;
/// Keyword resolution against ordered dictionaries.
pub mod keyword;
/// The long-to-short rewrite driver.
pub mod rewrite;
/// Modifier and separator scanning.
pub mod scan;
/// Section extraction for multi-section options.
pub mod section;

// ── Convenience re-exports ──────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common items.

// Driver
pub use rewrite::{
    BARE_TOKEN_CODE, LONG_OPTION_CODE, LongOption, RewriteReport, SELFTEST_KEYWORD,
    render_command_line, rewrite_options,
};

// List translation
pub use directive::{ListError, ListMatch, translate_list};

// Scanners
pub use scan::{ScanCursor, find_separator, first_modifier, next_modifier};

// Sections
pub use section::{Section, take_section};

// Tables (re-exported from the keyword-tables crate)
pub use longopt_keyword_tables::{KeywordDictionary, KeywordEntry, MultiDirective};
