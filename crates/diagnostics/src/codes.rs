//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Each constant has a matching entry in
//! [`explain`](crate::explain).

// ── Rewriter (LOPT10xx) ─────────────────────────────────────────────────

/// A `+modifier` name is not in the option's recognized modifier set.
pub const REWRITE_UNKNOWN_MODIFIER: &str = "LOPT1001";
/// A comma-separated directive list contained an unrecognized member.
pub const REWRITE_UNKNOWN_DIRECTIVE: &str = "LOPT1002";
/// The accumulated short-form codes would exceed the output capacity.
pub const REWRITE_OVERFLOW: &str = "LOPT1003";
/// A list translation was invoked with a zero output capacity.
pub const REWRITE_BAD_CAPACITY: &str = "LOPT1004";

// ── Keyword tables (LOPT11xx) ───────────────────────────────────────────

/// A keyword table failed to load or validate.
pub const TABLES_BAD_FORMAT: &str = "LOPT1101";
