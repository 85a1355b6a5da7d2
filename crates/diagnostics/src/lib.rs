//! Diagnostics for the longopt toolchain.
//!
//! Provides [`Diagnostic`], [`Severity`], and [`Span`] types used to report
//! warnings and informational messages from the option rewriter and the
//! keyword-table loader. Diagnostic codes are defined in the [`codes`] module.

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error: the input is invalid.
    Error,
    /// Warning: the input may produce unexpected results.
    Warn,
    /// Informational note.
    Info,
}

/// Byte span within one option's argument text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character (0-based).
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl Span {
    /// Create a span covering `[start, end)`.
    ///
    /// Panics if `end < start`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(end >= start, "Span end ({end}) < start ({start})");
        Self { start, end }
    }

    /// Create a zero-width span at the given position.
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

/// A diagnostic message produced by the rewriter or the table loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"LOPT1001"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// Optional byte span in the option argument that this diagnostic relates to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Machine-readable context for tooling. Keys and values are free-form strings.
    /// Absent when no context is applicable. Serialized only when present.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            span,
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Error, message, span)
    }

    /// Shorthand for a `Warn` diagnostic.
    pub fn warn(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Warn, message, span)
    }

    /// Shorthand for an `Info` diagnostic.
    pub fn info(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Self::new(id, Severity::Info, message, span)
    }

    /// Attach machine-readable context metadata (builder pattern).
    ///
    /// Context is a set of key-value string pairs providing structured details
    /// about the diagnostic for tooling, filtering, and programmatic consumption.
    /// Keys are short descriptors like `"option"`, `"modifier"`, `"section"`, etc.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Returns the human-readable explanation for this diagnostic's code, if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::REWRITE_UNKNOWN_MODIFIER => Some(
            "A +modifier attached to a long-form option does not appear in the \
             option's recognized modifier set. The modifier contributes nothing \
             to the rewritten short form; the rest of the option is still \
             translated.",
        ),
        codes::REWRITE_UNKNOWN_DIRECTIVE => Some(
            "A comma-separated directive list contained a member that does not \
             match any recognized directive, so the whole list was left \
             untranslated for that section.",
        ),
        codes::REWRITE_OVERFLOW => Some(
            "The short-form code characters accumulated for one option would \
             exceed the output capacity. The option was left in its original \
             long form.",
        ),
        codes::REWRITE_BAD_CAPACITY => Some(
            "A list translation was invoked with a zero output capacity. The \
             option was left in its original long form.",
        ),
        codes::TABLES_BAD_FORMAT => Some(
            "A keyword table could not be loaded: the JSON was malformed or an \
             entry failed validation (short code and separator must be single \
             characters; directive and modifier lists must align).",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Span ────────────────────────────────────────────────────────────

    #[test]
    fn span_new_valid() {
        let s = Span::new(5, 10);
        assert_eq!(s.start, 5);
        assert_eq!(s.end, 10);
    }

    #[test]
    fn span_empty() {
        let s = Span::empty(7);
        assert_eq!(s.start, 7);
        assert_eq!(s.end, 7);
    }

    #[test]
    #[should_panic(expected = "Span end (3) < start (5)")]
    fn span_new_inverted_panics() {
        Span::new(5, 3);
    }

    // ── Severity Display ────────────────────────────────────────────────

    #[test]
    fn severity_display() {
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(format!("{}", Severity::Warn), "warn");
        assert_eq!(format!("{}", Severity::Info), "info");
    }

    // ── Diagnostic constructors ─────────────────────────────────────────

    #[test]
    fn diagnostic_warn_constructor() {
        let d = Diagnostic::warn(codes::REWRITE_UNKNOWN_MODIFIER, "bad modifier", None);
        assert_eq!(d.id, "LOPT1001");
        assert_eq!(d.severity, Severity::Warn);
        assert_eq!(d.message, "bad modifier");
        assert!(d.span.is_none());
    }

    #[test]
    fn diagnostic_error_constructor() {
        let d = Diagnostic::error(codes::TABLES_BAD_FORMAT, "bad table", Some(Span::new(0, 5)));
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.span, Some(Span::new(0, 5)));
    }

    #[test]
    fn diagnostic_info_constructor() {
        let d = Diagnostic::info("CUSTOM", "custom message", None);
        assert_eq!(d.severity, Severity::Info);
        assert_eq!(d.id, "CUSTOM");
    }

    // ── Diagnostic Display ──────────────────────────────────────────────

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::warn(codes::REWRITE_UNKNOWN_MODIFIER, "unrecognized modifier", None);
        assert_eq!(
            format!("{}", d),
            "warn[LOPT1001]: unrecognized modifier"
        );
    }

    // ── Diagnostic explain ──────────────────────────────────────────────

    #[test]
    fn diagnostic_explain_known() {
        let d = Diagnostic::warn(codes::REWRITE_UNKNOWN_MODIFIER, "test", None);
        assert!(d.explain().is_some());
        assert!(d.explain().unwrap().contains("modifier"));
    }

    #[test]
    fn diagnostic_explain_unknown() {
        let d = Diagnostic::warn("UNKNOWN_CODE", "test", None);
        assert!(d.explain().is_none());
    }

    // ── explain() exhaustiveness ────────────────────────────────────────

    #[test]
    fn all_codes_have_explanations() {
        let all = [
            codes::REWRITE_UNKNOWN_MODIFIER,
            codes::REWRITE_UNKNOWN_DIRECTIVE,
            codes::REWRITE_OVERFLOW,
            codes::REWRITE_BAD_CAPACITY,
            codes::TABLES_BAD_FORMAT,
        ];
        for code in &all {
            assert!(
                explain(code).is_some(),
                "diagnostic code {code} has no explain() entry"
            );
        }
    }

    // ── Context ─────────────────────────────────────────────────────────

    #[test]
    fn diagnostic_with_context() {
        let d = Diagnostic::warn(codes::REWRITE_UNKNOWN_MODIFIER, "unrecognized", None)
            .with_context(BTreeMap::from([
                ("option".into(), "frame".into()),
                ("modifier".into(), "bogus".into()),
            ]));
        assert!(d.context.is_some());
        let ctx = d.context.as_ref().unwrap();
        assert_eq!(ctx.get("option").unwrap(), "frame");
        assert_eq!(ctx.get("modifier").unwrap(), "bogus");
    }

    // ── Serde round-trip ────────────────────────────────────────────────

    #[test]
    fn diagnostic_serde_roundtrip() {
        let d = Diagnostic::warn(
            codes::REWRITE_UNKNOWN_DIRECTIVE,
            "test message",
            Some(Span::new(10, 20)),
        );
        let json = serde_json::to_string(&d).unwrap();
        let d2: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, d2);
    }

    #[test]
    fn diagnostic_serde_omits_none_span() {
        let d = Diagnostic::warn(codes::REWRITE_UNKNOWN_MODIFIER, "test", None);
        let json = serde_json::to_string(&d).unwrap();
        assert!(!json.contains("span"), "None span should be omitted: {json}");
        assert!(
            !json.contains("context"),
            "None context should be omitted: {json}"
        );
    }
}
