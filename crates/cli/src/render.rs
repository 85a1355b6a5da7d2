//! Pretty diagnostic rendering using ariadne.
//!
//! Converts the toolchain's [`Diagnostic`] type into ariadne [`Report`]s for
//! coloured, source-annotated terminal output. Falls back to structured JSON
//! when the output is piped or when the user explicitly requests it.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use longopt_diagnostics::{Diagnostic, Severity};

/// Context key under which the rewriter records the pre-rewrite argument
/// text that a diagnostic's span indexes into.
const ARGUMENT_KEY: &str = "argument";

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, source-annotated output (ariadne).
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve an explicit `--output` value, or detect from the terminal.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            // Default: pretty for interactive terminals, JSON for pipes
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: &Severity) -> ReportKind<'static> {
    match severity {
        Severity::Error => ReportKind::Error,
        Severity::Warn => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
        _ => ReportKind::Warning,
    }
}

fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Blue,
        _ => Color::White,
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Render a slice of diagnostics in pretty (ariadne) format to stderr.
///
/// A diagnostic whose context carries the original argument text and a span
/// is rendered with source context (the offending token, underlined).
/// Anything else is rendered as a standalone message.
pub(crate) fn render_diagnostics_pretty(diagnostics: &[Diagnostic]) {
    let config = Config::default().with_compact(false);

    for diag in diagnostics {
        let argument = diag
            .context
            .as_ref()
            .and_then(|ctx| ctx.get(ARGUMENT_KEY));
        if let (Some(span), Some(argument)) = (&diag.span, argument) {
            // Rebuild the long-form token the user typed; spans index the
            // argument, so the leading "--" shifts them by two.
            let token = format!("--{argument}");
            let start = (span.start + 2).min(token.len());
            let end = (span.end + 2).min(token.len()).max(start);
            let name = "<command line>";
            let mut cache = (name, Source::from(token.as_str()));

            let mut builder = Report::build(report_kind(&diag.severity), (name, start..end))
                .with_code(diag.id.as_ref())
                .with_message(&diag.message)
                .with_config(config);

            builder = builder.with_label(
                Label::new((name, start..end))
                    .with_message(make_label_message(diag))
                    .with_color(severity_color(&diag.severity)),
            );

            if let Some(note) = context_note(diag) {
                builder = builder.with_note(note);
            }

            if let Some(explanation) = diag.explain() {
                builder = builder.with_help(explanation);
            }

            builder.finish().eprint(&mut cache).ok();
        } else {
            // No span or no source text, so print a standalone message.
            let kind_str = match diag.severity {
                Severity::Error => "error",
                Severity::Warn => "warning",
                Severity::Info => "info",
                _ => "diagnostic",
            };
            eprintln!("{kind_str}[{}]: {}", diag.id, diag.message);

            if let Some(note) = context_note(diag) {
                eprintln!("  = note: {note}");
            }

            if let Some(explanation) = diag.explain() {
                eprintln!("  = help: {explanation}");
            }
        }
    }
}

/// Build a concise label message from diagnostic context, avoiding duplication
/// with the report header message.
fn make_label_message(diag: &Diagnostic) -> String {
    let pairs = context_pairs(diag);
    if pairs.is_empty() {
        diag.message.clone()
    } else {
        pairs.join(", ")
    }
}

/// Context pairs rendered as `key=value`, minus the raw argument text.
fn context_pairs(diag: &Diagnostic) -> Vec<String> {
    diag.context
        .iter()
        .flatten()
        .filter(|(k, _)| k.as_str() != ARGUMENT_KEY)
        .map(|(k, v)| format!("{k}={v}"))
        .collect()
}

fn context_note(diag: &Diagnostic) -> Option<String> {
    let pairs = context_pairs(diag);
    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join(", "))
    }
}

// ── JSON rendering ──────────────────────────────────────────────────────

/// Render diagnostics as a JSON array to stdout.
pub(crate) fn render_diagnostics_json(diagnostics: &[Diagnostic]) {
    let json =
        serde_json::to_string_pretty(diagnostics).expect("Diagnostic serialization cannot fail");
    println!("{json}");
}

// ── Unified entry point ─────────────────────────────────────────────────

/// Render diagnostics in the given format.
///
/// - `Pretty` → coloured output to stderr (command output stays on stdout).
/// - `Json`   → JSON array to stdout.
pub(crate) fn render_diagnostics(diagnostics: &[Diagnostic], format: Format) {
    if diagnostics.is_empty() {
        return;
    }
    match format {
        Format::Pretty => render_diagnostics_pretty(diagnostics),
        Format::Json => render_diagnostics_json(diagnostics),
    }
}

// ── Summary line ────────────────────────────────────────────────────────

/// Print a coloured summary line showing error/warning/info counts.
///
/// Example: `2 errors, 1 warning, 0 info`
pub(crate) fn print_summary(diagnostics: &[Diagnostic]) {
    use ariadne::Fmt;

    let (mut errors, mut warnings, mut infos) = (0usize, 0usize, 0usize);
    for d in diagnostics {
        match d.severity {
            Severity::Error => errors += 1,
            Severity::Warn => warnings += 1,
            Severity::Info => infos += 1,
            _ => warnings += 1,
        }
    }

    // Only print summary when there are diagnostics.
    if errors + warnings + infos == 0 {
        return;
    }

    let mut parts = Vec::new();
    if errors > 0 {
        let s = if errors == 1 { "" } else { "s" };
        parts.push(format!("{}", format!("{errors} error{s}").fg(Color::Red)));
    }
    if warnings > 0 {
        let s = if warnings == 1 { "" } else { "s" };
        parts.push(format!(
            "{}",
            format!("{warnings} warning{s}").fg(Color::Yellow)
        ));
    }
    if infos > 0 {
        parts.push(format!("{}", format!("{infos} info").fg(Color::Blue)));
    }
    eprintln!("{}", parts.join(", "));
}
