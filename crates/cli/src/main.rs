mod render;

use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use longopt_core::{LongOption, render_command_line, rewrite_options};
use longopt_diagnostics as diag;
use longopt_keyword_tables::{KeywordDictionary, builtin_common};

use crate::render::{Format, print_summary, render_diagnostics};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "longopt",
    version,
    about = "longopt toolchain — translate long-form command options to their short forms"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Rewrite command tokens, printing the short-form command line.
    Translate {
        /// Command tokens to rewrite (`--keyword...` forms are translated,
        /// everything else passes through unchanged).
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
        /// Path to a context keyword-table JSON, consulted after the
        /// built-in common table.
        #[arg(long)]
        tables: Option<String>,
    },

    /// Explain a diagnostic ID (e.g. LOPT1001).
    Explain { id: String },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Translate { tokens, tables } => cmd_translate(&tokens, tables.as_deref(), format)?,
        Cmd::Explain { id } => cmd_explain(&id, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_translate(tokens: &[String], tables_path: Option<&str>, format: Format) -> Result<()> {
    let context_dict = load_context_tables(tables_path)?;

    let mut opts: Vec<LongOption> = tokens
        .iter()
        .map(|token| LongOption::from_token(token))
        .collect();

    let mut dicts: Vec<&KeywordDictionary> = vec![builtin_common()];
    if let Some(dict) = &context_dict {
        dicts.push(dict);
    }

    let report = rewrite_options(&mut opts, &dicts);
    let command = render_command_line(&opts);

    if report.selftest {
        // Debug surface: the rewritten line is the whole output.
        println!("{command}");
        process::exit(0);
    }

    match format {
        Format::Json => {
            // Single valid JSON object to stdout.
            let out = serde_json::json!({
                "command": command,
                "tokens": opts,
                "rewritten": report.rewritten,
                "diagnostics": report.diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            // Rewritten line to stdout, diagnostics to stderr.
            println!("{command}");
            render_diagnostics(&report.diagnostics, format);
            print_summary(&report.diagnostics);
        }
    }

    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let text = diag::explain(id);
            let out = serde_json::json!({
                "id": id,
                "explanation": text,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            // Explanation is the expected output, so stdout rather than stderr.
            if let Some(text) = diag::explain(id) {
                use ariadne::Fmt;
                println!("{}: {}", id.fg(ariadne::Color::Cyan), text);
            } else {
                println!("{}: (no explanation available)", id);
            }
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Load the optional context keyword table from `--tables`.
fn load_context_tables(path: Option<&str>) -> Result<Option<KeywordDictionary>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read tables file '{path}'"))?;
    let dict = KeywordDictionary::from_json(&json)
        .with_context(|| format!("failed to parse tables file '{path}'"))?;
    Ok(Some(dict))
}
