//! Keyword dictionary tables for long-option translation.
//!
//! Defines the data structures describing how a verbose long-form option
//! (`--keyword[=directive[:arg]][+modifier[:arg]]...`) maps to its compact
//! short-form equivalent: alias spellings, the short option code, directive
//! and modifier alias/code lists, the section separator, and the
//! multi-directive joining policy. Tables are deserialized from JSON and
//! consumed by the rewriter in `longopt_core`.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Current format version for the keyword table JSON schema.
pub const TABLE_FORMAT_VERSION: &str = "1.0.0";

/// How a comma-separated directive list within one section is translated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MultiDirective {
    /// The section carries a single directive; commas are ordinary text.
    #[default]
    Disabled,
    /// Each directive's short code is appended back to back (`"a,t"` → `at`).
    Concatenate,
    /// Short codes are joined with commas (`"a,t"` → `a,t`).
    CommaJoined,
}

impl std::fmt::Display for MultiDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiDirective::Disabled => write!(f, "disabled"),
            MultiDirective::Concatenate => write!(f, "concatenate"),
            MultiDirective::CommaJoined => write!(f, "comma-joined"),
        }
    }
}

/// Errors produced while loading or validating a keyword table.
#[derive(Debug, thiserror::Error)]
pub enum TablesError {
    /// The table JSON could not be parsed.
    #[error("invalid keyword table JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An entry's short-form code is not a single character.
    #[error("keyword entry {aliases:?} has short code {code:?}, expected a single character")]
    BadShortCode {
        /// The entry's alias list, for identification in the message.
        aliases: String,
        /// The offending short-code field.
        code: String,
    },
    /// An entry's section separator is not a single character.
    #[error("keyword entry {aliases:?} has separator {separator:?}, expected a single character")]
    BadSeparator {
        /// The entry's alias list, for identification in the message.
        aliases: String,
        /// The offending separator field.
        separator: String,
    },
    /// A long list and its short list have different member counts.
    #[error(
        "keyword entry {aliases:?} has {long} long but {short} short {kind} members; \
         the lists must be positionally aligned"
    )]
    MisalignedLists {
        /// The entry's alias list, for identification in the message.
        aliases: String,
        /// Which pair is misaligned (`"directive"` or `"modifier"`).
        kind: &'static str,
        /// Member count of the long list.
        long: usize,
        /// Member count of the short list.
        short: usize,
    },
}

// ── Raw (serde) table format ────────────────────────────────────────────

/// Top-level container matching the keyword table JSON schema.
///
/// This is the on-disk shape; [`KeywordDictionary::from_json`] validates it
/// into the stricter in-memory [`KeywordEntry`] form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTables {
    /// Table format version for compatibility checks.
    #[serde(default = "default_format_version")]
    pub format_version: String,
    /// All keyword records, in precedence order.
    pub keywords: Vec<KeywordRecord>,
}

fn default_format_version() -> String {
    TABLE_FORMAT_VERSION.to_string()
}

/// One keyword record as stored in the table JSON.
///
/// String fields mirror the compact table notation: aliases are separated by
/// spaces or pipes, directive/modifier lists are comma-joined with each long
/// member possibly pipe-joined. A record whose `aliases` and `short_code` are
/// both empty is a terminating sentinel and is dropped by the loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    /// Space/pipe-delimited long-name spellings (e.g., `"region|limits"`).
    #[serde(default)]
    pub aliases: String,
    /// The short-form option letter, as a one-character string.
    #[serde(default)]
    pub short_code: String,
    /// Section separator, as a one-character string; empty for single-section options.
    #[serde(default)]
    pub separator: String,
    /// Comma-joined long directive members, each possibly pipe-joined aliases.
    #[serde(default)]
    pub long_directives: String,
    /// Comma-joined short directive codes, positionally aligned with `long_directives`.
    #[serde(default)]
    pub short_directives: String,
    /// Comma-joined long modifier members, each possibly pipe-joined aliases.
    #[serde(default)]
    pub long_modifiers: String,
    /// Comma-joined short modifier codes, positionally aligned with `long_modifiers`.
    #[serde(default)]
    pub short_modifiers: String,
    /// Multi-directive joining policy for this option.
    #[serde(default)]
    pub multi_directive: MultiDirective,
}

impl KeywordRecord {
    /// Whether this record is the table-terminating sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.aliases.is_empty() && self.short_code.is_empty()
    }
}

// ── Validated in-memory form ────────────────────────────────────────────

/// An immutable, validated description of one long-form option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Space/pipe-delimited long-name spellings.
    pub aliases: String,
    /// The short-form option code character.
    pub short_code: char,
    /// Section separator character; `None` if the option has only one section.
    pub separator: Option<char>,
    /// Comma-joined long directive members, each possibly pipe-joined aliases.
    pub long_directives: String,
    /// Comma-joined short directive codes aligned with `long_directives`.
    pub short_directives: String,
    /// Comma-joined long modifier members, each possibly pipe-joined aliases.
    pub long_modifiers: String,
    /// Comma-joined short modifier codes aligned with `long_modifiers`.
    pub short_modifiers: String,
    /// Multi-directive joining policy.
    pub multi_directive: MultiDirective,
}

impl KeywordEntry {
    fn from_record(rec: KeywordRecord) -> Result<Self, TablesError> {
        let mut code_chars = rec.short_code.chars();
        let short_code = match (code_chars.next(), code_chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(TablesError::BadShortCode {
                    aliases: rec.aliases,
                    code: rec.short_code,
                });
            }
        };
        let separator = if rec.separator.is_empty() {
            None
        } else {
            let mut sep_chars = rec.separator.chars();
            match (sep_chars.next(), sep_chars.next()) {
                (Some(c), None) => Some(c),
                _ => {
                    return Err(TablesError::BadSeparator {
                        aliases: rec.aliases,
                        separator: rec.separator,
                    });
                }
            }
        };
        check_alignment(&rec.aliases, "directive", &rec.long_directives, &rec.short_directives)?;
        check_alignment(&rec.aliases, "modifier", &rec.long_modifiers, &rec.short_modifiers)?;
        Ok(Self {
            aliases: rec.aliases,
            short_code,
            separator,
            long_directives: rec.long_directives,
            short_directives: rec.short_directives,
            long_modifiers: rec.long_modifiers,
            short_modifiers: rec.short_modifiers,
            multi_directive: rec.multi_directive,
        })
    }

    /// Iterate over this entry's alias spellings (space or pipe delimited).
    pub fn alias_names(&self) -> impl Iterator<Item = &str> {
        self.aliases
            .split([' ', '|'])
            .filter(|name| !name.is_empty())
    }
}

fn check_alignment(
    aliases: &str,
    kind: &'static str,
    long: &str,
    short: &str,
) -> Result<(), TablesError> {
    if long.is_empty() && short.is_empty() {
        return Ok(());
    }
    let long_n = long.split(',').count();
    let short_n = short.split(',').count();
    if long_n != short_n {
        return Err(TablesError::MisalignedLists {
            aliases: aliases.to_string(),
            kind,
            long: long_n,
            short: short_n,
        });
    }
    Ok(())
}

/// An ordered, validated sequence of [`KeywordEntry`] records.
///
/// Earlier entries take precedence during keyword lookup. When both a
/// "common" and a "context" dictionary are consulted, the common one is
/// searched first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordDictionary {
    /// The entries, in precedence order.
    pub entries: Vec<KeywordEntry>,
}

impl KeywordDictionary {
    /// Build a dictionary from raw records, dropping a trailing sentinel if present.
    pub fn from_records(records: Vec<KeywordRecord>) -> Result<Self, TablesError> {
        let entries = records
            .into_iter()
            .take_while(|rec| !rec.is_sentinel())
            .map(KeywordEntry::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Parse and validate a dictionary from its table JSON.
    pub fn from_json(json: &str) -> Result<Self, TablesError> {
        let tables: KeywordTables = serde_json::from_str(json)?;
        Self::from_records(tables.keywords)
    }
}

// ── Built-in common table ───────────────────────────────────────────────

const COMMON_TABLE_JSON: &str = include_str!("../data/common.json");

static COMMON: OnceLock<KeywordDictionary> = OnceLock::new();

/// The built-in "common options" dictionary, parsed once on first access.
pub fn builtin_common() -> &'static KeywordDictionary {
    COMMON.get_or_init(|| {
        KeywordDictionary::from_json(COMMON_TABLE_JSON)
            .expect("built-in common keyword table is valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(aliases: &str, code: &str) -> KeywordRecord {
        KeywordRecord {
            aliases: aliases.to_string(),
            short_code: code.to_string(),
            ..KeywordRecord::default()
        }
    }

    // ── Record validation ───────────────────────────────────────────────

    #[test]
    fn single_char_code_accepted() {
        let dict = KeywordDictionary::from_records(vec![record("region|limits", "R")]).unwrap();
        assert_eq!(dict.entries.len(), 1);
        assert_eq!(dict.entries[0].short_code, 'R');
        assert_eq!(dict.entries[0].separator, None);
    }

    #[test]
    fn multi_char_code_rejected() {
        let err = KeywordDictionary::from_records(vec![record("region", "Rx")]).unwrap_err();
        assert!(matches!(err, TablesError::BadShortCode { .. }));
    }

    #[test]
    fn multi_char_separator_rejected() {
        let mut rec = record("frame", "B");
        rec.separator = "//".to_string();
        let err = KeywordDictionary::from_records(vec![rec]).unwrap_err();
        assert!(matches!(err, TablesError::BadSeparator { .. }));
    }

    #[test]
    fn misaligned_directive_lists_rejected() {
        let mut rec = record("symbol", "S");
        rec.long_directives = "circle,square".to_string();
        rec.short_directives = "c".to_string();
        let err = KeywordDictionary::from_records(vec![rec]).unwrap_err();
        assert!(matches!(
            err,
            TablesError::MisalignedLists {
                kind: "directive",
                ..
            }
        ));
    }

    #[test]
    fn trailing_sentinel_dropped() {
        let dict = KeywordDictionary::from_records(vec![
            record("region", "R"),
            KeywordRecord::default(),
        ])
        .unwrap();
        assert_eq!(dict.entries.len(), 1);
    }

    // ── JSON loading ────────────────────────────────────────────────────

    #[test]
    fn from_json_minimal() {
        let dict = KeywordDictionary::from_json(
            r#"{
                "formatVersion": "1.0.0",
                "keywords": [
                    {
                        "aliases": "frame|axes",
                        "shortCode": "B",
                        "separator": "/",
                        "longDirectives": "full,annotate|annot,ticks",
                        "shortDirectives": "f,a,t",
                        "longModifiers": "title,label",
                        "shortModifiers": "t,l",
                        "multiDirective": "concatenate"
                    }
                ]
            }"#,
        )
        .unwrap();
        let entry = &dict.entries[0];
        assert_eq!(entry.short_code, 'B');
        assert_eq!(entry.separator, Some('/'));
        assert_eq!(entry.multi_directive, MultiDirective::Concatenate);
        assert_eq!(entry.alias_names().collect::<Vec<_>>(), vec!["frame", "axes"]);
    }

    #[test]
    fn from_json_malformed() {
        assert!(matches!(
            KeywordDictionary::from_json("not json"),
            Err(TablesError::Json(_))
        ));
    }

    #[test]
    fn multi_directive_defaults_to_disabled() {
        let dict = KeywordDictionary::from_json(
            r#"{ "keywords": [ { "aliases": "projection", "shortCode": "J" } ] }"#,
        )
        .unwrap();
        assert_eq!(dict.entries[0].multi_directive, MultiDirective::Disabled);
    }

    #[test]
    fn alias_names_split_on_space_and_pipe() {
        let dict =
            KeywordDictionary::from_records(vec![record("nodata nodata-in nodata-out", "d")])
                .unwrap();
        assert_eq!(
            dict.entries[0].alias_names().collect::<Vec<_>>(),
            vec!["nodata", "nodata-in", "nodata-out"]
        );
    }

    // ── Built-in table ──────────────────────────────────────────────────

    #[test]
    fn builtin_common_loads() {
        let dict = builtin_common();
        assert!(!dict.entries.is_empty());
        // Every entry carries a usable short code and aligned lists by
        // construction; spot-check a few well-known members.
        assert!(
            dict.entries
                .iter()
                .any(|e| e.alias_names().any(|a| a == "region"))
        );
        assert!(
            dict.entries
                .iter()
                .any(|e| e.alias_names().any(|a| a == "nodata-in"))
        );
    }

    #[test]
    fn multi_directive_display() {
        assert_eq!(MultiDirective::Disabled.to_string(), "disabled");
        assert_eq!(MultiDirective::Concatenate.to_string(), "concatenate");
        assert_eq!(MultiDirective::CommaJoined.to_string(), "comma-joined");
    }
}
