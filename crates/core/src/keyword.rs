//! Keyword resolution against an ordered list of dictionaries.

use longopt_keyword_tables::{KeywordDictionary, KeywordEntry};

/// Resolve a long-option keyword against dictionaries in precedence order.
///
/// Searches each dictionary in turn (the convention is common first, then
/// context-specific) for an entry whose alias list contains `name` as an
/// exact, case-sensitive token. Returns the index of the matching dictionary
/// and the entry, or `None` when no dictionary knows the keyword. Read-only.
pub fn find_keyword<'a>(
    dicts: &[&'a KeywordDictionary],
    name: &str,
) -> Option<(usize, &'a KeywordEntry)> {
    dicts.iter().enumerate().find_map(|(di, dict)| {
        dict.entries
            .iter()
            .find(|entry| entry.alias_names().any(|alias| alias == name))
            .map(|entry| (di, entry))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use longopt_keyword_tables::KeywordRecord;

    fn dict(pairs: &[(&str, &str)]) -> KeywordDictionary {
        KeywordDictionary::from_records(
            pairs
                .iter()
                .map(|(aliases, code)| KeywordRecord {
                    aliases: (*aliases).to_string(),
                    short_code: (*code).to_string(),
                    ..KeywordRecord::default()
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn exact_token_match() {
        let d = dict(&[("region|limits", "R"), ("projection", "J")]);
        let (di, entry) = find_keyword(&[&d], "projection").unwrap();
        assert_eq!(di, 0);
        assert_eq!(entry.short_code, 'J');
    }

    #[test]
    fn alias_spellings_all_resolve() {
        let d = dict(&[("region|limits", "R")]);
        assert_eq!(find_keyword(&[&d], "region").unwrap().1.short_code, 'R');
        assert_eq!(find_keyword(&[&d], "limits").unwrap().1.short_code, 'R');
    }

    #[test]
    fn space_delimited_aliases_resolve() {
        let d = dict(&[("nodata nodata-in nodata-out", "d")]);
        assert_eq!(find_keyword(&[&d], "nodata-in").unwrap().1.short_code, 'd');
    }

    #[test]
    fn substring_is_not_a_match() {
        let d = dict(&[("region", "R")]);
        assert!(find_keyword(&[&d], "reg").is_none());
        assert!(find_keyword(&[&d], "regions").is_none());
    }

    #[test]
    fn case_sensitive() {
        let d = dict(&[("region", "R")]);
        assert!(find_keyword(&[&d], "Region").is_none());
    }

    #[test]
    fn first_dictionary_takes_precedence() {
        let common = dict(&[("frame", "B")]);
        let context = dict(&[("frame", "Z"), ("clip", "C")]);
        let (di, entry) = find_keyword(&[&common, &context], "frame").unwrap();
        assert_eq!(di, 0);
        assert_eq!(entry.short_code, 'B');
        let (di, entry) = find_keyword(&[&common, &context], "clip").unwrap();
        assert_eq!(di, 1);
        assert_eq!(entry.short_code, 'C');
    }

    #[test]
    fn no_dictionaries_no_match() {
        assert!(find_keyword(&[], "region").is_none());
    }
}
