//! Property tests for env-file parsing and rendering.

use indexmap::IndexMap;
use proptest::prelude::*;

use odkx_init::EnvironmentMap;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z][A-Z0-9_]{0,15}").unwrap()
}

fn value() -> impl Strategy<Value = String> {
    // Values may contain '=' but no newlines and no surrounding whitespace.
    proptest::string::string_regex("[A-Za-z0-9./@:=_-]{0,24}").unwrap()
}

fn junk_line() -> impl Strategy<Value = String> {
    // No '=' so the line cannot parse as an entry.
    proptest::string::string_regex("[A-Za-z0-9 ./_-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rendering then parsing keeps every entry, in order.
    #[test]
    fn property_render_parse_keeps_entries(
        entries in proptest::collection::vec((key(), value()), 0..=12),
    ) {
        let expected: IndexMap<String, String> = entries.into_iter().collect();
        let map: EnvironmentMap = expected.clone().into_iter().collect();

        let reparsed = EnvironmentMap::parse(&map.render());

        let actual: Vec<(String, String)> = reparsed
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let expected: Vec<(String, String)> = expected.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Lines without '=' never become entries and never panic.
    #[test]
    fn property_malformed_lines_are_skipped(
        entries in proptest::collection::vec((key(), value()), 0..=6),
        junk in proptest::collection::vec(junk_line(), 0..=6),
    ) {
        let mut lines: Vec<String> = Vec::new();
        for (i, (k, v)) in entries.iter().enumerate() {
            lines.push(format!("{}={}", k, v));
            if let Some(j) = junk.get(i) {
                lines.push(j.clone());
            }
        }
        lines.extend(junk.iter().skip(entries.len()).cloned());

        let map = EnvironmentMap::parse(&lines.join("\n"));

        let unique: IndexMap<&str, &str> = entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        prop_assert_eq!(map.len(), unique.len());
        for (k, v) in unique {
            prop_assert_eq!(map.get(k), Some(v));
        }
    }

    /// PROPERTY: Arbitrary text parses without panicking.
    #[test]
    fn property_parse_never_panics(content in ".{0,200}") {
        let _ = EnvironmentMap::parse(&content);
    }
}
