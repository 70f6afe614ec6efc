//! Property tests for config parsing.

use std::path::Path;

use proptest::prelude::*;

use railgen::config::parse_with_warnings;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: config parsing never panics on arbitrary input.
    #[test]
    fn property_parse_config_never_panics(content in "(?s).{0,256}") {
        let _ = parse_with_warnings(&content, Path::new("railgen.toml"));
    }

    /// PROPERTY: every unknown key in a known section is reported once.
    #[test]
    fn property_unknown_keys_become_warnings(
        keys in proptest::collection::btree_set("zz_[a-z]{1,8}", 1..=5)
    ) {
        let body: String = keys.iter().map(|k| format!("{k} = 1\n")).collect();
        let content = format!("[api]\n{body}");

        let (_, warnings) = parse_with_warnings(&content, Path::new("railgen.toml")).unwrap();
        let reported: std::collections::BTreeSet<String> =
            warnings.into_iter().map(|w| w.key).collect();
        prop_assert_eq!(reported, keys);
    }
}
