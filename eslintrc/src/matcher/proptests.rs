//! Property-based tests for match predicates.

use super::MatchPredicate;
use proptest::prelude::*;

// Strategy for generating file extensions
fn extension_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["js", "ts", "md", "json", "jsx"]).prop_map(String::from)
}

// Strategy for generating relative file paths
fn path_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop::collection::vec("[a-z.]{1,8}", 0..4),
        "[a-z]{1,8}",
        extension_strategy(),
    )
        .prop_map(|(dirs, stem, ext)| {
            let mut path = dirs.join("/");
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(&stem);
            path.push('.');
            path.push_str(&ext);
            (path, ext)
        })
}

fn ext_glob(ext: &str) -> MatchPredicate {
    MatchPredicate::build(Some(vec![format!("*.{ext}")]), None, None)
        .unwrap()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A base-name glob matches at any depth exactly when the extension matches
    #[test]
    fn base_name_glob_matches_any_depth((path, ext) in path_strategy(), glob_ext in extension_strategy()) {
        prop_assert_eq!(ext_glob(&glob_ext).test(&path), ext == glob_ext);
    }

    // Composition is a conjunction of its operands
    #[test]
    fn and_is_conjunction((path, _) in path_strategy(), a in extension_strategy(), b in extension_strategy()) {
        let left = ext_glob(&a);
        let right = ext_glob(&b);
        let expected = left.test(&path) && right.test(&path);
        let composed = MatchPredicate::and(Some(left), Some(right)).unwrap();
        prop_assert_eq!(composed.test(&path), expected);
    }

    // Include + exclude follows (any include) AND (no exclude)
    #[test]
    fn include_exclude_truth_table((path, ext) in path_strategy(), inc in extension_strategy(), exc in extension_strategy()) {
        let predicate = MatchPredicate::build(
            Some(vec![format!("*.{inc}")]),
            Some(vec![format!("*.{exc}")]),
            None,
        )
        .unwrap()
        .unwrap();
        prop_assert_eq!(predicate.test(&path), ext == inc && ext != exc);
    }
}
