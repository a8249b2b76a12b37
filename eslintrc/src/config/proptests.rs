//! Property-based tests for config validation.

use super::{ConfigValidator, RawConfig};
use proptest::prelude::*;
use serde_json::{json, Value};

// Strategy for generating valid rule entries
fn valid_rule_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0u64..=2).prop_map(|n| json!(n)),
        prop::sample::select(vec!["off", "warn", "error", "Error"]).prop_map(|s| json!(s)),
        ((0u64..=2), "[a-z]{0,8}").prop_map(|(n, opt)| json!([n, opt])),
    ]
}

fn rules_config(rules: Vec<(String, Value)>) -> RawConfig {
    let mut config = RawConfig::new();
    config.insert("rules".into(), Value::Object(rules.into_iter().collect()));
    config
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Any rules map of valid severities validates
    #[test]
    fn valid_rules_validate(rules in prop::collection::vec(("[a-z][a-z-]{0,12}", valid_rule_strategy()), 0..16)) {
        prop_assert!(ConfigValidator::validate(&rules_config(rules), "prop").is_ok());
    }

    // A numeric severity above 2 is always rejected, wherever it appears
    #[test]
    fn out_of_range_severity_rejected(
        rules in prop::collection::vec(("[a-z]{1,6}", valid_rule_strategy()), 0..8),
        bad in 3u64..1000,
    ) {
        let mut rules = rules;
        rules.push(("zz-bad-rule".to_string(), json!(bad)));
        let result = ConfigValidator::validate(&rules_config(rules), "prop");
        prop_assert!(result.is_err());
    }
}
