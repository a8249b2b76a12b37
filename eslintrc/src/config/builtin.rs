//! Built-in `eslint:*` configs.

use serde_json::{json, Value};

use super::RawConfig;

/// Rules enabled by `eslint:recommended`.
const RECOMMENDED_RULES: &[&str] = &[
    "constructor-super",
    "for-direction",
    "getter-return",
    "no-async-promise-executor",
    "no-case-declarations",
    "no-class-assign",
    "no-compare-neg-zero",
    "no-cond-assign",
    "no-const-assign",
    "no-constant-condition",
    "no-control-regex",
    "no-debugger",
    "no-delete-var",
    "no-dupe-args",
    "no-dupe-class-members",
    "no-dupe-keys",
    "no-duplicate-case",
    "no-empty",
    "no-empty-character-class",
    "no-empty-pattern",
    "no-ex-assign",
    "no-extra-boolean-cast",
    "no-extra-semi",
    "no-fallthrough",
    "no-func-assign",
    "no-global-assign",
    "no-inner-declarations",
    "no-invalid-regexp",
    "no-irregular-whitespace",
    "no-misleading-character-class",
    "no-mixed-spaces-and-tabs",
    "no-new-symbol",
    "no-obj-calls",
    "no-octal",
    "no-prototype-builtins",
    "no-redeclare",
    "no-regex-spaces",
    "no-self-assign",
    "no-shadow-restricted-names",
    "no-sparse-arrays",
    "no-this-before-super",
    "no-undef",
    "no-unexpected-multiline",
    "no-unreachable",
    "no-unsafe-finally",
    "no-unsafe-negation",
    "no-unused-labels",
    "no-unused-vars",
    "no-useless-catch",
    "no-useless-escape",
    "no-with",
    "require-yield",
    "use-isnan",
    "valid-typeof",
];

/// Core rules outside the recommended set, enabled by `eslint:all`.
const OTHER_CORE_RULES: &[&str] = &[
    "array-callback-return",
    "block-scoped-var",
    "camelcase",
    "complexity",
    "consistent-return",
    "curly",
    "default-case",
    "dot-notation",
    "eqeqeq",
    "guard-for-in",
    "max-depth",
    "max-params",
    "new-cap",
    "no-alert",
    "no-caller",
    "no-console",
    "no-else-return",
    "no-eval",
    "no-implied-eval",
    "no-lonely-if",
    "no-loop-func",
    "no-multi-assign",
    "no-nested-ternary",
    "no-new",
    "no-new-func",
    "no-param-reassign",
    "no-plusplus",
    "no-proto",
    "no-return-assign",
    "no-script-url",
    "no-sequences",
    "no-shadow",
    "no-throw-literal",
    "no-undefined",
    "no-unused-expressions",
    "no-use-before-define",
    "no-useless-call",
    "no-useless-concat",
    "no-useless-return",
    "no-var",
    "object-shorthand",
    "prefer-arrow-callback",
    "prefer-const",
    "prefer-destructuring",
    "prefer-rest-params",
    "prefer-spread",
    "prefer-template",
    "radix",
    "strict",
    "yoda",
];

/// Look up a built-in config by its name after the `eslint:` prefix.
///
/// Returns `None` for unknown names.
///
/// # Examples
///
/// ```
/// use eslintrc::config::builtin_config;
///
/// let recommended = builtin_config("recommended").unwrap();
/// assert_eq!(recommended["rules"]["no-debugger"], "error");
/// assert!(builtin_config("doesNotExist").is_none());
/// ```
#[must_use]
pub fn builtin_config(name: &str) -> Option<RawConfig> {
    let rules: Box<dyn Iterator<Item = &&str>> = match name {
        "recommended" => Box::new(RECOMMENDED_RULES.iter()),
        "all" => Box::new(RECOMMENDED_RULES.iter().chain(OTHER_CORE_RULES)),
        _ => return None,
    };

    let mut config = RawConfig::new();
    config.insert(
        "rules".to_string(),
        Value::Object(rules.map(|rule| ((*rule).to_string(), json!("error"))).collect()),
    );
    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigValidator;

    #[test]
    fn test_builtins_validate() {
        for name in ["recommended", "all"] {
            let config = builtin_config(name).unwrap();
            ConfigValidator::validate(&config, &format!("eslint:{name}")).unwrap();
        }
    }

    #[test]
    fn test_all_is_superset_of_recommended() {
        let recommended = builtin_config("recommended").unwrap();
        let all = builtin_config("all").unwrap();
        let all_rules = all["rules"].as_object().unwrap();

        for rule in recommended["rules"].as_object().unwrap().keys() {
            assert!(all_rules.contains_key(rule), "{rule} missing from eslint:all");
        }
        assert!(all_rules.contains_key("eqeqeq"));
        assert!(!recommended["rules"].as_object().unwrap().contains_key("eqeqeq"));
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(builtin_config("").is_none());
        assert!(builtin_config("Recommended").is_none());
    }
}
