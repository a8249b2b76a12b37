//! Configuration schema validation.
//!
//! Raw configs are untyped, so shape errors are caught here before the
//! normalizer relies on them.

use serde_json::{Map, Value};

use super::RawConfig;
use crate::error::{Error, Result};

/// Keys accepted both at the top level and inside overrides.
const BASE_KEYS: &[&str] = &[
    "env",
    "extends",
    "globals",
    "noInlineConfig",
    "overrides",
    "parser",
    "parserOptions",
    "plugins",
    "processor",
    "reportUnusedDisableDirectives",
    "rules",
    "settings",
];

/// Keys accepted only at the top level of a config.
const TOP_LEVEL_KEYS: &[&str] = &["ignorePatterns", "root"];

/// Keys accepted only inside overrides.
const OVERRIDE_KEYS: &[&str] = &["excludedFiles", "files"];

const SEVERITY_NAMES: &[&str] = &["off", "warn", "error"];

const GLOBAL_VALUES: &[&str] = &["off", "readonly", "readable", "writable", "writeable"];

/// Validates raw configs against the configuration schema.
///
/// # Examples
///
/// ```
/// use eslintrc::config::ConfigValidator;
/// use serde_json::json;
///
/// let config = json!({ "root": true, "rules": { "semi": ["error", "always"] } });
/// ConfigValidator::validate(config.as_object().unwrap(), ".eslintrc.json").unwrap();
///
/// let config = json!({ "plugins": "react" });
/// assert!(ConfigValidator::validate(config.as_object().unwrap(), ".eslintrc.json").is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a top-level config named `source_name` in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] describing the first violation found.
    pub fn validate(config: &RawConfig, source_name: &str) -> Result<()> {
        Self::validate_object(config, source_name, "", false)
    }

    fn validate_object(
        config: &RawConfig,
        source: &str,
        prefix: &str,
        is_override: bool,
    ) -> Result<()> {
        for (key, value) in config {
            let field = format!("{prefix}{key}");
            let allowed = BASE_KEYS.contains(&key.as_str())
                || if is_override {
                    OVERRIDE_KEYS.contains(&key.as_str())
                } else {
                    TOP_LEVEL_KEYS.contains(&key.as_str())
                };
            if !allowed {
                return Err(invalid(source, &field, "is not a recognized configuration key"));
            }

            match key.as_str() {
                "extends" => Self::validate_string_or_list(source, &field, value, true)?,
                "ignorePatterns" => Self::validate_string_or_list(source, &field, value, true)?,
                "plugins" => Self::validate_string_list(source, &field, value)?,
                "parser" | "processor" => {
                    if !value.is_string() {
                        return Err(invalid(source, &field, "must be a string"));
                    }
                }
                "root" | "noInlineConfig" | "reportUnusedDisableDirectives" => {
                    if !value.is_boolean() {
                        return Err(invalid(source, &field, "must be a boolean"));
                    }
                }
                "parserOptions" | "settings" => {
                    object(source, &field, value)?;
                }
                "env" => Self::validate_env(source, &field, object(source, &field, value)?)?,
                "globals" => {
                    Self::validate_globals(source, &field, object(source, &field, value)?)?;
                }
                "rules" => Self::validate_rules(source, &field, object(source, &field, value)?)?,
                "overrides" => Self::validate_overrides(source, &field, value)?,
                "files" => Self::validate_string_or_list(source, &field, value, false)?,
                "excludedFiles" => Self::validate_string_or_list(source, &field, value, true)?,
                _ => {}
            }
        }

        if is_override && !config.contains_key("files") {
            return Err(invalid(source, &format!("{prefix}files"), "is required in overrides"));
        }

        Ok(())
    }

    fn validate_overrides(source: &str, field: &str, value: &Value) -> Result<()> {
        let Value::Array(overrides) = value else {
            return Err(invalid(source, field, "must be an array of objects"));
        };
        for (i, entry) in overrides.iter().enumerate() {
            let entry_field = format!("{field}[{i}]");
            let entry = object(source, &entry_field, entry)?;
            Self::validate_object(entry, source, &format!("{entry_field}."), true)?;
        }
        Ok(())
    }

    fn validate_env(source: &str, field: &str, env: &Map<String, Value>) -> Result<()> {
        for (name, enabled) in env {
            if !enabled.is_boolean() {
                return Err(invalid(source, &format!("{field}.{name}"), "must be a boolean"));
            }
        }
        Ok(())
    }

    fn validate_globals(source: &str, field: &str, globals: &Map<String, Value>) -> Result<()> {
        for (name, setting) in globals {
            let valid = match setting {
                Value::Bool(_) | Value::Null => true,
                Value::String(s) => GLOBAL_VALUES.contains(&s.as_str()),
                _ => false,
            };
            if !valid {
                return Err(invalid(
                    source,
                    &format!("{field}.{name}"),
                    "must be a boolean or one of \"readonly\", \"writable\", \"off\"",
                ));
            }
        }
        Ok(())
    }

    /// Rule entries are a severity or an array starting with one.
    fn validate_rules(source: &str, field: &str, rules: &Map<String, Value>) -> Result<()> {
        for (name, entry) in rules {
            let severity = match entry {
                Value::Array(items) => items.first(),
                other => Some(other),
            };
            if !severity.is_some_and(is_severity) {
                return Err(invalid(
                    source,
                    &format!("{field}.{name}"),
                    "severity must be 0, 1, 2, \"off\", \"warn\" or \"error\"",
                ));
            }
        }
        Ok(())
    }

    fn validate_string_list(source: &str, field: &str, value: &Value) -> Result<()> {
        match value {
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
            _ => Err(invalid(source, field, "must be an array of strings")),
        }
    }

    fn validate_string_or_list(
        source: &str,
        field: &str,
        value: &Value,
        allow_empty: bool,
    ) -> Result<()> {
        match value {
            Value::String(_) => Ok(()),
            Value::Array(items) if items.is_empty() && !allow_empty => {
                Err(invalid(source, field, "must not be empty"))
            }
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
            _ => Err(invalid(source, field, "must be a string or an array of strings")),
        }
    }
}

fn is_severity(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_u64().is_some_and(|n| n <= 2),
        Value::String(s) => SEVERITY_NAMES.contains(&s.to_ascii_lowercase().as_str()),
        _ => false,
    }
}

fn object<'a>(source: &str, field: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| invalid(source, field, "must be an object"))
}

fn invalid(source: &str, field: &str, message: &str) -> Error {
    Error::Validation {
        source_name: source.to_string(),
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(value: Value) -> Result<()> {
        ConfigValidator::validate(value.as_object().unwrap(), "test-config")
    }

    fn field_of(err: Error) -> String {
        match err {
            Error::Validation { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_empty_config() {
        assert!(validate(json!({})).is_ok());
    }

    #[test]
    fn test_validate_full_config() {
        let config = json!({
            "root": true,
            "extends": ["eslint:recommended", "plugin:react/recommended"],
            "env": { "browser": true, "node": false },
            "globals": { "jQuery": "readonly", "legacy": true },
            "parser": "@typescript-eslint/parser",
            "parserOptions": { "ecmaVersion": 2020 },
            "plugins": ["react"],
            "rules": { "semi": 2, "quotes": ["warn", "single"], "eqeqeq": "OFF" },
            "settings": { "react": { "version": "detect" } },
            "ignorePatterns": "dist/",
            "noInlineConfig": false,
            "overrides": [
                { "files": "*.ts", "excludedFiles": ["*.d.ts"], "rules": { "semi": 0 } },
                { "files": ["*.md"], "processor": "markdown/markdown" }
            ]
        });
        assert!(validate(config).is_ok());
    }

    #[test]
    fn test_unknown_key() {
        let err = validate(json!({ "rulez": {} })).unwrap_err();
        assert_eq!(field_of(err), "rulez");
    }

    #[test]
    fn test_files_rejected_at_top_level() {
        let err = validate(json!({ "files": ["*.js"] })).unwrap_err();
        assert_eq!(field_of(err), "files");
    }

    #[test]
    fn test_root_rejected_in_override() {
        let err = validate(json!({ "overrides": [{ "files": "*.js", "root": true }] })).unwrap_err();
        assert_eq!(field_of(err), "overrides[0].root");
    }

    #[test]
    fn test_override_requires_files() {
        let err = validate(json!({ "overrides": [{ "rules": {} }] })).unwrap_err();
        assert_eq!(field_of(err), "overrides[0].files");

        let err = validate(json!({ "overrides": [{ "files": [] }] })).unwrap_err();
        assert_eq!(field_of(err), "overrides[0].files");
    }

    #[test]
    fn test_nested_override_fields() {
        let err = validate(json!({
            "overrides": [{
                "files": "*.js",
                "overrides": [{ "files": "*.spec.js", "plugins": "jest" }]
            }]
        }))
        .unwrap_err();
        assert_eq!(field_of(err), "overrides[0].overrides[0].plugins");
    }

    #[test]
    fn test_invalid_shapes() {
        assert_eq!(field_of(validate(json!({ "root": "yes" })).unwrap_err()), "root");
        assert_eq!(field_of(validate(json!({ "extends": 1 })).unwrap_err()), "extends");
        assert_eq!(field_of(validate(json!({ "parser": [] })).unwrap_err()), "parser");
        assert_eq!(field_of(validate(json!({ "env": [] })).unwrap_err()), "env");
        assert_eq!(
            field_of(validate(json!({ "env": { "node": "true" } })).unwrap_err()),
            "env.node"
        );
        assert_eq!(
            field_of(validate(json!({ "globals": { "$": "maybe" } })).unwrap_err()),
            "globals.$"
        );
    }

    #[test]
    fn test_invalid_rule_severity() {
        let err = validate(json!({ "rules": { "semi": 3 } })).unwrap_err();
        assert_eq!(field_of(err), "rules.semi");

        let err = validate(json!({ "rules": { "semi": [] } })).unwrap_err();
        assert_eq!(field_of(err), "rules.semi");

        let err = validate(json!({ "rules": { "semi": ["loud"] } })).unwrap_err();
        assert_eq!(field_of(err), "rules.semi");
    }

    #[test]
    fn test_error_names_source() {
        let err = validate(json!({ "plugins": [1] })).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("test-config"));
        assert!(message.contains("'plugins'"));
        assert_eq!(err.message_template(), "invalid-config");
    }
}
