//! Package naming conventions for plugins and shareable configs.
//!
//! Plugins are published as `eslint-plugin-<name>` and shareable configs as
//! `eslint-config-<name>`, optionally under an npm scope. Users may refer to
//! them by the short form; these helpers convert between the two.

/// Package prefix for plugins.
pub const PLUGIN_PREFIX: &str = "eslint-plugin";

/// Package prefix for shareable configs.
pub const CONFIG_PREFIX: &str = "eslint-config";

/// Expand a short package name to its conventional long form.
///
/// # Examples
///
/// ```
/// use eslintrc::naming::{normalize_package_name, PLUGIN_PREFIX};
///
/// assert_eq!(normalize_package_name("react", PLUGIN_PREFIX), "eslint-plugin-react");
/// assert_eq!(normalize_package_name("eslint-plugin-react", PLUGIN_PREFIX), "eslint-plugin-react");
/// assert_eq!(normalize_package_name("@scope", PLUGIN_PREFIX), "@scope/eslint-plugin");
/// assert_eq!(normalize_package_name("@scope/foo", PLUGIN_PREFIX), "@scope/eslint-plugin-foo");
/// ```
#[must_use]
pub fn normalize_package_name(name: &str, prefix: &str) -> String {
    let name = name.replace('\\', "/");

    if let Some(scoped) = name.strip_prefix('@') {
        let (scope, rest) = match scoped.split_once('/') {
            Some((scope, rest)) => (scope, Some(rest)),
            None => (scoped, None),
        };

        return match rest {
            // `@scope`, `@scope/` and `@scope/<prefix>`
            None => format!("@{scope}/{prefix}"),
            Some(rest) if rest.is_empty() || rest == prefix => format!("@{scope}/{prefix}"),
            Some(rest) if has_prefix(rest, prefix) => name.clone(),
            Some(rest) => format!("@{scope}/{prefix}-{rest}"),
        };
    }

    if name.starts_with(&format!("{prefix}-")) {
        name
    } else {
        format!("{prefix}-{name}")
    }
}

/// Reduce a long package name to the short id used in configs.
///
/// # Examples
///
/// ```
/// use eslintrc::naming::{shorthand_name, PLUGIN_PREFIX};
///
/// assert_eq!(shorthand_name("eslint-plugin-react", PLUGIN_PREFIX), "react");
/// assert_eq!(shorthand_name("@scope/eslint-plugin", PLUGIN_PREFIX), "@scope");
/// assert_eq!(shorthand_name("@scope/eslint-plugin-foo", PLUGIN_PREFIX), "@scope/foo");
/// assert_eq!(shorthand_name("custom", PLUGIN_PREFIX), "custom");
/// ```
#[must_use]
pub fn shorthand_name(full_name: &str, prefix: &str) -> String {
    if let Some(scoped) = full_name.strip_prefix('@') {
        if let Some((scope, rest)) = scoped.split_once('/') {
            if rest == prefix {
                return format!("@{scope}");
            }
            if let Some(short) = rest.strip_prefix(&format!("{prefix}-")) {
                if !short.is_empty() {
                    return format!("@{scope}/{short}");
                }
            }
        }
    } else if let Some(short) = full_name.strip_prefix(&format!("{prefix}-")) {
        return short.to_string();
    }

    full_name.to_string()
}

/// `rest` is `<prefix>` followed by `-` or nothing.
fn has_prefix(rest: &str, prefix: &str) -> bool {
    rest.strip_prefix(prefix)
        .is_some_and(|tail| tail.is_empty() || tail.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_config_names() {
        assert_eq!(
            normalize_package_name("airbnb", CONFIG_PREFIX),
            "eslint-config-airbnb"
        );
        assert_eq!(
            normalize_package_name("airbnb/hooks", CONFIG_PREFIX),
            "eslint-config-airbnb/hooks"
        );
    }

    #[test]
    fn test_normalize_scoped_variants() {
        assert_eq!(
            normalize_package_name("@scope/", PLUGIN_PREFIX),
            "@scope/eslint-plugin"
        );
        assert_eq!(
            normalize_package_name("@scope/eslint-plugin", PLUGIN_PREFIX),
            "@scope/eslint-plugin"
        );
        assert_eq!(
            normalize_package_name("@scope/eslint-plugin-foo", PLUGIN_PREFIX),
            "@scope/eslint-plugin-foo"
        );
        // only a whole-word prefix counts
        assert_eq!(
            normalize_package_name("@scope/eslint-pluginfoo", PLUGIN_PREFIX),
            "@scope/eslint-plugin-eslint-pluginfoo"
        );
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(
            normalize_package_name("@scope\\foo", PLUGIN_PREFIX),
            "@scope/eslint-plugin-foo"
        );
    }

    #[test]
    fn test_shorthand_round_trips_normalize() {
        for short in ["react", "@scope", "@scope/foo"] {
            let long = normalize_package_name(short, PLUGIN_PREFIX);
            assert_eq!(shorthand_name(&long, PLUGIN_PREFIX), short);
        }
    }

    #[test]
    fn test_shorthand_leaves_unrelated_scoped_names() {
        assert_eq!(
            shorthand_name("@scope/other", PLUGIN_PREFIX),
            "@scope/other"
        );
    }
}
