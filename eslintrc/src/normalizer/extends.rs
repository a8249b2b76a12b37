//! Resolution of `extends` entries.
//!
//! Entries are dispatched on their form:
//!
//! | entry | resolves to |
//! |---|---|
//! | `eslint:recommended`, `eslint:all` | a built-in config |
//! | `plugin:<plugin>/<config>` | `configs.<config>` of the plugin |
//! | `airbnb`, `@scope/base` | the shareable config package `eslint-config-*` |
//! | `/abs/base.json` | that file |
//! | `./base.json`, `../base.yml` | that file, relative to the declaring config |

use std::path::Path;

use serde_json::Value;

use super::{ConfigNormalizer, NormalizeContext};
use crate::config::{builtin_config, ConfigValidator};
use crate::error::{Error, Result};
use crate::fragment::ConfigFragment;
use crate::naming::{normalize_package_name, CONFIG_PREFIX};
use crate::path::{absolutize, is_file_path};

/// Whether `spec` names a shareable config package.
///
/// Package names start with a word character or `@`; a second character
/// of `:` marks a Windows drive instead.
fn is_package_name(spec: &str) -> bool {
    let mut chars = spec.chars();
    match (chars.next(), chars.next()) {
        (Some(first), second) => {
            (first.is_ascii_alphanumeric() || first == '_' || first == '@') && second != Some(':')
        }
        (None, _) => false,
    }
}

impl ConfigNormalizer {
    /// Resolve one `extends` entry, appending its fragments.
    pub(super) fn load_extends(
        &self,
        spec: &str,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        log::debug!("Resolving extends '{spec}' from '{}'", context.name);
        self.resolve_extends(spec, context, out)
            .map_err(|source| Error::Extends {
                importer: context.importer_label(),
                source: Box::new(source),
            })
    }

    fn resolve_extends(
        &self,
        spec: &str,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        if let Some(name) = spec.strip_prefix("eslint:") {
            return self.load_builtin_extends(spec, name, context, out);
        }
        if let Some(target) = spec.strip_prefix("plugin:") {
            return self.load_plugin_extends(spec, target, context, out);
        }
        if is_package_name(spec) && !Path::new(spec).is_absolute() {
            return self.load_package_extends(spec, context, out);
        }

        let base_dir = context
            .base_dir()
            .unwrap_or_else(|| self.references.cwd());
        let path = absolutize(Path::new(spec), base_dir);
        self.load_file_extends(spec, &path, context, out)
    }

    fn load_builtin_extends(
        &self,
        spec: &str,
        name: &str,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        let raw = builtin_config(name).ok_or_else(|| Error::ExtendConfigMissing {
            config_name: spec.to_string(),
            importer_name: context.name.clone(),
        })?;

        let child = context.extended(
            format!("{} » {spec}", context.name),
            context.file_path.clone(),
            spec.to_string(),
            self.max_depth,
        )?;
        self.normalize_into(raw, &child, out)
    }

    fn load_plugin_extends(
        &self,
        spec: &str,
        target: &str,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        let missing = || Error::ExtendConfigMissing {
            config_name: spec.to_string(),
            importer_name: context.name.clone(),
        };

        let (plugin_name, config_name) = target.rsplit_once('/').ok_or_else(missing)?;
        if is_file_path(plugin_name) {
            return Err(Error::ExtendsPluginPath {
                extend_name: spec.to_string(),
            });
        }

        let plugin = self.references.load_plugin(plugin_name, &context.importer());
        let definition = plugin.require().map_err(Error::Captured)?;
        let raw = match definition.configs.get(config_name) {
            Some(Value::Object(raw)) => raw.clone(),
            Some(_) => {
                return Err(Error::Validation {
                    source_name: spec.to_string(),
                    field: format!("configs.{config_name}"),
                    message: "must be an object".to_string(),
                })
            }
            None => return Err(missing()),
        };

        let name = format!("{} » plugin:{}/{config_name}", context.name, plugin.id());
        ConfigValidator::validate(&raw, &name)?;

        let file_path = plugin
            .file_path()
            .map(Path::to_path_buf)
            .or_else(|| context.file_path.clone());
        let child = context.extended(
            name,
            file_path,
            format!("plugin:{}/{config_name}", plugin.id()),
            self.max_depth,
        )?;
        self.normalize_into(raw, &child, out)
    }

    fn load_package_extends(
        &self,
        spec: &str,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        let request = normalize_package_name(spec, CONFIG_PREFIX);
        let base_dir = context
            .base_dir()
            .unwrap_or_else(|| self.references.cwd());

        let path = match self.references.resolver().resolve(&request, base_dir) {
            Ok(path) => path,
            Err(err) if err.is_module_not_found() => {
                return Err(Error::ExtendConfigMissing {
                    config_name: spec.to_string(),
                    importer_name: context.name.clone(),
                })
            }
            Err(err) => return Err(err),
        };
        log::debug!("Shareable config '{request}' resolved to {}", path.display());

        let name = format!("{} » {request}", context.name);
        let raw = self.load_config_file(&path, &name)?;
        let child = context.extended(
            name,
            Some(path.clone()),
            path.display().to_string(),
            self.max_depth,
        )?;
        self.normalize_into(raw, &child, out)
    }

    fn load_file_extends(
        &self,
        spec: &str,
        path: &Path,
        context: &NormalizeContext,
        out: &mut Vec<ConfigFragment>,
    ) -> Result<()> {
        let name = format!("{} » {spec}", context.name);
        let child = context.extended(
            name.clone(),
            Some(path.to_path_buf()),
            path.display().to_string(),
            self.max_depth,
        )?;

        let raw = match self.load_config_file(path, &name) {
            Ok(raw) => raw,
            Err(err) if err.is_not_found() => {
                return Err(Error::ExtendConfigMissing {
                    config_name: spec.to_string(),
                    importer_name: context.name.clone(),
                })
            }
            Err(err) => return Err(err),
        };
        self.normalize_into(raw, &child, out)
    }
}
