//! Integration tests for parser and plugin loading through the factory.

mod common;

use common::Project;
use eslintrc::{CreateOptions, PluginDefinition};
use serde_json::json;

fn plugins_config(plugins: &[&str]) -> Option<eslintrc::RawConfig> {
    json!({ "plugins": plugins }).as_object().cloned()
}

#[test]
fn test_plugin_pool_takes_precedence_over_node_modules() {
    let project = Project::new();
    project.install_plugin("eslint-plugin-local", &json!({ "rules": { "from-disk": {} } }));

    let mut pooled = PluginDefinition::default();
    pooled.rules.insert("from-pool".into(), json!({}));
    let factory = project.builder().with_plugin("local", pooled).build();

    let sequence = factory
        .create(plugins_config(&["eslint-plugin-local"]), CreateOptions::default())
        .unwrap();
    let plugin = &sequence.fragments()[0].plugins().unwrap()["local"];

    let definition = plugin.definition().unwrap();
    assert!(definition.rules.contains_key("from-pool"));
    assert!(plugin.file_path().is_none());
}

#[test]
fn test_plugins_resolve_relative_to_configured_directory() {
    let project = Project::new();
    project.install_plugin("eslint-plugin-shared", &json!({ "rules": {} }));
    let elsewhere = Project::new();
    elsewhere.write("config/.eslintrc.json", r#"{ "plugins": ["shared"] }"#);

    let factory = elsewhere
        .builder()
        .with_resolve_plugins_relative_to(Some(project.root().to_path_buf()))
        .build();
    let sequence = factory
        .load_file(&elsewhere.path("config/.eslintrc.json"), None)
        .unwrap();

    let plugin = &sequence.fragments()[0].plugins().unwrap()["shared"];
    assert!(plugin.is_loaded());
}

#[test]
fn test_scoped_plugin_ids() {
    let project = Project::new();
    project.install_plugin("@acme/eslint-plugin", &json!({}));

    let sequence = project
        .factory()
        .create(
            plugins_config(&["@acme"]),
            CreateOptions {
                file_path: Some(project.path(".eslintrc.json")),
                ..Default::default()
            },
        )
        .unwrap();

    let plugins = sequence.fragments()[0].plugins().unwrap();
    assert!(plugins["@acme"].is_loaded());
}

#[test]
fn test_invalid_plugin_module_is_captured() {
    let project = Project::new();
    project.write(
        "node_modules/eslint-plugin-broken/index.json",
        "[1, 2, 3]",
    );

    let sequence = project
        .factory()
        .create(plugins_config(&["broken"]), CreateOptions::default())
        .unwrap();

    let plugin = &sequence.fragments()[0].plugins().unwrap()["broken"];
    let error = plugin.error().unwrap();
    assert_eq!(error.message_template(), "invalid-module");
    assert!(error.to_string().contains("eslint-plugin-broken"));
}

#[test]
fn test_parser_from_node_modules() {
    let project = Project::new();
    project.write(
        "node_modules/custom-parser/package.json",
        r#"{ "name": "custom-parser", "main": "parser.json" }"#,
    );
    project.write("node_modules/custom-parser/parser.json", r#"{ "meta": { "name": "custom" } }"#);

    let raw = json!({ "parser": "custom-parser" });
    let sequence = project
        .factory()
        .create(raw.as_object().cloned(), CreateOptions::default())
        .unwrap();

    let parser = sequence.fragments()[0].parser().unwrap();
    assert_eq!(parser.id(), "custom-parser");
    assert_eq!(parser.definition().unwrap()["meta"]["name"], json!("custom"));
}
