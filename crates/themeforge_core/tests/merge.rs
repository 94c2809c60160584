//! Integration tests for fragment merging and theme assembly.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;
use themeforge_core::{merge_theme, ThemeError};

const BASE: &str = r#"{
  "name": "Night Sky",
  "type": "dark",
  "semanticHighlighting": true
}
"#;

fn theme_dir(tmp: &TempDir) -> PathBuf {
    let dir = tmp.path().join("night-sky");
    fs::create_dir_all(dir.join("parts")).unwrap();
    dir
}

fn write_part(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join("parts").join(name), content).unwrap();
}

fn merged_json(dir: &Path) -> Value {
    let path = merge_theme(dir, "night-sky").unwrap();
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn assembles_document_from_all_fragments() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);
    write_part(
        &dir,
        "colors-editor.json",
        r##"{"editor.background": "#101014", "editor.foreground": "#d8dee9"}"##,
    );
    write_part(&dir, "colors-ui.json", r##"{"statusBar.background": "#0b0b0f"}"##);
    write_part(
        &dir,
        "tokens.json",
        r##"[{"scope": "comment", "settings": {"foreground": "#5c6370"}}]"##,
    );
    write_part(&dir, "semantic.json", r##"{"variable.readonly": "#d8dee9"}"##);

    let theme = merged_json(&dir);
    assert_eq!(theme["name"], "Night Sky");
    assert_eq!(theme["type"], "dark");
    assert_eq!(theme["semanticHighlighting"], true);
    assert_eq!(theme["colors"]["editor.background"], "#101014");
    assert_eq!(theme["colors"]["statusBar.background"], "#0b0b0f");
    assert_eq!(theme["tokenColors"][0]["scope"], "comment");
    assert_eq!(theme["semanticTokenColors"]["variable.readonly"], "#d8dee9");
}

#[test]
fn later_color_fragment_wins_on_collision() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);
    write_part(
        &dir,
        "colors-editor.json",
        r##"{"editor.background": "#101014", "focusBorder": "#1f6feb"}"##,
    );
    write_part(&dir, "colors-terminal.json", r##"{"focusBorder": "#e06c75"}"##);

    let theme = merged_json(&dir);
    assert_eq!(theme["colors"]["focusBorder"], "#e06c75");
    assert_eq!(theme["colors"]["editor.background"], "#101014");
}

#[test]
fn absent_color_fragments_are_skipped() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);
    write_part(&dir, "colors-ui.json", r##"{"statusBar.background": "#0b0b0f"}"##);

    let theme = merged_json(&dir);
    let colors = theme["colors"].as_object().unwrap();
    assert_eq!(colors.len(), 1);
}

#[test]
fn missing_tokens_default_to_empty_list() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);

    let theme = merged_json(&dir);
    assert_eq!(theme["tokenColors"], serde_json::json!([]));
    assert_eq!(theme["colors"], serde_json::json!({}));
}

#[test]
fn semantic_token_colors_omitted_when_absent_or_empty() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);

    let theme = merged_json(&dir);
    assert!(theme.get("semanticTokenColors").is_none());

    write_part(&dir, "semantic.json", "{}");
    let theme = merged_json(&dir);
    assert!(theme.get("semanticTokenColors").is_none());

    write_part(&dir, "semantic.json", r##"{"enumMember": "#56b6c2"}"##);
    let theme = merged_json(&dir);
    assert_eq!(theme["semanticTokenColors"]["enumMember"], "#56b6c2");
}

#[test]
fn semantic_highlighting_omitted_when_base_lacks_it() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", r#"{"name": "Night Sky", "type": "light"}"#);

    let theme = merged_json(&dir);
    assert_eq!(theme["type"], "light");
    assert!(theme.get("semanticHighlighting").is_none());
}

#[test]
fn merge_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);
    write_part(
        &dir,
        "colors-editor.json",
        r##"{"editor.background": "#101014"}"##,
    );
    write_part(
        &dir,
        "tokens.json",
        r##"[{"scope": "string", "settings": {"foreground": "#98c379"}}]"##,
    );

    let path = merge_theme(&dir, "night-sky").unwrap();
    let first = fs::read(&path).unwrap();
    let path = merge_theme(&dir, "night-sky").unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn output_uses_two_space_indentation_and_field_order() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);
    write_part(
        &dir,
        "colors-editor.json",
        r##"{"editor.background": "#101014"}"##,
    );

    let path = merge_theme(&dir, "night-sky").unwrap();
    assert_eq!(path.file_name().unwrap(), "night-sky-color-theme.json");

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"name\": \"Night Sky\""));
    assert!(text.ends_with("\n"));
    let type_at = text.find("\"type\"").unwrap();
    let colors_at = text.find("\"colors\"").unwrap();
    let tokens_at = text.find("\"tokenColors\"").unwrap();
    assert!(type_at < colors_at && colors_at < tokens_at);
}

#[test]
fn missing_parts_directory_is_an_error_and_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("night-sky");
    fs::create_dir(&dir).unwrap();

    let err = merge_theme(&dir, "night-sky").unwrap_err();
    assert!(matches!(err, ThemeError::PartsMissing(id) if id == "night-sky"));
    assert!(!dir.join("themes").exists());
}

#[test]
fn malformed_color_fragment_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let dir = theme_dir(&tmp);
    write_part(&dir, "base.json", BASE);
    write_part(&dir, "colors-ui.json", "{not json");

    let err = merge_theme(&dir, "night-sky").unwrap_err();
    assert!(matches!(err, ThemeError::Json { .. }));
}
