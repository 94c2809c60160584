//! Assembling the final color-theme document from fragments.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::fragments::{
    load_base, load_colors, load_semantic_tokens, load_token_colors, PARTS_DIR,
};

pub const THEMES_DIR: &str = "themes";

/// The assembled VSCode color-theme document.
///
/// Field order here is the serialization order. `semanticHighlighting` is
/// carried only when the base fragment sets it; `semanticTokenColors` only
/// when the semantic fragment is non-empty.
#[derive(Debug, Serialize)]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub theme_type: String,
    #[serde(
        rename = "semanticHighlighting",
        skip_serializing_if = "Option::is_none"
    )]
    pub semantic_highlighting: Option<bool>,
    pub colors: Map<String, Value>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<Value>,
    #[serde(
        rename = "semanticTokenColors",
        skip_serializing_if = "Map::is_empty"
    )]
    pub semantic_token_colors: Map<String, Value>,
}

/// File name of the generated theme document for a theme id.
pub fn theme_file_name(id: &str) -> String {
    format!("{id}-color-theme.json")
}

/// Rebuild `themes/<id>-color-theme.json` from the `parts` fragments.
///
/// Full overwrite on every call; byte-identical for unchanged fragments.
/// Returns the written path.
pub fn merge_theme(theme_dir: &Path, id: &str) -> Result<PathBuf> {
    let parts_dir = theme_dir.join(PARTS_DIR);
    if !parts_dir.is_dir() {
        return Err(ThemeError::PartsMissing(id.to_string()));
    }

    let base = load_base(&parts_dir)?;
    let document = ThemeDocument {
        name: base.name,
        theme_type: base.theme_type,
        semantic_highlighting: base.semantic_highlighting,
        colors: load_colors(&parts_dir)?,
        token_colors: load_token_colors(&parts_dir)?,
        semantic_token_colors: load_semantic_tokens(&parts_dir)?,
    };

    let themes_dir = theme_dir.join(THEMES_DIR);
    fs::create_dir_all(&themes_dir).map_err(|e| ThemeError::io(&themes_dir, e))?;

    let theme_path = themes_dir.join(theme_file_name(id));
    let mut text =
        serde_json::to_string_pretty(&document).map_err(|e| ThemeError::json(&theme_path, e))?;
    text.push('\n');
    fs::write(&theme_path, text).map_err(|e| ThemeError::io(&theme_path, e))?;

    debug!(
        theme = id,
        colors = document.colors.len(),
        token_rules = document.token_colors.len(),
        "merged theme document"
    );
    Ok(theme_path)
}
