//! Loading the `parts/*.json` theme fragments.
//!
//! Fragment files are authored by hand between `init` and `merge`. Color
//! fragments are folded in a fixed order with last-writer-wins semantics;
//! token and semantic fragments are passed through opaque, with no schema
//! validation beyond JSON parsing.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::fsutil::read_json;

pub const PARTS_DIR: &str = "parts";
pub const BASE_FILE: &str = "base.json";
pub const TOKENS_FILE: &str = "tokens.json";
pub const SEMANTIC_FILE: &str = "semantic.json";

/// Color fragments, in merge order. Later files win on key collision.
pub const COLOR_FILES: [&str; 3] = [
    "colors-editor.json",
    "colors-ui.json",
    "colors-terminal.json",
];

/// The required `parts/base.json` fragment.
///
/// Unknown fields are ignored; only these three are carried into the
/// assembled theme document.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseFragment {
    pub name: String,
    #[serde(rename = "type")]
    pub theme_type: String,
    #[serde(rename = "semanticHighlighting")]
    pub semantic_highlighting: Option<bool>,
}

pub fn load_base(parts_dir: &Path) -> Result<BaseFragment> {
    read_json(&parts_dir.join(BASE_FILE))
}

/// Fold the color fragments into one map, preserving first-insertion key
/// order while later fragments overwrite values.
pub fn load_colors(parts_dir: &Path) -> Result<Map<String, Value>> {
    let mut colors = Map::new();
    for name in COLOR_FILES {
        let path = parts_dir.join(name);
        if !path.exists() {
            debug!(fragment = name, "color fragment absent, skipping");
            continue;
        }
        let fragment: Map<String, Value> = read_json(&path)?;
        for (key, value) in fragment {
            colors.insert(key, value);
        }
    }
    Ok(colors)
}

/// The ordered token-color rule list; empty when the file is absent.
pub fn load_token_colors(parts_dir: &Path) -> Result<Vec<Value>> {
    let path = parts_dir.join(TOKENS_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json(&path)
}

/// The semantic-token style map; empty when the file is absent.
pub fn load_semantic_tokens(parts_dir: &Path) -> Result<Map<String, Value>> {
    let path = parts_dir.join(SEMANTIC_FILE);
    if !path.exists() {
        return Ok(Map::new());
    }
    read_json(&path)
}
