//! Theme scaffolding: template materialization and placeholder substitution.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::debug;

use themeforge_core::fragments::{BASE_FILE, PARTS_DIR};
use themeforge_core::fsutil::{copy_dir, replace_in_file};
use themeforge_core::manifest::MANIFEST_FILE;
use themeforge_core::ThemeError;

use crate::cli::Appearance;
use crate::template;

/// Create and initialize `<base_dir>/<id>` from the template.
///
/// The target directory must not exist; the existence check runs before any
/// mutation. A custom template directory is copied recursively; otherwise
/// the built-in template is written.
pub fn init_theme(
    base_dir: &Path,
    id: &str,
    name: &str,
    appearance: Appearance,
    template_dir: Option<&Path>,
) -> Result<()> {
    let theme_dir = base_dir.join(id);
    if theme_dir.exists() {
        return Err(ThemeError::TargetExists(theme_dir).into());
    }

    match template_dir {
        Some(src) => copy_dir(src, &theme_dir)?,
        None => template::write_builtin(&theme_dir)?,
    }
    debug!(theme = id, "template materialized");

    let description = format!("{name} - Custom VSCode Theme");
    replace_in_file(
        &theme_dir.join(MANIFEST_FILE),
        &[
            ("{{THEME_ID}}", id),
            ("{{THEME_NAME}}", name),
            ("{{THEME_DESCRIPTION}}", &description),
            ("{{UI_THEME}}", appearance.ui_theme()),
        ],
    )?;

    let base_path = theme_dir.join(PARTS_DIR).join(BASE_FILE);
    replace_in_file(&base_path, &[("{{THEME_NAME}}", name)])?;

    // type is set directly, not via placeholder
    set_base_type(&base_path, appearance.theme_type())?;

    println!("Initialized theme: {name}");
    println!("Directory: {}", theme_dir.display());
    println!("Type: {}", appearance.theme_type());
    println!(
        "\nEdit the files in {}/parts/ to customize your theme.",
        theme_dir.display()
    );
    Ok(())
}

fn set_base_type(path: &Path, theme_type: &str) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut base: Map<String, Value> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    base.insert("type".to_string(), Value::String(theme_type.to_string()));

    let mut out = serde_json::to_string_pretty(&base)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    out.push('\n');
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}
