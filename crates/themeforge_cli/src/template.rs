//! Built-in scaffold template, embedded at compile time.

use std::fs;
use std::path::Path;

use themeforge_core::{Result, ThemeError};

/// Template files, path-relative to the new theme directory.
const TEMPLATE_FILES: [(&str, &str); 9] = [
    (
        "package.json",
        include_str!("../templates/theme/package.json"),
    ),
    (
        ".vscodeignore",
        include_str!("../templates/theme/.vscodeignore"),
    ),
    ("README.md", include_str!("../templates/theme/README.md")),
    (
        "parts/base.json",
        include_str!("../templates/theme/parts/base.json"),
    ),
    (
        "parts/colors-editor.json",
        include_str!("../templates/theme/parts/colors-editor.json"),
    ),
    (
        "parts/colors-ui.json",
        include_str!("../templates/theme/parts/colors-ui.json"),
    ),
    (
        "parts/colors-terminal.json",
        include_str!("../templates/theme/parts/colors-terminal.json"),
    ),
    (
        "parts/tokens.json",
        include_str!("../templates/theme/parts/tokens.json"),
    ),
    (
        "parts/semantic.json",
        include_str!("../templates/theme/parts/semantic.json"),
    ),
];

/// Materialize the embedded template under `theme_dir`.
pub fn write_builtin(theme_dir: &Path) -> Result<()> {
    for (relative, content) in TEMPLATE_FILES {
        let path = theme_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ThemeError::io(parent, e))?;
        }
        fs::write(&path, content).map_err(|e| ThemeError::io(&path, e))?;
    }
    Ok(())
}
