//! Shelling out to the external `vsce` packager.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

use themeforge_core::Manifest;

/// The external packaging executable. Its presence and packaging semantics
/// are entirely its own business; we only inherit its output streams.
pub const PACKAGER: &str = "vsce";

/// Run `vsce package` inside the theme directory and report the expected
/// archive path. The path is a display convenience computed from the
/// on-disk manifest version, not an existence check.
pub fn package_theme(theme_dir: &Path, id: &str) -> Result<()> {
    let manifest = Manifest::load(theme_dir, id)?;
    let version = manifest.version()?;

    debug!(theme = id, %version, "invoking packager");
    let status = Command::new(PACKAGER)
        .arg("package")
        .current_dir(theme_dir)
        .status()
        .with_context(|| format!("failed to run `{PACKAGER} package` (is {PACKAGER} installed?)"))?;

    if !status.success() {
        bail!("failed to package theme: `{PACKAGER} package` exited with {status}");
    }

    let vsix_path = theme_dir.join(format!("{id}-{version}.vsix"));
    println!("\nPackaged: {}", vsix_path.display());
    Ok(())
}
