//! Reading and rewriting the extension manifest (`package.json`).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Result, ThemeError};
use crate::fsutil::read_json;
use crate::version::Version;

pub const MANIFEST_FILE: &str = "package.json";

/// An extension manifest held as an order-preserving JSON object.
///
/// Only the `version` field is interpreted; everything else rides along
/// untouched so a rewrite never reorders or drops author content.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Load `<theme_dir>/package.json`. A missing manifest is a
    /// precondition failure reported against the theme id.
    pub fn load(theme_dir: &Path, id: &str) -> Result<Self> {
        let path = theme_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ThemeError::ManifestMissing(id.to_string()));
        }
        let fields = read_json(&path)?;
        Ok(Manifest { path, fields })
    }

    /// The parsed `version` field.
    pub fn version(&self) -> Result<Version> {
        let raw = self
            .fields
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ThemeError::VersionFieldMissing(self.path.clone()))?;
        Version::parse(raw)
    }

    pub fn set_version(&mut self, version: Version) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    /// Write the manifest back with 2-space indentation.
    pub fn save(&self) -> Result<()> {
        let mut text =
            serde_json::to_string_pretty(&self.fields).map_err(|e| ThemeError::json(&self.path, e))?;
        text.push('\n');
        fs::write(&self.path, text).map_err(|e| ThemeError::io(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::BumpLevel;

    const MANIFEST: &str = r#"{
  "name": "night-sky",
  "displayName": "Night Sky",
  "description": "Night Sky - Custom VSCode Theme",
  "version": "1.2.3",
  "engines": {
    "vscode": "^1.75.0"
  }
}
"#;

    fn write_manifest(dir: &Path) {
        fs::write(dir.join(MANIFEST_FILE), MANIFEST).unwrap();
    }

    #[test]
    fn load_reports_missing_manifest_by_theme_id() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Manifest::load(tmp.path(), "night-sky").unwrap_err();
        assert!(matches!(err, ThemeError::ManifestMissing(id) if id == "night-sky"));
    }

    #[test]
    fn version_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(tmp.path());

        let manifest = Manifest::load(tmp.path(), "night-sky").unwrap();
        assert_eq!(manifest.version().unwrap().to_string(), "1.2.3");
    }

    #[test]
    fn bump_rewrite_preserves_other_fields_and_order() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(tmp.path());

        let mut manifest = Manifest::load(tmp.path(), "night-sky").unwrap();
        let next = manifest.version().unwrap().bumped(BumpLevel::Minor);
        manifest.set_version(next);
        manifest.save().unwrap();

        let text = fs::read_to_string(tmp.path().join(MANIFEST_FILE)).unwrap();
        assert!(text.contains("\"version\": \"1.3.0\""));
        assert!(text.contains("\"displayName\": \"Night Sky\""));
        assert!(text.contains("\"vscode\": \"^1.75.0\""));
        // version stays where the author put it, after description
        let description_at = text.find("\"description\"").unwrap();
        let version_at = text.find("\"version\"").unwrap();
        let engines_at = text.find("\"engines\"").unwrap();
        assert!(description_at < version_at && version_at < engines_at);
    }

    #[test]
    fn missing_version_field_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(MANIFEST_FILE),
            "{\n  \"name\": \"night-sky\"\n}\n",
        )
        .unwrap();

        let manifest = Manifest::load(tmp.path(), "night-sky").unwrap();
        let err = manifest.version().unwrap_err();
        assert!(matches!(err, ThemeError::VersionFieldMissing(_)));
    }
}
