//! themeforge core library
//!
//! Building blocks for assembling VSCode color-theme extensions from JSON
//! fragment files:
//!
//! - **Fragments**: `parts/base.json` plus color, token, and semantic-token
//!   fragments, loaded and folded in a fixed order ([`fragments`])
//! - **Theme assembly**: merging fragments into the final
//!   `<id>-color-theme.json` document ([`theme`])
//! - **Manifest**: order-preserving read/rewrite of the extension
//!   `package.json` ([`manifest`])
//! - **Versioning**: `MAJOR.MINOR.PATCH` parsing and bumping ([`version`])
//! - **Filesystem**: recursive template copy and placeholder substitution
//!   ([`fsutil`])
//!
//! # Quick start
//!
//! ```rust,ignore
//! use themeforge_core::{merge_theme, BumpLevel, Manifest};
//!
//! // Rebuild themes/<id>-color-theme.json from parts/*.json
//! let written = merge_theme(&theme_dir, "night-sky")?;
//!
//! // Bump the extension version
//! let mut manifest = Manifest::load(&theme_dir, "night-sky")?;
//! let next = manifest.version()?.bumped(BumpLevel::Minor);
//! manifest.set_version(next);
//! manifest.save()?;
//! ```
//!
//! All operations are synchronous, single-pass filesystem transformations.
//! The merged theme document is a derived artifact: it is fully regenerated
//! on every merge and is byte-stable for unchanged inputs.

pub mod error;
pub mod fragments;
pub mod fsutil;
pub mod manifest;
pub mod theme;
pub mod version;

// Re-export commonly used types
pub use error::{Result, ThemeError};
pub use fragments::BaseFragment;
pub use manifest::Manifest;
pub use theme::{merge_theme, theme_file_name, ThemeDocument};
pub use version::{BumpLevel, Version};
