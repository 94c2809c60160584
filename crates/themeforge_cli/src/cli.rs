//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

const WORKFLOW_HELP: &str = "\
Workflow:
  1. themeforge init my-theme \"My Theme\" --type dark
  2. Edit my-theme/parts/*.json
  3. themeforge merge my-theme
  4. themeforge package my-theme
  5. code --install-extension my-theme/my-theme-0.0.1.vsix";

/// Build VSCode color themes from JSON fragment files.
#[derive(Parser, Debug)]
#[command(name = "themeforge")]
#[command(about = "Build VSCode color themes from JSON fragment files")]
#[command(version)]
#[command(after_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy the template and initialize a new theme
    Init {
        /// Directory name and file-name prefix for the new theme
        theme_id: String,
        /// Human-readable display name
        theme_name: String,
        /// Theme appearance
        #[arg(long = "type", value_enum, default_value_t = Appearance::Dark)]
        appearance: Appearance,
        /// Scaffold from this directory instead of the built-in template
        #[arg(long, value_name = "DIR")]
        template: Option<PathBuf>,
    },
    /// Merge parts/*.json into themes/<theme-id>-color-theme.json
    Merge {
        theme_id: String,
    },
    /// Package the theme as a .vsix archive with vsce
    Package {
        theme_id: String,
    },
    /// Increment the extension version (default: patch)
    Bump {
        theme_id: String,
        /// patch, minor, or major; anything else bumps patch
        #[arg(default_value = "patch")]
        level: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// The manifest `uiTheme` value VSCode expects for this appearance.
    pub fn ui_theme(self) -> &'static str {
        match self {
            Appearance::Dark => "vs-dark",
            Appearance::Light => "vs",
        }
    }

    /// The `type` value carried in the base fragment and theme document.
    pub fn theme_type(self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        }
    }
}
