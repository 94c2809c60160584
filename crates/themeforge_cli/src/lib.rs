//! Command-line front end for themeforge.
//!
//! `main` stays thin; dispatch lives here so integration tests can drive
//! commands against a temporary working directory without spawning the
//! binary.

pub mod cli;
pub mod packager;
pub mod scaffold;
mod template;

use std::env;

use anyhow::{Context, Result};
use clap::CommandFactory;
use themeforge_core::{BumpLevel, Manifest};

pub use cli::{Appearance, Cli, Command};

/// Execute one parsed invocation. With no subcommand, print help and return.
pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command()
            .print_help()
            .context("failed to print help")?;
        return Ok(());
    };

    let base_dir = env::current_dir().context("cannot determine working directory")?;

    match command {
        Command::Init {
            theme_id,
            theme_name,
            appearance,
            template,
        } => scaffold::init_theme(
            &base_dir,
            &theme_id,
            &theme_name,
            appearance,
            template.as_deref(),
        ),
        Command::Merge { theme_id } => {
            let theme_path = themeforge_core::merge_theme(&base_dir.join(&theme_id), &theme_id)?;
            println!("Merged theme: {}", theme_path.display());
            Ok(())
        }
        Command::Bump { theme_id, level } => {
            let theme_dir = base_dir.join(&theme_id);
            let mut manifest = Manifest::load(&theme_dir, &theme_id)?;
            let next = manifest.version()?.bumped(BumpLevel::parse(&level));
            manifest.set_version(next);
            manifest.save()?;
            println!("Version updated: {next}");
            Ok(())
        }
        Command::Package { theme_id } => packager::package_theme(&base_dir.join(&theme_id), &theme_id),
    }
}
