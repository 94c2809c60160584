//! themeforge - build VSCode color themes from JSON fragment files.

use clap::Parser;
use themeforge_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(err) = themeforge_cli::run(cli) {
        eprintln!("themeforge: {err}");
        std::process::exit(1);
    }
}
