//! The `marquee` command-line front end.
//!
//! `print` selects and prints a banner; `check` reports which sources
//! would be used without rendering anything.

mod check;
pub mod command;
pub mod output;
mod print;

use std::sync::Arc;

pub use command::{CheckArgs, Cli, ColorChoice, Commands, ModeArg, PrintArgs, SourceArgs};

use crate::adapter::FileSystemResourceLoader;
use crate::banner::BannerSelector;
use crate::config::Config;
use crate::error::Result;
use crate::port::PackageMetadata;

/// Apply global flags: output mode and color override.
pub fn configure(cli: &Cli) {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => owo_colors::unset_override(),
    }
}

/// Run the parsed command.
///
/// # Errors
///
/// Returns configuration and I/O errors; banner rendering problems are
/// logged, never returned.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Print(args) => print::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}

/// Load configuration from `--config` or the environment, then start logging.
fn load_config(args: &SourceArgs) -> Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    config
        .logging()
        .clone()
        .with_verbosity(output::verbosity())
        .init();

    Ok(config)
}

fn selector(args: &SourceArgs, metadata: Arc<dyn PackageMetadata>) -> BannerSelector {
    BannerSelector::new(
        Arc::new(FileSystemResourceLoader::new(args.base_dir.clone())),
        metadata,
    )
}
