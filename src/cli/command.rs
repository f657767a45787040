//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::BannerMode;

/// Resolve and print application startup banners
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for operator messages.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select and print the banner
    Print(PrintArgs),

    /// Report which banner sources would be used
    Check(CheckArgs),
}

/// Options shared by every subcommand that reads configuration.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory that relative and `classpath:` banner locations resolve against
    #[arg(long, default_value = ".")]
    pub base_dir: PathBuf,
}

/// Arguments for `marquee print`.
#[derive(Args, Debug, Clone)]
pub struct PrintArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Banner mode, overriding `spring.main.banner-mode`
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Name of the launching application's entry type
    #[arg(long = "source")]
    pub source_class: Option<String>,

    /// Application version reported to the banner
    #[arg(long)]
    pub app_version: Option<String>,

    /// Application title reported to the banner
    #[arg(long)]
    pub app_title: Option<String>,
}

/// Arguments for `marquee check`.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Banner mode accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Off,
    Console,
    Log,
}

impl From<ModeArg> for BannerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Off => Self::Off,
            ModeArg::Console => Self::Console,
            ModeArg::Log => Self::Log,
        }
    }
}
