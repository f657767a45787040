use std::sync::Arc;

use super::{load_config, output, selector, CheckArgs};
use crate::adapter::StaticMetadata;
use crate::banner::banner_charset;
use crate::domain::{AnsiOutput, BannerMode};
use crate::error::Result;

/// Report the banner sources and settings that `print` would use.
pub fn execute(args: &CheckArgs) -> Result<()> {
    let config = load_config(&args.source)?;
    let selector = selector(&args.source, Arc::new(StaticMetadata::new()));
    let sources = selector.locate(&config);

    output::section("Banner Check");
    match &args.source.config {
        Some(path) => output::field("Config", path.display()),
        None => output::field("Config", "environment only"),
    }
    output::field("Base dir", args.source.base_dir.display());
    output::field("Mode", mode_name(config.banner_mode()));
    output::field("Charset", banner_charset(&config)?);
    output::field("ANSI", ansi_name(AnsiOutput::from_environment(&config)));

    output::section("Sources");
    match &sources.text {
        Some(resource) => output::success(&format!("Text banner: {}", resource.description())),
        None => output::field("Text", "none"),
    }
    match &sources.image {
        Some(resource) if selector.renders_images() => {
            output::success(&format!("Image banner: {}", resource.description()));
        }
        Some(resource) => output::warning(&format!(
            "Image banner {} found but not printed (no image renderer)",
            resource.description()
        )),
        None => output::field("Image", "none"),
    }

    let image_printed = sources.image.is_some() && selector.renders_images();
    if sources.text.is_none() && !image_printed {
        output::warning("No printable banner sources found, the built-in banner will be printed");
    }

    output::success("Banner check complete");

    Ok(())
}

fn mode_name(mode: BannerMode) -> &'static str {
    match mode {
        BannerMode::Off => "off",
        BannerMode::Console => "console",
        BannerMode::Log => "log",
    }
}

fn ansi_name(ansi: AnsiOutput) -> &'static str {
    match ansi {
        AnsiOutput::Detect => "detect",
        AnsiOutput::Always => "always",
        AnsiOutput::Never => "never",
    }
}
