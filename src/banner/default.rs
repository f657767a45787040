//! Built-in banner used when nothing else is available.

use std::io::Write;

use tracing::warn;

use super::banner_charset;
use crate::domain::{AnsiColor, AnsiElement, AnsiOutput, AnsiStyle, SourceClass};
use crate::port::{Banner, Environment};

const ART: [&str; 6] = [
    "",
    "  _ __ ___   __ _ _ __ __ _ _   _  ___  ___",
    " | '_ ` _ \\ / _` | '__/ _` | | | |/ _ \\/ _ \\",
    " | | | | | | (_| | | | (_| | |_| |  __/  __/",
    " |_| |_| |_|\\__,_|_|   \\__, |\\__,_|\\___|\\___|",
    "                          |_|",
];

const NAME: &str = " :: marquee :: ";

const STRAP_LINE_SIZE: usize = 42;

/// Fixed marquee banner with the framework version on a strap line.
///
/// Placeholders are not resolved; only the ANSI output mode and the banner
/// charset are read from the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBanner;

impl DefaultBanner {
    /// The banner text for the given ANSI setting.
    #[must_use]
    pub fn text(ansi_enabled: bool) -> String {
        let version = format!(" (v{})", env!("CARGO_PKG_VERSION"));
        let padding = " ".repeat(STRAP_LINE_SIZE.saturating_sub(NAME.len() + version.len()));

        let mut text = ART.join("\n");
        text.push('\n');
        text.push_str(&AnsiElement::Foreground(AnsiColor::Green).encode(ansi_enabled));
        text.push_str(NAME);
        text.push_str(&AnsiElement::Foreground(AnsiColor::Default).encode(ansi_enabled));
        text.push_str(&padding);
        text.push_str(&AnsiElement::Style(AnsiStyle::Faint).encode(ansi_enabled));
        text.push_str(&version);
        text.push_str(&AnsiElement::Style(AnsiStyle::Normal).encode(ansi_enabled));
        text.push_str("\n\n");
        text
    }
}

impl Banner for DefaultBanner {
    fn render(&self, env: &dyn Environment, _source: Option<&SourceClass>, out: &mut dyn Write) {
        let text = Self::text(AnsiOutput::from_environment(env).is_enabled());
        let charset = banner_charset(env).unwrap_or_default();

        if let Err(e) = out.write_all(&charset.encode(&text)) {
            warn!(error = %e, "Default banner not printable");
        }
    }
}
