//! Operator-facing CLI output.
//!
//! Human-readable lines with colored symbols, or one JSON object per line
//! when `--json` is set. Colors follow `--color` through owo-colors'
//! global override; banner text itself is never restyled here.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::{OwoColorize, Stream};
use serde_json::{json, Value};

/// Output flags taken from the global CLI options.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub json: bool,
    /// Hide informational lines. Warnings and errors still print.
    pub quiet: bool,
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Install the output flags. Only the first call per process takes effect.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

fn current() -> OutputConfig {
    OUTPUT_CONFIG.get().copied().unwrap_or_default()
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

/// How a line behaves in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    fn shown(self, config: OutputConfig) -> bool {
        config.json || !config.quiet || self != Level::Info
    }
}

/// Write one line: a `{"type", "payload"}` object in JSON mode, otherwise
/// whatever `human` prints.
fn emit(level: Level, kind: &str, payload: Value, human: impl FnOnce()) {
    let config = current();
    if !level.shown(config) {
        return;
    }
    if !config.json {
        human();
        return;
    }

    let line = json!({ "type": kind, "payload": payload });
    if level == Level::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    emit(
        Level::Info,
        "field",
        json!({ "label": label, "value": value }),
        || {
            println!(
                "  {:<12} {}",
                label.if_supports_color(Stream::Stdout, |l| l.dimmed()),
                value
            );
        },
    );
}

/// Print a check that passed.
pub fn success(message: &str) {
    emit(Level::Info, "success", json!({ "message": message }), || {
        println!(
            "  {} {}",
            "✓".if_supports_color(Stream::Stdout, |s| s.green()),
            message
        );
    });
}

/// Print a warning line.
pub fn warning(message: &str) {
    emit(Level::Warn, "warning", json!({ "message": message }), || {
        println!(
            "  {} {}",
            "⚠".if_supports_color(Stream::Stdout, |s| s.yellow()),
            message
        );
    });
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    emit(Level::Error, "error", json!({ "message": message }), || {
        eprintln!(
            "  {} {}",
            "×".if_supports_color(Stream::Stderr, |s| s.red()),
            message
        );
    });
}

/// Start a titled block of fields.
pub fn section(title: &str) {
    emit(Level::Info, "section", json!({ "title": title }), || {
        println!();
        println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
    });
}

/// Emit rendered banner text as a JSON line. Only meaningful in JSON mode.
pub fn banner(mode: &str, text: &str) {
    println!(
        "{}",
        json!({ "type": "banner", "payload": { "mode": mode, "text": text } })
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_info_lines_in_text_mode_only() {
        let quiet = OutputConfig::new(false, true, 0);

        assert!(!Level::Info.shown(quiet));
        assert!(Level::Warn.shown(quiet));
        assert!(Level::Error.shown(quiet));
        assert!(Level::Info.shown(OutputConfig::new(true, true, 0)));
        assert!(Level::Info.shown(OutputConfig::new(false, false, 2)));
    }

    #[test]
    fn default_config_is_plain() {
        let config = OutputConfig::default();

        assert!(!config.json);
        assert!(!config.quiet);
        assert_eq!(config.verbose, 0);
    }
}
