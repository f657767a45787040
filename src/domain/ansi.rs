//! ANSI escape codes usable from banner text as `${AnsiColor.RED}` and friends.

use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

use super::placeholder::PropertySource;
use crate::error::ConfigError;
use crate::port::Environment;

/// Configuration key controlling ANSI output.
pub const ANSI_ENABLED_PROPERTY: &str = "spring.output.ansi.enabled";

const ESC: &str = "\x1b[";
const END: &str = "m";

/// Whether ANSI codes are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnsiOutput {
    /// Emit codes only when stdout is a terminal.
    #[default]
    Detect,
    Always,
    Never,
}

impl AnsiOutput {
    /// Read [`ANSI_ENABLED_PROPERTY`], falling back to [`AnsiOutput::Detect`]
    /// when it is unset or unrecognised.
    pub fn from_environment(env: &dyn Environment) -> Self {
        env.parse_property(ANSI_ENABLED_PROPERTY)
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Resolve the mode to a yes/no answer for the current process.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Detect => std::io::stdout().is_terminal(),
        }
    }
}

impl FromStr for AnsiOutput {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detect" => Ok(Self::Detect),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(ConfigError::InvalidValue {
                field: ANSI_ENABLED_PROPERTY,
                reason: format!("expected detect, always or never, got '{other}'"),
            }),
        }
    }
}

/// Text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiStyle {
    Normal,
    Bold,
    Faint,
    Italic,
    Underline,
}

impl AnsiStyle {
    const ALL: [(&'static str, Self); 5] = [
        ("NORMAL", Self::Normal),
        ("BOLD", Self::Bold),
        ("FAINT", Self::Faint),
        ("ITALIC", Self::Italic),
        ("UNDERLINE", Self::Underline),
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|(n, _)| *n == name).map(|(_, s)| *s)
    }

    const fn code(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Bold => 1,
            Self::Faint => 2,
            Self::Italic => 3,
            Self::Underline => 4,
        }
    }
}

/// The sixteen named terminal colors plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColor {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    const ALL: [(&'static str, Self); 17] = [
        ("DEFAULT", Self::Default),
        ("BLACK", Self::Black),
        ("RED", Self::Red),
        ("GREEN", Self::Green),
        ("YELLOW", Self::Yellow),
        ("BLUE", Self::Blue),
        ("MAGENTA", Self::Magenta),
        ("CYAN", Self::Cyan),
        ("WHITE", Self::White),
        ("BRIGHT_BLACK", Self::BrightBlack),
        ("BRIGHT_RED", Self::BrightRed),
        ("BRIGHT_GREEN", Self::BrightGreen),
        ("BRIGHT_YELLOW", Self::BrightYellow),
        ("BRIGHT_BLUE", Self::BrightBlue),
        ("BRIGHT_MAGENTA", Self::BrightMagenta),
        ("BRIGHT_CYAN", Self::BrightCyan),
        ("BRIGHT_WHITE", Self::BrightWhite),
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }

    /// Foreground SGR code; backgrounds add 10.
    const fn foreground(self) -> u8 {
        match self {
            Self::Default => 39,
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::BrightBlack => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }
}

/// A single SGR instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiElement {
    Style(AnsiStyle),
    Foreground(AnsiColor),
    Background(AnsiColor),
    Foreground8Bit(u8),
    Background8Bit(u8),
}

impl AnsiElement {
    /// Parse a placeholder key such as `AnsiColor.RED` or `AnsiBackground.208`.
    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(name) = key.strip_prefix("AnsiStyle.") {
            return AnsiStyle::from_name(name).map(Self::Style);
        }
        if let Some(name) = key.strip_prefix("AnsiColor.") {
            return AnsiColor::from_name(name)
                .map(Self::Foreground)
                .or_else(|| name.parse().ok().map(Self::Foreground8Bit));
        }
        if let Some(name) = key.strip_prefix("AnsiBackground.") {
            return AnsiColor::from_name(name)
                .map(Self::Background)
                .or_else(|| name.parse().ok().map(Self::Background8Bit));
        }
        if let Some(name) = key.strip_prefix("Ansi.") {
            return AnsiStyle::from_name(name)
                .map(Self::Style)
                .or_else(|| AnsiColor::from_name(name).map(Self::Foreground));
        }
        None
    }

    /// Escape sequence for this element, or empty when `enabled` is false.
    #[must_use]
    pub fn encode(self, enabled: bool) -> String {
        if enabled {
            format!("{ESC}{self}{END}")
        } else {
            String::new()
        }
    }
}

impl fmt::Display for AnsiElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(style) => write!(f, "{}", style.code()),
            Self::Foreground(color) => write!(f, "{}", color.foreground()),
            Self::Background(color) => write!(f, "{}", color.foreground() + 10),
            Self::Foreground8Bit(n) => write!(f, "38;5;{n}"),
            Self::Background8Bit(n) => write!(f, "48;5;{n}"),
        }
    }
}

/// Resolves ANSI placeholder keys to escape codes.
///
/// Recognised keys resolve even when output is disabled (to an empty
/// string), so `${AnsiColor.RED}` never leaks into plain output.
#[derive(Debug, Clone, Copy)]
pub struct AnsiPropertySource {
    enabled: bool,
}

impl AnsiPropertySource {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl PropertySource for AnsiPropertySource {
    fn name(&self) -> &str {
        "ansi"
    }

    fn property(&self, key: &str) -> Option<String> {
        AnsiElement::from_key(key).map(|element| element.encode(self.enabled))
    }
}
