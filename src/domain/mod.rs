//! Banner-agnostic building blocks: source identity, placeholder resolution,
//! ANSI codes, charsets and banner modes.

pub mod ansi;
pub mod charset;
pub mod mode;
pub mod placeholder;
mod source;

pub use ansi::{AnsiColor, AnsiElement, AnsiOutput, AnsiPropertySource, AnsiStyle};
pub use charset::Charset;
pub use mode::BannerMode;
pub use placeholder::{
    resolve_placeholders, EnvironmentPropertySource, MapPropertySource, PropertyResolverChain,
    PropertySource,
};
pub use source::SourceClass;
