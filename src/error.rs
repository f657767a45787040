use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while constructing or rendering a banner.
///
/// Only [`BannerError::ResourceNotFound`] ever escapes to callers (from
/// [`ResourceBanner::new`](crate::banner::ResourceBanner::new)); the rest are
/// caught inside `render` and logged.
#[derive(Error, Debug)]
pub enum BannerError {
    #[error("banner resource does not exist: {location}")]
    ResourceNotFound { location: String },

    #[error("failed to read banner resource: {0}")]
    Read(#[source] std::io::Error),

    #[error("banner bytes are not valid {charset}")]
    Decode { charset: &'static str },

    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    #[error("failed to write banner: {0}")]
    Write(#[source] std::io::Error),

    #[error("image banner failed: {0}")]
    Image(String),
}

impl BannerError {
    /// Short name of the failure, used in render warnings.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "ResourceNotFound",
            Self::Read(_) => "Read",
            Self::Decode { .. } => "Decode",
            Self::UnsupportedCharset(_) => "UnsupportedCharset",
            Self::Write(_) => "Write",
            Self::Image(_) => "Image",
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Banner(#[from] BannerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
