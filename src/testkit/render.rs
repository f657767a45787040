//! Recording collaborators and trivial banners.

use std::error::Error as StdError;
use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::domain::SourceClass;
use crate::error::BannerError;
use crate::port::{Banner, BannerLog, Environment, ImageRenderer, Resource};

/// Image renderer that writes fixed art and records what it rendered.
#[derive(Debug, Clone, Default)]
pub struct RecordingImageRenderer {
    art: String,
    failure: Option<String>,
    rendered: Arc<Mutex<Vec<String>>>,
}

impl RecordingImageRenderer {
    pub fn new(art: &str) -> Self {
        Self {
            art: art.to_string(),
            ..Self::default()
        }
    }

    /// Renderer that fails every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Descriptions of the resources rendered so far.
    pub fn rendered(&self) -> Vec<String> {
        self.rendered.lock().expect("lock rendered images").clone()
    }
}

impl ImageRenderer for RecordingImageRenderer {
    fn render(
        &self,
        resource: &dyn Resource,
        _env: &dyn Environment,
        out: &mut dyn Write,
    ) -> Result<(), BannerError> {
        if let Some(message) = &self.failure {
            return Err(BannerError::Image(message.clone()));
        }
        self.rendered
            .lock()
            .expect("lock rendered images")
            .push(resource.description());
        out.write_all(self.art.as_bytes())
            .map_err(BannerError::Write)
    }
}

/// Thread-safe log sink collector for banner log assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingBannerLog {
    infos: Arc<Mutex<Vec<String>>>,
    warnings: Arc<Mutex<Vec<String>>>,
}

impl RecordingBannerLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().expect("lock banner log").clone()
    }

    /// Warnings formatted as `message: cause`.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().expect("lock banner log").clone()
    }
}

impl BannerLog for RecordingBannerLog {
    fn info(&self, message: &str) {
        self.infos
            .lock()
            .expect("lock banner log")
            .push(message.to_string());
    }

    fn warn(&self, message: &str, cause: &(dyn StdError + 'static)) {
        self.warnings
            .lock()
            .expect("lock banner log")
            .push(format!("{message}: {cause}"));
    }
}

/// Banner that always writes the same text.
#[derive(Debug, Clone)]
pub struct FixedBanner {
    text: String,
}

impl FixedBanner {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Banner for FixedBanner {
    fn render(&self, _env: &dyn Environment, _source: Option<&SourceClass>, out: &mut dyn Write) {
        let _ = out.write_all(self.text.as_bytes());
    }
}

/// Banner that writes the name of the source class it was given, or `<none>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceEchoBanner;

impl Banner for SourceEchoBanner {
    fn render(&self, _env: &dyn Environment, source: Option<&SourceClass>, out: &mut dyn Write) {
        let name = source.map_or("<none>", SourceClass::name);
        let _ = out.write_all(name.as_bytes());
    }
}
