//! Top-level banner printing.

use std::io::Write;
use std::sync::Arc;

use super::{banner_charset, BannerSelector, DefaultBanner, PrintedBanner};
use crate::domain::{BannerMode, SourceClass};
use crate::error::BannerError;
use crate::port::{Banner, BannerLog, Environment};

/// Chooses a banner and prints it to a log sink or an output stream.
///
/// The banner is the selector's result, else the fallback supplied with
/// [`BannerPrinter::with_fallback`], else [`DefaultBanner`]. Every print
/// returns a [`PrintedBanner`] that can be rendered again later.
pub struct BannerPrinter {
    selector: BannerSelector,
    fallback: Option<Arc<dyn Banner>>,
}

impl BannerPrinter {
    pub fn new(selector: BannerSelector) -> Self {
        Self {
            selector,
            fallback: None,
        }
    }

    /// Banner used when selection finds nothing, instead of [`DefaultBanner`].
    #[must_use]
    pub fn with_fallback(mut self, banner: Arc<dyn Banner>) -> Self {
        self.fallback = Some(banner);
        self
    }

    pub fn selector(&self) -> &BannerSelector {
        &self.selector
    }

    /// Print according to `mode`; `None` when the mode is [`BannerMode::Off`].
    pub fn print(
        &self,
        mode: BannerMode,
        env: &dyn Environment,
        source: Option<&SourceClass>,
        log: &dyn BannerLog,
        out: &mut dyn Write,
    ) -> Option<PrintedBanner> {
        match mode {
            BannerMode::Off => None,
            BannerMode::Console => Some(self.print_to(env, source, out)),
            BannerMode::Log => Some(self.print_to_log(env, source, log)),
        }
    }

    /// Render into memory, decode with the banner charset and pass the text
    /// to `log` at info level. Decode failures go to `log` as a warning.
    pub fn print_to_log(
        &self,
        env: &dyn Environment,
        source: Option<&SourceClass>,
        log: &dyn BannerLog,
    ) -> PrintedBanner {
        let banner = self.banner(env);

        match render_to_string(banner.as_ref(), env, source) {
            Ok(text) => log.info(&text),
            Err(e) => log.warn("Failed to create String for banner", &e),
        }

        PrintedBanner::new(banner, source.cloned())
    }

    /// Render straight to `out`.
    pub fn print_to(
        &self,
        env: &dyn Environment,
        source: Option<&SourceClass>,
        out: &mut dyn Write,
    ) -> PrintedBanner {
        let banner = self.banner(env);
        banner.render(env, source, out);
        PrintedBanner::new(banner, source.cloned())
    }

    fn banner(&self, env: &dyn Environment) -> Arc<dyn Banner> {
        if let Some(selected) = self.selector.select(env) {
            return Arc::from(selected);
        }
        match &self.fallback {
            Some(fallback) => Arc::clone(fallback),
            None => Arc::new(DefaultBanner),
        }
    }
}

fn render_to_string(
    banner: &dyn Banner,
    env: &dyn Environment,
    source: Option<&SourceClass>,
) -> Result<String, BannerError> {
    let mut buffer = Vec::new();
    banner.render(env, source, &mut buffer);
    banner_charset(env)?.decode(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{MapEnvironment, StaticMetadata};
    use crate::testkit::{FixedBanner, InMemoryResourceLoader, RecordingBannerLog};

    fn printer(loader: InMemoryResourceLoader) -> BannerPrinter {
        BannerPrinter::new(BannerSelector::new(
            Arc::new(loader),
            Arc::new(StaticMetadata::new()),
        ))
    }

    fn plain_env() -> MapEnvironment {
        MapEnvironment::new().with("spring.output.ansi.enabled", "never")
    }

    #[test]
    fn falls_back_to_default_banner() {
        let mut out = Vec::new();

        printer(InMemoryResourceLoader::new()).print_to(&plain_env(), None, &mut out);

        assert_eq!(String::from_utf8(out).unwrap(), DefaultBanner::text(false));
    }

    #[test]
    fn caller_fallback_replaces_default() {
        let printer = printer(InMemoryResourceLoader::new())
            .with_fallback(Arc::new(FixedBanner::new("fallback\n")));
        let mut out = Vec::new();

        printer.print_to(&plain_env(), None, &mut out);

        assert_eq!(out, b"fallback\n");
    }

    #[test]
    fn selection_beats_fallback() {
        let printer = printer(InMemoryResourceLoader::new().with("banner.txt", "selected"))
            .with_fallback(Arc::new(FixedBanner::new("fallback\n")));
        let mut out = Vec::new();

        printer.print_to(&plain_env(), None, &mut out);

        assert_eq!(out, b"selected\n");
    }

    #[test]
    fn log_mode_sends_text_to_info() {
        let log = RecordingBannerLog::new();
        let printer = printer(InMemoryResourceLoader::new().with("banner.txt", "logged"));

        printer.print_to_log(&plain_env(), None, &log);

        assert_eq!(log.infos(), vec!["logged\n".to_string()]);
        assert!(log.warnings().is_empty());
    }

    #[test]
    fn bad_charset_in_log_mode_warns() {
        let log = RecordingBannerLog::new();
        let env = plain_env().with("spring.banner.charset", "KOI8-Z");

        printer(InMemoryResourceLoader::new()).print_to_log(&env, None, &log);

        assert!(log.infos().is_empty());
        assert_eq!(log.warnings().len(), 1);
        assert!(log.warnings()[0].contains("Failed to create String for banner"));
    }

    #[test]
    fn returned_banner_captures_source() {
        let source = SourceClass::new("demo::App");
        let mut out = Vec::new();

        let printed =
            printer(InMemoryResourceLoader::new()).print_to(&plain_env(), Some(&source), &mut out);

        assert_eq!(printed.source(), Some(&source));
    }

    #[test]
    fn off_mode_prints_nothing() {
        let log = RecordingBannerLog::new();
        let mut out = Vec::new();

        let printed = printer(InMemoryResourceLoader::new()).print(
            BannerMode::Off,
            &plain_env(),
            None,
            &log,
            &mut out,
        );

        assert!(printed.is_none());
        assert!(out.is_empty());
        assert!(log.infos().is_empty());
    }

    #[test]
    fn mode_dispatches_to_destination() {
        let printer = printer(InMemoryResourceLoader::new().with("banner.txt", "hi"));
        let log = RecordingBannerLog::new();
        let mut out = Vec::new();

        printer.print(BannerMode::Console, &plain_env(), None, &log, &mut out);
        assert_eq!(out, b"hi\n");
        assert!(log.infos().is_empty());

        out.clear();
        printer.print(BannerMode::Log, &plain_env(), None, &log, &mut out);
        assert!(out.is_empty());
        assert_eq!(log.infos(), vec!["hi\n".to_string()]);
    }
}
