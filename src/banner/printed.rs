//! Replayable wrapper returned by the printer.

use std::io::Write;
use std::sync::Arc;

use crate::domain::SourceClass;
use crate::port::{Banner, Environment};

/// A banner that remembers the source class it was first printed with.
///
/// Rendering with `source = None` substitutes the captured class, so callers
/// can print the same banner again without carrying the class around.
/// Selection is never re-run.
#[derive(Clone)]
pub struct PrintedBanner {
    banner: Arc<dyn Banner>,
    source: Option<SourceClass>,
}

impl PrintedBanner {
    pub fn new(banner: Arc<dyn Banner>, source: Option<SourceClass>) -> Self {
        Self { banner, source }
    }

    pub fn source(&self) -> Option<&SourceClass> {
        self.source.as_ref()
    }
}

impl Banner for PrintedBanner {
    fn render(&self, env: &dyn Environment, source: Option<&SourceClass>, out: &mut dyn Write) {
        let source = source.or(self.source.as_ref());
        self.banner.render(env, source, out);
    }
}

impl std::fmt::Debug for PrintedBanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintedBanner")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MapEnvironment;
    use crate::testkit::SourceEchoBanner;

    fn render(banner: &PrintedBanner, source: Option<&SourceClass>) -> String {
        let mut out = Vec::new();
        banner.render(&MapEnvironment::new(), source, &mut out);
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn absent_source_uses_captured_class() {
        let captured = SourceClass::new("demo::App");
        let printed = PrintedBanner::new(Arc::new(SourceEchoBanner), Some(captured.clone()));

        assert_eq!(render(&printed, None), render(&printed, Some(&captured)));
        assert_eq!(render(&printed, None), "demo::App");
    }

    #[test]
    fn explicit_source_wins() {
        let printed = PrintedBanner::new(
            Arc::new(SourceEchoBanner),
            Some(SourceClass::new("demo::App")),
        );

        assert_eq!(render(&printed, Some(&SourceClass::new("other::Main"))), "other::Main");
    }

    #[test]
    fn nothing_captured_passes_none() {
        let printed = PrintedBanner::new(Arc::new(SourceEchoBanner), None);

        assert_eq!(render(&printed, None), "<none>");
        assert!(printed.source().is_none());
    }
}
