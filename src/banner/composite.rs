//! Banner made of other banners.

use std::io::Write;

use crate::domain::SourceClass;
use crate::port::{Banner, Environment};

/// Ordered collection of banners rendered one after another.
#[derive(Default)]
pub struct Banners {
    banners: Vec<Box<dyn Banner>>,
}

impl Banners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, banner: Box<dyn Banner>) {
        self.banners.push(banner);
    }

    pub fn add_if_some(&mut self, banner: Option<Box<dyn Banner>>) {
        if let Some(banner) = banner {
            self.push(banner);
        }
    }

    pub fn len(&self) -> usize {
        self.banners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    /// Collapse to the single banner when there is only one, `None` when empty.
    pub fn into_banner(mut self) -> Option<Box<dyn Banner>> {
        match self.banners.len() {
            0 => None,
            1 => self.banners.pop(),
            _ => Some(Box::new(self)),
        }
    }
}

impl Banner for Banners {
    fn render(&self, env: &dyn Environment, source: Option<&SourceClass>, out: &mut dyn Write) {
        for banner in &self.banners {
            banner.render(env, source, out);
        }
    }
}
