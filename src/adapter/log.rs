//! Log sink backed by `tracing`.

use std::error::Error as StdError;

use tracing::{info, warn};

use crate::port::BannerLog;

/// Emits banner text as `tracing` events under the `marquee::banner` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBannerLog;

impl BannerLog for TracingBannerLog {
    fn info(&self, message: &str) {
        info!(target: "marquee::banner", "\n{message}");
    }

    fn warn(&self, message: &str, cause: &(dyn StdError + 'static)) {
        warn!(target: "marquee::banner", error = %cause, "{message}");
    }
}
