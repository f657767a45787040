use std::io::{self, Write};
use std::sync::Arc;

use tracing::debug;

use super::{load_config, output, selector, PrintArgs};
use crate::adapter::{StaticMetadata, TracingBannerLog};
use crate::banner::{banner_charset, BannerPrinter};
use crate::domain::{BannerMode, SourceClass};
use crate::error::Result;

/// Print the banner for the configured environment.
pub fn execute(args: &PrintArgs) -> Result<()> {
    let config = load_config(&args.source)?;
    let mode = args.mode.map_or_else(|| config.banner_mode(), BannerMode::from);

    let metadata = StaticMetadata::new()
        .with_default(args.app_title.as_deref(), args.app_version.as_deref());
    let printer = BannerPrinter::new(selector(&args.source, Arc::new(metadata)));
    let source = args.source_class.as_deref().map(SourceClass::new);
    let log = TracingBannerLog;

    debug!(mode = ?mode, base_dir = %args.source.base_dir.display(), "Printing banner");

    if output::is_json() {
        let mut buffer = Vec::new();
        if mode == BannerMode::Console {
            printer.print_to(&config, source.as_ref(), &mut buffer);
            output::banner("console", &banner_charset(&config)?.decode(&buffer)?);
        } else {
            printer.print(mode, &config, source.as_ref(), &log, &mut buffer);
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    printer.print(mode, &config, source.as_ref(), &log, &mut out);
    out.flush()?;

    Ok(())
}
