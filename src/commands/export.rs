use anyhow::{Context as _, Result};
use export::ExportFormat;
use layout::LayoutId;

use crate::Context;
use crate::cli::ExportArgs;
use crate::commands::load_resume;
use crate::progress;

/// Export a saved resume without the wizard
pub fn run(ctx: &Context, args: ExportArgs) -> Result<()> {
    let resume = load_resume(&args.file)?;
    let layout = args.layout.map_or(ctx.config.preview.layout, LayoutId::from);
    let format = args.format.map_or(ctx.config.export.format, ExportFormat::from);
    let options = ctx.config.export.options(args.output.as_deref());

    let surface = layout::render(&resume, &layout.descriptor());
    let exporter = export::for_format(format, options);

    let pb = progress::spinner(&format!("Exporting {} as {format}...", layout.display_name()));
    match exporter.export(&surface) {
        Ok(path) => {
            progress::finish_success(&pb, &format!("Saved {}", path.display()));
            Ok(())
        }
        Err(e) => {
            progress::finish_error(&pb, "Export failed");
            Err(e).context("Could not export resume")
        }
    }
}
