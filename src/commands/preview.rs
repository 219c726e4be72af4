use anyhow::Result;
use layout::LayoutId;

use crate::Context;
use crate::cli::PreviewArgs;
use crate::commands::{load_resume, terminal_width};

/// Print a saved resume as text
pub fn run(ctx: &Context, args: PreviewArgs) -> Result<()> {
    let resume = load_resume(&args.file)?;
    let layout = args.layout.map_or(ctx.config.preview.layout, LayoutId::from);
    let width = args.width.unwrap_or_else(terminal_width);

    log::debug!("Previewing {} with {layout} at width {width}", args.file.display());
    let surface = layout::render(&resume, &layout.descriptor());
    print!("{}", layout::text::write(&surface, width));
    Ok(())
}
