use anyhow::Result;
use colored::Colorize;
use layout::{BlockKind, HeaderPlacement, LayoutId};

use crate::Context;
use crate::ui;

/// List the built-in preview layouts
pub fn run(ctx: &Context) -> Result<()> {
    ui::header("Layouts");

    for id in LayoutId::ALL {
        let descriptor = id.descriptor();
        let marker = if id == ctx.config.preview.layout {
            " (default)".green().to_string()
        } else {
            String::new()
        };
        ui::section(&format!("{}{}", id.display_name(), marker));
        ui::kv("id", id.as_str());

        let header = match descriptor.header {
            HeaderPlacement::Top { centered: true } => "top, centered".to_string(),
            HeaderPlacement::Top { centered: false } => "top".to_string(),
            HeaderPlacement::InColumn(i) => format!("column {}", i + 1),
        };
        ui::kv("header", &header);

        let spans: Vec<String> = descriptor.columns.iter().map(|c| c.span.to_string()).collect();
        ui::kv("columns", &spans.join(":"));

        for (i, column) in descriptor.columns.iter().enumerate() {
            let titles: Vec<&str> = column
                .blocks
                .iter()
                .filter(|b| b.kind != BlockKind::Objective || !descriptor.objective_in_header)
                .map(|b| b.title)
                .collect();
            ui::kv(&format!("column {}", i + 1), &titles.join(", "));
        }
    }

    if !ctx.quiet {
        println!();
        ui::dim("Select one with --layout <id> or [preview] layout in config.toml");
    }
    Ok(())
}
