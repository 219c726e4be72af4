//! Command implementations

pub mod export;
pub mod layouts;
pub mod new;
pub mod preview;

use anyhow::{Context, Result};
use resume::ResumeAggregate;
use std::path::Path;

/// Read a saved resume
pub fn load_resume(path: &Path) -> Result<ResumeAggregate> {
    ResumeAggregate::load(path).with_context(|| format!("Could not load resume from {}", path.display()))
}

/// Current terminal width, or 80 when not attached to a terminal
pub fn terminal_width() -> usize {
    let term = console::Term::stdout();
    if term.is_term() {
        usize::from(term.size().1)
    } else {
        80
    }
}
