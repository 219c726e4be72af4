use colored::Colorize;
use resume::SectionKey;
use wizard::{Notification, NotificationLevel, StepSequencer, StepStatus};

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a warning message
pub fn warn(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a dim/muted message
pub fn dim(msg: &str) {
    println!("  {}", msg.dimmed());
}

/// Print a header/title
pub fn header(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(title.chars().count()).dimmed());
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

// ============================================================================
// Wizard
// ============================================================================

/// Progress line: `✓ Personal Info  ● Education  ○ Experience ...`
pub fn progress_line(steps: &StepSequencer<SectionKey>, color: bool) -> String {
    steps
        .indicators()
        .iter()
        .map(|i| {
            let label = format!("{} {}", i.status.glyph(), i.step.title());
            if !color {
                return label;
            }
            match i.status {
                StepStatus::Completed => label.green().to_string(),
                StepStatus::Active => label.cyan().bold().to_string(),
                StepStatus::Pending => label.dimmed().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Print the colored progress line
pub fn progress(steps: &StepSequencer<SectionKey>) {
    println!();
    println!("{}", progress_line(steps, true));
}

/// Print a coordinator notification with the matching helper
pub fn notify(note: &Notification) {
    let text = format!("{}: {}", note.title.bold(), note.message);
    match note.level {
        NotificationLevel::Info => info(&text),
        NotificationLevel::Success => success(&text),
        NotificationLevel::Warning => warn(&text),
        NotificationLevel::Error => error(&text),
    }
}

/// Print the vitae banner
pub fn banner() {
    println!(
        "{}",
        r"
        _ _
 __   _(_) |_ __ _  ___
 \ \ / / | __/ _` |/ _ \
  \ V /| | || (_| |  __/
   \_/ |_|\__\__,_|\___|
"
        .cyan()
    );
}

// ============================================================================
// Tests
// ============================================================================
