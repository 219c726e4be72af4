//! Plain-text writer for terminal previews and `.txt` exports.
//!
//! Columns are stacked top to bottom; the terminal is too narrow for the
//! side-by-side grid, so arrangement shows up as ordering instead.

use crate::descriptor::HeaderPlacement;
use crate::surface::{Column, Content, EntryView, Header, Section, Surface};

/// Narrowest width the writer will lay out for.
pub const MIN_WIDTH: usize = 40;

const INDENT: &str = "  ";

/// Minimum spacing between tags in a grid row.
const TAG_GAP: usize = 2;

/// Write `surface` as plain text wrapped to `width` columns.
pub fn write(surface: &Surface, width: usize) -> String {
    let width = width.max(MIN_WIDTH);
    let mut out = String::new();

    if let HeaderPlacement::Top { centered } = surface.header_placement {
        write_header(&mut out, &surface.header, width, centered);
    }

    for column in &surface.columns {
        write_column(&mut out, surface, column, width);
    }

    // Exactly one trailing newline
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn write_column(out: &mut String, surface: &Surface, column: &Column, width: usize) {
    if column.has_header {
        write_header(out, &surface.header, width, false);
    }
    for section in &column.sections {
        write_section(out, section, width);
    }
}

fn write_header(out: &mut String, header: &Header, width: usize, centered: bool) {
    let place = |line: &str| {
        if centered {
            center(line, width)
        } else {
            line.to_string()
        }
    };

    let name = if header.full_name.trim().is_empty() {
        format!("[{}]", header.initial)
    } else {
        header.full_name.clone()
    };
    push_line(out, &place(&name));

    if header.photo.is_some() {
        push_line(out, &place("(photo attached)"));
    }

    for line in &header.contact {
        push_line(out, &place(line));
    }

    if let Some(objective) = &header.objective {
        out.push('\n');
        for line in wrap(objective, width) {
            push_line(out, &place(&line));
        }
    }
    out.push('\n');
}

fn write_section(out: &mut String, section: &Section, width: usize) {
    let title = section.title.to_uppercase();
    push_line(out, &title);
    push_line(out, &"─".repeat(title.chars().count()));

    match &section.content {
        Content::Paragraph(text) => {
            for line in wrap(text, width - INDENT.len()) {
                push_line(out, &format!("{INDENT}{line}"));
            }
        }
        Content::Entries(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_entry(out, entry, width);
            }
        }
        Content::Tags { tags, columns } => write_tags(out, tags, *columns, width),
    }
    out.push('\n');
}

fn write_entry(out: &mut String, entry: &EntryView, width: usize) {
    let heading = format!("{INDENT}{}", entry.heading);
    match &entry.aside {
        Some(aside) => {
            let used = heading.chars().count() + aside.chars().count();
            let gap = width.saturating_sub(used).max(2);
            push_line(out, &format!("{heading}{}{aside}", " ".repeat(gap)));
        }
        None => push_line(out, &heading),
    }

    let inner = width - INDENT.len() * 2;
    if let Some(sub) = &entry.subheading {
        push_line(out, &format!("{INDENT}{INDENT}{sub}"));
    }
    if let Some(body) = &entry.body {
        for line in wrap(body, inner) {
            push_line(out, &format!("{INDENT}{INDENT}{line}"));
        }
    }
    if let Some(link) = &entry.link {
        push_line(out, &format!("{INDENT}{INDENT}{}: {}", link.label, link.href));
    }
}

fn write_tags(out: &mut String, tags: &[String], columns: u8, width: usize) {
    if columns == 0 {
        for line in wrap(&tags.join(" · "), width - INDENT.len()) {
            push_line(out, &format!("{INDENT}{line}"));
        }
        return;
    }

    let columns = usize::from(columns);
    let cell = (width - INDENT.len()) / columns;
    for row in tags.chunks(columns) {
        let mut line = String::new();
        for (i, tag) in row.iter().enumerate() {
            line.push_str(tag);
            if i + 1 < row.len() {
                // Tags wider than a cell still get a gap before the next one
                let pad = cell.saturating_sub(tag.chars().count()).max(TAG_GAP);
                line.push_str(&" ".repeat(pad));
            }
        }
        push_line(out, &format!("{INDENT}{line}"));
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), line)
}

/// Greedy word wrap; explicit newlines are kept, long words are not split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::LayoutId;
    use crate::render::render;
    use resume::{Education, ResumeAggregate, Skill};

    fn sample() -> ResumeAggregate {
        let mut resume = ResumeAggregate::new();
        resume.personal_info.full_name = "Grace Hopper".to_string();
        resume.personal_info.email = "grace@example.com".to_string();
        resume.personal_info.objective = "Make computers speak English".to_string();
        resume.education.push(Education {
            degree: "PhD Mathematics".to_string(),
            institution: "Yale".to_string(),
            graduation_year: "1934".to_string(),
            achievements: String::new(),
        });
        resume.skills = vec![
            Skill::new("COBOL", 5),
            Skill::new("Compilers", 5),
            Skill::new("Debugging", 4),
        ];
        resume
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
    }

    #[test]
    fn test_simple_layout_text() {
        let text = write(&render(&sample(), &LayoutId::Simple.descriptor()), 60);

        assert!(text.contains("Grace Hopper"));
        assert!(text.contains("grace@example.com"));
        assert!(text.contains("EDUCATION"));
        assert!(text.contains("Yale - 1934"));
        assert!(text.contains("COBOL · Compilers · Debugging"));
        assert!(!text.contains("EXPERIENCE"));
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_two_column_orders_sidebar_first() {
        let text = write(&render(&sample(), &LayoutId::TwoColumn.descriptor()), 60);

        let skills = text.find("SKILLS").unwrap();
        let summary = text.find("PROFESSIONAL SUMMARY").unwrap();
        let education = text.find("EDUCATION").unwrap();
        assert!(skills < summary);
        assert!(summary < education);
    }

    #[test]
    fn test_skill_grid() {
        let text = write(&render(&sample(), &LayoutId::Comprehensive.descriptor()), 40);
        assert!(text.contains("SKILLS & EXPERTISE"));
        let grid_line = text
            .lines()
            .find(|l| l.contains("COBOL"))
            .unwrap();
        assert!(grid_line.contains("Compilers"));
        assert!(!grid_line.contains("Debugging"));
    }

    #[test]
    fn test_skill_grid_separates_long_names() {
        let mut resume = sample();
        resume.skills = vec![
            Skill::new("Distributed Systems Design", 4),
            Skill::new("Rust", 5),
        ];
        let text = write(&render(&resume, &LayoutId::Comprehensive.descriptor()), 40);

        let grid_line = text
            .lines()
            .find(|l| l.contains("Distributed Systems Design"))
            .unwrap();
        assert_eq!(grid_line, "  Distributed Systems Design  Rust");
    }

    #[test]
    fn test_blank_name_shows_initial() {
        let text = write(
            &render(&ResumeAggregate::new(), &LayoutId::Comprehensive.descriptor()),
            40,
        );
        assert!(text.starts_with("[?]"));
    }
}
