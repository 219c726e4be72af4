//! Standalone HTML writer.
//!
//! Produces a single self-contained page (inline CSS, photo embedded as a data
//! URI) sized to a fixed page width so it prints one page wide. All user
//! content is escaped.

use std::fmt::Write as _;

use crate::descriptor::HeaderPlacement;
use crate::surface::{Column, Content, EntryView, Header, Section, Surface};

/// Page options for the HTML writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Document title
    pub title: String,
    /// CSS page width, e.g. `210mm`
    pub page_width: String,
    /// CSS `@page` size keyword, e.g. `A4`
    pub page_size: String,
    /// Optional `<meta name="generator">` content
    pub generator: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Resume".to_string(),
            page_width: "210mm".to_string(),
            page_size: "A4".to_string(),
            generator: None,
        }
    }
}

const STYLE: &str = "\
*{box-sizing:border-box}\
body{margin:0;font-family:-apple-system,'Segoe UI',Helvetica,Arial,sans-serif;color:#1f2933;background:#fff}\
.page{margin:0 auto;padding:12mm}\
.grid{display:grid;gap:24px}\
.header{margin-bottom:24px}\
.header.centered{text-align:center}\
.avatar{border-radius:50%;object-fit:cover;display:inline-flex;align-items:center;justify-content:center;background:#e4e7eb;font-weight:700}\
.contact p{margin:2px 0;color:#616e7c;font-size:13px}\
h2{margin:8px 0}\
h3{font-size:17px;border-bottom:1px solid #e4e7eb;padding-bottom:6px}\
.entry{margin-bottom:12px}\
.entry .heading{font-weight:600;display:flex;justify-content:space-between}\
.entry .sub{color:#616e7c;font-size:13px}\
.entry .body{font-size:13px;margin-top:4px;white-space:pre-wrap}\
.tags{display:flex;flex-wrap:wrap;gap:8px}\
.tags.grid-tags{display:grid}\
.tag{padding:4px 12px;background:#eef2ff;border-radius:999px;font-size:13px}\
a{color:#3b5bdb;font-size:13px}";

/// Write `surface` as a complete HTML document.
pub fn write(surface: &Surface, options: &HtmlOptions) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(&options.title));
    if let Some(generator) = &options.generator {
        let _ = writeln!(out, "<meta name=\"generator\" content=\"{}\">", escape(generator));
    }
    let _ = writeln!(
        out,
        "<style>@page{{size:{} portrait;margin:0}}{STYLE}.page{{width:{}}}</style>",
        escape(&options.page_size),
        escape(&options.page_width)
    );
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(
        out,
        "<div class=\"page\" id=\"resume-preview\" data-layout=\"{}\">",
        surface.layout
    );

    if let HeaderPlacement::Top { centered } = surface.header_placement {
        write_header(&mut out, &surface.header, surface.avatar_px, centered);
    }

    let template: Vec<String> = surface
        .columns
        .iter()
        .map(|c| format!("{}fr", c.span))
        .collect();
    let _ = writeln!(
        out,
        "<div class=\"grid\" style=\"grid-template-columns:{}\">",
        template.join(" ")
    );
    for column in &surface.columns {
        write_column(&mut out, surface, column);
    }
    out.push_str("</div>\n</div>\n</body>\n</html>\n");
    out
}

fn write_column(out: &mut String, surface: &Surface, column: &Column) {
    out.push_str("<div class=\"column\">\n");
    if column.has_header {
        write_header(out, &surface.header, surface.avatar_px, true);
    }
    for section in &column.sections {
        write_section(out, section);
    }
    out.push_str("</div>\n");
}

fn write_header(out: &mut String, header: &Header, avatar_px: u16, centered: bool) {
    let class = if centered { "header centered" } else { "header" };
    let _ = writeln!(out, "<div class=\"{class}\">");

    let size = format!("width:{avatar_px}px;height:{avatar_px}px");
    match &header.photo {
        Some(uri) => {
            let _ = writeln!(
                out,
                "<img class=\"avatar\" style=\"{size}\" src=\"{}\" alt=\"{}\">",
                escape(uri),
                escape(&header.full_name)
            );
        }
        None => {
            let _ = writeln!(
                out,
                "<div class=\"avatar\" style=\"{size}\">{}</div>",
                escape(&header.initial)
            );
        }
    }

    let _ = writeln!(out, "<h2>{}</h2>", escape(&header.full_name));
    out.push_str("<div class=\"contact\">\n");
    for line in &header.contact {
        let _ = writeln!(out, "<p>{}</p>", escape(line));
    }
    out.push_str("</div>\n");
    if let Some(objective) = &header.objective {
        let _ = writeln!(out, "<p class=\"objective\">{}</p>", escape(objective));
    }
    out.push_str("</div>\n");
}

fn write_section(out: &mut String, section: &Section) {
    out.push_str("<section>\n");
    let _ = writeln!(out, "<h3>{}</h3>", escape(&section.title));
    match &section.content {
        Content::Paragraph(text) => {
            let _ = writeln!(out, "<p>{}</p>", escape(text));
        }
        Content::Entries(entries) => {
            for entry in entries {
                write_entry(out, entry);
            }
        }
        Content::Tags { tags, columns } => {
            if *columns == 0 {
                out.push_str("<div class=\"tags\">\n");
            } else {
                let _ = writeln!(
                    out,
                    "<div class=\"tags grid-tags\" style=\"grid-template-columns:repeat({columns},1fr)\">"
                );
            }
            for tag in tags {
                let _ = writeln!(out, "<span class=\"tag\">{}</span>", escape(tag));
            }
            out.push_str("</div>\n");
        }
    }
    out.push_str("</section>\n");
}

fn write_entry(out: &mut String, entry: &EntryView) {
    out.push_str("<div class=\"entry\">\n");
    match &entry.aside {
        Some(aside) => {
            let _ = writeln!(
                out,
                "<div class=\"heading\"><span>{}</span><span class=\"sub\">{}</span></div>",
                escape(&entry.heading),
                escape(aside)
            );
        }
        None => {
            let _ = writeln!(out, "<div class=\"heading\">{}</div>", escape(&entry.heading));
        }
    }
    if let Some(sub) = &entry.subheading {
        let _ = writeln!(out, "<div class=\"sub\">{}</div>", escape(sub));
    }
    if let Some(body) = &entry.body {
        let _ = writeln!(out, "<div class=\"body\">{}</div>", escape(body));
    }
    if let Some(link) = &entry.link {
        let _ = writeln!(
            out,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape(&link.href),
            escape(&link.label)
        );
    }
    out.push_str("</div>\n");
}

/// Escape text for HTML element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::LayoutId;
    use crate::render::render;
    use resume::{Project, ResumeAggregate};

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("\"quoted\" 'single'"), "&quot;quoted&quot; &#39;single&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_user_content_is_escaped() {
        let mut resume = ResumeAggregate::new();
        resume.personal_info.full_name = "<script>alert(1)</script>".to_string();
        resume.projects.push(Project {
            name: "Tom & Jerry".to_string(),
            description: String::new(),
            link: "https://example.com/?a=1&b=\"2\"".to_string(),
        });

        let html = write(
            &render(&resume, &LayoutId::Simple.descriptor()),
            &HtmlOptions::default(),
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(html.contains("href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\""));
    }

    #[test]
    fn test_page_geometry_and_grid() {
        let options = HtmlOptions {
            page_width: "8.5in".to_string(),
            page_size: "letter".to_string(),
            ..HtmlOptions::default()
        };
        let html = write(
            &render(&ResumeAggregate::new(), &LayoutId::TwoColumn.descriptor()),
            &options,
        );
        assert!(html.contains("@page{size:letter portrait;margin:0}"));
        assert!(html.contains(".page{width:8.5in}"));
        assert!(html.contains("grid-template-columns:1fr 2fr"));
        assert!(html.contains("data-layout=\"two-column\""));
    }

    #[test]
    fn test_avatar_photo_or_initial() {
        let mut resume = ResumeAggregate::new();
        resume.personal_info.full_name = "Linus".to_string();

        let html = write(
            &render(&resume, &LayoutId::Comprehensive.descriptor()),
            &HtmlOptions::default(),
        );
        assert!(html.contains("<div class=\"avatar\" style=\"width:128px;height:128px\">L</div>"));

        resume.personal_info.profile_picture = Some("data:image/png;base64,AAAA".to_string());
        let html = write(
            &render(&resume, &LayoutId::Comprehensive.descriptor()),
            &HtmlOptions::default(),
        );
        assert!(html.contains("src=\"data:image/png;base64,AAAA\""));
    }
}
