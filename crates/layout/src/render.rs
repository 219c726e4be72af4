//! The preview renderer: aggregate + descriptor -> surface.
//!
//! Pure and read-only. Entries keep the aggregate's order; nothing is sorted
//! or filtered beyond the per-section visibility predicate.

use resume::{Education, Experience, PersonalInfo, Project, ResumeAggregate};

use crate::descriptor::{BlockKind, BlockSpec, EntryStyle, HeaderPlacement, LayoutDescriptor};
use crate::surface::{Column, Content, EntryView, Header, Link, Section, Surface};

/// Shown when an experience has no end date.
const ONGOING: &str = "Present";

/// Render `resume` with the given layout.
pub fn render(resume: &ResumeAggregate, layout: &LayoutDescriptor) -> Surface {
    let header_column = match layout.header {
        HeaderPlacement::InColumn(i) => Some(i),
        HeaderPlacement::Top { .. } => None,
    };

    let columns = layout
        .columns
        .iter()
        .enumerate()
        .map(|(i, spec)| Column {
            span: spec.span,
            has_header: header_column == Some(i),
            sections: spec
                .blocks
                .iter()
                .filter(|b| b.kind.is_visible(resume))
                .map(|b| render_block(resume, layout, b))
                .collect(),
        })
        .collect();

    Surface {
        layout: layout.id,
        header: render_header(&resume.personal_info, layout.objective_in_header),
        header_placement: layout.header,
        avatar_px: layout.avatar_px,
        columns,
    }
}

fn render_header(info: &PersonalInfo, with_objective: bool) -> Header {
    let contact = [&info.email, &info.phone, &info.location]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .collect();

    let objective = non_empty(&info.objective).filter(|_| with_objective);

    Header {
        full_name: info.full_name.clone(),
        initial: info.initial(),
        photo: info.profile_picture.clone().filter(|p| !p.is_empty()),
        contact,
        objective,
    }
}

fn render_block(resume: &ResumeAggregate, layout: &LayoutDescriptor, block: &BlockSpec) -> Section {
    let content = match block.kind {
        BlockKind::Objective => Content::Paragraph(resume.personal_info.objective.clone()),
        BlockKind::Experience => Content::Entries(
            resume
                .experience
                .iter()
                .map(|e| experience_view(e, layout.entry_style))
                .collect(),
        ),
        BlockKind::Education => Content::Entries(resume.education.iter().map(education_view).collect()),
        BlockKind::Skills => Content::Tags {
            tags: resume.skills.iter().map(|s| s.name.clone()).collect(),
            columns: layout.skill_columns,
        },
        BlockKind::Projects => Content::Entries(
            resume
                .projects
                .iter()
                .map(|p| project_view(p, layout.link_label))
                .collect(),
        ),
    };

    Section {
        kind: block.kind,
        title: block.title.to_string(),
        content,
    }
}

fn date_range(start: &str, end: &str) -> String {
    let end = if end.trim().is_empty() { ONGOING } else { end };
    format!("{start} - {end}")
}

fn experience_view(exp: &Experience, style: EntryStyle) -> EntryView {
    let dates = date_range(&exp.start_date, &exp.end_date);
    let (aside, subheading) = match style {
        EntryStyle::Compact => (None, format!("{} | {}", exp.company, dates)),
        EntryStyle::Detailed => (Some(dates), exp.company.clone()),
    };

    EntryView {
        heading: exp.position.clone(),
        aside,
        subheading: Some(subheading),
        body: non_empty(&exp.responsibilities),
        link: None,
    }
}

fn education_view(edu: &Education) -> EntryView {
    EntryView {
        heading: edu.degree.clone(),
        aside: None,
        subheading: Some(format!("{} - {}", edu.institution, edu.graduation_year)),
        body: non_empty(&edu.achievements),
        link: None,
    }
}

fn project_view(project: &Project, link_label: &str) -> EntryView {
    EntryView {
        heading: project.name.clone(),
        aside: None,
        subheading: None,
        body: non_empty(&project.description),
        link: non_empty(&project.link).map(|href| Link {
            href,
            label: link_label.to_string(),
        }),
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::LayoutId;
    use resume::Skill;

    fn sample() -> ResumeAggregate {
        let mut resume = ResumeAggregate::new();
        resume.personal_info = PersonalInfo {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            location: "London, England, United Kingdom".to_string(),
            objective: "Program the analytical engine".to_string(),
            profile_picture: None,
        };
        resume.experience.push(Experience {
            company: "Babbage & Co".to_string(),
            position: "Analyst".to_string(),
            start_date: "1842".to_string(),
            end_date: String::new(),
            responsibilities: "Notes on the engine".to_string(),
        });
        resume.skills = vec![Skill::new("Mathematics", 5), Skill::new("Poetry", 2)];
        resume
    }

    #[test]
    fn test_empty_sections_hidden_in_every_layout() {
        let resume = sample();
        for id in LayoutId::ALL {
            let surface = render(&resume, &id.descriptor());
            assert!(surface.section(BlockKind::Experience).is_some(), "{id}");
            assert!(surface.section(BlockKind::Skills).is_some(), "{id}");
            assert!(surface.section(BlockKind::Education).is_none(), "{id}");
            assert!(surface.section(BlockKind::Projects).is_none(), "{id}");
        }
    }

    #[test]
    fn test_personal_info_always_shown() {
        let resume = ResumeAggregate::new();
        for id in LayoutId::ALL {
            let surface = render(&resume, &id.descriptor());
            assert_eq!(surface.header.initial, "?");
            assert!(surface.header.contact.is_empty());
            assert_eq!(surface.sections().count(), 0);
        }
    }

    #[test]
    fn test_objective_placement() {
        let resume = sample();

        let simple = render(&resume, &LayoutId::Simple.descriptor());
        assert_eq!(
            simple.header.objective.as_deref(),
            Some("Program the analytical engine")
        );
        assert!(simple.section(BlockKind::Objective).is_none());

        let two = render(&resume, &LayoutId::TwoColumn.descriptor());
        assert!(two.header.objective.is_none());
        let summary = two.section(BlockKind::Objective).unwrap();
        assert_eq!(summary.title, "Professional Summary");
        assert!(two.columns[0].has_header);
        assert!(!two.columns[1].has_header);
    }

    #[test]
    fn test_entry_styles() {
        let resume = sample();

        let compact = render(&resume, &LayoutId::Simple.descriptor());
        let Content::Entries(entries) = &compact.section(BlockKind::Experience).unwrap().content
        else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].heading, "Analyst");
        assert_eq!(
            entries[0].subheading.as_deref(),
            Some("Babbage & Co | 1842 - Present")
        );
        assert!(entries[0].aside.is_none());

        let detailed = render(&resume, &LayoutId::Comprehensive.descriptor());
        let section = detailed.section(BlockKind::Experience).unwrap();
        assert_eq!(section.title, "Professional Experience");
        let Content::Entries(entries) = &section.content else {
            panic!("expected entries");
        };
        assert_eq!(entries[0].aside.as_deref(), Some("1842 - Present"));
        assert_eq!(entries[0].subheading.as_deref(), Some("Babbage & Co"));
    }

    #[test]
    fn test_order_is_preserved() {
        let mut resume = sample();
        resume.skills = vec![
            Skill::new("Zig", 1),
            Skill::new("Ada", 5),
            Skill::new("Go", 3),
        ];
        let surface = render(&resume, &LayoutId::TwoColumn.descriptor());
        let Content::Tags { tags, columns } = &surface.section(BlockKind::Skills).unwrap().content
        else {
            panic!("expected tags");
        };
        assert_eq!(tags, &["Zig", "Ada", "Go"]);
        assert_eq!(*columns, 0);
    }

    #[test]
    fn test_project_links() {
        let mut resume = sample();
        resume.projects = vec![
            Project {
                name: "Engine notes".to_string(),
                description: "Annotated translation".to_string(),
                link: "https://example.com/notes".to_string(),
            },
            Project {
                name: "Flying machine".to_string(),
                description: String::new(),
                link: String::new(),
            },
        ];

        let surface = render(&resume, &LayoutId::Comprehensive.descriptor());
        let Content::Entries(entries) = &surface.section(BlockKind::Projects).unwrap().content
        else {
            panic!("expected entries");
        };
        let link = entries[0].link.as_ref().unwrap();
        assert_eq!(link.href, "https://example.com/notes");
        assert_eq!(link.label, "View Project →");
        assert!(entries[1].link.is_none());
        assert!(entries[1].body.is_none());
    }

    #[test]
    fn test_render_does_not_mutate() {
        let resume = sample();
        let before = resume.clone();
        let _ = render(&resume, &LayoutId::Comprehensive.descriptor());
        assert_eq!(resume, before);
    }
}
