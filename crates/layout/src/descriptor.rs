//! Layout descriptors: the configuration the preview renderer runs on.
//!
//! A descriptor decides arrangement only (where the header goes, how many
//! columns, which section lands in which column and under what title). Data
//! selection is the same for every layout: personal info always, each other
//! section only when it has entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use resume::ResumeAggregate;

/// Built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutId {
    /// Single centered column
    #[default]
    Simple,
    /// Sidebar with contact and skills, main column with the rest
    TwoColumn,
    /// Wide header, two balanced columns, detailed entries
    Comprehensive,
}

impl LayoutId {
    /// Every built-in layout, in menu order
    pub const ALL: [LayoutId; 3] = [
        LayoutId::Simple,
        LayoutId::TwoColumn,
        LayoutId::Comprehensive,
    ];

    /// Identifier used on the command line and in config
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::TwoColumn => "two-column",
            Self::Comprehensive => "comprehensive",
        }
    }

    /// Name shown in the layout picker
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Simple => "Simple Layout",
            Self::TwoColumn => "Two Column",
            Self::Comprehensive => "Comprehensive",
        }
    }

    /// The descriptor for this layout
    pub fn descriptor(&self) -> LayoutDescriptor {
        match self {
            Self::Simple => simple(),
            Self::TwoColumn => two_column(),
            Self::Comprehensive => comprehensive(),
        }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a layout identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout '{0}' (expected simple, two-column or comprehensive)")]
pub struct ParseLayoutError(pub String);

impl FromStr for LayoutId {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "1" => Ok(Self::Simple),
            "two-column" | "two_column" | "2" => Ok(Self::TwoColumn),
            "comprehensive" | "3" => Ok(Self::Comprehensive),
            other => Err(ParseLayoutError(other.to_string())),
        }
    }
}

/// Content blocks a column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Objective as a titled section (when not shown in the header)
    Objective,
    Experience,
    Education,
    Skills,
    Projects,
}

impl BlockKind {
    /// Visibility predicate shared by all layouts
    pub fn is_visible(&self, resume: &ResumeAggregate) -> bool {
        match self {
            Self::Objective => !resume.personal_info.objective.trim().is_empty(),
            Self::Experience => !resume.experience.is_empty(),
            Self::Education => !resume.education.is_empty(),
            Self::Skills => !resume.skills.is_empty(),
            Self::Projects => !resume.projects.is_empty(),
        }
    }
}

/// A block placed in a column under a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub kind: BlockKind,
    pub title: &'static str,
}

/// Where the personal info header goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPlacement {
    /// Full width above the columns
    Top {
        /// Center the header text
        centered: bool,
    },
    /// At the top of the given column
    InColumn(usize),
}

/// How experience entries are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    /// "Company | start - end" under the position
    Compact,
    /// Dates beside the position, company on its own line
    Detailed,
}

/// One column of the layout grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Relative width in grid units
    pub span: u8,
    /// Blocks in display order
    pub blocks: Vec<BlockSpec>,
}

/// Everything the renderer needs to know about a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDescriptor {
    pub id: LayoutId,
    pub header: HeaderPlacement,
    /// Show the objective inside the header instead of as a block
    pub objective_in_header: bool,
    /// Avatar edge length in CSS pixels
    pub avatar_px: u16,
    pub columns: Vec<ColumnSpec>,
    pub entry_style: EntryStyle,
    /// Label of project links
    pub link_label: &'static str,
    /// Columns of the skill tag grid (0 = free-flowing tags)
    pub skill_columns: u8,
}

impl LayoutDescriptor {
    /// Sum of column spans
    pub fn total_span(&self) -> u16 {
        self.columns.iter().map(|c| u16::from(c.span)).sum()
    }
}

const fn block(kind: BlockKind, title: &'static str) -> BlockSpec {
    BlockSpec { kind, title }
}

fn simple() -> LayoutDescriptor {
    LayoutDescriptor {
        id: LayoutId::Simple,
        header: HeaderPlacement::Top { centered: true },
        objective_in_header: true,
        avatar_px: 80,
        columns: vec![ColumnSpec {
            span: 1,
            blocks: vec![
                block(BlockKind::Experience, "Experience"),
                block(BlockKind::Education, "Education"),
                block(BlockKind::Skills, "Skills"),
                block(BlockKind::Projects, "Projects"),
            ],
        }],
        entry_style: EntryStyle::Compact,
        link_label: "View Project",
        skill_columns: 0,
    }
}

fn two_column() -> LayoutDescriptor {
    LayoutDescriptor {
        id: LayoutId::TwoColumn,
        header: HeaderPlacement::InColumn(0),
        objective_in_header: false,
        avatar_px: 96,
        columns: vec![
            ColumnSpec {
                span: 1,
                blocks: vec![block(BlockKind::Skills, "Skills")],
            },
            ColumnSpec {
                span: 2,
                blocks: vec![
                    block(BlockKind::Objective, "Professional Summary"),
                    block(BlockKind::Experience, "Experience"),
                    block(BlockKind::Projects, "Projects"),
                    block(BlockKind::Education, "Education"),
                ],
            },
        ],
        entry_style: EntryStyle::Compact,
        link_label: "View Project",
        skill_columns: 0,
    }
}

fn comprehensive() -> LayoutDescriptor {
    LayoutDescriptor {
        id: LayoutId::Comprehensive,
        header: HeaderPlacement::Top { centered: false },
        objective_in_header: true,
        avatar_px: 128,
        columns: vec![
            ColumnSpec {
                span: 1,
                blocks: vec![
                    block(BlockKind::Experience, "Professional Experience"),
                    block(BlockKind::Education, "Education"),
                ],
            },
            ColumnSpec {
                span: 1,
                blocks: vec![
                    block(BlockKind::Skills, "Skills & Expertise"),
                    block(BlockKind::Projects, "Notable Projects"),
                ],
            },
        ],
        entry_style: EntryStyle::Detailed,
        link_label: "View Project →",
        skill_columns: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume::Skill;

    #[test]
    fn test_parse_layout_id() {
        assert_eq!("simple".parse::<LayoutId>().unwrap(), LayoutId::Simple);
        assert_eq!("Two-Column".parse::<LayoutId>().unwrap(), LayoutId::TwoColumn);
        assert_eq!("3".parse::<LayoutId>().unwrap(), LayoutId::Comprehensive);
        assert!("fancy".parse::<LayoutId>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for id in LayoutId::ALL {
            assert_eq!(id.to_string().parse::<LayoutId>().unwrap(), id);
        }
    }

    #[test]
    fn test_every_layout_places_each_section_once() {
        for id in LayoutId::ALL {
            let descriptor = id.descriptor();
            assert_eq!(descriptor.id, id);

            let kinds: Vec<BlockKind> = descriptor
                .columns
                .iter()
                .flat_map(|c| c.blocks.iter().map(|b| b.kind))
                .collect();
            for kind in [
                BlockKind::Experience,
                BlockKind::Education,
                BlockKind::Skills,
                BlockKind::Projects,
            ] {
                assert_eq!(kinds.iter().filter(|k| **k == kind).count(), 1, "{id}: {kind:?}");
            }

            let objective_blocks = kinds.iter().filter(|k| **k == BlockKind::Objective).count();
            assert_eq!(objective_blocks, usize::from(!descriptor.objective_in_header));
        }
    }

    #[test]
    fn test_visibility_predicate() {
        let mut resume = ResumeAggregate::new();
        assert!(!BlockKind::Skills.is_visible(&resume));
        assert!(!BlockKind::Objective.is_visible(&resume));

        resume.skills.push(Skill::new("Go", 3));
        resume.personal_info.objective = "Build things".to_string();
        assert!(BlockKind::Skills.is_visible(&resume));
        assert!(BlockKind::Objective.is_visible(&resume));
        assert!(!BlockKind::Projects.is_visible(&resume));
    }

    #[test]
    fn test_total_span() {
        assert_eq!(LayoutId::Simple.descriptor().total_span(), 1);
        assert_eq!(LayoutId::TwoColumn.descriptor().total_span(), 3);
        assert_eq!(LayoutId::Comprehensive.descriptor().total_span(), 2);
    }
}
