//! The rendered preview: plain data, independent of any output format.

use crate::descriptor::{BlockKind, HeaderPlacement, LayoutId};

/// A rendered preview ready to be written as text or HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub layout: LayoutId,
    pub header: Header,
    pub header_placement: HeaderPlacement,
    /// Avatar edge length in CSS pixels
    pub avatar_px: u16,
    pub columns: Vec<Column>,
}

impl Surface {
    /// All visible sections across columns, in column order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.columns.iter().flat_map(|c| c.sections.iter())
    }

    /// Find a visible section by kind
    pub fn section(&self, kind: BlockKind) -> Option<&Section> {
        self.sections().find(|s| s.kind == kind)
    }

    /// Sum of column spans
    pub fn total_span(&self) -> u16 {
        self.columns.iter().map(|c| u16::from(c.span)).sum()
    }
}

/// Personal info block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub full_name: String,
    /// Shown in place of a missing photo
    pub initial: String,
    /// Data URI of the photo, if uploaded
    pub photo: Option<String>,
    /// Non-empty contact lines: email, phone, location
    pub contact: Vec<String>,
    /// Objective, when the layout shows it in the header
    pub objective: Option<String>,
}

/// One column of rendered sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub span: u8,
    /// The header is rendered at the top of this column
    pub has_header: bool,
    pub sections: Vec<Section>,
}

/// A titled, visible section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: BlockKind,
    pub title: String,
    pub content: Content,
}

/// What a section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Paragraph(String),
    Entries(Vec<EntryView>),
    Tags {
        tags: Vec<String>,
        /// Grid columns, 0 for free-flowing
        columns: u8,
    },
}

/// One education, experience or project entry as displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryView {
    pub heading: String,
    /// Right-aligned note next to the heading (dates in detailed style)
    pub aside: Option<String>,
    pub subheading: Option<String>,
    pub body: Option<String>,
    pub link: Option<Link>,
}

/// An outbound link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
}
