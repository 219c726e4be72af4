//! # layout
//!
//! Resume preview renderer for vitae.
//!
//! One renderer, parameterized by a [`LayoutDescriptor`], turns a
//! [`resume::ResumeAggregate`] into a [`Surface`]: plain data describing the
//! header, the columns and the visible sections. Writers then turn a surface
//! into terminal text ([`text::write`]) or a standalone HTML page
//! ([`html::write`]).
//!
//! ## Built-in layouts
//!
//! | Id              | Arrangement                                              |
//! |-----------------|----------------------------------------------------------|
//! | `simple`        | One centered column                                      |
//! | `two-column`    | Sidebar (contact, skills) and main column (1:2)          |
//! | `comprehensive` | Wide header, two equal columns, dates beside positions   |
//!
//! Every layout shows personal info and hides sections without entries.
//!
//! ## Example
//!
//! ```
//! use layout::{LayoutId, render, text};
//! use resume::{ResumeAggregate, Skill};
//!
//! let mut resume = ResumeAggregate::new();
//! resume.personal_info.full_name = "Ada Lovelace".to_string();
//! resume.skills.push(Skill::new("Mathematics", 5));
//!
//! let surface = render(&resume, &LayoutId::TwoColumn.descriptor());
//! let preview = text::write(&surface, 60);
//! assert!(preview.contains("SKILLS"));
//! ```

#![warn(clippy::all)]

pub mod descriptor;
pub mod html;
pub mod render;
pub mod surface;
pub mod text;

pub use descriptor::{
    BlockKind, BlockSpec, ColumnSpec, EntryStyle, HeaderPlacement, LayoutDescriptor, LayoutId,
    ParseLayoutError,
};
pub use html::HtmlOptions;
pub use render::render;
pub use surface::{Column, Content, EntryView, Header, Link, Section, Surface};
