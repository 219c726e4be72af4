//! # resume
//!
//! Resume data model and section editors for the vitae wizard.
//!
//! This crate provides:
//! - **Data model**: [`ResumeAggregate`] and the entry types of its five sections
//! - **Field metadata**: labels, kinds and required-ness for every editable field
//! - **Editors**: [`SectionEditor`] for repeatable sections and
//!   [`PersonalInfoEditor`], each holding a local draft that is reported back
//!   as a whole-section value
//! - **Photo ingestion**: image bytes to a base64 data URI
//!
//! ## Example
//!
//! ```
//! use resume::{ResumeAggregate, SectionEditor, SectionValue, Skill};
//!
//! let mut aggregate = ResumeAggregate::new();
//! aggregate.skills.push(Skill::new("Go", 3));
//!
//! let mut editor = SectionEditor::new(aggregate.skills.clone());
//! let report = editor.update_field(0, "level", 5u8.into()).unwrap();
//! aggregate.replace(SectionValue::Skills(report));
//!
//! assert_eq!(aggregate.skills, vec![Skill::new("Go", 5)]);
//! ```
//!
//! The crate performs no I/O beyond explicit JSON load/save and photo reads,
//! and never prints; it logs through the `log` facade.

#![warn(clippy::all)]

pub mod editor;
pub mod error;
pub mod fields;
pub mod photo;
pub mod types;

pub use editor::{EntryPhase, PersonalInfoEditor, SectionEditor};
pub use error::{Error, MissingField, Result};
pub use fields::{Entry, FieldKind, FieldSpec, FieldValue, MAX_LEVEL};
pub use types::{
    DEFAULT_SKILL_LEVEL, Education, Experience, LOCATION, PROFILE_PICTURE, PersonalInfo, Project,
    ResumeAggregate, SectionKey, SectionValue, Skill,
};
