//! Section editors: local drafts of one section, synchronized by report.
//!
//! An editor owns a draft copy of one section, seeded from the aggregate when
//! the editor is mounted. Operations that change the persisted view of the
//! section return a report (the whole section value) which the owner folds
//! back into the aggregate; nothing is written behind the caller's back.
//!
//! # Entry lifecycle
//!
//! Entries in a repeatable draft are either [`EntryPhase::Staged`] or
//! [`EntryPhase::Committed`]:
//!
//! - entries seeded from the aggregate start committed
//! - the blank entry seeded into an empty section, and every entry added with
//!   [`SectionEditor::add_entry`], start staged
//! - a field edit commits the edited entry and every entry before it
//!
//! Committed entries always form a prefix of the draft, so draft index `i`
//! and report index `i` name the same entry. Reports carry that prefix.
//! Adding an entry and navigating away without typing into it therefore
//! persists nothing.

use std::collections::BTreeSet;

use crate::error::{Error, MissingField, Result};
use crate::fields::{Entry, FieldValue};
use crate::types::{LOCATION, PROFILE_PICTURE, PersonalInfo};

/// Whether a draft entry is part of the persisted section yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    /// Added locally, never edited
    Staged,
    /// Seeded from the aggregate or edited at least once
    Committed,
}

#[derive(Debug, Clone)]
struct DraftEntry<E> {
    value: E,
    phase: EntryPhase,
}

/// Editor for a repeatable section (education, experience, skills, projects).
///
/// The draft never holds zero entries.
#[derive(Debug, Clone)]
pub struct SectionEditor<E: Entry> {
    entries: Vec<DraftEntry<E>>,
}

impl<E: Entry> SectionEditor<E> {
    /// Seed the draft from the aggregate's current value.
    ///
    /// An empty section is seeded with one staged blank entry.
    pub fn new(initial: Vec<E>) -> Self {
        let entries = if initial.is_empty() {
            vec![DraftEntry {
                value: E::default(),
                phase: EntryPhase::Staged,
            }]
        } else {
            initial
                .into_iter()
                .map(|value| DraftEntry {
                    value,
                    phase: EntryPhase::Committed,
                })
                .collect()
        };
        Self { entries }
    }

    /// Number of entries in the draft (always at least one)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`
    pub fn entry(&self, index: usize) -> Option<&E> {
        self.entries.get(index).map(|e| &e.value)
    }

    /// Lifecycle phase of the entry at `index`
    pub fn phase(&self, index: usize) -> Option<EntryPhase> {
        self.entries.get(index).map(|e| e.phase)
    }

    /// All draft entries, staged ones included
    pub fn entries(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|e| &e.value)
    }

    /// Replace one field of one entry and report the section.
    ///
    /// Commits the entry, and any staged entries before it, so positions in
    /// the report match positions in the draft.
    pub fn update_field(&mut self, index: usize, field: &str, value: FieldValue) -> Result<Vec<E>> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(Error::EntryOutOfRange { index, len })?;

        entry.value.set_field(field, value)?;
        for entry in &mut self.entries[..=index] {
            entry.phase = EntryPhase::Committed;
        }

        Ok(self.commit())
    }

    /// Append a blank staged entry; local only, nothing is reported.
    ///
    /// Returns the index of the new entry.
    pub fn add_entry(&mut self) -> usize {
        self.entries.push(DraftEntry {
            value: E::default(),
            phase: EntryPhase::Staged,
        });
        self.entries.len() - 1
    }

    /// Whether [`remove_entry`](Self::remove_entry) would do anything
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Remove the entry at `index` and report the section.
    ///
    /// Returns `Ok(None)` without touching the draft when only one entry is
    /// left. Later entries shift down by one.
    pub fn remove_entry(&mut self, index: usize) -> Result<Option<Vec<E>>> {
        let len = self.entries.len();
        if index >= len {
            return Err(Error::EntryOutOfRange { index, len });
        }
        if !self.can_remove() {
            log::debug!("Refusing to remove the last {} entry", E::SECTION);
            return Ok(None);
        }

        self.entries.remove(index);
        Ok(Some(self.commit()))
    }

    /// Committed entries in draft order; the section value to persist
    pub fn commit(&self) -> Vec<E> {
        self.entries
            .iter()
            .filter(|e| e.phase == EntryPhase::Committed)
            .map(|e| e.value.clone())
            .collect()
    }

    /// Empty required fields across every rendered entry
    pub fn missing_required(&self) -> Vec<MissingField> {
        self.entries
            .iter()
            .enumerate()
            .flat_map(|(i, e)| e.value.missing_required(i))
            .collect()
    }

    /// Check required fields before moving to the next step.
    pub fn submit(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequired { missing })
        }
    }
}

/// Editor for the single personal info record.
#[derive(Debug, Clone)]
pub struct PersonalInfoEditor {
    draft: PersonalInfo,
    touched: BTreeSet<&'static str>,
}

impl PersonalInfoEditor {
    /// Seed the draft; a default record is the blank record
    pub fn new(initial: PersonalInfo) -> Self {
        Self {
            draft: initial,
            touched: BTreeSet::new(),
        }
    }

    /// Current draft
    pub fn draft(&self) -> &PersonalInfo {
        &self.draft
    }

    /// Replace one field and report the record
    pub fn update_field(&mut self, field: &str, value: FieldValue) -> Result<PersonalInfo> {
        self.draft.set_field(field, value)?;
        if let Some(spec) = PersonalInfo::spec(field) {
            self.touched.insert(spec.name);
        } else if field == PROFILE_PICTURE {
            self.touched.insert(PROFILE_PICTURE);
        }
        Ok(self.draft.clone())
    }

    /// Write the ingested photo and report the record
    pub fn set_photo(&mut self, data_uri: String) -> Result<PersonalInfo> {
        self.update_field(PROFILE_PICTURE, FieldValue::Text(data_uri))
    }

    /// Apply a value that did not come from the user (e.g. location lookup).
    ///
    /// Does not mark the field as touched and does not report; the caller
    /// already owns the aggregate write.
    pub fn apply_external(&mut self, field: &str, value: FieldValue) -> Result<()> {
        self.draft.set_field(field, value)
    }

    /// Whether the user has edited `field` in this editor
    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    /// Whether the user has typed into the location field
    pub fn location_touched(&self) -> bool {
        self.is_touched(LOCATION)
    }

    /// The record to persist
    pub fn commit(&self) -> PersonalInfo {
        self.draft.clone()
    }

    /// Empty required fields
    pub fn missing_required(&self) -> Vec<MissingField> {
        self.draft.missing_required(0)
    }

    /// Check required fields before moving to the next step.
    pub fn submit(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequired { missing })
        }
    }
}
