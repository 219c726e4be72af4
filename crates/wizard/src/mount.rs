//! The mounted editor: exactly one section editor, chosen by the active step.

use resume::{
    Entry, EntryPhase, FieldSpec, FieldValue, PersonalInfo, PersonalInfoEditor, ResumeAggregate,
    SectionEditor, SectionKey, SectionValue,
};

use crate::error::{Error, Result};

/// Editor for whichever section the active step shows.
#[derive(Debug, Clone)]
pub enum MountedEditor {
    PersonalInfo(PersonalInfoEditor),
    Education(SectionEditor<resume::Education>),
    Experience(SectionEditor<resume::Experience>),
    Skills(SectionEditor<resume::Skill>),
    Projects(SectionEditor<resume::Project>),
}

/// Run `$body` against the repeatable editor, or `$single` for personal info.
macro_rules! each_section {
    ($self:expr, $ed:ident => $body:expr, $pi:ident => $single:expr) => {
        match $self {
            MountedEditor::PersonalInfo($pi) => $single,
            MountedEditor::Education($ed) => $body,
            MountedEditor::Experience($ed) => $body,
            MountedEditor::Skills($ed) => $body,
            MountedEditor::Projects($ed) => $body,
        }
    };
}

impl MountedEditor {
    /// Seed a fresh editor for `key` from the aggregate.
    pub fn mount(key: SectionKey, aggregate: &ResumeAggregate) -> Self {
        log::debug!("Mounting {key} editor");
        match key {
            SectionKey::PersonalInfo => {
                Self::PersonalInfo(PersonalInfoEditor::new(aggregate.personal_info.clone()))
            }
            SectionKey::Education => Self::Education(SectionEditor::new(aggregate.education.clone())),
            SectionKey::Experience => {
                Self::Experience(SectionEditor::new(aggregate.experience.clone()))
            }
            SectionKey::Skills => Self::Skills(SectionEditor::new(aggregate.skills.clone())),
            SectionKey::Projects => Self::Projects(SectionEditor::new(aggregate.projects.clone())),
        }
    }

    /// Section being edited
    pub fn key(&self) -> SectionKey {
        match self {
            Self::PersonalInfo(_) => SectionKey::PersonalInfo,
            Self::Education(_) => SectionKey::Education,
            Self::Experience(_) => SectionKey::Experience,
            Self::Skills(_) => SectionKey::Skills,
            Self::Projects(_) => SectionKey::Projects,
        }
    }

    /// Field metadata of the section's entry type
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::PersonalInfo(_) => PersonalInfo::fields(),
            Self::Education(_) => resume::Education::fields(),
            Self::Experience(_) => resume::Experience::fields(),
            Self::Skills(_) => resume::Skill::fields(),
            Self::Projects(_) => resume::Project::fields(),
        }
    }

    /// Number of draft entries (always 1 for personal info)
    pub fn len(&self) -> usize {
        each_section!(self, ed => ed.len(), _pi => 1)
    }

    /// Never true; drafts hold at least one entry
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lifecycle phase of a draft entry; personal info is always committed
    pub fn phase(&self, index: usize) -> Option<EntryPhase> {
        each_section!(self, ed => ed.phase(index), _pi => (index == 0).then_some(EntryPhase::Committed))
    }

    /// Read one field of one draft entry.
    pub fn field(&self, index: usize, name: &str) -> Result<FieldValue> {
        let len = self.len();
        let out_of_range = || Error::from(resume::Error::EntryOutOfRange { index, len });
        each_section!(
            self,
            ed => Ok(ed.entry(index).ok_or_else(out_of_range)?.field(name)?),
            pi => {
                if index != 0 {
                    return Err(out_of_range());
                }
                Ok(pi.draft().field(name)?)
            }
        )
    }

    /// Replace one field of one entry; returns the section report.
    pub fn update_field(&mut self, index: usize, name: &str, value: FieldValue) -> Result<SectionValue> {
        Ok(match self {
            Self::PersonalInfo(pi) => {
                if index != 0 {
                    return Err(resume::Error::EntryOutOfRange { index, len: 1 }.into());
                }
                SectionValue::PersonalInfo(pi.update_field(name, value)?)
            }
            Self::Education(ed) => SectionValue::Education(ed.update_field(index, name, value)?),
            Self::Experience(ed) => SectionValue::Experience(ed.update_field(index, name, value)?),
            Self::Skills(ed) => SectionValue::Skills(ed.update_field(index, name, value)?),
            Self::Projects(ed) => SectionValue::Projects(ed.update_field(index, name, value)?),
        })
    }

    /// Append a staged blank entry; returns its index.
    pub fn add_entry(&mut self) -> Result<usize> {
        each_section!(self, ed => Ok(ed.add_entry()), _pi => Err(Error::NotRepeatable(SectionKey::PersonalInfo)))
    }

    /// Whether removing an entry would do anything
    pub fn can_remove(&self) -> bool {
        each_section!(self, ed => ed.can_remove(), _pi => false)
    }

    /// Remove an entry; `None` when the last entry was kept.
    pub fn remove_entry(&mut self, index: usize) -> Result<Option<SectionValue>> {
        Ok(match self {
            Self::PersonalInfo(_) => return Err(Error::NotRepeatable(SectionKey::PersonalInfo)),
            Self::Education(ed) => ed.remove_entry(index)?.map(SectionValue::Education),
            Self::Experience(ed) => ed.remove_entry(index)?.map(SectionValue::Experience),
            Self::Skills(ed) => ed.remove_entry(index)?.map(SectionValue::Skills),
            Self::Projects(ed) => ed.remove_entry(index)?.map(SectionValue::Projects),
        })
    }

    /// Validate required fields.
    pub fn submit(&self) -> Result<()> {
        each_section!(self, ed => ed.submit()?, pi => pi.submit()?);
        Ok(())
    }

    /// Section value the draft would persist
    pub fn commit(&self) -> SectionValue {
        match self {
            Self::PersonalInfo(pi) => SectionValue::PersonalInfo(pi.commit()),
            Self::Education(ed) => SectionValue::Education(ed.commit()),
            Self::Experience(ed) => SectionValue::Experience(ed.commit()),
            Self::Skills(ed) => SectionValue::Skills(ed.commit()),
            Self::Projects(ed) => SectionValue::Projects(ed.commit()),
        }
    }

    /// The personal info editor, when mounted
    pub fn personal_info_mut(&mut self) -> Option<&mut PersonalInfoEditor> {
        match self {
            Self::PersonalInfo(pi) => Some(pi),
            _ => None,
        }
    }

    /// The personal info editor, when mounted
    pub fn personal_info(&self) -> Option<&PersonalInfoEditor> {
        match self {
            Self::PersonalInfo(pi) => Some(pi),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume::{Education, Skill};

    #[test]
    fn test_mount_seeds_from_aggregate() {
        let mut aggregate = ResumeAggregate::new();
        aggregate.skills = vec![Skill::new("Go", 3), Skill::new("Rust", 4)];

        let mounted = MountedEditor::mount(SectionKey::Skills, &aggregate);
        assert_eq!(mounted.key(), SectionKey::Skills);
        assert_eq!(mounted.len(), 2);
        assert_eq!(mounted.field(1, "name").unwrap(), FieldValue::text("Rust"));
        assert_eq!(mounted.commit(), SectionValue::Skills(aggregate.skills));
    }

    #[test]
    fn test_empty_section_mounts_one_staged_entry() {
        let mounted = MountedEditor::mount(SectionKey::Education, &ResumeAggregate::new());
        assert_eq!(mounted.len(), 1);
        assert_eq!(mounted.phase(0), Some(EntryPhase::Staged));
        assert_eq!(mounted.commit(), SectionValue::Education(vec![]));
    }

    #[test]
    fn test_personal_info_is_not_repeatable() {
        let mut mounted = MountedEditor::mount(SectionKey::PersonalInfo, &ResumeAggregate::new());
        assert!(matches!(mounted.add_entry(), Err(Error::NotRepeatable(_))));
        assert!(matches!(mounted.remove_entry(0), Err(Error::NotRepeatable(_))));
        assert!(!mounted.can_remove());
        assert!(mounted.update_field(1, "email", "a@b.c".into()).is_err());
    }

    #[test]
    fn test_update_reports_section() {
        let mut mounted = MountedEditor::mount(SectionKey::Education, &ResumeAggregate::new());
        let report = mounted.update_field(0, "degree", "BSc".into()).unwrap();
        assert_eq!(
            report,
            SectionValue::Education(vec![Education {
                degree: "BSc".to_string(),
                ..Education::default()
            }])
        );
        assert_eq!(mounted.fields().len(), 4);
    }
}
