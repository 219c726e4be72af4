use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fields::{Entry, FieldSpec, FieldValue, expect_level, expect_text, unknown};

/// The five named sections of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    /// Name, contact details, objective and photo
    PersonalInfo,
    /// Degrees
    Education,
    /// Work history
    Experience,
    /// Skills with a proficiency level
    Skills,
    /// Projects with an optional link
    Projects,
}

impl SectionKey {
    /// All sections in default wizard order
    pub const ALL: [SectionKey; 5] = [
        SectionKey::PersonalInfo,
        SectionKey::Education,
        SectionKey::Experience,
        SectionKey::Skills,
        SectionKey::Projects,
    ];

    /// Identifier used in config files and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "personal-info",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
        }
    }

    /// Title shown in the step indicator
    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
        }
    }

    /// Singular noun for one entry ("Skill #2")
    pub fn entry_noun(&self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Education => "Education",
            Self::Experience => "Experience",
            Self::Skills => "Skill",
            Self::Projects => "Project",
        }
    }

    /// Whether the section holds a sequence of entries
    pub fn is_repeatable(&self) -> bool {
        !matches!(self, Self::PersonalInfo)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entries
// ============================================================================

/// Personal details; a single record rather than a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub objective: String,
    /// Embeddable image, usually a base64 data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Field name of the photo on [`PersonalInfo`].
pub const PROFILE_PICTURE: &str = "profilePicture";

/// Field name of the location on [`PersonalInfo`].
pub const LOCATION: &str = "location";

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("fullName", "Full Name", "John Doe"),
    FieldSpec::text("email", "Email", "john@example.com"),
    FieldSpec::text("phone", "Phone", "+1 (123) 456-7890"),
    FieldSpec::text(LOCATION, "Location", "City, Country"),
    FieldSpec::long(
        "objective",
        "Professional Objective",
        "Brief description of your career goals...",
    ),
];

impl PersonalInfo {
    /// First letter of the name, used where no photo is available
    pub fn initial(&self) -> String {
        self.full_name
            .trim()
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_string())
    }
}

impl Entry for PersonalInfo {
    const SECTION: SectionKey = SectionKey::PersonalInfo;

    fn fields() -> &'static [FieldSpec] {
        PERSONAL_FIELDS
    }

    fn field(&self, name: &str) -> Result<FieldValue> {
        let value = match name {
            "fullName" => &self.full_name,
            "email" => &self.email,
            "phone" => &self.phone,
            LOCATION => &self.location,
            "objective" => &self.objective,
            PROFILE_PICTURE => {
                return Ok(FieldValue::text(
                    self.profile_picture.clone().unwrap_or_default(),
                ));
            }
            _ => return Err(unknown(Self::SECTION, name)),
        };
        Ok(FieldValue::text(value.clone()))
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let slot = match name {
            "fullName" => &mut self.full_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            LOCATION => &mut self.location,
            "objective" => &mut self.objective,
            PROFILE_PICTURE => {
                let uri = expect_text(name, value)?;
                self.profile_picture = (!uri.is_empty()).then_some(uri);
                return Ok(());
            }
            _ => return Err(unknown(Self::SECTION, name)),
        };
        *slot = expect_text(name, value)?;
        Ok(())
    }
}

/// One degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
    pub achievements: String,
}

const EDUCATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("degree", "Degree", "Bachelor of Science in Computer Science"),
    FieldSpec::text("institution", "Institution", "University Name"),
    FieldSpec::text("graduationYear", "Graduation Year", "2023"),
    FieldSpec::long(
        "achievements",
        "Achievements",
        "Notable achievements, GPA, honors...",
    )
    .optional(),
];

impl Entry for Education {
    const SECTION: SectionKey = SectionKey::Education;

    fn fields() -> &'static [FieldSpec] {
        EDUCATION_FIELDS
    }

    fn field(&self, name: &str) -> Result<FieldValue> {
        let value = match name {
            "degree" => &self.degree,
            "institution" => &self.institution,
            "graduationYear" => &self.graduation_year,
            "achievements" => &self.achievements,
            _ => return Err(unknown(Self::SECTION, name)),
        };
        Ok(FieldValue::text(value.clone()))
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let slot = match name {
            "degree" => &mut self.degree,
            "institution" => &mut self.institution,
            "graduationYear" => &mut self.graduation_year,
            "achievements" => &mut self.achievements,
            _ => return Err(unknown(Self::SECTION, name)),
        };
        *slot = expect_text(name, value)?;
        Ok(())
    }
}

/// One position held.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub responsibilities: String,
}

const EXPERIENCE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("company", "Company", "Company Name"),
    FieldSpec::text("position", "Position", "Job Title"),
    FieldSpec::text("startDate", "Start Date", "2021-03"),
    FieldSpec::text("endDate", "End Date", "Present").optional(),
    FieldSpec::long(
        "responsibilities",
        "Responsibilities",
        "Key responsibilities and achievements...",
    ),
];

impl Entry for Experience {
    const SECTION: SectionKey = SectionKey::Experience;

    fn fields() -> &'static [FieldSpec] {
        EXPERIENCE_FIELDS
    }

    fn field(&self, name: &str) -> Result<FieldValue> {
        let value = match name {
            "company" => &self.company,
            "position" => &self.position,
            "startDate" => &self.start_date,
            "endDate" => &self.end_date,
            "responsibilities" => &self.responsibilities,
            _ => return Err(unknown(Self::SECTION, name)),
        };
        Ok(FieldValue::text(value.clone()))
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let slot = match name {
            "company" => &mut self.company,
            "position" => &mut self.position,
            "startDate" => &mut self.start_date,
            "endDate" => &mut self.end_date,
            "responsibilities" => &mut self.responsibilities,
            _ => return Err(unknown(Self::SECTION, name)),
        };
        *slot = expect_text(name, value)?;
        Ok(())
    }
}

/// A skill with a proficiency level in `0..=5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// Level a freshly added skill starts at.
pub const DEFAULT_SKILL_LEVEL: u8 = 3;

impl Default for Skill {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: DEFAULT_SKILL_LEVEL,
        }
    }
}

impl Skill {
    /// Create a skill
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

const SKILL_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Skill Name", "e.g., React.js, Project Management"),
    FieldSpec {
        name: "level",
        label: "Proficiency Level",
        kind: crate::fields::FieldKind::Level {
            max: crate::fields::MAX_LEVEL,
        },
        required: false,
        placeholder: "3",
    },
];

impl Entry for Skill {
    const SECTION: SectionKey = SectionKey::Skills;

    fn fields() -> &'static [FieldSpec] {
        SKILL_FIELDS
    }

    fn field(&self, name: &str) -> Result<FieldValue> {
        match name {
            "name" => Ok(FieldValue::text(self.name.clone())),
            "level" => Ok(FieldValue::Level(self.level)),
            _ => Err(unknown(Self::SECTION, name)),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match name {
            "name" => self.name = expect_text(name, value)?,
            "level" => self.level = expect_level(name, value)?,
            _ => return Err(unknown(Self::SECTION, name)),
        }
        Ok(())
    }
}

/// A project with an optional link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub link: String,
}

const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Project Name", "e.g., E-commerce Website"),
    FieldSpec::long(
        "description",
        "Description",
        "Brief description of the project...",
    ),
    FieldSpec::text("link", "Project Link", "https://...").optional(),
];

impl Entry for Project {
    const SECTION: SectionKey = SectionKey::Projects;

    fn fields() -> &'static [FieldSpec] {
        PROJECT_FIELDS
    }

    fn field(&self, name: &str) -> Result<FieldValue> {
        let value = match name {
            "name" => &self.name,
            "description" => &self.description,
            "link" => &self.link,
            _ => return Err(unknown(Self::SECTION, name)),
        };
        Ok(FieldValue::text(value.clone()))
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let slot = match name {
            "name" => &mut self.name,
            "description" => &mut self.description,
            "link" => &mut self.link,
            _ => return Err(unknown(Self::SECTION, name)),
        };
        *slot = expect_text(name, value)?;
        Ok(())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A whole-section value, as reported by an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    PersonalInfo(PersonalInfo),
    Education(Vec<Education>),
    Experience(Vec<Experience>),
    Skills(Vec<Skill>),
    Projects(Vec<Project>),
}

impl SectionValue {
    /// Section this value replaces
    pub fn key(&self) -> SectionKey {
        match self {
            Self::PersonalInfo(_) => SectionKey::PersonalInfo,
            Self::Education(_) => SectionKey::Education,
            Self::Experience(_) => SectionKey::Experience,
            Self::Skills(_) => SectionKey::Skills,
            Self::Projects(_) => SectionKey::Projects,
        }
    }

    /// Number of entries (1 for personal info)
    pub fn len(&self) -> usize {
        match self {
            Self::PersonalInfo(_) => 1,
            Self::Education(v) => v.len(),
            Self::Experience(v) => v.len(),
            Self::Skills(v) => v.len(),
            Self::Projects(v) => v.len(),
        }
    }

    /// True for an empty sequence
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The complete resume-in-progress for one wizard session.
///
/// Always fully defined: sequences start empty and personal info starts as
/// empty strings. Mutated only by whole-section replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAggregate {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ResumeAggregate {
    /// Empty aggregate for a new session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one section wholesale
    pub fn replace(&mut self, value: SectionValue) {
        log::debug!("Replacing section {} ({} entries)", value.key(), value.len());
        match value {
            SectionValue::PersonalInfo(v) => self.personal_info = v,
            SectionValue::Education(v) => self.education = v,
            SectionValue::Experience(v) => self.experience = v,
            SectionValue::Skills(v) => self.skills = v,
            SectionValue::Projects(v) => self.projects = v,
        }
    }

    /// Current value of one section
    pub fn section(&self, key: SectionKey) -> SectionValue {
        match key {
            SectionKey::PersonalInfo => SectionValue::PersonalInfo(self.personal_info.clone()),
            SectionKey::Education => SectionValue::Education(self.education.clone()),
            SectionKey::Experience => SectionValue::Experience(self.experience.clone()),
            SectionKey::Skills => SectionValue::Skills(self.skills.clone()),
            SectionKey::Projects => SectionValue::Projects(self.projects.clone()),
        }
    }

    /// Parse the JSON form
    pub fn from_json(content: &str) -> Result<Self> {
        let aggregate: Self = serde_json::from_str(content)?;
        aggregate.check_levels()?;
        Ok(aggregate)
    }

    /// Pretty JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let aggregate = Self::from_json(&content)?;
        log::debug!("Loaded resume from {}", path.display());
        Ok(aggregate)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        fs::write(path, content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Saved resume to {}", path.display());
        Ok(())
    }

    fn check_levels(&self) -> Result<()> {
        for skill in &self.skills {
            expect_level("level", FieldValue::Level(skill.level))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_starts_fully_defined() {
        let aggregate = ResumeAggregate::new();
        assert_eq!(aggregate.personal_info, PersonalInfo::default());
        assert!(aggregate.personal_info.profile_picture.is_none());
        assert!(aggregate.education.is_empty());
        assert!(aggregate.experience.is_empty());
        assert!(aggregate.skills.is_empty());
        assert!(aggregate.projects.is_empty());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut aggregate = ResumeAggregate::new();
        aggregate.replace(SectionValue::Skills(vec![
            Skill::new("Go", 3),
            Skill::new("Rust", 4),
        ]));
        aggregate.replace(SectionValue::Skills(vec![Skill::new("Zig", 1)]));

        assert_eq!(aggregate.skills, vec![Skill::new("Zig", 1)]);
        assert!(aggregate.education.is_empty());
    }

    #[test]
    fn test_section_roundtrip_through_replace() {
        let mut aggregate = ResumeAggregate::new();
        let value = SectionValue::Projects(vec![Project {
            name: "vitae".to_string(),
            description: "Resume wizard".to_string(),
            link: String::new(),
        }]);
        aggregate.replace(value.clone());
        assert_eq!(aggregate.section(SectionKey::Projects), value);
        assert_eq!(value.key(), SectionKey::Projects);
    }

    #[test]
    fn test_json_uses_original_keys() {
        let mut aggregate = ResumeAggregate::new();
        aggregate.personal_info.full_name = "Ada Lovelace".to_string();
        aggregate.education.push(Education {
            degree: "Mathematics".to_string(),
            graduation_year: "1835".to_string(),
            ..Education::default()
        });

        let json = aggregate.to_json().unwrap();
        assert!(json.contains("\"personalInfo\""));
        assert!(json.contains("\"fullName\": \"Ada Lovelace\""));
        assert!(json.contains("\"graduationYear\": \"1835\""));
        assert!(!json.contains("profilePicture"));
    }

    #[test]
    fn test_json_missing_sections_default() {
        let aggregate = ResumeAggregate::from_json(r#"{"skills":[{"name":"Go","level":3}]}"#)
            .unwrap();
        assert_eq!(aggregate.skills, vec![Skill::new("Go", 3)]);
        assert!(aggregate.projects.is_empty());
        assert_eq!(aggregate.personal_info.full_name, "");
    }

    #[test]
    fn test_json_rejects_level_above_max() {
        let err = ResumeAggregate::from_json(r#"{"skills":[{"name":"Go","level":9}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.json");

        let mut aggregate = ResumeAggregate::new();
        aggregate.personal_info.email = "ada@example.com".to_string();
        aggregate.save(&path).unwrap();

        assert_eq!(ResumeAggregate::load(&path).unwrap(), aggregate);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ResumeAggregate::load(Path::new("/nonexistent/resume.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_field_access_by_name() {
        let mut edu = Education::default();
        edu.set_field("institution", "MIT".into()).unwrap();
        assert_eq!(edu.field("institution").unwrap(), FieldValue::text("MIT"));
        assert!(edu.set_field("gpa", "4.0".into()).is_err());
        assert!(edu.field("gpa").is_err());
    }

    #[test]
    fn test_skill_defaults_to_level_three() {
        assert_eq!(Skill::default().level, DEFAULT_SKILL_LEVEL);
        assert!(Skill::default().is_blank());
        assert!(!Skill::new("", 4).is_blank());
    }

    #[test]
    fn test_required_fields_follow_forms() {
        let missing: Vec<_> = Experience::default()
            .missing_required(2)
            .into_iter()
            .map(|m| m.field)
            .collect();
        assert_eq!(
            missing,
            vec!["company", "position", "startDate", "responsibilities"]
        );

        let skill = Skill::default().missing_required(0);
        assert_eq!(skill.len(), 1);
        assert_eq!(skill[0].field, "name");
    }

    #[test]
    fn test_personal_info_photo_field() {
        let mut info = PersonalInfo::default();
        info.set_field(PROFILE_PICTURE, "data:image/png;base64,AAAA".into())
            .unwrap();
        assert_eq!(
            info.profile_picture.as_deref(),
            Some("data:image/png;base64,AAAA")
        );

        info.set_field(PROFILE_PICTURE, "".into()).unwrap();
        assert!(info.profile_picture.is_none());
    }

    #[test]
    fn test_initial_fallback() {
        let mut info = PersonalInfo::default();
        assert_eq!(info.initial(), "?");
        info.full_name = "  grace hopper".to_string();
        assert_eq!(info.initial(), "g");
    }
}
