//! Field metadata shared by every entry type.
//!
//! Editors address fields by name, the same names used in the JSON form of the
//! resume (`fullName`, `graduationYear`, ...). Each entry type publishes the
//! list of fields a user can edit together with their labels and whether the
//! interaction layer should treat them as required.

use std::fmt;

use crate::error::{Error, MissingField, Result};
use crate::types::SectionKey;

/// Highest proficiency level a skill can have.
pub const MAX_LEVEL: u8 = 5;

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text (objective, responsibilities, ...)
    LongText,
    /// Integer level in `0..=max`
    Level {
        /// Inclusive upper bound
        max: u8,
    },
}

/// Static description of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used by `field`/`set_field` and in JSON
    pub name: &'static str,
    /// Label shown to the user
    pub label: &'static str,
    /// Input kind
    pub kind: FieldKind,
    /// Whether an empty value blocks forward submission
    pub required: bool,
    /// Example value shown as a hint
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub(crate) const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required: true,
            placeholder,
        }
    }

    pub(crate) const fn long(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::LongText,
            required: true,
            placeholder,
        }
    }

    pub(crate) const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }
}

/// A value written to or read from a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text content
    Text(String),
    /// Skill level
    Level(u8),
}

impl FieldValue {
    /// Text value
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for blank text; levels are never empty
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Level(_) => false,
        }
    }

    /// Borrow the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Level(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Level(n) => write!(f, "{n}/{MAX_LEVEL}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        Self::Level(value)
    }
}

/// One record inside a resume section.
///
/// Implemented by [`crate::PersonalInfo`] (single record) and by the entry
/// types of the four repeatable sections.
pub trait Entry: Clone + Default + PartialEq + fmt::Debug {
    /// Section this entry type belongs to
    const SECTION: SectionKey;

    /// Editable fields, in display order
    fn fields() -> &'static [FieldSpec];

    /// Read a field by name
    fn field(&self, name: &str) -> Result<FieldValue>;

    /// Write a field by name, leaving every other field untouched
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()>;

    /// Look up the spec of a field
    fn spec(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.name == name)
    }

    /// Required fields that are empty, tagged with `index`
    fn missing_required(&self, index: usize) -> Vec<MissingField> {
        Self::fields()
            .iter()
            .filter(|spec| spec.required)
            .filter(|spec| self.field(spec.name).is_ok_and(|v| v.is_empty()))
            .map(|spec| MissingField {
                index,
                field: spec.name,
                label: spec.label,
            })
            .collect()
    }

    /// True when every editable field is empty or at its default
    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

pub(crate) fn unknown(section: SectionKey, field: &str) -> Error {
    Error::UnknownField {
        section,
        field: field.to_string(),
    }
}

/// Unwrap a text value for a text field.
pub(crate) fn expect_text(field: &str, value: FieldValue) -> Result<String> {
    match value {
        FieldValue::Text(s) => Ok(s),
        FieldValue::Level(n) => Err(Error::InvalidValue {
            field: field.to_string(),
            reason: format!("expected text, got level {n}"),
        }),
    }
}

/// Unwrap a level value, enforcing `0..=MAX_LEVEL`.
pub(crate) fn expect_level(field: &str, value: FieldValue) -> Result<u8> {
    match value {
        FieldValue::Level(n) if n <= MAX_LEVEL => Ok(n),
        FieldValue::Level(n) => Err(Error::InvalidValue {
            field: field.to_string(),
            reason: format!("level {n} is above {MAX_LEVEL}"),
        }),
        FieldValue::Text(s) => Err(Error::InvalidValue {
            field: field.to_string(),
            reason: format!("expected a level, got text '{s}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_empty() {
        assert!(FieldValue::text("").is_empty());
        assert!(FieldValue::text("   ").is_empty());
        assert!(!FieldValue::text("Rust").is_empty());
        assert!(!FieldValue::Level(0).is_empty());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::text("MIT").to_string(), "MIT");
        assert_eq!(FieldValue::Level(4).to_string(), "4/5");
    }

    #[test]
    fn test_expect_level_bounds() {
        assert_eq!(expect_level("level", FieldValue::Level(0)).unwrap(), 0);
        assert_eq!(expect_level("level", FieldValue::Level(5)).unwrap(), 5);
        assert!(expect_level("level", FieldValue::Level(6)).is_err());
        assert!(expect_level("level", FieldValue::text("3")).is_err());
    }

    #[test]
    fn test_expect_text_rejects_level() {
        assert_eq!(expect_text("name", "Go".into()).unwrap(), "Go");
        assert!(expect_text("name", FieldValue::Level(2)).is_err());
    }
}
