//! Section Editors: one per wizard step section.
//!
//! An editor is opened on its own section value only, holds the local
//! (uncommitted) copy, renders a form view of it, and commits by replacing the
//! whole section in the Document. Editors never read each other's sections:
//! where one needs another section's data (e.g. skills suggestions need the
//! job title) the caller passes it in explicitly.

pub mod education;
pub mod experience;
pub mod personal_info;
pub mod skills;
pub mod summary;

use serde::Serialize;
use thiserror::Error;

use crate::document::{Document, SectionKind, SectionValue};
use crate::i18n::{Label, Language};

pub use education::EducationEditor;
pub use experience::ExperienceEditor;
pub use personal_info::PersonalInfoEditor;
pub use skills::SkillsEditor;
pub use summary::SummaryEditor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("No {section} entry at index {index} ({len} entries)")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Section '{0}' is not a list")]
    NotAList(&'static str),

    #[error("A value is required to add to '{0}'")]
    MissingValue(&'static str),

    /// The entry a suggestion was generated for was edited or removed meanwhile.
    #[error("The {section} entry at index {index} changed while its suggestion was generated")]
    StaleEntry { section: &'static str, index: usize },
}

pub trait SectionEditor: Sized {
    type Value: Clone;

    const SECTION: SectionKind;

    /// Opens the editor on this editor's own section of the document.
    fn open(document: &Document) -> Self;

    fn value(&self) -> &Self::Value;

    /// Replaces the local value wholesale (the `onChange` of a form).
    fn replace(&mut self, value: Self::Value);

    fn render(&self, language: Language) -> EditorView;

    fn into_section(self) -> SectionValue;

    /// Writes the local value back as a whole-section replacement.
    fn commit(self, document: &mut Document) -> SectionValue {
        let value = self.into_section();
        document.set_section(value.clone());
        value
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Form view model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub section: SectionKind,
    pub title: &'static str,
    /// One group for single-value sections; one per entry for list sections.
    pub groups: Vec<FieldGroup>,
    pub can_add: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub required: bool,
    pub multiline: bool,
    pub disabled: bool,
}

impl Field {
    pub fn text(name: &'static str, label: Label, value: &str, language: Language) -> Self {
        Self {
            name,
            label: label.text(language),
            value: FieldValue::Text(value.to_string()),
            required: false,
            multiline: false,
            disabled: false,
        }
    }

    pub fn flag(name: &'static str, label: Label, value: bool, language: Language) -> Self {
        Self {
            value: FieldValue::Flag(value),
            ..Self::text(name, label, "", language)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Stable splice shared by the list editors.
pub(crate) fn remove_entry<T>(
    entries: &mut Vec<T>,
    index: usize,
    section: SectionKind,
) -> Result<T, EditorError> {
    if index >= entries.len() {
        return Err(EditorError::IndexOutOfRange {
            section: section.as_str(),
            index,
            len: entries.len(),
        });
    }
    Ok(entries.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_entry_is_stable() {
        let mut entries = vec!['a', 'b', 'c', 'd'];
        assert_eq!(remove_entry(&mut entries, 1, SectionKind::Experience), Ok('b'));
        assert_eq!(entries, vec!['a', 'c', 'd']);
    }

    #[test]
    fn test_remove_entry_out_of_range() {
        let mut entries = vec![1];
        assert_eq!(
            remove_entry(&mut entries, 3, SectionKind::Education),
            Err(EditorError::IndexOutOfRange {
                section: "education",
                index: 3,
                len: 1
            })
        );
        assert_eq!(entries, vec![1]);
    }

    #[test]
    fn test_field_value_serializes_untagged() {
        let field = Field::flag("isCurrent", Label::CurrentlyWorking, true, Language::En);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["value"], true);
        assert_eq!(json["label"], "I currently work here");
    }
}
