use crate::document::{Document, EducationEntry, SectionKind, SectionValue};
use crate::editors::{remove_entry, EditorError, EditorView, Field, FieldGroup, SectionEditor};
use crate::i18n::{Label, Language};

pub struct EducationEditor {
    entries: Vec<EducationEntry>,
}

impl EducationEditor {
    pub fn add(&mut self) -> usize {
        self.entries.push(EducationEntry::default());
        self.entries.len() - 1
    }

    pub fn remove_at(&mut self, index: usize) -> Result<EducationEntry, EditorError> {
        remove_entry(&mut self.entries, index, Self::SECTION)
    }
}

impl SectionEditor for EducationEditor {
    type Value = Vec<EducationEntry>;

    const SECTION: SectionKind = SectionKind::Education;

    fn open(document: &Document) -> Self {
        Self {
            entries: document.education.clone(),
        }
    }

    fn value(&self) -> &Vec<EducationEntry> {
        &self.entries
    }

    fn replace(&mut self, value: Vec<EducationEntry>) {
        self.entries = value;
    }

    fn render(&self, language: Language) -> EditorView {
        let groups = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, e)| FieldGroup {
                index: Some(index),
                fields: vec![
                    Field::text("degree", Label::Degree, &e.degree, language),
                    Field::text("institution", Label::Institution, &e.institution, language),
                    Field::text("fieldOfStudy", Label::FieldOfStudy, &e.field_of_study, language),
                    Field::text(
                        "graduationDate",
                        Label::GraduationDate,
                        &e.graduation_date,
                        language,
                    ),
                ],
            })
            .collect();

        EditorView {
            section: Self::SECTION,
            title: Label::Education.text(language),
            groups,
            can_add: true,
        }
    }

    fn into_section(self) -> SectionValue {
        SectionValue::Education(self.entries)
    }
}
