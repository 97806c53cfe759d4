use crate::ai_assist::DescriptionInput;
use crate::document::{Document, ExperienceEntry, SectionKind, SectionValue};
use crate::editors::{remove_entry, EditorError, EditorView, Field, FieldGroup, SectionEditor};
use crate::i18n::{Label, Language};

pub struct ExperienceEditor {
    entries: Vec<ExperienceEntry>,
}

impl ExperienceEditor {
    /// Appends an entry with every field empty.
    pub fn add(&mut self) -> usize {
        self.entries.push(ExperienceEntry::default());
        self.entries.len() - 1
    }

    pub fn remove_at(&mut self, index: usize) -> Result<ExperienceEntry, EditorError> {
        remove_entry(&mut self.entries, index, Self::SECTION)
    }

    pub fn description_input(&self, index: usize) -> Result<DescriptionInput, EditorError> {
        let entry = self.entry(index)?;
        Ok(DescriptionInput {
            title: entry.title.clone(),
            company: entry.company.clone(),
            description: entry.description.clone(),
        })
    }

    pub fn set_description(&mut self, index: usize, text: String) -> Result<(), EditorError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange {
                section: Self::SECTION.as_str(),
                index,
                len,
            })?;
        entry.description = text;
        Ok(())
    }

    fn entry(&self, index: usize) -> Result<&ExperienceEntry, EditorError> {
        self.entries.get(index).ok_or(EditorError::IndexOutOfRange {
            section: Self::SECTION.as_str(),
            index,
            len: self.entries.len(),
        })
    }
}

impl SectionEditor for ExperienceEditor {
    type Value = Vec<ExperienceEntry>;

    const SECTION: SectionKind = SectionKind::Experience;

    fn open(document: &Document) -> Self {
        Self {
            entries: document.experience.clone(),
        }
    }

    fn value(&self) -> &Vec<ExperienceEntry> {
        &self.entries
    }

    fn replace(&mut self, value: Vec<ExperienceEntry>) {
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
                    Field::text("title", Label::Title, &e.title, language),
                    Field::text("company", Label::Company, &e.company, language),
                    Field::text("startDate", Label::StartDate, &e.start_date, language),
                    Field::text(
                        "endDate",
                        Label::EndDate,
                        e.effective_end_date().unwrap_or_default(),
                        language,
                    )
                    .disabled_if(e.is_current),
                    Field::flag("isCurrent", Label::CurrentlyWorking, e.is_current, language),
                    Field::text("description", Label::Description, &e.description, language)
                        .multiline(),
                ],
            })
            .collect();

        EditorView {
            section: Self::SECTION,
            title: Label::Experience.text(language),
            groups,
            can_add: true,
        }
    }

    fn into_section(self) -> SectionValue {
        SectionValue::Experience(self.entries)
    }
}
