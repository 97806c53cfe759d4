use crate::ai_assist::SummaryInput;
use crate::document::{Document, ExperienceEntry, PersonalInfo, SectionKind, SectionValue, SkillSet};
use crate::editors::{EditorView, Field, FieldGroup, SectionEditor};
use crate::i18n::{Label, Language};

pub struct SummaryEditor {
    value: String,
}

impl SummaryEditor {
    /// Builds the generation payload. The other sections are passed in by the
    /// caller; the editor only contributes its own text.
    pub fn generation_input(
        &self,
        personal_info: &PersonalInfo,
        experience: &[ExperienceEntry],
        skills: &SkillSet,
    ) -> SummaryInput {
        SummaryInput {
            personal_info: personal_info.clone(),
            experience: experience.to_vec(),
            skills: skills.as_slice().to_vec(),
            current_summary: self.value.clone(),
        }
    }
}

impl SectionEditor for SummaryEditor {
    type Value = String;

    const SECTION: SectionKind = SectionKind::Summary;

    fn open(document: &Document) -> Self {
        Self {
            value: document.summary.clone(),
        }
    }

    fn value(&self) -> &String {
        &self.value
    }

    fn replace(&mut self, value: String) {
        self.value = value;
    }

    fn render(&self, language: Language) -> EditorView {
        EditorView {
            section: Self::SECTION,
            title: Label::Summary.text(language),
            groups: vec![FieldGroup {
                index: None,
                fields: vec![
                    Field::text("summary", Label::Summary, &self.value, language).multiline()
                ],
            }],
            can_add: false,
        }
    }

    fn into_section(self) -> SectionValue {
        SectionValue::Summary(self.value)
    }
}
