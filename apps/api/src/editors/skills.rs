use crate::ai_assist::{merge_skill_suggestions, SkillsInput};
use crate::document::{Document, ExperienceEntry, SectionKind, SectionValue, SkillSet};
use crate::editors::{EditorError, EditorView, Field, FieldGroup, SectionEditor};
use crate::i18n::{Label, Language};

pub struct SkillsEditor {
    skills: SkillSet,
}

impl SkillsEditor {
    /// No-op (returns `false`) for blank or already-present skills.
    pub fn add(&mut self, skill: &str) -> bool {
        self.skills.insert(skill)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<String, EditorError> {
        let len = self.skills.len();
        self.skills
            .remove_at(index)
            .ok_or(EditorError::IndexOutOfRange {
                section: Self::SECTION.as_str(),
                index,
                len,
            })
    }

    /// Suggestion payload. `job_title` comes from personal info via the caller.
    pub fn suggestion_input(&self, job_title: &str, experience: &[ExperienceEntry]) -> SkillsInput {
        SkillsInput {
            job_title: job_title.to_string(),
            experience: experience.to_vec(),
            existing_skills: self.skills.as_slice().to_vec(),
        }
    }

    /// Merges a comma-separated suggestion list; returns how many skills were added.
    pub fn merge_suggestions(&mut self, suggestions: &str) -> usize {
        let before = self.skills.len();
        self.skills = merge_skill_suggestions(&self.skills, suggestions);
        self.skills.len() - before
    }
}

impl SectionEditor for SkillsEditor {
    type Value = SkillSet;

    const SECTION: SectionKind = SectionKind::Skills;

    fn open(document: &Document) -> Self {
        Self {
            skills: document.skills.clone(),
        }
    }

    fn value(&self) -> &SkillSet {
        &self.skills
    }

    fn replace(&mut self, value: SkillSet) {
        self.skills = value;
    }

    fn render(&self, language: Language) -> EditorView {
        let groups = self
            .skills
            .iter()
            .enumerate()
            .map(|(index, skill)| FieldGroup {
                index: Some(index),
                fields: vec![Field::text("skill", Label::Skill, skill, language)],
            })
            .collect();

        EditorView {
            section: Self::SECTION,
            title: Label::Skills.text(language),
            groups,
            can_add: true,
        }
    }

    fn into_section(self) -> SectionValue {
        SectionValue::Skills(self.skills)
    }
}
