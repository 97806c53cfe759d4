use serde::{Deserialize, Serialize};

use crate::document::skills::SkillSet;
use crate::templates::TemplateId;

/// Contact and headline details. `full_name`, `email` and `phone` are required for export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub linkedin: String,
}

/// A single role. When `is_current` is set, `end_date` is ignored by every consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

impl ExperienceEntry {
    /// The end date consumers may show: never present for current roles or blank input.
    pub fn effective_end_date(&self) -> Option<&str> {
        let end = self.end_date.trim();
        if self.is_current || end.is_empty() {
            None
        } else {
            Some(end)
        }
    }

    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.company,
            &self.start_date,
            &self.end_date,
            &self.description,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
            && !self.is_current
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub graduation_date: String,
}

impl EducationEntry {
    pub fn is_blank(&self) -> bool {
        [
            &self.degree,
            &self.institution,
            &self.field_of_study,
            &self.graduation_date,
        ]
        .iter()
        .all(|s| s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

/// A sport-specific achievement (title won, record, selection, award).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub template: TemplateId,
}

/// The résumé. Sections are independent: no field of one section is derived from another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub languages: Vec<LanguageEntry>,
    pub achievements: Vec<Achievement>,
    pub meta: Meta,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the end date cleared on every current role.
    pub fn normalized(&self) -> Document {
        let mut document = self.clone();
        for entry in document.experience.iter_mut().filter(|e| e.is_current) {
            entry.end_date.clear();
        }
        document
    }

    /// Wire names of the required personal-info fields that are blank.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let info = &self.personal_info;
        [
            ("fullName", &info.full_name),
            ("email", &info.email),
            ("phone", &info.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
