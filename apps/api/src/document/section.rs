//! Section-keyed access to the Document.
//!
//! A section value is always replaced whole; there is no field-level patch
//! API at this layer. An editor owns its entire section and hands back a
//! complete value.

use serde::{Deserialize, Serialize};

use crate::document::model::{
    Achievement, Document, EducationEntry, ExperienceEntry, LanguageEntry, Meta, PersonalInfo,
};
use crate::document::skills::SkillSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Achievements,
    Meta,
}

impl SectionKind {
    #[cfg(test)]
    pub const ALL: [SectionKind; 8] = [
        SectionKind::PersonalInfo,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Languages,
        SectionKind::Achievements,
        SectionKind::Meta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::PersonalInfo => "personalInfo",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::Achievements => "achievements",
            SectionKind::Meta => "meta",
        }
    }
}

/// A complete value for one section. Wire shape: `{"section": "...", "value": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "camelCase")]
pub enum SectionValue {
    PersonalInfo(PersonalInfo),
    Summary(String),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Skills(SkillSet),
    Languages(Vec<LanguageEntry>),
    Achievements(Vec<Achievement>),
    Meta(Meta),
}

impl SectionValue {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionValue::PersonalInfo(_) => SectionKind::PersonalInfo,
            SectionValue::Summary(_) => SectionKind::Summary,
            SectionValue::Experience(_) => SectionKind::Experience,
            SectionValue::Education(_) => SectionKind::Education,
            SectionValue::Skills(_) => SectionKind::Skills,
            SectionValue::Languages(_) => SectionKind::Languages,
            SectionValue::Achievements(_) => SectionKind::Achievements,
            SectionValue::Meta(_) => SectionKind::Meta,
        }
    }
}

impl Document {
    /// Replaces one section wholesale. No other section is touched.
    pub fn set_section(&mut self, value: SectionValue) {
        match value {
            SectionValue::PersonalInfo(v) => self.personal_info = v,
            SectionValue::Summary(v) => self.summary = v,
            SectionValue::Experience(v) => self.experience = v,
            SectionValue::Education(v) => self.education = v,
            SectionValue::Skills(v) => self.skills = v,
            SectionValue::Languages(v) => self.languages = v,
            SectionValue::Achievements(v) => self.achievements = v,
            SectionValue::Meta(v) => self.meta = v,
        }
    }

    /// Returns a copy of the current value of one section.
    #[cfg(test)]
    pub fn section(&self, kind: SectionKind) -> SectionValue {
        match kind {
            SectionKind::PersonalInfo => SectionValue::PersonalInfo(self.personal_info.clone()),
            SectionKind::Summary => SectionValue::Summary(self.summary.clone()),
            SectionKind::Experience => SectionValue::Experience(self.experience.clone()),
            SectionKind::Education => SectionValue::Education(self.education.clone()),
            SectionKind::Skills => SectionValue::Skills(self.skills.clone()),
            SectionKind::Languages => SectionValue::Languages(self.languages.clone()),
            SectionKind::Achievements => SectionValue::Achievements(self.achievements.clone()),
            SectionKind::Meta => SectionValue::Meta(self.meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateId;

    fn populated() -> Document {
        Document {
            personal_info: PersonalInfo {
                full_name: "Khalid Nasser".to_string(),
                job_title: "Goalkeeper Coach".to_string(),
                email: "khalid@example.com".to_string(),
                phone: "+966500000000".to_string(),
                city: "Riyadh".to_string(),
                linkedin: String::new(),
            },
            summary: "Fifteen years between the posts.".to_string(),
            experience: vec![ExperienceEntry {
                title: "Coach".to_string(),
                ..ExperienceEntry::default()
            }],
            education: vec![EducationEntry {
                degree: "BSc Sports Science".to_string(),
                ..EducationEntry::default()
            }],
            skills: SkillSet::from(vec!["Shot stopping".to_string()]),
            languages: vec![LanguageEntry {
                name: "Arabic".to_string(),
                level: "Native".to_string(),
            }],
            achievements: vec![Achievement {
                title: "League champion".to_string(),
                year: "2019".to_string(),
                description: String::new(),
            }],
            meta: Meta {
                template: TemplateId::SportsChampion,
            },
        }
    }

    fn replacement_for(kind: SectionKind) -> SectionValue {
        match kind {
            SectionKind::PersonalInfo => SectionValue::PersonalInfo(PersonalInfo {
                full_name: "Someone Else".to_string(),
                ..PersonalInfo::default()
            }),
            SectionKind::Summary => SectionValue::Summary("New summary".to_string()),
            SectionKind::Experience => SectionValue::Experience(vec![]),
            SectionKind::Education => SectionValue::Education(vec![]),
            SectionKind::Skills => SectionValue::Skills(SkillSet::from(vec!["X".to_string()])),
            SectionKind::Languages => SectionValue::Languages(vec![]),
            SectionKind::Achievements => SectionValue::Achievements(vec![]),
            SectionKind::Meta => SectionValue::Meta(Meta {
                template: TemplateId::ModernMinimal,
            }),
        }
    }

    #[test]
    fn test_replacing_a_section_never_touches_other_sections() {
        for target in SectionKind::ALL {
            let before = populated();
            let mut after = before.clone();
            let replacement = replacement_for(target);
            after.set_section(replacement.clone());

            assert_eq!(after.section(target), replacement);
            for other in SectionKind::ALL.into_iter().filter(|k| *k != target) {
                assert_eq!(
                    after.section(other),
                    before.section(other),
                    "replacing {target:?} changed {other:?}"
                );
            }
        }
    }

    #[test]
    fn test_section_value_reports_its_kind() {
        for kind in SectionKind::ALL {
            assert_eq!(replacement_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_section_value_wire_shape() {
        let json = serde_json::json!({ "section": "summary", "value": "Hello" });
        let value: SectionValue = serde_json::from_value(json).unwrap();
        assert_eq!(value, SectionValue::Summary("Hello".to_string()));

        let json = serde_json::json!({
            "section": "personalInfo",
            "value": { "fullName": "Lina", "email": "lina@example.com" }
        });
        let value: SectionValue = serde_json::from_value(json).unwrap();
        assert_eq!(value.kind(), SectionKind::PersonalInfo);
    }

    #[test]
    fn test_section_kind_as_str_matches_serde() {
        for kind in SectionKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }
}
