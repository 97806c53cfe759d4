//! Builder languages and the fixed labels the CV pipeline renders itself.
//!
//! Only the strings the builder, the preview templates and the fallback
//! generators need live here. Product-wide string tables belong to the
//! frontend and are not mirrored.

use serde::{Deserialize, Serialize};

/// Output language of generated text, editor labels and rendered templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    #[default]
    En,
}

impl Language {
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }
}

/// A fixed UI label with an English and an Arabic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    // Section titles
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
    Achievements,
    Preview,
    // Period marker for current roles
    Present,
    // Personal info fields
    FullName,
    JobTitle,
    Email,
    Phone,
    City,
    Linkedin,
    // Experience fields
    Title,
    Company,
    StartDate,
    EndDate,
    CurrentlyWorking,
    Description,
    // Education fields
    Degree,
    Institution,
    FieldOfStudy,
    GraduationDate,
    // Skills
    Skill,
}

impl Label {
    pub fn text(self, language: Language) -> &'static str {
        let (en, ar) = match self {
            Label::PersonalInfo => ("Personal Information", "المعلومات الشخصية"),
            Label::Summary => ("Professional Summary", "الملخص المهني"),
            Label::Experience => ("Work Experience", "الخبرات العملية"),
            Label::Education => ("Education", "التعليم"),
            Label::Skills => ("Skills", "المهارات"),
            Label::Languages => ("Languages", "اللغات"),
            Label::Achievements => ("Sports Achievements", "الإنجازات الرياضية"),
            Label::Preview => ("Preview", "المعاينة"),
            Label::Present => ("Present", "حتى الآن"),
            Label::FullName => ("Full Name", "الاسم الكامل"),
            Label::JobTitle => ("Job Title", "المسمى الوظيفي"),
            Label::Email => ("Email", "البريد الإلكتروني"),
            Label::Phone => ("Phone", "رقم الهاتف"),
            Label::City => ("City", "المدينة"),
            Label::Linkedin => ("LinkedIn", "لينكد إن"),
            Label::Title => ("Position", "المنصب"),
            Label::Company => ("Organization", "الجهة"),
            Label::StartDate => ("Start Date", "تاريخ البدء"),
            Label::EndDate => ("End Date", "تاريخ الانتهاء"),
            Label::CurrentlyWorking => ("I currently work here", "أعمل هنا حالياً"),
            Label::Description => ("Description", "الوصف"),
            Label::Degree => ("Degree", "الدرجة العلمية"),
            Label::Institution => ("Institution", "المؤسسة التعليمية"),
            Label::FieldOfStudy => ("Field of Study", "التخصص"),
            Label::GraduationDate => ("Graduation Date", "تاريخ التخرج"),
            Label::Skill => ("Skill", "المهارة"),
        };
        match language {
            Language::En => en,
            Language::Ar => ar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }

    #[test]
    fn test_present_label_is_localized() {
        assert_eq!(Label::Present.text(Language::En), "Present");
        assert_eq!(Label::Present.text(Language::Ar), "حتى الآن");
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
    }
}
