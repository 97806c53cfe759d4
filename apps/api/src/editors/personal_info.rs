use crate::document::{Document, PersonalInfo, SectionKind, SectionValue};
use crate::editors::{EditorView, Field, FieldGroup, SectionEditor};
use crate::i18n::{Label, Language};

pub struct PersonalInfoEditor {
    value: PersonalInfo,
}

impl SectionEditor for PersonalInfoEditor {
    type Value = PersonalInfo;

    const SECTION: SectionKind = SectionKind::PersonalInfo;

    fn open(document: &Document) -> Self {
        Self {
            value: document.personal_info.clone(),
        }
    }

    fn value(&self) -> &PersonalInfo {
        &self.value
    }

    fn replace(&mut self, value: PersonalInfo) {
        self.value = value;
    }

    fn render(&self, language: Language) -> EditorView {
        let v = &self.value;
        EditorView {
            section: Self::SECTION,
            title: Label::PersonalInfo.text(language),
            groups: vec![FieldGroup {
                index: None,
                fields: vec![
                    Field::text("fullName", Label::FullName, &v.full_name, language).required(),
                    Field::text("jobTitle", Label::JobTitle, &v.job_title, language),
                    Field::text("email", Label::Email, &v.email, language).required(),
                    Field::text("phone", Label::Phone, &v.phone, language).required(),
                    Field::text("city", Label::City, &v.city, language),
                    Field::text("linkedin", Label::Linkedin, &v.linkedin, language),
                ],
            }],
            can_add: false,
        }
    }

    fn into_section(self) -> SectionValue {
        SectionValue::PersonalInfo(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_marks_export_required_fields() {
        let editor = PersonalInfoEditor::open(&Document::new());
        let view = editor.render(Language::En);
        let required: Vec<&str> = view.groups[0]
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["fullName", "email", "phone"]);
    }

    #[test]
    fn test_commit_replaces_only_personal_info() {
        let mut document = Document {
            summary: "Keep me".to_string(),
            ..Document::default()
        };
        let mut editor = PersonalInfoEditor::open(&document);
        editor.replace(PersonalInfo {
            full_name: "Rana".to_string(),
            ..PersonalInfo::default()
        });
        editor.commit(&mut document);

        assert_eq!(document.personal_info.full_name, "Rana");
        assert_eq!(document.summary, "Keep me");
    }
}
