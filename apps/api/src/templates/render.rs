//! Document → layout tree.
//!
//! `render` is pure: it reads the Document, never mutates it, and the same
//! (template, document, language) always yields an equal tree. Each section
//! block is built once here and handed to the layout strategy, so strategies
//! can only rearrange blocks, never decide what data is surfaced. Sections with
//! nothing to show produce no block at all.

use serde::Serialize;

use crate::document::{Achievement, Document, EducationEntry, ExperienceEntry, LanguageEntry};
use crate::i18n::{Label, Language};
use crate::templates::catalog::ColorScheme;
use crate::templates::layouts::{LayoutStrategy, SkillStyle};
use crate::templates::TemplateId;

const PERIOD_SEPARATOR: &str = " – ";

// ────────────────────────────────────────────────────────────────────────────
// Layout tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCv {
    pub template: TemplateId,
    pub layout: LayoutStrategy,
    pub colors: ColorScheme,
    pub direction: TextDirection,
    pub header: Header,
    /// Empty for single-column layouts.
    pub sidebar: Vec<Block>,
    pub main: Vec<Block>,
}

#[cfg(test)]
impl RenderedCv {
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sidebar.iter().chain(self.main.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    City,
    Linkedin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    Summary {
        title: String,
        text: String,
    },
    Experience {
        title: String,
        items: Vec<TimelineItem>,
    },
    Education {
        title: String,
        items: Vec<TimelineItem>,
    },
    Skills {
        title: String,
        style: SkillStyle,
        items: Vec<String>,
    },
    Languages {
        title: String,
        items: Vec<LanguageLine>,
    },
    Achievements {
        title: String,
        highlighted: bool,
        items: Vec<AchievementLine>,
    },
}

#[cfg(test)]
impl Block {
    pub fn is_achievements(&self) -> bool {
        matches!(self, Block::Achievements { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementLine {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Every block a document can produce. A `None` slot means the section is omitted.
pub(crate) struct SectionBlocks {
    pub summary: Option<Block>,
    pub experience: Option<Block>,
    pub education: Option<Block>,
    pub skills: Option<Block>,
    pub languages: Option<Block>,
    pub achievements: Option<Block>,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

pub fn render(template: TemplateId, document: &Document, language: Language) -> RenderedCv {
    let layout = template.strategy();
    let blocks = SectionBlocks {
        summary: summary_block(&document.summary, language),
        experience: experience_block(&document.experience, language),
        education: education_block(&document.education, language),
        skills: skills_block(document.skills.iter(), layout.skill_style(), language),
        languages: languages_block(&document.languages, language),
        achievements: achievements_block(
            &document.achievements,
            layout.highlights_achievements(),
            language,
        ),
    };
    let (sidebar, main) = layout.arrange(blocks);

    RenderedCv {
        template,
        layout,
        colors: template.descriptor().colors,
        direction: if language.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        },
        header: header(document),
        sidebar,
        main,
    }
}

/// Formats a date range. Current roles always end with the localized "Present"
/// marker and never show their stored end date.
pub fn format_period(
    start: &str,
    end: Option<&str>,
    is_current: bool,
    language: Language,
) -> Option<String> {
    let start = non_blank(start);
    let end = if is_current {
        Some(Label::Present.text(language).to_string())
    } else {
        end.and_then(non_blank)
    };

    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{start}{PERIOD_SEPARATOR}{end}")),
        (Some(start), None) => Some(start),
        (None, end) => end,
    }
}

fn header(document: &Document) -> Header {
    let info = &document.personal_info;
    let contacts = [
        (ContactKind::Email, &info.email),
        (ContactKind::Phone, &info.phone),
        (ContactKind::City, &info.city),
        (ContactKind::Linkedin, &info.linkedin),
    ]
    .into_iter()
    .filter_map(|(kind, value)| non_blank(value).map(|value| Contact { kind, value }))
    .collect();

    Header {
        name: info.full_name.trim().to_string(),
        job_title: non_blank(&info.job_title),
        contacts,
    }
}

fn summary_block(summary: &str, language: Language) -> Option<Block> {
    non_blank(summary).map(|text| Block::Summary {
        title: Label::Summary.text(language).to_string(),
        text,
    })
}

fn experience_block(entries: &[ExperienceEntry], language: Language) -> Option<Block> {
    let items: Vec<TimelineItem> = entries
        .iter()
        .filter(|e| !e.is_blank())
        .map(|e| {
            let (heading, subheading) = headline(&e.title, &e.company);
            TimelineItem {
                heading,
                subheading,
                period: format_period(&e.start_date, e.effective_end_date(), e.is_current, language),
                body: non_blank(&e.description),
            }
        })
        .collect();

    (!items.is_empty()).then(|| Block::Experience {
        title: Label::Experience.text(language).to_string(),
        items,
    })
}

fn education_block(entries: &[EducationEntry], language: Language) -> Option<Block> {
    let items: Vec<TimelineItem> = entries
        .iter()
        .filter(|e| !e.is_blank())
        .map(|e| {
            let (heading, subheading) = headline(&e.degree, &e.institution);
            TimelineItem {
                heading,
                subheading,
                period: non_blank(&e.graduation_date),
                body: non_blank(&e.field_of_study),
            }
        })
        .collect();

    (!items.is_empty()).then(|| Block::Education {
        title: Label::Education.text(language).to_string(),
        items,
    })
}

fn skills_block<'a>(
    skills: impl Iterator<Item = &'a str>,
    style: SkillStyle,
    language: Language,
) -> Option<Block> {
    let items: Vec<String> = skills.map(str::to_string).collect();
    (!items.is_empty()).then(|| Block::Skills {
        title: Label::Skills.text(language).to_string(),
        style,
        items,
    })
}

fn languages_block(entries: &[LanguageEntry], language: Language) -> Option<Block> {
    let items: Vec<LanguageLine> = entries
        .iter()
        .filter_map(|l| {
            non_blank(&l.name).map(|name| LanguageLine {
                name,
                level: non_blank(&l.level),
            })
        })
        .collect();

    (!items.is_empty()).then(|| Block::Languages {
        title: Label::Languages.text(language).to_string(),
        items,
    })
}

fn achievements_block(
    entries: &[Achievement],
    highlighted: bool,
    language: Language,
) -> Option<Block> {
    let items: Vec<AchievementLine> = entries
        .iter()
        .filter_map(|a| {
            non_blank(&a.title).map(|title| AchievementLine {
                title,
                year: non_blank(&a.year),
                description: non_blank(&a.description),
            })
        })
        .collect();

    (!items.is_empty()).then(|| Block::Achievements {
        title: Label::Achievements.text(language).to_string(),
        highlighted,
        items,
    })
}

/// Heading and subheading for a timeline entry. A blank primary line promotes
/// the secondary one; when both are blank the heading is omitted.
fn headline(primary: &str, secondary: &str) -> (Option<String>, Option<String>) {
    match non_blank(primary) {
        Some(heading) => (Some(heading), non_blank(secondary)),
        None => (non_blank(secondary), None),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
