//! Deterministic local substitutes for AI-generated text.
//!
//! Used when the generation service is unavailable (HTTP 503) or unreachable
//! after all retries. Output depends only on the inputs and the language.

use crate::document::PersonalInfo;
use crate::i18n::Language;

const DESCRIPTION_BULLETS_EN: [&str; 3] = [
    "• Delivered consistent results in line with team and organizational goals",
    "• Worked closely with staff and players to raise performance standards",
    "• Maintained a high standard of professionalism and discipline",
];

const DESCRIPTION_BULLETS_AR: [&str; 3] = [
    "• تحقيق نتائج ثابتة بما يتماشى مع أهداف الفريق والمؤسسة",
    "• العمل بشكل وثيق مع الجهاز الفني واللاعبين لرفع مستوى الأداء",
    "• الالتزام بمستوى عالٍ من الاحترافية والانضباط",
];

struct SkillGroup {
    keywords: &'static [&'static str],
    en: &'static [&'static str],
    ar: &'static [&'static str],
}

/// Checked in order; the first group with a keyword in the job title wins.
const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        keywords: &["coach", "trainer", "مدرب"],
        en: &[
            "Team Leadership",
            "Training Planning",
            "Tactical Analysis",
            "Player Development",
            "Match Preparation",
        ],
        ar: &[
            "قيادة الفريق",
            "تخطيط التدريب",
            "التحليل التكتيكي",
            "تطوير اللاعبين",
            "التحضير للمباريات",
        ],
    },
    SkillGroup {
        keywords: &["player", "athlete", "لاعب", "رياضي"],
        en: &[
            "Teamwork",
            "Physical Fitness",
            "Discipline",
            "Game Awareness",
            "Resilience",
        ],
        ar: &[
            "العمل الجماعي",
            "اللياقة البدنية",
            "الانضباط",
            "قراءة المباراة",
            "المرونة",
        ],
    },
    SkillGroup {
        keywords: &[
            "physio",
            "therapist",
            "fitness",
            "nutrition",
            "medical",
            "specialist",
            "أخصائي",
            "معالج",
            "لياقة",
        ],
        en: &[
            "Injury Prevention",
            "Rehabilitation",
            "Performance Assessment",
            "Conditioning Programs",
            "Athlete Welfare",
        ],
        ar: &[
            "الوقاية من الإصابات",
            "إعادة التأهيل",
            "تقييم الأداء",
            "برامج التكييف البدني",
            "رعاية الرياضيين",
        ],
    },
    SkillGroup {
        keywords: &["manager", "director", "admin", "club", "مدير", "إداري"],
        en: &[
            "Sports Administration",
            "Strategic Planning",
            "Budget Management",
            "Stakeholder Communication",
            "Event Organization",
        ],
        ar: &[
            "الإدارة الرياضية",
            "التخطيط الاستراتيجي",
            "إدارة الميزانية",
            "التواصل مع الشركاء",
            "تنظيم الفعاليات",
        ],
    },
];

const DEFAULT_SKILLS_EN: &[&str] = &["Communication", "Teamwork", "Time Management", "Problem Solving"];
const DEFAULT_SKILLS_AR: &[&str] = &["التواصل", "العمل الجماعي", "إدارة الوقت", "حل المشكلات"];

/// A one-sentence summary built from whatever personal info is filled in.
pub fn summary(info: &PersonalInfo, language: Language) -> String {
    let name = info.full_name.trim();
    let title = info.job_title.trim();
    let city = info.city.trim();

    match language {
        Language::En => {
            let title = if title.is_empty() {
                "sports professional"
            } else {
                title
            };
            let location = if city.is_empty() {
                String::new()
            } else {
                format!(" based in {city}")
            };
            let subject = if name.is_empty() {
                format!("Dedicated {title}{location}")
            } else {
                format!("{name} is a dedicated {title}{location}")
            };
            format!(
                "{subject}, committed to achieving the best results and to continuous professional development."
            )
        }
        Language::Ar => {
            let title = if title.is_empty() { "محترف رياضي" } else { title };
            let location = if city.is_empty() {
                String::new()
            } else {
                format!(" مقيم في {city}")
            };
            let subject = if name.is_empty() {
                format!("{title} متميز{location}")
            } else {
                format!("{name}، {title} متميز{location}")
            };
            format!("{subject}، ملتزم بتحقيق أفضل النتائج والتطوير المهني المستمر.")
        }
    }
}

/// The original description followed by three generic bullet points.
pub fn description(original: &str, language: Language) -> String {
    let bullets = match language {
        Language::En => DESCRIPTION_BULLETS_EN,
        Language::Ar => DESCRIPTION_BULLETS_AR,
    }
    .join("\n");

    let original = original.trim();
    if original.is_empty() {
        bullets
    } else {
        format!("{original}\n{bullets}")
    }
}

/// Generic skills for the job title, as the service would return them.
pub fn skills(job_title: &str, language: Language) -> String {
    skill_set(job_title, language).join(", ")
}

pub fn skill_set(job_title: &str, language: Language) -> &'static [&'static str] {
    let title = job_title.to_lowercase();
    let group = SKILL_GROUPS
        .iter()
        .find(|g| g.keywords.iter().any(|k| title.contains(k)));

    match (group, language) {
        (Some(g), Language::En) => g.en,
        (Some(g), Language::Ar) => g.ar,
        (None, Language::En) => DEFAULT_SKILLS_EN,
        (None, Language::Ar) => DEFAULT_SKILLS_AR,
    }
}
