//! Static template catalog. Compiled in, never fetched or mutated at runtime.

use serde::Serialize;

use crate::templates::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Professional,
    Modern,
    Creative,
    Sports,
}

/// Hex colours applied by the renderer; the frontend owns everything else visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub name: &'static str,
    pub name_ar: &'static str,
    pub description: &'static str,
    pub description_ar: &'static str,
    pub category: TemplateCategory,
    pub colors: ColorScheme,
}

/// Ordered by `TemplateId` discriminant.
pub(crate) static CATALOG: [TemplateDescriptor; 6] = [
    TemplateDescriptor {
        id: TemplateId::ProfessionalClassic,
        name: "Professional Classic",
        name_ar: "كلاسيكي احترافي",
        description: "A clean single-column layout suited to any role.",
        description_ar: "تصميم بعمود واحد مناسب لجميع الوظائف.",
        category: TemplateCategory::Professional,
        colors: ColorScheme {
            primary: "#1f2937",
            secondary: "#4b5563",
            accent: "#2563eb",
        },
    },
    TemplateDescriptor {
        id: TemplateId::ModernMinimal,
        name: "Modern Minimal",
        name_ar: "عصري بسيط",
        description: "Two columns with a light sidebar for skills and languages.",
        description_ar: "عمودان مع شريط جانبي للمهارات واللغات.",
        category: TemplateCategory::Modern,
        colors: ColorScheme {
            primary: "#0f172a",
            secondary: "#64748b",
            accent: "#14b8a6",
        },
    },
    TemplateDescriptor {
        id: TemplateId::CreativeBold,
        name: "Creative Bold",
        name_ar: "إبداعي جريء",
        description: "High-contrast sidebar layout for a standout profile.",
        description_ar: "تصميم بشريط جانبي عالي التباين لملف مميز.",
        category: TemplateCategory::Creative,
        colors: ColorScheme {
            primary: "#581c87",
            secondary: "#a855f7",
            accent: "#f59e0b",
        },
    },
    TemplateDescriptor {
        id: TemplateId::SportsChampion,
        name: "Sports Champion",
        name_ar: "بطل رياضي",
        description: "Puts sports achievements first, ahead of work history.",
        description_ar: "يبرز الإنجازات الرياضية قبل الخبرات العملية.",
        category: TemplateCategory::Sports,
        colors: ColorScheme {
            primary: "#14532d",
            secondary: "#16a34a",
            accent: "#facc15",
        },
    },
    TemplateDescriptor {
        id: TemplateId::AthletePro,
        name: "Athlete Pro",
        name_ar: "رياضي محترف",
        description: "Achievement-led layout for players and athletes.",
        description_ar: "تصميم يقوده سجل الإنجازات للاعبين والرياضيين.",
        category: TemplateCategory::Sports,
        colors: ColorScheme {
            primary: "#7f1d1d",
            secondary: "#dc2626",
            accent: "#f97316",
        },
    },
    TemplateDescriptor {
        id: TemplateId::CoachElite,
        name: "Coach Elite",
        name_ar: "مدرب النخبة",
        description: "A formal layout for coaches and technical staff.",
        description_ar: "تصميم رسمي للمدربين والأجهزة الفنية.",
        category: TemplateCategory::Sports,
        colors: ColorScheme {
            primary: "#1e3a8a",
            secondary: "#3b82f6",
            accent: "#e5e7eb",
        },
    },
];

pub fn catalog() -> &'static [TemplateDescriptor] {
    &CATALOG
}
