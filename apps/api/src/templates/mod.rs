// Template Renderer: maps (TemplateId, Document) to a layout tree.
// Dispatch is over a closed enum; unknown ids resolve to the default template.

pub mod catalog;
pub mod layouts;
pub mod render;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use catalog::{catalog, TemplateDescriptor};
pub use layouts::LayoutStrategy;
pub use render::{render, RenderedCv};

/// The fixed set of CV templates. Discriminants index into `catalog::CATALOG`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateId {
    #[default]
    ProfessionalClassic = 0,
    ModernMinimal = 1,
    CreativeBold = 2,
    SportsChampion = 3,
    AthletePro = 4,
    CoachElite = 5,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::ProfessionalClassic,
        TemplateId::ModernMinimal,
        TemplateId::CreativeBold,
        TemplateId::SportsChampion,
        TemplateId::AthletePro,
        TemplateId::CoachElite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::ProfessionalClassic => "professional-classic",
            TemplateId::ModernMinimal => "modern-minimal",
            TemplateId::CreativeBold => "creative-bold",
            TemplateId::SportsChampion => "sports-champion",
            TemplateId::AthletePro => "athlete-pro",
            TemplateId::CoachElite => "coach-elite",
        }
    }

    /// Strict lookup; `None` for ids outside the catalog.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == id.trim())
    }

    /// Lenient lookup used everywhere a template is selected: missing or unknown
    /// ids take the explicit default arm.
    pub fn resolve(id: Option<&str>) -> Self {
        match id.and_then(Self::parse) {
            Some(template) => template,
            None => TemplateId::default(),
        }
    }

    pub fn strategy(self) -> LayoutStrategy {
        match self {
            TemplateId::ProfessionalClassic | TemplateId::CoachElite => LayoutStrategy::Classic,
            TemplateId::ModernMinimal | TemplateId::CreativeBold => LayoutStrategy::Modern,
            TemplateId::SportsChampion | TemplateId::AthletePro => LayoutStrategy::Sports,
        }
    }

    pub fn descriptor(self) -> &'static TemplateDescriptor {
        &catalog::CATALOG[self as usize]
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(TemplateId::resolve(raw.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_id() {
        for template in TemplateId::ALL {
            assert_eq!(TemplateId::parse(template.as_str()), Some(template));
        }
    }

    #[test]
    fn test_unknown_or_missing_id_resolves_to_default() {
        assert_eq!(TemplateId::resolve(Some("neon-vaporwave")), TemplateId::ProfessionalClassic);
        assert_eq!(TemplateId::resolve(None), TemplateId::ProfessionalClassic);
        assert_eq!(TemplateId::resolve(Some("")), TemplateId::ProfessionalClassic);
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let t: TemplateId = serde_json::from_str("\"sports-champion\"").unwrap();
        assert_eq!(t, TemplateId::SportsChampion);
        let t: TemplateId = serde_json::from_str("\"does-not-exist\"").unwrap();
        assert_eq!(t, TemplateId::default());
        let t: TemplateId = serde_json::from_str("null").unwrap();
        assert_eq!(t, TemplateId::default());
    }

    #[test]
    fn test_descriptor_matches_template() {
        for template in TemplateId::ALL {
            assert_eq!(template.descriptor().id, template);
        }
    }

    #[test]
    fn test_sports_templates_use_sports_layout() {
        assert_eq!(TemplateId::SportsChampion.strategy(), LayoutStrategy::Sports);
        assert_eq!(TemplateId::AthletePro.strategy(), LayoutStrategy::Sports);
        assert_eq!(TemplateId::default().strategy(), LayoutStrategy::Classic);
    }
}
