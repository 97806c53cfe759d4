// Document Model: the canonical in-memory résumé assembled by a builder session.
// Whole-section replacement (`Document::set_section`) is the only write path.

pub mod model;
pub mod section;
pub mod skills;

pub use model::{
    Achievement, Document, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
};
pub use section::{SectionKind, SectionValue};
pub use skills::SkillSet;
