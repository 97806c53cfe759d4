//! Layout strategies. They differ only in arrangement: which column a block
//! lands in, block order, and presentational flags.

use serde::Serialize;

use crate::templates::render::{Block, SectionBlocks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutStrategy {
    /// Single column, traditional section order.
    Classic,
    /// Sidebar (skills, languages) + main column.
    Modern,
    /// Sidebar + main column with achievements promoted above work history.
    Sports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillStyle {
    List,
    Tags,
    Badges,
}

impl LayoutStrategy {
    pub fn skill_style(self) -> SkillStyle {
        match self {
            LayoutStrategy::Classic => SkillStyle::List,
            LayoutStrategy::Modern => SkillStyle::Tags,
            LayoutStrategy::Sports => SkillStyle::Badges,
        }
    }

    pub fn highlights_achievements(self) -> bool {
        matches!(self, LayoutStrategy::Sports)
    }

    /// Splits blocks into `(sidebar, main)`. Omitted sections stay omitted.
    pub(crate) fn arrange(self, blocks: SectionBlocks) -> (Vec<Block>, Vec<Block>) {
        let SectionBlocks {
            summary,
            experience,
            education,
            skills,
            languages,
            achievements,
        } = blocks;

        let (sidebar, main) = match self {
            LayoutStrategy::Classic => (
                vec![],
                vec![summary, experience, education, skills, languages, achievements],
            ),
            LayoutStrategy::Modern => (
                vec![skills, languages],
                vec![summary, experience, education, achievements],
            ),
            LayoutStrategy::Sports => (
                vec![skills, languages],
                vec![summary, achievements, experience, education],
            ),
        };

        (
            sidebar.into_iter().flatten().collect(),
            main.into_iter().flatten().collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Block {
        Block::Summary {
            title: "Summary".to_string(),
            text: "Text".to_string(),
        }
    }

    fn achievements() -> Block {
        Block::Achievements {
            title: "Achievements".to_string(),
            highlighted: true,
            items: vec![],
        }
    }

    fn skills() -> Block {
        Block::Skills {
            title: "Skills".to_string(),
            style: SkillStyle::Badges,
            items: vec!["Speed".to_string()],
        }
    }

    fn blocks() -> SectionBlocks {
        SectionBlocks {
            summary: Some(summary()),
            experience: None,
            education: None,
            skills: Some(skills()),
            languages: None,
            achievements: Some(achievements()),
        }
    }

    #[test]
    fn test_classic_is_single_column() {
        let (sidebar, main) = LayoutStrategy::Classic.arrange(blocks());
        assert!(sidebar.is_empty());
        assert_eq!(main.len(), 3);
    }

    #[test]
    fn test_sports_promotes_achievements_after_summary() {
        let (sidebar, main) = LayoutStrategy::Sports.arrange(blocks());
        assert_eq!(sidebar, vec![skills()]);
        assert_eq!(main, vec![summary(), achievements()]);
    }

    #[test]
    fn test_modern_moves_skills_to_sidebar() {
        let (sidebar, main) = LayoutStrategy::Modern.arrange(blocks());
        assert_eq!(sidebar.len(), 1);
        assert_eq!(main.len(), 2);
        assert!(main.last().is_some_and(Block::is_achievements));
    }
}
