use serde::{Deserialize, Serialize};

/// Ordered set of skills. Insertion order is display order.
///
/// Entries are stored trimmed; blank entries and exact (case-sensitive) duplicates
/// are rejected. Deserialization goes through the same rules, so a wire payload
/// with duplicates collapses to one occurrence each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trimmed skill. Returns `false` when it was blank or already present.
    pub fn insert(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.0.push(skill.to_string());
        true
    }

    pub fn contains(&self, skill: &str) -> bool {
        let skill = skill.trim();
        self.0.iter().any(|s| s == skill)
    }

    /// Stable removal: the remaining skills keep their relative order.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        let mut set = SkillSet::new();
        for skill in &skills {
            set.insert(skill);
        }
        set
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.0
    }
}
