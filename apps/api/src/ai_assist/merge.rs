use crate::document::SkillSet;

/// Splits a generated skills list on commas (Latin or Arabic) and newlines,
/// dropping list markers and blanks.
pub fn split_suggestions(text: &str) -> Vec<String> {
    text.split([',', '،', '\n'])
        .map(|s| s.trim().trim_start_matches(['-', '•', '*']).trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Adds suggested skills to a copy of `existing`. Suggestions already present,
/// and repeats inside the suggestion itself, are skipped.
pub fn merge_skill_suggestions(existing: &SkillSet, suggestions: &str) -> SkillSet {
    let mut merged = existing.clone();
    for skill in split_suggestions(suggestions) {
        merged.insert(&skill);
    }
    merged
}
