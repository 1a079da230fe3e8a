//! Goal text preprocessing and keyword extraction
//!
//! Bag-of-words heuristics only: normalization, stop-word filtering,
//! fixed educational phrase spotting, and a naive suffix stemmer.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Function words and IEP boilerplate ignored during keyword extraction
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
        "it", "its", "of", "on", "that", "the", "to", "was", "will", "with", "when", "given",
        "student", "year", "iep", "end", "across", "consecutive", "trials", "assessments",
        "weekly", "monthly", "daily",
    ]
    .into_iter()
    .collect()
});

/// Multi-word (and a few single-word) academic phrases kept as whole keywords
pub const EDUCATIONAL_PHRASES: [&str; 18] = [
    "reading comprehension",
    "word problems",
    "fine motor",
    "gross motor",
    "social skills",
    "communication skills",
    "behavior management",
    "phonics",
    "fluency",
    "vocabulary",
    "multiplication",
    "division",
    "fractions",
    "problem solving",
    "critical thinking",
    "oral expression",
    "written expression",
    "listening comprehension",
];

/// Suffixes stripped by [`word_root`], checked in this order
const STEM_SUFFIXES: [&str; 6] = ["ing", "ed", "s", "ly", "tion", "ness"];

/// Goal text in the forms the scorers need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalText {
    /// Lowercased input with punctuation intact
    pub lowered: String,
    /// Lowercased, punctuation-free, single-spaced text
    pub normalized: String,
    /// Extracted keywords; filtered words first, then spotted phrases
    pub keywords: Vec<String>,
}

impl GoalText {
    pub fn new(goal_text: &str) -> Self {
        let normalized = preprocess_goal_text(goal_text);
        let keywords = extract_keywords(&normalized);
        Self {
            lowered: goal_text.to_lowercase(),
            normalized,
            keywords,
        }
    }

    /// Whether any marker appears in the normalized or lowered text
    pub fn mentions_any(&self, markers: &[&str]) -> bool {
        markers
            .iter()
            .any(|marker| self.normalized.contains(marker) || self.lowered.contains(marker))
    }
}

/// Lowercase, replace punctuation with spaces, collapse whitespace, trim
///
/// Anything other than ASCII letters, digits, `_`, and whitespace counts
/// as punctuation.
pub fn preprocess_goal_text(goal_text: &str) -> String {
    let cleaned: String = goal_text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract keywords from normalized goal text
///
/// Words longer than two characters that are not stop words, followed by
/// every occurrence of each educational phrase. Duplicates are kept.
pub fn extract_keywords(normalized: &str) -> Vec<String> {
    let mut keywords: Vec<String> = normalized
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect();

    keywords.extend(extract_educational_phrases(normalized));
    keywords
}

/// One entry per non-overlapping phrase occurrence, in phrase-list order
pub fn extract_educational_phrases(normalized: &str) -> Vec<String> {
    let lowered = normalized.to_lowercase();
    EDUCATIONAL_PHRASES
        .iter()
        .flat_map(|phrase| lowered.matches(phrase).map(str::to_string))
        .collect()
}

/// Strip the first matching suffix from [`STEM_SUFFIXES`], once
pub fn word_root(word: &str) -> &str {
    STEM_SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .unwrap_or(word)
}

/// Fuzzy keyword equivalence: exact, substring either way, or same root
pub fn is_keyword_match(goal_keyword: &str, standard_keyword: &str) -> bool {
    if goal_keyword == standard_keyword {
        return true;
    }

    if goal_keyword.contains(standard_keyword) || standard_keyword.contains(goal_keyword) {
        return true;
    }

    word_root(goal_keyword) == word_root(standard_keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess() {
        assert_eq!(
            preprocess_goal_text("  Student will READ, with 80% accuracy!\n\tBy May. "),
            "student will read with 80 accuracy by may"
        );
        assert_eq!(preprocess_goal_text("two-step snake_case"), "two step snake_case");
        assert_eq!(preprocess_goal_text("café"), "caf");
        assert_eq!(preprocess_goal_text("   "), "");
    }

    #[test]
    fn test_stop_words_and_short_tokens_dropped() {
        let keywords = extract_keywords("the student will add up to 20 by the end of the year");
        assert_eq!(keywords, vec!["add"]);
    }

    #[test]
    fn test_phrases_appended_after_words() {
        let keywords = extract_keywords("improve reading comprehension and fluency");
        assert_eq!(
            keywords,
            vec![
                "improve",
                "reading",
                "comprehension",
                "fluency",
                "reading comprehension",
                "fluency"
            ]
        );
    }

    #[test]
    fn test_phrase_occurrences_counted() {
        let phrases = extract_educational_phrases("word problems then more word problems");
        assert_eq!(phrases, vec!["word problems", "word problems"]);
    }

    #[test]
    fn test_word_root_first_suffix_only() {
        assert_eq!(word_root("counting"), "count");
        assert_eq!(word_root("added"), "add");
        assert_eq!(word_root("letters"), "letter");
        assert_eq!(word_root("quickly"), "quick");
        assert_eq!(word_root("addition"), "addi");
        assert_eq!(word_root("kindness"), "kindnes");
        assert_eq!(word_root("count"), "count");
        // Only one suffix is stripped
        assert_eq!(word_root("questions"), "question");
    }

    #[test]
    fn test_keyword_match_rules() {
        assert!(is_keyword_match("counting", "count"));
        assert!(is_keyword_match("count", "counting"));
        assert!(is_keyword_match("word", "word problems"));
        assert!(is_keyword_match("phonics", "phonics"));
        assert!(is_keyword_match("measured", "measuring"));
        assert!(!is_keyword_match("solve", "addition"));
    }

    #[test]
    fn test_goal_text_markers() {
        let goal = GoalText::new("Solve 8 problems with 80% Accuracy By The End of May");
        assert!(goal.mentions_any(&["%"]));
        assert!(goal.mentions_any(&["accuracy"]));
        assert!(goal.mentions_any(&["by the end"]));
        assert!(!goal.mentions_any(&["within"]));
    }
}
