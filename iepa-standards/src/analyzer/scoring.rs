//! Per-standard alignment scoring
//!
//! Four independent signals, each in [0.0, 1.0], combined by fixed weights:
//!
//! | Signal              | Weight | Source                                  |
//! |---------------------|--------|-----------------------------------------|
//! | Keyword match       | 0.4    | Goal keywords vs standard keywords      |
//! | Semantic similarity | 0.3    | Jaccard over goal and description words |
//! | Domain relevance    | 0.2    | Domain keyword table hits in the goal   |
//! | Action alignment    | 0.1    | Shared instructional verbs              |

use std::collections::HashSet;

use super::text::{is_keyword_match, GoalText};
use crate::models::{Domain, Standard, StandardMatch};

/// Instructional verbs compared between goal and standard description
pub const ACTION_VERBS: [&str; 18] = [
    "identify",
    "describe",
    "explain",
    "analyze",
    "compare",
    "contrast",
    "solve",
    "calculate",
    "measure",
    "count",
    "read",
    "write",
    "demonstrate",
    "use",
    "apply",
    "create",
    "construct",
    "design",
];

/// Component scores above this are listed as strong factors in reasoning
const STRONG_FACTOR_THRESHOLD: f64 = 0.3;

/// Number of matched keywords quoted in reasoning
const REASONING_KEYWORD_LIMIT: usize = 3;

/// Signal weights (sum to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub keyword_match: f64,
    pub semantic_similarity: f64,
    pub domain_relevance: f64,
    pub action_alignment: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_match: 0.4,
            semantic_similarity: 0.3,
            domain_relevance: 0.2,
            action_alignment: 0.1,
        }
    }
}

/// Named contributor to an alignment, quoted in reasoning text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentFactor {
    KeywordMatch,
    SemanticSimilarity,
    DomainRelevance,
    ActionAlignment,
}

impl AlignmentFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignmentFactor::KeywordMatch => "keyword match",
            AlignmentFactor::SemanticSimilarity => "semantic similarity",
            AlignmentFactor::DomainRelevance => "domain relevance",
            AlignmentFactor::ActionAlignment => "action alignment",
        }
    }
}

/// Raw component scores for one goal/standard pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ComponentScores {
    pub keyword_match: f64,
    pub semantic_similarity: f64,
    pub domain_relevance: f64,
    pub action_alignment: f64,
}

impl ComponentScores {
    /// Weighted sum, capped at 1.0
    pub fn combined(&self, weights: &ScoringWeights) -> f64 {
        let total = self.keyword_match * weights.keyword_match
            + self.semantic_similarity * weights.semantic_similarity
            + self.domain_relevance * weights.domain_relevance
            + self.action_alignment * weights.action_alignment;
        total.min(1.0)
    }

    /// Factors worth naming, in fixed order
    ///
    /// Any keyword hit counts; the other signals must exceed 0.3.
    pub fn strong_factors(&self) -> Vec<AlignmentFactor> {
        let mut factors = Vec::new();
        if self.keyword_match > 0.0 {
            factors.push(AlignmentFactor::KeywordMatch);
        }
        if self.semantic_similarity > STRONG_FACTOR_THRESHOLD {
            factors.push(AlignmentFactor::SemanticSimilarity);
        }
        if self.domain_relevance > STRONG_FACTOR_THRESHOLD {
            factors.push(AlignmentFactor::DomainRelevance);
        }
        if self.action_alignment > STRONG_FACTOR_THRESHOLD {
            factors.push(AlignmentFactor::ActionAlignment);
        }
        factors
    }
}

/// Score one standard against a preprocessed goal
pub fn score_standard<'a>(
    goal: &GoalText,
    standard: &'a Standard,
    weights: &ScoringWeights,
) -> StandardMatch<'a> {
    let (keyword_match, matched_keywords) = keyword_match(&goal.keywords, standard);
    let scores = ComponentScores {
        keyword_match,
        semantic_similarity: semantic_similarity(&goal.normalized, &standard.description),
        domain_relevance: domain_relevance(&goal.normalized, &standard.domain),
        action_alignment: action_alignment(&goal.normalized, &standard.description),
    };
    let score = scores.combined(weights);

    tracing::trace!(
        code = %standard.code,
        score,
        keyword = scores.keyword_match,
        semantic = scores.semantic_similarity,
        domain = scores.domain_relevance,
        action = scores.action_alignment,
        "Scored standard"
    );

    let reasoning = build_reasoning(&standard.code, &matched_keywords, &scores, score);

    StandardMatch {
        standard,
        score,
        matched_keywords,
        reasoning,
    }
}

/// Fraction of keywords shared between goal and standard
///
/// Each goal keyword is credited at most once, against the first standard
/// keyword it matches. Returns the score and the matched standard keywords
/// in hit order (repeats possible when several goal keywords hit the same
/// standard keyword).
pub fn keyword_match<'a>(goal_keywords: &[String], standard: &'a Standard) -> (f64, Vec<&'a str>) {
    let matched: Vec<&'a str> = goal_keywords
        .iter()
        .filter_map(|goal_keyword| {
            standard
                .keywords
                .iter()
                .find(|standard_keyword| is_keyword_match(goal_keyword, standard_keyword))
                .map(String::as_str)
        })
        .collect();

    let denominator = goal_keywords.len().max(standard.keywords.len());
    let score = if denominator == 0 {
        0.0
    } else {
        matched.len() as f64 / denominator as f64
    };

    (score, matched)
}

/// Jaccard similarity of whitespace-delimited word sets
///
/// The description is only lowercased, so punctuation stays attached to
/// its words ("problems." never equals "problems").
pub fn semantic_similarity(normalized_goal: &str, description: &str) -> f64 {
    let description = description.to_lowercase();
    let goal_words: HashSet<&str> = normalized_goal.split_whitespace().collect();
    let standard_words: HashSet<&str> = description.split_whitespace().collect();

    let union = goal_words.union(&standard_words).count();
    if union == 0 {
        return 0.0;
    }

    goal_words.intersection(&standard_words).count() as f64 / union as f64
}

/// Fraction of the domain's representative keywords present in the goal
pub fn domain_relevance(normalized_goal: &str, domain: &Domain) -> f64 {
    let keywords = domain.representative_keywords();
    let hits = keywords
        .iter()
        .filter(|keyword| normalized_goal.contains(*keyword))
        .count();

    hits as f64 / keywords.len().max(1) as f64
}

/// Overlap of instructional verbs between goal and description
pub fn action_alignment(normalized_goal: &str, description: &str) -> f64 {
    let description = description.to_lowercase();

    let mut goal_verbs = 0usize;
    let mut standard_verbs = 0usize;
    let mut shared = 0usize;
    for verb in ACTION_VERBS {
        let in_goal = normalized_goal.contains(verb);
        let in_standard = description.contains(verb);
        goal_verbs += usize::from(in_goal);
        standard_verbs += usize::from(in_standard);
        shared += usize::from(in_goal && in_standard);
    }

    if goal_verbs == 0 && standard_verbs == 0 {
        return 0.0;
    }

    shared as f64 / goal_verbs.max(standard_verbs) as f64
}

/// Human-readable explanation of one match
fn build_reasoning(
    code: &str,
    matched_keywords: &[&str],
    scores: &ComponentScores,
    score: f64,
) -> String {
    let mut reasoning = format!("This goal aligns with {}", code);

    if !matched_keywords.is_empty() {
        let quoted: Vec<&str> = matched_keywords
            .iter()
            .take(REASONING_KEYWORD_LIMIT)
            .copied()
            .collect();
        reasoning.push_str(" based on shared concepts: ");
        reasoning.push_str(&quoted.join(", "));
    }

    let factors = scores.strong_factors();
    if !factors.is_empty() {
        let names: Vec<&str> = factors.iter().map(AlignmentFactor::as_str).collect();
        reasoning.push_str(". Strong alignment factors: ");
        reasoning.push_str(&names.join(", "));
    }

    reasoning.push_str(match score {
        s if s >= 0.8 => ". Excellent alignment with high confidence.",
        s if s >= 0.6 => ". Good alignment with moderate confidence.",
        s if s >= 0.4 => ". Partial alignment - consider as supporting standard.",
        _ => ". Weak alignment - may be tangentially related.",
    });

    reasoning
}
