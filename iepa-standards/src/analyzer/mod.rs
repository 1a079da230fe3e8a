//! Goal Alignment Analyzer
//!
//! Scores an IEP goal against catalog standards and classifies matches into
//! primary and secondary tiers.
//!
//! **Pipeline:**
//! 1. Preprocess goal text and extract keywords
//! 2. Retrieve candidates by state, subject, and grade
//! 3. Score every candidate, drop scores at or below the floor
//! 4. Rank, tier, and summarize (overall score, confidence, recommendations)
//!
//! Analysis is pure: the analyzer only borrows the catalog, so any number of
//! threads may analyze concurrently against one catalog.

pub mod recommendations;
pub mod scoring;
pub mod text;

pub use recommendations::generate_recommendations;
pub use scoring::{score_standard, AlignmentFactor, ComponentScores, ScoringWeights};
pub use text::{extract_keywords, preprocess_goal_text, GoalText};

use iepa_common::{Error, Result};
use tracing::debug;

use crate::catalog::StandardsCatalog;
use crate::models::{AlignmentRequest, AlignmentResult, StandardMatch};

/// Candidates at or below this score are discarded
pub const CANDIDATE_FLOOR: f64 = 0.2;

/// Minimum score for the primary tier
pub const PRIMARY_THRESHOLD: f64 = 0.7;

/// Minimum score for the secondary tier
pub const SECONDARY_THRESHOLD: f64 = 0.4;

/// Primary tier size limit
pub const MAX_PRIMARY: usize = 5;

/// Secondary tier size limit
pub const MAX_SECONDARY: usize = 3;

/// Overall score weight of the primary tier average
const PRIMARY_TIER_WEIGHT: f64 = 0.8;

/// Overall score weight of the secondary tier average
const SECONDARY_TIER_WEIGHT: f64 = 0.2;

/// Goal alignment analyzer over a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct GoalAlignmentAnalyzer<'c> {
    catalog: &'c StandardsCatalog,
    weights: ScoringWeights,
}

impl<'c> GoalAlignmentAnalyzer<'c> {
    pub fn new(catalog: &'c StandardsCatalog) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
        }
    }

    pub fn catalog(&self) -> &'c StandardsCatalog {
        self.catalog
    }

    /// Analyze how well a goal aligns with catalog standards
    ///
    /// # Arguments
    /// * `goal_text` - Free-form goal text; empty text yields an empty report
    /// * `state` - "national" or a state name
    /// * `subject` - "all" or an exact subject tag
    /// * `grade_level` - Optional grade filter
    ///
    /// # Returns
    /// Ranked report borrowing standards from the catalog
    pub fn analyze_goal_alignment(
        &self,
        goal_text: &str,
        state: &str,
        subject: &str,
        grade_level: Option<&str>,
    ) -> AlignmentResult<'c> {
        let goal = GoalText::new(goal_text);
        let candidates = self
            .catalog
            .get_relevant_standards(state, subject, grade_level);
        let candidate_count = candidates.len();

        let mut matches: Vec<StandardMatch<'c>> = candidates
            .into_iter()
            .map(|standard| score_standard(&goal, standard, &self.weights))
            .filter(|m| m.score > CANDIDATE_FLOOR)
            .collect();

        // Stable: ties keep catalog order
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));

        let (primary_standards, secondary_standards) = split_tiers(matches);
        let overall_score = overall_score(&primary_standards, &secondary_standards);
        let confidence = confidence(&primary_standards, goal.keywords.len());
        let recommendations = generate_recommendations(&goal, &primary_standards, overall_score);

        let top_score = primary_standards
            .first()
            .or_else(|| secondary_standards.first())
            .map(|m| m.score);
        debug!(
            state,
            subject,
            grade = ?grade_level,
            keywords = goal.keywords.len(),
            candidates = candidate_count,
            primary = primary_standards.len(),
            secondary = secondary_standards.len(),
            top_score = ?top_score,
            overall_score,
            "Analyzed goal alignment"
        );

        AlignmentResult {
            primary_standards,
            secondary_standards,
            overall_score,
            recommendations,
            confidence,
        }
    }

    /// Analyze a deserialized request
    pub fn analyze(&self, request: &AlignmentRequest) -> AlignmentResult<'c> {
        self.analyze_goal_alignment(
            &request.goal_text,
            &request.state,
            &request.subject,
            request.grade_level.as_deref(),
        )
    }
}

/// Reject goal text with no content
///
/// # Errors
/// `Error::InvalidInput` for empty or whitespace-only text
pub fn validate_goal_text(goal_text: &str) -> Result<()> {
    if goal_text.trim().is_empty() {
        return Err(Error::InvalidInput("goal text is empty".to_string()));
    }
    Ok(())
}

/// Partition ranked matches into capped primary and secondary tiers
fn split_tiers(
    ranked: Vec<StandardMatch<'_>>,
) -> (Vec<StandardMatch<'_>>, Vec<StandardMatch<'_>>) {
    let mut primary = Vec::new();
    let mut secondary = Vec::new();

    for candidate in ranked {
        if candidate.score >= PRIMARY_THRESHOLD {
            if primary.len() < MAX_PRIMARY {
                primary.push(candidate);
            }
        } else if candidate.score >= SECONDARY_THRESHOLD && secondary.len() < MAX_SECONDARY {
            secondary.push(candidate);
        }
    }

    (primary, secondary)
}

fn average_score(matches: &[StandardMatch<'_>]) -> f64 {
    if matches.is_empty() {
        return 0.0;
    }
    matches.iter().map(|m| m.score).sum::<f64>() / matches.len() as f64
}

/// Overall alignment strength (0-100); an empty tier averages 0
fn overall_score(primary: &[StandardMatch<'_>], secondary: &[StandardMatch<'_>]) -> f64 {
    if primary.is_empty() && secondary.is_empty() {
        return 0.0;
    }

    let weighted = average_score(primary) * PRIMARY_TIER_WEIGHT
        + average_score(secondary) * SECONDARY_TIER_WEIGHT;
    weighted * 100.0
}

/// Trust in the primary tier, blending its average with keyword coverage
fn confidence(primary: &[StandardMatch<'_>], keyword_count: usize) -> f64 {
    let Some(top) = primary.first() else {
        return 0.0;
    };

    let coverage = top.matched_keywords.len() as f64 / keyword_count.max(1) as f64;
    ((average_score(primary) + coverage) / 2.0).min(1.0)
}
