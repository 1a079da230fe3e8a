//! Goal-writing recommendations
//!
//! Fixed rule list evaluated in order; every applicable rule contributes
//! one sentence.

use super::text::GoalText;
use crate::models::{Domain, StandardMatch};

/// Markers of a measurable success criterion
const MEASUREMENT_MARKERS: [&str; 3] = ["%", "accuracy", "out of"];

/// Markers of a completion timeframe
const TIMEFRAME_MARKERS: [&str; 3] = ["by the end", "within", "iep year"];

/// Build recommendations for an analyzed goal
///
/// # Arguments
/// * `goal` - Preprocessed goal text
/// * `primary` - Primary-tier matches, best first
/// * `overall_score` - Overall alignment score (0-100)
pub fn generate_recommendations(
    goal: &GoalText,
    primary: &[StandardMatch<'_>],
    overall_score: f64,
) -> Vec<String> {
    let mut recommendations = vec![score_band_recommendation(overall_score).to_string()];

    if primary.is_empty() {
        recommendations.push(
            "Consider adding specific academic skills or learning objectives that align with grade-level standards."
                .to_string(),
        );
    }

    if !goal.mentions_any(&MEASUREMENT_MARKERS) {
        recommendations.push(
            "Add specific measurement criteria (e.g., \"with 80% accuracy\") to improve goal measurability."
                .to_string(),
        );
    }

    if !goal.mentions_any(&TIMEFRAME_MARKERS) {
        recommendations.push(
            "Include a specific timeframe (e.g., \"by the end of the IEP year\") for goal completion."
                .to_string(),
        );
    }

    if let Some(advice) = primary
        .first()
        .and_then(|top| domain_recommendation(&top.standard.domain))
    {
        recommendations.push(advice.to_string());
    }

    if primary.len() > 1 {
        recommendations.push(format!(
            "Goal effectively supports multiple standards ({} primary alignments) - excellent comprehensive approach.",
            primary.len()
        ));
    }

    recommendations
}

fn score_band_recommendation(overall_score: f64) -> &'static str {
    if overall_score >= 80.0 {
        "Excellent standards alignment! This goal strongly supports grade-level expectations."
    } else if overall_score >= 60.0 {
        "Good standards alignment with room for refinement to better target specific standards."
    } else if overall_score >= 40.0 {
        "Partial standards alignment. Consider revising to more directly address target standards."
    } else {
        "Limited standards alignment. Goal may need significant revision to meet educational standards."
    }
}

/// Domain-specific advice keyed on the top primary match
fn domain_recommendation(domain: &Domain) -> Option<&'static str> {
    match domain {
        Domain::ReadingLiterature | Domain::ReadingFoundationalSkills => Some(
            "Consider specifying the type and complexity of reading materials for grade-level appropriateness.",
        ),
        Domain::OperationsAndAlgebraicThinking => Some(
            "Ensure problem types and number ranges align with grade-level mathematical expectations.",
        ),
        Domain::Writing => Some(
            "Specify writing genres, length requirements, and quality criteria that match grade-level standards.",
        ),
        _ => None,
    }
}
