use crate::core::distance::{haversine_distance, round_km};
use crate::models::{Opportunity, VolunteerProfile};

/// Weight of the skill-compatibility component in the final score
pub const SKILL_WEIGHT: f64 = 0.4;
/// Weight of the distance component in the final score
pub const DISTANCE_WEIGHT: f64 = 0.3;
/// Weight of the availability component in the final score
pub const AVAILABILITY_WEIGHT: f64 = 0.3;

/// Points lost per kilometer of separation; the distance component
/// reaches zero at 20 km.
pub const DISTANCE_PENALTY_PER_KM: f64 = 5.0;

/// Availability placeholder. Profiles carry no schedule yet, so every
/// volunteer is treated as always available.
pub const AVAILABILITY_SCORE: f64 = 100.0;

/// Composite score for a (volunteer, opportunity) pair.
///
/// `score` is the weighted combination of the sub-scores, rounded
/// half-away-from-zero to an integer in [0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    pub score: u8,
    pub skill_compatibility: u8,
    pub distance_km: f64,
    pub common_skills: Vec<String>,
}

/// Calculate the match score for a volunteer/opportunity pair.
///
/// Pure function of the pair; always returns a result. Components:
/// - skill compatibility: share of the opportunity's required skills the
///   volunteer has (exact case-sensitive match), 0 when nothing is required;
/// - distance: `max(0, 100 - km * 5)`;
/// - availability: constant [`AVAILABILITY_SCORE`].
///
/// The reported `skill_compatibility` percentage and 1-decimal
/// `distance_km` are rounded for display; the final score is computed
/// from the unrounded values.
pub fn calculate_match_score(
    volunteer: &VolunteerProfile,
    opportunity: &Opportunity,
) -> MatchScore {
    let common_skills: Vec<String> = volunteer
        .skills
        .iter()
        .filter(|skill| opportunity.required_skills.contains(skill))
        .cloned()
        .collect();

    let skill_compatibility = if opportunity.required_skills.is_empty() {
        0.0
    } else {
        common_skills.len() as f64 / opportunity.required_skills.len() as f64 * 100.0
    };

    let distance_km = haversine_distance(
        volunteer.latitude,
        volunteer.longitude,
        opportunity.latitude,
        opportunity.longitude,
    );
    let distance_score = (100.0 - distance_km * DISTANCE_PENALTY_PER_KM).max(0.0);

    let final_score = skill_compatibility * SKILL_WEIGHT
        + distance_score * DISTANCE_WEIGHT
        + AVAILABILITY_SCORE * AVAILABILITY_WEIGHT;

    MatchScore {
        score: final_score.round() as u8,
        skill_compatibility: skill_compatibility.round() as u8,
        distance_km: round_km(distance_km),
        common_skills,
    }
}
