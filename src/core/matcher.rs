use crate::core::scoring::calculate_match_score;
use crate::models::{MatchDetails, Opportunity, OpportunityMatch, VolunteerProfile};

/// Matches at or below this score are dropped from ranked results
pub const MIN_MATCH_SCORE: u8 = 30;

/// Result of ranking the opportunity collection for one volunteer
#[derive(Debug, Clone)]
pub struct RankedMatches {
    pub matches: Vec<OpportunityMatch>,
    pub total_matches: usize,
}

/// Produce a personalized, score-sorted view of the opportunities.
///
/// Restricts to active opportunities, scores each against the volunteer,
/// sorts descending by score (stable, so collection order breaks ties)
/// and drops everything scoring [`MIN_MATCH_SCORE`] or lower. The caller
/// paginates if needed. Deterministic for unchanged inputs.
pub fn rank_opportunities<F>(
    volunteer: &VolunteerProfile,
    opportunities: &[Opportunity],
    resolve_org: F,
) -> RankedMatches
where
    F: Fn(u64) -> Option<String>,
{
    let mut matches: Vec<OpportunityMatch> = opportunities
        .iter()
        .filter(|op| op.is_active())
        .map(|op| {
            let score = calculate_match_score(volunteer, op);

            OpportunityMatch {
                id: op.id,
                title: op.title.clone(),
                description: op.description.clone(),
                match_score: score.score,
                match_details: MatchDetails {
                    skill_compatibility: score.skill_compatibility,
                    distance_km: score.distance_km,
                    common_skills: score.common_skills,
                },
                organization: resolve_org(op.organization_id)
                    .unwrap_or_else(|| "unknown".to_string()),
                location: op.location.clone(),
                vacancies: op.vacancies,
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep the collection order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.retain(|m| m.match_score > MIN_MATCH_SCORE);

    let total_matches = matches.len();
    RankedMatches {
        matches,
        total_matches,
    }
}
