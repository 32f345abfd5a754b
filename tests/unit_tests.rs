// Unit tests for the Causa Match engine

use causa_match::core::{
    discover_opportunities, paginate, rank_opportunities,
    distance::haversine_distance,
    scoring::calculate_match_score,
    DiscoveryFilters, GeoFilter,
};
use causa_match::models::{Opportunity, OpportunityStatus, VolunteerProfile};
use chrono::Utc;

fn volunteer(skills: &[&str], lat: f64, lon: f64) -> VolunteerProfile {
    VolunteerProfile {
        id: 1,
        user_id: 1,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        latitude: lat,
        longitude: lon,
        bio: String::new(),
        phone: String::new(),
    }
}

fn opportunity(id: u64, required: &[&str], lat: f64, lon: f64) -> Opportunity {
    Opportunity {
        id,
        organization_id: 1,
        title: format!("Opportunity {}", id),
        description: "Help out".to_string(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        location: "Centro".to_string(),
        latitude: lat,
        longitude: lon,
        vacancies: 2,
        status: OpportunityStatus::Active,
        created_at: Utc::now(),
    }
}

fn resolve(_: u64) -> Option<String> {
    Some("Instituto Esperança".to_string())
}

#[test]
fn test_distance_is_zero_for_identical_points() {
    for (lat, lon) in [(0.0, 0.0), (-23.5505, -46.6333), (89.9, 179.9)] {
        assert_eq!(haversine_distance(lat, lon, lat, lon), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [
        ((-23.5505, -46.6333), (-22.9068, -43.1729)),
        ((0.0, 0.0), (0.0, 0.09)),
        ((51.5074, -0.1278), (48.8566, 2.3522)),
    ];
    for ((lat1, lon1), (lat2, lon2)) in pairs {
        let forward = haversine_distance(lat1, lon1, lat2, lon2);
        let backward = haversine_distance(lat2, lon2, lat1, lon1);
        assert!((forward - backward).abs() < 1e-9);
    }
}

#[test]
fn test_score_always_within_bounds() {
    let volunteers = [
        volunteer(&[], 0.0, 0.0),
        volunteer(&["a"], -23.55, -46.63),
        volunteer(&["a", "b", "c"], 89.0, 179.0),
    ];
    let opportunities = [
        opportunity(1, &[], 0.0, 0.0),
        opportunity(2, &["a", "b"], -23.55, -46.63),
        opportunity(3, &["x"], -89.0, -179.0),
    ];

    for v in &volunteers {
        for op in &opportunities {
            let result = calculate_match_score(v, op);
            assert!(result.score <= 100);
            assert!(result.skill_compatibility <= 100);
            assert!(result.distance_km >= 0.0);
        }
    }
}

#[test]
fn test_empty_required_skills_gives_zero_compatibility() {
    let result = calculate_match_score(&volunteer(&["a"], 0.0, 0.0), &opportunity(1, &[], 0.0, 0.0));
    assert_eq!(result.skill_compatibility, 0);
}

#[test]
fn test_common_skills_is_the_intersection() {
    let result = calculate_match_score(
        &volunteer(&["a", "b", "z"], 0.0, 0.0),
        &opportunity(1, &["b", "c", "a"], 0.0, 0.0),
    );

    assert_eq!(result.common_skills, vec!["a", "b"]);
    for skill in &result.common_skills {
        assert!(["a", "b", "z"].contains(&skill.as_str()));
        assert!(["b", "c", "a"].contains(&skill.as_str()));
    }
}

#[test]
fn test_reference_scoring_scenario() {
    // Volunteer at (0,0) with {a,b}; opportunity ~10 km east requiring {a,b,c}.
    // skill 66.67 -> 67 reported; distance score ~50; availability 100; final 72.
    let result = calculate_match_score(
        &volunteer(&["a", "b"], 0.0, 0.0),
        &opportunity(1, &["a", "b", "c"], 0.0, 0.09),
    );

    assert_eq!(result.score, 72);
    assert_eq!(result.skill_compatibility, 67);
    assert_eq!(result.distance_km, 10.0);
    assert_eq!(result.common_skills, vec!["a", "b"]);
}

#[test]
fn test_ranking_sorted_and_thresholded() {
    let ops = vec![
        opportunity(1, &["a", "b", "c", "d"], 0.0, 0.0),
        opportunity(2, &["a"], 0.0, 0.0),
        opportunity(3, &["x", "y"], 50.0, 50.0), // no skills, far away
    ];

    let ranked = rank_opportunities(&volunteer(&["a"], 0.0, 0.0), &ops, resolve);

    for pair in ranked.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    for m in &ranked.matches {
        assert!(m.match_score > 30);
    }
    // The distant skill-less opportunity scores exactly 30 and is excluded
    assert!(ranked.matches.iter().all(|m| m.id != 3));
}

#[test]
fn test_ranking_is_idempotent() {
    let ops: Vec<Opportunity> = (1..=30)
        .map(|i| opportunity(i, &["a", "b"], 0.002 * i as f64, 0.0))
        .collect();
    let vol = volunteer(&["a", "b"], 0.0, 0.0);

    let first: Vec<(u64, u8)> = rank_opportunities(&vol, &ops, resolve)
        .matches
        .iter()
        .map(|m| (m.id, m.match_score))
        .collect();
    let second: Vec<(u64, u8)> = rank_opportunities(&vol, &ops, resolve)
        .matches
        .iter()
        .map(|m| (m.id, m.match_score))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_discovery_skill_filter() {
    let ops = vec![
        opportunity(1, &["teaching", "logistics"], 0.0, 0.0),
        opportunity(2, &["logistics"], 0.0, 0.0),
    ];
    let filters = DiscoveryFilters {
        skills: Some(vec!["teaching".to_string()]),
        geo: None,
    };

    let result = discover_opportunities(&ops, &filters, resolve);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].opportunity.id, 1);
}

#[test]
fn test_discovery_radius_filter_annotates_distance() {
    let ops = vec![
        opportunity(1, &[], 0.0, 0.05),
        opportunity(2, &[], 0.0, 2.0),
    ];
    let filters = DiscoveryFilters {
        skills: None,
        geo: Some(GeoFilter::new(0.0, 0.0, Some(10.0))),
    };

    let result = discover_opportunities(&ops, &filters, resolve);

    assert_eq!(result.len(), 1);
    assert!(result[0].distance_km.is_some());
}

#[test]
fn test_pagination_grid_for_45_items() {
    let items: Vec<u32> = (0..45).collect();

    for (page, expected_len) in [(1, 20), (2, 20), (3, 5), (4, 0)] {
        let result = paginate(items.clone(), Some(page), Some(20));
        assert_eq!(result.items.len(), expected_len, "page {}", page);
        assert_eq!(result.pagination.total_pages, 3);
        assert_eq!(result.pagination.total_items, 45);
    }
}

#[test]
fn test_pagination_empty_convention() {
    let result = paginate(Vec::<u32>::new(), Some(1), Some(20));
    assert_eq!(result.pagination.total_pages, 0);
    assert!(result.items.is_empty());
}
