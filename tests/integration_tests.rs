// Integration tests: repository snapshots flowing through the engine

use causa_match::core::{
    discover_opportunities, paginate, rank_opportunities, DiscoveryFilters, GeoFilter,
};
use causa_match::services::{
    InMemoryStore, NewOpportunity, NewOrganization, NewVolunteer, Repository, RepositoryError,
};

fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();

    // Two organizations in São Paulo
    let kitchen = store.insert_organization(NewOrganization {
        user_id: 1,
        name: "Cozinha Comunitária".to_string(),
        description: "Community kitchen".to_string(),
        address: "Rua A, 1".to_string(),
        latitude: -23.5505,
        longitude: -46.6333,
        phone: String::new(),
        website: None,
    });
    let school = store.insert_organization(NewOrganization {
        user_id: 2,
        name: "Escola Aberta".to_string(),
        description: "Tutoring center".to_string(),
        address: "Rua B, 2".to_string(),
        latitude: -23.56,
        longitude: -46.64,
        phone: String::new(),
        website: None,
    });

    store
        .insert_opportunity(NewOpportunity {
            organization_id: kitchen.id,
            title: "Cook meals".to_string(),
            description: "Prepare lunch for 100 people".to_string(),
            required_skills: vec!["cooking".to_string(), "logistics".to_string()],
            location: "Centro".to_string(),
            latitude: None,
            longitude: None,
            vacancies: Some(5),
        })
        .expect("kitchen exists");
    store
        .insert_opportunity(NewOpportunity {
            organization_id: school.id,
            title: "Math tutoring".to_string(),
            description: "Weekly tutoring sessions".to_string(),
            required_skills: vec!["teaching".to_string()],
            location: "Bela Vista".to_string(),
            latitude: None,
            longitude: None,
            vacancies: Some(2),
        })
        .expect("school exists");

    store.insert_volunteer(NewVolunteer {
        user_id: 10,
        skills: vec!["cooking".to_string(), "teaching".to_string()],
        latitude: -23.5505,
        longitude: -46.6333,
        bio: String::new(),
        phone: String::new(),
    });

    store
}

#[test]
fn test_end_to_end_ranking() {
    let store = seeded_store();
    let volunteer = store.volunteer_by_user(10).expect("profile exists");
    let snapshot = store.active_opportunities();

    let ranked = rank_opportunities(&volunteer, &snapshot, |id| store.organization_name(id));

    assert_eq!(ranked.total_matches, 2);

    // Both nearby with partial/full skill overlap; sorted best first
    for pair in ranked.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    for m in &ranked.matches {
        assert!(m.match_score > 30);
        assert_ne!(m.organization, "unknown");
    }
}

#[test]
fn test_end_to_end_discovery_with_pagination() {
    let store = seeded_store();
    let snapshot = store.active_opportunities();

    let filters = DiscoveryFilters {
        skills: Some(vec!["cooking".to_string()]),
        geo: Some(GeoFilter::new(-23.5505, -46.6333, None)),
    };
    let discovered = discover_opportunities(&snapshot, &filters, |id| store.organization_name(id));
    let page = paginate(discovered, None, None);

    assert_eq!(page.pagination.total_items, 1);
    assert_eq!(page.pagination.total_pages, 1);
    assert_eq!(page.items[0].opportunity.title, "Cook meals");
    assert_eq!(page.items[0].organization_name, "Cozinha Comunitária");
    assert_eq!(page.items[0].distance_km, Some(0.0));
}

#[test]
fn test_discovery_without_geo_has_no_distance_annotation() {
    let store = seeded_store();
    let snapshot = store.active_opportunities();

    let discovered =
        discover_opportunities(&snapshot, &DiscoveryFilters::default(), |id| {
            store.organization_name(id)
        });

    assert_eq!(discovered.len(), 2);
    assert!(discovered.iter().all(|d| d.distance_km.is_none()));
}

#[test]
fn test_application_flow() {
    let store = seeded_store();
    let volunteer = store.volunteer_by_user(10).expect("profile exists");
    let snapshot = store.active_opportunities();
    let target = &snapshot[0];

    let application = store
        .insert_application(target.id, volunteer.id, "I'd love to help".to_string())
        .expect("first application succeeds");
    assert_eq!(application.opportunity_id, target.id);

    let duplicate = store.insert_application(target.id, volunteer.id, String::new());
    assert!(matches!(duplicate, Err(RepositoryError::Duplicate(_))));

    let mine = store.applications_by_volunteer(volunteer.id);
    assert_eq!(mine.len(), 1);
}

#[test]
fn test_rank_then_paginate() {
    let store = InMemoryStore::new();
    let org = store.insert_organization(NewOrganization {
        user_id: 1,
        name: "Org".to_string(),
        description: String::new(),
        address: String::new(),
        latitude: 0.0,
        longitude: 0.0,
        phone: String::new(),
        website: None,
    });

    for i in 0..45 {
        store
            .insert_opportunity(NewOpportunity {
                organization_id: org.id,
                title: format!("Opportunity {}", i),
                description: "Help".to_string(),
                required_skills: vec!["a".to_string()],
                location: String::new(),
                latitude: Some(0.0),
                longitude: Some(0.001 * i as f64),
                vacancies: None,
            })
            .expect("org exists");
    }

    let volunteer = store.insert_volunteer(NewVolunteer {
        user_id: 10,
        skills: vec!["a".to_string()],
        latitude: 0.0,
        longitude: 0.0,
        bio: String::new(),
        phone: String::new(),
    });

    let ranked = rank_opportunities(&volunteer, &store.active_opportunities(), |id| {
        store.organization_name(id)
    });
    assert_eq!(ranked.total_matches, 45);

    let page3 = paginate(ranked.matches, Some(3), Some(20));
    assert_eq!(page3.items.len(), 5);
    assert_eq!(page3.pagination.total_pages, 3);
}
