// =====================================================
// FILE: tests/content_tests.rs - CONTENT CATALOGUE
// =====================================================

use luvy_site::content::{ContentStore, RoadmapStatus, TeamMember};
use luvy_site::{AppError, Locale};

fn store() -> ContentStore {
    ContentStore::load().expect("embedded content parses")
}

#[test]
fn test_embedded_collections_load() {
    let store = store();
    assert_eq!(store.projects().len(), 4);
    assert_eq!(store.games().len(), 4);
    assert!(!store.faq().is_empty());
    assert!(!store.roadmap().is_empty());
    assert_eq!(store.team().len(), 1);
}

#[test]
fn test_lookup_by_slug() {
    let store = store();

    let project = store.project("luvy-platform").expect("known project");
    assert_eq!(project.name, "LUVY Platform");
    assert!(project.technologies.iter().any(|t| t == "Rust"));
    assert!(!project.short_description.get(Locale::De).is_empty());
    assert_ne!(
        project.short_description.get(Locale::De),
        project.short_description.get(Locale::En)
    );

    assert!(store.game("block-world").is_some());
    assert!(store.team_member("bjarne").is_some());
}

#[test]
fn test_unknown_records_are_none() {
    let store = store();
    assert!(store.project("does-not-exist").is_none());
    assert!(store.game("").is_none());
    assert!(store.team_member("nobody").is_none());
}

#[test]
fn test_roadmap_status_mapping() {
    let store = store();
    assert!(store
        .roadmap()
        .iter()
        .any(|item| item.status == RoadmapStatus::ThesisFocus));

    assert_eq!(RoadmapStatus::InProgress.label_key(), "roadmap.status.inProgress");
    assert_eq!(RoadmapStatus::Completed.css_class(), "status-completed");

    let parsed: RoadmapStatus = serde_json::from_str("\"In Progress\"").expect("status parses");
    assert_eq!(parsed, RoadmapStatus::InProgress);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let member: TeamMember = serde_json::from_str(
        r#"{
            "id": "twin",
            "name": "Twin",
            "role": { "de": "Rolle", "en": "Role" },
            "bio": { "de": "Bio", "en": "Bio" }
        }"#,
    )
    .expect("member parses");

    let result = ContentStore::new(vec![], vec![], vec![], vec![], vec![member.clone(), member]);
    match result {
        Err(AppError::Content(err)) => assert!(err.to_string().contains("twin")),
        other => panic!("expected duplicate id error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_records_serialize_camel_case() {
    let store = store();
    let json = serde_json::to_value(store.project("luvy-platform")).expect("serializes");
    assert!(json.get("shortDescription").is_some());
    assert!(json.get("short_description").is_none());
}
