use super::*;
use content::endpoints::ResourceKind;
use content::memory::MemoryBackend;
use futures::executor::block_on;
use serde_json::json;

#[test]
fn counts_every_list() {
    let backend = MemoryBackend::new();
    backend.seed(ResourceKind::Project, json!({"title": "Depot"}));
    backend.seed(ResourceKind::Project, json!({"title": "Bridge"}));
    backend.seed(ResourceKind::Award, json!({"name": "Gold", "year": "2023"}));
    backend.seed(ResourceKind::CompanyStat, json!({"number": "250+", "label": "Projects"}));
    let gw = Gateway::new(backend);

    let counts = block_on(load_counts(&gw));
    assert_eq!(counts.projects, 2);
    assert_eq!(counts.awards, 1);
    assert_eq!(counts.stats, 1);
    assert_eq!(counts.services, 0);
    assert_eq!(gw.transport().request_count(), 9);
}

#[test]
fn offline_backend_counts_zero() {
    let backend = MemoryBackend::new();
    backend.set_offline(true);
    let counts = block_on(load_counts(&Gateway::new(backend)));
    assert_eq!(counts, DashboardCounts::default());
}

#[test]
fn cards_link_to_admin_screens() {
    let counts = DashboardCounts { submissions: 4, ..DashboardCounts::default() };
    let cards = counts.cards();
    assert_eq!(cards[1], ("Contact Submissions", 4, "/admin/contactsubmissions"));
    assert!(cards.iter().all(|(_, _, path)| path.starts_with("/admin/")));
}
