use prd_core::{load_demo_data, PrdCategory, PrdManager, PrdStatus};

#[test]
fn empty_collection_statistics_are_zeroed() {
    let manager = PrdManager::in_memory();
    let stats = manager.statistics();

    assert_eq!(stats.total_prds, 0);
    assert_eq!(stats.average_completion, 0.0);
    assert!(stats.by_status.is_empty());
    assert!(stats.by_category.is_empty());
    assert!(stats.by_author.is_empty());
    assert!(stats.by_tag.is_empty());

    let completion = manager.completion_stats();
    assert_eq!((completion.min, completion.max), (0, 0));
    assert_eq!(completion.average, 0.0);
}

#[test]
fn statistics_group_by_display_label() {
    let mut manager = PrdManager::in_memory();
    let a = manager.create("a", "", "QA Team", PrdCategory::BugFix).unwrap();
    let b = manager.create("b", "", "QA Team", PrdCategory::NewProduct).unwrap();
    manager.create("c", "", "UX Team", PrdCategory::BugFix).unwrap();
    manager.update_status(a.as_str(), PrdStatus::InReview).unwrap();
    manager.update(b.as_str(), |prd| prd.add_tag("mobile")).unwrap();

    let stats = manager.statistics();
    assert_eq!(stats.total_prds, 3);
    assert_eq!(stats.by_status.get("In Review"), Some(&1));
    assert_eq!(stats.by_status.get("Draft"), Some(&2));
    assert_eq!(stats.status_count(PrdStatus::Archived), 0);
    assert_eq!(stats.by_category.get("Bug Fix"), Some(&2));
    assert_eq!(stats.by_category.get("New Product"), Some(&1));
    assert_eq!(stats.by_author.get("QA Team"), Some(&2));
    assert_eq!(stats.by_tag.get("mobile"), Some(&1));
}

#[test]
fn average_completion_is_rounded_to_two_decimals() {
    let mut manager = PrdManager::in_memory();
    let ids: Vec<_> = (0..3)
        .map(|_| manager.create("t", "d", "a", PrdCategory::Feature).unwrap())
        .collect();
    manager.update_completion(ids[0].as_str(), 100).unwrap();
    manager.update_completion(ids[1].as_str(), 100).unwrap();

    assert_eq!(manager.statistics().average_completion, 66.67);

    let completion = manager.completion_stats();
    assert_eq!((completion.min, completion.max), (0, 100));
    assert!((completion.average - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn status_progress_covers_every_status() {
    let mut manager = PrdManager::in_memory();
    let ids = load_demo_data(&mut manager).unwrap();
    manager.update_completion(ids[0].as_str(), 25).unwrap();

    let progress = manager.status_progress();
    assert_eq!(progress.len(), PrdStatus::ALL.len());
    assert_eq!(progress[0], (PrdStatus::Draft, 50.0));
    assert_eq!(progress[1], (PrdStatus::InReview, 0.0));
    assert_eq!(progress[6], (PrdStatus::Archived, 0.0));
}
