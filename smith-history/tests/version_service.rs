use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use draftsmith_history::{
    AUTOSAVE_NOTE, ChangeKind, Clock, HistoryError, ManualClock, MemoryStore, VersionId,
    VersionService, format_version_date,
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn setup() -> (VersionService, Arc<ManualClock>, Arc<MemoryStore>) {
    let clock = Arc::new(ManualClock::new(start()));
    let store = Arc::new(MemoryStore::with_clock(clock.clone()));
    let service = VersionService::with_clock(store.clone(), clock.clone());
    (service, clock, store)
}

#[tokio::test]
async fn test_create_numbers_sequentially_with_default_note() {
    let (service, _, _) = setup();

    let v1 = service.create("landing", "<p>1</p>", None, None).await.unwrap();
    let v2 = service
        .create("landing", "<p>2</p>", Some("Hero copy"), Some("make a hero"))
        .await
        .unwrap();
    let other = service.create("pricing", "<p>x</p>", None, None).await.unwrap();

    assert_eq!(v1.version_number, 1);
    assert_eq!(v1.note.as_deref(), Some("Version 1"));
    assert_eq!(v2.version_number, 2);
    assert_eq!(v2.note.as_deref(), Some("Hero copy"));
    assert_eq!(v2.prompt_text.as_deref(), Some("make a hero"));
    assert_eq!(other.version_number, 1);
    assert_eq!(v1.created_at, start());
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (service, _, _) = setup();
    for code in ["a", "b", "c"] {
        service.create("landing", code, None, None).await.unwrap();
    }

    let numbers: Vec<_> = service
        .list("landing")
        .await
        .unwrap()
        .iter()
        .map(|v| v.version_number)
        .collect();
    assert_eq!(numbers, [3, 2, 1]);

    let page = service.list_page("landing", 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].code, "c");

    assert_eq!(service.latest("landing").await.unwrap().unwrap().code, "c");
    assert!(service.latest("empty").await.unwrap().is_none());
    assert!(service.list("empty").await.unwrap().is_empty());
    assert_eq!(service.count("landing").await.unwrap(), 3);
}

#[tokio::test]
async fn test_get_missing_version_is_not_found() {
    let (service, _, _) = setup();
    let id = VersionId::new();

    let err = service.get(&id).await.unwrap_err();
    assert!(matches!(err, HistoryError::NotFound(missing) if missing == id));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_revert_appends_copy() {
    let (service, _, store) = setup();
    let v1 = service
        .create("landing", "<p>first</p>", None, Some("first prompt"))
        .await
        .unwrap();
    service.create("landing", "<p>second</p>", None, None).await.unwrap();

    let reverted = service.revert(&v1.id).await.unwrap();

    assert_eq!(reverted.version_number, 3);
    assert_eq!(reverted.code, v1.code);
    assert_eq!(reverted.project_id, "landing");
    assert_eq!(reverted.note.as_deref(), Some("Reverted to version 1"));
    assert_ne!(reverted.id, v1.id);
    assert_eq!(store.len().await, 3);
    assert_eq!(service.get(&v1.id).await.unwrap(), v1);
}

#[tokio::test]
async fn test_delete_is_hard_and_idempotent() {
    let (service, _, _) = setup();
    let v1 = service.create("landing", "a", None, None).await.unwrap();

    service.delete(&v1.id).await.unwrap();
    assert!(service.get(&v1.id).await.unwrap_err().is_not_found());
    service.delete(&v1.id).await.unwrap();
}

#[tokio::test]
async fn test_compare_identical_code_has_no_changes() {
    let (service, _, _) = setup();
    let a = service.create("landing", "x\ny", None, None).await.unwrap();
    let b = service.create("landing", "x\ny", None, None).await.unwrap();

    let cmp = service.compare(&a.id, &b.id).await.unwrap();
    assert_eq!(cmp.added_line_count, 0);
    assert_eq!(cmp.removed_line_count, 0);
    assert!(cmp.is_unchanged());
}

#[tokio::test]
async fn test_compare_counts_changes() {
    let (service, _, _) = setup();
    let a = service.create("landing", "x\ny", None, None).await.unwrap();
    let b = service.create("landing", "x\nz\nw", None, None).await.unwrap();

    let cmp = service.compare(&a.id, &b.id).await.unwrap();
    assert_eq!(cmp.from_version.id, a.id);
    assert_eq!(cmp.to_version.id, b.id);
    assert_eq!(cmp.added_line_count, 2);
    assert_eq!(cmp.removed_line_count, 1);
    assert_eq!(cmp.changes[0].kind, ChangeKind::Removed);
    assert_eq!(cmp.changes[0].content, "y");
}

#[tokio::test]
async fn test_compare_fails_when_either_side_is_missing() {
    let (service, _, _) = setup();
    let a = service.create("landing", "x", None, None).await.unwrap();

    let err = service.compare(&a.id, &VersionId::new()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_autosave_coalesces_inside_window() {
    let (service, clock, store) = setup();

    let first = service
        .auto_save("landing", "<p>1</p>", Some("prompt"))
        .await
        .unwrap();
    assert_eq!(first.version_number, 1);
    assert_eq!(first.note.as_deref(), Some(AUTOSAVE_NOTE));

    clock.advance(Duration::minutes(3));
    let second = service.auto_save("landing", "<p>2</p>", None).await.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.version_number, 1);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.code, "<p>2</p>");
    assert_eq!(second.prompt_text.as_deref(), Some("prompt"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_autosave_window_lower_bound_is_inclusive() {
    let (service, clock, store) = setup();
    let first = service.auto_save("landing", "a", None).await.unwrap();

    clock.advance(Duration::minutes(5));
    let same = service.auto_save("landing", "b", None).await.unwrap();
    assert_eq!(same.id, first.id);

    clock.advance(Duration::seconds(1));
    let next = service.auto_save("landing", "c", None).await.unwrap();
    assert_ne!(next.id, first.id);
    assert_eq!(next.version_number, 2);
    assert_eq!(next.created_at, clock.now());
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_autosave_updates_an_explicit_save_too() {
    let (service, clock, _) = setup();
    let saved = service
        .create("landing", "a", Some("Milestone"), None)
        .await
        .unwrap();

    clock.advance(Duration::minutes(1));
    let auto = service.auto_save("landing", "b", None).await.unwrap();

    assert_eq!(auto.id, saved.id);
    assert_eq!(auto.note.as_deref(), Some("Milestone"));
}

#[tokio::test]
async fn test_custom_autosave_window() {
    let (service, clock, _) = setup();
    let service = service.with_autosave_window(Duration::seconds(30));

    let first = service.auto_save("landing", "a", None).await.unwrap();
    clock.advance(Duration::seconds(31));
    let second = service.auto_save("landing", "b", None).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_numbers() {
    let (service, _, _) = setup();
    let service = Arc::new(service);

    let a = service.clone();
    let b = service.clone();
    let (va, vb) = tokio::join!(
        async move { a.create("landing", "a", None, None).await },
        async move { b.create("landing", "b", None, None).await },
    );

    let mut numbers = vec![va.unwrap().version_number, vb.unwrap().version_number];
    numbers.sort();
    assert_eq!(numbers, [1, 2]);
}

#[tokio::test]
async fn test_created_at_formats_relative_to_clock() {
    let (service, clock, _) = setup();
    let v = service.create("landing", "a", None, None).await.unwrap();

    assert_eq!(format_version_date(v.created_at, clock.now()), "Just now");
    clock.advance(Duration::hours(1));
    assert_eq!(format_version_date(v.created_at, clock.now()), "1 hour ago");
    clock.advance(Duration::hours(23));
    assert_eq!(format_version_date(v.created_at, clock.now()), "Yesterday");
}
