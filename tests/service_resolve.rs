//! Integration tests for resolution and expiry sweeping.

mod common;

use common::{expired_entry, file_service, live_entry, seed_entries, store_path};
use linkstash::prelude::*;

#[tokio::test]
async fn unknown_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    let service = file_service(&path);

    // Empty store.
    assert_eq!(
        service.resolve("doesNotExist").await.unwrap(),
        Resolution::NotFound
    );

    // Populated store without the id.
    seed_entries(&path, &[live_entry("abc123", "https://example.com")]).await;
    assert_eq!(
        service.resolve("doesNotExist").await.unwrap(),
        Resolution::NotFound
    );
}

#[tokio::test]
async fn live_entry_redirects() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    seed_entries(&path, &[live_entry("abc123", "https://example.com/live")]).await;

    let resolution = file_service(&path).resolve("abc123").await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Redirect("https://example.com/live".to_string())
    );
}

#[tokio::test]
async fn expired_entry_reports_expired_and_stays_stored() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    seed_entries(&path, &[expired_entry("old001", "https://example.com")]).await;

    let service = file_service(&path);

    // Expired on every lookup, never a redirect again, never deleted.
    for _ in 0..3 {
        assert_eq!(
            service.resolve("old001").await.unwrap(),
            Resolution::Expired
        );
    }

    let stored = JsonFileStore::new(&path).load_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].short_id, "old001");
}

#[tokio::test]
async fn short_validity_entry_expires_on_the_clock() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    let service = file_service(&path);

    let entry = service
        .shorten("https://example.com", None, Some(1))
        .await
        .unwrap();

    // Live right after creation.
    assert_eq!(
        service.resolve(&entry.short_id).await.unwrap(),
        Resolution::Redirect("https://example.com".to_string())
    );

    // Rewrite the entry as if 61 seconds had passed.
    let mut aged = entry.clone();
    aged.expires_at -= 61_000;
    seed_entries(&path, &[aged]).await;

    assert_eq!(
        service.resolve(&entry.short_id).await.unwrap(),
        Resolution::Expired
    );
}

#[tokio::test]
async fn corrupt_store_surfaces_as_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "not json at all").unwrap();

    let result = file_service(&path).resolve("abc123").await;

    assert!(matches!(result, Err(AppError::StorageUnavailable { .. })));
}

#[tokio::test]
async fn sweep_removes_expired_entries_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    seed_entries(
        &path,
        &[
            live_entry("live01", "https://example.com/live"),
            expired_entry("dead01", "https://example.com/dead"),
            expired_entry("dead02", "https://example.com/gone"),
        ],
    )
    .await;

    let service = file_service(&path);
    let removed = service.sweep_expired().await.unwrap();

    assert_eq!(removed, 2);
    assert_eq!(service.resolve("dead01").await.unwrap(), Resolution::NotFound);
    assert_eq!(service.resolve("dead02").await.unwrap(), Resolution::NotFound);
    assert_eq!(
        service.resolve("live01").await.unwrap(),
        Resolution::Redirect("https://example.com/live".to_string())
    );

    let stored = JsonFileStore::new(&path).load_all().await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn sweep_reclaims_identifiers() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);
    seed_entries(&path, &[expired_entry("promo", "https://example.com/old")]).await;

    let service = file_service(&path);

    // Taken while the dead entry is still stored.
    assert!(matches!(
        service
            .shorten("https://example.com/new", Some("promo"), None)
            .await,
        Err(AppError::IdentifierTaken { .. })
    ));

    service.sweep_expired().await.unwrap();

    // Free again after the sweep.
    let entry = service
        .shorten("https://example.com/new", Some("promo"), None)
        .await
        .unwrap();
    assert_eq!(entry.short_id, "promo");
}

#[tokio::test]
async fn sweep_with_nothing_expired_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);

    let service = file_service(&path);
    let removed = service.sweep_expired().await.unwrap();

    assert_eq!(removed, 0);
    // No write happened: the store file was never created.
    assert!(!path.exists());
}
