use std::sync::Mutex;

use async_trait::async_trait;

use leadwatch::app::{run_pipeline, Outcome};
use leadwatch::domain::Snapshot;
use leadwatch::error::{Error, Result, StorageError};
use leadwatch::store::SnapshotStore;
use leadwatch::telegram::Notify;

/// Notifier that records every delivered message.
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notify for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn seeded_store(snapshot: Snapshot) -> (tempfile::TempDir, SnapshotStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("old.json"));
    store.save(&snapshot).unwrap();
    (dir, store)
}

#[tokio::test]
async fn unchanged_fraction_sends_nothing() {
    let (_dir, store) = seeded_store(Snapshot::new(100, 0.5));
    let notifier = RecordingNotifier::default();

    // Lead moved, but the processed fraction is bit-identical.
    let outcome = run_pipeline(Snapshot::new(90, 0.5), &store, &notifier)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Unchanged);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn unchanged_run_still_refreshes_the_store() {
    let (_dir, store) = seeded_store(Snapshot::new(100, 0.5));
    let notifier = RecordingNotifier::default();

    run_pipeline(Snapshot::new(90, 0.5), &store, &notifier)
        .await
        .unwrap();

    assert_eq!(store.load().unwrap(), Snapshot::new(90, 0.5));
}

#[tokio::test]
async fn changed_fraction_sends_exactly_one_message() {
    let (_dir, store) = seeded_store(Snapshot::new(100, 0.50));
    let notifier = RecordingNotifier::default();

    let outcome = run_pipeline(Snapshot::new(90, 0.55), &store, &notifier)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Notified);
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Lead: *90 (11.11%)*"));
    assert!(sent[0].contains("Processed: 55.00%"));
    assert!(sent[0].contains("Remaining: 45.00%"));
    assert_eq!(store.load().unwrap(), Snapshot::new(90, 0.55));
}

#[tokio::test]
async fn zero_new_lead_notifies_without_a_delta() {
    let (_dir, store) = seeded_store(Snapshot::new(100, 0.50));
    let notifier = RecordingNotifier::default();

    let outcome = run_pipeline(Snapshot::new(0, 0.55), &store, &notifier)
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Notified);
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with("Lead: 0\n"));
    assert!(!sent[0].contains("inf"));
}

#[tokio::test]
async fn missing_snapshot_file_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("old.json"));
    let notifier = RecordingNotifier::default();

    let err = run_pipeline(Snapshot::new(90, 0.55), &store, &notifier)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Storage(StorageError::Read { .. })));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn corrupt_snapshot_file_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.json");
    std::fs::write(&path, "{truncated").unwrap();
    let store = SnapshotStore::new(path);
    let notifier = RecordingNotifier::default();

    let err = run_pipeline(Snapshot::new(90, 0.55), &store, &notifier)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Storage(StorageError::Decode(_))));
    assert!(notifier.sent().is_empty());
}
