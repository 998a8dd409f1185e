use scanqr::core::sync::{SyncLogic, SyncMode, SyncTarget};
use scanqr::db::store::CodeStore;
use scanqr::errors::{AppError, AppResult};
use scanqr::models::scanned_code::ScannedCode;
use std::cell::RefCell;
use std::thread::sleep;
use std::time::Duration;

/// Records pushed payloads; fails on the push with index `fail_at`.
struct FakeTarget {
    pushed: RefCell<Vec<String>>,
    fail_at: Option<usize>,
}

impl FakeTarget {
    fn new(fail_at: Option<usize>) -> Self {
        Self {
            pushed: RefCell::new(Vec::new()),
            fail_at,
        }
    }
}

impl SyncTarget for FakeTarget {
    fn push(&self, code: &ScannedCode) -> AppResult<()> {
        if self.fail_at == Some(self.pushed.borrow().len()) {
            return Err(AppError::Network("503 Service Unavailable".into()));
        }
        self.pushed.borrow_mut().push(code.data.clone());
        Ok(())
    }
}

/// Fails every push with a local storage error.
struct BrokenStoreTarget;

impl SyncTarget for BrokenStoreTarget {
    fn push(&self, _code: &ScannedCode) -> AppResult<()> {
        Err(AppError::Storage(rusqlite::Error::QueryReturnedNoRows))
    }
}

fn store_with(data: &[&str]) -> CodeStore {
    let store = CodeStore::open_in_memory().expect("store");
    for d in data {
        store.insert(d, "qr").expect("insert");
        sleep(Duration::from_millis(15));
    }
    store
}

#[test]
fn test_local_mode_makes_no_calls() {
    let store = store_with(&["A", "B"]);

    let report = SyncLogic::sync_all(&store, SyncMode::Local).expect("sync");
    assert!(report.simulated);
    assert_eq!(report.sent, 2);
}

#[test]
fn test_remote_pushes_every_code_newest_first() {
    let store = store_with(&["A", "B", "C"]);
    let target = FakeTarget::new(None);

    let report = SyncLogic::sync_all(&store, SyncMode::Remote(&target)).expect("sync");

    assert!(!report.simulated);
    assert_eq!(report.sent, 3);
    assert_eq!(*target.pushed.borrow(), vec!["C", "B", "A"]);
}

#[test]
fn test_first_failure_aborts_sync() {
    let store = store_with(&["A", "B", "C"]);
    let target = FakeTarget::new(Some(1));

    let err = SyncLogic::sync_all(&store, SyncMode::Remote(&target)).expect_err("must fail");

    match err {
        AppError::Network(msg) => {
            assert!(msg.contains("code 2 of 3"), "got: {msg}");
            assert!(msg.contains("503"), "got: {msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(*target.pushed.borrow(), vec!["C"]);

    let synced: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM log WHERE operation = 'sync'", [], |r| {
            r.get(0)
        })
        .expect("count");
    assert_eq!(synced, 0, "a failed run is not logged as a sync");
}

#[test]
fn test_empty_store_syncs_nothing() {
    let store = store_with(&[]);
    let target = FakeTarget::new(Some(0));

    let report = SyncLogic::sync_all(&store, SyncMode::Remote(&target)).expect("sync");
    assert_eq!(report.sent, 0);
}

#[test]
fn test_non_network_failure_keeps_its_kind() {
    let store = store_with(&["A"]);

    let err = SyncLogic::sync_all(&store, SyncMode::Remote(&BrokenStoreTarget))
        .expect_err("must fail");

    assert!(err.is_storage(), "got: {err:?}");
    assert!(!matches!(err, AppError::Network(_)));
}
