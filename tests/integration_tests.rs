mod common;

use common::{init_db, setup_test_db, sqr, temp_out};
use predicates::str::contains;
use serde_json::Value;
use std::fs;

fn list_json(db_path: &str) -> Vec<Value> {
    let out = sqr()
        .args(["--db", db_path, "list", "--json"])
        .output()
        .expect("run list");
    assert!(out.status.success());
    let v: Value = serde_json::from_slice(&out.stdout).expect("valid json");
    v.as_array().expect("array").clone()
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    sqr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());

    // second init is harmless
    init_db(&db_path);
}

#[test]
fn test_add_list_exists() {
    let db_path = setup_test_db("add_list_exists");
    init_db(&db_path);

    sqr()
        .args(["--db", &db_path, "add", "ABC123"])
        .assert()
        .success()
        .stdout(contains("Stored ABC123 [qr]"));

    sqr()
        .args(["--db", &db_path, "add", "XYZ999", "--type", "CODE-128"])
        .assert()
        .success()
        .stdout(contains("[code128]"));

    sqr()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("ABC123"))
        .stdout(contains("XYZ999"))
        .stdout(contains("2 codes"));

    let codes = list_json(&db_path);
    assert_eq!(codes.len(), 2);
    assert_eq!(codes[0]["data"], "XYZ999");
    assert_eq!(codes[0]["type"], "code128");
    assert!(codes[0]["timestamp"].as_i64().is_some());

    sqr()
        .args(["--db", &db_path, "exists", "ABC123"])
        .assert()
        .success()
        .stdout(contains("yes"));

    sqr()
        .args(["--db", &db_path, "exists", "nope"])
        .assert()
        .success()
        .stdout(contains("no"));
}

#[test]
fn test_list_empty_store() {
    let db_path = setup_test_db("list_empty");
    init_db(&db_path);

    sqr()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No scanned codes."));
}

#[test]
fn test_del_and_clear() {
    let db_path = setup_test_db("del_clear");
    init_db(&db_path);

    for d in ["A", "B", "C"] {
        sqr().args(["--db", &db_path, "add", d]).assert().success();
    }

    let codes = list_json(&db_path);
    let id = codes[0]["id"].as_str().expect("id").to_string();

    sqr()
        .args(["--db", &db_path, "del", &id, "-y"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));
    assert_eq!(list_json(&db_path).len(), 2);

    sqr()
        .args(["--db", &db_path, "del", "missing-id", "-y"])
        .assert()
        .success()
        .stdout(contains("No code with id missing-id"));

    sqr()
        .args(["--db", &db_path, "clear", "-y"])
        .assert()
        .success()
        .stdout(contains("2 codes have been deleted"));
    assert!(list_json(&db_path).is_empty());
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let db_path = setup_test_db("del_cancelled");
    init_db(&db_path);
    sqr().args(["--db", &db_path, "add", "A"]).assert().success();

    sqr()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));
    assert_eq!(list_json(&db_path).len(), 1);
}

#[test]
fn test_stats_json() {
    let db_path = setup_test_db("stats_json");
    init_db(&db_path);

    sqr().args(["--db", &db_path, "add", "1"]).assert().success();
    sqr().args(["--db", &db_path, "add", "2"]).assert().success();
    sqr()
        .args(["--db", &db_path, "add", "3", "-t", "aztec"])
        .assert()
        .success();

    let out = sqr()
        .args(["--db", &db_path, "stats", "--json"])
        .output()
        .expect("run stats");
    assert!(out.status.success());

    let v: Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(v["total"], 3);
    assert_eq!(v["by_type"]["qr"], 2);
    assert_eq!(v["by_type"]["aztec"], 1);
    assert!(v["last_scan_timestamp"].as_i64().is_some());

    sqr()
        .args(["--db", &db_path, "stats"])
        .assert()
        .success()
        .stdout(contains("Total codes:"));
}

#[test]
fn test_scan_from_stdin_with_cooldown() {
    let db_path = setup_test_db("scan_cooldown");
    init_db(&db_path);

    sqr()
        .args([
            "--db",
            &db_path,
            "scan",
            "--policy",
            "same-value-cooldown",
        ])
        .write_stdin("ABC123\nABC123\nXYZ999\n")
        .assert()
        .success()
        .stdout(contains("2 stored (0 already seen), 1 suppressed, 0 failed"));

    assert_eq!(list_json(&db_path).len(), 2);
}

#[test]
fn test_scan_lock_window_burst() {
    let db_path = setup_test_db("scan_lock_window");
    init_db(&db_path);

    // the same frame reported many times while the lock is held
    sqr()
        .args(["--db", &db_path, "scan", "--timeout-ms", "60000"])
        .write_stdin("ABC123\nABC123\nABC123\nXYZ999\n")
        .assert()
        .success()
        .stdout(contains("1 stored (0 already seen), 3 suppressed, 0 failed"));
}

#[test]
fn test_scan_duplicate_is_announced() {
    let db_path = setup_test_db("scan_duplicate");
    init_db(&db_path);
    sqr().args(["--db", &db_path, "add", "ABC123"]).assert().success();

    sqr()
        .args(["--db", &db_path, "scan", "--timeout-ms", "0"])
        .write_stdin("QR-Code:ABC123\n")
        .assert()
        .success()
        .stdout(contains("Already scanned"))
        .stdout(contains("1 stored (1 already seen)"));
}

#[test]
fn test_scan_from_file_with_location() {
    let db_path = setup_test_db("scan_file");
    init_db(&db_path);

    let input = temp_out("scan_file_input", "txt");
    fs::write(
        &input,
        "{\"data\": \"ABC123\", \"type\": \"ean13\"}\nnot json at all\n",
    )
    .expect("write input");

    sqr()
        .args([
            "--db",
            &db_path,
            "scan",
            "--input",
            &input,
            "--timeout-ms",
            "0",
            "--at",
            "40.4168,-3.7038",
        ])
        .assert()
        .success()
        .stdout(contains("GPS: 40.416800, -3.703800"))
        .stdout(contains("2 stored"));

    let codes = list_json(&db_path);
    assert!(codes.iter().any(|c| c["type"] == "ean13"));
}

#[test]
fn test_scan_rejects_bad_location() {
    let db_path = setup_test_db("scan_bad_location");
    init_db(&db_path);

    sqr()
        .args(["--db", &db_path, "scan", "--at", "200,0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate"));
}

#[test]
fn test_sync_local_mode() {
    let db_path = setup_test_db("sync_local");
    init_db(&db_path);
    sqr().args(["--db", &db_path, "add", "A"]).assert().success();
    sqr().args(["--db", &db_path, "add", "B"]).assert().success();

    sqr()
        .args(["--db", &db_path, "sync", "--local"])
        .assert()
        .success()
        .stdout(contains("Sync simulated: 2 codes"));
}

#[test]
fn test_export_json_and_csv() {
    let db_path = setup_test_db("export_codes");
    init_db(&db_path);
    sqr().args(["--db", &db_path, "add", "ABC123"]).assert().success();

    let json_out = temp_out("export_codes", "json");
    sqr()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let v: Value = serde_json::from_str(&fs::read_to_string(&json_out).expect("read"))
        .expect("json");
    assert_eq!(v[0]["data"], "ABC123");
    assert_eq!(v[0]["type"], "qr");
    assert!(v[0]["scanned_at"].is_string());

    let csv_out = temp_out("export_codes", "csv");
    sqr()
        .args(["--db", &db_path, "export", "--file", &csv_out])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).expect("read");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("id,data,type,timestamp,scanned_at"));
    assert!(lines.next().expect("row").contains("ABC123"));

    // existing file is kept unless forced or confirmed
    sqr()
        .args(["--db", &db_path, "export", "--file", &csv_out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    sqr()
        .args(["--db", &db_path, "export", "--file", &csv_out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_db_check_info_and_drop() {
    let db_path = setup_test_db("db_maintenance");
    init_db(&db_path);
    sqr().args(["--db", &db_path, "add", "A"]).assert().success();

    sqr()
        .args(["--db", &db_path, "db", "--check", "--info", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Total codes:"))
        .stdout(contains("Vacuum completed"));

    sqr()
        .args(["--db", &db_path, "db", "--drop", "-y"])
        .assert()
        .success()
        .stdout(contains("Codes table dropped"));

    // the next open recreates an empty table
    assert!(list_json(&db_path).is_empty());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);
    sqr().args(["--db", &db_path, "add", "A"]).assert().success();
    sqr()
        .args(["--db", &db_path, "clear", "-y"])
        .assert()
        .success();

    sqr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("clear"));
}

#[test]
fn test_notify_alert() {
    sqr()
        .args(["notify", "hello there", "--title", "Test"])
        .assert()
        .success()
        .stdout(contains("Test"))
        .stdout(contains("hello there"));
}

#[test]
fn test_scan_rejects_cooldown_shorter_than_timeout() {
    let db_path = setup_test_db("scan_bad_cooldown");
    init_db(&db_path);

    sqr()
        .args([
            "--db",
            &db_path,
            "scan",
            "--policy",
            "same-value-cooldown",
            "--cooldown-ms",
            "100",
            "--timeout-ms",
            "800",
        ])
        .write_stdin("ABC123\n")
        .assert()
        .failure()
        .stderr(contains("must not be shorter than processing_timeout_ms"));

    assert!(list_json(&db_path).is_empty());
}

#[test]
fn test_scan_huge_timeout_does_not_crash() {
    let db_path = setup_test_db("scan_huge_timeout");
    init_db(&db_path);

    sqr()
        .args([
            "--db",
            &db_path,
            "scan",
            "--timeout-ms",
            "18446744073709551615",
        ])
        .write_stdin("ABC123\nXYZ999\n")
        .assert()
        .success()
        .stdout(contains("1 stored (0 already seen), 1 suppressed, 0 failed"));
}
