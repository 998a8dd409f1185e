#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use scanqr::core::notifier::Notifier;
use scanqr::errors::AppResult;
use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

pub fn sqr() -> Command {
    cargo_bin_cmd!("scanqr")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_scanqr.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_scanqr_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB through the CLI (no config file is written)
pub fn init_db(db_path: &str) {
    sqr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Notifier that remembers every message instead of presenting it.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub messages: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.messages.borrow().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn notify(&self, title: &str, body: &str) -> AppResult<()> {
        self.messages
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}
