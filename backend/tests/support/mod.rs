#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use launch_dash::dataset::DataContext;
use launch_dash::models::{LaunchRecord, Outcome};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Path of the dataset bundled with the crate.
pub fn bundled_dataset() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv")
}

/// Small fixture with known counts:
///
/// | site        | successes | failures | payloads               |
/// |-------------|-----------|----------|------------------------|
/// | CCAFS LC-40 | 1         | 2        | 0, 2500, 4200          |
/// | KSC LC-39A  | 3         | 2        | 3100..9600             |
/// | VAFB SLC-4E | 0         | 1        | 500                    |
pub fn fixture_records() -> Vec<LaunchRecord> {
    vec![
        LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
        LaunchRecord::new("CCAFS LC-40", 2500.0, Outcome::Success, "v1.1"),
        LaunchRecord::new("CCAFS LC-40", 4200.0, Outcome::Failure, "v1.1"),
        LaunchRecord::new("KSC LC-39A", 3100.0, Outcome::Success, "FT"),
        LaunchRecord::new("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
        LaunchRecord::new("KSC LC-39A", 6100.0, Outcome::Failure, "B4"),
        LaunchRecord::new("KSC LC-39A", 7000.0, Outcome::Success, "B5"),
        LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Failure, "B5"),
        LaunchRecord::new("VAFB SLC-4E", 500.0, Outcome::Failure, "v1.1"),
    ]
}

pub fn fixture_context() -> DataContext {
    DataContext::new(fixture_records()).expect("fixture is non-empty")
}

/// Write `contents` to a temporary CSV file.
pub fn temp_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
