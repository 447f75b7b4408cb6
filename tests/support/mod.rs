use std::path::{Path, PathBuf};

/// Helper to get the path to the routescan binary
#[allow(dead_code)]
pub fn routescan_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.join("routescan")
}

/// Helper to get a fixture directory under tests/fixtures
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
