//! Locating feed payloads for tests.
//!
//! Full-size payloads are named `v2-{kind}-{cycle}.json` by the feed and are
//! not checked in. Tests look for them in a few well-known directories and
//! skip when none has them.

use std::path::{Path, PathBuf};

/// Directory containing the workspace `Cargo.toml`.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .find(|dir| is_workspace_manifest(&dir.join("Cargo.toml")))
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn is_workspace_manifest(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .map(|text| text.contains("[workspace]"))
        .unwrap_or(false)
}

/// Directories searched for payloads, most specific first.
///
/// `TEST_DATA_DIR` wins when set, then each library's `testdata/`, then the
/// `weather-data/` directory the converter reads by default.
pub fn payload_search_dirs() -> Vec<PathBuf> {
    let root = workspace_root();
    let mut dirs: Vec<PathBuf> = std::env::var_os("TEST_DATA_DIR")
        .map(PathBuf::from)
        .into_iter()
        .collect();

    dirs.extend(
        ["grid-transform", "storm-track"]
            .iter()
            .map(|krate| root.join("crates").join(krate).join("testdata")),
    );
    dirs.push(root.join("weather-data"));
    dirs
}

/// First existing `name` across [`payload_search_dirs`].
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    payload_search_dirs()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|path| path.is_file())
}

/// Scratch directory for converter output, removed on drop.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("weather_layers_")
        .tempdir()
        .expect("temp dir")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_has_members() {
        let root = workspace_root();
        assert!(root.join("crates/test-utils/Cargo.toml").is_file(), "{:?}", root);
    }

    #[test]
    fn test_search_dirs_end_with_feed_dir() {
        let dirs = payload_search_dirs();
        assert!(dirs.last().is_some_and(|d| d.ends_with("weather-data")));
        assert!(dirs.iter().any(|d| d.ends_with("crates/storm-track/testdata")));
    }

    #[test]
    fn test_missing_payload_is_none() {
        assert!(find_test_file("v2-cyclone-9999.json").is_none());
    }

    #[test]
    fn test_temp_test_dir_prefix() {
        let dir = temp_test_dir();
        assert!(dir.path().is_dir());
        assert!(dir.path().to_string_lossy().contains("weather_layers_"));
    }
}
