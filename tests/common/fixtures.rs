use std::path::{Path, PathBuf};

/// Walk up from `start` until a directory containing `data/<marker>` is
/// found and return that `data` directory.
pub fn locate_data_dir(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join("data"))
        .find(|data| data.join(marker).is_file())
}

/// Scratch directory for files written by integration tests.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
