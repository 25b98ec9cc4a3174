use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_PROJECT: AtomicUsize = AtomicUsize::new(0);

/// Creates a fresh scratch project root under the cargo-managed tmp dir
pub fn project_dir() -> PathBuf {
    let target = Path::new(env!("CARGO_TARGET_TMPDIR"));
    let buf = target.join(format!(
        "project-{}-{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis(),
        NEXT_PROJECT.fetch_add(1, Ordering::SeqCst)
    ));
    fs::create_dir_all(&buf).expect("could not create directory");
    buf
}

/// Writes a file at `rel` under `root`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("file has a parent"))
        .expect("could not create directory");
    fs::write(&path, content).expect("could not write file");
    path
}
