//! Recording helpers for persisting HTTP bodies as test fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("YTCHAT_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Writes `<dir>/<endpoint>_<key>.<ext>`, e.g. `popout_html_jfKfPfyJRdk.html`.
pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;

    // Keys are video ids or api keys; keep them filesystem-safe.
    let key: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));
    fs::write(&path, body)?;

    tracing::debug!("YTCHAT_RECORD: wrote fixture to {}", path.display());
    Ok(())
}
