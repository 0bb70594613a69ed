//! Writers for configuration documents used by tests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Writes `contents` to `root/relative`, creating parent directories.
///
/// Returns the full path written.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
///
/// # Examples
///
/// ```
/// use settings_collection_test_helpers::fixture;
///
/// let root = tempfile::tempdir()?;
/// let path = fixture::write_document(root.path(), ".testapp/settings.yaml", "port: 1\n")?;
/// assert!(path.ends_with(".testapp/settings.yaml"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_document(
    root: &Path,
    relative: impl AsRef<Path>,
    contents: &str,
) -> Result<PathBuf> {
    let path = root.join(relative.as_ref());
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Renders an `address`/`port` YAML document.
#[must_use]
pub fn endpoint_yaml(address: &str, port: u16) -> String {
    format!("address: {address}\nport: {port}\n")
}
