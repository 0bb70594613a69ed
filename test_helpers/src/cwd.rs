//! Serialised changes to the process working directory.
//!
//! Relative candidates such as `settings.yaml` resolve against the working
//! directory, which is process-global. Every guard holds a global mutex for
//! its lifetime and restores the previous directory on drop.
//!
//! # Examples
//!
//! ```no_run
//! use settings_collection_test_helpers::cwd;
//!
//! let scratch = cwd::enter_temp()?;
//! std::fs::write("settings.yaml", "port: 8181\n")?;
//! assert!(scratch.path().join("settings.yaml").is_file());
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use parking_lot::{Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Guard that restores the previous working directory on drop.
#[must_use = "dropping restores the prior working directory"]
pub struct WorkingDir {
    previous: Utf8PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl WorkingDir {
    /// Directory that will be restored.
    #[must_use]
    pub fn previous(&self) -> &Utf8Path {
        &self.previous
    }

    /// Restores the previous directory now, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns an error if `set_current_dir` fails.
    pub fn restore(&self) -> Result<()> {
        std::env::set_current_dir(&self.previous)
            .with_context(|| format!("restore working directory {}", self.previous))
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        // Failures cannot be reported from drop; call `restore` to observe them.
        let _ignored = std::env::set_current_dir(&self.previous);
    }
}

/// Makes `path` the working directory until the guard drops.
///
/// The previous directory is captured as UTF-8 before anything changes.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read, is not valid
/// UTF-8, or `path` cannot be entered.
pub fn enter(path: impl AsRef<Path>) -> Result<WorkingDir> {
    let lock = CWD_MUTEX.lock();
    let current = std::env::current_dir().context("read working directory")?;
    let previous = Utf8PathBuf::from_path_buf(current)
        .map_err(|raw| anyhow!("working directory is not valid UTF-8: {}", raw.display()))?;
    std::env::set_current_dir(path.as_ref())
        .with_context(|| format!("enter {}", path.as_ref().display()))?;
    Ok(WorkingDir {
        previous,
        _lock: lock,
    })
}

/// Working directory set to a fresh temporary directory.
///
/// Field order drops the working-directory guard before the directory is
/// removed.
#[must_use = "dropping restores the working directory and deletes the scratch tree"]
pub struct ScratchDir {
    guard: WorkingDir,
    dir: TempDir,
}

impl ScratchDir {
    /// Path of the temporary directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Guard for the working-directory change.
    #[must_use]
    pub const fn guard(&self) -> &WorkingDir {
        &self.guard
    }
}

/// Creates a temporary directory and makes it the working directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or entered.
pub fn enter_temp() -> Result<ScratchDir> {
    let dir = TempDir::new().context("create scratch working directory")?;
    let guard = enter(dir.path())?;
    Ok(ScratchDir { guard, dir })
}
