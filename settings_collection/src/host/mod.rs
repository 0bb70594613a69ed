//! Host environment queries used when computing default search paths.
//!
//! Construction needs two facts about the machine: the current user's home
//! directory and whether the host follows Windows conventions. Both are
//! reached through [`HostEnvironment`] so callers and tests can substitute a
//! deterministic [`FixedHost`] for the real [`SystemHost`].

use std::path::PathBuf;

/// Operating-system family that decides the shape of the default search list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    /// Windows: no system-wide tier, user directory without a leading dot.
    Windows,
    /// Unix-like hosts: `/etc`, a home dotfile directory, then the working directory.
    Other,
}

impl OsFamily {
    /// Family of the compilation target.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Returns `true` for [`OsFamily::Windows`].
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }
}

/// Source of user and platform facts consulted while building a collection.
pub trait HostEnvironment {
    /// Home directory of the current user, or `None` when it cannot be resolved.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Operating-system family of the host.
    fn os_family(&self) -> OsFamily;
}

/// [`HostEnvironment`] backed by the running operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl HostEnvironment for SystemHost {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir().filter(|home| !home.as_os_str().is_empty())
    }

    fn os_family(&self) -> OsFamily {
        OsFamily::current()
    }
}

/// [`HostEnvironment`] returning fixed answers.
///
/// # Examples
///
/// ```
/// use settings_collection::{Collection, FixedHost, OsFamily};
///
/// let host = FixedHost::new("/home/demo", OsFamily::Other);
/// let collection = Collection::with_host("testapp", "settings", &host)?;
/// assert_eq!(
///     collection.search_paths()[1],
///     std::path::PathBuf::from("/home/demo/.testapp/settings.yaml"),
/// );
/// # Ok::<(), settings_collection::SettingsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHost {
    home: Option<PathBuf>,
    family: OsFamily,
}

impl FixedHost {
    /// Host with the given home directory and family.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>, family: OsFamily) -> Self {
        Self {
            home: Some(home.into()),
            family,
        }
    }

    /// Host whose user has no resolvable home directory.
    #[must_use]
    pub const fn homeless(family: OsFamily) -> Self {
        Self { home: None, family }
    }
}

impl HostEnvironment for FixedHost {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home
            .clone()
            .filter(|home| !home.as_os_str().is_empty())
    }

    fn os_family(&self) -> OsFamily {
        self.family
    }
}

impl<H: HostEnvironment + ?Sized> HostEnvironment for &H {
    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }

    fn os_family(&self) -> OsFamily {
        (**self).os_family()
    }
}

#[cfg(test)]
mod tests;
