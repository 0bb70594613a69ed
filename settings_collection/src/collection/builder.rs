//! Builder for [`Collection`].
//!
//! The builder fixes the document's extension and scan policy before the
//! file name is derived, and lets applications add their own candidates
//! around the platform defaults.

use std::path::PathBuf;

use tracing::debug;

use super::{
    Collection, DEFAULT_EXTENSION, MatchPolicy, candidates, derive_file_name, normalise_extension,
};
use crate::host::{HostEnvironment, SystemHost};
use crate::{SettingsError, SettingsResult};

#[derive(Debug, Clone)]
enum Extra {
    File(PathBuf),
    Dir(PathBuf),
}

/// Builder for [`Collection`].
///
/// # Examples
///
/// ```rust
/// use settings_collection::{Collection, FixedHost, MatchPolicy, OsFamily};
///
/// let host = FixedHost::new("/home/demo", OsFamily::Other);
/// let collection = Collection::builder("testapp", "settings")
///     .extension("yml")
///     .match_policy(MatchPolicy::FirstExisting)
///     .add_search_dir("/usr/local/etc")
///     .build_with(&host)?;
/// assert_eq!(collection.file_name(), "settings.yml");
/// assert_eq!(
///     collection.search_paths().last(),
///     Some(&std::path::PathBuf::from("/usr/local/etc/testapp/settings.yml")),
/// );
/// # Ok::<(), settings_collection::SettingsError>(())
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct CollectionBuilder {
    group: String,
    document: String,
    extension: String,
    match_policy: MatchPolicy,
    platform_defaults: bool,
    extras: Vec<Extra>,
}

impl CollectionBuilder {
    /// Creates a builder for `document` within `group`.
    pub fn new(group: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            document: document.into(),
            extension: String::from(DEFAULT_EXTENSION),
            match_policy: MatchPolicy::default(),
            platform_defaults: true,
            extras: Vec::new(),
        }
    }

    /// Sets the extension used to derive the document file name.
    pub fn extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = normalise_extension(extension.as_ref());
        self
    }

    /// Sets the policy applied when several candidates exist.
    pub const fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Enables or disables the platform search paths.
    ///
    /// With the defaults disabled the home directory is never consulted, so
    /// building cannot fail with [`SettingsError::UserResolution`].
    pub const fn platform_defaults(mut self, enabled: bool) -> Self {
        self.platform_defaults = enabled;
        self
    }

    /// Appends a candidate file after the platform defaults.
    pub fn add_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.extras.push(Extra::File(path.into()));
        self
    }

    /// Appends `dir/<group>/<file name>` after the platform defaults.
    pub fn add_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.extras.push(Extra::Dir(dir.into()));
        self
    }

    /// Builds the collection against the running host.
    ///
    /// # Errors
    ///
    /// See [`CollectionBuilder::build_with`].
    pub fn build(self) -> SettingsResult<Collection> {
        self.build_with(&SystemHost)
    }

    /// Builds the collection, resolving platform paths through `host`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidName`] when the document name is blank
    /// and [`SettingsError::UserResolution`] when platform defaults are
    /// enabled but `host` reports no home directory.
    pub fn build_with(self, host: &impl HostEnvironment) -> SettingsResult<Collection> {
        let name = self.document.trim().to_owned();
        if name.is_empty() {
            return Err(SettingsError::invalid_name("document name must not be empty"));
        }
        let group = self.group.trim().to_owned();
        let file_name = derive_file_name(&name, &self.extension);

        let mut search_paths = if self.platform_defaults {
            let home = host.home_dir().ok_or(SettingsError::UserResolution)?;
            candidates::platform_defaults(&group, &file_name, &home, host.os_family())
        } else {
            Vec::new()
        };
        search_paths.extend(self.extras.into_iter().map(|extra| match extra {
            Extra::File(path) => path,
            Extra::Dir(dir) => candidates::in_group_dir(&dir, &group, &file_name),
        }));

        debug!(
            group = %group,
            file = %file_name,
            candidates = search_paths.len(),
            "built configuration collection"
        );

        Ok(Collection {
            name,
            group,
            file_name,
            extension: self.extension,
            search_paths,
            match_policy: self.match_policy,
        })
    }
}
