//! The [`Collection`] type: one named configuration document and the ordered
//! locations where it may live.
//!
//! A collection is built once per logical document, optionally customised,
//! and then loaded any number of times. Nothing is cached between loads; each
//! call stats the candidates and reads the selected file again.

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;

use crate::host::{HostEnvironment, SystemHost};
use crate::SettingsResult;

mod builder;
mod candidates;
mod load;

pub use builder::CollectionBuilder;

/// Default extension used to derive the document file name.
pub const DEFAULT_EXTENSION: &str = "yaml";

/// How a load picks among several existing candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchPolicy {
    /// The last existing entry in scan order wins, so the working-directory
    /// fallback overrides user and system copies.
    #[default]
    LastExisting,
    /// The first existing entry in scan order wins, so earlier entries take
    /// precedence.
    FirstExisting,
}

/// A named configuration document and its ordered search paths.
///
/// # Examples
///
/// ```rust,no_run
/// use serde::Deserialize;
/// use settings_collection::Collection;
///
/// #[derive(Default, Deserialize)]
/// struct Server {
///     address: String,
///     port: u16,
/// }
///
/// # fn run() -> settings_collection::SettingsResult<()> {
/// let collection = Collection::new("testapp", "settings")?;
/// let mut server = Server::default();
/// collection.load_into(&mut server)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    name: String,
    group: String,
    file_name: String,
    extension: String,
    search_paths: Vec<PathBuf>,
    match_policy: MatchPolicy,
}

impl Collection {
    /// Creates a collection for `document` within `group`, using the running
    /// host to compute the default search paths.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SettingsError::UserResolution`] when the home
    /// directory cannot be determined and
    /// [`crate::SettingsError::InvalidName`] when `document` is blank.
    pub fn new(group: impl Into<String>, document: impl Into<String>) -> SettingsResult<Self> {
        Self::with_host(group, document, &SystemHost)
    }

    /// Creates a collection whose default search paths come from `host`.
    ///
    /// # Errors
    ///
    /// See [`Collection::new`].
    pub fn with_host(
        group: impl Into<String>,
        document: impl Into<String>,
        host: &impl HostEnvironment,
    ) -> SettingsResult<Self> {
        Self::builder(group, document).build_with(host)
    }

    /// Starts a [`CollectionBuilder`] for `document` within `group`.
    #[must_use]
    pub fn builder(group: impl Into<String>, document: impl Into<String>) -> CollectionBuilder {
        CollectionBuilder::new(group, document)
    }

    /// Name of the document, without extension.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Group (namespace directory) the document belongs to.
    #[must_use]
    pub const fn group(&self) -> &str {
        self.group.as_str()
    }

    /// File name derived at construction, for example `settings.yaml`.
    #[must_use]
    pub const fn file_name(&self) -> &str {
        self.file_name.as_str()
    }

    /// Extension applied to file names derived from now on.
    #[must_use]
    pub const fn extension(&self) -> &str {
        self.extension.as_str()
    }

    /// Replaces the extension. A leading `.` is ignored.
    ///
    /// The file name fixed at construction and the existing search paths are
    /// left alone; only [`Collection::push_search_dir`] observes the change.
    pub fn set_extension(&mut self, extension: impl AsRef<str>) {
        self.extension = normalise_extension(extension.as_ref());
    }

    /// Candidate files in scan order.
    #[must_use]
    pub const fn search_paths(&self) -> &[PathBuf] {
        self.search_paths.as_slice()
    }

    /// Mutable access to the candidate list.
    pub const fn search_paths_mut(&mut self) -> &mut Vec<PathBuf> {
        &mut self.search_paths
    }

    /// Replaces every candidate.
    pub fn set_search_paths<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_paths = paths.into_iter().map(Into::into).collect();
    }

    /// Appends a candidate file.
    pub fn push_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    /// Appends `dir/<group>/<name>.<extension>` using the current extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use settings_collection::Collection;
    ///
    /// let mut collection = Collection::builder("testapp", "settings")
    ///     .platform_defaults(false)
    ///     .build()?;
    /// collection.set_extension("yml");
    /// collection.push_search_dir("/usr/local/etc");
    /// assert_eq!(
    ///     collection.search_paths(),
    ///     [std::path::PathBuf::from("/usr/local/etc/testapp/settings.yml")],
    /// );
    /// # Ok::<(), settings_collection::SettingsError>(())
    /// ```
    pub fn push_search_dir(&mut self, dir: impl AsRef<Path>) {
        let file_name = derive_file_name(&self.name, &self.extension);
        let path = candidates::in_group_dir(dir.as_ref(), &self.group, &file_name);
        self.search_paths.push(path);
    }

    /// Candidates as UTF-8 paths; entries that are not valid UTF-8 are omitted.
    #[must_use]
    pub fn utf8_search_paths(&self) -> Vec<Utf8PathBuf> {
        self.search_paths
            .iter()
            .filter_map(|path| Utf8PathBuf::from_path_buf(path.clone()).ok())
            .collect()
    }

    /// Policy applied when several candidates exist.
    #[must_use]
    pub const fn match_policy(&self) -> MatchPolicy {
        self.match_policy
    }

    /// Replaces the policy applied when several candidates exist.
    pub const fn set_match_policy(&mut self, policy: MatchPolicy) {
        self.match_policy = policy;
    }
}

fn normalise_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_owned()
}

fn derive_file_name(name: &str, extension: &str) -> String {
    if extension.is_empty() {
        name.to_owned()
    } else {
        format!("{name}.{extension}")
    }
}
