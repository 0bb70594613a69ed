//! Primary error enum for collection construction and loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while building or loading a [`crate::Collection`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The current user's home directory could not be determined.
    #[error("Failed to resolve the current user's home directory")]
    UserResolution,

    /// None of the search paths exist.
    #[error("Configuration document '{file_name}' not found; searched: {}", join_paths(.searched))]
    NotFound {
        /// Derived document file name, for example `settings.yaml`.
        file_name: String,
        /// Candidates probed, in scan order.
        searched: Vec<PathBuf>,
    },

    /// The selected document exists but could not be read.
    #[error("Failed to read configuration document '{}': {source}", .path.display())]
    Io {
        /// Path selected by the scan.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The document content does not match the format or the target model.
    #[error("Failed to decode configuration document '{}': {source}", .path.display())]
    Decode {
        /// Path selected by the scan.
        path: PathBuf,
        /// Underlying parser or deserializer failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The document uses a format whose cargo feature is disabled.
    #[error(
        "Configuration document '{}' uses the '{extension}' format; enable the '{extension}' feature to read it",
        .path.display()
    )]
    UnsupportedFormat {
        /// Path selected by the scan.
        path: PathBuf,
        /// Lowercased file extension that selected the format.
        extension: String,
    },

    /// A collection was described with an unusable name.
    #[error("Invalid collection name: {message}")]
    InvalidName {
        /// Human-readable explanation.
        message: String,
    },
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return String::from("<none>");
    }
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl SettingsError {
    /// Returns `true` when no candidate document exists.
    ///
    /// Callers typically use this to fall back to built-in defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use settings_collection::SettingsError;
    ///
    /// let err = SettingsError::not_found("settings.yaml", Vec::new());
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the document path associated with the error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. }
            | Self::Decode { path, .. }
            | Self::UnsupportedFormat { path, .. } => Some(path.as_path()),
            Self::UserResolution | Self::NotFound { .. } | Self::InvalidName { .. } => None,
        }
    }
}
