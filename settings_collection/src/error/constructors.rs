//! Constructors for `SettingsError`.

use std::path::{Path, PathBuf};

use super::SettingsError;

impl SettingsError {
    /// Construct a [`SettingsError::NotFound`] for `file_name` after probing `searched`.
    #[must_use]
    pub fn not_found(file_name: impl Into<String>, searched: Vec<PathBuf>) -> Self {
        Self::NotFound {
            file_name: file_name.into(),
            searched,
        }
    }

    /// Construct a [`SettingsError::InvalidName`] with `message`.
    #[must_use]
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::InvalidName {
            message: message.into(),
        }
    }
}

pub(crate) fn io_error(path: &Path, source: std::io::Error) -> SettingsError {
    SettingsError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub(crate) fn decode_error(
    path: &Path,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> SettingsError {
    SettingsError::Decode {
        path: path.to_path_buf(),
        source: source.into(),
    }
}
