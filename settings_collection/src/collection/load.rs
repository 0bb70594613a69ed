//! Candidate selection and document loading for [`Collection`].

use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::{Collection, MatchPolicy};
use crate::error::io_error;
use crate::format::{decode, document_text, is_blank};
use crate::{SettingsError, SettingsResult};

/// Reports whether a stat of `path` shows something there.
///
/// Only absence counts as missing; other stat failures are treated as
/// present so that the read reports them.
fn probe(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            false
        }
        Err(err) => {
            trace!(
                path = %path.display(),
                error = %err,
                "stat failed; treating candidate as present"
            );
            true
        }
    }
}

impl Collection {
    /// Selects the document that a load would read.
    ///
    /// Returns `Ok(None)` when the collection has no search paths.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotFound`] when no candidate exists.
    pub fn locate(&self) -> SettingsResult<Option<PathBuf>> {
        if self.search_paths.is_empty() {
            debug!(file = %self.file_name, "no search paths configured; nothing to load");
            return Ok(None);
        }

        let mut selected = None;
        for candidate in &self.search_paths {
            if !probe(candidate) {
                trace!(path = %candidate.display(), "configuration candidate absent");
                continue;
            }
            trace!(path = %candidate.display(), "configuration candidate present");
            selected = Some(candidate);
            if self.match_policy == MatchPolicy::FirstExisting {
                break;
            }
        }

        selected.cloned().map(Some).ok_or_else(|| {
            SettingsError::not_found(self.file_name.clone(), self.search_paths.clone())
        })
    }

    /// Decodes the document and stores it in `target`.
    ///
    /// The document replaces the whole value, so enum variants, `Option`
    /// fields set to `null` and maps with non-string keys (YAML only) take the
    /// document's shape. Fields it does not mention get their `serde`
    /// defaults, not the previous value. With no search paths configured, or
    /// a blank document, the call succeeds and leaves `target` untouched. On
    /// error `target` is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Deserialize;
    /// use settings_collection::Collection;
    ///
    /// #[derive(Default, Deserialize)]
    /// struct Server {
    ///     port: u16,
    /// }
    ///
    /// let collection = Collection::builder("demo", "server")
    ///     .platform_defaults(false)
    ///     .build()?;
    /// let mut server = Server { port: 7000 };
    /// collection.load_into(&mut server)?;
    /// assert_eq!(server.port, 7000);
    /// # Ok::<(), settings_collection::SettingsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotFound`] when no candidate exists,
    /// [`SettingsError::Io`] when the selected file cannot be read,
    /// [`SettingsError::UnsupportedFormat`] when its format is disabled and
    /// [`SettingsError::Decode`] when its content does not fit `T`.
    pub fn load_into<T>(&self, target: &mut T) -> SettingsResult<()>
    where
        T: DeserializeOwned,
    {
        let Some(path) = self.locate()? else {
            return Ok(());
        };
        let contents = read_document(&path)?;
        if is_blank(&contents) {
            debug!(path = %path.display(), "configuration document is blank; keeping current values");
            return Ok(());
        }
        *target = decode(&path, &contents)?;
        debug!(path = %path.display(), "loaded configuration document");
        Ok(())
    }

    /// Loads the document into a fresh value.
    ///
    /// Returns `Ok(None)` when the collection has no search paths. A blank
    /// document decodes as an empty mapping.
    ///
    /// # Errors
    ///
    /// See [`Collection::load_into`].
    pub fn load<T>(&self) -> SettingsResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let Some(path) = self.locate()? else {
            return Ok(None);
        };
        let contents = read_document(&path)?;
        let value = decode(&path, &contents)?;
        debug!(path = %path.display(), "loaded configuration document");
        Ok(Some(value))
    }

    /// Loads the document, falling back to `T::default()` when there is
    /// nothing to load.
    ///
    /// # Errors
    ///
    /// Propagates every error of [`Collection::load`] except
    /// [`SettingsError::NotFound`].
    pub fn load_or_default<T>(&self) -> SettingsResult<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.load() {
            Ok(value) => Ok(value.unwrap_or_default()),
            Err(err) if err.is_not_found() => {
                debug!(file = %self.file_name, "configuration document not found; using defaults");
                Ok(T::default())
            }
            Err(err) => Err(err),
        }
    }
}

fn read_document(path: &Path) -> SettingsResult<String> {
    let bytes = std::fs::read(path).map_err(|err| io_error(path, err))?;
    document_text(path, bytes)
}
