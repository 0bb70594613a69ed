//! Document decoding selected by file extension.
//!
//! YAML is the native format of a collection and is decoded straight into
//! the target type with `serde-saphyr`, so nulls, non-string map keys and
//! enum variants follow the target's `serde` implementation. TOML and JSON
//! documents are understood when the matching cargo feature is enabled and
//! go through `figment`, which only accepts string map keys. Any other or
//! missing extension is read as YAML.

use std::path::Path;

#[cfg(any(feature = "toml", feature = "json"))]
use figment::{Figment, providers::Format as _};
use serde::de::{
    DeserializeOwned,
    value::{Error as ValueError, MapDeserializer},
};
use serde_saphyr::Options;

use crate::SettingsResult;
use crate::error::decode_error;

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
    #[cfg(feature = "json")]
    Json,
}

impl Format {
    /// Chooses the format for `path` from its extension.
    pub(crate) fn for_path(path: &Path) -> SettingsResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => {
                #[cfg(feature = "toml")]
                {
                    Ok(Self::Toml)
                }
                #[cfg(not(feature = "toml"))]
                {
                    Err(unsupported(path, "toml"))
                }
            }
            Some("json") => {
                #[cfg(feature = "json")]
                {
                    Ok(Self::Json)
                }
                #[cfg(not(feature = "json"))]
                {
                    Err(unsupported(path, "json"))
                }
            }
            _ => Ok(Self::Yaml),
        }
    }
}

#[cfg(any(not(feature = "toml"), not(feature = "json")))]
fn unsupported(path: &Path, extension: &str) -> crate::SettingsError {
    crate::SettingsError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: extension.to_owned(),
    }
}

/// Returns `true` for a document with nothing but whitespace.
pub(crate) fn is_blank(contents: &str) -> bool {
    contents.trim().is_empty()
}

/// Decodes `contents` read from `path` into a fresh `T`.
///
/// A blank document decodes as an empty mapping in every format.
pub(crate) fn decode<T>(path: &Path, contents: &str) -> SettingsResult<T>
where
    T: DeserializeOwned,
{
    if is_blank(contents) {
        return decode_empty(path);
    }
    match Format::for_path(path)? {
        Format::Yaml => decode_yaml(path, contents),
        #[cfg(feature = "toml")]
        Format::Toml => Figment::from(figment::providers::Toml::string(contents))
            .extract()
            .map_err(|err| decode_error(path, err)),
        #[cfg(feature = "json")]
        Format::Json => Figment::from(figment::providers::Json::string(contents))
            .extract()
            .map_err(|err| decode_error(path, err)),
    }
}

fn decode_yaml<T>(path: &Path, contents: &str) -> SettingsResult<T>
where
    T: DeserializeOwned,
{
    serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map_err(|err| decode_error(path, format!("failed to parse YAML: {err}")))
}

fn decode_empty<T>(path: &Path) -> SettingsResult<T>
where
    T: DeserializeOwned,
{
    let empty = MapDeserializer::<_, ValueError>::new(std::iter::empty::<(String, String)>());
    T::deserialize(empty).map_err(|err| decode_error(path, err))
}

/// Converts raw document bytes to text.
pub(crate) fn document_text(path: &Path, bytes: Vec<u8>) -> SettingsResult<String> {
    String::from_utf8(bytes)
        .map_err(|err| decode_error(path, format!("document is not valid UTF-8: {err}")))
}

#[cfg(test)]
mod tests;
