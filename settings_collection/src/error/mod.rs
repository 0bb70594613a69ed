//! Error types produced while building and loading a collection.

mod constructors;
mod types;

pub use types::SettingsError;

pub(crate) use constructors::{decode_error, io_error};

/// Result alias used throughout the crate.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests;
