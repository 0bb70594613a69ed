//! Discovery and loading of a named configuration document.
//!
//! A [`Collection`] names one document (for example `settings.yaml` in the
//! `testapp` group) and the ordered filesystem locations where it may live.
//! On Unix-like hosts those are `/etc/<group>/`, `~/.<group>/` and the
//! working directory; on Windows `~\<group>\` and the working directory.
//! Loading stats every candidate, reads the selected file and decodes it into
//! any `serde` type.
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use settings_collection::Collection;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct Server {
//!     address: String,
//!     port: u16,
//! }
//!
//! # fn main() -> settings_collection::SettingsResult<()> {
//! let collection = Collection::new("testapp", "settings")?;
//! let server: Server = collection.load_or_default()?;
//! # let _ = server;
//! # Ok(())
//! # }
//! ```

mod collection;
mod error;
mod format;
mod host;

pub use collection::{Collection, CollectionBuilder, DEFAULT_EXTENSION, MatchPolicy};
pub use error::{SettingsError, SettingsResult};
pub use host::{FixedHost, HostEnvironment, OsFamily, SystemHost};
