//! Test helpers shared across the workspace.
//!
//! [`cwd`] serialises changes to the process working directory, which the
//! working-directory fallback candidate depends on. [`fixture`] writes
//! configuration documents into temporary trees.

pub mod cwd;
pub mod fixture;
