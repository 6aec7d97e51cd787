//! Player directory — resolve names to ids and ids to current names.
//!
//! The [`Directory`] trait is the only seam between the roster and the
//! outside world. A lookup either yields a value or nothing: "not found",
//! a non-success status and a transport failure all look the same to the
//! caller, and nothing is retried.
//!
//! # Implementations
//!
//! - [`MojangDirectory`] — blocking HTTP client for the Mojang profile API.
//! - [`StaticDirectory`] — in-memory table, for tests and offline use.

pub mod memory;
pub mod mojang;

pub use memory::StaticDirectory;
pub use mojang::MojangDirectory;

use crate::player::PlayerId;

/// Name ↔ id resolution against an external player directory.
pub trait Directory {
    /// Look up the id currently owning `name`.
    fn resolve_id(&self, name: &str) -> Option<PlayerId>;

    /// Look up the current display name of `id`.
    fn resolve_name(&self, id: &PlayerId) -> Option<String>;
}
