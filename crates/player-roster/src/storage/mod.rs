//! Storage layer for the player roster.
//!
//! The roster is persisted as a flat text file, one player per line, and
//! rewritten in full on every mutation.
//!
//! # Modules
//!
//! - [`codec`] — store-line and bulk-import-line encodings.
//! - [`roster_store`] — the in-memory roster and its queries and mutations.

pub mod codec;
pub mod roster_store;

pub use codec::BulkEntry;
pub use roster_store::{
    AddOutcome, BulkReport, ReasonOutcome, ReconcileReport, Rename, RosterStore,
};
