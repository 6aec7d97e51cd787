//! Player roster — track players by stable id with a history of display names.
//!
//! Provides the in-memory roster, its flat-file persistence, name
//! reconciliation against an external player directory, and the
//! bulk-import format used to seed a roster from a list of name chains.

pub mod config;
pub mod directory;
pub mod error;
pub mod player;
pub mod storage;

// Re-export primary types
pub use config::{DirectoryConfig, RosterConfig};
pub use directory::{Directory, MojangDirectory, StaticDirectory};
pub use error::{Result, RosterError};
pub use player::{Player, PlayerId, PlayerRef};
pub use storage::{AddOutcome, BulkReport, ReasonOutcome, ReconcileReport, RosterStore};
