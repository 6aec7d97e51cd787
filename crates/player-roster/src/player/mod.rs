//! Player records — the tracked identities of the roster.
//!
//! A [`Player`] is keyed by its [`PlayerId`] and carries the display
//! names observed for that id, oldest first.

pub mod record;

pub use record::{Player, PlayerId, PlayerRef};
