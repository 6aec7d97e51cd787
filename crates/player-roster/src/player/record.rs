//! Player record and identifier types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// Stable identifier of a player in the external directory.
///
/// Format: 32 hexadecimal characters (an undashed UUID). The value is
/// treated as opaque; only its length is ever inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Length of a directory id in characters.
    pub const LEN: usize = 32;

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `s` has the length of a directory id.
    ///
    /// This is a heuristic: a 32-character display name is indistinguishable
    /// from an id.
    pub fn looks_like_id(s: &str) -> bool {
        s.chars().count() == Self::LEN
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-supplied reference to a player: either an id or a current name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRef {
    Id(PlayerId),
    Name(String),
}

impl PlayerRef {
    /// Classify a name-or-id argument by length.
    ///
    /// Exactly [`PlayerId::LEN`] characters is an id, anything else a name.
    pub fn parse(identifier: &str) -> Self {
        if PlayerId::looks_like_id(identifier) {
            PlayerRef::Id(PlayerId::new(identifier))
        } else {
            PlayerRef::Name(identifier.to_string())
        }
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerRef::Id(id) => write!(f, "UUID {id}"),
            PlayerRef::Name(name) => write!(f, "{name}"),
        }
    }
}

/// One tracked player.
///
/// Equality and hashing consider the id only; two records with the same id
/// are the same player whatever their names or reason.
#[derive(Debug, Clone)]
pub struct Player {
    /// Directory id. Never changes once the record exists.
    pub id: PlayerId,
    /// Observed display names, oldest first. Never empty.
    names: Vec<String>,
    /// Free-text annotation.
    reason: Option<String>,
}

impl Player {
    /// Create a player known by a single name.
    pub fn new(id: PlayerId, name: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            id,
            names: vec![name.into()],
            reason,
        }
    }

    /// Create a player from a name chain, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::EmptyHistory` if `names` is empty.
    pub fn with_history(id: PlayerId, names: Vec<String>, reason: Option<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(RosterError::EmptyHistory);
        }
        Ok(Self { id, names, reason })
    }

    /// The most recently observed display name.
    pub fn current_name(&self) -> &str {
        // `names` is never empty
        &self.names[self.names.len() - 1]
    }

    /// Every name before the current one, oldest first.
    pub fn previous_names(&self) -> &[String] {
        &self.names[..self.names.len() - 1]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn set_reason(&mut self, reason: Option<String>) {
        self.reason = reason;
    }

    /// Record `name` as the current name if it differs from the last one seen.
    ///
    /// Returns `true` when the history grew.
    pub fn observe_name(&mut self, name: &str) -> bool {
        if name == self.current_name() {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Whether `other` is the same player.
    pub fn same_identity(&self, other: &Player) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Current Name: {}, Previous Names: {:?}, UUID: {}, Reason: {}",
            self.current_name(),
            self.previous_names(),
            self.id,
            self.reason.as_deref().unwrap_or("none")
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
