//! Runtime configuration for the roster and the directory client.
//!
//! Defaults match the public Mojang endpoints and a `player_list.txt`
//! store in the working directory.

use std::path::PathBuf;

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "player_list.txt";

/// Name → profile lookup endpoint.
pub const DEFAULT_PROFILE_URL: &str = "https://api.mojang.com/users/profiles/minecraft";

/// Id → profile lookup endpoint.
pub const DEFAULT_SESSION_URL: &str = "https://sessionserver.mojang.com/session/minecraft/profile";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the roster is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub store_path: PathBuf,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

/// Connection settings for [`crate::directory::MojangDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL for name lookups; the name is appended as a path segment.
    pub profile_url: String,
    /// Base URL for id lookups; the id is appended as a path segment.
    pub session_url: String,
    /// Connect/read timeout per request, in seconds.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            profile_url: DEFAULT_PROFILE_URL.to_string(),
            session_url: DEFAULT_SESSION_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("player-roster/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Same endpoints, different timeout. A zero timeout is raised to one second.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs.max(1);
        self
    }
}
