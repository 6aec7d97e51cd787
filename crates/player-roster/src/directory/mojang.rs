//! Blocking HTTP client for the Mojang profile endpoints.
//!
//! Name lookup: `GET {profile_url}/{name}` → `{"id": "...", "name": "..."}`.
//! Id lookup:   `GET {session_url}/{id}`   → `{"id": "...", "name": "...", ...}`.
//!
//! Only a 200 response with a decodable body counts as a hit. Unknown
//! players come back as 204 or 404 depending on the endpoint; both, like
//! every other failure, resolve to `None`.

use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::DirectoryConfig;
use crate::directory::Directory;
use crate::player::PlayerId;

// ── Response bodies ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SessionProfileResponse {
    name: String,
}

// ── MojangDirectory ───────────────────────────────────────────────────────────

/// [`Directory`] backed by the Mojang HTTP API.
pub struct MojangDirectory {
    agent: ureq::Agent,
    config: DirectoryConfig,
}

impl MojangDirectory {
    pub fn new(config: DirectoryConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent, config }
    }

    fn profile_lookup_url(&self, name: &str) -> String {
        join_url(&self.config.profile_url, name)
    }

    fn session_lookup_url(&self, id: &PlayerId) -> String {
        join_url(&self.config.session_url, id.as_str())
    }

    /// GET `url` and decode a 200 body as `T`.
    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        debug!("directory lookup: GET {url}");
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                debug!("directory lookup {url} returned HTTP {status}");
                return None;
            }
            Err(ureq::Error::Transport(transport)) => {
                warn!("directory lookup {url} failed: {transport}");
                return None;
            }
        };

        let status = response.status();
        if status != 200 {
            debug!("directory lookup {url} returned HTTP {status}");
            return None;
        }

        match serde_json::from_reader(response.into_reader()) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("directory lookup {url} returned an unreadable body: {e}");
                None
            }
        }
    }
}

impl Directory for MojangDirectory {
    fn resolve_id(&self, name: &str) -> Option<PlayerId> {
        self.fetch::<ProfileResponse>(&self.profile_lookup_url(name))
            .map(|profile| PlayerId::new(profile.id))
    }

    fn resolve_name(&self, id: &PlayerId) -> Option<String> {
        self.fetch::<SessionProfileResponse>(&self.session_lookup_url(id))
            .map(|profile| profile.name)
    }
}

fn join_url(base: &str, segment: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), segment)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
