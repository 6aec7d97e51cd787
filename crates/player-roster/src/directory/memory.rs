//! In-memory directory backed by two hash maps.

use std::collections::HashMap;

use crate::directory::Directory;
use crate::player::PlayerId;

/// A fixed name ↔ id table.
///
/// Renames are modelled with [`StaticDirectory::rename`]: the id keeps
/// resolving, its old name stops resolving.
#[derive(Debug, Default, Clone)]
pub struct StaticDirectory {
    by_name: HashMap<String, PlayerId>,
    by_id: HashMap<PlayerId, String>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StaticDirectory::insert`].
    pub fn with(mut self, name: &str, id: &str) -> Self {
        self.insert(name, PlayerId::new(id));
        self
    }

    /// Register `name` as the current name of `id`.
    pub fn insert(&mut self, name: &str, id: PlayerId) {
        if let Some(old) = self.by_id.insert(id.clone(), name.to_string()) {
            self.by_name.remove(&old);
        }
        self.by_name.insert(name.to_string(), id);
    }

    /// Give `id` a new current name. Unknown ids are ignored.
    pub fn rename(&mut self, id: &PlayerId, new_name: &str) {
        if self.by_id.contains_key(id) {
            self.insert(new_name, id.clone());
        }
    }

    /// Forget `id` entirely, as if the account no longer existed.
    pub fn remove(&mut self, id: &PlayerId) {
        if let Some(name) = self.by_id.remove(id) {
            self.by_name.remove(&name);
        }
    }
}

impl Directory for StaticDirectory {
    fn resolve_id(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).cloned()
    }

    fn resolve_name(&self, id: &PlayerId) -> Option<String> {
        self.by_id.get(id).cloned()
    }
}
