//! Roster store — the owned, ordered collection of tracked players.
//!
//! A `RosterStore` is loaded from its file once, mutated in memory and
//! written back in full. Every mutating operation that changes the roster
//! saves before returning; operations that end in a duplicate, a not-found
//! or an unresolved lookup leave both memory and file untouched.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::directory::Directory;
use crate::error::Result;
use crate::player::{Player, PlayerId, PlayerRef};
use crate::storage::codec::{self, BulkEntry};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of [`RosterStore::add_player`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The player was appended and the roster saved.
    Added(PlayerId),
    /// A player with the resolved id is already listed.
    Duplicate { name: String, id: PlayerId },
    /// The directory had no id for the name.
    Unresolved { name: String },
}

/// Result of [`RosterStore::change_reason`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonOutcome {
    Updated,
    NotFound(PlayerRef),
}

/// Per-line results of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    /// Ids appended to the roster, in file order.
    pub added: Vec<PlayerId>,
    /// Current names whose id was already listed.
    pub duplicates: Vec<String>,
    /// Current names the directory could not resolve.
    pub unresolved: Vec<String>,
    /// `(line number, problem)` for lines that could not be decoded.
    pub invalid: Vec<(usize, String)>,
}

/// One name appended during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub id: PlayerId,
    pub from: String,
    pub to: String,
}

/// Results of [`RosterStore::reconcile_names`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub renamed: Vec<Rename>,
    /// Ids the directory returned no usable name for.
    pub unresolved: Vec<PlayerId>,
}

impl ReconcileReport {
    /// Whether any history grew.
    pub fn changed(&self) -> bool {
        !self.renamed.is_empty()
    }
}

// ── RosterStore ───────────────────────────────────────────────────────────────

/// File-backed roster of players.
///
/// Safe for single-process use only; two processes saving the same file
/// will overwrite each other.
#[derive(Debug)]
pub struct RosterStore {
    path: PathBuf,
    players: Vec<Player>,
}

impl RosterStore {
    /// Open the roster stored at `path`.
    ///
    /// A missing file is an empty roster; the file is created on first save.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Io` if the file exists but cannot be read, or
    /// `RosterError::MalformedRecord` for the first line that fails to decode.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            path: path.into(),
            players: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read the file, replacing the in-memory roster.
    ///
    /// On error the in-memory roster is left as it was.
    pub fn load(&mut self) -> Result<()> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no roster at {}, starting empty", self.path.display());
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        self.players = codec::decode_roster(&text)?;
        debug!(
            "loaded {} player(s) from {}",
            self.players.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Overwrite the file with the current roster.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, codec::encode_roster(&self.players))?;
        debug!(
            "saved {} player(s) to {}",
            self.players.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All players in roster order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn find_by_id(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Find the player whose most recent name is `name`. Older names do not match.
    pub fn find_by_current_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.current_name() == name)
    }

    pub fn find(&self, target: &PlayerRef) -> Option<&Player> {
        self.position(target).map(|idx| &self.players[idx])
    }

    fn position(&self, target: &PlayerRef) -> Option<usize> {
        match target {
            PlayerRef::Id(id) => self.players.iter().position(|p| &p.id == id),
            PlayerRef::Name(name) => self.players.iter().position(|p| p.current_name() == name),
        }
    }

    fn contains_id(&self, id: &PlayerId) -> bool {
        self.find_by_id(id).is_some()
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Resolve `name` and add it as a new player.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidField` if `name` or `reason` cannot be
    /// stored, or `RosterError::Io` if the save fails.
    pub fn add_player(
        &mut self,
        directory: &dyn Directory,
        name: &str,
        reason: Option<String>,
    ) -> Result<AddOutcome> {
        codec::validate_name(name)?;
        let reason = codec::normalize_reason(reason);
        if let Some(r) = &reason {
            codec::validate_reason(r)?;
        }

        let Some(id) = resolve_storable_id(directory, name) else {
            return Ok(AddOutcome::Unresolved {
                name: name.to_string(),
            });
        };

        if self.contains_id(&id) {
            return Ok(AddOutcome::Duplicate {
                name: name.to_string(),
                id,
            });
        }

        self.players.push(Player::new(id.clone(), name, reason));
        self.save()?;
        Ok(AddOutcome::Added(id))
    }

    /// Import every line of the bulk file at `source`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Io` if `source` cannot be read or the save fails.
    pub fn bulk_add_players(
        &mut self,
        directory: &dyn Directory,
        source: &Path,
    ) -> Result<BulkReport> {
        let text = std::fs::read_to_string(source)?;
        self.bulk_add_from_str(directory, &text)
    }

    /// Import bulk-format `text`. Bad, duplicate and unresolved lines are
    /// skipped; the roster is saved once at the end if anything was added.
    pub fn bulk_add_from_str(
        &mut self,
        directory: &dyn Directory,
        text: &str,
    ) -> Result<BulkReport> {
        let mut report = BulkReport::default();

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let entry = match decode_storable_entry(line, line_no) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping bulk line {line_no}: {e}");
                    report.invalid.push((line_no, e.to_string()));
                    continue;
                }
            };

            let current = entry.current_name().to_string();
            let Some(id) = resolve_storable_id(directory, &current) else {
                report.unresolved.push(current);
                continue;
            };

            if self.contains_id(&id) {
                report.duplicates.push(current);
                continue;
            }

            self.players
                .push(Player::with_history(id.clone(), entry.names, entry.reason)?);
            report.added.push(id);
        }

        if !report.added.is_empty() {
            self.save()?;
        }
        Ok(report)
    }

    /// Remove the player whose current name is `name`.
    ///
    /// Returns the removed player, or `None` if nobody currently has that name.
    pub fn remove_player(&mut self, name: &str) -> Result<Option<Player>> {
        let Some(idx) = self.position(&PlayerRef::Name(name.to_string())) else {
            return Ok(None);
        };
        let removed = self.players.remove(idx);
        self.save()?;
        Ok(Some(removed))
    }

    /// Set the reason of the player identified by `identifier`.
    ///
    /// `identifier` is read as an id when it is exactly 32 characters long and
    /// as a current name otherwise (see [`PlayerRef::parse`]). An empty reason
    /// clears it.
    pub fn change_reason(
        &mut self,
        identifier: &str,
        reason: Option<String>,
    ) -> Result<ReasonOutcome> {
        let reason = codec::normalize_reason(reason);
        if let Some(r) = &reason {
            codec::validate_reason(r)?;
        }

        let target = PlayerRef::parse(identifier);
        let Some(idx) = self.position(&target) else {
            return Ok(ReasonOutcome::NotFound(target));
        };

        self.players[idx].set_reason(reason);
        self.save()?;
        Ok(ReasonOutcome::Updated)
    }

    /// Ask the directory for every player's current name and append the ones
    /// that changed. Saves if any history grew.
    pub fn reconcile_names(&mut self, directory: &dyn Directory) -> Result<ReconcileReport> {
        let mut report = ReconcileReport::default();

        for player in &mut self.players {
            let resolved = directory
                .resolve_name(&player.id)
                .filter(|name| match codec::validate_name(name) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("ignoring directory name for {}: {e}", player.id);
                        false
                    }
                });

            let Some(name) = resolved else {
                report.unresolved.push(player.id.clone());
                continue;
            };

            let from = player.current_name().to_string();
            if player.observe_name(&name) {
                debug!("{} renamed {from} -> {name}", player.id);
                report.renamed.push(Rename {
                    id: player.id.clone(),
                    from,
                    to: name,
                });
            }
        }

        if report.changed() {
            self.save()?;
        }
        Ok(report)
    }

    /// Reconcile names, then return the whole roster for display.
    pub fn list_all_players(
        &mut self,
        directory: &dyn Directory,
    ) -> Result<(ReconcileReport, &[Player])> {
        let report = self.reconcile_names(directory)?;
        Ok((report, &self.players))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Resolve `name`, discarding ids that could not be written back out.
fn resolve_storable_id(directory: &dyn Directory, name: &str) -> Option<PlayerId> {
    let id = directory.resolve_id(name)?;
    match codec::validate_id(&id) {
        Ok(()) => Some(id),
        Err(e) => {
            warn!("ignoring directory id for {name}: {e}");
            None
        }
    }
}

fn decode_storable_entry(line: &str, line_no: usize) -> Result<BulkEntry> {
    let entry = codec::decode_bulk_line(line, line_no)?;
    for name in &entry.names {
        codec::validate_name(name)?;
    }
    if let Some(r) = &entry.reason {
        codec::validate_reason(r)?;
    }
    Ok(entry)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
