//! Line encodings for the roster store and the bulk-import list.
//!
//! Store line, one per player:
//! ```text
//! <id>|<name1>,<name2>,...,<nameN>|<reason-or-empty>
//! ```
//! The line is split on `|` at most twice, so the reason may itself
//! contain `|`. An empty reason field means "no reason".
//!
//! Bulk-import line, one per player to add:
//! ```text
//! <name1>,<name2>,...,<nameN>[|<reason>]
//! ```
//! Split on `|` at most once. The last name in the chain is the one
//! resolved against the directory.
//!
//! Neither format has an escape mechanism, so ids and names may not contain
//! `|`, `,` or line breaks and reasons may not contain line breaks. The
//! `validate_*` functions enforce this before a value reaches the roster.

use crate::error::{Result, RosterError};
use crate::player::{Player, PlayerId};

const FIELD_SEPARATOR: char = '|';
const NAME_SEPARATOR: char = ',';

// ── Validation ────────────────────────────────────────────────────────────────

fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

fn validate_token(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains([FIELD_SEPARATOR, NAME_SEPARATOR]) || has_line_break(value)
    {
        return Err(RosterError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Check that `id` can be written to a store line.
pub fn validate_id(id: &PlayerId) -> Result<()> {
    validate_token("id", id.as_str())
}

/// Check that `name` can be written as part of a name chain.
pub fn validate_name(name: &str) -> Result<()> {
    validate_token("name", name)
}

/// Check that `reason` can be written as the last field of a store line.
pub fn validate_reason(reason: &str) -> Result<()> {
    if has_line_break(reason) {
        return Err(RosterError::InvalidField {
            field: "reason",
            value: reason.to_string(),
        });
    }
    Ok(())
}

/// Map an empty reason to no reason.
pub fn normalize_reason(reason: Option<String>) -> Option<String> {
    reason.filter(|r| !r.is_empty())
}

// ── Store lines ───────────────────────────────────────────────────────────────

/// Encode one player as a store line (without line terminator).
pub fn encode_player(player: &Player) -> String {
    format!(
        "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
        player.id,
        player.names().join(","),
        player.reason().unwrap_or("")
    )
}

/// Decode one store line. `line_no` is 1-based and only used for errors.
pub fn decode_player(line: &str, line_no: usize) -> Result<Player> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let malformed = |reason: &str| RosterError::MalformedRecord {
        line: line_no,
        reason: reason.to_string(),
    };

    let mut fields = line.splitn(3, FIELD_SEPARATOR);
    let (id, names, reason) = match (fields.next(), fields.next(), fields.next()) {
        (Some(id), Some(names), Some(reason)) => (id, names, reason),
        _ => return Err(malformed("expected <id>|<names>|<reason>")),
    };

    if id.is_empty() {
        return Err(malformed("empty id"));
    }

    let names: Vec<String> = names.split(NAME_SEPARATOR).map(str::to_string).collect();
    if names.iter().any(String::is_empty) {
        return Err(malformed("empty name in name chain"));
    }

    let reason = normalize_reason(Some(reason.to_string()));
    Player::with_history(PlayerId::new(id), names, reason)
}

/// Encode a whole roster: one line per player, `\n` separated, no trailing newline.
pub fn encode_roster(players: &[Player]) -> String {
    players
        .iter()
        .map(encode_player)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode a whole store file. Blank lines are skipped; the first malformed
/// line or repeated id aborts the decode.
pub fn decode_roster(text: &str) -> Result<Vec<Player>> {
    let mut players: Vec<Player> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let player = decode_player(line, idx + 1)?;
        if players.iter().any(|p| p.same_identity(&player)) {
            return Err(RosterError::MalformedRecord {
                line: idx + 1,
                reason: format!("duplicate id {}", player.id),
            });
        }
        players.push(player);
    }

    Ok(players)
}

// ── Bulk-import lines ─────────────────────────────────────────────────────────

/// One decoded bulk-import line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry {
    /// Name chain, oldest first. Never empty.
    pub names: Vec<String>,
    pub reason: Option<String>,
}

impl BulkEntry {
    /// The name to resolve against the directory.
    pub fn current_name(&self) -> &str {
        &self.names[self.names.len() - 1]
    }
}

/// Decode one bulk-import line. Surrounding whitespace on names is ignored.
pub fn decode_bulk_line(line: &str, line_no: usize) -> Result<BulkEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (names, reason) = match line.split_once(FIELD_SEPARATOR) {
        Some((names, reason)) => (names, normalize_reason(Some(reason.to_string()))),
        None => (line, None),
    };

    let names: Vec<String> = names
        .split(NAME_SEPARATOR)
        .map(|n| n.trim().to_string())
        .collect();

    if names.iter().any(String::is_empty) {
        return Err(RosterError::MalformedRecord {
            line: line_no,
            reason: "empty name in name chain".to_string(),
        });
    }

    Ok(BulkEntry { names, reason })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
