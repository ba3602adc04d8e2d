// Player records and the player-list CSV loader.
//
// The working set is a fixed list of ranked players read once at startup.
// Columns: name, position, tier, overall_rank. Rows are kept sorted by
// overall rank so downstream stable sorts break ties by rank.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::draft::pick::Position;
use crate::valuation::tiers::tier_count;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A draftable player. Everything except `is_drafted` is fixed for the
/// lifetime of a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    /// Quality bucket within the position; 1 is best.
    pub tier: u32,
    /// Rank across all positions; 1 is best. Unique within the working set.
    pub overall_rank: u32,
    pub is_drafted: bool,
}

impl Player {
    pub fn new(name: &str, position: Position, tier: u32, overall_rank: u32) -> Self {
        Player {
            name: name.to_string(),
            position,
            tier,
            overall_rank,
            is_drafted: false,
        }
    }
}

/// All players at `position`, in input order.
pub fn players_by_position(players: &[Player], position: Position) -> Vec<&Player> {
    players.iter().filter(|p| p.position == position).collect()
}

/// The best `n` undrafted players at `position` by overall rank.
pub fn top_undrafted_by_position(players: &[Player], position: Position, n: usize) -> Vec<&Player> {
    let mut undrafted: Vec<&Player> = players
        .iter()
        .filter(|p| p.position == position && !p.is_drafted)
        .collect();
    undrafted.sort_by_key(|p| p.overall_rank);
    undrafted.truncate(n);
    undrafted
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PlayerLoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// CSV loading
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawPlayer {
    name: String,
    position: String,
    tier: u32,
    overall_rank: u32,
}

fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayer>() {
        match result {
            Ok(raw) => {
                let name = raw.name.trim();
                let Some(position) = Position::from_str_pos(&raw.position) else {
                    warn!("skipping player '{}': unknown position '{}'", name, raw.position);
                    continue;
                };
                if raw.tier == 0 || raw.overall_rank == 0 {
                    warn!("skipping player '{}': tier and overall_rank must be positive", name);
                    continue;
                }
                if raw.tier as usize > tier_count(position) {
                    warn!(
                        "player '{}': {} tier {} is past the last known tier; expect a late round",
                        name, position, raw.tier
                    );
                }
                players.push(Player::new(name, position, raw.tier, raw.overall_rank));
            }
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
            }
        }
    }
    Ok(players)
}

/// Check the uniqueness invariants of a working set: names and overall
/// ranks must not repeat.
pub fn validate_players(players: &[Player]) -> Result<(), PlayerLoadError> {
    let mut names = HashSet::new();
    let mut ranks = HashSet::new();
    for p in players {
        if !names.insert(p.name.as_str()) {
            return Err(PlayerLoadError::Validation(format!(
                "duplicate player name '{}'",
                p.name
            )));
        }
        if !ranks.insert(p.overall_rank) {
            return Err(PlayerLoadError::Validation(format!(
                "duplicate overall rank {} ('{}')",
                p.overall_rank, p.name
            )));
        }
    }
    Ok(())
}

fn finish(mut players: Vec<Player>) -> Result<Vec<Player>, PlayerLoadError> {
    if players.is_empty() {
        return Err(PlayerLoadError::Validation(
            "player CSV produced zero valid rows".into(),
        ));
    }
    validate_players(&players)?;
    players.sort_by_key(|p| p.overall_rank);
    Ok(players)
}

/// Load the player list from a CSV file.
pub fn load_players(path: &Path) -> Result<Vec<Player>, PlayerLoadError> {
    let file = std::fs::File::open(path).map_err(|e| PlayerLoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_players_from_reader(file).map_err(|e| PlayerLoadError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;
    finish(players)
}
