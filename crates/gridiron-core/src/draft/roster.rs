// Roster buckets, slot requirements, and remaining-needs accounting.

use serde::{Deserialize, Serialize};

use super::pick::Position;
use crate::player::Player;

// ---------------------------------------------------------------------------
// Requirements
// ---------------------------------------------------------------------------

/// Starting slots per position, plus one flex slot shared by RB/WR/TE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterRequirements {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    pub flex: usize,
}

impl RosterRequirements {
    pub fn for_position(&self, position: Position) -> usize {
        match position {
            Position::Quarterback => self.qb,
            Position::RunningBack => self.rb,
            Position::WideReceiver => self.wr,
            Position::TightEnd => self.te,
        }
    }

    /// Slots the RB/WR/TE pool must cover, flex included.
    pub fn flex_pool(&self) -> usize {
        self.rb + self.wr + self.te + self.flex
    }
}

pub const ROSTER_REQUIREMENTS: RosterRequirements = RosterRequirements {
    qb: 1,
    rb: 2,
    wr: 2,
    te: 1,
    flex: 1,
};

/// Depth targets that cover bye weeks. A third RB and a fourth WR are worth
/// chasing even after the starting slots are filled.
pub const RB_DEPTH_TARGET: usize = 3;
pub const WR_DEPTH_TARGET: usize = 4;

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// The user's drafted players, grouped into one bucket per position plus a
/// bench bucket for overflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub qb: Vec<Player>,
    pub rb: Vec<Player>,
    pub wr: Vec<Player>,
    pub te: Vec<Player>,
    pub bench: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// The position bucket (never the bench).
    pub fn bucket(&self, position: Position) -> &[Player] {
        match position {
            Position::Quarterback => &self.qb,
            Position::RunningBack => &self.rb,
            Position::WideReceiver => &self.wr,
            Position::TightEnd => &self.te,
        }
    }

    fn bucket_mut(&mut self, position: Position) -> &mut Vec<Player> {
        match position {
            Position::Quarterback => &mut self.qb,
            Position::RunningBack => &mut self.rb,
            Position::WideReceiver => &mut self.wr,
            Position::TightEnd => &mut self.te,
        }
    }

    /// Players in the position bucket. Bench players are not counted.
    pub fn count(&self, position: Position) -> usize {
        self.bucket(position).len()
    }

    /// Add a drafted player.
    ///
    /// The player goes into its position bucket while that bucket holds fewer
    /// than the position requirement, and onto the bench otherwise. Returns
    /// `true` if the player landed in the position bucket.
    pub fn add_player(&mut self, player: Player) -> bool {
        let position = player.position;
        if self.count(position) < ROSTER_REQUIREMENTS.for_position(position) {
            self.bucket_mut(position).push(player);
            true
        } else {
            self.bench.push(player);
            false
        }
    }

    /// Remove a player by overall rank from every bucket, bench included.
    ///
    /// The roster does not remember which bucket a pick went to, so every
    /// bucket is scanned. Returns `true` if anything was removed.
    pub fn remove_by_rank(&mut self, overall_rank: u32) -> bool {
        let before = self.len();
        for bucket in [
            &mut self.qb,
            &mut self.rb,
            &mut self.wr,
            &mut self.te,
            &mut self.bench,
        ] {
            bucket.retain(|p| p.overall_rank != overall_rank);
        }
        self.len() != before
    }

    /// Whether any bucket holds the player with this overall rank.
    pub fn contains(&self, overall_rank: u32) -> bool {
        self.iter().any(|p| p.overall_rank == overall_rank)
    }

    /// All rostered players: position buckets in display order, then bench.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.qb
            .iter()
            .chain(self.rb.iter())
            .chain(self.wr.iter())
            .chain(self.te.iter())
            .chain(self.bench.iter())
    }

    pub fn len(&self) -> usize {
        self.qb.len() + self.rb.len() + self.wr.len() + self.te.len() + self.bench.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Needs
// ---------------------------------------------------------------------------

/// Starting slots still unfilled, per position and for the flex slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterNeeds {
    pub qb: usize,
    pub rb: usize,
    pub wr: usize,
    pub te: usize,
    pub flex: usize,
}

impl RosterNeeds {
    pub fn for_position(&self, position: Position) -> usize {
        match position {
            Position::Quarterback => self.qb,
            Position::RunningBack => self.rb,
            Position::WideReceiver => self.wr,
            Position::TightEnd => self.te,
        }
    }
}

/// Compute remaining needs for a roster.
///
/// Flex need compares the combined RB/WR/TE bucket counts against the
/// combined requirement including the flex slot, so a flex need can remain
/// after every positional minimum is met.
pub fn roster_needs(roster: &Roster) -> RosterNeeds {
    let req = &ROSTER_REQUIREMENTS;
    let flex_supply: usize = Position::ALL
        .iter()
        .filter(|p| p.is_flex_eligible())
        .map(|&p| roster.count(p))
        .sum();

    RosterNeeds {
        qb: req.qb.saturating_sub(roster.qb.len()),
        rb: req.rb.saturating_sub(roster.rb.len()),
        wr: req.wr.saturating_sub(roster.wr.len()),
        te: req.te.saturating_sub(roster.te.len()),
        flex: req.flex_pool().saturating_sub(flex_supply),
    }
}
