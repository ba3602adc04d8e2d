// Pick tracking: positions, round/pick numbering, and snake-draft turn order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Football positions that carry a tier table and a roster bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "qb")]
    Quarterback,
    #[serde(rename = "rb")]
    RunningBack,
    #[serde(rename = "wr")]
    WideReceiver,
    #[serde(rename = "te")]
    TightEnd,
}

impl Position {
    /// Every position, in roster display order.
    pub const ALL: [Position; 4] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
    ];

    /// Parse a position abbreviation ("QB", "rb", ...). Case-insensitive.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            _ => None,
        }
    }

    /// Return the display abbreviation for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
        }
    }

    /// Whether this position can fill the flex slot.
    pub fn is_flex_eligible(&self) -> bool {
        !matches!(self, Position::Quarterback)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Round / pick numbering
// ---------------------------------------------------------------------------

/// A 1-based (round, pick-within-round) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickSlot {
    pub round: u32,
    pub pick: u32,
}

/// Convert the number of completed picks into the slot about to be made.
///
/// `num_teams` of zero is treated as one; the settings layer rejects it
/// before it gets here. The round saturates at `u32::MAX`.
pub fn round_and_pick(total_picks_made: u32, num_teams: u32) -> PickSlot {
    let teams = num_teams.max(1);
    PickSlot {
        round: (total_picks_made / teams).saturating_add(1),
        pick: total_picks_made % teams + 1,
    }
}

/// Whether the slot belongs to the user under snake ordering.
///
/// Odd rounds run 1..N, even rounds run N..1.
pub fn is_user_turn(round: u32, pick: u32, user_pos: u32, num_teams: u32) -> bool {
    if round % 2 == 1 {
        pick == user_pos
    } else {
        u64::from(pick) + u64::from(user_pos) == u64::from(num_teams) + 1
    }
}

/// Zero-based overall index of the user's slot in `round`.
fn user_slot_index(round: u64, user_pos: u64, teams: u64) -> u64 {
    let in_round = if round % 2 == 1 {
        user_pos
    } else {
        teams + 1 - user_pos
    };
    (round - 1) * teams + in_round - 1
}

/// Count the picks between the given slot and the user's next turn.
///
/// Returns 0 when the given slot is already the user's. Otherwise the user
/// picks again within `2 * num_teams - 2` picks. An out-of-range `user_pos`
/// (a broken caller contract) returns the `2 * num_teams` cap, saturated
/// to `u32::MAX`.
pub fn picks_until_next_turn(round: u32, pick: u32, user_pos: u32, num_teams: u32) -> u32 {
    if is_user_turn(round, pick, user_pos, num_teams) {
        return 0;
    }

    let teams = u64::from(num_teams.max(1));
    let cap = 2 * teams;
    let user_pos = u64::from(user_pos);
    let steps = if user_pos == 0 || user_pos > teams {
        cap
    } else {
        let round = u64::from(round.max(1));
        let current = (round - 1) * teams + u64::from(pick).clamp(1, teams) - 1;
        let this_round = user_slot_index(round, user_pos, teams);
        let next = if this_round > current {
            this_round
        } else {
            user_slot_index(round + 1, user_pos, teams)
        };
        (next - current).min(cap)
    };

    u32::try_from(steps).unwrap_or(u32::MAX)
}
