// Player value scoring.
//
// score = baseline * scarcity * needs * early_round + rank_bonus
//
// The baseline rewards taking a player later than his tier usually goes. The
// three multipliers scale that reward; the rank bonus adds a small edge for
// elite overall ranks so players with no baseline still order sensibly.

use serde::Serialize;

use crate::draft::pick::Position;
use crate::draft::roster::{roster_needs, Roster, RosterNeeds, RB_DEPTH_TARGET, WR_DEPTH_TARGET};
use crate::player::Player;
use crate::valuation::scarcity::{positional_scarcity, PositionalScarcity};
use crate::valuation::tiers::expected_round;

/// Overall rank a third running back must reach to be worth a depth bump.
pub const RB_DEPTH_RANK_CUTOFF: u32 = 87;

/// Rounds (inclusive) in which top-two-tier players get the early bonus.
pub const EARLY_ROUND_LIMIT: u32 = 3;

// ---------------------------------------------------------------------------
// Breakdown
// ---------------------------------------------------------------------------

/// Every factor that went into a player's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueBreakdown {
    pub expected_round: f64,
    pub baseline: f64,
    pub scarcity_multiplier: f64,
    pub needs_multiplier: f64,
    pub early_round_bonus: f64,
    pub rank_bonus: f64,
    pub score: f64,
    pub scarcity: PositionalScarcity,
}

// ---------------------------------------------------------------------------
// Needs multipliers, one rule per position
// ---------------------------------------------------------------------------

/// Quarterbacks: a big tier drop-off after the elite two tiers.
fn quarterback_multiplier(player: &Player, needs: &RosterNeeds) -> f64 {
    if needs.qb == 0 {
        return 1.0;
    }
    if player.tier <= 2 {
        1.6
    } else {
        1.3
    }
}

/// Tight ends: only the top tier separates from the pack.
fn tight_end_multiplier(player: &Player, needs: &RosterNeeds) -> f64 {
    if needs.te == 0 {
        return 1.0;
    }
    if player.tier <= 1 {
        1.8
    } else {
        1.2
    }
}

/// Running backs: starters and flex first, then a third back for bye weeks
/// if he is good enough to start.
fn running_back_multiplier(player: &Player, needs: &RosterNeeds, roster: &Roster) -> f64 {
    if needs.rb > 0 || needs.flex > 0 {
        1.4
    } else if roster.count(Position::RunningBack) < RB_DEPTH_TARGET
        && player.overall_rank <= RB_DEPTH_RANK_CUTOFF
    {
        1.3
    } else {
        1.0
    }
}

/// Wide receivers: starters and flex first, then general depth.
fn wide_receiver_multiplier(needs: &RosterNeeds, roster: &Roster) -> f64 {
    if needs.wr > 0 || needs.flex > 0 {
        1.4
    } else if roster.count(Position::WideReceiver) < WR_DEPTH_TARGET {
        1.1
    } else {
        1.0
    }
}

/// Roster-needs multiplier for a player, dispatched on his position.
pub fn needs_multiplier(player: &Player, needs: &RosterNeeds, roster: &Roster) -> f64 {
    match player.position {
        Position::Quarterback => quarterback_multiplier(player, needs),
        Position::TightEnd => tight_end_multiplier(player, needs),
        Position::RunningBack => running_back_multiplier(player, needs, roster),
        Position::WideReceiver => wide_receiver_multiplier(needs, roster),
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Small additive edge for elite overall ranks; zero from rank 200 on.
pub fn rank_bonus(overall_rank: u32) -> f64 {
    ((200.0 - overall_rank as f64) / 100.0).max(0.0)
}

fn early_round_bonus(player: &Player, current_round: u32) -> f64 {
    if current_round <= EARLY_ROUND_LIMIT && player.tier <= 2 {
        1.2
    } else {
        1.0
    }
}

/// Score a player against precomputed roster needs.
///
/// Needs depend only on the roster, so callers scoring many players compute
/// them once and pass them in.
pub fn value_breakdown(
    player: &Player,
    current_round: u32,
    players: &[Player],
    picks_until_next: u32,
    roster: &Roster,
    needs: &RosterNeeds,
) -> ValueBreakdown {
    let expected = expected_round(player.position, player.tier);
    let baseline = (current_round as f64 - expected).max(0.0);

    let scarcity = positional_scarcity(players, player.position, player.tier, picks_until_next);
    let scarcity_multiplier = scarcity.level().multiplier();
    let needs_multiplier = needs_multiplier(player, needs, roster);
    let early_round_bonus = early_round_bonus(player, current_round);
    let rank_bonus = rank_bonus(player.overall_rank);

    let score = baseline * scarcity_multiplier * needs_multiplier * early_round_bonus + rank_bonus;

    ValueBreakdown {
        expected_round: expected,
        baseline,
        scarcity_multiplier,
        needs_multiplier,
        early_round_bonus,
        rank_bonus,
        score,
        scarcity,
    }
}

/// Value score for a single player given the full draft snapshot.
pub fn player_value(
    player: &Player,
    current_round: u32,
    players: &[Player],
    picks_until_next: u32,
    roster: &Roster,
) -> f64 {
    let needs = roster_needs(roster);
    value_breakdown(player, current_round, players, picks_until_next, roster, &needs).score
}
