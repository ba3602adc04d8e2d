// Positional scarcity estimation.
//
// For a position and tier, counts the undrafted players at least that good
// and estimates how many of them will be gone before the user picks again.
// Every pick between now and then is assumed to come out of that pool.

use serde::Serialize;

use crate::draft::pick::Position;
use crate::player::Player;

// ---------------------------------------------------------------------------
// Scarcity levels
// ---------------------------------------------------------------------------

/// How thin the pool will be by the user's next pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScarcityLevel {
    /// 0-2 comparable players expected to remain.
    Critical,
    /// 3-5 comparable players expected to remain.
    Tight,
    /// 6+ comparable players expected to remain.
    Ample,
}

impl ScarcityLevel {
    /// Determine the level from the expected remaining count.
    pub fn from_remaining(remaining: usize) -> Self {
        match remaining {
            0..=2 => ScarcityLevel::Critical,
            3..=5 => ScarcityLevel::Tight,
            _ => ScarcityLevel::Ample,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScarcityLevel::Critical => "CRITICAL",
            ScarcityLevel::Tight => "TIGHT",
            ScarcityLevel::Ample => "AMPLE",
        }
    }

    /// Value multiplier applied to the round-value baseline.
    pub fn multiplier(&self) -> f64 {
        match self {
            ScarcityLevel::Critical => 2.0,
            ScarcityLevel::Tight => 1.5,
            ScarcityLevel::Ample => 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Scarcity snapshot
// ---------------------------------------------------------------------------

/// Scarcity for one (position, tier) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionalScarcity {
    /// Undrafted players at the position with tier <= the queried tier.
    pub available: usize,
    /// Of those, how many are expected to be drafted before the user's next
    /// turn. Never exceeds `available`.
    pub likely_taken: usize,
    /// `available - likely_taken`.
    pub remaining: usize,
}

impl PositionalScarcity {
    pub fn level(&self) -> ScarcityLevel {
        ScarcityLevel::from_remaining(self.remaining)
    }
}

/// Compute scarcity for `position` at `tier` given the picks before the
/// user's next turn.
pub fn positional_scarcity(
    players: &[Player],
    position: Position,
    tier: u32,
    picks_until_next: u32,
) -> PositionalScarcity {
    let available = players
        .iter()
        .filter(|p| p.position == position && !p.is_drafted && p.tier <= tier)
        .count();

    let likely_taken = (picks_until_next as usize).min(available);

    PositionalScarcity {
        available,
        likely_taken,
        remaining: available.saturating_sub(likely_taken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wr(name: &str, tier: u32, rank: u32) -> Player {
        Player::new(name, Position::WideReceiver, tier, rank)
    }

    fn receivers() -> Vec<Player> {
        vec![
            wr("A", 1, 1),
            wr("B", 1, 2),
            wr("C", 2, 10),
            wr("D", 2, 11),
            wr("E", 3, 20),
            wr("F", 4, 30),
            Player::new("RB", Position::RunningBack, 1, 3),
        ]
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(ScarcityLevel::from_remaining(0), ScarcityLevel::Critical);
        assert_eq!(ScarcityLevel::from_remaining(2), ScarcityLevel::Critical);
        assert_eq!(ScarcityLevel::from_remaining(3), ScarcityLevel::Tight);
        assert_eq!(ScarcityLevel::from_remaining(5), ScarcityLevel::Tight);
        assert_eq!(ScarcityLevel::from_remaining(6), ScarcityLevel::Ample);
    }

    #[test]
    fn multipliers() {
        assert_eq!(ScarcityLevel::Critical.multiplier(), 2.0);
        assert_eq!(ScarcityLevel::Tight.multiplier(), 1.5);
        assert_eq!(ScarcityLevel::Ample.multiplier(), 1.0);
        assert_eq!(ScarcityLevel::Tight.label(), "TIGHT");
    }

    #[test]
    fn counts_tier_and_better() {
        let players = receivers();
        let s = positional_scarcity(&players, Position::WideReceiver, 2, 0);
        assert_eq!(s.available, 4);
        assert_eq!(s.likely_taken, 0);
        assert_eq!(s.remaining, 4);
    }

    #[test]
    fn excludes_drafted_and_other_positions() {
        let mut players = receivers();
        players[0].is_drafted = true;
        let s = positional_scarcity(&players, Position::WideReceiver, 1, 0);
        assert_eq!(s.available, 1);
        let rb = positional_scarcity(&players, Position::RunningBack, 1, 0);
        assert_eq!(rb.available, 1);
    }

    #[test]
    fn likely_taken_bounded_by_available() {
        let players = receivers();
        let s = positional_scarcity(&players, Position::WideReceiver, 3, 19);
        assert_eq!(s.available, 5);
        assert_eq!(s.likely_taken, 5);
        assert_eq!(s.remaining, 0);
        assert_eq!(s.level(), ScarcityLevel::Critical);
    }

    #[test]
    fn remaining_matches_formula() {
        let players = receivers();
        for tier in 1..=5 {
            for picks in 0..12 {
                let s = positional_scarcity(&players, Position::WideReceiver, tier, picks);
                let taken = (picks as usize).min(s.available);
                assert_eq!(s.likely_taken, taken);
                assert_eq!(s.remaining, s.available - taken);
            }
        }
    }

    #[test]
    fn empty_pool() {
        let s = positional_scarcity(&[], Position::TightEnd, 3, 7);
        assert_eq!(
            s,
            PositionalScarcity {
                available: 0,
                likely_taken: 0,
                remaining: 0
            }
        );
    }
}
