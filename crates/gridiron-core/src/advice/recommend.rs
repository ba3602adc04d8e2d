// Ranked pick recommendations.

use std::cmp::Ordering;

use serde::Serialize;

use crate::draft::roster::{roster_needs, Roster};
use crate::player::Player;
use crate::valuation::scarcity::PositionalScarcity;
use crate::valuation::value::value_breakdown;

/// Default number of recommendations returned.
pub const DEFAULT_TOP_N: usize = 5;

/// An undrafted player with the score that ranked him.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerWithValue {
    #[serde(flatten)]
    pub player: Player,
    pub value_score: f64,
    pub scarcity: PositionalScarcity,
}

/// Score every undrafted player and return the best `top_n`, highest score
/// first. Equal scores keep input order.
pub fn draft_recommendations(
    players: &[Player],
    current_round: u32,
    picks_until_next: u32,
    roster: &Roster,
    top_n: usize,
) -> Vec<PlayerWithValue> {
    let needs = roster_needs(roster);

    let mut scored: Vec<PlayerWithValue> = players
        .iter()
        .filter(|p| !p.is_drafted)
        .map(|p| {
            let b = value_breakdown(p, current_round, players, picks_until_next, roster, &needs);
            PlayerWithValue {
                player: p.clone(),
                value_score: b.score,
                scarcity: b.scarcity,
            }
        })
        .collect();

    // sort_by is stable, so ties stay in input (overall rank) order.
    scored.sort_by(|a, b| {
        b.value_score
            .partial_cmp(&a.value_score)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(top_n);
    scored
}
