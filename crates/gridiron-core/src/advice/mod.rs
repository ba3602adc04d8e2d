// Draft advice: turn tracking, recommendations and strategy, composed into
// one response per snapshot. Nothing is cached between calls.

pub mod recommend;
pub mod strategy;

use serde::Serialize;
use tracing::debug;

use crate::draft::pick::{is_user_turn, picks_until_next_turn, round_and_pick};
use crate::draft::roster::{roster_needs, Roster, RosterNeeds};
use crate::player::Player;
use recommend::{draft_recommendations, PlayerWithValue, DEFAULT_TOP_N};
use strategy::{draft_strategy, DEFAULT_TOTAL_ROUNDS};

/// Tunables that are not part of the draft snapshot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceOptions {
    pub top_n: usize,
    pub total_rounds: u32,
}

impl Default for AdviceOptions {
    fn default() -> Self {
        AdviceOptions {
            top_n: DEFAULT_TOP_N,
            total_rounds: DEFAULT_TOTAL_ROUNDS,
        }
    }
}

/// Everything the caller needs to render the draft assistant.
///
/// On the user's turn `recommendations` and `needs` are set and `message` is
/// not; otherwise the reverse. `picks_until_next` is 0 exactly when it is the
/// user's turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftAdvice {
    pub is_user_turn: bool,
    pub round: u32,
    pub pick: u32,
    pub picks_until_next: u32,
    pub strategy: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<PlayerWithValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs: Option<RosterNeeds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Compute advice with the default options (top 5, 15 rounds).
pub fn draft_advice(
    players: &[Player],
    roster: &Roster,
    total_picks_made: u32,
    num_teams: u32,
    user_draft_position: u32,
) -> DraftAdvice {
    draft_advice_with(
        players,
        roster,
        total_picks_made,
        num_teams,
        user_draft_position,
        &AdviceOptions::default(),
    )
}

/// Compute advice for one snapshot of the draft.
pub fn draft_advice_with(
    players: &[Player],
    roster: &Roster,
    total_picks_made: u32,
    num_teams: u32,
    user_draft_position: u32,
    options: &AdviceOptions,
) -> DraftAdvice {
    let slot = round_and_pick(total_picks_made, num_teams);
    let user_turn = is_user_turn(slot.round, slot.pick, user_draft_position, num_teams);
    let picks_until_next =
        picks_until_next_turn(slot.round, slot.pick, user_draft_position, num_teams);
    let strategy = draft_strategy(slot.round, roster, options.total_rounds);

    debug!(
        "Advice for round {} pick {}: user_turn={}, picks_until_next={}",
        slot.round, slot.pick, user_turn, picks_until_next
    );

    if !user_turn {
        return DraftAdvice {
            is_user_turn: false,
            round: slot.round,
            pick: slot.pick,
            picks_until_next,
            strategy,
            recommendations: None,
            needs: None,
            message: Some(format!(
                "Not your turn. Pick {} of round {}",
                slot.pick, slot.round
            )),
        };
    }

    let recommendations =
        draft_recommendations(players, slot.round, picks_until_next, roster, options.top_n);

    DraftAdvice {
        is_user_turn: true,
        round: slot.round,
        pick: slot.pick,
        picks_until_next,
        strategy,
        recommendations: Some(recommendations),
        needs: Some(roster_needs(roster)),
        message: None,
    }
}
