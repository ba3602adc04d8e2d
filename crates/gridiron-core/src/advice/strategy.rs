// Round- and roster-driven strategy hints.
//
// Each rule fires independently; the output keeps the fixed rule order
// below no matter how many fire.

use std::fmt;

use serde::Serialize;

use crate::draft::pick::Position;
use crate::draft::roster::{roster_needs, Roster, RB_DEPTH_TARGET, WR_DEPTH_TARGET};

/// Standard fantasy draft length.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 15;

/// Final rounds reserved for defense and kicker.
const RESERVED_FINAL_ROUNDS: u32 = 2;

/// How many rounds ahead of the QB deadline the urgent warning starts.
const QB_WARNING_LEAD: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrategyHint {
    EarlyRoundCore,
    QuarterbackWindow,
    EliteTightEnd,
    QuarterbackUrgent,
    ThirdRunningBack,
    FlexNeed,
    ReceiverDepth,
    LateRoundUpside,
}

impl StrategyHint {
    pub fn message(&self) -> &'static str {
        match self {
            StrategyHint::EarlyRoundCore => "Focus on top-tier RB/WR for reliable production",
            StrategyHint::QuarterbackWindow => {
                "Consider drafting your QB if tier 1-2 available (huge drop-off after elite QBs)"
            }
            StrategyHint::EliteTightEnd => {
                "Elite TEs (tier 1-2) have massive value due to position scarcity"
            }
            StrategyHint::QuarterbackUrgent => {
                "URGENT: Must draft QB soon! Final 2 rounds reserved for DEF/K"
            }
            StrategyHint::ThirdRunningBack => {
                "Target 3rd RB for bye week coverage (minimum Brian Robinson Jr. level)"
            }
            StrategyHint::FlexNeed => "Look for RB/WR with upside for flex position",
            StrategyHint::ReceiverDepth => "Consider WR depth for bye weeks and potential breakouts",
            StrategyHint::LateRoundUpside => "Focus on handcuffs and high-upside players",
        }
    }
}

impl fmt::Display for StrategyHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Evaluate every rule for the current round and roster.
pub fn strategy_hints(current_round: u32, roster: &Roster, total_rounds: u32) -> Vec<StrategyHint> {
    let needs = roster_needs(roster);
    let round = current_round;
    let rb_count = roster.count(Position::RunningBack);
    let wr_count = roster.count(Position::WideReceiver);
    let qb_deadline = total_rounds.saturating_sub(RESERVED_FINAL_ROUNDS);

    let mut hints = Vec::new();

    if round <= 3 {
        hints.push(StrategyHint::EarlyRoundCore);
    }
    if (3..=5).contains(&round) && needs.qb > 0 {
        hints.push(StrategyHint::QuarterbackWindow);
    }
    if (2..=6).contains(&round) && needs.te > 0 {
        hints.push(StrategyHint::EliteTightEnd);
    }
    if needs.qb > 0 && round >= qb_deadline.saturating_sub(QB_WARNING_LEAD) {
        hints.push(StrategyHint::QuarterbackUrgent);
    }
    if (2..RB_DEPTH_TARGET).contains(&rb_count) && round >= 4 {
        hints.push(StrategyHint::ThirdRunningBack);
    }
    if needs.flex > 0 {
        hints.push(StrategyHint::FlexNeed);
    }
    if (2..WR_DEPTH_TARGET).contains(&wr_count) && round >= 5 {
        hints.push(StrategyHint::ReceiverDepth);
    }
    if round >= 10 {
        hints.push(StrategyHint::LateRoundUpside);
    }

    hints
}

/// Strategy hints rendered as display strings.
pub fn draft_strategy(current_round: u32, roster: &Roster, total_rounds: u32) -> Vec<String> {
    strategy_hints(current_round, roster, total_rounds)
        .into_iter()
        .map(|h| h.message().to_string())
        .collect()
}
