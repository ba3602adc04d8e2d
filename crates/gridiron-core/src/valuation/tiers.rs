// Tier -> expected draft round, per position.
//
// Half rounds mark tiers that usually go across a round boundary (3.5 means
// "late 3rd to 4th").

use crate::draft::pick::Position;

/// Expected round for any tier missing from a position's table.
pub const UNKNOWN_TIER_ROUND: f64 = 15.0;

const QB_ROUNDS: &[f64] = &[3.0, 3.5, 6.5, 8.5, 10.5, 13.0, 15.0];

const RB_ROUNDS: &[f64] = &[1.0, 1.5, 2.0, 2.5, 3.5, 5.0, 7.0, 9.5, 11.5, 14.0, 15.0];

const WR_ROUNDS: &[f64] = &[1.0, 1.25, 1.75, 2.0, 2.5, 3.5, 6.0, 8.0, 11.0, 13.0];

const TE_ROUNDS: &[f64] = &[2.5, 6.5, 7.5, 8.5, 10.0, 13.0, 14.0];

fn table(position: Position) -> &'static [f64] {
    match position {
        Position::Quarterback => QB_ROUNDS,
        Position::RunningBack => RB_ROUNDS,
        Position::WideReceiver => WR_ROUNDS,
        Position::TightEnd => TE_ROUNDS,
    }
}

/// The round a player of this tier normally goes in.
pub fn expected_round(position: Position, tier: u32) -> f64 {
    if tier == 0 {
        return UNKNOWN_TIER_ROUND;
    }
    table(position)
        .get(tier as usize - 1)
        .copied()
        .unwrap_or(UNKNOWN_TIER_ROUND)
}

/// Number of tiers with a known expected round.
pub fn tier_count(position: Position) -> usize {
    table(position).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tiers() {
        assert_eq!(expected_round(Position::Quarterback, 1), 3.0);
        assert_eq!(expected_round(Position::Quarterback, 2), 3.5);
        assert_eq!(expected_round(Position::RunningBack, 1), 1.0);
        assert_eq!(expected_round(Position::RunningBack, 11), 15.0);
        assert_eq!(expected_round(Position::WideReceiver, 2), 1.25);
        assert_eq!(expected_round(Position::WideReceiver, 10), 13.0);
        assert_eq!(expected_round(Position::TightEnd, 1), 2.5);
        assert_eq!(expected_round(Position::TightEnd, 7), 14.0);
    }

    #[test]
    fn unknown_tier_defaults_to_last_round() {
        assert_eq!(expected_round(Position::WideReceiver, 11), UNKNOWN_TIER_ROUND);
        assert_eq!(expected_round(Position::TightEnd, 40), UNKNOWN_TIER_ROUND);
        assert_eq!(expected_round(Position::Quarterback, 0), UNKNOWN_TIER_ROUND);
    }

    #[test]
    fn table_sizes() {
        assert_eq!(tier_count(Position::Quarterback), 7);
        assert_eq!(tier_count(Position::RunningBack), 11);
        assert_eq!(tier_count(Position::WideReceiver), 10);
        assert_eq!(tier_count(Position::TightEnd), 7);
    }

    #[test]
    fn rounds_increase_with_tier() {
        for pos in Position::ALL {
            let rounds: Vec<f64> = (1..=tier_count(pos) as u32)
                .map(|t| expected_round(pos, t))
                .collect();
            assert!(
                rounds.windows(2).all(|w| w[0] < w[1]),
                "{pos} table not increasing: {rounds:?}"
            );
        }
    }
}
