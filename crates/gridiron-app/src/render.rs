// Plain-text rendering for the terminal printer.

use std::fmt::Write;

use gridiron_core::advice::DraftAdvice;
use gridiron_core::draft::pick::Position;
use gridiron_core::draft::roster::{Roster, RosterNeeds};
use gridiron_core::draft::state::{PickOwner, PickRecord};
use gridiron_core::player::Player;

fn plural(n: u32) -> &'static str {
    if n == 1 {
        "pick"
    } else {
        "picks"
    }
}

/// Render advice as the block shown after every command.
pub fn render_advice(advice: &DraftAdvice) -> String {
    let mut out = String::new();

    if advice.is_user_turn {
        let _ = writeln!(
            out,
            "Your pick! Round {}, pick {}",
            advice.round, advice.pick
        );
    } else {
        if let Some(message) = &advice.message {
            let _ = writeln!(out, "{message}");
        }
        let _ = writeln!(
            out,
            "Waiting for your turn... {} {} until you're up",
            advice.picks_until_next,
            plural(advice.picks_until_next)
        );
    }

    if let Some(recommendations) = &advice.recommendations {
        let _ = writeln!(out, "Recommendations:");
        for (i, rec) in recommendations.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} ({}, tier {}, #{})  Value: {:.1}  [{} left in tier, {}]",
                i + 1,
                rec.player.name,
                rec.player.position,
                rec.player.tier,
                rec.player.overall_rank,
                rec.value_score,
                rec.scarcity.remaining,
                rec.scarcity.level().label()
            );
        }
    }

    if let Some(needs) = &advice.needs {
        let _ = writeln!(out, "Needs: {}", render_needs(needs));
    }

    if !advice.strategy.is_empty() {
        let _ = writeln!(out, "Strategy:");
        for line in &advice.strategy {
            let _ = writeln!(out, "  - {line}");
        }
    }

    out.trim_end().to_string()
}

fn render_needs(needs: &RosterNeeds) -> String {
    let mut parts: Vec<String> = Position::ALL
        .iter()
        .map(|&p| format!("{} {}", p, needs.for_position(p)))
        .collect();
    parts.push(format!("FLEX {}", needs.flex));
    parts.join(", ")
}

fn player_line(player: &Player) -> String {
    format!(
        "{} ({}, tier {}, #{})",
        player.name, player.position, player.tier, player.overall_rank
    )
}

/// Render the roster one bucket per line.
pub fn render_roster(roster: &Roster) -> String {
    if roster.is_empty() {
        return "Roster is empty".to_string();
    }

    let mut out = String::new();
    for position in Position::ALL {
        let names: Vec<String> = roster.bucket(position).iter().map(player_line).collect();
        let _ = writeln!(out, "{:<5} {}", position.display_str(), join_or_dash(&names));
    }
    let bench: Vec<String> = roster.bench.iter().map(player_line).collect();
    let _ = writeln!(out, "{:<5} {}", "BENCH", join_or_dash(&bench));
    out.trim_end().to_string()
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Render the pick log, oldest first.
pub fn render_pick_log(picks: &[PickRecord]) -> String {
    if picks.is_empty() {
        return "No picks yet".to_string();
    }

    let mut out = String::new();
    for record in picks {
        let owner = match record.owner {
            PickOwner::User => "you",
            PickOwner::Opponent => "other",
        };
        let _ = writeln!(
            out,
            "{:>3}. {} ({}, #{}) [{}] {}",
            record.pick_number,
            record.player_name,
            record.position,
            record.overall_rank,
            owner,
            record.recorded_at.format("%H:%M:%S")
        );
    }
    out.trim_end().to_string()
}

/// Render the best undrafted players at a position.
pub fn render_top(position: Position, players: &[&Player]) -> String {
    if players.is_empty() {
        return format!("No undrafted {position} left");
    }

    let mut out = format!("Top undrafted {position}:\n");
    for (i, player) in players.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, player_line(player));
    }
    out.trim_end().to_string()
}
