// Draft session state: the player board, the user's roster, settings, and
// the pick log. This is the only state that survives between advice calls;
// everything derived is recomputed from it on demand.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::pick::Position;
use super::roster::Roster;
use super::settings::{DraftSettings, SettingsError};
use crate::advice::{draft_advice_with, AdviceOptions, DraftAdvice};
use crate::player::{self, Player, PlayerLoadError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no player with overall rank {0}")]
    UnknownPlayer(u32),

    #[error("invalid player list: {0}")]
    InvalidPlayers(#[from] PlayerLoadError),

    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Who made a pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickOwner {
    User,
    Opponent,
}

/// One entry in the pick log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickRecord {
    /// Sequential pick number (1-indexed), renumbered when a pick is undone.
    pub pick_number: u32,
    pub overall_rank: u32,
    pub player_name: String,
    pub position: Position,
    pub owner: PickOwner,
    pub recorded_at: DateTime<Utc>,
}

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The player left the board; user picks also joined the roster.
    Drafted { owner: PickOwner },
    /// The player was returned to the board.
    Undrafted,
}

/// The complete mutable state of one draft.
#[derive(Debug, Clone)]
pub struct DraftSession {
    players: Vec<Player>,
    roster: Roster,
    settings: DraftSettings,
    options: AdviceOptions,
    picks: Vec<PickRecord>,
}

impl DraftSession {
    /// Start a session over a player list. All players start undrafted and
    /// are ordered by overall rank.
    pub fn new(
        mut players: Vec<Player>,
        settings: DraftSettings,
        options: AdviceOptions,
    ) -> Result<Self, SessionError> {
        player::validate_players(&players)?;
        for p in &mut players {
            p.is_drafted = false;
        }
        players.sort_by_key(|p| p.overall_rank);

        Ok(DraftSession {
            players,
            roster: Roster::new(),
            settings,
            options,
            picks: Vec::new(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn settings(&self) -> DraftSettings {
        self.settings
    }

    pub fn options(&self) -> AdviceOptions {
        self.options
    }

    /// Picks in the order they were made.
    pub fn picks(&self) -> &[PickRecord] {
        &self.picks
    }

    /// Look up a player by overall rank.
    pub fn player(&self, overall_rank: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.overall_rank == overall_rank)
    }

    /// Number of players drafted by anyone.
    pub fn total_picks_made(&self) -> u32 {
        self.players.iter().filter(|p| p.is_drafted).count() as u32
    }

    /// Flip a player's drafted state.
    ///
    /// Drafting with `PickOwner::User` also places the player on the roster;
    /// opponent picks only leave the board. Undrafting removes the player
    /// from every roster bucket and from the pick log.
    pub fn toggle_draft(
        &mut self,
        overall_rank: u32,
        owner: PickOwner,
    ) -> Result<ToggleOutcome, SessionError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.overall_rank == overall_rank)
            .ok_or(SessionError::UnknownPlayer(overall_rank))?;

        let player = &mut self.players[idx];
        player.is_drafted = !player.is_drafted;
        let player = player.clone();

        if !player.is_drafted {
            self.roster.remove_by_rank(overall_rank);
            self.picks.retain(|r| r.overall_rank != overall_rank);
            for (i, record) in self.picks.iter_mut().enumerate() {
                record.pick_number = i as u32 + 1;
            }
            info!("Undrafted {} (#{})", player.name, overall_rank);
            return Ok(ToggleOutcome::Undrafted);
        }

        self.picks.push(PickRecord {
            pick_number: self.picks.len() as u32 + 1,
            overall_rank,
            player_name: player.name.clone(),
            position: player.position,
            owner,
            recorded_at: Utc::now(),
        });

        match owner {
            PickOwner::User => {
                let name = player.name.clone();
                let position = player.position;
                let starter = self.roster.add_player(player);
                info!(
                    "Drafted {} ({}) to {}",
                    name,
                    position,
                    if starter { position.display_str() } else { "bench" }
                );
            }
            PickOwner::Opponent => {
                info!("{} (#{}) taken by another team", player.name, overall_rank);
            }
        }

        Ok(ToggleOutcome::Drafted { owner })
    }

    /// Toggle a player, crediting a new pick to the user only when the
    /// current slot is the user's.
    pub fn draft_on_clock(&mut self, overall_rank: u32) -> Result<ToggleOutcome, SessionError> {
        let owner = if self.advice().is_user_turn {
            PickOwner::User
        } else {
            PickOwner::Opponent
        };
        self.toggle_draft(overall_rank, owner)
    }

    /// Replace the settings wholesale. The settings type guarantees the
    /// draft position fits the team count.
    pub fn update_settings(&mut self, settings: DraftSettings) {
        if settings != self.settings {
            info!(
                "Settings changed: {} teams, draft position {}",
                settings.number_of_teams(),
                settings.user_draft_position()
            );
        }
        self.settings = settings;
    }

    /// Change only the team count; see [`DraftSettings::with_num_teams`].
    pub fn set_num_teams(&mut self, number_of_teams: u32) -> Result<DraftSettings, SessionError> {
        let previous = self.settings;
        let next = previous.with_num_teams(number_of_teams)?;
        if next.user_draft_position() != previous.user_draft_position() {
            warn!(
                "Draft position {} does not fit {} teams; reset to 1",
                previous.user_draft_position(),
                number_of_teams
            );
        }
        self.update_settings(next);
        Ok(next)
    }

    /// Change only the user's draft position.
    pub fn set_draft_position(&mut self, position: u32) -> Result<DraftSettings, SessionError> {
        let next = self.settings.with_draft_position(position)?;
        self.update_settings(next);
        Ok(next)
    }

    /// Advice for the current state.
    pub fn advice(&self) -> DraftAdvice {
        draft_advice_with(
            &self.players,
            &self.roster,
            self.total_picks_made(),
            self.settings.number_of_teams(),
            self.settings.user_draft_position(),
            &self.options,
        )
    }

    /// All players at a position, drafted or not.
    pub fn players_by_position(&self, position: Position) -> Vec<&Player> {
        player::players_by_position(&self.players, position)
    }

    /// The best `n` undrafted players at a position.
    pub fn top_undrafted_by_position(&self, position: Position, n: usize) -> Vec<&Player> {
        player::top_undrafted_by_position(&self.players, position, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> Vec<Player> {
        vec![
            Player::new("Christian McCaffrey", Position::RunningBack, 1, 1),
            Player::new("CeeDee Lamb", Position::WideReceiver, 1, 2),
            Player::new("Breece Hall", Position::RunningBack, 1, 3),
            Player::new("Tyreek Hill", Position::WideReceiver, 1, 4),
            Player::new("Bijan Robinson", Position::RunningBack, 1, 5),
            Player::new("Travis Kelce", Position::TightEnd, 1, 18),
            Player::new("Josh Allen", Position::Quarterback, 1, 22),
            Player::new("Jalen Hurts", Position::Quarterback, 1, 24),
        ]
    }

    fn session() -> DraftSession {
        DraftSession::new(players(), DraftSettings::default(), AdviceOptions::default()).unwrap()
    }

    #[test]
    fn new_session_is_clean() {
        let s = session();
        assert_eq!(s.total_picks_made(), 0);
        assert!(s.roster().is_empty());
        assert!(s.picks().is_empty());
        assert_eq!(s.players().len(), 8);
    }

    #[test]
    fn new_rejects_duplicate_ranks() {
        let mut list = players();
        list[1].overall_rank = 1;
        let err = DraftSession::new(list, DraftSettings::default(), AdviceOptions::default())
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidPlayers(_)));
    }

    #[test]
    fn user_pick_lands_on_roster() {
        let mut s = session();
        let outcome = s.toggle_draft(1, PickOwner::User).unwrap();
        assert_eq!(outcome, ToggleOutcome::Drafted { owner: PickOwner::User });
        assert!(s.player(1).unwrap().is_drafted);
        assert_eq!(s.roster().rb.len(), 1);
        assert_eq!(s.total_picks_made(), 1);
        assert_eq!(s.picks()[0].pick_number, 1);
        assert_eq!(s.picks()[0].owner, PickOwner::User);
    }

    #[test]
    fn opponent_pick_skips_roster() {
        let mut s = session();
        s.toggle_draft(2, PickOwner::Opponent).unwrap();
        assert!(s.player(2).unwrap().is_drafted);
        assert!(s.roster().is_empty());
        assert_eq!(s.total_picks_made(), 1);
    }

    #[test]
    fn third_rb_goes_to_bench() {
        let mut s = session();
        s.toggle_draft(1, PickOwner::User).unwrap();
        s.toggle_draft(3, PickOwner::User).unwrap();
        s.toggle_draft(5, PickOwner::User).unwrap();
        assert_eq!(s.roster().rb.len(), 2);
        assert_eq!(s.roster().bench.len(), 1);
        assert_eq!(s.roster().bench[0].name, "Bijan Robinson");
    }

    #[test]
    fn undraft_removes_from_roster_and_log() {
        let mut s = session();
        s.toggle_draft(1, PickOwner::User).unwrap();
        s.toggle_draft(2, PickOwner::Opponent).unwrap();
        s.toggle_draft(3, PickOwner::Opponent).unwrap();

        let outcome = s.toggle_draft(1, PickOwner::User).unwrap();
        assert_eq!(outcome, ToggleOutcome::Undrafted);
        assert!(!s.player(1).unwrap().is_drafted);
        assert!(s.roster().is_empty());
        assert_eq!(s.total_picks_made(), 2);
        let numbers: Vec<u32> = s.picks().iter().map(|r| r.pick_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(s.picks()[0].overall_rank, 2);
    }

    #[test]
    fn unknown_rank_is_error() {
        let mut s = session();
        let err = s.toggle_draft(999, PickOwner::User).unwrap_err();
        assert!(matches!(err, SessionError::UnknownPlayer(999)));
        assert_eq!(s.total_picks_made(), 0);
    }

    #[test]
    fn draft_on_clock_attributes_by_turn() {
        let settings = DraftSettings::new(2, 1).unwrap();
        let mut s = DraftSession::new(players(), settings, AdviceOptions::default()).unwrap();
        // 1.01 is ours, 1.02 is theirs, 2.01 is theirs, 2.02 is ours.
        s.draft_on_clock(1).unwrap();
        s.draft_on_clock(2).unwrap();
        s.draft_on_clock(3).unwrap();
        s.draft_on_clock(4).unwrap();
        let owners: Vec<PickOwner> = s.picks().iter().map(|r| r.owner).collect();
        assert_eq!(
            owners,
            vec![PickOwner::User, PickOwner::Opponent, PickOwner::Opponent, PickOwner::User]
        );
        assert_eq!(s.roster().len(), 2);
    }

    #[test]
    fn advice_tracks_picks() {
        let mut s = session();
        assert!(s.advice().is_user_turn);
        s.toggle_draft(1, PickOwner::User).unwrap();
        let advice = s.advice();
        assert!(!advice.is_user_turn);
        assert_eq!(advice.picks_until_next, 18);
    }

    #[test]
    fn set_num_teams_resets_position() {
        let mut s = session();
        s.set_draft_position(9).unwrap();
        let settings = s.set_num_teams(8).unwrap();
        assert_eq!(settings.user_draft_position(), 1);
        assert_eq!(s.settings().number_of_teams(), 8);
    }

    #[test]
    fn set_num_teams_rejects_out_of_range() {
        let mut s = session();
        assert!(matches!(s.set_num_teams(0), Err(SessionError::Settings(_))));
        assert_eq!(s.settings(), DraftSettings::default());
    }

    #[test]
    fn top_undrafted_uses_board_state() {
        let mut s = session();
        s.toggle_draft(22, PickOwner::Opponent).unwrap();
        let qbs = s.top_undrafted_by_position(Position::Quarterback, 5);
        assert_eq!(qbs.len(), 1);
        assert_eq!(qbs[0].name, "Jalen Hurts");
        assert_eq!(s.players_by_position(Position::Quarterback).len(), 2);
    }
}
