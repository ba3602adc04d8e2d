// League draft settings: team count and the user's slot in the order.

use serde::Serialize;
use thiserror::Error;

pub const MIN_TEAMS: u32 = 1;
pub const MAX_TEAMS: u32 = 14;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("number of teams must be between 1 and 14, got {0}")]
    TeamsOutOfRange(u32),

    #[error("draft position must be between 1 and {num_teams}, got {position}")]
    PositionOutOfRange { position: u32, num_teams: u32 },
}

/// Validated draft settings. `user_draft_position` never exceeds
/// `number_of_teams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DraftSettings {
    number_of_teams: u32,
    user_draft_position: u32,
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            number_of_teams: 10,
            user_draft_position: 1,
        }
    }
}

impl DraftSettings {
    pub fn new(number_of_teams: u32, user_draft_position: u32) -> Result<Self, SettingsError> {
        check_teams(number_of_teams)?;
        check_position(user_draft_position, number_of_teams)?;
        Ok(DraftSettings {
            number_of_teams,
            user_draft_position,
        })
    }

    pub fn number_of_teams(&self) -> u32 {
        self.number_of_teams
    }

    pub fn user_draft_position(&self) -> u32 {
        self.user_draft_position
    }

    /// Change the team count. A draft position that no longer fits is reset
    /// to the first pick.
    pub fn with_num_teams(self, number_of_teams: u32) -> Result<Self, SettingsError> {
        check_teams(number_of_teams)?;
        let user_draft_position = if self.user_draft_position > number_of_teams {
            1
        } else {
            self.user_draft_position
        };
        Ok(DraftSettings {
            number_of_teams,
            user_draft_position,
        })
    }

    /// Change the user's draft position within the current team count.
    pub fn with_draft_position(self, user_draft_position: u32) -> Result<Self, SettingsError> {
        check_position(user_draft_position, self.number_of_teams)?;
        Ok(DraftSettings {
            user_draft_position,
            ..self
        })
    }
}

fn check_teams(number_of_teams: u32) -> Result<(), SettingsError> {
    if !(MIN_TEAMS..=MAX_TEAMS).contains(&number_of_teams) {
        return Err(SettingsError::TeamsOutOfRange(number_of_teams));
    }
    Ok(())
}

fn check_position(position: u32, num_teams: u32) -> Result<(), SettingsError> {
    if position == 0 || position > num_teams {
        return Err(SettingsError::PositionOutOfRange {
            position,
            num_teams,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_teams_first_pick() {
        let s = DraftSettings::default();
        assert_eq!(s.number_of_teams(), 10);
        assert_eq!(s.user_draft_position(), 1);
    }

    #[test]
    fn new_accepts_bounds() {
        assert!(DraftSettings::new(1, 1).is_ok());
        assert!(DraftSettings::new(14, 14).is_ok());
    }

    #[test]
    fn new_rejects_team_count_out_of_range() {
        assert_eq!(
            DraftSettings::new(0, 1),
            Err(SettingsError::TeamsOutOfRange(0))
        );
        assert_eq!(
            DraftSettings::new(15, 1),
            Err(SettingsError::TeamsOutOfRange(15))
        );
    }

    #[test]
    fn new_rejects_position_past_team_count() {
        assert_eq!(
            DraftSettings::new(8, 9),
            Err(SettingsError::PositionOutOfRange {
                position: 9,
                num_teams: 8
            })
        );
        assert!(DraftSettings::new(8, 0).is_err());
    }

    #[test]
    fn shrinking_teams_resets_position() {
        let s = DraftSettings::new(12, 11).unwrap();
        let s = s.with_num_teams(10).unwrap();
        assert_eq!(s.number_of_teams(), 10);
        assert_eq!(s.user_draft_position(), 1);
    }

    #[test]
    fn shrinking_teams_keeps_fitting_position() {
        let s = DraftSettings::new(12, 4).unwrap().with_num_teams(8).unwrap();
        assert_eq!(s.user_draft_position(), 4);
    }

    #[test]
    fn with_num_teams_validates() {
        let s = DraftSettings::default();
        assert!(s.with_num_teams(20).is_err());
    }

    #[test]
    fn with_draft_position_validates() {
        let s = DraftSettings::new(10, 1).unwrap();
        assert_eq!(s.with_draft_position(10).unwrap().user_draft_position(), 10);
        assert!(s.with_draft_position(11).is_err());
    }

    #[test]
    fn error_messages_name_the_range() {
        let err = DraftSettings::new(20, 1).unwrap_err();
        assert_eq!(err.to_string(), "number of teams must be between 1 and 14, got 20");
    }
}
