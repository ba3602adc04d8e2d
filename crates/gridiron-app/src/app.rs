// Application state and the command loop.
//
// Owns the draft session, applies user commands in arrival order, and pushes
// rendered output to the printer. Every command that changes the draft is
// followed by fresh advice.

use gridiron_core::config::Config;
use gridiron_core::draft::pick::Position;
use gridiron_core::draft::state::{DraftSession, PickOwner, SessionError, ToggleOutcome};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::protocol::{UiUpdate, UserCommand, HELP_TEXT};
use crate::render;

/// How many players `top` lists.
pub const TOP_PLAYERS_SHOWN: usize = 5;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub session: DraftSession,
}

impl AppState {
    pub fn new(config: Config, session: DraftSession) -> Self {
        AppState { config, session }
    }

    /// Apply one command and return what should be printed.
    ///
    /// `Quit` is handled by the loop and produces nothing here.
    pub fn apply(&mut self, cmd: UserCommand) -> Vec<UiUpdate> {
        match cmd {
            UserCommand::Advice => vec![self.advice_update()],
            UserCommand::AdviceJson => match serde_json::to_string_pretty(&self.session.advice()) {
                Ok(json) => vec![UiUpdate::Text(json)],
                Err(e) => vec![UiUpdate::Error(format!("failed to encode advice: {e}"))],
            },
            UserCommand::Draft(rank) => {
                let result = self.session.draft_on_clock(rank);
                self.after_toggle(rank, result)
            }
            UserCommand::Mine(rank) => {
                let result = self.session.toggle_draft(rank, PickOwner::User);
                self.after_toggle(rank, result)
            }
            UserCommand::Other(rank) => {
                let result = self.session.toggle_draft(rank, PickOwner::Opponent);
                self.after_toggle(rank, result)
            }
            UserCommand::SetTeams(n) => match self.session.set_num_teams(n) {
                Ok(settings) => vec![
                    UiUpdate::Text(format!(
                        "{} teams, you pick {}",
                        settings.number_of_teams(),
                        settings.user_draft_position()
                    )),
                    self.advice_update(),
                ],
                Err(e) => vec![error_update(e)],
            },
            UserCommand::SetPosition(p) => match self.session.set_draft_position(p) {
                Ok(settings) => vec![
                    UiUpdate::Text(format!(
                        "You pick {} of {}",
                        settings.user_draft_position(),
                        settings.number_of_teams()
                    )),
                    self.advice_update(),
                ],
                Err(e) => vec![error_update(e)],
            },
            UserCommand::Top(position) => vec![self.top_update(position)],
            UserCommand::Roster => vec![UiUpdate::Text(render::render_roster(
                self.session.roster(),
            ))],
            UserCommand::Log => vec![UiUpdate::Text(render::render_pick_log(
                self.session.picks(),
            ))],
            UserCommand::Help => vec![UiUpdate::Text(HELP_TEXT.to_string())],
            UserCommand::Quit => Vec::new(),
        }
    }

    fn advice_update(&self) -> UiUpdate {
        UiUpdate::Text(render::render_advice(&self.session.advice()))
    }

    fn top_update(&self, position: Position) -> UiUpdate {
        let players = self
            .session
            .top_undrafted_by_position(position, TOP_PLAYERS_SHOWN);
        UiUpdate::Text(render::render_top(position, &players))
    }

    fn after_toggle(
        &self,
        rank: u32,
        result: Result<ToggleOutcome, SessionError>,
    ) -> Vec<UiUpdate> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => return vec![error_update(e)],
        };

        let name = self
            .session
            .player(rank)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("#{rank}"));
        let summary = match outcome {
            ToggleOutcome::Drafted {
                owner: PickOwner::User,
            } => format!("You drafted {name}"),
            ToggleOutcome::Drafted {
                owner: PickOwner::Opponent,
            } => format!("{name} taken by another team"),
            ToggleOutcome::Undrafted => format!("{name} returned to the board"),
        };

        vec![UiUpdate::Text(summary), self.advice_update()]
    }
}

fn error_update(e: SessionError) -> UiUpdate {
    warn!("Command failed: {}", e);
    UiUpdate::Error(e.to_string())
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run until `Quit` arrives or the command channel closes.
///
/// Sends the opening advice before reading the first command.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let _ = ui_tx.send(state.advice_update()).await;

    loop {
        match cmd_rx.recv().await {
            Some(UserCommand::Quit) => {
                info!("Quit command received, shutting down");
                break;
            }
            Some(cmd) => {
                handle_user_command(&mut state, cmd, &ui_tx).await;
            }
            None => {
                info!("Command channel closed, shutting down");
                break;
            }
        }
    }

    Ok(())
}

async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    info!("Command: {:?}", cmd);
    for update in state.apply(cmd) {
        if ui_tx.send(update).await.is_err() {
            warn!("UI channel closed; dropping output");
            return;
        }
    }
}
