// Draft advisor entry point.
//
// Startup sequence:
// 1. Load config (copies defaults on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Load the player list and build the draft session
// 4. Create mpsc channels
// 5. Spawn the stdin reader and the printer
// 6. Run the app loop until quit

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use gridiron_app::app;
use gridiron_app::protocol::{parse_command, CommandParseError, UiUpdate, UserCommand};
use gridiron_core::config;
use gridiron_core::draft::state::DraftSession;
use gridiron_core::player;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config.logging.filter)?;
    info!(
        "Config loaded: {} teams, draft position {}, {} rounds",
        config.draft.num_teams, config.draft.user_draft_position, config.draft.total_rounds
    );

    // 3. Load players and build the session
    let players = player::load_players(Path::new(&config.data.players))
        .with_context(|| format!("failed to load players from {}", config.data.players))?;
    info!("Loaded {} players", players.len());

    let settings = config.settings()?;
    let session = DraftSession::new(players, settings, config.advice_options())
        .context("failed to start draft session")?;

    // 4. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel::<UserCommand>(64);
    let (ui_tx, ui_rx) = mpsc::channel::<UiUpdate>(256);

    // 5. Spawn the stdin reader on its own thread and the printer as a task.
    let reader_ui_tx = ui_tx.clone();
    std::thread::spawn(move || read_commands(cmd_tx, reader_ui_tx));
    let printer = tokio::spawn(print_updates(ui_rx));

    // 6. Run the app loop
    println!("gridiron draft advisor. Type 'help' for commands.");
    let state = app::AppState::new(config, session);
    if let Err(e) = app::run(cmd_rx, ui_tx, state).await {
        error!("Application loop error: {}", e);
    }

    let _ = printer.await;
    info!("Draft advisor shut down cleanly");
    Ok(())
}

/// Read stdin line by line, forwarding parsed commands. Parse errors go
/// straight to the printer.
fn read_commands(cmd_tx: mpsc::Sender<UserCommand>, ui_tx: mpsc::Sender<UiUpdate>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match parse_command(&line) {
            Ok(cmd) => {
                let quit = cmd == UserCommand::Quit;
                if cmd_tx.blocking_send(cmd).is_err() || quit {
                    return;
                }
            }
            Err(CommandParseError::Empty) => {}
            Err(e) => {
                if ui_tx.blocking_send(UiUpdate::Error(e.to_string())).is_err() {
                    return;
                }
            }
        }
    }
    // EOF: dropping cmd_tx closes the channel and ends the app loop.
}

async fn print_updates(mut ui_rx: mpsc::Receiver<UiUpdate>) {
    while let Some(update) = ui_rx.recv().await {
        match update {
            UiUpdate::Text(text) => println!("{text}\n"),
            UiUpdate::Error(message) => eprintln!("error: {message}\n"),
        }
        let _ = std::io::stdout().flush();
    }
}

/// Initialize tracing to log to a file (not the terminal, which is used for
/// the prompt). `RUST_LOG` overrides the configured filter.
fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("gridiron.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
