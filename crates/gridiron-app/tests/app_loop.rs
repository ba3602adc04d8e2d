// End-to-end tests for the command loop: parsed input lines go in over the
// command channel, rendered text comes out of the UI channel.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use gridiron_app::app::{self, AppState};
use gridiron_app::protocol::{parse_command, UiUpdate};
use gridiron_core::config;
use gridiron_core::draft::state::DraftSession;
use gridiron_core::player;
use tokio::sync::mpsc;

fn project_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap();
    cwd.ancestors()
        .find(|dir| dir.join("defaults").join("draft.toml").exists())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| panic!("Cannot locate defaults/ directory from CWD {:?}", cwd))
}

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Session built from the shipped defaults, loaded through a scratch
/// `config/` dir the way a first run would.
fn default_state() -> AppState {
    let root = project_root();
    let n = NEXT_DIR.fetch_add(1, Ordering::Relaxed);
    let tmp = std::env::temp_dir().join(format!("gridiron_app_loop_{}_{n}", std::process::id()));
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(tmp.join("config")).unwrap();
    std::fs::copy(
        root.join("defaults").join("draft.toml"),
        tmp.join("config").join("draft.toml"),
    )
    .unwrap();
    let cfg = config::load_config_from(&tmp).unwrap();
    let _ = std::fs::remove_dir_all(&tmp);

    let players = player::load_players(&root.join("defaults").join("players.csv")).unwrap();
    let session = DraftSession::new(players, cfg.settings().unwrap(), cfg.advice_options()).unwrap();
    AppState::new(cfg, session)
}

/// Feed `lines` through the loop and collect everything it printed.
async fn drive(lines: &[&str]) -> Vec<UiUpdate> {
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, mut ui_rx) = mpsc::channel(256);

    for line in lines {
        cmd_tx.send(parse_command(line).unwrap()).await.unwrap();
    }
    drop(cmd_tx);

    app::run(cmd_rx, ui_tx, default_state()).await.unwrap();

    let mut out = Vec::new();
    while let Some(update) = ui_rx.recv().await {
        out.push(update);
    }
    out
}

fn text(update: &UiUpdate) -> &str {
    match update {
        UiUpdate::Text(s) | UiUpdate::Error(s) => s,
    }
}

#[tokio::test]
async fn opening_advice_recommends_top_ranked_back() {
    let out = drive(&[]).await;
    assert_eq!(out.len(), 1);
    let advice = text(&out[0]);
    assert!(advice.starts_with("Your pick! Round 1, pick 1"));
    assert!(advice.contains("1. Christian McCaffrey (RB, tier 1, #1)"));
}

#[tokio::test]
async fn first_two_picks_of_a_draft() {
    let out = drive(&["draft 1", "draft 2", "roster", "log", "quit"]).await;

    let texts: Vec<&str> = out.iter().map(text).collect();
    assert!(texts.contains(&"You drafted Christian McCaffrey"));
    assert!(texts.contains(&"CeeDee Lamb taken by another team"));
    assert!(texts
        .iter()
        .any(|t| t.contains("Waiting for your turn... 17 picks until you're up")));

    let roster = texts.iter().find(|t| t.starts_with("QB")).unwrap();
    assert!(roster.contains("RB    Christian McCaffrey (RB, tier 1, #1)"));

    let log = texts.iter().find(|t| t.contains("[other]")).unwrap();
    assert!(log.contains("1. Christian McCaffrey (RB, #1) [you]"));
    assert!(log.contains("2. CeeDee Lamb (WR, #2) [other]"));
}

#[tokio::test]
async fn errors_do_not_stop_the_loop() {
    let out = drive(&["other 500", "teams 20", "top te"]).await;
    assert!(matches!(out[1], UiUpdate::Error(_)));
    assert!(matches!(out[2], UiUpdate::Error(_)));
    assert!(text(&out[3]).starts_with("Top undrafted TE:\n  1. Travis Kelce"));
}

#[tokio::test]
async fn json_command_emits_advice_document() {
    let out = drive(&["other 1", "json"]).await;
    let json: serde_json::Value = serde_json::from_str(text(out.last().unwrap())).unwrap();
    assert_eq!(json["is_user_turn"], false);
    assert_eq!(json["round"], 1);
    assert_eq!(json["pick"], 2);
    assert_eq!(json["message"], "Not your turn. Pick 2 of round 1");
    assert!(json.get("recommendations").is_none());
}
