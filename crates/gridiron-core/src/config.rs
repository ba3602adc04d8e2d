// Configuration loading and parsing (config/draft.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::advice::AdviceOptions;
use crate::draft::settings::{DraftSettings, MAX_TEAMS, MIN_TEAMS};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub draft: DraftSection,
    pub data: DataPaths,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftSection {
    pub num_teams: u32,
    pub user_draft_position: u32,
    #[serde(default = "default_total_rounds")]
    pub total_rounds: u32,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    pub filter: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        LoggingSection {
            filter: "gridiron_core=info,gridiron_app=info,warn".into(),
        }
    }
}

fn default_total_rounds() -> u32 {
    AdviceOptions::default().total_rounds
}

fn default_top_n() -> usize {
    AdviceOptions::default().top_n
}

impl Config {
    /// Draft settings from the `[draft]` table. Validation has already
    /// checked the ranges, so this only fails on a hand-built `Config`.
    pub fn settings(&self) -> Result<DraftSettings, ConfigError> {
        DraftSettings::new(self.draft.num_teams, self.draft.user_draft_position).map_err(|e| {
            ConfigError::ValidationError {
                field: "draft".into(),
                message: e.to_string(),
            }
        })
    }

    pub fn advice_options(&self) -> AdviceOptions {
        AdviceOptions {
            top_n: self.draft.top_n,
            total_rounds: self.draft.total_rounds,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/draft.toml` relative to `base_dir`.
///
/// Does not copy defaults; prefer `load_config()`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("draft.toml");
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Copy every file in `defaults/` that `config/` lacks. Existing files are
/// left alone. Returns the paths written.
///
/// A missing `defaults/` is fine as long as `config/` exists.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.is_dir() {
        return if config_dir.is_dir() {
            Ok(Vec::new())
        } else {
            Err(copy_error(format!(
                "no defaults/ or config/ directory under {}",
                base_dir.display()
            )))
        };
    }

    std::fs::create_dir_all(&config_dir)
        .map_err(|e| copy_error(format!("cannot create {}: {e}", config_dir.display())))?;
    let entries = std::fs::read_dir(&defaults_dir)
        .map_err(|e| copy_error(format!("cannot list {}: {e}", defaults_dir.display())))?;

    let mut copied = Vec::new();
    for entry in entries {
        let source = entry
            .map_err(|e| copy_error(format!("cannot list {}: {e}", defaults_dir.display())))?
            .path();
        if !source.is_file() {
            continue;
        }
        let Some(name) = source.file_name() else {
            continue;
        };
        let target = config_dir.join(name);
        if copy_if_missing(&source, &target)? {
            copied.push(target);
        }
    }
    copied.sort();

    Ok(copied)
}

/// Create `target` from `source` unless it already exists. Returns whether a
/// copy happened.
fn copy_if_missing(source: &Path, target: &Path) -> Result<bool, ConfigError> {
    let mut dest = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(copy_error(format!("cannot create {}: {e}", target.display()))),
    };
    let mut src = std::fs::File::open(source)
        .map_err(|e| copy_error(format!("cannot read {}: {e}", source.display())))?;
    std::io::copy(&mut src, &mut dest).map_err(|e| {
        copy_error(format!(
            "cannot copy {} to {}: {e}",
            source.display(),
            target.display()
        ))
    })?;
    Ok(true)
}

fn copy_error(message: String) -> ConfigError {
    ConfigError::DefaultsCopyError { message }
}

/// Load config relative to the current working directory, copying defaults
/// first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn invalid(field: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message,
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let d = &config.draft;

    if !(MIN_TEAMS..=MAX_TEAMS).contains(&d.num_teams) {
        return Err(invalid(
            "draft.num_teams",
            format!("must be between {MIN_TEAMS} and {MAX_TEAMS}, got {}", d.num_teams),
        ));
    }

    if d.user_draft_position == 0 || d.user_draft_position > d.num_teams {
        return Err(invalid(
            "draft.user_draft_position",
            format!(
                "must be between 1 and num_teams ({}), got {}",
                d.num_teams, d.user_draft_position
            ),
        ));
    }

    if d.total_rounds < 3 {
        return Err(invalid(
            "draft.total_rounds",
            format!("must be at least 3, got {}", d.total_rounds),
        ));
    }

    if d.top_n == 0 {
        return Err(invalid("draft.top_n", "must be > 0".into()));
    }

    if config.data.players.trim().is_empty() {
        return Err(invalid("data.players", "must not be empty".into()));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
