// Message types passed between the input reader, the app loop, and the
// printer.

use gridiron_core::draft::pick::Position;
use thiserror::Error;

/// Commands typed by the user, one per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Advice,
    AdviceJson,
    /// Toggle a player, crediting the pick to whoever is on the clock.
    Draft(u32),
    /// Toggle a player as the user's pick regardless of turn.
    Mine(u32),
    /// Toggle a player as another team's pick.
    Other(u32),
    SetTeams(u32),
    SetPosition(u32),
    Top(Position),
    Roster,
    Log,
    Help,
    Quit,
}

/// Messages sent from the app loop to the printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// Lines of normal output.
    Text(String),
    /// A command failed; the loop keeps running.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{value}' is not a valid {expected}")]
    InvalidArgument {
        value: String,
        expected: &'static str,
    },
}

pub const HELP_TEXT: &str = "\
Commands:
  advice              current advice
  json                current advice as JSON
  draft <rank>        toggle a player for whoever is on the clock
  mine <rank>         toggle a player as your pick
  other <rank>        toggle a player as another team's pick
  teams <n>           set the number of teams (1-14)
  position <p>        set your draft position
  top <qb|rb|wr|te>   best five undrafted at a position
  roster              your roster
  log                 pick log
  help                this text
  quit                exit";

/// Parse one input line into a command. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> Result<UserCommand, CommandParseError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Err(CommandParseError::Empty);
    };
    let arg = words.next();

    match keyword.to_ascii_lowercase().as_str() {
        "advice" | "a" => Ok(UserCommand::Advice),
        "json" => Ok(UserCommand::AdviceJson),
        "draft" | "d" => number_arg("draft", arg, "overall rank").map(UserCommand::Draft),
        "mine" => number_arg("mine", arg, "overall rank").map(UserCommand::Mine),
        "other" => number_arg("other", arg, "overall rank").map(UserCommand::Other),
        "teams" => number_arg("teams", arg, "team count").map(UserCommand::SetTeams),
        "position" => number_arg("position", arg, "draft position").map(UserCommand::SetPosition),
        "top" => {
            let value = arg.ok_or(CommandParseError::MissingArgument {
                command: "top",
                expected: "a position (qb, rb, wr, te)",
            })?;
            Position::from_str_pos(value)
                .map(UserCommand::Top)
                .ok_or_else(|| CommandParseError::InvalidArgument {
                    value: value.to_string(),
                    expected: "position",
                })
        }
        "roster" | "r" => Ok(UserCommand::Roster),
        "log" => Ok(UserCommand::Log),
        "help" | "?" => Ok(UserCommand::Help),
        "quit" | "exit" | "q" => Ok(UserCommand::Quit),
        _ => Err(CommandParseError::Unknown(keyword.to_string())),
    }
}

fn number_arg(
    command: &'static str,
    arg: Option<&str>,
    expected: &'static str,
) -> Result<u32, CommandParseError> {
    let value = arg.ok_or(CommandParseError::MissingArgument { command, expected })?;
    value
        .parse::<u32>()
        .map_err(|_| CommandParseError::InvalidArgument {
            value: value.to_string(),
            expected,
        })
}
