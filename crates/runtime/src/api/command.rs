//! Text commands accepted from players or agents.
//!
//! Directions are validated here, before anything reaches the board.
use std::str::FromStr;

use maze_core::{Action, Direction, ErrorSeverity, MazeError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    UnknownVerb(String),

    #[error("'{0}' is not a direction (expected north, south, east or west)")]
    InvalidDirection(String),

    #[error("'{verb}' needs a direction")]
    MissingDirection { verb: String },

    #[error("'{verb}' takes no arguments")]
    UnexpectedArgument { verb: String },
}

impl MazeError for CommandError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CommandError::Empty => "COMMAND_EMPTY",
            CommandError::UnknownVerb(_) => "COMMAND_UNKNOWN_VERB",
            CommandError::InvalidDirection(_) => "COMMAND_INVALID_DIRECTION",
            CommandError::MissingDirection { .. } => "COMMAND_MISSING_DIRECTION",
            CommandError::UnexpectedArgument { .. } => "COMMAND_UNEXPECTED_ARGUMENT",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A board action routed through the engine.
    Act(Action),
    /// Report what is visible from the current cell.
    Look,
    /// Emit the full presentation snapshot.
    Dump,
    /// Discard the board and start a fresh round.
    NewRound,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        input.parse()
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return Err(CommandError::UnexpectedArgument { verb });
        }

        let no_argument = |command: Command| match argument {
            Some(_) => Err(CommandError::UnexpectedArgument { verb: verb.clone() }),
            None => Ok(command),
        };
        let direction = || {
            let word = argument.ok_or_else(|| CommandError::MissingDirection { verb: verb.clone() })?;
            Direction::from_str(word).map_err(|_| CommandError::InvalidDirection(word.to_string()))
        };

        match verb.as_str() {
            "move" | "go" | "walk" => Ok(Command::Act(Action::walk(direction()?))),
            "use" | "open" | "blast" => Ok(Command::Act(Action::use_on(direction()?))),
            "take" | "pickup" | "pick" | "get" => no_argument(Command::Act(Action::pick_up())),
            "drop" => no_argument(Command::Act(Action::drop_item())),
            "look" | "inspect" | "l" => no_argument(Command::Look),
            "dump" | "state" => no_argument(Command::Dump),
            "new" | "restart" => no_argument(Command::NewRound),
            "quit" | "q" => no_argument(Command::Quit),
            bare => match Direction::from_str(bare) {
                Ok(direction) => no_argument(Command::Act(Action::walk(direction))),
                Err(_) => Err(CommandError::UnknownVerb(bare.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_movement_forms() {
        let north = Command::Act(Action::walk(Direction::North));
        assert_eq!(Command::parse("move north"), Ok(north));
        assert_eq!(Command::parse("go N"), Ok(north));
        assert_eq!(Command::parse("  north  "), Ok(north));
        assert_eq!(Command::parse("n"), Ok(north));
    }

    #[test]
    fn parses_item_commands() {
        assert_eq!(Command::parse("take"), Ok(Command::Act(Action::pick_up())));
        assert_eq!(Command::parse("DROP"), Ok(Command::Act(Action::drop_item())));
        assert_eq!(
            Command::parse("use west"),
            Ok(Command::Act(Action::use_on(Direction::West)))
        );
        assert_eq!(Command::parse("look"), Ok(Command::Look));
        assert_eq!(Command::parse("new"), Ok(Command::NewRound));
    }

    #[test]
    fn rejects_directions_outside_the_cardinals() {
        assert_eq!(
            Command::parse("move northeast"),
            Err(CommandError::InvalidDirection("northeast".into()))
        );
        assert_eq!(
            Command::parse("use"),
            Err(CommandError::MissingDirection { verb: "use".into() })
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("dance"),
            Err(CommandError::UnknownVerb("dance".into()))
        );
        assert_eq!(
            Command::parse("take key"),
            Err(CommandError::UnexpectedArgument { verb: "take".into() })
        );
        assert!(Command::parse("move north now").is_err());
    }
}
