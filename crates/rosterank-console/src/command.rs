//! Command language for the interactive session

use std::str::FromStr;

use thiserror::Error;

use rosterank_ranking::Direction;

/// A parsed user command.
///
/// `add` takes a multi-word name; the last whitespace-separated token is the
/// score. Both fields stay raw text here - the core validator owns coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate and append a student.
    Add { name: String, score: String },
    /// Remove a student by id (full id or unambiguous prefix).
    Remove { id: String },
    /// Render the roster table.
    List,
    /// Rank the roster and render the result.
    Sort,
    /// Set the ranking direction, or toggle it when no direction is given.
    Order(Option<Direction>),
    /// Remove every student.
    Clear,
    /// Show the command reference.
    Help,
    /// End the session.
    Quit,
}

/// Error produced when a line does not parse as a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Type a command, or 'help' to list them.")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' to list commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Err(CommandError::Empty);
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => match args {
                // At least one name token plus the trailing score token.
                [name @ .., score] if !name.is_empty() => Ok(Command::Add {
                    name: name.join(" "),
                    score: (*score).to_string(),
                }),
                _ => Err(CommandError::Usage("add <name> <score>")),
            },
            "remove" | "rm" => match args {
                [id] => Ok(Command::Remove {
                    id: (*id).to_string(),
                }),
                _ => Err(CommandError::Usage("remove <id>")),
            },
            "list" | "ls" => Ok(Command::List),
            "sort" | "rank" => Ok(Command::Sort),
            "order" => match args {
                [] => Ok(Command::Order(None)),
                [direction] => direction
                    .parse()
                    .map(|d| Command::Order(Some(d)))
                    .map_err(|_| CommandError::Usage("order [asc|desc]")),
                _ => Err(CommandError::Usage("order [asc|desc]")),
            },
            "clear" => Ok(Command::Clear),
            "help" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// The command reference shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  add <name> <score>   Add a student (score 0-100; names may contain spaces)
  remove <id>          Remove a student by id or unique id prefix
  list                 Show the roster in insertion order
  sort                 Rank the roster by score and report pass/swap counts
  order [asc|desc]     Set the ranking direction, or toggle it
  clear                Remove all students
  help                 Show this reference
  quit                 End the session";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_single_word_name() {
        let cmd: Command = "add Alice 90".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "Alice".to_string(),
                score: "90".to_string()
            }
        );
    }

    #[test]
    fn test_add_multi_word_name() {
        let cmd: Command = "add Ada Lovelace 97.5".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Add {
                name: "Ada Lovelace".to_string(),
                score: "97.5".to_string()
            }
        );
    }

    #[test]
    fn test_add_missing_score_is_usage_error() {
        let err = "add Alice".parse::<Command>().unwrap_err();
        assert_eq!(err, CommandError::Usage("add <name> <score>"));
    }

    #[test]
    fn test_remove() {
        let cmd: Command = "remove 3f2a".parse().unwrap();
        assert_eq!(
            cmd,
            Command::Remove {
                id: "3f2a".to_string()
            }
        );
        assert_eq!("rm abc".parse::<Command>().unwrap(), cmd_remove("abc"));
    }

    fn cmd_remove(id: &str) -> Command {
        Command::Remove { id: id.to_string() }
    }

    #[test]
    fn test_order_variants() {
        assert_eq!("order".parse::<Command>().unwrap(), Command::Order(None));
        assert_eq!(
            "order asc".parse::<Command>().unwrap(),
            Command::Order(Some(Direction::Ascending))
        );
        assert_eq!(
            "order descending".parse::<Command>().unwrap(),
            Command::Order(Some(Direction::Descending))
        );
        assert_eq!(
            "order up".parse::<Command>().unwrap_err(),
            CommandError::Usage("order [asc|desc]")
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!("LIST".parse::<Command>().unwrap(), Command::List);
        assert_eq!("Sort".parse::<Command>().unwrap(), Command::Sort);
    }

    #[test]
    fn test_aliases() {
        assert_eq!("ls".parse::<Command>().unwrap(), Command::List);
        assert_eq!("rank".parse::<Command>().unwrap(), Command::Sort);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!("".parse::<Command>().unwrap_err(), CommandError::Empty);
        assert_eq!("   ".parse::<Command>().unwrap_err(), CommandError::Empty);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "frobnicate".parse::<Command>().unwrap_err(),
            CommandError::Unknown("frobnicate".to_string())
        );
    }
}
