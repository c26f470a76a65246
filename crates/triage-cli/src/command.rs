//! Parsing of triage command lines.

use std::path::PathBuf;

use triage_models::{ArrivalId, Priority};

use crate::error::InputError;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a patient
    Add { priority: Priority, name: String },
    /// Serve the most urgent patient
    Next,
    /// Show the most urgent patient without serving
    Peek,
    /// List waiting patients in storage order
    List,
    /// Change the priority of a waiting patient
    Change { id: ArrivalId, priority: Priority },
    /// Run each line of a file as a command
    Load(PathBuf),
    /// Write the queue as a replayable command file
    Save(PathBuf),
    /// Dump the heap storage
    Debug,
    /// Show help
    Help,
    /// Quit the session
    Quit,
    /// Blank line
    Empty,
    /// Known command with bad arguments
    Invalid(InputError),
    /// Unrecognized command (carries the whole input line)
    Unknown(String),
}

impl Command {
    /// Command words, in help order.
    pub const NAMES: &'static [&'static str] = &[
        "add", "next", "peek", "list", "load", "change", "save", "debug", "help", "quit",
    ];

    /// Parses one input line.
    ///
    /// Words are separated by any run of whitespace. Command words are
    /// case-sensitive, and extra words after argument-less commands are
    /// ignored.
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        let mut words = input.split_whitespace();

        let Some(cmd) = words.next() else {
            return Command::Empty;
        };

        let parsed = match cmd {
            "add" => Self::parse_add(words),
            "next" => Ok(Command::Next),
            "peek" => Ok(Command::Peek),
            "list" => Ok(Command::List),
            "change" => Self::parse_change(words),
            // The rest of the line is the path, so it may contain spaces.
            "load" => match input[cmd.len()..].trim() {
                "" => Err(InputError::MissingFileName),
                path => Ok(Command::Load(PathBuf::from(path))),
            },
            "save" => words
                .next()
                .map(|path| Command::Save(PathBuf::from(path)))
                .ok_or(InputError::MissingFileName),
            "debug" => Ok(Command::Debug),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            _ => return Command::Unknown(input.to_string()),
        };

        parsed.unwrap_or_else(Command::Invalid)
    }

    fn parse_add<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<Self, InputError> {
        let priority = parse_priority(words.next())?;

        // Names are re-joined with single spaces.
        let name = words.collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(InputError::MissingName);
        }

        Ok(Command::Add { priority, name })
    }

    fn parse_change<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<Self, InputError> {
        let id = words
            .next()
            .and_then(|w| w.parse::<ArrivalId>().ok())
            .ok_or(InputError::MissingId)?;
        let priority = parse_priority(words.next())?;

        Ok(Command::Change { id, priority })
    }
}

fn parse_priority(word: Option<&str>) -> Result<Priority, InputError> {
    word.ok_or(InputError::MissingPriority)?
        .parse::<Priority>()
        .map_err(|e| InputError::UnknownPriority(e.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add urgent Ann"),
            Command::Add {
                priority: Priority::Urgent,
                name: "Ann".to_string()
            }
        );
    }

    #[test]
    fn test_parse_add_name_with_spaces() {
        assert_eq!(
            Command::parse("  add   immediate  Mary   Ann  Smith "),
            Command::Add {
                priority: Priority::Immediate,
                name: "Mary Ann Smith".to_string()
            }
        );
    }

    #[test]
    fn test_parse_add_errors() {
        assert_eq!(
            Command::parse("add"),
            Command::Invalid(InputError::MissingPriority)
        );
        assert_eq!(
            Command::parse("add critical Bob"),
            Command::Invalid(InputError::UnknownPriority("critical".to_string()))
        );
        assert_eq!(
            Command::parse("add minimal   "),
            Command::Invalid(InputError::MissingName)
        );
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            Command::parse("change 3 emergency"),
            Command::Change {
                id: ArrivalId::new(3),
                priority: Priority::Emergency
            }
        );
    }

    #[test]
    fn test_parse_change_errors() {
        assert_eq!(
            Command::parse("change"),
            Command::Invalid(InputError::MissingId)
        );
        assert_eq!(
            Command::parse("change abc urgent"),
            Command::Invalid(InputError::MissingId)
        );
        assert_eq!(
            Command::parse("change 2"),
            Command::Invalid(InputError::MissingPriority)
        );
        assert_eq!(
            Command::parse("change 2 soon"),
            Command::Invalid(InputError::UnknownPriority("soon".to_string()))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("next"), Command::Next);
        assert_eq!(Command::parse("peek"), Command::Peek);
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("debug"), Command::Debug);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("next please"), Command::Next);
    }

    #[test]
    fn test_parse_load_keeps_spaces() {
        assert_eq!(
            Command::parse("load  my commands.txt "),
            Command::Load(PathBuf::from("my commands.txt"))
        );
        assert_eq!(
            Command::parse("load"),
            Command::Invalid(InputError::MissingFileName)
        );
    }

    #[test]
    fn test_parse_save_takes_one_word() {
        assert_eq!(
            Command::parse("save out.txt extra"),
            Command::Save(PathBuf::from("out.txt"))
        );
        assert_eq!(
            Command::parse("save"),
            Command::Invalid(InputError::MissingFileName)
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t "), Command::Empty);
    }

    #[test]
    fn test_parse_unknown_is_case_sensitive() {
        assert_eq!(
            Command::parse("ADD urgent Ann"),
            Command::Unknown("ADD urgent Ann".to_string())
        );
        assert_eq!(
            Command::parse("foobar"),
            Command::Unknown("foobar".to_string())
        );
    }

    #[test]
    fn test_names_cover_commands() {
        for name in Command::NAMES {
            assert!(!matches!(Command::parse(name), Command::Unknown(_)));
        }
    }
}
