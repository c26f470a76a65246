//! Static help text for interpreter commands.

use std::io::{self, Write};

/// Help information for a command.
pub struct CommandHelp {
    /// Command name (e.g., "add").
    pub name: &'static str,
    /// Usage syntax.
    pub usage: &'static str,
    /// Description lines.
    pub description: &'static [&'static str],
}

/// Static help entries for all commands.
pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "add",
        usage: "add <priority-code> <patient-name>",
        description: &[
            "Adds the patient to the triage system.",
            "<priority-code> must be one of the 4 accepted priority codes:",
            "    1. immediate 2. emergency 3. urgent 4. minimal",
            "<patient-name>: patient's full legal name (may contain spaces)",
        ],
    },
    CommandHelp {
        name: "next",
        usage: "next",
        description: &[
            "Announces the patient to be seen next. Takes into account the",
            "type of emergency and the patient's arrival order.",
        ],
    },
    CommandHelp {
        name: "peek",
        usage: "peek",
        description: &["Displays the patient that is next in line, but keeps in queue"],
    },
    CommandHelp {
        name: "list",
        usage: "list",
        description: &["Displays the list of all patients that are still waiting"],
    },
    CommandHelp {
        name: "load",
        usage: "load <file>",
        description: &["Reads the file and executes the command on each line"],
    },
    CommandHelp {
        name: "change",
        usage: "change <arrival-id> <new-priority>",
        description: &[
            "Changes the patient's priority in the triage system.",
            "<arrival-id>: ID assigned to patient upon arrival",
            "<new-priority> must be one of the 4 accepted priority codes:",
            "    1. immediate 2. emergency 3. urgent 4. minimal",
        ],
    },
    CommandHelp {
        name: "save",
        usage: "save <file>",
        description: &["Saves the triage queue to a file that can be reloaded again later"],
    },
    CommandHelp {
        name: "debug",
        usage: "debug",
        description: &["Displays the internal heap layout"],
    },
    CommandHelp {
        name: "help",
        usage: "help",
        description: &["Displays this menu"],
    },
    CommandHelp {
        name: "quit",
        usage: "quit",
        description: &["Exits the program"],
    },
];

/// Column where descriptions start when the usage fits before it.
const DESC_COLUMN: usize = 12;

/// Writes the full help menu.
pub fn write_help<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let indent = " ".repeat(DESC_COLUMN);
    for help in COMMAND_HELP {
        let mut lines = help.description.iter();
        if help.usage.len() < DESC_COLUMN {
            if let Some(first) = lines.next() {
                writeln!(out, "{:<width$}{}", help.usage, first, width = DESC_COLUMN)?;
            }
        } else {
            writeln!(out, "{}", help.usage)?;
        }
        for line in lines {
            writeln!(out, "{}{}", indent, line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn render() -> String {
        let mut buf = Vec::new();
        write_help(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_help_has_every_command() {
        let names: Vec<&str> = COMMAND_HELP.iter().map(|h| h.name).collect();
        assert_eq!(names, Command::NAMES);
    }

    #[test]
    fn test_short_usage_shares_line() {
        let text = render();
        assert!(text.contains("next        Announces the patient to be seen next."));
        assert!(text.contains("quit        Exits the program\n"));
    }

    #[test]
    fn test_long_usage_on_own_line() {
        let text = render();
        assert!(text.contains("add <priority-code> <patient-name>\n            Adds the patient"));
    }
}
