//! REPL Commands
//!
//! The command table and input parsing for the Pokedex prompt.

/// A command the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print usage and the command list
    Help,
    /// Leave the prompt
    Exit,
    /// Show the next page of location areas
    Map,
    /// Show the previous page of location areas
    MapBack,
}

/// Name and help text of a command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// What the user types
    pub name: &'static str,
    /// One-line help text
    pub description: &'static str,
    /// Parsed form
    pub command: Command,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays this help message",
        command: Command::Help,
    },
    CommandSpec {
        name: "exit",
        description: "Exits the Pokedex",
        command: Command::Exit,
    },
    CommandSpec {
        name: "map",
        description: "Displays the next 20 location areas in the Pokemon world",
        command: Command::Map,
    },
    CommandSpec {
        name: "mapb",
        description: "Displays the previous 20 location areas (fails on the first page)",
        command: Command::MapBack,
    },
];

impl Command {
    /// Parses one line of user input.
    ///
    /// Surrounding whitespace and case are ignored. Returns `None` for
    /// anything that is not a known command name.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        COMMANDS
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(input))
            .map(|spec| spec.command)
    }

    /// The name the user types for this command.
    pub fn name(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|spec| spec.command == self)
            .map(|spec| spec.name)
            .unwrap_or_default()
    }
}
