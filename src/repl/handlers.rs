//! REPL Handlers
//!
//! Per-command behavior and the paging cursor they share.

use std::io::Write;

use crate::client::PokeClient;
use crate::error::{CommandError, CommandResult};
use crate::models::LocationAreaPage;

use super::commands::{Command, COMMANDS};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt again
    Continue,
    /// Leave the loop
    Exit,
}

/// Prompt state: the client plus the listing cursor.
///
/// `next` starts at the first page; both links are replaced by the links of
/// whichever page was shown last.
#[derive(Debug)]
pub struct Session {
    /// Cached API client
    client: PokeClient,
    /// Page `map` will show
    next: Option<String>,
    /// Page `mapb` will show
    previous: Option<String>,
}

impl Session {
    /// Creates a session positioned before the first page.
    pub fn new(client: PokeClient) -> Self {
        let next = Some(client.first_page_url().to_string());
        Self {
            client,
            next,
            previous: None,
        }
    }

    /// URL `map` will fetch, if any.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// URL `mapb` will fetch, if any.
    pub fn previous_url(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        out: &mut W,
    ) -> CommandResult<Flow> {
        match command {
            Command::Help => {
                help(out)?;
                Ok(Flow::Continue)
            }
            Command::Exit => Ok(Flow::Exit),
            Command::Map => {
                let url = self.next.clone().ok_or(CommandError::NoNextPage)?;
                self.show_page(&url, out).await?;
                Ok(Flow::Continue)
            }
            Command::MapBack => {
                let url = self.previous.clone().ok_or(CommandError::NoPreviousPage)?;
                self.show_page(&url, out).await?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Fetches a page, prints it, and moves the cursor onto it.
    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> CommandResult<()> {
        let page = self.client.location_areas(url).await?;
        print_page(&page, out)?;

        self.next = page.next;
        self.previous = page.previous;
        Ok(())
    }
}

/// Writes the help banner and every command.
pub fn help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "=======Pokedex help center=======")?;
    writeln!(out)?;
    writeln!(out, "usage: [command]")?;
    writeln!(out)?;
    writeln!(out, "COMMANDS TO USE:")?;
    for spec in COMMANDS {
        writeln!(out, "{}", spec.name)?;
        writeln!(out, "    {}", spec.description)?;
    }
    Ok(())
}

/// Writes the command names, one per line.
pub fn list_commands<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Available commands (use \"help\" for more details):")?;
    for spec in COMMANDS {
        writeln!(out, "{}", spec.name)?;
    }
    Ok(())
}

fn print_page<W: Write>(page: &LocationAreaPage, out: &mut W) -> std::io::Result<()> {
    for name in page.names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
