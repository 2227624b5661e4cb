//! REPL Module
//!
//! The interactive `Pokedex > ` prompt.
//!
//! # Commands
//! - `help` - Print usage and the command list
//! - `exit` - Leave the prompt
//! - `map` - Show the next page of location areas
//! - `mapb` - Show the previous page of location areas

pub mod commands;
pub mod handlers;
pub mod input;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::error::{CommandError, CommandResult};

pub use commands::{Command, CommandSpec, COMMANDS};
pub use handlers::{Flow, Session};

/// Prompt printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the prompt until `exit` or end of input.
///
/// Command failures are reported on `out` and the prompt continues; only a
/// failure to read input or write output ends the loop with an error.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> CommandResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            return Ok(());
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(command) = Command::parse(line) else {
            handlers::list_commands(out)?;
            continue;
        };

        match session.execute(command, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(CommandError::Io(e)) => return Err(CommandError::Io(e)),
            Err(e) => {
                warn!(command = command.name(), error = %e, "Command failed");
                writeln!(out, "{e}")?;
            }
        }
    }
}
