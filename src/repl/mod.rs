//! REPL Module
//!
//! The interactive shell: reads commands line by line and runs them against a
//! [`Session`].

mod commands;
mod input;
mod session;

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

pub use commands::Command;
pub use input::clean_input;
pub use session::{Flow, Pagination, Pokedex, Session};

/// Prompt printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the shell until `exit` or end of input.
///
/// A failing command is reported on `out` and the loop keeps going.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match session.execute(&line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!("Command {:?} failed: {}", line.trim(), err);
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}
