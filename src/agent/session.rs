//! Interactive console session
//!
//! Waits for a line of user input, runs the turn, prints the reply, repeats.
//! `quit` or end of input ends the session. A failed turn is reported and the
//! session goes back to waiting for input; nothing is retried.

use crate::agent::SupportAgent;
use crate::cli::output::Output;
use crate::types::Result;
use std::io::{BufRead, Write};
use tracing::error;

/// The only exit keyword
pub const QUIT_COMMAND: &str = "quit";

/// Run the chat loop until `quit` or end of input.
///
/// # Errors
///
/// Only I/O errors on `input` or `out` end the session early.
pub async fn run_session<R: BufRead, W: Write>(
    agent: &mut SupportAgent,
    mut input: R,
    mut out: W,
    style: &Output,
) -> Result<()> {
    loop {
        write!(out, "{}", style.user_prompt())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == QUIT_COMMAND {
            break;
        }

        // Written as each tool is dispatched, before the turn completes
        let mut notice_error = None;
        let result = agent
            .respond_with_callback(line, |call| {
                if let Err(e) = writeln!(out, "{}", style.tool_notice(&call.name)) {
                    notice_error.get_or_insert(e);
                }
            })
            .await;
        if let Some(e) = notice_error {
            return Err(e.into());
        }

        match result {
            Ok(turn) => {
                writeln!(out, "{}", style.reply(&turn.reply))?;
            }
            Err(e) => {
                error!(error = %e, "Turn failed");
                writeln!(out, "{}", style.failure(&e.to_string()))?;
            }
        }
    }

    writeln!(out)?;
    Ok(())
}
