//! Read-evaluate driver for a game session.
//!
//! Each [`GameLoop::step`] renders the farm, prompts, reads one line and
//! hands it to the session. The loop ends when the player quits or the input
//! runs out; it never exits the process itself.

use std::{fmt, io::BufRead, io::Write};

use anyhow::{Context, Result};
use furrow_core::{Farm, Player, Session};
use log::{debug, log_enabled, warn, Level};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

const NAME_PROMPT: &str = "Enter your name:";
const COMMAND_PROMPT: &str = "Enter command:";

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The player typed `quit`
    Quit,
    /// Input closed before `quit`
    EndOfInput,
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exit::Quit => write!(f, "player quit"),
            Exit::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop(Exit),
}

/// State dumped to the debug log after every command.
#[derive(Serialize)]
struct Snapshot<'a> {
    player: &'a Player,
    farm: &'a Farm,
}

/// Drives a [`Session`] from a line-based input to a terminal output.
pub struct GameLoop<R, W> {
    session: Session,
    input: R,
    output: W,
    renderer: TerminalRenderer,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    pub fn new(session: Session, input: R, output: W, renderer: TerminalRenderer) -> Self {
        Self {
            session,
            input,
            output,
            renderer,
        }
    }

    /// Shows the welcome banner, then steps until the game stops.
    pub fn run(&mut self) -> Result<Exit> {
        let welcome = self.session.welcome().to_string();
        self.renderer.render(&mut self.output, &welcome)?;

        loop {
            if let Step::Stop(exit) = self.step()? {
                self.output.flush().context("Failed to flush output")?;
                return Ok(exit);
            }
        }
    }

    /// Renders the current state, reads one command and executes it.
    pub fn step(&mut self) -> Result<Step> {
        let status = self.session.render().to_string();
        self.renderer.render(&mut self.output, &status)?;
        self.renderer.render(&mut self.output, COMMAND_PROMPT)?;
        self.output.flush().context("Failed to flush output")?;

        let Some(line) = read_line(&mut self.input)? else {
            return Ok(Step::Stop(Exit::EndOfInput));
        };
        debug!("Received command {line:?}");

        match self.session.handle(&line) {
            Ok(outcome) if outcome.is_quit() => return Ok(Step::Stop(Exit::Quit)),
            Ok(outcome) => {
                self.renderer.render(&mut self.output, &outcome.to_string())?;
            }
            Err(err) => {
                warn!("Rejected command {line:?}: {err}");
                self.renderer.render(&mut self.output, &err.to_string())?;
            }
        }

        if log_enabled!(Level::Debug) {
            let snapshot = Snapshot {
                player: self.session.player(),
                farm: self.session.farm(),
            };
            debug!(
                "State: {}",
                serde_json::to_string(&snapshot).context("Failed to serialize state")?
            );
        }

        Ok(Step::Continue)
    }

    /// Consumes the loop, returning the session and the output writer.
    #[cfg(test)]
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.output)
    }
}

/// Asks for the player's name. End of input yields an empty name.
pub fn prompt_for_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    renderer: &TerminalRenderer,
) -> Result<String> {
    renderer.render(output, NAME_PROMPT)?;
    output.flush().context("Failed to flush output")?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// Reads one line without its line terminator, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line reaches the session as an ordinary (invalid) command.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
