//! Terminal rendering module for game output
//!
//! This module colors game text line by line when rich output is enabled
//! and writes it verbatim otherwise. Game text is plain, never markdown: it
//! carries the player's name as typed, so lines are styled whole and their
//! content is never parsed.

use std::io::Write;

use anyhow::{Context, Result};
use termimad::crossterm::style::Stylize;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        Self { rich_enabled }
    }

    /// Write `text` followed by a newline
    pub fn render<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if self.rich_enabled {
            for line in text.lines() {
                let written = if line.ends_with(':') {
                    // Section headers and prompts
                    writeln!(out, "{}", line.blue())
                } else if line.ends_with("Ready to harvest") {
                    writeln!(out, "{}", line.green())
                } else if line.starts_with("Player:") {
                    writeln!(out, "{}", line.yellow())
                } else {
                    writeln!(out, "{line}")
                };
                written.context("Failed to write output")?;
            }
        } else {
            writeln!(out, "{text}").context("Failed to write output")?;
        }
        Ok(())
    }
}
