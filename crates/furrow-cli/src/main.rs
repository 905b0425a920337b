//! Furrow CLI Application
//!
//! Terminal front end for the Furrow farming game: asks for a name, then
//! reads one command per line from stdin until the player quits or the
//! input ends.

mod args;
mod game_loop;
mod renderer;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use furrow_core::Session;
use game_loop::{prompt_for_name, GameLoop};
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args { name, no_color } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let player_name = match name {
        Some(name) => name,
        None => prompt_for_name(&mut input, &mut output, &renderer)
            .context("Failed to read player name")?,
    };

    let session = Session::new(player_name);
    info!("Furrow started for player {:?}", session.player().name);

    let exit = GameLoop::new(session, input, output, renderer)
        .run()
        .context("Game loop failed")?;

    info!("Furrow stopped: {exit}");
    Ok(())
}
