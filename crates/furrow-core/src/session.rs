//! The game session: one player, one farm, and the rules that connect them.
//!
//! A [`Session`] is constructed explicitly and owned by whoever drives it;
//! nothing here is global and nothing here touches stdin or stdout.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Text Line     │    │    Command      │    │    Handlers     │
//! │  ("plant Kale") │───▶│   (parsed)      │───▶│ (plant, harvest │
//! │                 │    │                 │    │  pass, quit)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures the player, farm and inventory a session starts
//!   with
//! - [`handlers`]: executes each command against the session state
//!
//! # Usage
//!
//! ```rust
//! use furrow_core::{GameError, Session};
//!
//! let mut session = Session::new("Robin");
//! assert_eq!(session.farm().len(), 5);
//!
//! let err = session.handle("plant Potato").unwrap_err();
//! assert_eq!(err, GameError::not_in_inventory("Potato"));
//!
//! assert!(session.handle("quit").unwrap().is_quit());
//! ```

pub mod builder;
pub mod handlers;


pub use builder::SessionBuilder;

use crate::{
    display::{StatusView, Welcome},
    models::{Farm, Player},
};

/// Energy spent each time the player passes a day.
pub const PASS_ENERGY_COST: i32 = 10;

/// A running game.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) player: Player,
    pub(crate) farm: Farm,
}

impl Session {
    /// Starts a game for `player_name` on a farm seeded with the starter
    /// crops.
    pub fn new(player_name: impl Into<String>) -> Self {
        SessionBuilder::new(player_name).build()
    }

    pub(crate) fn from_parts(player: Player, farm: Farm) -> Self {
        Self { player, farm }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn farm(&self) -> &Farm {
        &self.farm
    }

    /// The banner shown once before the first command.
    pub fn welcome(&self) -> Welcome<'_> {
        Welcome::new(&self.player.name)
    }

    /// The current player status and farm contents.
    pub fn render(&self) -> StatusView<'_> {
        StatusView::new(&self.player, &self.farm)
    }
}
