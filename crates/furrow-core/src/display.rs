//! Display wrappers for everything the game prints.
//!
//! Models format themselves (see [`crate::models`]); the wrappers here
//! compose them into the screens the player sees, so the CLI never builds
//! game text by hand.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │ (Crop, Player,  │───▶│ (Welcome, Status│───▶│    Output       │
//! │  Farm)          │    │  View, Outcome) │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`banner`]: the welcome banner shown once at startup
//! - [`status`]: the per-turn view of the player and the farm
//! - [`results`]: outcomes of executed commands
//!
//! Wrappers never end with a trailing newline; the renderer adds line
//! breaks.

pub mod banner;
pub mod results;
pub mod status;

pub use banner::Welcome;
pub use results::Outcome;
pub use status::StatusView;
