//! Core library for the Furrow farming game.
//!
//! This crate provides the game rules: the domain models for crops, the
//! player and the farm, parsing of text commands, and the [`Session`] that
//! ties them together. It performs no I/O; the CLI crate drives a session
//! over stdin/stdout.
//!
//! # Display Architecture
//!
//! Every piece of text the game shows is produced through
//! [`std::fmt::Display`]:
//!
//! - **Domain Models** ([`models`]): crops, the player and the farm format
//!   themselves as status lines
//! - **Display Wrappers** ([`display`]): the welcome banner, the full status
//!   view and command outcomes
//! - **Errors** ([`error`]): rejected commands display as the message the
//!   player sees
//!
//! # Quick Start
//!
//! ```rust
//! use furrow_core::{Outcome, Session};
//!
//! let mut session = Session::new("Robin");
//! println!("{}", session.welcome());
//!
//! let outcome = session.handle("pass").unwrap();
//! assert_eq!(outcome, Outcome::DayPassed);
//!
//! let outcome = session.handle("harvest").unwrap();
//! assert_eq!(outcome.to_string(), "You harvested crops and earned 50 gold.");
//! println!("{}", session.render());
//! ```

pub mod command;
pub mod display;
pub mod error;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use command::Command;
pub use display::{Outcome, StatusView, Welcome};
pub use error::{GameError, Result};
pub use models::{Crop, Farm, Player, Season};
pub use session::{Session, SessionBuilder};
