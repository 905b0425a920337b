//! Error types for rejected commands.
//!
//! None of these are fatal: the session stays usable after any of them and
//! the driver simply shows the message to the player.

use thiserror::Error;

/// A command the session refused to carry out.
///
/// The `Display` text of each variant is exactly the message shown to the
/// player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The first word of the line is not a known verb (or the line is empty)
    #[error("Invalid command.")]
    InvalidCommand { verb: String },
    /// A verb that needs an argument was given none
    #[error("Usage: {usage}")]
    MissingArgument { usage: &'static str },
    /// `plant` named a crop the player is not carrying
    #[error("You don't have {name} in your inventory.")]
    NotInInventory { name: String },
}

impl GameError {
    /// Creates an error for an unrecognized verb.
    pub fn invalid_command(verb: impl Into<String>) -> Self {
        GameError::InvalidCommand { verb: verb.into() }
    }

    /// Creates an error for a verb missing its argument.
    pub fn missing_argument(usage: &'static str) -> Self {
        GameError::MissingArgument { usage }
    }

    /// Creates an error for a crop absent from the inventory.
    pub fn not_in_inventory(name: impl Into<String>) -> Self {
        GameError::NotInInventory { name: name.into() }
    }
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, GameError>;
