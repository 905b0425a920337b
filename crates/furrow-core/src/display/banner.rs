//! Welcome banner shown when a session starts.

use std::fmt;

use crate::command::COMMAND_LIST;

/// Greeting for a new player, including the list of commands.
pub struct Welcome<'a> {
    pub player_name: &'a str,
}

impl<'a> Welcome<'a> {
    pub fn new(player_name: &'a str) -> Self {
        Self { player_name }
    }
}

impl fmt::Display for Welcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome to Furrow Valley, {}!", self.player_name)?;
        writeln!(
            f,
            "You have inherited your grandfather's old farm. Let's start farming!"
        )?;
        write!(f, "Commands: {COMMAND_LIST}")
    }
}
