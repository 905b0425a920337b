//! Parsing of the text commands the player types.
//!
//! A line is split on whitespace and its first word, lowercased, selects the
//! verb. Only the verb is case-insensitive here; crop names keep their case
//! and are matched case-insensitively later against the inventory.

use std::str::FromStr;

use crate::error::GameError;

/// Usage text for the `plant` verb.
pub const PLANT_USAGE: &str = "plant <cropName>";

/// Command list shown in the welcome banner.
pub const COMMAND_LIST: &str = "plant <cropName>, harvest, pass, quit";

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move a crop from the inventory onto the farm
    Plant { crop: String },
    /// Sell every crop that is ready
    Harvest,
    /// Spend energy to advance the farm by one day
    Pass,
    /// Stop playing
    Quit,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();

        match verb.as_str() {
            "plant" => {
                let crop = words.collect::<Vec<_>>().join(" ");
                if crop.is_empty() {
                    return Err(GameError::missing_argument(PLANT_USAGE));
                }
                Ok(Command::Plant { crop })
            }
            "harvest" => Ok(Command::Harvest),
            "pass" => Ok(Command::Pass),
            "quit" => Ok(Command::Quit),
            _ => Err(GameError::invalid_command(verb)),
        }
    }
}
