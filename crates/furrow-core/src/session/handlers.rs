//! Command handlers for a [`Session`].

use super::{Session, PASS_ENERGY_COST};
use crate::{
    command::Command,
    display::Outcome,
    error::{GameError, Result},
};

impl Session {
    /// Parses and executes one line of player input.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidCommand` for an empty line or unknown verb
    /// Returns `GameError::MissingArgument` for `plant` without a crop name
    /// Returns `GameError::NotInInventory` when the crop is not carried
    ///
    /// The session state is unchanged whenever an error is returned.
    pub fn handle(&mut self, line: &str) -> Result<Outcome> {
        let command: Command = line.parse()?;
        self.execute(command)
    }

    /// Executes an already parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Plant { crop } => self.plant(&crop),
            Command::Harvest => Ok(self.harvest()),
            Command::Pass => Ok(self.pass_day()),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Moves a crop from the inventory to the end of the farm.
    pub fn plant(&mut self, crop_name: &str) -> Result<Outcome> {
        let crop = self
            .player
            .take_from_inventory(crop_name)
            .ok_or_else(|| GameError::not_in_inventory(crop_name))?;

        self.farm.plant(crop);
        Ok(Outcome::Planted {
            crop: crop_name.to_string(),
        })
    }

    /// Sells every ready crop and removes it from the farm.
    pub fn harvest(&mut self) -> Outcome {
        let ready = self.farm.harvest_ready();
        let gold = ready
            .iter()
            .fold(0u32, |total, crop| total.saturating_add(crop.selling_price));

        self.player.earn(gold);
        Outcome::Harvested {
            gold,
            crops: ready.len(),
        }
    }

    /// Spends energy and, if any is left, grows the farm by one day.
    ///
    /// Energy is deducted before the check, so once it reaches zero every
    /// further pass still costs energy but the farm stays as it is.
    pub fn pass_day(&mut self) -> Outcome {
        self.player.spend_energy(PASS_ENERGY_COST);
        if self.player.is_exhausted() {
            return Outcome::OutOfEnergy;
        }

        self.farm.pass_day();
        Outcome::DayPassed
    }
}
