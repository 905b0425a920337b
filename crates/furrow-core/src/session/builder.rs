//! Builder for creating and configuring Session instances.

use super::Session;
use crate::models::{starter_crops, Crop, Farm, Player};

/// Builder for creating and configuring Session instances.
///
/// The game itself only ever sets the player name. Replacing the starting
/// crops or handing the player an inventory is for library users and tests;
/// the game never puts crops into the inventory on its own.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    player_name: String,
    farm_crops: Option<Vec<Crop>>,
    inventory: Vec<Crop>,
}

impl SessionBuilder {
    /// Creates a new builder for the named player with default settings.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            farm_crops: None,
            inventory: Vec::new(),
        }
    }

    /// Plants these crops instead of the starter crops.
    pub fn with_farm_crops(mut self, crops: Vec<Crop>) -> Self {
        self.farm_crops = Some(crops);
        self
    }

    /// Gives the player crops to plant.
    pub fn with_inventory(mut self, crops: Vec<Crop>) -> Self {
        self.inventory = crops;
        self
    }

    /// Builds the configured session.
    pub fn build(self) -> Session {
        let mut player = Player::new(self.player_name);
        for crop in self.inventory {
            player.stock(crop);
        }

        let farm = Farm::with_crops(self.farm_crops.unwrap_or_else(starter_crops));

        Session::from_parts(player, farm)
    }
}
