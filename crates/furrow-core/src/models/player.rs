use std::fmt;

use serde::{Deserialize, Serialize};

use super::Crop;

/// Energy a new player starts with.
pub const STARTING_ENERGY: i32 = 100;

/// The person running the farm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    /// Name entered at startup; may be empty
    pub name: String,

    /// Gold earned from harvests
    pub money: u32,

    /// Remaining energy; not clamped, so it can drop below zero
    pub energy: i32,

    /// Crops carried but not yet planted
    #[serde(default)]
    pub inventory: Vec<Crop>,
}

impl Player {
    /// Creates a player with no money, full energy and an empty inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            money: 0,
            energy: STARTING_ENERGY,
            inventory: Vec::new(),
        }
    }

    /// Deducts energy and returns what is left.
    pub fn spend_energy(&mut self, amount: i32) -> i32 {
        self.energy = self.energy.saturating_sub(amount);
        self.energy
    }

    pub fn is_exhausted(&self) -> bool {
        self.energy <= 0
    }

    pub fn earn(&mut self, gold: u32) {
        self.money = self.money.saturating_add(gold);
    }

    /// Adds a crop to the inventory.
    pub fn stock(&mut self, crop: Crop) {
        self.inventory.push(crop);
    }

    /// Removes the first inventory crop matching `name` (case-insensitive).
    pub fn take_from_inventory(&mut self, name: &str) -> Option<Crop> {
        let index = self.inventory.iter().position(|crop| crop.is_named(name))?;
        Some(self.inventory.remove(index))
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: {} | Money: {} | Energy: {}",
            self.name, self.money, self.energy
        )
    }
}
