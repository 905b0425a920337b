use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Crop, Season};

/// The crops every new farm starts with, in planting order.
pub fn starter_crops() -> Vec<Crop> {
    vec![
        Crop::new("Potato", Season::Spring, 5, 20),
        Crop::new("Blueberry", Season::Summer, 7, 30),
        Crop::new("Pumpkin", Season::Fall, 1, 50),
        Crop::new("Cranberry", Season::Fall, 6, 40),
        Crop::new("Winter Root", Season::Winter, 8, 25),
    ]
}

/// The crops currently planted, in the order they were planted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Farm {
    pub crops: Vec<Crop>,
}

impl Farm {
    /// Creates a farm with nothing planted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a farm with the given crops planted in order.
    pub fn with_crops(crops: Vec<Crop>) -> Self {
        Self { crops }
    }

    /// Appends a crop to the end of the field.
    pub fn plant(&mut self, crop: Crop) {
        self.crops.push(crop);
    }

    /// Grows every crop that is not yet harvested by one day.
    pub fn pass_day(&mut self) {
        for crop in self.crops.iter_mut().filter(|crop| !crop.harvested) {
            crop.grow();
        }
    }

    /// Removes and returns every harvested crop, keeping the rest in order.
    pub fn harvest_ready(&mut self) -> Vec<Crop> {
        let (ready, growing): (Vec<Crop>, Vec<Crop>) = std::mem::take(&mut self.crops)
            .into_iter()
            .partition(Crop::is_ready);
        self.crops = growing;
        ready
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Crop> {
        self.crops.iter()
    }

    /// Looks up a planted crop by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Crop> {
        self.crops.iter().find(|crop| crop.is_named(name))
    }
}

impl fmt::Display for Farm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crops on Farm:")?;
        for crop in &self.crops {
            write!(f, "\n{crop}")?;
        }
        Ok(())
    }
}
