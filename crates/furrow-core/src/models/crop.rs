use std::fmt;

use serde::{Deserialize, Serialize};

use super::Season;

/// A plantable crop with a growth countdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Crop {
    /// Display name, matched case-insensitively when planting
    pub name: String,

    /// Season the crop belongs to
    pub season: Season,

    /// Days left until the crop is ready; keeps falling if grown after that
    pub days_to_grow: i32,

    /// Gold earned when the crop is harvested
    pub selling_price: u32,

    /// Set once the countdown reaches zero and never cleared
    #[serde(default)]
    pub harvested: bool,
}

impl Crop {
    /// Creates an unharvested crop.
    pub fn new(
        name: impl Into<String>,
        season: Season,
        days_to_grow: i32,
        selling_price: u32,
    ) -> Self {
        Self {
            name: name.into(),
            season,
            days_to_grow,
            selling_price,
            harvested: false,
        }
    }

    /// Advances growth by one day.
    ///
    /// The countdown is decremented unconditionally; once it is at or below
    /// zero the crop is marked harvested.
    pub fn grow(&mut self) {
        self.days_to_grow = self.days_to_grow.saturating_sub(1);
        if self.days_to_grow <= 0 {
            self.harvested = true;
        }
    }

    /// Whether the crop can be collected by `harvest`.
    pub fn is_ready(&self) -> bool {
        self.harvested
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.harvested {
            write!(f, "{} - Ready to harvest", self.name)
        } else {
            write!(f, "{} - {} days to grow", self.name, self.days_to_grow)
        }
    }
}
