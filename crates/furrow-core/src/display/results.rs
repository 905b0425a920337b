//! Outcomes of commands the session carried out.

use std::fmt;

/// What happened when a command ran.
///
/// Rejected commands are reported as [`crate::GameError`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A crop moved from the inventory to the farm
    Planted { crop: String },
    /// Ready crops were sold; `gold` may be zero
    Harvested { gold: u32, crops: usize },
    /// The farm advanced by one day
    DayPassed,
    /// Energy ran out, so the farm did not advance
    OutOfEnergy,
    /// The player asked to stop
    Quit,
}

impl Outcome {
    /// Whether the driver should stop reading commands.
    pub fn is_quit(&self) -> bool {
        matches!(self, Outcome::Quit)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Planted { crop } => write!(f, "You planted {crop} on your farm."),
            Outcome::Harvested { gold, .. } => {
                write!(f, "You harvested crops and earned {gold} gold.")
            }
            Outcome::DayPassed => write!(f, "A day has passed on your farm."),
            Outcome::OutOfEnergy => {
                write!(f, "You are out of energy and cannot work anymore today.")
            }
            // Quitting prints nothing.
            Outcome::Quit => Ok(()),
        }
    }
}
