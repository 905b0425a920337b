//! Per-turn status view.

use std::fmt;

use crate::models::{Farm, Player};

/// The player's status line followed by every crop on the farm.
pub struct StatusView<'a> {
    pub player: &'a Player,
    pub farm: &'a Farm,
}

impl<'a> StatusView<'a> {
    pub fn new(player: &'a Player, farm: &'a Farm) -> Self {
        Self { player, farm }
    }
}

impl fmt::Display for StatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.player)?;
        write!(f, "{}", self.farm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, Season};

    #[test]
    fn test_status_view_one_line_per_crop() {
        let player = Player::new("Robin");
        let farm = Farm::with_crops(vec![
            Crop::new("Potato", Season::Spring, 5, 20),
            Crop::new("Pumpkin", Season::Fall, 1, 50),
        ]);

        let output = StatusView::new(&player, &farm).to_string();

        assert_eq!(
            output,
            "Player: Robin | Money: 0 | Energy: 100\n\
             Crops on Farm:\n\
             Potato - 5 days to grow\n\
             Pumpkin - 1 days to grow"
        );
    }
}
