//! Data models for the farm and the people working it.
//!
//! Each model implements [`std::fmt::Display`] so it can be shown to the
//! player directly; the wrappers in [`crate::display`] compose them into
//! full screens.
//!
//! Ownership is strictly tree shaped: the [`Farm`] owns the crops planted on
//! it and the [`Player`] owns the crops in their inventory. Planting moves a
//! [`Crop`] from one to the other.

mod crop;
mod farm;
mod player;
mod season;


pub use crop::Crop;
pub use farm::{starter_crops, Farm};
pub use player::{Player, STARTING_ENERGY};
pub use season::Season;
