//! Core types: colours, domination flags, players, configuration.
//!
//! These are the game-agnostic building blocks the rest of the crate is
//! assembled from. The host configures them via `GameConfig` rather than
//! modifying the modules that consume them.

pub mod colour;
pub mod config;
pub mod player;

pub use colour::{Colour, DominationState, REGION_COUNT};
pub use config::GameConfig;
pub use player::PlayerId;
