//! Game configuration.
//!
//! The host configures the orchestration subsystem at startup: board
//! dimensions, piece supply, the spatial layout animations move through,
//! and the rule-service timeout. Everything else is derived.

use crate::animation::Transform;
use crate::core::Colour;

/// Complete configuration for one game.
///
/// Built with `with_*` methods from a sensible default:
///
/// ```
/// use tricolour::GameConfig;
///
/// let config = GameConfig::new()
///     .with_board_size(6, 6)
///     .with_pieces_per_colour(6)
///     .with_rule_timeout(5.0);
/// assert_eq!(config.rows, 6);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Board rows.
    pub rows: u32,

    /// Board columns.
    pub cols: u32,

    /// Starting supply in each colour's piece box.
    pub pieces_per_colour: u32,

    /// Distance between adjacent tile centres, in world units.
    pub tile_pitch: f64,

    /// Transform applied to the whole board before display delegation.
    pub board_placement: Transform,

    /// Horizontal spacing between per-colour staging positions.
    pub staging_step: f64,

    /// Height pieces are staged at before travelling to their tile.
    pub staging_height: f64,

    /// Seconds for the staging keyframe (short lift segment).
    pub lift_time: f64,

    /// Seconds for the travel keyframe (staging to destination tile).
    pub travel_time: f64,

    /// Seconds a rule request may stay unanswered before the game faults.
    pub rule_timeout: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 6,
            pieces_per_colour: 6,
            tile_pitch: 1.0,
            board_placement: Transform::IDENTITY,
            staging_step: 4.5,
            staging_height: 3.0,
            lift_time: 0.1,
            travel_time: 1.0,
            rule_timeout: 10.0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set board dimensions. Both must be non-zero.
    #[must_use]
    pub fn with_board_size(mut self, rows: u32, cols: u32) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one tile");
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the starting supply per colour. Must be non-zero.
    #[must_use]
    pub fn with_pieces_per_colour(mut self, count: u32) -> Self {
        assert!(count > 0, "Each colour needs at least one piece");
        self.pieces_per_colour = count;
        self
    }

    /// Set the board placement transform applied during display.
    #[must_use]
    pub fn with_board_placement(mut self, placement: Transform) -> Self {
        self.board_placement = placement;
        self
    }

    /// Set the keyframe timing for placement animations.
    ///
    /// `lift_time` must be positive and `travel_time` must come after it;
    /// the pair forms a strictly increasing keyframe chain.
    #[must_use]
    pub fn with_animation_times(mut self, lift_time: f64, travel_time: f64) -> Self {
        assert!(lift_time > 0.0, "Lift time must be positive");
        assert!(travel_time > lift_time, "Travel keyframe must follow the lift keyframe");
        self.lift_time = lift_time;
        self.travel_time = travel_time;
        self
    }

    /// Set the rule-service timeout in seconds. Must be positive.
    #[must_use]
    pub fn with_rule_timeout(mut self, seconds: f64) -> Self {
        assert!(seconds > 0.0, "Rule timeout must be positive");
        self.rule_timeout = seconds;
        self
    }

    /// World position of a tile's centre.
    #[must_use]
    pub fn tile_position(&self, row: u32, col: u32) -> [f64; 3] {
        [
            f64::from(col) * self.tile_pitch,
            0.0,
            f64::from(row) * self.tile_pitch,
        ]
    }

    /// Staging transform for a colour: the home-row position a freshly
    /// placed piece starts its travel from.
    #[must_use]
    pub fn staging_transform(&self, colour: Colour) -> Transform {
        Transform::from_translation([
            colour.index() as f64 * self.staging_step,
            self.staging_height,
            0.0,
        ])
    }
}
