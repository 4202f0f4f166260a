//! The move command object.

use crate::animation::{Animation, Keyframe, KeyframeAnimation, RenderTarget, Transform};
use crate::board::{Piece, Tile, TilePos};
use crate::core::{DominationState, GameConfig};

/// One placement: the piece, where it went, the colour-domination flags as
/// they stood before it, and the animation carrying the piece there.
///
/// The domination snapshot is a value copy taken at construction; mutations
/// to the live state afterwards cannot reach it. The animation is owned
/// here exclusively and is discarded with the move.
#[derive(Clone, Debug)]
pub struct GameMove {
    prior_domination: DominationState,
    piece: Piece,
    tile: TilePos,
    animation: KeyframeAnimation,
}

impl GameMove {
    /// Build a move for placing `piece` on `destination`.
    ///
    /// Derives the two-keyframe animation: a short lift at the colour's
    /// staging position, then the travel to the destination tile's centre.
    #[must_use]
    pub fn new(
        config: &GameConfig,
        prior_domination: DominationState,
        piece: Piece,
        destination: &Tile,
    ) -> Self {
        let staging = config.staging_transform(piece.colour);
        let keyframes = [
            Keyframe::new(config.lift_time, staging),
            Keyframe::new(
                config.travel_time,
                Transform::from_translation(destination.position()),
            ),
        ];
        let animation = KeyframeAnimation::new(staging, keyframes)
            .expect("config guarantees a strictly increasing two-keyframe chain");

        Self {
            prior_domination,
            piece,
            tile: destination.pos(),
            animation,
        }
    }

    /// The domination flags as they stood before this move.
    #[must_use]
    pub const fn prior_domination(&self) -> DominationState {
        self.prior_domination
    }

    /// The placed piece.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    /// The destination tile coordinate.
    #[must_use]
    pub const fn tile(&self) -> TilePos {
        self.tile
    }

    /// Whether the piece has settled on its tile.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.animation.is_complete()
    }

    /// Advance the placement animation to elapsed time `t` seconds.
    pub fn animate(&mut self, t: f64) {
        self.animation.update(t);
    }

    /// Apply the piece's current transform to the render target.
    pub fn apply(&self, target: &mut dyn RenderTarget) {
        self.animation.apply(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Colour;

    fn destination(config: &GameConfig, row: u32, col: u32) -> Tile {
        Tile::new(TilePos::new(row, col), config.tile_position(row, col))
    }

    #[test]
    fn test_move_snapshot_is_independent() {
        let config = GameConfig::new();
        let mut live = DominationState::new();
        let game_move = GameMove::new(
            &config,
            live,
            Piece::new(Colour::Purple),
            &destination(&config, 2, 3),
        );

        live = DominationState::from_flags([true; crate::core::REGION_COUNT]);

        assert_eq!(game_move.prior_domination(), DominationState::new());
        assert_ne!(game_move.prior_domination(), live);
    }

    #[test]
    fn test_animation_starts_at_staging_and_ends_on_tile() {
        let config = GameConfig::new();
        let mut game_move = GameMove::new(
            &config,
            DominationState::new(),
            Piece::new(Colour::Green),
            &destination(&config, 2, 3),
        );

        // At the lift keyframe the piece sits at green's staging position.
        game_move.animate(config.lift_time);
        struct Probe(Option<Transform>);
        impl RenderTarget for Probe {
            fn apply_transform(&mut self, transform: &Transform) {
                self.0 = Some(*transform);
            }
        }
        let mut probe = Probe(None);
        game_move.apply(&mut probe);
        assert_eq!(
            probe.0.unwrap().translation,
            config.staging_transform(Colour::Green).translation
        );

        // After the travel keyframe it has settled on the tile centre.
        game_move.animate(config.travel_time);
        assert!(game_move.is_settled());
        let mut probe = Probe(None);
        game_move.apply(&mut probe);
        assert_eq!(probe.0.unwrap().translation, config.tile_position(2, 3));
    }

    #[test]
    fn test_move_records_destination() {
        let config = GameConfig::new();
        let game_move = GameMove::new(
            &config,
            DominationState::new(),
            Piece::new(Colour::Orange),
            &destination(&config, 4, 1),
        );

        assert_eq!(game_move.tile(), TilePos::new(4, 1));
        assert_eq!(game_move.piece(), Piece::new(Colour::Orange));
        assert!(!game_move.is_settled());
    }
}
