//! Move history and per-tick animation advancement.

use crate::animation::RenderTarget;
use crate::board::Board;
use crate::core::DominationState;

use super::GameMove;

/// A history entry: the move plus the absolute game time its animation
/// clock started at (set on the first tick after the move is added).
#[derive(Clone, Debug)]
struct HistoryEntry {
    game_move: GameMove,
    started_at: Option<f64>,
}

/// Ordered stack of moves: drives animations and implements undo.
///
/// History is unbounded within a session. Undo pops the most recent move,
/// reverts the board (instant removal, not animated back) and hands the
/// move's domination snapshot to the caller.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    history: Vec<HistoryEntry>,
}

impl Animator {
    /// Create an empty animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Drop all history (new game).
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Push a move; its animation clock starts at zero on the next tick.
    pub fn add_move(&mut self, game_move: GameMove) {
        self.history.push(HistoryEntry {
            game_move,
            started_at: None,
        });
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&GameMove> {
        self.history.last().map(|entry| &entry.game_move)
    }

    /// Advance every move's animation to game time `time` seconds.
    pub fn update(&mut self, time: f64) {
        for entry in &mut self.history {
            let started_at = *entry.started_at.get_or_insert(time);
            entry.game_move.animate(time - started_at);
        }
    }

    /// Apply every move's current transform to the render target.
    pub fn apply(&self, target: &mut dyn RenderTarget) {
        for entry in &self.history {
            entry.game_move.apply(target);
        }
    }

    /// Pop the most recent move and revert the board: the destination tile
    /// is cleared and the piece goes back to its supply box.
    ///
    /// Returns the popped move's domination snapshot, or `None` when there
    /// is nothing to undo.
    pub fn undo(&mut self, board: &mut Board) -> Option<DominationState> {
        let entry = self.history.pop()?;
        let game_move = entry.game_move;

        board.clear(game_move.tile());
        board.piece_box_mut(game_move.piece().colour).return_piece();

        Some(game_move.prior_domination())
    }
}
