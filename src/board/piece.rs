//! Pieces and the per-colour supply boxes.

use serde::{Deserialize, Serialize};

use crate::core::Colour;

/// A game piece. Placement and undo move these between the supply boxes
/// and the board; the animation that carries one to its tile is owned by
/// the move that placed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    /// The piece's colour.
    pub colour: Colour,
}

impl Piece {
    /// Create a piece of the given colour.
    #[must_use]
    pub const fn new(colour: Colour) -> Self {
        Self { colour }
    }
}

/// Finite piece supply for one colour.
///
/// The count is decremented exactly once per successful placement of the
/// colour and restored exactly once per undo; it can never go negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceBox {
    colour: Colour,
    remaining: u32,
    capacity: u32,
}

impl PieceBox {
    /// Create a full box for a colour.
    #[must_use]
    pub const fn new(colour: Colour, capacity: u32) -> Self {
        Self {
            colour,
            remaining: capacity,
            capacity,
        }
    }

    /// The box's colour.
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// Pieces still in the box.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the box still has pieces to give out.
    #[must_use]
    pub const fn has_pieces(&self) -> bool {
        self.remaining > 0
    }

    /// Take one piece out. Returns `false` when the box is empty.
    pub fn take_piece(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Return one piece to the box (undo path).
    pub fn return_piece(&mut self) {
        debug_assert!(
            self.remaining < self.capacity,
            "Returned more pieces than were ever taken"
        );
        self.remaining += 1;
    }
}
