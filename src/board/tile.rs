//! Board tiles.

use serde::{Deserialize, Serialize};

use super::Piece;

/// A tile coordinate: `(row, col)`, both zero-based.
///
/// The picking subsystem encodes tile coordinates into a single numeric id
/// as `row * 100 + col`; [`TilePos::from_pick_id`] is the decoding used at
/// that boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub row: u32,
    pub col: u32,
}

impl TilePos {
    /// Create a tile coordinate.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Decode a picking id into a coordinate: `row = id / 100`,
    /// `col = id % 100`.
    #[must_use]
    pub const fn from_pick_id(id: u32) -> Self {
        Self {
            row: id / 100,
            col: id % 100,
        }
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One board tile: a position, its world-space centre, and at most one piece.
#[derive(Clone, Debug)]
pub struct Tile {
    pos: TilePos,
    position: [f64; 3],
    piece: Option<Piece>,
}

impl Tile {
    /// Create an empty tile at a world position.
    #[must_use]
    pub const fn new(pos: TilePos, position: [f64; 3]) -> Self {
        Self {
            pos,
            position,
            piece: None,
        }
    }

    /// The tile's board coordinate.
    #[must_use]
    pub const fn pos(&self) -> TilePos {
        self.pos
    }

    /// The tile centre in world space (animation destination).
    #[must_use]
    pub const fn position(&self) -> [f64; 3] {
        self.position
    }

    /// The piece on this tile, if any.
    #[must_use]
    pub const fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Whether the tile is unoccupied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Put a piece on the tile. Returns `false` if it was occupied.
    pub fn set_piece(&mut self, piece: Piece) -> bool {
        if self.piece.is_some() {
            return false;
        }
        self.piece = Some(piece);
        true
    }

    /// Remove and return the tile's piece (undo path).
    pub fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}
