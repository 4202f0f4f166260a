//! Picking boundary types.
//!
//! The host's object-picking subsystem reports what sits under the pointer
//! as `(object, numeric id)` pairs. The object's role is decided once, here,
//! as a tagged [`PickTarget`]: the orchestrator never inspects runtime
//! types, it matches on the variant.

use crate::board::TilePos;
use crate::core::Colour;

/// What kind of selectable object a pick hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickTarget {
    /// A colour's supply box.
    Supply(Colour),

    /// A board tile.
    Tile(TilePos),

    /// Something selectable but irrelevant to the game (logged, ignored).
    Other,
}

/// One entry of a pick result list: the decoded target plus the raw
/// numeric id the picking subsystem assigned to the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickResult {
    /// Decoded role of the picked object.
    pub target: PickTarget,

    /// Raw picking id, kept for diagnostics.
    pub id: u32,
}

impl PickResult {
    /// A pick on a colour's supply box.
    #[must_use]
    pub const fn supply(colour: Colour, id: u32) -> Self {
        Self {
            target: PickTarget::Supply(colour),
            id,
        }
    }

    /// A pick on a board tile; the coordinate is decoded from the id
    /// (`row = id / 100`, `col = id % 100`).
    #[must_use]
    pub const fn tile(id: u32) -> Self {
        Self {
            target: PickTarget::Tile(TilePos::from_pick_id(id)),
            id,
        }
    }

    /// A pick on some other selectable object.
    #[must_use]
    pub const fn other(id: u32) -> Self {
        Self {
            target: PickTarget::Other,
            id,
        }
    }
}
