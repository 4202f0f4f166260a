//! Piece colours and the colour-domination vector.
//!
//! ## Colour
//!
//! The fixed palette of piece colours. Supply boxes, placed pieces and the
//! rule-service wire format all use the same three colours.
//!
//! ## DominationState
//!
//! One flag per colour region on the board, as reported by the external
//! rule service. A fresh game starts with every region unclaimed. The value
//! is a plain `Copy` type so snapshotting it for undo is a value copy with
//! no aliasing against the live state.

use serde::{Deserialize, Serialize};

/// Number of colour regions tracked by the rule service.
pub const REGION_COUNT: usize = 6;

/// A piece colour.
///
/// Ordering matters: supply counts and staging positions are always reported
/// in `Colour::ALL` order (purple, orange, green).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Colour {
    Purple,
    Orange,
    Green,
}

impl Colour {
    /// All colours in their fixed reporting order.
    pub const ALL: [Colour; 3] = [Colour::Purple, Colour::Orange, Colour::Green];

    /// Position of this colour in the fixed reporting order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Colour::Purple => 0,
            Colour::Orange => 1,
            Colour::Green => 2,
        }
    }

    /// Lowercase name as used in board encodings and rule queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Colour::Purple => "purple",
            Colour::Orange => "orange",
            Colour::Green => "green",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-region colour domination flags, one per colour region.
///
/// Produced by the rule service after each placement. Immutable for the
/// duration of a turn; moves snapshot the pre-move value for undo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DominationState {
    flags: [bool; REGION_COUNT],
}

impl DominationState {
    /// A state with every region unclaimed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: [false; REGION_COUNT],
        }
    }

    /// Build from explicit per-region flags.
    #[must_use]
    pub const fn from_flags(flags: [bool; REGION_COUNT]) -> Self {
        Self { flags }
    }

    /// The per-region flags in fixed region order.
    #[must_use]
    pub const fn flags(&self) -> &[bool; REGION_COUNT] {
        &self.flags
    }

    /// Whether a specific region is dominated.
    #[must_use]
    pub fn region(&self, index: usize) -> bool {
        self.flags[index]
    }

    /// Render the fixed textual encoding used in rule queries:
    /// single-quoted `TRUE`/`FALSE` tokens joined by `-`, in region order.
    #[must_use]
    pub fn encode(&self) -> String {
        let tokens: Vec<&str> = self
            .flags
            .iter()
            .map(|&won| if won { "'TRUE'" } else { "'FALSE'" })
            .collect();
        tokens.join("-")
    }
}

impl std::fmt::Display for DominationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}
