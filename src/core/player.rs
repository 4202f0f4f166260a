//! Player identification for the two-seat game.
//!
//! Players are numbered 1 and 2, matching the numeric id embedded in rule
//! queries. Turn advancement is the alternation `p % 2 + 1`.

use serde::{Deserialize, Serialize};

/// One of the two players, numbered 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player 1.
    pub const ONE: PlayerId = PlayerId(1);

    /// Player 2.
    pub const TWO: PlayerId = PlayerId(2);

    /// Create a player id. `number` must be 1 or 2.
    #[must_use]
    pub fn new(number: u8) -> Self {
        assert!((1..=2).contains(&number), "Player number must be 1 or 2");
        Self(number)
    }

    /// The numeric id as embedded in rule queries.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// The other player: `p % 2 + 1`.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 % 2 + 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
