//! Game orchestration: the turn state machine, move history and picking.
//!
//! The [`GameOrchestrator`] owns the board, the turn state, the move
//! history and the rule-service client. The host feeds it pick results and
//! ticks; legality verdicts, animations and undo all flow from those two
//! entry points.

mod animator;
mod moves;
mod orchestrator;
mod pick;

pub use animator::Animator;
pub use moves::GameMove;
pub use orchestrator::GameOrchestrator;
pub use pick::{PickResult, PickTarget};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::RuleError;

/// Turn phase. The closed transition set lives in
/// [`GameOrchestrator`]; nothing outside it assigns phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to pick a colour supply.
    Playing,

    /// A colour is picked; waiting for a destination tile.
    ColourPicked,

    /// A placement went out to the rule service; ticking until the verdict
    /// arrives. No picks are accepted.
    AwaitingResult,

    /// Terminal: supply exhausted, a rule-service fault, or no game started
    /// yet.
    Ended,
}

/// A fault that ends the game from the players' perspective.
///
/// The source design silently stalled on rule-service trouble; here the
/// stall is surfaced: the orchestrator records the fault, enters
/// [`Phase::Ended`] and exposes it via `last_fault`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameFault {
    /// The rule service never answered within the configured timeout.
    #[error("rule service timed out")]
    RuleTimeout,

    /// The rule-service boundary failed (closed transport, bad payload).
    #[error(transparent)]
    Rule(#[from] RuleError),
}
