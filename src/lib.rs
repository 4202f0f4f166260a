//! # tricolour
//!
//! Orchestration engine for a turn-based board game rendered by a host 3D
//! engine. The host owns the scene graph, materials and picking; this crate
//! owns the part with actual state-machine discipline: turns, move
//! legality via an external rule oracle, placement animation and undo.
//!
//! ## Design Principles
//!
//! 1. **Tick-driven, single-threaded**: one `update(time)` per frame, no
//!    threads, no locks. The only suspension point is the rule-service
//!    request, which is non-blocking and resolves on a later tick.
//!
//! 2. **The rule service is an oracle**: board state goes out as an opaque
//!    textual term, a verdict comes back. The crate never interprets the
//!    rules themselves.
//!
//! 3. **Every mutation is reversible until the game ends**: each move
//!    snapshots the state it replaced, so undo is a pop, not a recompute.
//!
//! ## Modules
//!
//! - `core`: colours, domination flags, players, configuration
//! - `board`: tile grid, pieces, supply boxes, the wire encoding
//! - `animation`: the `Animation` trait and keyframe interpolation
//! - `rules`: rule-service transport, protocol and client
//! - `game`: move objects, history/undo, the orchestrator state machine

pub mod animation;
pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Colour, DominationState, GameConfig, PlayerId, REGION_COUNT};

pub use crate::board::{Board, Piece, PieceBox, Tile, TilePos};

pub use crate::animation::{
    Animation, AnimationError, Keyframe, KeyframeAnimation, RenderTarget, Transform,
};

pub use crate::rules::{
    ChannelRuleService, ResponseKind, RuleClient, RuleError, RuleEvent, RuleService,
    RuleServiceHarness,
};

pub use crate::game::{
    Animator, GameFault, GameMove, GameOrchestrator, Phase, PickResult, PickTarget,
};
