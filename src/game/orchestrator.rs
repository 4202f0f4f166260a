//! The top-level game state machine.

use crate::animation::RenderTarget;
use crate::board::{Board, Piece, TilePos};
use crate::core::{Colour, DominationState, GameConfig, PlayerId};
use crate::rules::{protocol, ResponseKind, RuleClient, RuleEvent, RuleService};

use super::{Animator, GameFault, GameMove, Phase, PickResult, PickTarget};

/// Coordinates pick events, the rule-service client, the animator and
/// turn/colour bookkeeping.
///
/// ## Phases
///
/// ```text
/// Playing ──pick supply──▶ ColourPicked ──pick empty tile──▶ AwaitingResult
///    ▲                                                            │
///    └───────────────────────── verdict arrives ◀─────────────────┘
/// ```
///
/// `Ended` is entered when the supply runs out, a rule-service fault
/// surfaces, or before `start_game` has run. While a placement awaits its
/// verdict no pick is accepted, so a second request can never be issued
/// over an outstanding one.
pub struct GameOrchestrator {
    config: GameConfig,
    board: Board,
    animator: Animator,
    rules: RuleClient,
    domination: DominationState,
    phase: Phase,
    current_player: Option<PlayerId>,
    picked_colour: Option<Colour>,
    /// Game time of the latest tick, in seconds.
    clock: f64,
    fault: Option<GameFault>,
}

impl GameOrchestrator {
    /// Create an orchestrator over a rule-service transport.
    ///
    /// The game is idle (no active player, `Phase::Ended`) until
    /// [`GameOrchestrator::start_game`] runs.
    #[must_use]
    pub fn new(config: GameConfig, service: Box<dyn RuleService>) -> Self {
        let board = Board::new(&config);
        let rules = RuleClient::new(service, config.rule_timeout);

        Self {
            board,
            rules,
            animator: Animator::new(),
            domination: DominationState::new(),
            phase: Phase::Ended,
            current_player: None,
            picked_colour: None,
            clock: 0.0,
            fault: None,
            config,
        }
    }

    /// Reset the board and history and hand the first turn to
    /// `first_player`.
    pub fn start_game(&mut self, first_player: PlayerId) {
        self.board = Board::new(&self.config);
        self.animator.clear();
        self.domination = DominationState::new();
        self.phase = Phase::Playing;
        self.current_player = Some(first_player);
        self.picked_colour = None;
        self.fault = None;
        tracing::info!("Game started, {} to move", first_player);
    }

    // === Host loop interface ===

    /// Per-frame tick. `time_ms` is the host's absolute time in
    /// milliseconds; it is normalized to seconds before any forwarding.
    pub fn update(&mut self, time_ms: f64) {
        self.clock = time_ms / 1000.0;
        self.process_rule_events();
        self.animator.update(self.clock);
    }

    /// Per-frame display: applies the board placement transform, then
    /// delegates to the animator's apply path.
    pub fn display(&self, target: &mut dyn RenderTarget) {
        target.apply_transform(&self.config.board_placement);
        self.animator.apply(target);
    }

    // === Picking interface ===

    /// Entry point fed by the picking collaborator.
    ///
    /// A no-op unless a player is active and the phase accepts picks
    /// (`Playing` or `ColourPicked`). Each intersected object is dispatched
    /// to the guarded transition matching its role.
    pub fn manage_pick(&mut self, results: &[PickResult]) {
        if self.current_player.is_none()
            || !matches!(self.phase, Phase::Playing | Phase::ColourPicked)
        {
            return;
        }
        for result in results {
            self.on_object_selected(result);
        }
    }

    fn on_object_selected(&mut self, result: &PickResult) {
        match result.target {
            PickTarget::Supply(colour) => {
                if self.board.piece_box(colour).has_pieces() {
                    self.picked_colour = Some(colour);
                    self.phase = Phase::ColourPicked;
                    tracing::debug!("Picked {} supply", colour);
                } else {
                    tracing::trace!("Ignoring pick on exhausted {} supply", colour);
                }
            }
            PickTarget::Tile(pos) => {
                if self.phase != Phase::ColourPicked {
                    tracing::trace!("Ignoring tile pick at {} outside colour-picked phase", pos);
                    return;
                }
                let tile_is_empty = self.board.tile(pos).is_some_and(|tile| tile.is_empty());
                if !tile_is_empty {
                    tracing::trace!("Ignoring pick on occupied or off-board tile {}", pos);
                    return;
                }
                let Some(colour) = self.picked_colour.take() else {
                    return;
                };
                self.user_play(pos, colour);
            }
            PickTarget::Other => {
                tracing::debug!("Picked invalid object (id {})", result.id);
            }
        }
    }

    /// Issue the placement: build the move, mutate the board and ship the
    /// legality query. Caller has verified the tile is empty and on-board.
    fn user_play(&mut self, pos: TilePos, colour: Colour) {
        let Some(player) = self.current_player else {
            return;
        };

        self.phase = Phase::AwaitingResult;
        let piece = Piece::new(colour);

        let tile = self
            .board
            .tile(pos)
            .expect("destination verified on-board by the pick guard");
        let game_move = GameMove::new(&self.config, self.domination, piece, tile);
        self.animator.add_move(game_move);

        // The query carries the board as it stood before this placement;
        // the placement itself rides in the [row,col,colour] argument.
        let query = protocol::player_move_query(
            &self.board.encode(),
            &self.domination.encode(),
            pos,
            colour,
            player,
        );

        let took = self.board.piece_box_mut(colour).take_piece();
        let placed = self.board.place(pos, piece);
        debug_assert!(took && placed, "pick guards admitted an impossible placement");
        tracing::info!("{} placed {} at {}", player, colour, pos);

        if let Err(error) = self.rules.request(&query, ResponseKind::Domination, self.clock) {
            self.record_fault(error.into());
        }
    }

    // === Undo ===

    /// Revert the most recent move.
    ///
    /// Ignored while no player is active, while a verdict or undo
    /// acknowledgement is outstanding, and when there is nothing to undo.
    /// On success the domination flags and turn go back to their pre-move
    /// values and a synchronization query is shipped to the rule service.
    pub fn undo(&mut self) {
        if self.current_player.is_none()
            || !matches!(self.phase, Phase::Playing | Phase::ColourPicked)
        {
            return;
        }
        if self.rules.has_pending() {
            tracing::debug!("Ignoring undo while a rule request is outstanding");
            return;
        }
        let Some(prior) = self.animator.undo(&mut self.board) else {
            tracing::debug!("Nothing to undo");
            return;
        };

        self.domination = prior;
        self.picked_colour = None;
        self.phase = Phase::Playing;
        self.advance_player();

        let player = self
            .current_player
            .expect("player checked active at undo entry");
        tracing::info!("Move undone, {} to move", player);

        let query = protocol::update_colours_query(
            &self.board.encode(),
            &self.domination.encode(),
            player,
        );
        if let Err(error) = self.rules.request(&query, ResponseKind::Ack, self.clock) {
            self.record_fault(error.into());
        }
    }

    // === Rule-service responses ===

    /// Drain the rule client; the interleaving point where responses from
    /// the external service re-enter the game between ticks.
    fn process_rule_events(&mut self) {
        let Some(event) = self.rules.poll(self.clock) else {
            return;
        };

        match event {
            RuleEvent::Verdict(state) => {
                if self.phase != Phase::AwaitingResult {
                    tracing::warn!("Verdict arrived outside a pending placement; ignoring");
                    return;
                }
                self.domination = state;
                tracing::debug!("Colours won now {}", self.domination);
                self.set_playing();
                if self.board.supply_exhausted() {
                    self.phase = Phase::Ended;
                    tracing::info!("All supplies exhausted, game over");
                }
            }
            RuleEvent::Ack => {
                tracing::debug!("Undo synchronization acknowledged");
            }
            RuleEvent::TimedOut => self.record_fault(GameFault::RuleTimeout),
            RuleEvent::Fault(error) => self.record_fault(error.into()),
        }
    }

    fn record_fault(&mut self, fault: GameFault) {
        tracing::error!("Game fault: {}", fault);
        self.fault = Some(fault);
        self.phase = Phase::Ended;
    }

    // === Turn/UI interface ===

    /// Hand the turn back: re-enter `Playing` and advance the current
    /// player (`p % 2 + 1`).
    pub fn set_playing(&mut self) {
        self.phase = Phase::Playing;
        self.advance_player();
    }

    fn advance_player(&mut self) {
        if let Some(player) = self.current_player {
            self.current_player = Some(player.opponent());
        }
    }

    /// Remaining supply per colour, in fixed colour order.
    #[must_use]
    pub fn piece_numbers(&self) -> [u32; 3] {
        self.board.piece_numbers()
    }

    /// The domination flags in their fixed textual encoding.
    #[must_use]
    pub fn colours_won_string(&self) -> String {
        self.domination.encode()
    }

    // === Queries ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The player whose turn it is, if a game is running.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    /// The colour picked this turn, if any.
    #[must_use]
    pub fn picked_colour(&self) -> Option<Colour> {
        self.picked_colour
    }

    /// Current colour-domination flags.
    #[must_use]
    pub fn domination(&self) -> DominationState {
        self.domination
    }

    /// The board (read-only; mutation goes through placement and undo).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves in the history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.animator.len()
    }

    /// The fault that ended the game, if one did.
    #[must_use]
    pub fn last_fault(&self) -> Option<&GameFault> {
        self.fault.as_ref()
    }
}
