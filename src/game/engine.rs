//! Mutable game engine: move placement, win/draw evaluation, reset, rendering.

use super::coord::Coord;
use super::invariants::{Invariant, MarkBalance, TurnParity};
use super::rules;
use super::types::{GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues; the caller hands the turn to the other player.
    Continue,
    /// The move completed a line; the player who just moved wins.
    Win,
    /// The move filled the board with no line completed.
    Draw,
}

/// Errors that can occur when placing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside the board.
    #[display("Position ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The target cell is already occupied.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coord),
}

impl std::error::Error for MoveError {}

// ─────────────────────────────────────────────────────────────
//  Engine
// ─────────────────────────────────────────────────────────────

/// Tic-tac-toe engine holding board and turn state.
///
/// The engine validates and applies moves, evaluates win/draw conditions,
/// and renders the board. Turn switching is the caller's responsibility:
/// after a [`MoveOutcome::Continue`] the driving loop calls
/// [`GameEngine::switch_player`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new engine: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Places the current player's mark at (row, col).
    ///
    /// Evaluates win first, then draw. On [`MoveOutcome::Continue`] the
    /// turn is NOT advanced; the caller flips it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] when row or col is outside
    /// [0, 2] and [`MoveError::CellOccupied`] when the target cell is
    /// taken. Either way the board and turn are untouched.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        debug_assert!(
            TurnParity::holds(&self.state),
            "{}",
            TurnParity::description()
        );

        let coord = Coord::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.state.board().is_empty(coord) {
            return Err(MoveError::CellOccupied(coord));
        }

        let player = self.state.current_player();
        self.state.place(coord, player);

        debug_assert!(
            MarkBalance::holds(self.state.board()),
            "{}",
            MarkBalance::description()
        );

        let outcome = if rules::check_winner(self.state.board()).is_some() {
            MoveOutcome::Win
        } else if rules::is_full(self.state.board()) {
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        };

        debug!(%coord, ?outcome, "move accepted");
        Ok(outcome)
    }

    /// Restores the initial state: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Hands the turn to the other player.
    ///
    /// Called by the driving loop after a [`MoveOutcome::Continue`].
    pub fn switch_player(&mut self) {
        self.state.switch_player();
    }

    /// Renders the board as text.
    pub fn render(&self) -> String {
        self.state.board().display()
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
