//! Core domain types for tic-tac-toe.

use super::coord::Coord;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark for this cell; a space when empty.
    pub fn mark(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.index()] = cell;
    }

    /// Checks if the cell at the given coordinate is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Formats the board as a human-readable string.
    ///
    /// Cells are joined by `" | "` and rows are separated by a rule of
    /// dashes; empty cells render as spaces.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            if row > 0 {
                result.push_str("\n-----------\n");
            }
            let marks: Vec<char> = (0..3)
                .map(|col| self.get(Coord::at(row, col)).mark())
                .collect();
            result.push_str(&format!(" {} | {} | {}", marks[0], marks[1], marks[2]));
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Writes a player's mark (unchecked - use GameEngine::place_move for validation).
    pub(super) fn place(&mut self, at: Coord, player: Player) {
        self.board.set(at, Cell::Occupied(player));
    }

    /// Hands the turn to the other player.
    pub(super) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Restores the initial state: empty board, X to move.
    pub(super) fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
