//! Win detection logic for tic-tac-toe.

use super::super::coord::Coord;
use super::super::types::{Board, Cell, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Coord; 3]; 8] = [
        // Rows
        [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
        [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
        [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
        // Columns
        [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
        [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
        [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
        // Diagonals
        [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
        [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
    ];

    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Occupied(player) => Some(player),
                Cell::Empty => None,
            };
        }
    }

    None
}
