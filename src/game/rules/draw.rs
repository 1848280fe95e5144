//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::coord::Coord;
    use super::super::super::types::Player;
    use super::super::win::check_winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Coord::at(1, 1), Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for coord in Coord::ALL {
            board.set(coord, Cell::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // Draw scenario: X O X / O X X / O X O
        board.set(Coord::at(0, 0), Cell::Occupied(Player::X));
        board.set(Coord::at(0, 1), Cell::Occupied(Player::O));
        board.set(Coord::at(0, 2), Cell::Occupied(Player::X));
        board.set(Coord::at(1, 0), Cell::Occupied(Player::O));
        board.set(Coord::at(1, 1), Cell::Occupied(Player::X));
        board.set(Coord::at(1, 2), Cell::Occupied(Player::X));
        board.set(Coord::at(2, 0), Cell::Occupied(Player::O));
        board.set(Coord::at(2, 1), Cell::Occupied(Player::X));
        board.set(Coord::at(2, 2), Cell::Occupied(Player::O));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X wins top row
        board.set(Coord::at(0, 0), Cell::Occupied(Player::X));
        board.set(Coord::at(0, 1), Cell::Occupied(Player::X));
        board.set(Coord::at(0, 2), Cell::Occupied(Player::X));
        board.set(Coord::at(1, 0), Cell::Occupied(Player::O));
        board.set(Coord::at(1, 1), Cell::Occupied(Player::O));

        assert!(!is_draw(&board));
    }
}
