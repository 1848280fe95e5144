//! Two-player console tic-tac-toe.
//!
//! # Architecture
//!
//! - **Game** ([`GameEngine`]): board and turn state with win/draw rules.
//!   Moves mutate the engine in place; turn switching is left to the
//!   caller so the engine never advances play on its own.
//! - **Console** ([`Session`]): an explicit {Menu, AwaitingMove,
//!   Terminated} state machine reading integer tokens from stdin and
//!   writing the board, menu, and announcements to stdout.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new();
//! assert_eq!(engine.current_player(), Player::X);
//!
//! let outcome = engine.place_move(1, 1).expect("cell is empty");
//! assert_eq!(outcome, MoveOutcome::Continue);
//!
//! engine.switch_player();
//! assert_eq!(engine.current_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod game;

// Crate-level exports - console loop
pub use console::{InputError, LoopState, MenuChoice, Session, TokenReader};

// Crate-level exports - game engine
pub use game::{
    Board, Cell, Coord, GameEngine, GameState, Invariant, MarkBalance, MoveError, MoveOutcome,
    Player, TurnParity,
};
