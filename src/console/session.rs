//! The interaction loop: an explicit state machine driving the engine.

use super::input::{InputError, TokenReader};
use super::menu::MenuChoice;
use crate::game::{GameEngine, MoveError, MoveOutcome};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// State of the interaction loop.
///
/// Each [`Session`] step handles one state and returns the next, driving
/// the loop until [`LoopState::Terminated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Showing the board and the options menu.
    Menu,
    /// Prompting for a row/col pair until a move is accepted.
    AwaitingMove,
    /// Loop is done; the process exits with code 0.
    Terminated,
}

/// Outcome of reading one integer token within a step.
enum Token {
    Value(i32),
    Malformed,
    Exhausted,
}

/// A console game session: engine plus token input and text output.
///
/// Generic over the reader and writer so tests can drive a full session
/// through in-memory buffers.
pub struct Session<R, W> {
    engine: GameEngine,
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given input and output.
    pub fn new(input: R, out: W) -> Self {
        Self {
            engine: GameEngine::new(),
            input: TokenReader::new(input),
            out,
        }
    }

    /// Runs the loop to completion.
    ///
    /// Returns when the player quits, a game ends in a win or draw, or
    /// the input is exhausted.
    ///
    /// # Errors
    ///
    /// Only I/O failures escape; malformed input is handled by
    /// re-prompting.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<(), InputError> {
        let mut state = LoopState::Menu;
        loop {
            state = match state {
                LoopState::Menu => self.menu_step()?,
                LoopState::AwaitingMove => self.move_step()?,
                LoopState::Terminated => break,
            };
        }
        Ok(())
    }

    /// One Menu step: render the board, show the menu, read a choice.
    fn menu_step(&mut self) -> Result<LoopState, InputError> {
        writeln!(self.out, "{}", self.engine.render())?;
        writeln!(self.out, "{}'s Turn!", self.engine.current_player())?;
        writeln!(self.out, "What would you like to do?")?;
        for (n, choice) in MenuChoice::iter().enumerate() {
            writeln!(self.out, "{}: {}", n + 1, choice.label())?;
        }
        write!(self.out, "Choice: ")?;
        self.out.flush()?;

        let choice = match self.next_int_token()? {
            Token::Value(n) => MenuChoice::from_choice(n),
            Token::Malformed => None,
            Token::Exhausted => return Ok(LoopState::Terminated),
        };

        match choice {
            Some(MenuChoice::MakeMove) => Ok(LoopState::AwaitingMove),
            Some(MenuChoice::Restart) => {
                debug!("restarting game");
                self.engine.reset();
                Ok(LoopState::Menu)
            }
            Some(MenuChoice::Quit) => Ok(LoopState::Terminated),
            None => {
                writeln!(self.out, "Invalid Option")?;
                Ok(LoopState::Menu)
            }
        }
    }

    /// One AwaitingMove step: prompt, read a row/col pair, apply it.
    fn move_step(&mut self) -> Result<LoopState, InputError> {
        writeln!(
            self.out,
            "Which row, column would you like to move to? Enter two numbers between 0-2 separated by a space to indicate position."
        )?;

        let row = match self.next_int_token()? {
            Token::Value(n) => n,
            Token::Malformed => return self.invalid_position(),
            Token::Exhausted => return Ok(LoopState::Terminated),
        };
        let col = match self.next_int_token()? {
            Token::Value(n) => n,
            Token::Malformed => return self.invalid_position(),
            Token::Exhausted => return Ok(LoopState::Terminated),
        };

        match self.engine.place_move(row, col) {
            Ok(MoveOutcome::Continue) => {
                self.engine.switch_player();
                Ok(LoopState::Menu)
            }
            Ok(MoveOutcome::Win) => {
                writeln!(self.out, "{}", self.engine.render())?;
                writeln!(self.out, "{} Wins!", self.engine.current_player())?;
                Ok(LoopState::Terminated)
            }
            Ok(MoveOutcome::Draw) => {
                writeln!(self.out, "{}", self.engine.render())?;
                writeln!(self.out, "Draw!")?;
                Ok(LoopState::Terminated)
            }
            Err(MoveError::OutOfBounds { .. }) => self.invalid_position(),
            Err(MoveError::CellOccupied(_)) => {
                writeln!(self.out, "That position is already taken")?;
                Ok(LoopState::AwaitingMove)
            }
        }
    }

    fn invalid_position(&mut self) -> Result<LoopState, InputError> {
        writeln!(self.out, "Invalid position")?;
        Ok(LoopState::AwaitingMove)
    }

    /// Reads one integer, downgrading malformed tokens to a recoverable
    /// marker and end-of-input to [`Token::Exhausted`].
    fn next_int_token(&mut self) -> Result<Token, InputError> {
        match self.input.next_int() {
            Ok(Some(n)) => Ok(Token::Value(n)),
            Ok(None) => {
                debug!("input exhausted, ending session");
                Ok(Token::Exhausted)
            }
            Err(InputError::Malformed(token)) => {
                debug!(token = %token, "discarding malformed token");
                Ok(Token::Malformed)
            }
            Err(e) => Err(e),
        }
    }
}
