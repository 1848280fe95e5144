//! Menu-driven console interaction loop.

mod input;
mod menu;
mod session;

pub use input::{InputError, TokenReader};
pub use menu::MenuChoice;
pub use session::{LoopState, Session};
