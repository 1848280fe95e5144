//! Menu options presented between moves.

use strum::IntoEnumIterator;

/// An option on the main menu.
///
/// Menu text is generated from this enum, so the numbering shown to the
/// player always matches what [`MenuChoice::from_choice`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MenuChoice {
    /// Place a mark.
    MakeMove,
    /// Reset the board and give X the turn.
    Restart,
    /// Leave the game.
    Quit,
}

impl MenuChoice {
    /// Label shown on the menu.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::MakeMove => "Make a move",
            MenuChoice::Restart => "Start Over",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Resolves a 1-based menu number; `None` for anything off the menu.
    pub fn from_choice(n: i32) -> Option<Self> {
        if n < 1 {
            return None;
        }
        Self::iter().nth(n as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers_resolve_in_order() {
        assert_eq!(MenuChoice::from_choice(1), Some(MenuChoice::MakeMove));
        assert_eq!(MenuChoice::from_choice(2), Some(MenuChoice::Restart));
        assert_eq!(MenuChoice::from_choice(3), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_off_menu_numbers_rejected() {
        assert_eq!(MenuChoice::from_choice(0), None);
        assert_eq!(MenuChoice::from_choice(4), None);
        assert_eq!(MenuChoice::from_choice(-2), None);
    }
}
