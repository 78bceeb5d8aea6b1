use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Automated,
}

impl Player {
    /// Player who owns the given turn. Turns start at 1; odd turns belong to
    /// the human.
    pub fn for_turn(turn: u32) -> Player {
        if turn % 2 == 1 {
            Player::Human
        } else {
            Player::Automated
        }
    }

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Automated,
            Player::Automated => Player::Human,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::OwnedBy(self)
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "You",
            Player::Automated => "AI",
        }
    }
}
