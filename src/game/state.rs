use crate::error::MoveError;

use super::win::{find_run, Run, WIN_LENGTH};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A game in progress. Whose move it is follows from the turn number alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    turn: u32,
    outcome: Option<GameOutcome>,
    winning_run: Option<Run>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            turn: 1,
            outcome: None,
            winning_run: None,
        }
    }

    /// Current turn number, starting at 1
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The line that ended the game, if it was won
    pub fn winning_run(&self) -> Option<Run> {
        self.winning_run
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's piece into `column`, returning the row it
    /// landed on. A rejected move leaves the state untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player();
        let row = self.board.drop_piece(column, player)?;
        tracing::debug!(turn = self.turn, ?player, column, row, "move applied");
        self.turn += 1;

        // Only the mover can have completed a line.
        if let Some(run) = find_run(&self.board, player, WIN_LENGTH) {
            tracing::info!(?player, ?run, "game won");
            self.winning_run = Some(run);
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            tracing::info!("board full, game drawn");
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(row)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
