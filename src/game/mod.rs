//! Core Connect Four game logic: board representation, win detection,
//! player types, and the turn-driven game state.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{find_run, find_run_in, has_won, Direction, Run, WIN_LENGTH};
