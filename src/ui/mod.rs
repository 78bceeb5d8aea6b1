//! Terminal UI: a ratatui view of the board where the human drops pieces
//! and the opponent answers immediately.

mod app;
mod game_view;

pub use app::{outcome_message, App};
