//! # Connect Four
//!
//! Connect Four on a 7×6 grid, played by a human against an opponent that
//! picks uniformly at random among the open columns.
//!
//! ## Modules
//!
//! - [`game`]: board, win detection, players, turn-driven game state
//! - [`ai`]: the `Agent` trait and the random opponent
//! - [`ui`]: full-screen terminal UI
//! - [`console`]: line-based prompt front end
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod ui;
