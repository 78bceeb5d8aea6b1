//! Opponents: the [`Agent`] trait and the uniform-random player.

mod agent;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;
