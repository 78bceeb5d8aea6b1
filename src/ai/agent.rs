use crate::game::GameState;

/// Universal interface for move-picking opponents.
pub trait Agent {
    /// Select a column for the player to move, or `None` if there is no
    /// legal column left.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
