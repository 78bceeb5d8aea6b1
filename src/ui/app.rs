use crate::ai::Agent;
use crate::error::{BoardError, MoveError};
use crate::game::{GameOutcome, GameState, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    game_state: GameState,
    agent: Box<dyn Agent>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(agent: Box<dyn Agent>) -> Self {
        App {
            game_state: GameState::initial(),
            agent,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        tracing::info!(opponent = self.agent.name(), "tui game started");
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| -> io::Error { e.into() })?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play_turn(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits are 1-based like the column labels
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.play_turn(column);
            }
            KeyCode::Char('r') => {
                // Reset game
                self.game_state = GameState::initial();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
                tracing::info!("game restarted");
            }
            _ => {}
        }
    }

    /// Drop the human's piece in `column`, then let the opponent answer.
    fn play_turn(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if let Err(err) = self.game_state.apply_move(column) {
            tracing::warn!(%err, column, "rejected move");
            self.message = Some(
                match err {
                    MoveError::Board(BoardError::ColumnFull { .. }) => "Column is full!",
                    MoveError::Board(_) => "Invalid column!",
                    MoveError::GameOver => "Game is over!",
                }
                .to_string(),
            );
            return;
        }

        if !self.game_state.is_terminal() {
            self.opponent_turn();
        }

        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(outcome_message(outcome).to_string());
        }
    }

    fn opponent_turn(&mut self) {
        let Some(column) = self.agent.select_action(&self.game_state) else {
            tracing::error!("opponent found no legal column");
            return;
        };
        match self.game_state.apply_move(column) {
            Ok(_) => self.message = Some(format!("AI chose column {}", column + 1)),
            Err(err) => tracing::error!(%err, column, "opponent picked an illegal column"),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.agent.name(),
        );
    }
}

pub fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Winner(Player::Human) => "YOU WIN! CONGRATULATIONS!",
        GameOutcome::Winner(Player::Automated) => "AI WINS! BETTER LUCK NEXT TIME!",
        GameOutcome::Draw => "IT'S A TIE! NO ONE WINS!",
    }
}
