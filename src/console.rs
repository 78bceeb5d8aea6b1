//! Line-oriented front end: prints the grid, prompts for a 1-based column
//! number, and lets the opponent answer after every accepted move.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use crate::ai::Agent;
use crate::error::{BoardError, InputError, MoveError};
use crate::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};

/// Parse a typed, 1-based column number into a 0-based index.
pub fn parse_column(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))?;
    match usize::try_from(number) {
        Ok(n @ 1..=COLS) => Ok(n - 1),
        _ => Err(InputError::OutOfRange(number)),
    }
}

fn marker(cell: Cell) -> String {
    match cell {
        Cell::Empty => "#".to_string(),
        Cell::OwnedBy(Player::Human) => "O".blue().to_string(),
        Cell::OwnedBy(Player::Automated) => "X".green().to_string(),
    }
}

/// Write the grid top row first, with 1-based column headers.
pub fn render_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for col in 0..COLS {
        write!(out, " {}", col + 1)?;
    }
    writeln!(out)?;
    for row in (0..ROWS).rev() {
        for col in 0..COLS {
            write!(out, " {}", marker(board.get(col, row)))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn error_message(err: &MoveError) -> &'static str {
    match err {
        MoveError::Board(BoardError::ColumnFull { .. }) => "ERROR: COLUMN IS FULL.",
        MoveError::Board(_) => "ERROR: INPUT OUT OF BOUNDS.",
        MoveError::GameOver => "ERROR: THE GAME IS OVER.",
    }
}

/// Read one human move and apply it. Rejected input is reported and leaves
/// the turn unchanged, so the same player is asked again.
fn human_turn<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    state: &mut GameState,
) -> io::Result<()> {
    write!(out, "Enter a column number [1-{}]: ", COLS)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the game ended",
        ));
    }

    let column = match parse_column(&line) {
        Ok(column) => column,
        Err(err) => {
            tracing::warn!(%err, "rejected input");
            let text = match err {
                InputError::NotAnInteger(_) => "ERROR: INPUT MUST BE AN INTEGER.",
                InputError::OutOfRange(_) => "ERROR: INPUT OUT OF BOUNDS.",
            };
            writeln!(out, "{}", text.red())?;
            return Ok(());
        }
    };

    if let Err(err) = state.apply_move(column) {
        tracing::warn!(%err, column, "rejected move");
        writeln!(out, "{}", error_message(&err).red())?;
    }
    Ok(())
}

/// Play one full game against `agent`, returning how it ended.
pub fn play<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    agent: &mut dyn Agent,
) -> io::Result<GameOutcome> {
    let mut state = GameState::initial();
    tracing::info!(opponent = agent.name(), "console game started");

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }
        render_board(out, state.board())?;

        match state.current_player() {
            Player::Human => {
                human_turn(&mut input, out, &mut state)?;
            }
            Player::Automated => {
                let column = agent
                    .select_action(&state)
                    .ok_or_else(|| io::Error::other("opponent found no legal column"))?;
                state.apply_move(column).map_err(io::Error::other)?;
                writeln!(out, "{}", format!("AI chose column {}", column + 1).green())?;
            }
        }
    };

    render_board(out, state.board())?;
    let banner = match outcome {
        GameOutcome::Winner(Player::Human) => "YOU WIN! CONGRATULATIONS!".yellow().to_string(),
        GameOutcome::Winner(Player::Automated) => {
            "AI WINS! BETTER LUCK NEXT TIME!".red().to_string()
        }
        GameOutcome::Draw => "IT'S A TIE! NO ONE WINS!".to_string(),
    };
    writeln!(out, "{}", banner)?;
    tracing::info!(?outcome, turns = state.turn() - 1, "console game finished");

    Ok(outcome)
}
