use crate::game::{Board, Cell, GameState, Player, Run, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    opponent: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(ROWS as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, opponent, chunks[0]);
    render_board(
        frame,
        game_state.board(),
        game_state.winning_run(),
        selected_column,
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => Color::Blue,
        Player::Automated => Color::Green,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, opponent: &str, area: Rect) {
    let player = game_state.current_player();

    let status = if game_state.is_terminal() {
        format!("Game Over  |  vs {} AI", opponent)
    } else {
        format!(
            "Turn {}  |  {} to move  |  vs {} AI",
            game_state.turn(),
            player.name(),
            opponent
        )
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

/// Arrow over the selected column, aligned with the board's 3-wide cells.
fn selection_line(selected_column: usize) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")]; // 3 chars to match "  ║"
    for col in 0..COLS {
        if col == selected_column {
            spans.push(Span::styled(" ▼ ", Style::default().fg(Color::Cyan)));
        } else {
            spans.push(Span::raw("   "));
        }
    }
    spans.push(Span::raw("  ")); // Suffix padding to match " ║"
    Line::from(spans)
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    winning_run: Option<Run>,
    selected_column: usize,
    area: Rect,
) {
    let mut lines = Vec::new();

    let mut labels = vec![Span::raw("   ")];
    for col in 0..COLS {
        let style = if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        labels.push(Span::styled(format!(" {} ", col + 1), style));
    }
    labels.push(Span::raw("  "));
    lines.push(Line::from(labels));
    lines.push(selection_line(selected_column));

    let border = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{}╗", border)));

    // Top row first so pieces appear to fall downward
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, mut style) = match board.get(col, row) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::OwnedBy(player) => (" ● ", Style::default().fg(player_color(player))),
            };
            if winning_run.is_some_and(|run| run.contains(col, row)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", border)));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(vec![
        Span::raw("←/→ Move | Enter/1-7 Drop | R Restart | Q Quit | "),
        Span::styled("You", Style::default().fg(player_color(Player::Human))),
        Span::raw(" vs "),
        Span::styled("AI", Style::default().fg(player_color(Player::Automated))),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
