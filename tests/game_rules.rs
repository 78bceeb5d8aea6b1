use connect_four::error::{BoardError, MoveError};
use connect_four::game::{
    find_run_in, has_won, Board, Cell, Direction, GameOutcome, GameState, Player, COLS, ROWS,
    WIN_LENGTH,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Drop random pieces for random players, ignoring wins, until `count`
/// pieces are placed or the board fills.
fn random_board(rng: &mut StdRng, count: usize) -> Board {
    let mut board: Board = Board::new();
    for _ in 0..count {
        let legal = board.legal_columns();
        if legal.is_empty() {
            break;
        }
        let col = legal[rng.random_range(0..legal.len())];
        let player = if rng.random_bool(0.5) {
            Player::Human
        } else {
            Player::Automated
        };
        board.drop_piece(col, player).unwrap();
    }
    board
}

fn assert_gravity(board: &Board) {
    for col in 0..COLS {
        let mut seen_empty = false;
        for row in 0..ROWS {
            match board.cell_at(col, row).unwrap() {
                Cell::Empty => seen_empty = true,
                Cell::OwnedBy(_) => assert!(
                    !seen_empty,
                    "floating piece at ({}, {})",
                    col, row
                ),
            }
        }
    }
}

#[test]
fn gravity_holds_after_every_drop() {
    let mut rng = StdRng::seed_from_u64(0xC4);
    for _ in 0..200 {
        let mut board: Board = Board::new();
        while !board.is_full() {
            let legal = board.legal_columns();
            // Mostly random, sometimes the left-most open column
            let col = if rng.random_bool(0.8) {
                legal[rng.random_range(0..legal.len())]
            } else {
                legal[0]
            };
            board.drop_piece(col, Player::Human).unwrap();
            assert_gravity(&board);
        }
        assert!(board.is_full());
    }
}

#[test]
fn legal_columns_match_column_fullness() {
    let mut rng = StdRng::seed_from_u64(17);
    for count in 0..=(COLS * ROWS) {
        let board = random_board(&mut rng, count);
        let legal = board.legal_columns();
        for col in 0..COLS {
            assert_eq!(legal.contains(&col), !board.is_column_full(col).unwrap());
        }
        assert_eq!(legal.is_empty(), board.is_full());
    }
}

#[test]
fn win_detection_is_mirror_symmetric() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let count = rng.random_range(0..=COLS * ROWS);
        let board = random_board(&mut rng, count);
        let mirror = board.mirrored();

        for player in [Player::Human, Player::Automated] {
            assert_eq!(has_won(&board, player), has_won(&mirror, player));
            for direction in Direction::ALL {
                assert_eq!(
                    find_run_in(&board, player, WIN_LENGTH, direction).is_some(),
                    find_run_in(&mirror, player, WIN_LENGTH, direction.mirrored()).is_some(),
                    "{:?} for {:?}",
                    direction,
                    player
                );
            }
        }
    }
}

#[test]
fn no_simultaneous_win_when_checked_every_move() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let mut state = GameState::initial();
        while !state.is_terminal() {
            let legal = state.legal_actions();
            state
                .apply_move(legal[rng.random_range(0..legal.len())])
                .unwrap();
            let board = state.board();
            assert!(!(has_won(board, Player::Human) && has_won(board, Player::Automated)));
        }

        match state.outcome() {
            Some(GameOutcome::Winner(player)) => {
                assert!(has_won(state.board(), player));
                assert!(!has_won(state.board(), player.other()));
            }
            Some(GameOutcome::Draw) => {
                assert!(state.board().is_full());
                assert!(!has_won(state.board(), Player::Human));
                assert!(!has_won(state.board(), Player::Automated));
            }
            None => unreachable!("loop exits only on a terminal state"),
        }
    }
}

#[test]
fn vertical_win_in_first_column() {
    let mut board: Board = Board::new();
    for _ in 0..4 {
        board.drop_piece(0, Player::Human).unwrap();
    }
    assert!(has_won(&board, Player::Human));
    assert!(!has_won(&board, Player::Automated));
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    // Pairs of rows alternate owners, shifted by one on every column.
    let mut board: Board = Board::new();
    for col in 0..COLS {
        for row in 0..ROWS {
            let player = if (row / 2 + col) % 2 == 0 {
                Player::Human
            } else {
                Player::Automated
            };
            assert_eq!(board.drop_piece(col, player), Ok(row));
        }
    }
    assert!(board.is_full());
    assert_eq!(board.piece_count(), 42);
    assert!(!has_won(&board, Player::Human));
    assert!(!has_won(&board, Player::Automated));
}

#[test]
fn ascending_diagonal_win() {
    let mut board: Board = Board::new();
    for col in 0..4 {
        // Supporting pieces so the diagonal cell sits at row == col
        for _ in 0..col {
            board.drop_piece(col, Player::Human).unwrap();
        }
        assert_eq!(board.drop_piece(col, Player::Automated), Ok(col));
    }
    assert!(has_won(&board, Player::Automated));
    assert!(find_run_in(&board, Player::Automated, WIN_LENGTH, Direction::DiagonalUp).is_some());
}

#[test]
fn drop_out_of_bounds_is_rejected() {
    let mut board: Board = Board::new();
    let err = board.drop_piece(7, Player::Human).unwrap_err();
    assert!(err.is_out_of_range());
    assert_eq!(board, Board::new());
}

#[test]
fn drop_into_full_column_is_rejected() {
    let mut board: Board = Board::new();
    for i in 0..ROWS {
        let player = if i % 2 == 0 { Player::Human } else { Player::Automated };
        board.drop_piece(2, player).unwrap();
    }
    for player in [Player::Human, Player::Automated] {
        assert_eq!(board.drop_piece(2, player), Err(BoardError::ColumnFull { col: 2 }));
    }
}

#[test]
fn turn_parity_decides_the_mover() {
    let mut state = GameState::initial();
    assert_eq!(state.current_player(), Player::Human);

    for (i, col) in [3, 3, 4, 4, 5].into_iter().enumerate() {
        let mover = state.current_player();
        let row = state.apply_move(col).unwrap();
        assert_eq!(state.board().cell_at(col, row), Ok(Cell::OwnedBy(mover)));
        let expected = if i % 2 == 0 { Player::Human } else { Player::Automated };
        assert_eq!(mover, expected);
    }

    // A rejected move does not flip the turn.
    let before = state.current_player();
    assert!(matches!(
        state.apply_move(COLS),
        Err(MoveError::Board(BoardError::ColumnOutOfRange { .. }))
    ));
    assert_eq!(state.current_player(), before);
}
