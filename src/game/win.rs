//! Four-in-a-row detection.
//!
//! Every possible length-`k` window is enumerated for each of the four
//! alignment directions and checked cell by cell. The scans only read the
//! board, so the result is a pure function of the position and the player.

use std::ops::Range;

use super::{Board, Cell, Player};

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up a single column.
    Vertical,
    /// Along a single row.
    Horizontal,
    /// Bottom-left to top-right, "/".
    DiagonalUp,
    /// Top-left to bottom-right, "\".
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// The direction a run takes after reflecting the board left to right.
    pub fn mirrored(self) -> Direction {
        match self {
            Direction::DiagonalUp => Direction::DiagonalDown,
            Direction::DiagonalDown => Direction::DiagonalUp,
            other => other,
        }
    }

    /// Ranges of valid starting columns and rows for a window of length `k`.
    /// Empty whenever the board is too small in the relevant dimension.
    fn starts(self, cols: usize, rows: usize, k: usize) -> (Range<usize>, Range<usize>) {
        let span = |len: usize| 0..(len + 1).saturating_sub(k);
        match self {
            Direction::Vertical => (0..cols, span(rows)),
            Direction::Horizontal => (span(cols), 0..rows),
            Direction::DiagonalUp => (span(cols), span(rows)),
            Direction::DiagonalDown => (span(cols), k.saturating_sub(1)..rows),
        }
    }

    /// The `i`-th cell of a window starting at (`col`, `row`).
    fn step(self, col: usize, row: usize, i: usize) -> (usize, usize) {
        match self {
            Direction::Vertical => (col, row + i),
            Direction::Horizontal => (col + i, row),
            Direction::DiagonalUp => (col + i, row + i),
            Direction::DiagonalDown => (col + i, row - i),
        }
    }
}

/// A winning window: `len` same-owner cells starting at (`col`, `row`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub direction: Direction,
    pub col: usize,
    pub row: usize,
    pub len: usize,
}

impl Run {
    /// (column, row) coordinates covered by the run, in scan order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len).map(move |i| self.direction.step(self.col, self.row, i))
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        self.cells().any(|cell| cell == (col, row))
    }
}

/// Has `player` lined up [`WIN_LENGTH`] pieces anywhere on the board?
pub fn has_won<const C: usize, const R: usize>(board: &Board<C, R>, player: Player) -> bool {
    find_run(board, player, WIN_LENGTH).is_some()
}

/// First window of `k` cells owned by `player`, checking vertical,
/// horizontal, "/" and "\" windows in that order.
///
/// A `k` of zero never matches.
pub fn find_run<const C: usize, const R: usize>(
    board: &Board<C, R>,
    player: Player,
    k: usize,
) -> Option<Run> {
    Direction::ALL
        .into_iter()
        .find_map(|direction| find_run_in(board, player, k, direction))
}

/// First window of `k` cells owned by `player` along one direction.
pub fn find_run_in<const C: usize, const R: usize>(
    board: &Board<C, R>,
    player: Player,
    k: usize,
    direction: Direction,
) -> Option<Run> {
    if k == 0 {
        return None;
    }
    let target = Cell::OwnedBy(player);
    let (cols, rows) = direction.starts(C, R, k);

    for col in cols {
        for row in rows.clone() {
            let complete = (0..k).all(|i| {
                let (c, r) = direction.step(col, row, i);
                board.get(c, r) == target
            });
            if complete {
                return Some(Run {
                    direction,
                    col,
                    row,
                    len: k,
                });
            }
        }
    }

    None
}
