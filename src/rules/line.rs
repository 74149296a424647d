//! Four-in-a-row detection
//!
//! Every window of four cells is precomputed once, in scan order:
//! horizontal runs row-major, vertical runs column-major, then down-right
//! and down-left diagonals. The first complete window wins ties, so the
//! order of [`lines`] is observable.

use once_cell::sync::Lazy;

use crate::board::{Board, Player, Pos, BOARD_HEIGHT, BOARD_WIDTH, LINE_LEN};

/// A window of four cells along one direction
pub type Line = [Pos; LINE_LEN];

static LINES: Lazy<Vec<Line>> = Lazy::new(generate_lines);

fn window(x: usize, y: usize, dx: i32, dy: i32) -> Line {
    let mut line = [Pos::new(0, 0); LINE_LEN];
    for (i, cell) in line.iter_mut().enumerate() {
        let cx = x as i32 + dx * i as i32;
        let cy = y as i32 + dy * i as i32;
        *cell = Pos::new(cx as u8, cy as u8);
    }
    line
}

fn generate_lines() -> Vec<Line> {
    let reach = LINE_LEN - 1;
    let mut lines = Vec::new();

    // Horizontal
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH - reach {
            lines.push(window(x, y, 1, 0));
        }
    }
    // Vertical
    for x in 0..BOARD_WIDTH {
        for y in 0..BOARD_HEIGHT - reach {
            lines.push(window(x, y, 0, 1));
        }
    }
    // Diagonal down-right
    for y in 0..BOARD_HEIGHT - reach {
        for x in 0..BOARD_WIDTH - reach {
            lines.push(window(x, y, 1, 1));
        }
    }
    // Diagonal down-left
    for y in 0..BOARD_HEIGHT - reach {
        for x in reach..BOARD_WIDTH {
            lines.push(window(x, y, -1, 1));
        }
    }

    lines
}

/// All four-cell windows in scan order
#[inline]
pub fn lines() -> &'static [Line] {
    &LINES
}

/// First complete line owned by `player`, in scan order.
pub fn four_in_a_row(board: &Board, player: Player) -> Option<Line> {
    lines()
        .iter()
        .find(|line| line.iter().all(|&pos| board.is_owned_by(pos, player)))
        .copied()
}

#[inline]
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    four_in_a_row(board, player).is_some()
}

/// Windows holding exactly three pieces of `player` and one empty cell.
pub fn count_threes(board: &Board, player: Player) -> usize {
    lines()
        .iter()
        .filter(|line| {
            let owned = line.iter().filter(|&&pos| board.is_owned_by(pos, player)).count();
            let empty = line.iter().filter(|&&pos| board.is_empty(pos)).count();
            owned == LINE_LEN - 1 && empty == 1
        })
        .count()
}

/// Would a `player` piece dropped on empty `pos` complete a line?
pub fn completes_line_at(board: &Board, pos: Pos, player: Player) -> bool {
    board.is_empty(pos)
        && lines().iter().any(|line| {
            line.contains(&pos)
                && line
                    .iter()
                    .all(|&cell| cell == pos || board.is_owned_by(cell, player))
        })
}

/// Empty cells where `player` would complete a line by placing, in scan order.
pub fn winning_cells(board: &Board, player: Player) -> Vec<Pos> {
    Pos::all()
        .filter(|&pos| completes_line_at(board, pos, player))
        .collect()
}
