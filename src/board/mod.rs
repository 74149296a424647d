//! Board representation for the bombing variant

pub mod board;
pub mod hand;
pub mod snapshot;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use hand::{Hand, Hands};
pub use snapshot::{Phase, Snapshot};

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Board width (columns)
pub const BOARD_WIDTH: usize = 4;
/// Board height (rows)
pub const BOARD_HEIGHT: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT; // 32

/// Minimum total piece count; a player below it has lost.
pub const WINNING_THRESHOLD: usize = 4;

/// Length of a completed line
pub const LINE_LEN: usize = 4;

/// Player colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Both players, RED first
    pub fn both() -> [Player; 2] {
        [Player::Red, Player::Black]
    }

    #[inline]
    pub fn initial(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Black => 'B',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "RED"),
            Player::Black => write!(f, "BLACK"),
        }
    }
}

/// Cosmetic piece tag.
///
/// Inherited from the classical variant; only ownership matters to the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "帅")]
    Marshal,
    #[serde(rename = "仕")]
    Mandarin,
    #[serde(rename = "相")]
    Minister,
    #[serde(rename = "马")]
    Horse,
    #[serde(rename = "车")]
    Chariot,
    #[serde(rename = "炮")]
    Cannon,
    #[serde(rename = "兵")]
    Soldier,
    #[serde(rename = "将")]
    General,
    #[serde(rename = "士")]
    Guard,
    #[serde(rename = "象")]
    Elephant,
    #[serde(rename = "卒")]
    Pawn,
}

impl PieceKind {
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Marshal => '帅',
            PieceKind::Mandarin => '仕',
            PieceKind::Minister => '相',
            PieceKind::Horse => '马',
            PieceKind::Chariot => '车',
            PieceKind::Cannon => '炮',
            PieceKind::Soldier => '兵',
            PieceKind::General => '将',
            PieceKind::Guard => '士',
            PieceKind::Elephant => '象',
            PieceKind::Pawn => '卒',
        }
    }

    /// Opening hand composition for a player, in draw order.
    pub fn starting_set(player: Player) -> [PieceKind; 16] {
        use PieceKind::*;
        match player {
            Player::Red => [
                Marshal, Mandarin, Mandarin, Minister, Minister, Horse, Horse, Chariot, Chariot,
                Cannon, Cannon, Soldier, Soldier, Soldier, Soldier, Soldier,
            ],
            Player::Black => [
                General, Guard, Guard, Elephant, Elephant, Horse, Horse, Chariot, Chariot,
                Cannon, Cannon, Pawn, Pawn, Pawn, Pawn, Pawn,
            ],
        }
    }
}

/// Identity token of a piece, e.g. `RED-0`.
///
/// Shared rather than owned so that cloning a board stays allocation-free.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(Arc<str>);

impl PieceId {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PieceId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for PieceId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl PartialEq<&str> for PieceId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single piece: identity, cosmetic tag and owner
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    #[inline]
    pub fn new(id: impl Into<PieceId>, kind: PieceKind, owner: Player) -> Self {
        Self {
            id: id.into(),
            kind,
            owner,
        }
    }
}

/// Position on the board (x: column, y: row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.x as usize) < BOARD_WIDTH && (self.y as usize) < BOARD_HEIGHT
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_WIDTH + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_WIDTH) as u8,
            y: (idx / BOARD_WIDTH) as u8,
        }
    }

    /// All cells in scan order (row-major).
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }

    /// Orthogonal neighbours inside the board: left, right, up, down.
    pub fn adjacent(self) -> impl Iterator<Item = Pos> {
        let (x, y) = (i32::from(self.x), i32::from(self.y));
        [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
            .into_iter()
            .filter(|&(ax, ay)| Pos::is_valid(ax, ay))
            .map(|(ax, ay)| Pos::new(ax as u8, ay as u8))
    }

    /// Manhattan distance to the board centre (W/2, H/2).
    #[inline]
    pub fn center_distance(self) -> i32 {
        let cx = (BOARD_WIDTH / 2) as i32;
        let cy = (BOARD_HEIGHT / 2) as i32;
        (i32::from(self.x) - cx).abs() + (i32::from(self.y) - cy).abs()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
