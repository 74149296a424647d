//! Fixed 4x8 grid of optional pieces

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Piece, Player, Pos, BOARD_HEIGHT, BOARD_WIDTH};

/// Game board, indexed `cells[y][x]`.
///
/// The grid is a plain array; cloning a board for a simulated ply copies 32
/// cells and bumps the refcount of each piece id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Default::default(),
        }
    }

    /// Get piece at position. Out-of-bounds positions read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Piece> {
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .and_then(Option::as_ref)
    }

    /// Owner of the piece at position, if any
    #[inline]
    pub fn owner(&self, pos: Pos) -> Option<Player> {
        self.get(pos).map(|p| p.owner)
    }

    #[inline]
    pub fn is_owned_by(&self, pos: Pos, player: Player) -> bool {
        self.owner(pos) == Some(player)
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Put a piece on the board, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, pos: Pos, piece: Piece) -> Option<Piece> {
        self.cells[pos.y as usize][pos.x as usize].replace(piece)
    }

    /// Remove and return the piece at position
    #[inline]
    pub fn take(&mut self, pos: Pos) -> Option<Piece> {
        self.cells[pos.y as usize][pos.x as usize].take()
    }

    /// Number of pieces owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.pieces().filter(|(_, p)| p.owner == player).count()
    }

    /// Occupied cells in scan order
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, &Piece)> + '_ {
        Pos::all().filter_map(move |pos| self.get(pos).map(|p| (pos, p)))
    }

    /// Cells owned by `player` in scan order
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_owned_by(pos, player))
    }

    /// True if some piece of `player` has an empty neighbour.
    pub fn has_mobile_piece(&self, player: Player) -> bool {
        self.positions_of(player)
            .any(|pos| pos.adjacent().any(|adj| self.is_empty(adj)))
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.pieces().next().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for x in 0..BOARD_WIDTH {
            write!(f, " {x}  ")?;
        }
        writeln!(f)?;
        for y in 0..BOARD_HEIGHT {
            write!(f, "{y} ")?;
            for x in 0..BOARD_WIDTH {
                match self.get(Pos::new(x as u8, y as u8)) {
                    Some(p) => write!(f, "{}{} ", p.owner.initial(), p.kind.glyph())?,
                    None => write!(f, " .  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
