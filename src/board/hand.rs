//! Player hands: FIFO queues of pieces not on the board

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::{Piece, PieceKind, Player};

/// A player's hand. The front piece is the next one played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand(VecDeque<Piece>);

impl Hand {
    pub fn new() -> Self {
        Self(VecDeque::new())
    }

    /// Standard 16-piece opening hand with ids `RED-0`..`RED-15` or
    /// `BLACK-0`..`BLACK-15`.
    pub fn starting(player: Player) -> Self {
        PieceKind::starting_set(player)
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Piece::new(format!("{player}-{i}"), kind, player))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Next piece to be played
    #[inline]
    pub fn front(&self) -> Option<&Piece> {
        self.0.front()
    }

    /// Remove the front piece
    #[inline]
    pub fn draw(&mut self) -> Option<Piece> {
        self.0.pop_front()
    }

    /// Prepend recycled pieces, keeping their order: `line[0]` becomes the front.
    pub fn recycle(&mut self, line: impl IntoIterator<Item = Piece>) {
        let line: Vec<Piece> = line.into_iter().collect();
        for piece in line.into_iter().rev() {
            self.0.push_front(piece);
        }
    }

    pub fn push_back(&mut self, piece: Piece) {
        self.0.push_back(piece);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.0.iter()
    }
}

impl FromIterator<Piece> for Hand {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Both hands, addressable by player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hands {
    #[serde(rename = "RED")]
    pub red: Hand,
    #[serde(rename = "BLACK")]
    pub black: Hand,
}

impl Hands {
    pub fn starting() -> Self {
        Self {
            red: Hand::starting(Player::Red),
            black: Hand::starting(Player::Black),
        }
    }
}

impl Index<Player> for Hands {
    type Output = Hand;

    fn index(&self, player: Player) -> &Hand {
        match player {
            Player::Red => &self.red,
            Player::Black => &self.black,
        }
    }
}

impl IndexMut<Player> for Hands {
    fn index_mut(&mut self, player: Player) -> &mut Hand {
        match player {
            Player::Red => &mut self.red,
            Player::Black => &mut self.black,
        }
    }
}
