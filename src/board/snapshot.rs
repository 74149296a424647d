//! Complete game state handed to every engine function

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Board, Hands, Player, WINNING_THRESHOLD};
use crate::error::EngineError;

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Acting player places the front piece of their hand
    Placing,
    /// Acting player slides one piece to an adjacent empty cell
    Moving,
    /// Acting player drops the front hand piece onto an opponent piece
    Bombing,
    /// Present in the wire format only; no action is legal in it
    Replacing,
    #[serde(rename = "GAMEOVER")]
    GameOver,
}

/// Self-contained game state. Engine functions take it by reference and
/// return a fresh copy; the caller's value is never touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub board: Board,
    pub hands: Hands,
    pub current_player: Player,
    #[serde(alias = "gameState")]
    pub phase: Phase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
}

impl Snapshot {
    pub fn new(board: Board, hands: Hands, current_player: Player, phase: Phase) -> Self {
        Self {
            board,
            hands,
            current_player,
            phase,
            winner: None,
        }
    }

    /// Opening position: empty board, full hands, RED to place.
    pub fn new_game() -> Self {
        Self::new(Board::new(), Hands::starting(), Player::Red, Phase::Placing)
    }

    /// Pieces on board plus pieces in hand
    #[inline]
    pub fn total(&self, player: Player) -> usize {
        self.board.count(player) + self.hands[player].len()
    }

    /// True if either player is below the loss threshold
    #[inline]
    pub fn below_threshold(&self) -> bool {
        Player::both()
            .into_iter()
            .any(|p| self.total(p) < WINNING_THRESHOLD)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Check structural invariants of a caller-supplied snapshot.
    ///
    /// Piece ids must be unique across board and hands, each hand may only
    /// hold its owner's pieces, and a winner is only recorded in GAMEOVER.
    pub fn validate(&self) -> Result<(), EngineError> {
        let mut seen = HashSet::new();
        for (_, piece) in self.board.pieces() {
            if !seen.insert(&piece.id) {
                return Err(EngineError::DuplicatePiece {
                    id: piece.id.clone(),
                });
            }
        }
        for player in Player::both() {
            for piece in self.hands[player].iter() {
                if piece.owner != player {
                    return Err(EngineError::HandOwnerMismatch {
                        id: piece.id.clone(),
                        hand: player,
                    });
                }
                if !seen.insert(&piece.id) {
                    return Err(EngineError::DuplicatePiece {
                        id: piece.id.clone(),
                    });
                }
            }
        }
        if self.winner.is_some() && self.phase != Phase::GameOver {
            return Err(EngineError::WinnerWithoutGameOver);
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new_game()
    }
}
