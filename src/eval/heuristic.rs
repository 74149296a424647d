//! Heuristic evaluation function for bombing-variant positions
//!
//! This module provides the static evaluation used at search leaves.
//! It scores a position from one player's perspective based on:
//! - Win/loss detection (piece threshold)
//! - Material (board + hand totals)
//! - Three-with-one-gap windows (one step from a line)
//! - Centre control
//! - Hand size
//! - Mobility (legal slides)

use crate::board::{Board, Player, Snapshot, WINNING_THRESHOLD};
use crate::rules::{count_threes, moves};

use super::EvalWeights;

/// Maximum centre value of a single cell
const CENTER_VALUE: i32 = 10;

/// Evaluate the snapshot from the perspective of `player`.
///
/// Returns a score where:
/// - Positive values indicate advantage for `player`
/// - `weights.winning` means the opponent has dropped below the threshold
/// - `weights.losing` means `player` has dropped below the threshold
///
/// Pure function of its inputs; no randomness.
#[must_use]
pub fn evaluate(snapshot: &Snapshot, player: Player, weights: &EvalWeights) -> i32 {
    let opponent = player.opponent();
    let board = &snapshot.board;

    let player_total = snapshot.total(player);
    let opponent_total = snapshot.total(opponent);

    if opponent_total < WINNING_THRESHOLD {
        return weights.winning;
    }
    if player_total < WINNING_THRESHOLD {
        return weights.losing;
    }
    // Decided by stalemate
    match snapshot.winner {
        Some(w) if w == player => return weights.winning,
        Some(_) => return weights.losing,
        None => {}
    }

    let material = (player_total as i32 - opponent_total as i32) * weights.piece_count;

    let potential = count_threes(board, player) as i32 * weights.three_in_row
        - count_threes(board, opponent) as i32 * weights.block_three;

    let control =
        (center_control(board, player) - center_control(board, opponent)) * weights.center_control;

    let hand = (snapshot.hands[player].len() as i32 - snapshot.hands[opponent].len() as i32)
        * weights.hand_advantage;

    let mobility = (moves(board, player).len() as i32 - moves(board, opponent).len() as i32)
        * weights.mobility;

    material + potential + control + hand + mobility
}

/// Sum of centre values over the cells `player` occupies.
///
/// A cell is worth `10 - manhattan distance to (2, 4)`.
fn center_control(board: &Board, player: Player) -> i32 {
    board
        .positions_of(player)
        .map(|pos| CENTER_VALUE - pos.center_distance())
        .sum()
}
