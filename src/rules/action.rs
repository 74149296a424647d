//! State transitions: PLACE, MOVE and BOMB
//!
//! Every transition validates its action against the snapshot, then works on
//! a fresh copy. A rejected action yields an unchanged copy of the input,
//! which is the only way rejection is reported.
//!
//! After the mutation, the acting player's board is scanned for a completed
//! line. A line is lifted back to the front of the actor's hand and the actor
//! keeps the turn in BOMBING; otherwise the turn passes. The win/loss check
//! then runs and may override the phase with GAMEOVER.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::board::{Phase, Player, Pos, Snapshot, WINNING_THRESHOLD};

use super::line::four_in_a_row;

/// A single player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Action {
    /// Put the front hand piece on an empty cell
    Place { to: Pos },
    /// Slide an own piece to an orthogonally adjacent empty cell
    Move { from: Pos, to: Pos },
    /// Drop the front hand piece onto an opponent piece, destroying it
    Bomb { target: Pos },
}

/// Check whether `action` is legal for the acting player.
pub fn is_legal(snapshot: &Snapshot, action: Action) -> bool {
    let player = snapshot.current_player;
    let board = &snapshot.board;
    let hand_ready = !snapshot.hands[player].is_empty();

    match action {
        Action::Place { to } => {
            snapshot.phase == Phase::Placing && to.in_bounds() && board.is_empty(to) && hand_ready
        }
        Action::Move { from, to } => {
            snapshot.phase == Phase::Moving
                && from.in_bounds()
                && to.in_bounds()
                && board.is_owned_by(from, player)
                && from.adjacent().any(|adj| adj == to)
                && board.is_empty(to)
        }
        Action::Bomb { target } => {
            snapshot.phase == Phase::Bombing
                && target.in_bounds()
                && board.is_owned_by(target, player.opponent())
                && hand_ready
        }
    }
}

/// Apply any action. Illegal actions return an unchanged copy.
pub fn apply(snapshot: &Snapshot, action: Action) -> Snapshot {
    if !is_legal(snapshot, action) {
        trace!(
            "rejected {:?} for {} in {:?}",
            action,
            snapshot.current_player,
            snapshot.phase
        );
        return snapshot.clone();
    }

    let actor = snapshot.current_player;
    let mut next = snapshot.clone();

    match action {
        Action::Place { to } => {
            let Some(piece) = next.hands[actor].draw() else {
                return snapshot.clone();
            };
            next.board.place(to, piece);
        }
        Action::Move { from, to } => {
            let Some(piece) = next.board.take(from) else {
                return snapshot.clone();
            };
            next.board.place(to, piece);
        }
        Action::Bomb { target } => {
            let Some(piece) = next.hands[actor].draw() else {
                return snapshot.clone();
            };
            // The displaced piece leaves the game for good
            next.board.place(target, piece);
        }
    }

    resolve(&mut next, actor);
    next
}

/// Place the front hand piece at `to`.
#[inline]
pub fn apply_place(snapshot: &Snapshot, to: Pos) -> Snapshot {
    apply(snapshot, Action::Place { to })
}

/// Slide the piece at `from` to `to`.
#[inline]
pub fn apply_move(snapshot: &Snapshot, from: Pos, to: Pos) -> Snapshot {
    apply(snapshot, Action::Move { from, to })
}

/// Bomb the opponent piece at `target`.
#[inline]
pub fn apply_bomb(snapshot: &Snapshot, target: Pos) -> Snapshot {
    apply(snapshot, Action::Bomb { target })
}

/// Shared post-mutation resolution for all three actions.
fn resolve(next: &mut Snapshot, actor: Player) {
    if let Some(line) = four_in_a_row(&next.board, actor) {
        let recycled: Vec<_> = line.iter().filter_map(|&pos| next.board.take(pos)).collect();
        next.hands[actor].recycle(recycled);

        // Chain: the actor keeps the turn, even with nothing left to bomb
        next.current_player = actor;
        next.phase = Phase::Bombing;
    } else {
        pass_turn(next, actor);
    }

    check_game_end(next);
}

fn pass_turn(next: &mut Snapshot, actor: Player) {
    let player = actor.opponent();
    next.current_player = player;
    next.phase = if next.hands[player].is_empty() {
        Phase::Moving
    } else {
        Phase::Placing
    };
}

/// Winner under the rules, ignoring any recorded winner.
fn rule_winner(snapshot: &Snapshot) -> Option<Player> {
    for player in Player::both() {
        if snapshot.total(player) < WINNING_THRESHOLD {
            return Some(player.opponent());
        }
    }

    let mover = snapshot.current_player;
    if snapshot.phase == Phase::Moving
        && snapshot.hands[mover].is_empty()
        && !snapshot.board.has_mobile_piece(mover)
    {
        // No legal move is a loss, not a draw
        return Some(mover.opponent());
    }

    None
}

fn check_game_end(next: &mut Snapshot) {
    if let Some(winner) = rule_winner(next) {
        next.winner = Some(winner);
        next.phase = Phase::GameOver;
    }
}

/// Winner of the position, if the game is decided.
pub fn winner(snapshot: &Snapshot) -> Option<Player> {
    snapshot.winner.or_else(|| rule_winner(snapshot))
}

/// Run the win/loss check on a caller-built snapshot.
pub fn resolve_game_end(snapshot: &Snapshot) -> Snapshot {
    let mut next = snapshot.clone();
    check_game_end(&mut next);
    next
}
