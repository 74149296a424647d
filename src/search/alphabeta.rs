//! Depth-limited minimax with alpha-beta pruning
//!
//! The search is rooted at a fixed player whose perspective the evaluator
//! always scores from. Whether a node maximizes or minimizes depends on
//! whose turn it is at that node, not on depth parity: a completed line
//! keeps the same player on move for the following bomb.
//!
//! # Phase-keyed expansion
//!
//! - PLACING and MOVING nodes recurse to the full remaining depth.
//! - BOMBING nodes are not deepened. Each target is resolved by one
//!   simulated bomb and scored by static evaluation. Chained bombs would
//!   otherwise multiply the branching factor without spending depth.
//!
//! Children are visited in generator (scan) order with no move ordering.
//!
//! # Example
//!
//! ```
//! use bombchess::board::{Player, Snapshot};
//! use bombchess::eval::EvalWeights;
//! use bombchess::search::{Searcher, INF};
//!
//! let snapshot = Snapshot::new_game();
//! let mut searcher = Searcher::new(EvalWeights::default(), Player::Red);
//! let score = searcher.search(&snapshot, 1);
//! assert!(score > -INF && score < INF);
//! assert!(searcher.nodes() > 0);
//! ```

use crate::board::{Phase, Player, Snapshot};
use crate::eval::{evaluate, EvalWeights};
use crate::rules::{apply_bomb, apply_move, apply_place, bomb_targets, moves, placements};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000_000;

/// Minimax searcher with a node counter.
///
/// Holds no position state: every node works on its own snapshot copy.
#[derive(Debug, Clone)]
pub struct Searcher {
    weights: EvalWeights,
    root: Player,
    nodes: u64,
    pruning: bool,
}

impl Searcher {
    /// Create a searcher that scores positions for `root`.
    #[must_use]
    pub fn new(weights: EvalWeights, root: Player) -> Self {
        Self {
            weights,
            root,
            nodes: 0,
            pruning: true,
        }
    }

    /// Disable alpha-beta cutoffs (plain minimax).
    #[must_use]
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Nodes entered since creation
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `snapshot` with a full window.
    pub fn search(&mut self, snapshot: &Snapshot, depth: u8) -> i32 {
        let maximizing = snapshot.current_player == self.root;
        self.alpha_beta(snapshot, depth, -INF, INF, maximizing)
    }

    /// Static score of a position for the root player.
    #[inline]
    fn leaf(&self, snapshot: &Snapshot) -> i32 {
        evaluate(snapshot, self.root, &self.weights)
    }

    /// Win or loss already on the board at this node.
    #[inline]
    fn is_decided(snapshot: &Snapshot) -> bool {
        snapshot.is_game_over() || snapshot.below_threshold()
    }

    /// Alpha-beta search. `maximizing` is true when the root player is on
    /// move at this node.
    pub fn alpha_beta(
        &mut self,
        snapshot: &Snapshot,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || Self::is_decided(snapshot) {
            return self.leaf(snapshot);
        }

        let player = snapshot.current_player;
        let mut best = if maximizing { -INF } else { INF };
        let mut visited = false;

        match snapshot.phase {
            Phase::Placing => {
                for to in placements(&snapshot.board) {
                    let child = apply_place(snapshot, to);
                    let score = self.descend(&child, depth - 1, alpha, beta);
                    visited = true;
                    if self.fold(score, maximizing, &mut best, &mut alpha, &mut beta) {
                        break;
                    }
                }
            }
            Phase::Moving => {
                for (from, to) in moves(&snapshot.board, player) {
                    let child = apply_move(snapshot, from, to);
                    let score = self.descend(&child, depth - 1, alpha, beta);
                    visited = true;
                    if self.fold(score, maximizing, &mut best, &mut alpha, &mut beta) {
                        break;
                    }
                }
            }
            Phase::Bombing => {
                // Horizon stops here: one simulated bomb, static score
                for target in bomb_targets(&snapshot.board, player) {
                    let child = apply_bomb(snapshot, target);
                    let score = self.leaf(&child);
                    visited = true;
                    if self.fold(score, maximizing, &mut best, &mut alpha, &mut beta) {
                        break;
                    }
                }
            }
            Phase::Replacing | Phase::GameOver => {}
        }

        if visited {
            best
        } else {
            self.leaf(snapshot)
        }
    }

    #[inline]
    fn descend(&mut self, child: &Snapshot, depth: u8, alpha: i32, beta: i32) -> i32 {
        let maximizing = child.current_player == self.root;
        self.alpha_beta(child, depth, alpha, beta, maximizing)
    }

    /// Fold a child score into the node. Returns true on cutoff.
    #[inline]
    fn fold(
        &self,
        score: i32,
        maximizing: bool,
        best: &mut i32,
        alpha: &mut i32,
        beta: &mut i32,
    ) -> bool {
        if maximizing {
            *best = (*best).max(score);
            *alpha = (*alpha).max(score);
        } else {
            *best = (*best).min(score);
            *beta = (*beta).min(score);
        }
        self.pruning && *beta <= *alpha
    }
}
