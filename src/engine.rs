//! Decision layer integrating tactical shortcuts and search
//!
//! This module provides the engine that recommends an action for the player
//! on move. The approach depends on the phase:
//!
//! 1. **PLACING**: immediate line for us, then a forced block against the
//!    opponent's immediate line, then minimax over every empty cell
//! 2. **MOVING**: immediate line for us, then minimax over every slide
//! 3. **BOMBING**: no search; every target is scored by one-ply static
//!    evaluation plus bonuses for breaking opponent threats
//!
//! Candidates are compared with strict `>` so the first generated action
//! reaching the best score wins. Scan order is part of the result.
//!
//! # Example
//!
//! ```
//! use bombchess::board::{Pos, Snapshot};
//! use bombchess::engine::{AIEngine, MoveKind};
//!
//! let engine = AIEngine::new();
//! let snapshot = Snapshot::new_game();
//!
//! let result = engine.best_move(&snapshot, 1);
//! let best = result.best_move.unwrap();
//! assert_eq!(best.kind, MoveKind::Place);
//! assert_eq!(best.position, Pos::new(2, 4));
//! ```

use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::{Phase, Pos, Snapshot};
use crate::config::{AiLevel, EngineConfig};
use crate::eval::{evaluate, EvalWeights};
use crate::rules::{
    apply_bomb, apply_move, apply_place, bomb_targets, count_threes, has_four_in_a_row, moves,
    placements, winning_cells, Action,
};
use crate::search::{Searcher, INF};

/// How the recommendation was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    /// Completes a line right now
    ImmediateWin,
    /// Occupies the cell where the opponent would complete a line
    Block,
    /// Full minimax over the phase's candidates
    Minimax,
    /// One-ply static scoring of bomb targets
    BombGreedy,
    /// No candidate action exists
    NoMove,
}

/// Kind of recommended action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MoveKind {
    Place,
    Move,
    Bomb,
}

/// A recommended action with its local score and a readable rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMove {
    #[serde(rename = "type")]
    pub kind: MoveKind,
    /// Destination (PLACE, MOVE) or target (BOMB)
    pub position: Pos,
    /// Source cell, MOVE only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Pos>,
    pub score: i32,
    pub reasoning: String,
}

impl AiMove {
    fn place(position: Pos, score: i32, reasoning: String) -> Self {
        Self {
            kind: MoveKind::Place,
            position,
            from: None,
            score,
            reasoning,
        }
    }

    fn slide(from: Pos, to: Pos, score: i32, reasoning: String) -> Self {
        Self {
            kind: MoveKind::Move,
            position: to,
            from: Some(from),
            score,
            reasoning,
        }
    }

    fn bomb(target: Pos, score: i32, reasoning: String) -> Self {
        Self {
            kind: MoveKind::Bomb,
            position: target,
            from: None,
            score,
            reasoning,
        }
    }

    /// The action to feed back into [`crate::rules::apply`].
    pub fn action(&self) -> Action {
        match self.kind {
            MoveKind::Place => Action::Place { to: self.position },
            // A slide without a source becomes a zero-length move, which is rejected
            MoveKind::Move => Action::Move {
                from: self.from.unwrap_or(self.position),
                to: self.position,
            },
            MoveKind::Bomb => Action::Bomb {
                target: self.position,
            },
        }
    }
}

/// Result of a decision with search diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Score of the recommended action for the player on move
    pub score: i32,
    /// Recommended action, if any candidate exists
    pub best_move: Option<AiMove>,
    /// Depth requested
    pub depth: u8,
    /// Nodes entered by the minimax search
    pub nodes_searched: u64,
    /// Which path produced the result
    pub search_type: SearchType,
}

impl EvaluationResult {
    #[inline]
    fn shortcut(mv: AiMove, depth: u8, search_type: SearchType) -> Self {
        Self {
            score: mv.score,
            best_move: Some(mv),
            depth,
            nodes_searched: 0,
            search_type,
        }
    }

    #[inline]
    fn no_move(score: i32, depth: u8) -> Self {
        Self {
            score,
            best_move: None,
            depth,
            nodes_searched: 0,
            search_type: SearchType::NoMove,
        }
    }

    /// Action of the recommended move
    pub fn action(&self) -> Option<Action> {
        self.best_move.as_ref().map(AiMove::action)
    }
}

/// Main AI engine for the bombing variant.
///
/// The engine holds only configuration; every call is a pure function of the
/// snapshot and depth, so identical inputs produce identical results
/// (including the node count).
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with default settings (depth 3, default weights).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_level(level: AiLevel) -> Self {
        Self::with_config(EngineConfig::with_level(level))
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    fn weights(&self) -> &EvalWeights {
        &self.config.weights
    }

    /// Recommend an action at the configured depth.
    #[must_use]
    pub fn suggest(&self, snapshot: &Snapshot) -> EvaluationResult {
        self.best_move(snapshot, self.config.depth)
    }

    /// Recommend an action for the player on move.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - Position to analyse; never modified
    /// * `depth` - Search depth in plies (BOMBING is exempt)
    #[must_use]
    pub fn best_move(&self, snapshot: &Snapshot, depth: u8) -> EvaluationResult {
        let start = Instant::now();

        let result = match snapshot.phase {
            Phase::Placing => self.best_placement(snapshot, depth),
            Phase::Moving => self.best_slide(snapshot, depth),
            Phase::Bombing => self.best_bomb(snapshot, depth),
            Phase::Replacing | Phase::GameOver => {
                EvaluationResult::no_move(self.quick_evaluate(snapshot), depth)
            }
        };

        debug!(
            "{:?} for {} in {:?}: score {} nodes {} ({:?})",
            result.search_type,
            snapshot.current_player,
            snapshot.phase,
            result.score,
            result.nodes_searched,
            start.elapsed()
        );
        result
    }

    /// Static score of the position for the player on move, without search.
    #[must_use]
    pub fn quick_evaluate(&self, snapshot: &Snapshot) -> i32 {
        evaluate(snapshot, snapshot.current_player, self.weights())
    }

    fn best_placement(&self, snapshot: &Snapshot, depth: u8) -> EvaluationResult {
        let player = snapshot.current_player;
        let board = &snapshot.board;
        let w = self.weights();

        let candidates = placements(board);
        if candidates.is_empty() || snapshot.hands[player].is_empty() {
            return EvaluationResult::no_move(self.quick_evaluate(snapshot), depth);
        }

        // 1. Complete our own line
        if let Some(&pos) = winning_cells(board, player).first() {
            let mv = AiMove::place(
                pos,
                w.winning,
                format!("Place at {pos} completes four in a row immediately"),
            );
            return EvaluationResult::shortcut(mv, depth, SearchType::ImmediateWin);
        }

        // 2. Block the opponent's line
        if let Some(&pos) = winning_cells(board, player.opponent()).first() {
            let mv = AiMove::place(
                pos,
                w.block_opponent_four,
                format!("Place at {pos} blocks the opponent's four in a row"),
            );
            return EvaluationResult::shortcut(mv, depth, SearchType::Block);
        }

        // 3. Minimax
        let mut searcher = Searcher::new(*w, player);
        let mut best_score = -INF;
        let mut best_move = None;

        for to in candidates {
            let child = apply_place(snapshot, to);
            let score = searcher.search(&child, depth.saturating_sub(1));

            let completed = has_four_in_a_row(&child.board, player);
            let adjusted = if completed { score + w.immediate_four } else { score };

            if adjusted > best_score {
                best_score = adjusted;
                let reasoning = if completed {
                    format!("Place at {to} completes four in a row")
                } else {
                    format!("Place at {to} (score {adjusted})")
                };
                best_move = Some(AiMove::place(to, adjusted, reasoning));
            }
        }

        EvaluationResult {
            score: best_score,
            best_move,
            depth,
            nodes_searched: searcher.nodes(),
            search_type: SearchType::Minimax,
        }
    }

    fn best_slide(&self, snapshot: &Snapshot, depth: u8) -> EvaluationResult {
        let player = snapshot.current_player;
        let w = self.weights();

        let candidates = moves(&snapshot.board, player);
        if candidates.is_empty() {
            return EvaluationResult::no_move(self.quick_evaluate(snapshot), depth);
        }

        // 1. Complete our own line
        for &(from, to) in &candidates {
            let mut test_board = snapshot.board.clone();
            if let Some(piece) = test_board.take(from) {
                test_board.place(to, piece);
            }
            if has_four_in_a_row(&test_board, player) {
                let mv = AiMove::slide(
                    from,
                    to,
                    w.winning,
                    format!("Move {from} -> {to} completes four in a row immediately"),
                );
                return EvaluationResult::shortcut(mv, depth, SearchType::ImmediateWin);
            }
        }

        // 2. Minimax
        let mut searcher = Searcher::new(*w, player);
        let mut best_score = -INF;
        let mut best_move = None;

        for (from, to) in candidates {
            let child = apply_move(snapshot, from, to);
            let score = searcher.search(&child, depth.saturating_sub(1));

            let completed = has_four_in_a_row(&child.board, player);
            let adjusted = if completed { score + w.immediate_four } else { score };

            if adjusted > best_score {
                best_score = adjusted;
                let reasoning = if completed {
                    format!("Move {from} -> {to} completes four in a row")
                } else {
                    format!("Move {from} -> {to} (score {adjusted})")
                };
                best_move = Some(AiMove::slide(from, to, adjusted, reasoning));
            }
        }

        EvaluationResult {
            score: best_score,
            best_move,
            depth,
            nodes_searched: searcher.nodes(),
            search_type: SearchType::Minimax,
        }
    }

    fn best_bomb(&self, snapshot: &Snapshot, depth: u8) -> EvaluationResult {
        let player = snapshot.current_player;
        let opponent = player.opponent();
        let w = self.weights();

        let targets = bomb_targets(&snapshot.board, player);
        if targets.is_empty() || snapshot.hands[player].is_empty() {
            return EvaluationResult::no_move(self.quick_evaluate(snapshot), depth);
        }

        let threes_before = count_threes(&snapshot.board, opponent) as i32;
        let wins_before = winning_cells(&snapshot.board, opponent).len() as i32;

        let mut best_score = -INF;
        let mut best_move = None;

        for target in targets {
            let child = apply_bomb(snapshot, target);
            let score = evaluate(&child, player, w);

            let threes_after = count_threes(&child.board, opponent) as i32;
            let wins_after = winning_cells(&child.board, opponent).len() as i32;
            let block_value = (threes_before - threes_after) * w.block_three;
            let block_win_value = (wins_before - wins_after) * w.block_opponent_four;

            let adjusted = score + block_value + block_win_value;

            if adjusted > best_score {
                best_score = adjusted;
                let reasoning = if block_win_value > 0 {
                    format!("Bomb {target} stops the opponent's immediate four in a row")
                } else if block_value > 0 {
                    format!("Bomb {target} breaks an opponent three")
                } else {
                    format!("Bomb {target} (score {adjusted})")
                };
                best_move = Some(AiMove::bomb(target, adjusted, reasoning));
            }
        }

        EvaluationResult {
            score: best_score,
            best_move,
            depth,
            nodes_searched: 0,
            search_type: SearchType::BombGreedy,
        }
    }
}

/// Recommend an action with the default configuration.
#[must_use]
pub fn best_move(snapshot: &Snapshot, depth: u8) -> EvaluationResult {
    AIEngine::new().best_move(snapshot, depth)
}

/// Static score for the player on move with default weights.
#[must_use]
pub fn quick_evaluate(snapshot: &Snapshot) -> i32 {
    AIEngine::new().quick_evaluate(snapshot)
}
