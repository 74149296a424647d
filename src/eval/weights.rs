//! Evaluation weights
//!
//! Weights live in an immutable value passed to the evaluator instead of
//! global constants, so tests and tuning can swap them per call.

use serde::{Deserialize, Serialize};

/// Scoring weights for the heuristic and the decision layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per piece of total (board + hand) advantage
    pub piece_count: i32,
    /// Per own three-with-one-gap window
    pub three_in_row: i32,
    /// Per opponent three-with-one-gap window (subtracted)
    pub block_three: i32,
    /// Per point of centre value advantage
    pub center_control: i32,
    /// Per piece of hand size advantage
    pub hand_advantage: i32,
    /// Per legal slide advantage
    pub mobility: i32,
    /// Opponent below threshold
    pub winning: i32,
    /// Own total below threshold
    pub losing: i32,
    /// Bonus for a root candidate that completes a line
    pub immediate_four: i32,
    /// Score of a forced block; also scales bombs that remove winning cells
    pub block_opponent_four: i32,
}

impl EvalWeights {
    pub const DEFAULT: EvalWeights = EvalWeights {
        piece_count: 100,
        three_in_row: 200,
        block_three: 150,
        center_control: 20,
        hand_advantage: 30,
        mobility: 15,
        winning: 10_000,
        losing: -10_000,
        immediate_four: 5_000,
        block_opponent_four: 4_500,
    };
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
