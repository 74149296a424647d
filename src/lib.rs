//! Bombing-variant four-in-a-row AI engine
//!
//! An engine for a two-player game played on a 4-wide, 8-tall board:
//! - Each side starts with 16 pieces in hand (a FIFO queue)
//! - PLACING: drop the front hand piece on any empty cell
//! - MOVING: once hands are empty, slide a piece to an adjacent empty cell
//! - Four in a row (any direction) returns the line to the owner's hand
//!   front and grants a BOMB: drop the next hand piece onto an opponent piece,
//!   which is gone for good
//! - A player whose board plus hand total drops below 4 loses
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board, hands and the [`Snapshot`] value handed to every call
//! - [`rules`]: Line detection, state transitions and move generation
//! - [`eval`]: Static position evaluation with configurable weights
//! - [`search`]: Phase-aware alpha-beta minimax
//! - [`engine`]: Decision layer returning a recommended action
//! - [`config`]: Depth presets and JSON configuration
//!
//! # Quick Start
//!
//! ```
//! use bombchess::{apply, AIEngine, Snapshot};
//!
//! let engine = AIEngine::new();
//! let mut snapshot = Snapshot::new_game();
//!
//! // Play a few plies engine against itself
//! for _ in 0..4 {
//!     let result = engine.best_move(&snapshot, 1);
//!     match result.action() {
//!         Some(action) => snapshot = apply(&snapshot, action),
//!         None => break,
//!     }
//! }
//! assert_eq!(snapshot.board.count(bombchess::Player::Red), 2);
//! ```
//!
//! # Decision Priority
//!
//! 1. Immediate line for the player on move (PLACING, MOVING)
//! 2. Block the opponent's immediate line (PLACING)
//! 3. Alpha-beta search; BOMBING uses one-ply greedy scoring instead
//!
//! Every function is a pure function of its inputs. The snapshot passed in
//! is never modified and results are fully deterministic.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{
    Board, Phase, Piece, PieceId, PieceKind, Player, Pos, Snapshot, BOARD_HEIGHT, BOARD_WIDTH,
};
pub use config::{AiLevel, EngineConfig};
pub use engine::{
    best_move, quick_evaluate, AIEngine, AiMove, EvaluationResult, MoveKind, SearchType,
};
pub use error::EngineError;
pub use eval::{evaluate, EvalWeights};
pub use rules::{apply, legal_actions, winner, Action};
