//! Game rules for the bombing variant
//!
//! This module implements:
//! - Four-in-a-row detection and adjacency
//! - State transitions (place, move, bomb) with chain resolution
//! - Win conditions (piece threshold, no legal move)
//! - Legal action generation

pub mod action;
pub mod line;
pub mod movegen;

// Re-exports for convenient access
pub use action::{
    apply, apply_bomb, apply_move, apply_place, is_legal, resolve_game_end, winner, Action,
};
pub use line::{
    completes_line_at, count_threes, four_in_a_row, has_four_in_a_row, lines, winning_cells, Line,
};
pub use movegen::{bomb_targets, legal_actions, moves, placements};
