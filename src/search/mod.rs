//! Search module for the bombing-variant AI
//!
//! Contains:
//! - Minimax with alpha-beta pruning and phase-aware horizon truncation

pub mod alphabeta;

pub use alphabeta::{Searcher, INF};
