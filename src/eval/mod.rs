//! Evaluation module for bombing-variant positions
//!
//! The evaluation considers material, near-complete lines, centre control,
//! hand size and mobility. Weights come from an [`EvalWeights`] value.

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::EvalWeights;
