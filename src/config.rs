//! Engine configuration: search depth, difficulty levels and evaluation weights

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::eval::EvalWeights;

/// Default search depth (the "expert" level)
pub const DEFAULT_DEPTH: u8 = 3;

/// Deepest search accepted from configuration
pub const MAX_DEPTH: u8 = 6;

/// Difficulty presets. The Chinese level names are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiLevel {
    #[serde(alias = "入门")]
    Beginner,
    #[serde(alias = "高手")]
    Expert,
    #[serde(alias = "大师")]
    Master,
}

impl AiLevel {
    pub fn depth(self) -> u8 {
        match self {
            AiLevel::Beginner => 2,
            AiLevel::Expert => 3,
            AiLevel::Master => 4,
        }
    }
}

impl Default for AiLevel {
    fn default() -> Self {
        AiLevel::Expert
    }
}

/// Engine configuration.
///
/// Loadable from JSON; missing fields fall back to defaults:
///
/// ```
/// use bombchess::config::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{ "depth": 4 }"#).unwrap();
/// assert_eq!(config.depth, 4);
/// assert_eq!(config.weights.piece_count, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies
    pub depth: u8,
    /// Evaluation weights
    pub weights: EvalWeights,
}

impl EngineConfig {
    #[must_use]
    pub fn with_level(level: AiLevel) -> Self {
        Self {
            depth: level.depth(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(EngineError::DepthOutOfRange(self.depth));
        }
        Ok(())
    }

    /// Read and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            weights: EvalWeights::default(),
        }
    }
}
