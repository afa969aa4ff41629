//! Engine configuration
//!
//! Board size is configured in pixels and divided into blocks, so a front end
//! can describe its canvas directly. All fields are optional in JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{
    PieceSet, DEFAULT_BLOCK_SIZE_PX, DEFAULT_BOARD_HEIGHT_PX, DEFAULT_BOARD_WIDTH_PX,
    DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, SPEED_STEP_MS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub board_width_px: u32,
    pub board_height_px: u32,
    pub block_size_px: u32,
    pub piece_set: PieceSet,
    pub tick_interval_ms: u32,
    pub min_tick_interval_ms: u32,
    pub speed_step_ms: u32,
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width_px: DEFAULT_BOARD_WIDTH_PX,
            board_height_px: DEFAULT_BOARD_HEIGHT_PX,
            block_size_px: DEFAULT_BLOCK_SIZE_PX,
            piece_set: PieceSet::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            min_tick_interval_ms: MIN_TICK_INTERVAL_MS,
            speed_step_ms: SPEED_STEP_MS,
            seed: None,
        }
    }
}

/// Configuration failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(&'static str),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io(_) => "config_io",
            ConfigError::Parse(_) => "config_parse",
            ConfigError::Invalid(_) => "config_invalid",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "config: cannot read file: {}", msg),
            ConfigError::Parse(msg) => write!(f, "config: invalid json: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl EngineConfig {
    /// Config for an explicit grid, using the default block size
    pub fn with_grid(rows: u16, cols: u16) -> Self {
        Self {
            board_width_px: cols as u32 * DEFAULT_BLOCK_SIZE_PX,
            board_height_px: rows as u32 * DEFAULT_BLOCK_SIZE_PX,
            ..Self::default()
        }
    }

    pub fn with_piece_set(mut self, set: PieceSet) -> Self {
        self.piece_set = set;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Grid size as `(rows, cols)`. Partial blocks are truncated.
    pub fn grid(&self) -> (u16, u16) {
        if self.block_size_px == 0 {
            return (0, 0);
        }
        let rows = (self.board_height_px / self.block_size_px).min(u16::MAX as u32) as u16;
        let cols = (self.board_width_px / self.block_size_px).min(u16::MAX as u32) as u16;
        (rows, cols)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size_px == 0 {
            return Err(ConfigError::Invalid("block_size_px must be positive"));
        }
        let (rows, cols) = self.grid();
        if rows == 0 || cols == 0 {
            return Err(ConfigError::Invalid(
                "board must be at least one block wide and tall",
            ));
        }
        if self.min_tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("min_tick_interval_ms must be positive"));
        }
        if self.tick_interval_ms < self.min_tick_interval_ms {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must not be below min_tick_interval_ms",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
