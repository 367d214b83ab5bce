//! Startup configuration from environment variables.
//!
//! - `TETRIS_WIDTH` / `TETRIS_HEIGHT`: board size (default 10 x 20, 1..=64)
//! - `TETRIS_SEED`: piece sequence seed (default: random)
//! - `TETRIS_LOG`: log file path (unset or empty disables logging)
//! - `TETRIS_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default `info`)
//!
//! Values that are set but do not parse are errors, not silent fallbacks.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use tracing::Level;

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Largest accepted board side
pub const MAX_BOARD_SIDE: u16 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: None,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl GameConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(v) = get("TETRIS_WIDTH") {
            config.width = parse_side("TETRIS_WIDTH", &v)?;
        }
        if let Some(v) = get("TETRIS_HEIGHT") {
            config.height = parse_side("TETRIS_HEIGHT", &v)?;
        }
        if let Some(v) = get("TETRIS_SEED") {
            let seed = v
                .parse::<u64>()
                .with_context(|| format!("TETRIS_SEED: invalid seed {:?}", v))?;
            config.seed = Some(seed);
        }
        config.log_path = get("TETRIS_LOG").map(PathBuf::from);
        if let Some(v) = get("TETRIS_LOG_LEVEL") {
            config.log_level = Level::from_str(&v)
                .map_err(|_| anyhow!("TETRIS_LOG_LEVEL: unknown level {:?}", v))?;
        }

        Ok(config)
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_side(key: &str, value: &str) -> Result<u16> {
    let side = value
        .parse::<u16>()
        .with_context(|| format!("{}: invalid number {:?}", key, value))?;
    if side == 0 || side > MAX_BOARD_SIDE {
        bail!("{}: {} is outside 1..={}", key, side, MAX_BOARD_SIDE);
    }
    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<GameConfig> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let cfg = config(&[
            ("TETRIS_WIDTH", "12"),
            ("TETRIS_HEIGHT", " 24 "),
            ("TETRIS_SEED", "42"),
            ("TETRIS_LOG", "/tmp/termtris.log"),
            ("TETRIS_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!((cfg.width, cfg.height), (12, 24));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.resolve_seed(), 42);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/termtris.log")));
        assert_eq!(cfg.log_level, Level::DEBUG);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let cfg = config(&[("TETRIS_LOG", "  "), ("TETRIS_SEED", "")]).unwrap();
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config(&[("TETRIS_WIDTH", "wide")]).is_err());
        assert!(config(&[("TETRIS_WIDTH", "0")]).is_err());
        assert!(config(&[("TETRIS_HEIGHT", "65")]).is_err());
        assert!(config(&[("TETRIS_SEED", "-1")]).is_err());
        assert!(config(&[("TETRIS_LOG_LEVEL", "loud")]).is_err());
    }

    #[test]
    fn test_error_names_the_variable() {
        let err = config(&[("TETRIS_HEIGHT", "abc")]).unwrap_err();
        assert!(format!("{:#}", err).contains("TETRIS_HEIGHT"));
    }
}
