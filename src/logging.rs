//! Log setup.
//!
//! The game owns the terminal in raw mode, so logs go to a file or nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use crate::config::GameConfig;

/// Install a file-backed `tracing` subscriber if `TETRIS_LOG` is set.
///
/// Returns whether logging was enabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {}", e))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_path() {
        assert!(!init(&GameConfig::default()).unwrap());
    }

    #[test]
    fn test_unopenable_path_is_an_error() {
        let config = GameConfig {
            log_path: Some("/nonexistent-dir/for/termtris.log".into()),
            ..GameConfig::default()
        };
        assert!(init(&config).is_err());
    }
}
