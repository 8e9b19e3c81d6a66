//! Configuration for frontier
//!
//! Read from `--config <path>`, else `$FRONTIER_CONFIG_DIR/config.toml`, else
//! `<platform config dir>/frontier/config.toml`. A missing file means
//! defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::bail_invalid;
use crate::error::{FrontierError, Result};

pub use types::{
    FrontierConfig, GraphConfig, HuffmanConfig, LayoutSection, ReplayConfig, MAX_INTERVAL_MS,
};

const CONFIG_DIR: &str = "frontier";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "FRONTIER_CONFIG_DIR";

impl FrontierConfig {
    /// Default location, honoring `FRONTIER_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    FrontierError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load an explicit file, or the default location when `None`.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Self::config_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::load(&path)
            }
        }
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FrontierError::io(path, e))?;
        let config: FrontierConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.replay.interval_ms > MAX_INTERVAL_MS {
            bail_invalid!(
                "replay.interval_ms",
                format!("{} (maximum {})", self.replay.interval_ms, MAX_INTERVAL_MS)
            );
        }
        let width = self.layout.canvas_width;
        if !width.is_finite() || width <= 0.0 {
            bail_invalid!("layout.canvas_width", width);
        }
        self.layout.tree.validate()?;
        if self.huffman.baseline_bits == 0 {
            bail_invalid!("huffman.baseline_bits", 0);
        }
        if self.graph.default_source.trim().is_empty() {
            bail_invalid!("graph.default_source", "(empty)");
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.replay.interval_ms)
    }
}
