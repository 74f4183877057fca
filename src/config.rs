use anyhow::Result;
use cubepeel_gesture::DEGENERATE_EPSILON;
use cubepeel_picking::NORMAL_MATCH_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/interaction.toml";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Projected swipe magnitudes below this are ignored.
    pub degenerate_epsilon: f32,
    /// Minimum normal/axis dot product for the face fallback.
    pub normal_threshold: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            degenerate_epsilon: DEGENERATE_EPSILON,
            normal_threshold: NORMAL_MATCH_THRESHOLD,
        }
    }
}

impl InteractionConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<InteractionConfig>(&contents) {
                Ok(cfg) => cfg.sanitized(),
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    InteractionConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                InteractionConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    fn sanitized(mut self) -> Self {
        if !self.degenerate_epsilon.is_finite() || self.degenerate_epsilon < 0.0 {
            warn!(
                value = self.degenerate_epsilon,
                "Invalid degenerate_epsilon, using default"
            );
            self.degenerate_epsilon = DEGENERATE_EPSILON;
        }
        if !self.normal_threshold.is_finite() {
            warn!(
                value = self.normal_threshold,
                "Invalid normal_threshold, using default"
            );
            self.normal_threshold = NORMAL_MATCH_THRESHOLD;
        }
        self
    }
}
