use serde::{Deserialize, Serialize};

use crate::DEFAULT_PLATFORM_SIZE;

/// Data-driven configuration for the landing controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Platform edge length; the platform spans (5, 5)..=(5+size, 5+size).
    pub platform_size: i32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            platform_size: DEFAULT_PLATFORM_SIZE,
        }
    }
}

impl LandingConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("LANDING_CONTROL_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
        {
            match toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Failed to parse {path}: {e}, using defaults"),
            }
        }
        if let Ok(contents) = std::fs::read_to_string("config/landing.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }
}
