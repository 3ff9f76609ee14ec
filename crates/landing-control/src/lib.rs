pub mod collision;
pub mod config;
pub mod platform;

use serde::{Deserialize, Serialize};

use collision::{collision_matrix, is_colliding};
use config::LandingConfig;
use platform::{PlatformError, Rect, platform_rect};

/// Platform edge length used when none is configured.
pub const DEFAULT_PLATFORM_SIZE: i32 = 10;

/// A cell on the surveillance grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// Outcome of a single landing attempt.
///
/// Serialized forms match the legacy string statuses reported by the
/// string-based control console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandingStatus {
    #[serde(rename = "ok for landing")]
    OkForLanding,
    #[serde(rename = "clash")]
    Clash,
    #[serde(rename = "out of platform")]
    OutOfPlatform,
}

/// Surveillance state for one landing platform: the computed platform rect,
/// every rocket that has touched down, and the most recent off-platform miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandingController {
    platform: Rect,
    landed_rockets: Vec<Coordinate>,
    last_miss: Option<Coordinate>,
}

impl LandingController {
    /// Create a controller for a platform of the given edge length.
    pub fn new(platform_size: i32) -> Result<Self, PlatformError> {
        Ok(Self {
            platform: platform_rect(platform_size)?,
            landed_rockets: Vec::new(),
            last_miss: None,
        })
    }

    /// Create a controller from loaded configuration.
    pub fn from_config(config: &LandingConfig) -> Result<Self, PlatformError> {
        Self::new(config.platform_size)
    }

    /// The computed platform rect (inclusive bounds).
    pub fn platform(&self) -> Rect {
        self.platform
    }

    /// Every recorded touchdown, in landing order.
    pub fn landed_rockets(&self) -> &[Coordinate] {
        &self.landed_rockets
    }

    /// Classify a landing attempt at `(x, y)`.
    ///
    /// On-platform attempts clash against the collision matrix of every
    /// previously landed rocket; clean attempts are recorded. Off-platform
    /// attempts clash only against the immediately preceding miss, and the
    /// last-miss cell is overwritten on every non-successful outcome.
    pub fn check_landing_platform(&mut self, x: i32, y: i32) -> LandingStatus {
        let attempt = Coordinate { x, y };

        if self.platform.contains(x, y) {
            for &landed in &self.landed_rockets {
                if is_colliding(&collision_matrix(landed), attempt) {
                    return LandingStatus::Clash;
                }
            }
            tracing::debug!("rocket landed at ({x}, {y})");
            self.landed_rockets.push(attempt);
            return LandingStatus::OkForLanding;
        }

        let status = match self.last_miss {
            Some(miss) if is_colliding(&collision_matrix(miss), attempt) => LandingStatus::Clash,
            _ => LandingStatus::OutOfPlatform,
        };
        self.last_miss = Some(attempt);
        status
    }
}

impl Default for LandingController {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_SIZE).expect("default platform size must fit the area")
    }
}
