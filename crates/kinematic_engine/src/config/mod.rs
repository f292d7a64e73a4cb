//! Configuration system
//!
//! Typed configuration for bodies and their axes, loadable from TOML. Every
//! numeric field is routed through the clamping setters when applied, so an
//! out-of-range value in a config file degrades to the nearest valid one
//! instead of failing the load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::physics::axis::Axis;
use crate::physics::collision_layers::LayerMask;

/// Default downward gravity acceleration, in units per second squared.
/// Passed to the vertical axis at construction; nothing reads it ambiently.
pub const DEFAULT_GRAVITY: f32 = -9.81;

/// Configuration trait
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from a TOML file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported config format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Per-axis configuration surface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Whether the axis updates at all
    pub enabled: bool,
    /// Speed magnitude cap, units per second
    pub max_speed: f32,
    /// Gravity acceleration along the axis, any sign
    pub gravity: f32,
    /// Whether gravity accrues each tick
    pub use_gravity: bool,
    /// Parallel rays sampled per side
    pub rays_count: u32,
    /// Maximum walkable surface angle in degrees
    pub slope_limit: f32,
    /// Raw collision layer bits
    pub layer_mask: u32,
    /// Whether ray visualization records are emitted
    pub draw_debug: bool,
    /// Whether the axis attaches to moving platforms
    pub use_platforms: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_speed: 10.0,
            gravity: 0.0,
            use_gravity: false,
            rays_count: 3,
            slope_limit: 45.0,
            layer_mask: u32::MAX,
            draw_debug: false,
            use_platforms: false,
        }
    }
}

impl AxisConfig {
    /// Defaults for a vertical axis: world gravity on, platform riding on
    pub fn vertical() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            use_gravity: true,
            use_platforms: true,
            ..Self::default()
        }
    }

    /// Apply every field to an axis through its clamping setters
    pub fn apply_to(&self, axis: &mut Axis) {
        axis.set_enabled(self.enabled);
        axis.set_max_speed(self.max_speed);
        axis.set_gravity(self.gravity);
        axis.set_use_gravity(self.use_gravity);
        axis.set_rays_count(self.rays_count);
        axis.set_slope_limit(self.slope_limit);
        axis.set_layer_mask(LayerMask::from_bits_retain(self.layer_mask));
        axis.set_draw_debug(self.draw_debug);
        axis.set_use_platforms(self.use_platforms);
    }
}

/// Configuration for a whole body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Whether the scene is two-dimensional; a planar body's distal axis is
    /// constructed disabled
    pub planar: bool,
    /// Left/right axis settings
    pub horizontal: AxisConfig,
    /// Down/up axis settings
    pub vertical: AxisConfig,
    /// Backward/forward axis settings
    pub distal: AxisConfig,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            planar: false,
            horizontal: AxisConfig::default(),
            vertical: AxisConfig::vertical(),
            distal: AxisConfig::default(),
        }
    }
}

impl Config for BodyConfig {}
