//! # Scene Configuration
//!
//! Every tunable of the meadow scene in one serializable structure: entity
//! counts, spatial bounds, speeds and the bloom cycle. Configuration is either
//! compiled in (`SceneConfig::default()`) or loaded once from a TOML/RON file
//! at scene construction; it is never persisted back by the engine.
//!
//! All sections use `#[serde(default)]`, so a file only needs to name the
//! values it overrides.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::ecs::components::AnimationError;
use crate::input::SteeringMode;

/// Fixed entity counts for the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountsConfig {
    /// Number of procedurally placed flowers
    pub flower_count: usize,
    /// Raindrops owned by each raining cloud
    pub raindrops_per_cloud: usize,
}

impl Default for CountsConfig {
    fn default() -> Self {
        Self {
            flower_count: 100,
            raindrops_per_cloud: 100,
        }
    }
}

/// Spatial bounds of the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    /// Half size of the square ground platform
    pub platform_half_size: f32,
    /// Flowers are sampled in `[-flower_half_extent, flower_half_extent]` on x and z
    pub flower_half_extent: f32,
    /// Height of the platform surface where flowers stand
    pub flower_height: f32,
    /// Raindrops recycle once they fall below this height
    pub ground_level: f32,
    /// Height raindrops start from and return to
    pub rain_spawn_height: f32,
    /// Raindrop x/z offsets are sampled in `[-rain_half_extent, rain_half_extent]`
    pub rain_half_extent: f32,
    /// Scrolling clouds wrap between `-cloud_wrap_bound` and `cloud_wrap_bound`
    pub cloud_wrap_bound: f32,
    /// The butterfly never drops below this height
    pub butterfly_min_height: f32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            platform_half_size: 40.0,
            flower_half_extent: 10.0,
            flower_height: 1.0,
            ground_level: 0.0,
            rain_spawn_height: 15.0,
            rain_half_extent: 2.0,
            cloud_wrap_bound: 10.0,
            butterfly_min_height: 1.0,
        }
    }
}

/// Rain particle behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Slowest fall speed (units per frame)
    pub speed_min: f32,
    /// Fastest fall speed (units per frame)
    pub speed_max: f32,
    /// Re-sample x/z offsets whenever a drop returns to the spawn height
    pub resample_on_reset: bool,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            speed_min: 0.1,
            speed_max: 0.3,
            resample_on_reset: false,
        }
    }
}

/// Cloud drift behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Constant advance of scrolling clouds (units per frame)
    pub scroll_speed: f32,
    /// Angular frequency of the floating term (radians per second)
    pub float_frequency: f32,
    /// Per-frame amplitude of the floating term
    pub float_amplitude: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            scroll_speed: 0.002,
            float_frequency: 0.1,
            float_amplitude: 0.001,
        }
    }
}

/// Flower bloom cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Seconds between bloom target toggles
    pub interval_secs: f32,
    /// Scale of the small (closed) bloom target
    pub small_scale: f32,
    /// Scale of the large (open) bloom target
    pub large_scale: f32,
    /// Centre of the pulsation
    pub bias: f32,
    /// Angular frequency of the pulsation (radians per second)
    pub frequency: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            interval_secs: 5.0,
            small_scale: 1.0,
            large_scale: 3.0,
            bias: 1.5,
            frequency: 1.0,
        }
    }
}

/// Butterfly steering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButterflyConfig {
    /// Movement added per key press (or per held key in `held` mode)
    pub step: f32,
    /// How key events become movement
    pub steering: SteeringMode,
    /// Starting position
    pub start: [f32; 3],
}

impl Default for ButterflyConfig {
    fn default() -> Self {
        Self {
            step: 0.5,
            steering: SteeringMode::Accumulate,
            start: [0.0, 5.0, 5.0],
        }
    }
}

/// Tree sway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Angular frequency of the sway (radians per second)
    pub sway_frequency: f32,
    /// Peak trunk rotation about y (radians)
    pub trunk_amplitude: f32,
    /// Peak canopy rotation about y (radians)
    pub canopy_amplitude: f32,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            sway_frequency: 0.5,
            trunk_amplitude: 0.05,
            canopy_amplitude: 0.1,
        }
    }
}

/// Moon orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoonConfig {
    /// Whether the scene contains a moon at all
    pub enabled: bool,
    /// Angular frequency of the orbit (radians per second)
    pub frequency: f32,
    /// Horizontal radius
    pub radius_x: f32,
    /// Vertical radius
    pub radius_y: f32,
    /// Fixed depth of the orbit plane
    pub depth: f32,
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            frequency: 0.1,
            radius_x: 10.0,
            radius_y: 5.0,
            depth: -30.0,
        }
    }
}

/// # Complete Scene Configuration
///
/// Top-level configuration handed to the engine at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for procedural placement; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Directory textures are loaded from
    pub assets_dir: String,
    /// Entity counts
    pub counts: CountsConfig,
    /// Spatial bounds
    pub bounds: BoundsConfig,
    /// Rain particles
    pub rain: RainConfig,
    /// Cloud drift
    pub clouds: CloudConfig,
    /// Flower bloom cycle
    pub bloom: BloomConfig,
    /// Butterfly steering
    pub butterfly: ButterflyConfig,
    /// Tree sway
    pub trees: TreeConfig,
    /// Moon orbit
    pub moon: MoonConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            assets_dir: "resources/textures".to_string(),
            counts: CountsConfig::default(),
            bounds: BoundsConfig::default(),
            rain: RainConfig::default(),
            clouds: CloudConfig::default(),
            bloom: BloomConfig::default(),
            butterfly: ButterflyConfig::default(),
            trees: TreeConfig::default(),
            moon: MoonConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Builder pattern: fix the placement seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder pattern: set the flower count
    pub fn with_flower_count(mut self, count: usize) -> Self {
        self.counts.flower_count = count;
        self
    }

    /// Builder pattern: set the raindrop count per cloud
    pub fn with_raindrops_per_cloud(mut self, count: usize) -> Self {
        self.counts.raindrops_per_cloud = count;
        self
    }

    /// Builder pattern: set the steering mode
    pub fn with_steering(mut self, steering: SteeringMode) -> Self {
        self.butterfly.steering = steering;
        self
    }

    /// Builder pattern: set the assets directory
    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Validate the entire configuration
    ///
    /// Runs once at construction; nothing is re-validated per frame.
    pub fn validate(&self) -> Result<(), AnimationError> {
        let b = &self.bounds;
        require_finite("bounds.platform_half_size", b.platform_half_size)?;
        require_finite("bounds.flower_height", b.flower_height)?;
        require_finite("bounds.butterfly_min_height", b.butterfly_min_height)?;
        require_non_negative("bounds.flower_half_extent", b.flower_half_extent)?;
        require_non_negative("bounds.rain_half_extent", b.rain_half_extent)?;
        require_positive("bounds.cloud_wrap_bound", b.cloud_wrap_bound)?;
        require_finite("bounds.ground_level", b.ground_level)?;
        require_finite("bounds.rain_spawn_height", b.rain_spawn_height)?;
        if b.rain_spawn_height <= b.ground_level {
            return Err(AnimationError::InvalidConfiguration(format!(
                "rain spawn height {} must be above ground level {}",
                b.rain_spawn_height, b.ground_level
            )));
        }

        require_positive("rain.speed_min", self.rain.speed_min)?;
        require_positive("rain.speed_max", self.rain.speed_max)?;
        if self.rain.speed_min > self.rain.speed_max {
            return Err(AnimationError::InvalidConfiguration(format!(
                "rain speed range [{}, {}] is inverted",
                self.rain.speed_min, self.rain.speed_max
            )));
        }

        require_finite("clouds.scroll_speed", self.clouds.scroll_speed)?;
        require_non_zero("clouds.float_frequency", self.clouds.float_frequency)?;
        require_finite("clouds.float_amplitude", self.clouds.float_amplitude)?;

        require_positive("bloom.interval_secs", self.bloom.interval_secs)?;
        require_non_zero("bloom.frequency", self.bloom.frequency)?;
        require_finite("bloom.bias", self.bloom.bias)?;
        require_finite("bloom.small_scale", self.bloom.small_scale)?;
        require_finite("bloom.large_scale", self.bloom.large_scale)?;

        require_finite("butterfly.step", self.butterfly.step)?;
        require_non_zero("trees.sway_frequency", self.trees.sway_frequency)?;
        if self.moon.enabled {
            require_non_zero("moon.frequency", self.moon.frequency)?;
        }

        Ok(())
    }
}

impl Config for SceneConfig {}

fn require_finite(name: &str, value: f32) -> Result<(), AnimationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AnimationError::InvalidConfiguration(format!("{name} must be finite, got {value}")))
    }
}

fn require_non_zero(name: &str, value: f32) -> Result<(), AnimationError> {
    require_finite(name, value)?;
    if value == 0.0 {
        return Err(AnimationError::InvalidConfiguration(format!("{name} must be non-zero")));
    }
    Ok(())
}

fn require_positive(name: &str, value: f32) -> Result<(), AnimationError> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(AnimationError::InvalidConfiguration(format!("{name} must be positive, got {value}")));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f32) -> Result<(), AnimationError> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(AnimationError::InvalidConfiguration(format!("{name} must not be negative, got {value}")));
    }
    Ok(())
}
