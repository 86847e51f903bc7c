//! # Core Engine Module
//!
//! Shared abstractions other subsystems depend on. At the moment this is the
//! unified scene configuration.

pub mod config;

pub use config::{
    SceneConfig,
    CountsConfig,
    BoundsConfig,
    RainConfig,
    CloudConfig,
    BloomConfig,
    ButterflyConfig,
    TreeConfig,
    MoonConfig,
    Config,
    ConfigError,
};
