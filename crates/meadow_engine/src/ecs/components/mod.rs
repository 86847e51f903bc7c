//! ECS Components module
//!
//! Data components for every entity kind in the meadow, plus the oscillator
//! and rain pool they are built from.

pub mod transform;
pub mod oscillator;
pub mod rain;
pub mod cloud;
pub mod flower;
pub mod tree;
pub mod butterfly;
pub mod moon;
pub mod renderable;

pub use transform::{TransformComponent, Parent};
pub use oscillator::Oscillator;
pub use rain::{RainPool, RainSettings, Raindrop};
pub use cloud::{CloudComponent, CloudDrift};
pub use flower::{FlowerComponent, BloomTarget, BloomCurve};
pub use tree::{TreeComponent, SwayComponent};
pub use butterfly::ButterflyComponent;
pub use moon::MoonComponent;
pub use renderable::RenderableComponent;

use thiserror::Error;

/// Errors raised while constructing animated components
///
/// Only ever produced at construction time; per-frame updates are total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A period, frequency, bound or count that can never animate correctly
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
