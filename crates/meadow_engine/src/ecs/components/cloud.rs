//! Cloud component

use super::RainPool;
use crate::ecs::Component;

/// Which drift rule a cloud follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudDrift {
    /// Slow sinusoidal float around the authored position
    Float,
    /// Float plus a constant advance that wraps between the scroll bounds
    Scroll,
}

/// A drifting cloud and the rain it owns
#[derive(Debug, Clone)]
pub struct CloudComponent {
    /// Drift rule
    pub drift: CloudDrift,
    /// Raindrops, positioned relative to the cloud
    pub rain: RainPool,
}

impl Component for CloudComponent {}

impl CloudComponent {
    /// Create a cloud with the given drift rule and rain
    pub fn new(drift: CloudDrift, rain: RainPool) -> Self {
        Self { drift, rain }
    }

    /// Whether this cloud scrolls and wraps
    pub fn scrolls(&self) -> bool {
        self.drift == CloudDrift::Scroll
    }
}
