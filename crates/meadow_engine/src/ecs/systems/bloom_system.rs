//! Flower bloom system
//!
//! A single periodic timer drives every flower. Each firing flips all bloom
//! targets at once; the rendered scale is then recomputed from elapsed time.

use crate::ecs::components::{AnimationError, BloomCurve, FlowerComponent};
use crate::ecs::{FrameContext, System, World};
use crate::foundation::time::PeriodicTimer;

/// Toggles flower bloom targets and applies the bloom scale
pub struct BloomSystem {
    curve: BloomCurve,
    timer: PeriodicTimer,
    toggles: u64,
}

impl BloomSystem {
    /// Create a system whose first toggle happens `interval_secs` after start
    pub fn new(curve: BloomCurve, interval_secs: f32) -> Result<Self, AnimationError> {
        if !interval_secs.is_finite() || interval_secs <= 0.0 {
            return Err(AnimationError::InvalidConfiguration(format!(
                "bloom interval must be positive, got {interval_secs}"
            )));
        }
        Ok(Self {
            curve,
            timer: PeriodicTimer::new(interval_secs, 0.0),
            toggles: 0,
        })
    }

    /// Number of bloom toggles so far
    pub fn toggles(&self) -> u64 {
        self.toggles
    }
}

impl System for BloomSystem {
    fn name(&self) -> &'static str {
        "bloom"
    }

    fn run(&mut self, world: &mut World, ctx: &FrameContext) {
        let fired = self.timer.poll(ctx.elapsed);
        if fired > 0 {
            self.toggles += u64::from(fired);
            log::debug!("Bloom toggled {fired}x at {:.2}s", ctx.elapsed);
        }

        // An even number of firings leaves every target where it was
        let flip = fired % 2 == 1;
        let curve = self.curve;
        world.for_each_mut::<FlowerComponent, _>(|_, flower, transform| {
            if flip {
                flower.bloom_target = flower.bloom_target.toggled();
            }
            transform.set_uniform_scale(curve.scale_at(ctx.elapsed, flower.bloom_target));
        });
    }
}
