//! Cloud drift and rain system

use rand::rngs::StdRng;

use crate::ecs::components::{CloudComponent, Oscillator};
use crate::ecs::{FrameContext, System, World};
use crate::foundation::math::utils::wrap_to_opposite;

/// Moves clouds and advances the rain each cloud owns
pub struct CloudSystem {
    float: Oscillator,
    scroll_speed: f32,
    wrap_bound: f32,
    rng: StdRng,
}

impl CloudSystem {
    /// Create the system
    ///
    /// `float` yields the per-frame horizontal nudge every cloud receives;
    /// scrolling clouds also advance by `scroll_speed` and wrap at
    /// `wrap_bound`. `rng` is only used by pools that re-sample on reset.
    pub fn new(float: Oscillator, scroll_speed: f32, wrap_bound: f32, rng: StdRng) -> Self {
        Self {
            float,
            scroll_speed,
            wrap_bound,
            rng,
        }
    }
}

impl System for CloudSystem {
    fn name(&self) -> &'static str {
        "clouds"
    }

    fn run(&mut self, world: &mut World, ctx: &FrameContext) {
        let Self {
            float,
            scroll_speed,
            wrap_bound,
            rng,
        } = self;
        let nudge = float.value(ctx.elapsed);

        world.for_each_mut::<CloudComponent, _>(|_, cloud, transform| {
            let position = &mut transform.position;
            position.x += nudge;
            if cloud.scrolls() {
                position.x = wrap_to_opposite(position.x + *scroll_speed, *wrap_bound);
            }
            cloud.rain.update(&mut *rng);
        });
    }
}
