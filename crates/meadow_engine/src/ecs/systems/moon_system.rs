//! Moon orbit system

use crate::ecs::components::MoonComponent;
use crate::ecs::{FrameContext, System, World};

/// Places the moon on its path every frame
#[derive(Debug, Default)]
pub struct MoonSystem;

impl MoonSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl System for MoonSystem {
    fn name(&self) -> &'static str {
        "moon"
    }

    fn run(&mut self, world: &mut World, ctx: &FrameContext) {
        world.for_each_mut::<MoonComponent, _>(|_, moon, transform| {
            moon.place(&mut transform.position, ctx.elapsed);
        });
    }
}
