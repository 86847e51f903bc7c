//! Butterfly steering system

use crate::ecs::components::ButterflyComponent;
use crate::ecs::{FrameContext, System, SystemPhase, World};

/// Applies the frame's movement vector to every butterfly
#[derive(Debug, Default)]
pub struct ButterflySystem;

impl ButterflySystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl System for ButterflySystem {
    fn name(&self) -> &'static str {
        "butterfly"
    }

    fn phase(&self) -> SystemPhase {
        SystemPhase::PreUpdate
    }

    fn run(&mut self, world: &mut World, ctx: &FrameContext) {
        world.for_each_mut::<ButterflyComponent, _>(|_, butterfly, transform| {
            butterfly.advance(&mut transform.position, ctx.movement);
        });
    }
}
