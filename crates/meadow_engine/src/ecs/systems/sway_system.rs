//! Tree sway system

use crate::ecs::components::SwayComponent;
use crate::ecs::{FrameContext, System, World};

/// Rotates swaying tree parts about the y axis
#[derive(Debug, Default)]
pub struct SwaySystem;

impl SwaySystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }
}

impl System for SwaySystem {
    fn name(&self) -> &'static str {
        "tree_sway"
    }

    fn run(&mut self, world: &mut World, ctx: &FrameContext) {
        world.for_each_mut::<SwayComponent, _>(|_, sway, transform| {
            transform.set_yaw(sway.angle_at(ctx.elapsed));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Oscillator, TransformComponent};
    use crate::ecs::EntityKind;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_canopy_sways_twice_as_far_as_trunk() {
        let mut world = World::new();
        let trunk = world.create_entity(EntityKind::TreeTrunk, TransformComponent::identity());
        let canopy = world.create_entity(EntityKind::TreeCanopy, TransformComponent::identity());
        world.add_component(trunk, SwayComponent::new(Oscillator::new(0.5, 0.05, 0.0).unwrap()));
        world.add_component(canopy, SwayComponent::new(Oscillator::new(0.5, 0.1, 0.0).unwrap()));

        let t = 2.0;
        SwaySystem::new().run(&mut world, &FrameContext::at(t, 0.016, 1));

        let trunk_angle = world.transform(trunk).unwrap().rotation.angle();
        let canopy_angle = world.transform(canopy).unwrap().rotation.angle();
        assert_relative_eq!(trunk_angle, (t * 0.5f32).sin() * 0.05, epsilon = 1e-5);
        assert_relative_eq!(canopy_angle, (t * 0.5f32).sin() * 0.1, epsilon = 1e-5);

        let axis = world.transform(canopy).unwrap().rotation.axis().unwrap();
        assert_relative_eq!(axis.into_inner(), Vec3::y(), epsilon = 1e-5);
    }
}
