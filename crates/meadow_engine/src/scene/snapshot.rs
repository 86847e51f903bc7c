//! Frame snapshot handed to the renderer
//!
//! The snapshot is rebuilt in place every frame. Instance data is plain old
//! data so a renderer can upload `instance_bytes()` directly.

use bytemuck::{Pod, Zeroable};

use crate::ecs::components::{CloudComponent, Parent, RenderableComponent};
use crate::ecs::{Entity, World};
use crate::foundation::math::Mat4;

/// Texture slot of instances with a solid colour material
pub const NO_TEXTURE: u32 = u32::MAX;

/// Parent chains deeper than this are cut off
const MAX_HIERARCHY_DEPTH: usize = 8;

/// Per-entity render data
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceData {
    /// World matrix, column major
    pub model: [[f32; 4]; 4],
    /// Material colour or texture tint
    pub color: [f32; 4],
    /// Stable entity id
    pub entity: u32,
    /// [`crate::ecs::EntityKind::code`]
    pub kind: u32,
    /// Texture slot or [`NO_TEXTURE`]
    pub texture_slot: u32,
    /// Opacity in `[0, 1]`
    pub opacity: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameSnapshot {
    /// Frame number
    pub frame: u64,
    /// Elapsed seconds at this frame
    pub elapsed: f32,
    /// Visible entities in world order
    pub instances: Vec<InstanceData>,
    /// World position of every raindrop
    pub raindrops: Vec<[f32; 3]>,
}

impl FrameSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the current world state, reusing the buffers
    pub fn capture(&mut self, world: &World, frame: u64, elapsed: f32) {
        self.frame = frame;
        self.elapsed = elapsed;
        self.instances.clear();
        self.raindrops.clear();

        for entity in world.entities() {
            let Some(renderable) = world.get_component::<RenderableComponent>(entity) else {
                continue;
            };
            if !renderable.visible {
                continue;
            }
            let Some(kind) = world.kind(entity) else {
                continue;
            };

            self.instances.push(InstanceData {
                model: world_matrix(world, entity).into(),
                color: renderable.material.color(),
                entity: entity.id(),
                kind: kind.code(),
                texture_slot: renderable.material.texture_slot().unwrap_or(NO_TEXTURE),
                opacity: renderable.opacity,
            });
        }

        // Drops hang below their cloud, unaffected by the cloud's scale
        for (entity, cloud) in world.query::<CloudComponent>() {
            let Some(origin) = world.transform(entity).map(|t| t.position) else {
                continue;
            };
            self.raindrops.extend(
                cloud
                    .rain
                    .drops()
                    .iter()
                    .map(|drop| [origin.x + drop.x, origin.y + drop.y, origin.z + drop.z]),
            );
        }

        log::trace!(
            "frame {frame}: {} instances, {} raindrops",
            self.instances.len(),
            self.raindrops.len()
        );
    }

    /// Instance data as raw bytes
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Instance of `entity`, if it was rendered
    pub fn instance(&self, entity: Entity) -> Option<&InstanceData> {
        self.instances.iter().find(|instance| instance.entity == entity.id())
    }
}

/// Consumer of frame snapshots (the external renderer)
pub trait RenderSink {
    /// Receive the snapshot for one frame
    fn submit(&mut self, snapshot: &FrameSnapshot);
}

/// Compose local transforms up the parent chain
fn world_matrix(world: &World, entity: Entity) -> Mat4 {
    let mut matrix = world.transform(entity).map_or_else(Mat4::identity, |t| t.to_matrix());
    let mut current = entity;

    for _ in 0..MAX_HIERARCHY_DEPTH {
        let Some(Parent(parent)) = world.get_component::<Parent>(current).copied() else {
            break;
        };
        if let Some(transform) = world.transform(parent) {
            matrix = transform.to_matrix() * matrix;
        }
        current = parent;
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MaterialRef;
    use crate::ecs::components::{RainPool, RainSettings, CloudDrift, TransformComponent};
    use crate::ecs::EntityKind;
    use crate::foundation::math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_children_inherit_parent_translation() {
        let mut world = World::new();
        let root = world.create_entity(EntityKind::Tree, TransformComponent::from_position(Vec3::new(-5.0, 3.0, 0.0)));
        let trunk = world.create_entity(EntityKind::TreeTrunk, TransformComponent::from_position(Vec3::new(0.0, 2.5, 0.0)));
        world.add_component(trunk, Parent(root));
        world.add_component(trunk, RenderableComponent::new(MaterialRef::solid([1.0; 4])));

        let mut snapshot = FrameSnapshot::new();
        snapshot.capture(&world, 1, 0.0);

        // Root has no renderable
        assert_eq!(snapshot.instances.len(), 1);
        let instance = snapshot.instance(trunk).unwrap();
        assert_eq!(instance.model[3][0..3], [-5.0, 5.5, 0.0]);
        assert_eq!(instance.kind, EntityKind::TreeTrunk.code());
        assert_eq!(instance.texture_slot, NO_TEXTURE);
    }

    #[test]
    fn test_raindrops_are_offset_by_cloud() {
        let mut world = World::new();
        let cloud = world.create_entity(EntityKind::Cloud, TransformComponent::from_position(Vec3::new(1.0, 18.0, -2.0)));
        let settings = RainSettings {
            count: 3,
            spawn_height: 15.0,
            ground_level: 0.0,
            half_extent: 0.0,
            speed_min: 0.1,
            speed_max: 0.1,
            resample_on_reset: false,
        };
        let rain = RainPool::new(settings, &mut StdRng::seed_from_u64(0)).unwrap();
        world.add_component(cloud, CloudComponent::new(CloudDrift::Float, rain));

        let mut snapshot = FrameSnapshot::new();
        snapshot.capture(&world, 1, 0.0);

        assert_eq!(snapshot.raindrops, vec![[1.0, 33.0, -2.0]; 3]);
    }

    #[test]
    fn test_instance_bytes_match_layout() {
        let mut world = World::new();
        let sun = world.create_entity(EntityKind::Sun, TransformComponent::identity());
        world.add_component(sun, RenderableComponent::new(MaterialRef::solid([1.0, 0.8, 0.0, 1.0])));

        let mut snapshot = FrameSnapshot::new();
        snapshot.capture(&world, 7, 0.5);

        assert_eq!(snapshot.frame, 7);
        assert_eq!(std::mem::size_of::<InstanceData>(), 96);
        assert_eq!(snapshot.instance_bytes().len(), 96);
    }
}
