//! Scene composer
//!
//! Places every entity of the meadow. Flowers are scattered randomly over a
//! square on the platform; everything else comes from the hand-authored
//! tables below. Runs exactly once per session.

use std::collections::HashMap;

use rand::Rng;

use crate::assets::{resolve_material, MaterialRef, TextureProvider};
use crate::core::SceneConfig;
use crate::ecs::components::{
    AnimationError, BloomCurve, ButterflyComponent, CloudComponent, CloudDrift, FlowerComponent,
    MoonComponent, Oscillator, Parent, RainPool, RainSettings, RenderableComponent, SwayComponent,
    TransformComponent, TreeComponent,
};
use crate::ecs::{Entity, EntityKind, World};
use crate::foundation::math::Vec3;

const TREE_POSITIONS: [[f32; 3]; 6] = [
    [-5.0, 3.0, 0.0],
    [0.0, 3.0, 5.0],
    [5.0, 3.0, -2.0],
    [5.0, 4.0, 4.0],
    [-7.0, 4.0, 4.0],
    [-10.0, 3.0, 7.0],
];

/// Trunk is 5 units tall, centred half way up; the canopy sits on top
const TRUNK_OFFSET: [f32; 3] = [0.0, 2.5, 0.0];
const CANOPY_OFFSET: [f32; 3] = [0.0, 5.0, 0.0];

/// (position, scale)
const MOUNTAINS: [([f32; 3], [f32; 3]); 3] = [
    ([0.0, 1.0, -20.0], [2.0, 2.2, 2.0]),
    ([-15.0, 1.0, -18.0], [1.5, 1.7, 1.5]),
    ([15.0, 1.0, -19.0], [1.8, 2.0, 1.8]),
];

const CLOUD_TEXTURES: [&str; 3] = ["cloud1.png", "cloud2.png", "cloud3.png"];

/// (position, index into `CLOUD_TEXTURES`)
const FLOATING_CLOUDS: [([f32; 3], usize); 14] = [
    ([-4.0, 18.0, -5.0], 0),
    ([0.0, 18.0, -3.0], 1),
    ([3.0, 17.0, -1.0], 2),
    ([-4.0, 17.5, -4.0], 2),
    ([3.0, 17.0, -4.0], 2),
    ([-2.0, 16.0, -3.0], 0),
    ([-6.0, 18.0, -3.0], 0),
    ([-7.0, 13.0, -3.0], 0),
    ([5.0, 17.0, 1.0], 1),
    ([-6.0, 11.0, -4.0], 2),
    ([3.0, 12.0, -4.0], 2),
    ([5.0, 16.0, 1.0], 1),
    ([-5.0, 16.0, 1.0], 1),
    ([-5.0, 14.0, 1.0], 1),
];

/// High layer that scrolls across the sky without raining
const SCROLLING_CLOUDS: [([f32; 3], usize); 3] = [
    ([-8.0, 21.0, -10.0], 0),
    ([0.0, 22.0, -12.0], 1),
    ([8.0, 21.0, -11.0], 2),
];
const SCROLLING_CLOUD_SCALE: [f32; 3] = [3.5, 3.5, 2.0];

const SUN_POSITION: [f32; 3] = [10.0, 20.0, -25.0];
const SUN_RADIUS: f32 = 5.0;
const MOON_RADIUS: f32 = 2.0;
const PLATFORM_THICKNESS: f32 = 2.0;

const BUTTERFLY_TEXTURE: &str = "butterfly.jpg";
const BARK_TEXTURE: &str = "barkTexture.jpg";
const LEAVES_TEXTURE: &str = "leavesTexture.jpg";

const GRASS: [f32; 4] = [0.133, 0.545, 0.133, 1.0];
const GOLD: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
const EARTH: [f32; 4] = [0.361, 0.251, 0.2, 1.0];
const PINK: [f32; 4] = [1.0, 0.412, 0.706, 1.0];
const BARK: [f32; 4] = [0.545, 0.271, 0.075, 1.0];
const LEAVES: [f32; 4] = [0.2, 0.6, 0.2, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const ORANGE: [f32; 4] = [1.0, 0.6, 0.2, 1.0];
const PALE: [f32; 4] = [0.85, 0.85, 0.9, 1.0];

/// Entities of interest in a composed world
pub struct SceneLayout {
    /// The world holding every entity
    pub world: World,
    /// The steerable butterfly
    pub butterfly: Entity,
    /// Flowers in placement order
    pub flowers: Vec<Entity>,
    /// Floating then scrolling clouds
    pub clouds: Vec<Entity>,
    /// Tree roots
    pub trees: Vec<Entity>,
    /// Mountains
    pub mountains: Vec<Entity>,
    /// Present when the moon is enabled
    pub moon: Option<Entity>,
}

/// Builds the initial world from a [`SceneConfig`]
pub struct SceneComposer<'a> {
    config: &'a SceneConfig,
}

impl<'a> SceneComposer<'a> {
    /// Create a composer for `config`
    pub fn new(config: &'a SceneConfig) -> Self {
        Self { config }
    }

    /// Compose the scene
    ///
    /// Fails only on invalid configuration. Textures that cannot be loaded are
    /// replaced by solid colours.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        textures: &mut dyn TextureProvider,
    ) -> Result<SceneLayout, AnimationError> {
        self.config.validate()?;

        let mut materials = MaterialCache::new(textures);
        let mut world = World::new();

        self.place_platform(&mut world);
        self.place_sun(&mut world);
        let mountains = self.place_mountains(&mut world);
        let trees = self.place_trees(&mut world, &mut materials)?;
        let flowers = self.place_flowers(&mut world, rng)?;
        let clouds = self.place_clouds(&mut world, &mut materials, rng)?;
        let moon = self.place_moon(&mut world)?;
        let butterfly = self.place_butterfly(&mut world, &mut materials);

        log::info!(
            "Composed scene: {} entities ({} flowers, {} clouds, {} trees)",
            world.len(),
            flowers.len(),
            clouds.len(),
            trees.len()
        );

        Ok(SceneLayout {
            world,
            butterfly,
            flowers,
            clouds,
            trees,
            mountains,
            moon,
        })
    }

    fn place_platform(&self, world: &mut World) -> Entity {
        let size = self.config.bounds.platform_half_size * 2.0;
        let platform = world.create_entity(
            EntityKind::Platform,
            TransformComponent::identity().with_scale(Vec3::new(size, PLATFORM_THICKNESS, size)),
        );
        world.add_component(platform, RenderableComponent::new(MaterialRef::solid(GRASS)));
        platform
    }

    fn place_sun(&self, world: &mut World) -> Entity {
        let sun = world.create_entity(
            EntityKind::Sun,
            TransformComponent::from_position(SUN_POSITION.into()).with_uniform_scale(SUN_RADIUS),
        );
        world.add_component(sun, RenderableComponent::new(MaterialRef::solid(GOLD)));
        sun
    }

    fn place_mountains(&self, world: &mut World) -> Vec<Entity> {
        MOUNTAINS
            .iter()
            .map(|(position, scale)| {
                let mountain = world.create_entity(
                    EntityKind::Mountain,
                    TransformComponent::from_position((*position).into()).with_scale((*scale).into()),
                );
                world.add_component(mountain, RenderableComponent::new(MaterialRef::solid(EARTH)));
                mountain
            })
            .collect()
    }

    fn place_trees(
        &self,
        world: &mut World,
        materials: &mut MaterialCache<'_>,
    ) -> Result<Vec<Entity>, AnimationError> {
        let sway = &self.config.trees;
        let trunk_sway = SwayComponent::new(Oscillator::new(sway.sway_frequency, sway.trunk_amplitude, 0.0)?);
        let canopy_sway = SwayComponent::new(Oscillator::new(sway.sway_frequency, sway.canopy_amplitude, 0.0)?);
        let bark = materials.resolve(BARK_TEXTURE, BARK);
        let leaves = materials.resolve(LEAVES_TEXTURE, LEAVES);

        let mut trees = Vec::with_capacity(TREE_POSITIONS.len());
        for position in TREE_POSITIONS {
            let root = world.create_entity(EntityKind::Tree, TransformComponent::from_position(position.into()));

            let trunk = world.create_entity(EntityKind::TreeTrunk, TransformComponent::from_position(TRUNK_OFFSET.into()));
            world.add_component(trunk, Parent(root));
            world.add_component(trunk, trunk_sway);
            world.add_component(trunk, RenderableComponent::new(bark));

            let canopy = world.create_entity(EntityKind::TreeCanopy, TransformComponent::from_position(CANOPY_OFFSET.into()));
            world.add_component(canopy, Parent(root));
            world.add_component(canopy, canopy_sway);
            world.add_component(canopy, RenderableComponent::new(leaves).with_opacity(0.8));

            world.add_component(root, TreeComponent { trunk, canopy });
            trees.push(root);
        }
        Ok(trees)
    }

    fn place_flowers<R: Rng + ?Sized>(&self, world: &mut World, rng: &mut R) -> Result<Vec<Entity>, AnimationError> {
        let bounds = &self.config.bounds;
        let curve = BloomCurve::from_config(&self.config.bloom)?;
        let resting_scale = curve.scale_at(0.0, FlowerComponent::default().bloom_target);

        let positions = sample_flower_positions(
            self.config.counts.flower_count,
            bounds.flower_half_extent,
            bounds.flower_height,
            rng,
        );

        Ok(positions
            .into_iter()
            .map(|position| {
                let flower = world.create_entity(
                    EntityKind::Flower,
                    TransformComponent::from_position(position).with_uniform_scale(resting_scale),
                );
                world.add_component(flower, FlowerComponent::default());
                world.add_component(flower, RenderableComponent::new(MaterialRef::solid(PINK)));
                flower
            })
            .collect())
    }

    fn place_clouds<R: Rng + ?Sized>(
        &self,
        world: &mut World,
        materials: &mut MaterialCache<'_>,
        rng: &mut R,
    ) -> Result<Vec<Entity>, AnimationError> {
        let settings = self.rain_settings();
        let mut clouds = Vec::with_capacity(FLOATING_CLOUDS.len() + SCROLLING_CLOUDS.len());

        for (position, texture) in FLOATING_CLOUDS {
            let rain = RainPool::new(settings, rng)?;
            let material = materials.resolve(CLOUD_TEXTURES[texture], WHITE);
            let cloud = world.create_entity(EntityKind::Cloud, TransformComponent::from_position(position.into()));
            world.add_component(cloud, CloudComponent::new(CloudDrift::Float, rain));
            world.add_component(cloud, RenderableComponent::new(material).with_opacity(0.9));
            clouds.push(cloud);
        }

        for (position, texture) in SCROLLING_CLOUDS {
            let material = materials.resolve(CLOUD_TEXTURES[texture], WHITE);
            let cloud = world.create_entity(
                EntityKind::Cloud,
                TransformComponent::from_position(position.into()).with_scale(SCROLLING_CLOUD_SCALE.into()),
            );
            world.add_component(cloud, CloudComponent::new(CloudDrift::Scroll, RainPool::empty(settings)));
            world.add_component(cloud, RenderableComponent::new(material).with_opacity(0.9));
            clouds.push(cloud);
        }

        Ok(clouds)
    }

    fn place_moon(&self, world: &mut World) -> Result<Option<Entity>, AnimationError> {
        let config = &self.config.moon;
        if !config.enabled {
            return Ok(None);
        }

        let orbit = MoonComponent::from_config(config)?;
        let mut transform = TransformComponent::from_position(Vec3::new(0.0, 0.0, config.depth))
            .with_uniform_scale(MOON_RADIUS);
        orbit.place(&mut transform.position, 0.0);

        let moon = world.create_entity(EntityKind::Moon, transform);
        world.add_component(moon, orbit);
        world.add_component(moon, RenderableComponent::new(MaterialRef::solid(PALE)));
        Ok(Some(moon))
    }

    fn place_butterfly(&self, world: &mut World, materials: &mut MaterialCache<'_>) -> Entity {
        let config = &self.config.butterfly;
        let material = materials.resolve(BUTTERFLY_TEXTURE, ORANGE);

        let butterfly = world.create_entity(EntityKind::Butterfly, TransformComponent::from_position(config.start.into()));
        world.add_component(butterfly, ButterflyComponent::new(self.config.bounds.butterfly_min_height));
        world.add_component(butterfly, RenderableComponent::new(material));
        butterfly
    }

    fn rain_settings(&self) -> RainSettings {
        RainSettings {
            count: self.config.counts.raindrops_per_cloud,
            spawn_height: self.config.bounds.rain_spawn_height,
            ground_level: self.config.bounds.ground_level,
            half_extent: self.config.bounds.rain_half_extent,
            speed_min: self.config.rain.speed_min,
            speed_max: self.config.rain.speed_max,
            resample_on_reset: self.config.rain.resample_on_reset,
        }
    }
}

/// Sample `count` flower positions on the square `[-half_extent, half_extent]²` at `height`
pub fn sample_flower_positions<R: Rng + ?Sized>(count: usize, half_extent: f32, height: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half_extent..=half_extent),
                height,
                rng.gen_range(-half_extent..=half_extent),
            )
        })
        .collect()
}

/// Resolves each texture id at most once per composition
struct MaterialCache<'p> {
    provider: &'p mut dyn TextureProvider,
    resolved: HashMap<&'static str, MaterialRef>,
}

impl<'p> MaterialCache<'p> {
    fn new(provider: &'p mut dyn TextureProvider) -> Self {
        Self {
            provider,
            resolved: HashMap::new(),
        }
    }

    fn resolve(&mut self, id: &'static str, fallback: [f32; 4]) -> MaterialRef {
        if let Some(material) = self.resolved.get(id) {
            return *material;
        }
        let material = resolve_material(&mut *self.provider, id, fallback);
        self.resolved.insert(id, material);
        material
    }
}
