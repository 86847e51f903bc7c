//! Rain particle pool
//!
//! Each raining cloud owns a fixed number of drops. A drop falls by its own
//! constant speed every frame and jumps back to the spawn height once it
//! passes below ground, so the pool loops forever without allocating.

use rand::Rng;

use super::AnimationError;

/// Parameters shared by every drop of a pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainSettings {
    /// Number of drops
    pub count: usize,
    /// Height drops start from and return to (relative to the cloud)
    pub spawn_height: f32,
    /// Drops recycle once below this height
    pub ground_level: f32,
    /// Offsets are sampled in `[-half_extent, half_extent]` on x and z
    pub half_extent: f32,
    /// Slowest fall speed (units per frame)
    pub speed_min: f32,
    /// Fastest fall speed (units per frame)
    pub speed_max: f32,
    /// Re-sample x/z when a drop recycles
    pub resample_on_reset: bool,
}

impl RainSettings {
    fn validate(&self) -> Result<(), AnimationError> {
        let finite = [
            self.spawn_height,
            self.ground_level,
            self.half_extent,
            self.speed_min,
            self.speed_max,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !finite {
            return Err(AnimationError::InvalidConfiguration("rain settings must be finite".to_string()));
        }
        if self.spawn_height <= self.ground_level {
            return Err(AnimationError::InvalidConfiguration(format!(
                "rain spawn height {} must be above ground level {}",
                self.spawn_height, self.ground_level
            )));
        }
        if self.half_extent < 0.0 {
            return Err(AnimationError::InvalidConfiguration(format!(
                "rain half extent must not be negative, got {}",
                self.half_extent
            )));
        }
        if self.speed_min <= 0.0 || self.speed_min > self.speed_max {
            return Err(AnimationError::InvalidConfiguration(format!(
                "rain speed range [{}, {}] must be positive and ordered",
                self.speed_min, self.speed_max
            )));
        }
        Ok(())
    }
}

/// One falling drop, positioned relative to its cloud
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    /// Horizontal offset
    pub x: f32,
    /// Height
    pub y: f32,
    /// Depth offset
    pub z: f32,
    /// Fall per frame, sampled once at creation
    pub speed: f32,
    /// How many times this drop has returned to the spawn height
    pub cycles: u32,
}

/// Fixed-size pool of drops owned by one cloud
#[derive(Debug, Clone)]
pub struct RainPool {
    drops: Vec<Raindrop>,
    settings: RainSettings,
}

impl RainPool {
    /// Sample a new pool; all drops start at the spawn height
    pub fn new<R: Rng + ?Sized>(settings: RainSettings, rng: &mut R) -> Result<Self, AnimationError> {
        settings.validate()?;

        let drops = (0..settings.count)
            .map(|_| {
                let (x, z) = sample_offset(settings.half_extent, rng);
                Raindrop {
                    x,
                    y: settings.spawn_height,
                    z,
                    speed: rng.gen_range(settings.speed_min..=settings.speed_max),
                    cycles: 0,
                }
            })
            .collect();

        Ok(Self { drops, settings })
    }

    /// A pool without drops (clouds that do not rain)
    pub fn empty(settings: RainSettings) -> Self {
        Self {
            drops: Vec::new(),
            settings: RainSettings { count: 0, ..settings },
        }
    }

    /// Advance every drop by one frame
    ///
    /// `rng` is only consulted when `resample_on_reset` is set.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let RainSettings {
            spawn_height,
            ground_level,
            half_extent,
            resample_on_reset,
            ..
        } = self.settings;

        for drop in &mut self.drops {
            drop.y -= drop.speed;

            if drop.y < ground_level {
                drop.y = spawn_height;
                drop.cycles = drop.cycles.saturating_add(1);

                if resample_on_reset {
                    let (x, z) = sample_offset(half_extent, rng);
                    drop.x = x;
                    drop.z = z;
                }
            }
        }
    }

    /// Drops in creation order
    pub fn drops(&self) -> &[Raindrop] {
        &self.drops
    }

    /// Number of drops
    pub fn len(&self) -> usize {
        self.drops.len()
    }

    /// Whether the pool has no drops
    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    /// Pool parameters
    pub fn settings(&self) -> &RainSettings {
        &self.settings
    }
}

fn sample_offset<R: Rng + ?Sized>(half_extent: f32, rng: &mut R) -> (f32, f32) {
    (
        rng.gen_range(-half_extent..=half_extent),
        rng.gen_range(-half_extent..=half_extent),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> RainSettings {
        RainSettings {
            count: 100,
            spawn_height: 15.0,
            ground_level: 0.0,
            half_extent: 2.0,
            speed_min: 0.1,
            speed_max: 0.3,
            resample_on_reset: false,
        }
    }

    #[test]
    fn test_construction_samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = RainPool::new(settings(), &mut rng).unwrap();

        assert_eq!(pool.len(), 100);
        for drop in pool.drops() {
            assert_eq!(drop.y, 15.0);
            assert!((-2.0..=2.0).contains(&drop.x));
            assert!((-2.0..=2.0).contains(&drop.z));
            assert!((0.1..=0.3).contains(&drop.speed));
        }
    }

    #[test]
    fn test_height_stays_between_ground_and_spawn() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = RainPool::new(settings(), &mut rng).unwrap();

        for _ in 0..1_000 {
            pool.update(&mut rng);
            for drop in pool.drops() {
                assert!(drop.y >= 0.0 && drop.y <= 15.0, "drop escaped: {drop:?}");
            }
        }
    }

    #[test]
    fn test_every_drop_recycles_after_slowest_fall() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool = RainPool::new(settings(), &mut rng).unwrap();

        // 15 / 0.1 = 150 frames to reach the ground, one more to pass it
        for _ in 0..160 {
            pool.update(&mut rng);
        }

        assert!(pool.drops().iter().all(|drop| drop.cycles >= 1));
    }

    #[test]
    fn test_reset_keeps_speed_and_offset() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut pool = RainPool::new(settings(), &mut rng).unwrap();
        let before = pool.drops().to_vec();

        for _ in 0..400 {
            pool.update(&mut rng);
        }

        for (old, new) in before.iter().zip(pool.drops()) {
            assert_eq!(old.speed, new.speed);
            assert_eq!((old.x, old.z), (new.x, new.z));
        }
    }

    #[test]
    fn test_resample_on_reset_moves_offsets() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = RainPool::new(RainSettings { resample_on_reset: true, ..settings() }, &mut rng).unwrap();
        let before = pool.drops().to_vec();

        for _ in 0..200 {
            pool.update(&mut rng);
        }

        let moved = before
            .iter()
            .zip(pool.drops())
            .filter(|(old, new)| (old.x, old.z) != (new.x, new.z))
            .count();
        assert!(moved > 0);
        assert!(pool.drops().iter().all(|d| (-2.0..=2.0).contains(&d.x) && (-2.0..=2.0).contains(&d.z)));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        let inverted = RainSettings { speed_min: 0.4, speed_max: 0.2, ..settings() };
        let sunk = RainSettings { spawn_height: -1.0, ..settings() };

        assert!(matches!(RainPool::new(inverted, &mut rng), Err(AnimationError::InvalidConfiguration(_))));
        assert!(RainPool::new(sunk, &mut rng).is_err());
    }
}
