//! Core engine implementation
//!
//! The engine owns the composed world, the systems that animate it, the key
//! event channel and the frame clock. The host render loop calls one of the
//! frame methods once per rendered frame and hands the returned snapshot to
//! its renderer.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::{
    assets::TextureProvider,
    core::{Config, ConfigError, SceneConfig},
    ecs::{
        components::{AnimationError, BloomCurve, Oscillator},
        systems::{BloomSystem, ButterflySystem, CloudSystem, MoonSystem, SwaySystem},
        Entity, FrameContext, FrameScheduler, World,
    },
    foundation::time::FrameClock,
    input::{InputState, KeySender},
    scene::{FrameSnapshot, RenderSink, SceneComposer, SceneLayout},
};

/// Engine construction errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The scene configuration cannot animate correctly
    #[error(transparent)]
    Animation(#[from] AnimationError),

    /// The scene configuration file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Main engine struct
pub struct Engine {
    world: World,
    scheduler: FrameScheduler,
    input: InputState,
    clock: FrameClock,
    snapshot: FrameSnapshot,
    frames: u64,
    butterfly: Entity,
    flowers: Vec<Entity>,
    clouds: Vec<Entity>,
    moon: Option<Entity>,
    config: SceneConfig,
    running: bool,
}

impl Engine {
    /// Compose the scene and build its systems
    ///
    /// Placement is seeded from `config.seed`, or from OS entropy when unset.
    pub fn new(config: SceneConfig, textures: &mut dyn TextureProvider) -> Result<Self, EngineError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, textures, rng)
    }

    /// Load the configuration from a TOML/RON file, then [`Engine::new`]
    pub fn from_config_file(path: impl AsRef<Path>, textures: &mut dyn TextureProvider) -> Result<Self, EngineError> {
        let config = SceneConfig::load_from_file(path)?;
        Self::new(config, textures)
    }

    /// Compose the scene with an explicit random source
    pub fn with_rng(config: SceneConfig, textures: &mut dyn TextureProvider, mut rng: StdRng) -> Result<Self, EngineError> {
        log::info!("Initializing meadow engine...");

        let SceneLayout {
            world,
            butterfly,
            flowers,
            clouds,
            moon,
            ..
        } = SceneComposer::new(&config).compose(&mut rng, textures)?;

        // Systems draw from their own stream so placement stays reproducible
        let scheduler = build_scheduler(&config, StdRng::seed_from_u64(rng.gen()))?;
        log::debug!("Systems: {:?}", scheduler.system_names());

        let input = InputState::new(config.butterfly.steering, config.butterfly.step);

        Ok(Self {
            world,
            scheduler,
            input,
            clock: FrameClock::new(),
            snapshot: FrameSnapshot::new(),
            frames: 0,
            butterfly,
            flowers,
            clouds,
            moon,
            config,
            running: true,
        })
    }

    /// A new handle for sending key events, usable from any thread
    pub fn key_sender(&self) -> KeySender {
        self.input.sender()
    }

    /// Advance one frame using the engine's wall clock
    pub fn frame(&mut self) -> &FrameSnapshot {
        self.clock.tick();
        let (elapsed, delta) = (self.clock.total_time(), self.clock.delta_time());
        self.frame_at(elapsed, delta)
    }

    /// Advance one frame by a fixed `delta` on the engine clock
    pub fn step(&mut self, delta: f32) -> &FrameSnapshot {
        self.clock.advance(delta);
        let (elapsed, delta) = (self.clock.total_time(), self.clock.delta_time());
        self.frame_at(elapsed, delta)
    }

    /// Advance one frame at a host-supplied elapsed time
    ///
    /// Never blocks. Pending key events are applied first, then every system
    /// runs once, then the snapshot is rebuilt.
    pub fn frame_at(&mut self, elapsed: f32, delta: f32) -> &FrameSnapshot {
        if self.running {
            self.frames += 1;
            self.input.drain();

            let ctx = FrameContext::at(elapsed, delta, self.frames).with_movement(self.input.movement().to_vec3());
            self.scheduler.execute_frame(&mut self.world, &ctx);
            self.snapshot.capture(&self.world, self.frames, elapsed);
        }
        &self.snapshot
    }

    /// Advance one frame on the wall clock and submit it to `sink`
    pub fn render_into(&mut self, sink: &mut dyn RenderSink) {
        let snapshot = self.frame();
        sink.submit(snapshot);
    }

    /// The composed world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Snapshot of the most recent frame
    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// The butterfly entity
    pub fn butterfly(&self) -> Entity {
        self.butterfly
    }

    /// Flower entities
    pub fn flowers(&self) -> &[Entity] {
        &self.flowers
    }

    /// Cloud entities
    pub fn clouds(&self) -> &[Entity] {
        &self.clouds
    }

    /// The moon, if enabled
    pub fn moon(&self) -> Option<Entity> {
        self.moon
    }

    /// Active configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Whether frames still advance
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop animating and close the input channel
    ///
    /// Later frames return the last snapshot unchanged; later key sends fail
    /// with [`crate::input::InputError::Disconnected`].
    pub fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.input.close();
        log::info!("Engine shutdown complete after {} frames", self.frames);
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn build_scheduler(config: &SceneConfig, rng: StdRng) -> Result<FrameScheduler, AnimationError> {
    let mut scheduler = FrameScheduler::new();

    scheduler.add_system(Box::new(ButterflySystem::new()));
    scheduler.add_system(Box::new(BloomSystem::new(
        BloomCurve::from_config(&config.bloom)?,
        config.bloom.interval_secs,
    )?));
    scheduler.add_system(Box::new(CloudSystem::new(
        Oscillator::new(config.clouds.float_frequency, config.clouds.float_amplitude, 0.0)?,
        config.clouds.scroll_speed,
        config.bounds.cloud_wrap_bound,
        rng,
    )));
    scheduler.add_system(Box::new(SwaySystem::new()));
    if config.moon.enabled {
        scheduler.add_system(Box::new(MoonSystem::new()));
    }

    Ok(scheduler)
}
