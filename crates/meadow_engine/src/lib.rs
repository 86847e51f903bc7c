//! # Meadow Engine
//!
//! Frame-update engine for a decorative outdoor scene: a grass platform with
//! trees, flowers, mountains, raining clouds, a sun, a moon and a butterfly the
//! user steers with the keyboard.
//!
//! ## Features
//!
//! - **ECS Architecture**: slotmap-backed entities with typed component stores
//! - **Time-driven animation**: flower bloom, cloud drift, tree sway, moon orbit
//! - **Rain particles**: fixed pools of recycling raindrops per cloud
//! - **Keyboard steering**: thread-safe key event channel
//! - **Renderer hand-off**: GPU-ready `bytemuck` instance data every frame
//!
//! Drawing is left to the host: it implements [`scene::RenderSink`] (or reads
//! [`Engine::frame`] directly) and uploads the snapshot however it likes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meadow_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SceneConfig::default().with_seed(7);
//!     let mut textures = ImageTextureProvider::new(config.assets_dir.clone());
//!     let mut engine = Engine::new(config, &mut textures)?;
//!
//!     engine.key_sender().press(KeyCode::ArrowUp)?;
//!     let snapshot = engine.step(1.0 / 60.0);
//!     println!("{} instances", snapshot.instances.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod foundation;
pub mod config;
pub mod ecs;
pub mod assets;
pub mod input;
pub mod scene;

mod engine;

pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Engine, EngineError,
        assets::{AssetError, ImageTextureProvider, MaterialRef, TextureProvider},
        core::{Config, SceneConfig},
        ecs::{Entity, EntityKind, World},
        foundation::math::Vec3,
        input::{InputError, KeyCode, KeySender, SteeringMode},
        scene::{FrameSnapshot, InstanceData, RenderSink},
    };
}
