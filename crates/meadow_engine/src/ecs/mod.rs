//! Entity-Component-System implementation
//!
//! Every animated object is a key into the world's flat transform store;
//! systems hold keys, never references, and run once per frame through the
//! [`FrameScheduler`].

pub mod world;
pub mod entity;
pub mod component;
pub mod system;
pub mod scheduler;
pub mod components;
pub mod systems;

#[cfg(test)]
mod tests;

pub use world::World;
pub use entity::{Entity, EntityKind};
pub use component::Component;
pub use system::{System, SystemPhase, FrameContext};
pub use scheduler::FrameScheduler;
