//! System trait and per-frame context

use crate::foundation::math::Vec3;

/// System execution phases with explicit ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SystemPhase {
    /// Input-driven updates
    PreUpdate = 0,
    /// Time-driven animation
    Update = 1,
}

/// Everything a system may read about the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds since the scene started
    pub elapsed: f32,
    /// Seconds since the previous frame
    pub delta: f32,
    /// Frame number, starting at 1 for the first rendered frame
    pub frame: u64,
    /// Butterfly movement for this frame
    pub movement: Vec3,
}

impl FrameContext {
    /// Context for a frame without keyboard movement
    pub fn at(elapsed: f32, delta: f32, frame: u64) -> Self {
        Self {
            elapsed,
            delta,
            frame,
            movement: Vec3::zeros(),
        }
    }

    /// Builder pattern: attach this frame's movement
    pub fn with_movement(mut self, movement: Vec3) -> Self {
        self.movement = movement;
        self
    }
}

/// System trait for processing entities and components
pub trait System: Send {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// Which phase this system belongs to
    fn phase(&self) -> SystemPhase {
        SystemPhase::Update
    }

    /// Run the system for one frame
    fn run(&mut self, world: &mut super::World, ctx: &FrameContext);
}
