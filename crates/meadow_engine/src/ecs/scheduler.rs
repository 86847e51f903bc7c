//! System Scheduling
//!
//! Runs every registered system once per frame. Phases execute in order;
//! systems within a phase keep their registration order, so a frame is fully
//! deterministic for a given world and context.

use super::system::{FrameContext, System, SystemPhase};
use super::World;

/// Deterministic single-threaded frame scheduler
#[derive(Default)]
pub struct FrameScheduler {
    systems: Vec<Box<dyn System>>,
}

impl FrameScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system
    pub fn add_system(&mut self, system: Box<dyn System>) {
        log::debug!("Registering system '{}' in {:?}", system.name(), system.phase());
        self.systems.push(system);
        // Stable sort keeps registration order inside a phase
        self.systems.sort_by_key(|system| system.phase());
    }

    /// Run all systems for one frame
    pub fn execute_frame(&mut self, world: &mut World, ctx: &FrameContext) {
        for system in &mut self.systems {
            log::trace!("frame {}: running '{}'", ctx.frame, system.name());
            system.run(world, ctx);
        }
    }

    /// Names in execution order
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    /// Systems registered in `phase`
    pub fn phase_len(&self, phase: SystemPhase) -> usize {
        self.systems.iter().filter(|system| system.phase() == phase).count()
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no systems are registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        name: &'static str,
        phase: SystemPhase,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl System for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn phase(&self) -> SystemPhase {
            self.phase
        }

        fn run(&mut self, _world: &mut World, _ctx: &FrameContext) {
            self.log.lock().unwrap().push(self.name);
        }
    }

    #[test]
    fn test_phases_run_in_order_and_registration_order_is_kept() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = FrameScheduler::new();
        for (name, phase) in [
            ("anim_a", SystemPhase::Update),
            ("input", SystemPhase::PreUpdate),
            ("anim_b", SystemPhase::Update),
        ] {
            scheduler.add_system(Box::new(Recorder { name, phase, log: Arc::clone(&log) }));
        }

        let mut world = World::new();
        scheduler.execute_frame(&mut world, &FrameContext::at(0.0, 0.0, 1));

        assert_eq!(*log.lock().unwrap(), vec!["input", "anim_a", "anim_b"]);
        assert_eq!(scheduler.system_names(), vec!["input", "anim_a", "anim_b"]);
        assert_eq!(scheduler.phase_len(SystemPhase::Update), 2);
        assert_eq!(scheduler.len(), 3);
    }
}
