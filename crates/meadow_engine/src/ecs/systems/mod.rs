//! ECS Systems module
//!
//! One system per animated entity kind. Each owns whatever state it needs
//! across frames (timers, random source) and touches only its own
//! components plus their transforms.

pub mod bloom_system;
pub mod butterfly_system;
pub mod cloud_system;
pub mod moon_system;
pub mod sway_system;

pub use bloom_system::BloomSystem;
pub use butterfly_system::ButterflySystem;
pub use cloud_system::CloudSystem;
pub use moon_system::MoonSystem;
pub use sway_system::SwaySystem;
