//! Scene composition and frame output
//!
//! [`SceneComposer`] builds the world once before the first frame;
//! [`FrameSnapshot`] is what the external renderer receives every frame.

pub mod composer;
pub mod snapshot;

pub use composer::{SceneComposer, SceneLayout, sample_flower_positions};
pub use snapshot::{FrameSnapshot, InstanceData, RenderSink, NO_TEXTURE};
