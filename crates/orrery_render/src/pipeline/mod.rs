//! Rendering pipeline components
//!
//! A single render pipeline that draws textured, screen-space rectangles.

pub mod types;
pub mod sprite_pipeline;

pub use types::{SpriteInstance, ScreenUniforms};
pub use sprite_pipeline::SpritePipeline;
