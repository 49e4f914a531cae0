//! Sprite rendering for the orrery
//!
//! This crate provides the wgpu side of the presentation boundary.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`texture::TextureArena`] - Owns every decoded texture, indexed by `VisualHandle`
//! - [`pipeline::SpritePipeline`] - Draws textured screen-space rectangles
//! - [`batch::SpriteBatch`] - The frame's draw list, in submission order

pub mod context;
pub mod texture;
pub mod pipeline;
pub mod batch;

pub use context::RenderContext;
pub use texture::{GpuTexture, TextureArena};
pub use pipeline::{SpritePipeline, SpriteInstance, ScreenUniforms};
pub use batch::{SpriteBatch, SpriteDraw};
