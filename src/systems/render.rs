//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Texture arena and sprite pipeline
//! - Frame recording and submission

use std::path::Path;
use std::sync::Arc;
use winit::window::Window;
use orrery_core::{AssetLoadError, PresentationInitError, Rect, Viewport, VisualHandle};
use orrery_render::{RenderContext, ScreenUniforms, SpriteBatch, SpritePipeline, TextureArena};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated; it has been reconfigured
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    arena: TextureArena,
    batch: SpriteBatch,
    pipeline: SpritePipeline,
    context: RenderContext,
    clear_color: wgpu::Color,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, PresentationInitError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let pipeline = SpritePipeline::new(&context.device, context.config.format);

        Ok(Self {
            arena: TextureArena::new(),
            batch: SpriteBatch::new(),
            pipeline,
            context,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Decode and upload an image
    pub fn load_texture(&mut self, path: &Path) -> Result<VisualHandle, AssetLoadError> {
        self.arena.load(
            &self.context.device,
            &self.context.queue,
            self.pipeline.texture_bind_group_layout(),
            self.pipeline.sampler(),
            path,
        )
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(winit::dpi::PhysicalSize::new(width, height));
    }

    pub fn viewport(&self) -> Viewport {
        self.context.viewport()
    }

    /// Drop the draws recorded for the previous frame
    pub fn begin_frame(&mut self) {
        self.batch.clear();
    }

    pub fn push_background(&mut self, visual: VisualHandle) {
        let viewport = self.viewport();
        self.batch.push_fullscreen(visual, viewport);
    }

    pub fn push_sprite(&mut self, visual: VisualHandle, rect: Rect) {
        self.batch.push(visual, rect);
    }

    /// Submit the recorded draws and present
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        let uniforms = ScreenUniforms::from_viewport(self.viewport());
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Sprite Encoder"),
            });

        self.pipeline.render(
            &mut encoder,
            &view,
            &self.context.device,
            &self.context.queue,
            &self.batch,
            &self.arena,
            self.clear_color,
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Release textures, then the pipeline, then the surface and device
    pub fn shutdown(mut self) {
        let textures = self.arena.len();
        self.batch.clear();
        self.arena.clear();
        drop(self.pipeline);
        drop(self.context);
        log::info!("Released {} textures and the GPU context", textures);
    }
}
