//! Desktop presentation
//!
//! Implements the core's presentation boundary on top of the window, render
//! and audio systems. Each system sits in an `Option` so teardown can release
//! them in a fixed order and a second teardown finds nothing left to do.

use std::path::Path;

use winit::event_loop::ActiveEventLoop;
use orrery_core::{
    AssetLoadError, AssetLoader, Presentation, PresentationInitError, Rect, Viewport, VisualHandle,
};

use crate::config::AppConfig;
use crate::input::InputQueue;
use super::audio::{AudioClip, AudioSystem};
use super::render::{RenderError, RenderSystem};
use super::window::WindowSystem;

/// Window, GPU renderer and audio output for the running app
pub struct DesktopPresentation {
    render: Option<RenderSystem>,
    window: Option<WindowSystem>,
    audio: Option<AudioSystem>,
    input: InputQueue,
}

impl DesktopPresentation {
    /// Open the audio device, the fullscreen window and the renderer
    ///
    /// Audio is skipped entirely when disabled in config. Anything acquired
    /// before a failure is dropped on the way out.
    pub fn init_presentation(
        event_loop: &ActiveEventLoop,
        config: &AppConfig,
    ) -> Result<Self, PresentationInitError> {
        let audio = if config.audio.enabled {
            Some(AudioSystem::open()?)
        } else {
            log::info!("Audio disabled");
            None
        };

        let window = WindowSystem::create(event_loop, &config.window)?;
        let render = RenderSystem::new(window.window().clone(), config.window.vsync)?;

        Ok(Self {
            render: Some(render),
            window: Some(window),
            audio,
            input: InputQueue::new(),
        })
    }

    /// Decode the background track
    pub fn load_audio(&self, path: &Path) -> Result<AudioClip, AssetLoadError> {
        AudioSystem::load_audio(path)
    }

    /// Loop `clip` at `volume`; a no-op when audio is disabled
    pub fn play_looping(&mut self, clip: &AudioClip, volume: f32) -> Result<(), PresentationInitError> {
        match &mut self.audio {
            Some(audio) => audio.play_looping(clip, volume),
            None => Ok(()),
        }
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// Queue for actions coming from window events
    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(render) = &mut self.render {
            render.resize(width, height);
        }
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl AssetLoader for DesktopPresentation {
    fn load_image(&mut self, path: &Path) -> Result<VisualHandle, AssetLoadError> {
        match &mut self.render {
            Some(render) => render.load_texture(path),
            None => Err(AssetLoadError::image(path, "renderer has been torn down")),
        }
    }
}

impl Presentation for DesktopPresentation {
    fn viewport(&self) -> Viewport {
        self.render
            .as_ref()
            .map(|r| r.viewport())
            .unwrap_or_default()
    }

    fn clear(&mut self) {
        if let Some(render) = &mut self.render {
            render.begin_frame();
        }
    }

    fn draw_background(&mut self, visual: VisualHandle) {
        if let Some(render) = &mut self.render {
            render.push_background(visual);
        }
    }

    fn draw_sprite(&mut self, visual: VisualHandle, rect: Rect) {
        if let Some(render) = &mut self.render {
            render.push_sprite(visual, rect);
        }
    }

    fn present(&mut self) {
        let Some(render) = &mut self.render else {
            return;
        };
        match render.render_frame() {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => log::warn!("Surface lost, reconfigured and skipped frame"),
            Err(e) => log::warn!("Frame skipped: {}", e),
        }
    }

    fn poll_quit_requested(&mut self) -> bool {
        self.input.drain_quit_requested()
    }

    fn teardown(&mut self) {
        if let Some(render) = self.render.take() {
            render.shutdown();
        }
        if self.window.take().is_some() {
            log::info!("Closed window");
        }
        if let Some(audio) = self.audio.take() {
            audio.shutdown();
        }
    }
}
