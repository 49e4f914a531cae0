//! Window management system
//!
//! Opens the single borderless fullscreen window the orrery draws into.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window, WindowAttributes},
};
use orrery_core::PresentationInitError;
use crate::config::WindowConfig;

/// Owns the application window
pub struct WindowSystem {
    window: Arc<Window>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let window = Arc::new(
            event_loop
                .create_window(Self::attributes(config))
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        let size = window.inner_size();
        log::info!("Opened window '{}' at {}x{}", config.title, size.width, size.height);

        Ok(Self { window })
    }

    fn attributes(config: &WindowConfig) -> WindowAttributes {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        attrs
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

impl From<WindowError> for PresentationInitError {
    fn from(err: WindowError) -> Self {
        match err {
            WindowError::CreationFailed(msg) => PresentationInitError::Window(msg),
        }
    }
}
