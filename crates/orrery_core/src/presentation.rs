//! Presentation boundary
//!
//! The core never talks to a window, GPU or audio device directly. The
//! desktop app implements these traits; tests implement them with fakes.

use std::path::Path;

use crate::body::VisualHandle;
use crate::error::AssetLoadError;
use crate::geometry::{Rect, Viewport};

/// Everything the frame loop needs from the outside world
pub trait Presentation {
    /// Current drawable size in pixels
    fn viewport(&self) -> Viewport;

    /// Start a new frame with an empty frame buffer
    fn clear(&mut self);

    /// Draw a texture stretched over the whole viewport
    fn draw_background(&mut self, visual: VisualHandle);

    /// Draw a texture into a screen rectangle
    fn draw_sprite(&mut self, visual: VisualHandle, rect: Rect);

    /// Show the frame buffer on screen
    fn present(&mut self);

    /// Non-blocking check for a quit signal or an Escape press since the last call
    fn poll_quit_requested(&mut self) -> bool;

    /// Release every native resource in dependency order
    fn teardown(&mut self);
}

/// Decodes image files into textures owned by the presentation
pub trait AssetLoader {
    /// Load an image and return a handle to its texture
    fn load_image(&mut self, path: &Path) -> Result<VisualHandle, AssetLoadError>;
}
