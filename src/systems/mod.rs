//! Application systems
//!
//! The window, renderer and audio output, plus the presentation that ties
//! them to the frame loop.

mod audio;
mod presentation;
mod render;
mod window;

pub use audio::{AudioClip, AudioSystem};
pub use presentation::DesktopPresentation;
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
