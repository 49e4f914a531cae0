//! Startup error types
//!
//! Both kinds are fatal: asset paths and counts are fixed at build time, so
//! a failure points at the deployment, not at something worth retrying.

use std::fmt;
use std::path::PathBuf;

/// Which kind of asset failed to load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Audio,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Image => write!(f, "image"),
            AssetKind::Audio => write!(f, "audio"),
        }
    }
}

/// An image or sound file was missing or could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadError {
    pub kind: AssetKind,
    pub path: PathBuf,
    /// Message from the underlying decoder or filesystem
    pub message: String,
}

impl AssetLoadError {
    pub fn new(kind: AssetKind, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn image(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(AssetKind::Image, path, message)
    }

    pub fn audio(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(AssetKind::Audio, path, message)
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to load {} '{}': {}",
            self.kind,
            self.path.display(),
            self.message
        )
    }
}

impl std::error::Error for AssetLoadError {}

/// Window, renderer or audio device setup failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationInitError {
    /// The platform event loop could not be created
    EventLoop(String),
    /// The window could not be opened
    Window(String),
    /// No drawable surface for the window
    Surface(String),
    /// No GPU adapter compatible with the surface
    Adapter,
    /// The GPU device could not be created
    Device(String),
    /// The audio output device could not be opened
    AudioDevice(String),
}

impl fmt::Display for PresentationInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresentationInitError::EventLoop(msg) => write!(f, "Event loop creation failed: {}", msg),
            PresentationInitError::Window(msg) => write!(f, "Window creation failed: {}", msg),
            PresentationInitError::Surface(msg) => write!(f, "Surface creation failed: {}", msg),
            PresentationInitError::Adapter => write!(f, "No compatible GPU adapter found"),
            PresentationInitError::Device(msg) => write!(f, "GPU device creation failed: {}", msg),
            PresentationInitError::AudioDevice(msg) => write!(f, "Audio device could not be opened: {}", msg),
        }
    }
}

impl std::error::Error for PresentationInitError {}
