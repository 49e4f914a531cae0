//! Core types for the orrery
//!
//! This crate holds everything that does not touch a window or a GPU:
//!
//! - [`CelestialBody`] - Visual handle, screen rectangle and orbital phase of one body
//! - [`BodyRegistry`] - Creation-ordered container owning every body
//! - [`orbit`] - Per-tick position update
//! - [`draw`] - Depth sort by on-screen centre and draw submission
//! - [`FrameLoop`] - Running/Stopped state machine driving one tick at a time
//! - [`Presentation`] / [`AssetLoader`] - Boundary implemented by the desktop app
//! - [`catalog`] - The fixed table of bodies the simulation renders

mod geometry;
mod body;
mod registry;
mod error;
mod presentation;
pub mod orbit;
pub mod draw;
pub mod frame_loop;
pub mod catalog;

pub use geometry::{Rect, Viewport};
pub use body::{BodyParams, CelestialBody, VisualHandle};
pub use registry::{BodyHandle, BodyRegistry, RegistryError};
pub use error::{AssetKind, AssetLoadError, PresentationInitError};
pub use presentation::{AssetLoader, Presentation};
pub use frame_loop::{FrameLoop, LoopState, TICK_INTERVAL};
pub use catalog::{load_catalog, BodySpec, CatalogError, CATALOG, IMAGE_DIR, MUSIC_FILE};
