//! Orrery - animated 2D solar system
//!
//! The desktop side of the app: configuration, input mapping, and the
//! window, render and audio systems that together implement
//! [`orrery_core::Presentation`].

pub mod config;
pub mod input;
pub mod startup;
pub mod systems;
