//! Body registry
//!
//! Owns every [`CelestialBody`] in creation order. Creation order is the
//! update order, so a satellite's primary must be registered first.

use rand::Rng;

use crate::body::{BodyParams, CelestialBody, VisualHandle};

/// A handle to a body in the registry (its creation index)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(usize);

impl BodyHandle {
    /// Build a handle from a raw creation index
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index of this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Creation-ordered collection of all bodies
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Create a registry with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Add a body, returning its handle
    ///
    /// A satellite is rejected unless its primary is already registered,
    /// which keeps the primary ahead of it in the update pass.
    pub fn spawn(&mut self, body: CelestialBody) -> Result<BodyHandle, RegistryError> {
        if let Some(primary) = body.primary() {
            if primary.0 >= self.bodies.len() {
                return Err(RegistryError::PrimaryNotRegistered {
                    body: body.name,
                    primary,
                });
            }
            if self.bodies[primary.0].is_background() {
                return Err(RegistryError::BackgroundPrimary { body: body.name });
            }
        }

        let handle = BodyHandle(self.bodies.len());
        log::debug!("Registered body '{}' as #{}", body.name, handle.0);
        self.bodies.push(body);
        Ok(handle)
    }

    /// Create and add a body whose initial phase is drawn from `rng`
    ///
    /// The phase is a whole number of degrees in `[0, 360)`.
    pub fn spawn_with_rng<R: Rng>(
        &mut self,
        name: &'static str,
        visual: VisualHandle,
        params: BodyParams,
        rng: &mut R,
    ) -> Result<BodyHandle, RegistryError> {
        let initial_angle = rng.gen_range(0u32..360) as f64;
        self.spawn(CelestialBody::new(name, visual, params, initial_angle))
    }

    /// Get a body by handle
    pub fn get(&self, handle: BodyHandle) -> Option<&CelestialBody> {
        self.bodies.get(handle.0)
    }

    /// Get a mutable body by handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(handle.0)
    }

    /// Find the first body with the given name
    pub fn find_by_name(&self, name: &str) -> Option<(BodyHandle, &CelestialBody)> {
        self.iter_with_handles().find(|(_, body)| body.name == name)
    }

    /// Iterate over bodies in creation order
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Iterate over bodies with their handles in creation order
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (BodyHandle, &CelestialBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyHandle(i), body))
    }

    /// Handles of all bodies in creation order
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> {
        (0..self.bodies.len()).map(BodyHandle)
    }

    /// Bodies without a rectangle (drawn full-window behind everything)
    pub fn backgrounds(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|body| body.is_background())
    }

    /// Number of bodies
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if the registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Drop every body (textures stay with the presentation)
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

/// Error raised when a body cannot be registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The satellite's primary has not been registered yet
    PrimaryNotRegistered { body: &'static str, primary: BodyHandle },
    /// The satellite names the background as its primary
    BackgroundPrimary { body: &'static str },
    /// A catalog entry names a primary that does not exist
    UnknownPrimary { body: &'static str, primary: &'static str },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::PrimaryNotRegistered { body, primary } => write!(
                f,
                "Body '{}' orbits #{} which is not registered yet",
                body,
                primary.index()
            ),
            RegistryError::BackgroundPrimary { body } => {
                write!(f, "Body '{}' cannot orbit the background", body)
            }
            RegistryError::UnknownPrimary { body, primary } => {
                write!(f, "Body '{}' orbits unknown body '{}'", body, primary)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
