//! Celestial body entity
//!
//! A body is passive data: the texture it draws with, the rectangle it
//! occupies on screen, and the orbital constants that move that rectangle.

use crate::geometry::Rect;
use crate::registry::BodyHandle;

/// Handle to a texture owned by the presentation layer
///
/// Bodies only reference textures; the presentation's texture arena owns
/// them and releases them at teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualHandle(u32);

impl VisualHandle {
    /// Wrap a raw arena index
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw arena index
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Fixed per-body constants
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyParams {
    /// Side length as a fraction of viewport width (0 = background, no rectangle)
    pub size_scale: f64,
    /// Horizontal orbit radius as a fraction of viewport width
    pub orbit_radius_scale: f64,
    /// Degrees added to the orbital phase every tick
    pub angle_increment: f64,
    /// Body whose centre this one orbits instead of the viewport centre
    pub primary: Option<BodyHandle>,
}

impl BodyParams {
    /// Parameters for a body orbiting the viewport centre
    pub fn new(size_scale: f64, orbit_radius_scale: f64, angle_increment: f64) -> Self {
        Self {
            size_scale,
            orbit_radius_scale,
            angle_increment,
            primary: None,
        }
    }

    /// Parameters for the full-window background
    pub fn background() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Orbit around `primary` instead of the viewport centre
    pub fn orbiting(mut self, primary: BodyHandle) -> Self {
        self.primary = Some(primary);
        self
    }
}

/// One simulated body (sun, planet, moon) or the static background
#[derive(Clone, Debug)]
pub struct CelestialBody {
    /// Display name, also used for catalog lookups
    pub name: &'static str,
    visual: VisualHandle,
    bounds: Option<Rect>,
    size_scale: f64,
    orbit_radius_scale: f64,
    angle_deg: f64,
    angle_increment: f64,
    primary: Option<BodyHandle>,
}

impl CelestialBody {
    /// Create a body at the given initial phase (degrees)
    ///
    /// Bodies with a positive `size_scale` get a zeroed rectangle that the
    /// first orbit update fills in; the background gets none.
    pub fn new(name: &'static str, visual: VisualHandle, params: BodyParams, initial_angle: f64) -> Self {
        let bounds = if params.size_scale > 0.0 {
            Some(Rect::default())
        } else {
            None
        };

        Self {
            name,
            visual,
            bounds,
            size_scale: params.size_scale,
            orbit_radius_scale: params.orbit_radius_scale,
            angle_deg: initial_angle,
            angle_increment: params.angle_increment,
            primary: params.primary,
        }
    }

    #[inline]
    pub fn visual(&self) -> VisualHandle {
        self.visual
    }

    /// Current screen rectangle, `None` for the background
    #[inline]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    #[inline]
    pub fn is_background(&self) -> bool {
        self.bounds.is_none()
    }

    #[inline]
    pub fn size_scale(&self) -> f64 {
        self.size_scale
    }

    #[inline]
    pub fn orbit_radius_scale(&self) -> f64 {
        self.orbit_radius_scale
    }

    /// Current orbital phase in degrees (not wrapped)
    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.angle_deg
    }

    #[inline]
    pub fn angle_increment(&self) -> f64 {
        self.angle_increment
    }

    /// Body this one orbits, if it is a satellite
    #[inline]
    pub fn primary(&self) -> Option<BodyHandle> {
        self.primary
    }

    #[inline]
    pub fn is_satellite(&self) -> bool {
        self.primary.is_some()
    }

    /// Horizontal centre of the rectangle, 0 without one
    pub fn center_x(&self) -> i32 {
        self.bounds.map(|r| r.center_x()).unwrap_or(0)
    }

    /// Vertical centre of the rectangle, 0 without one
    pub fn center_y(&self) -> i32 {
        self.bounds.map(|r| r.center_y()).unwrap_or(0)
    }

    pub(crate) fn advance_angle(&mut self) {
        self.angle_deg += self.angle_increment;
    }

    pub(crate) fn bounds_mut(&mut self) -> Option<&mut Rect> {
        self.bounds.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_has_no_bounds() {
        let body = CelestialBody::new("Cosmos", VisualHandle::new(0), BodyParams::background(), 12.0);
        assert!(body.is_background());
        assert_eq!(body.center_x(), 0);
        assert_eq!(body.center_y(), 0);
    }

    #[test]
    fn test_sized_body_starts_with_empty_rect() {
        let body = CelestialBody::new("Sun", VisualHandle::new(1), BodyParams::new(0.15625, 0.0, 0.0), 0.0);
        assert_eq!(body.bounds(), Some(Rect::default()));
        assert!(!body.is_satellite());
    }

    #[test]
    fn test_orbiting_sets_primary() {
        let params = BodyParams::new(0.005, 0.025, 12.0).orbiting(BodyHandle::from_index(4));
        let body = CelestialBody::new("Moon", VisualHandle::new(5), params, 90.0);
        assert!(body.is_satellite());
        assert_eq!(body.primary(), Some(BodyHandle::from_index(4)));
        assert_eq!(body.angle_deg(), 90.0);
    }

    #[test]
    fn test_advance_angle_is_unwrapped() {
        let mut body = CelestialBody::new("Moon", VisualHandle::new(5), BodyParams::new(0.005, 0.025, 12.0), 355.0);
        body.advance_angle();
        assert_eq!(body.angle_deg(), 367.0);
    }
}
