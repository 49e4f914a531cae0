//! Orbit update step
//!
//! Positions are a closed-form function of the orbital phase, not a
//! simulation. The circle is flattened vertically by √2/4 and the horizontal
//! offset subtracts the vertical one, giving a tilted, skewed ellipse.

use std::f64::consts::SQRT_2;

use crate::body::CelestialBody;
use crate::geometry::Viewport;
use crate::registry::BodyRegistry;

/// Vertical flattening applied to the circular parametrisation
pub const FLATTENING: f64 = SQRT_2 / 4.0;

/// Pixel offset of a body from its reference point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrbitOffset {
    pub x: i32,
    pub y: i32,
}

/// Offset for an orbit of `radius` pixels at `angle_deg`
pub fn orbit_offset(radius: f64, angle_deg: f64) -> OrbitOffset {
    let theta = angle_deg.to_radians();
    let y = (radius * theta.sin() * FLATTENING).round() as i32;
    let x = (radius * theta.cos() - y as f64).round() as i32;
    OrbitOffset { x, y }
}

/// Advance one body by a single tick
///
/// `reference` is the point the body orbits: the viewport centre for most
/// bodies, the primary's current centre for satellites. Bodies without a
/// rectangle are left untouched.
pub fn advance(body: &mut CelestialBody, viewport: Viewport, reference: (i32, i32)) {
    if body.is_background() {
        return;
    }

    body.advance_angle();

    let width = viewport.width as f64;
    let side = (width * body.size_scale()).round() as i32;
    let radius = width * body.orbit_radius_scale();
    let offset = orbit_offset(radius, body.angle_deg());

    if let Some(rect) = body.bounds_mut() {
        rect.width = side;
        rect.height = side;
        rect.x = reference.0 - offset.x - side / 2;
        rect.y = reference.1 - offset.y - side / 2;
    }
}

/// Advance every body in creation order
///
/// A satellite reads its primary's centre after the primary has already
/// moved this tick; the registry guarantees the primary comes first.
pub fn update_all(registry: &mut BodyRegistry, viewport: Viewport) {
    let handles: Vec<_> = registry.handles().collect();
    for handle in handles {
        let primary = match registry.get(handle) {
            Some(body) => body.primary(),
            None => continue,
        };

        let reference = match primary.and_then(|p| registry.get(p)) {
            Some(primary_body) => (primary_body.center_x(), primary_body.center_y()),
            None => viewport.center(),
        };

        if let Some(body) = registry.get_mut(handle) {
            advance(body, viewport, reference);
        }
    }
}
