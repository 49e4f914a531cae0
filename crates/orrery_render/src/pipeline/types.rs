//! GPU-compatible data types for the sprite pipeline
//!
//! These types match the layouts in `sprite.wgsl` exactly.

use bytemuck::{Pod, Zeroable};
use orrery_core::{Rect, Viewport};

/// Per-instance sprite data
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// (x, y, width, height) in pixels, origin top-left
    pub rect: [f32; 4],
}

impl SpriteInstance {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rect: [rect.x as f32, rect.y as f32, rect.width as f32, rect.height as f32],
        }
    }
}

/// Screen uniforms (16 bytes, std140 friendly)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniforms {
    /// Viewport size in pixels
    pub size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ScreenUniforms {
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self {
            size: [viewport.width.max(1) as f32, viewport.height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ScreenUniforms {
    fn default() -> Self {
        Self {
            size: [1.0, 1.0],
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_instance_size() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 16);
    }

    #[test]
    fn test_screen_uniforms_size() {
        assert_eq!(std::mem::size_of::<ScreenUniforms>(), 16);
    }

    #[test]
    fn test_instance_from_rect() {
        let instance = SpriteInstance::from_rect(Rect::new(369, 492, 15, 15));
        assert_eq!(instance.rect, [369.0, 492.0, 15.0, 15.0]);
    }

    #[test]
    fn test_zero_viewport_never_divides_by_zero() {
        let uniforms = ScreenUniforms::from_viewport(Viewport::new(0, 0));
        assert_eq!(uniforms.size, [1.0, 1.0]);
    }
}
