//! Per-frame draw list
//!
//! The presentation records draws here between `clear` and `present`; the
//! sprite pipeline replays them in order, so later entries land on top.

use orrery_core::{Rect, Viewport, VisualHandle};

use crate::pipeline::SpriteInstance;

/// One textured rectangle to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDraw {
    pub visual: VisualHandle,
    pub instance: SpriteInstance,
}

/// Ordered list of draws for the current frame
#[derive(Debug, Default)]
pub struct SpriteBatch {
    draws: Vec<SpriteDraw>,
}

impl SpriteBatch {
    pub fn new() -> Self {
        Self {
            draws: Vec::with_capacity(16),
        }
    }

    /// Forget the previous frame's draws
    pub fn clear(&mut self) {
        self.draws.clear();
    }

    /// Stretch a texture over the whole viewport
    pub fn push_fullscreen(&mut self, visual: VisualHandle, viewport: Viewport) {
        let rect = Rect::new(0, 0, viewport.width as i32, viewport.height as i32);
        self.push(visual, rect);
    }

    /// Draw a texture into a screen rectangle
    pub fn push(&mut self, visual: VisualHandle, rect: Rect) {
        self.draws.push(SpriteDraw {
            visual,
            instance: SpriteInstance::from_rect(rect),
        });
    }

    pub fn draws(&self) -> &[SpriteDraw] {
        &self.draws
    }

    /// Instance data in draw order, ready for upload
    pub fn instances(&self) -> Vec<SpriteInstance> {
        self.draws.iter().map(|d| d.instance).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullscreen_covers_viewport() {
        let mut batch = SpriteBatch::new();
        batch.push_fullscreen(VisualHandle::new(0), Viewport::new(1920, 1080));
        assert_eq!(batch.draws()[0].instance.rect, [0.0, 0.0, 1920.0, 1080.0]);
    }

    #[test]
    fn test_order_is_preserved_and_clear_resets() {
        let mut batch = SpriteBatch::new();
        batch.push(VisualHandle::new(3), Rect::new(1, 2, 3, 3));
        batch.push(VisualHandle::new(1), Rect::new(4, 5, 6, 6));
        let visuals: Vec<_> = batch.draws().iter().map(|d| d.visual).collect();
        assert_eq!(visuals, vec![VisualHandle::new(3), VisualHandle::new(1)]);
        assert_eq!(batch.instances().len(), 2);

        batch.clear();
        assert!(batch.is_empty());
    }
}
