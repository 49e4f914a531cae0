//! Depth-sort and draw step
//!
//! Bodies lower on screen are treated as nearer and drawn later. The sort
//! works on a snapshot of handles so the registry keeps its creation order
//! for the next update pass.

use crate::presentation::Presentation;
use crate::registry::{BodyHandle, BodyRegistry};

/// Handles of all bodies with a rectangle, sorted back-to-front
///
/// The sort key is the vertical centre. `sort_by_key` is stable, so bodies
/// on the same row keep their creation order.
pub fn draw_order(registry: &BodyRegistry) -> Vec<BodyHandle> {
    let mut order: Vec<BodyHandle> = registry
        .iter_with_handles()
        .filter(|(_, body)| !body.is_background())
        .map(|(handle, _)| handle)
        .collect();

    order.sort_by_key(|handle| registry.get(*handle).map(|body| body.center_y()).unwrap_or(0));
    order
}

/// Issue draw calls for one frame
///
/// Backgrounds go first, full-viewport and in creation order; every other
/// body follows in [`draw_order`]. Returns the number of sprite draws.
pub fn draw_frame<P: Presentation + ?Sized>(registry: &BodyRegistry, presenter: &mut P) -> usize {
    for background in registry.backgrounds() {
        presenter.draw_background(background.visual());
    }

    let order = draw_order(registry);
    for handle in &order {
        if let Some(body) = registry.get(*handle) {
            if let Some(rect) = body.bounds() {
                presenter.draw_sprite(body.visual(), rect);
            }
        }
    }
    order.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{BodyParams, CelestialBody, VisualHandle};
    use crate::geometry::{Rect, Viewport};
    use crate::orbit::update_all;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(u32, Option<Rect>)>,
    }

    impl Presentation for Recorder {
        fn viewport(&self) -> Viewport {
            Viewport::new(1000, 1000)
        }
        fn clear(&mut self) {}
        fn draw_background(&mut self, visual: VisualHandle) {
            self.calls.push((visual.index() as u32, None));
        }
        fn draw_sprite(&mut self, visual: VisualHandle, rect: Rect) {
            self.calls.push((visual.index() as u32, Some(rect)));
        }
        fn present(&mut self) {}
        fn poll_quit_requested(&mut self) -> bool {
            false
        }
        fn teardown(&mut self) {}
    }

    fn body(name: &'static str, visual: u32, angle: f64) -> CelestialBody {
        CelestialBody::new(name, VisualHandle::new(visual), BodyParams::new(0.01, 0.2, 0.0), angle)
    }

    #[test]
    fn test_sorted_by_vertical_center() {
        let mut registry = BodyRegistry::new();
        // 270 degrees puts the body below centre, 90 above it
        let low = registry.spawn(body("Low", 0, 270.0)).unwrap();
        let high = registry.spawn(body("High", 1, 90.0)).unwrap();
        let mid = registry.spawn(body("Mid", 2, 0.0)).unwrap();
        update_all(&mut registry, Viewport::new(1000, 1000));

        assert_eq!(draw_order(&registry), vec![high, mid, low]);
        // Registry order is untouched
        let names: Vec<_> = registry.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Low", "High", "Mid"]);
    }

    #[test]
    fn test_ties_keep_creation_order() {
        let mut registry = BodyRegistry::new();
        let handles: Vec<_> = (0..6)
            .map(|i| registry.spawn(body("Twin", i, 0.0)).unwrap())
            .collect();
        update_all(&mut registry, Viewport::new(1000, 1000));

        assert_eq!(draw_order(&registry), handles);
    }

    #[test]
    fn test_background_drawn_first_and_excluded_from_sort() {
        let mut registry = BodyRegistry::new();
        registry.spawn(body("Planet", 1, 90.0)).unwrap();
        let cosmos = registry
            .spawn(CelestialBody::new("Cosmos", VisualHandle::new(9), BodyParams::background(), 0.0))
            .unwrap();
        update_all(&mut registry, Viewport::new(1000, 1000));

        assert!(!draw_order(&registry).contains(&cosmos));

        let mut recorder = Recorder::default();
        let drawn = draw_frame(&registry, &mut recorder);
        assert_eq!(drawn, 1);
        assert_eq!(recorder.calls[0], (9, None));
        assert!(recorder.calls[1].1.is_some());
    }

    #[test]
    fn test_draw_is_idempotent_without_update() {
        let mut registry = BodyRegistry::new();
        for (i, angle) in [10.0, 200.0, 95.0, 300.0].into_iter().enumerate() {
            registry.spawn(body("Body", i as u32, angle)).unwrap();
        }
        update_all(&mut registry, Viewport::new(1000, 1000));

        let mut first = Recorder::default();
        let mut second = Recorder::default();
        draw_frame(&registry, &mut first);
        draw_frame(&registry, &mut second);
        assert_eq!(first.calls, second.calls);
    }
}
