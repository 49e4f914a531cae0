//! Integration tests for the frame loop
//!
//! These drive the full catalog through a scripted presentation:
//! 1. All eleven bodies load and animate
//! 2. An Escape press after five ticks stops the loop and tears down once
//! 3. A missing asset aborts startup and still tears down

use std::path::Path;

use orrery_core::{
    AssetLoadError, AssetLoader, FrameLoop, LoopState, Presentation, Rect, Viewport,
    VisualHandle, CATALOG,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Presentation that records draw calls and reports quit on a chosen tick
#[derive(Default)]
struct ScriptedPresentation {
    viewport: Viewport,
    textures: Vec<String>,
    missing: Option<&'static str>,
    escape_on_present: Option<usize>,
    presents: usize,
    frame: Vec<(VisualHandle, Option<Rect>)>,
    last_frame: Vec<(VisualHandle, Option<Rect>)>,
    teardowns: usize,
}

impl ScriptedPresentation {
    fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            ..Default::default()
        }
    }
}

impl AssetLoader for ScriptedPresentation {
    fn load_image(&mut self, path: &Path) -> Result<VisualHandle, AssetLoadError> {
        if let Some(missing) = self.missing {
            if path.ends_with(missing) {
                return Err(AssetLoadError::image(path, "No such file or directory"));
            }
        }
        self.textures.push(path.display().to_string());
        Ok(VisualHandle::new(self.textures.len() as u32 - 1))
    }
}

impl Presentation for ScriptedPresentation {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw_background(&mut self, visual: VisualHandle) {
        self.frame.push((visual, None));
    }

    fn draw_sprite(&mut self, visual: VisualHandle, rect: Rect) {
        self.frame.push((visual, Some(rect)));
    }

    fn present(&mut self) {
        self.presents += 1;
        self.last_frame = self.frame.clone();
    }

    fn poll_quit_requested(&mut self) -> bool {
        self.escape_on_present == Some(self.presents)
    }

    fn teardown(&mut self) {
        self.teardowns += 1;
        self.textures.clear();
    }
}

// ==================== Full Catalog Tests ====================

#[test]
fn test_escape_after_five_ticks_stops_once() {
    let mut presentation = ScriptedPresentation::new(1920, 1080);
    presentation.escape_on_present = Some(6);
    let mut rng = StdRng::seed_from_u64(2024);

    let mut frame_loop = FrameLoop::start(&mut presentation, &CATALOG, Path::new("."), &mut rng)
        .expect("all catalog images should load");
    assert_eq!(frame_loop.registry().len(), 11);

    for _ in 0..5 {
        assert_eq!(frame_loop.tick(&mut presentation), LoopState::Running);
    }
    assert_eq!(presentation.teardowns, 0);

    assert_eq!(frame_loop.tick(&mut presentation), LoopState::Stopped);
    assert_eq!(presentation.teardowns, 1);

    // Nothing more happens once stopped
    assert_eq!(frame_loop.tick(&mut presentation), LoopState::Stopped);
    frame_loop.stop(&mut presentation);
    assert_eq!(presentation.teardowns, 1);
    assert_eq!(presentation.presents, 6);
}

#[test]
fn test_run_with_no_op_pacing() {
    let mut presentation = ScriptedPresentation::new(1280, 720);
    presentation.escape_on_present = Some(6);
    let mut rng = StdRng::seed_from_u64(5);

    let mut frame_loop = FrameLoop::start(&mut presentation, &CATALOG, Path::new("."), &mut rng).unwrap();
    let mut pauses = 0;
    frame_loop.run(&mut presentation, |_| pauses += 1);

    assert_eq!(frame_loop.ticks(), 6);
    assert_eq!(pauses, 5);
    assert_eq!(presentation.teardowns, 1);
}

#[test]
fn test_frame_draws_background_then_depth_sorted_bodies() {
    let mut presentation = ScriptedPresentation::new(1600, 900);
    let mut rng = StdRng::seed_from_u64(99);

    let mut frame_loop = FrameLoop::start(&mut presentation, &CATALOG, Path::new("."), &mut rng).unwrap();
    frame_loop.tick(&mut presentation);

    let frame = &presentation.last_frame;
    assert_eq!(frame.len(), 11);
    assert_eq!(frame[0], (VisualHandle::new(0), None));

    let centers: Vec<i32> = frame[1..]
        .iter()
        .map(|(_, rect)| rect.expect("sorted bodies have rectangles").center_y())
        .collect();
    assert!(centers.windows(2).all(|pair| pair[0] <= pair[1]), "not sorted: {:?}", centers);
}

#[test]
fn test_moon_stays_near_earth() {
    let mut presentation = ScriptedPresentation::new(1000, 1000);
    let mut rng = StdRng::seed_from_u64(3);

    let mut frame_loop = FrameLoop::start(&mut presentation, &CATALOG, Path::new("."), &mut rng).unwrap();
    for _ in 0..50 {
        frame_loop.tick(&mut presentation);
        let registry = frame_loop.registry();
        let (_, earth) = registry.find_by_name("Earth").unwrap();
        let (_, moon) = registry.find_by_name("Moon").unwrap();
        // Moon orbit radius is 25px horizontally
        assert!((moon.center_x() - earth.center_x()).abs() <= 27);
        assert!((moon.center_y() - earth.center_y()).abs() <= 27);
    }
}

// ==================== Startup Failure Tests ====================

#[test]
fn test_missing_asset_tears_down() {
    let mut presentation = ScriptedPresentation::new(1920, 1080);
    presentation.missing = Some("Saturn.png");
    let mut rng = StdRng::seed_from_u64(11);

    let result = FrameLoop::start(&mut presentation, &CATALOG, Path::new("."), &mut rng);

    let err = result.err().expect("startup should fail");
    assert!(err.to_string().contains("Saturn.png"));
    assert_eq!(presentation.teardowns, 1);
    assert!(presentation.textures.is_empty());
    assert_eq!(presentation.presents, 0);
}
