//! Frame loop
//!
//! A two-state machine (Running, Stopped) that owns the body registry and
//! runs one tick at a time against a [`Presentation`]. The desktop app calls
//! [`FrameLoop::tick`] from its event loop; [`FrameLoop::run`] is the
//! blocking form with an injectable pacing function.

use std::path::Path;
use std::time::Duration;

use rand::Rng;

use crate::catalog::{load_catalog, BodySpec, CatalogError};
use crate::draw::draw_frame;
use crate::orbit::update_all;
use crate::presentation::{AssetLoader, Presentation};
use crate::registry::BodyRegistry;

/// Fixed delay between ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(60);

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal; teardown has run
    Stopped,
}

/// Drives update, depth-sort/draw and present once per tick
pub struct FrameLoop {
    registry: BodyRegistry,
    state: LoopState,
    ticks: u64,
}

impl FrameLoop {
    /// Start a running loop over a fully loaded registry
    pub fn new(registry: BodyRegistry) -> Self {
        Self {
            registry,
            state: LoopState::Running,
            ticks: 0,
        }
    }

    /// Load `specs` through the presentation and start running
    ///
    /// If any asset fails to load, whatever was acquired is torn down before
    /// the error is returned.
    pub fn start<P, R>(
        presenter: &mut P,
        specs: &[BodySpec],
        asset_root: &Path,
        rng: &mut R,
    ) -> Result<Self, CatalogError>
    where
        P: Presentation + AssetLoader + ?Sized,
        R: Rng,
    {
        let mut registry = BodyRegistry::with_capacity(specs.len());
        if let Err(e) = load_catalog(specs, asset_root, presenter, &mut registry, rng) {
            log::error!("{}", e);
            registry.clear();
            presenter.teardown();
            return Err(e);
        }
        Ok(Self::new(registry))
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Number of completed ticks
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    /// Run a single tick
    ///
    /// 1. Clear the frame buffer
    /// 2. Update every body in creation order
    /// 3. Depth-sort and draw
    /// 4. Present
    /// 5. Drain input; a quit request stops the loop
    pub fn tick<P: Presentation + ?Sized>(&mut self, presenter: &mut P) -> LoopState {
        if self.state == LoopState::Stopped {
            return self.state;
        }

        presenter.clear();
        let viewport = presenter.viewport();
        update_all(&mut self.registry, viewport);
        let drawn = draw_frame(&self.registry, presenter);
        presenter.present();
        self.ticks += 1;

        log::trace!(
            "Tick {}: {} sprites at {}x{}",
            self.ticks,
            drawn,
            viewport.width,
            viewport.height
        );

        if presenter.poll_quit_requested() {
            log::info!("Quit requested after {} ticks", self.ticks);
            self.stop(presenter);
        }

        self.state
    }

    /// Transition to Stopped, tearing down exactly once
    ///
    /// Bodies are dropped before the presentation releases the textures
    /// they reference. Calling this again is a no-op.
    pub fn stop<P: Presentation + ?Sized>(&mut self, presenter: &mut P) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        self.registry.clear();
        presenter.teardown();
        log::info!("Frame loop stopped");
    }

    /// Tick until stopped, calling `pace` with [`TICK_INTERVAL`] between ticks
    pub fn run<P, F>(&mut self, presenter: &mut P, mut pace: F)
    where
        P: Presentation + ?Sized,
        F: FnMut(Duration),
    {
        while self.tick(presenter) == LoopState::Running {
            pace(TICK_INTERVAL);
        }
    }
}
