//! Orrery - animated 2D solar system
//!
//! Opens a fullscreen window, loops the soundtrack and animates the planets
//! until Escape is pressed or the window is closed.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use orrery::config::AppConfig;
use orrery::input::InputMapper;
use orrery::startup::{startup_exit_code, StartupError, EXIT_FAILURE};
use orrery::systems::DesktopPresentation;
use orrery_core::{FrameLoop, LoopState, Presentation, CATALOG, MUSIC_FILE, TICK_INTERVAL};

/// Main application state
struct App {
    config: AppConfig,
    presentation: Option<DesktopPresentation>,
    frame_loop: Option<FrameLoop>,
    next_tick: Instant,
    exit_code: i32,
}

impl App {
    fn new(config: AppConfig) -> Self {
        Self {
            config,
            presentation: None,
            frame_loop: None,
            next_tick: Instant::now(),
            exit_code: 0,
        }
    }

    /// Bring up the presentation, start the music and load every body
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<(DesktopPresentation, FrameLoop), StartupError> {
        let mut presentation = DesktopPresentation::init_presentation(event_loop, &self.config)?;
        let asset_root = &self.config.assets.root;

        if presentation.has_audio() {
            let music = presentation
                .load_audio(&asset_root.join(MUSIC_FILE))
                .map_err(StartupError::from)
                .and_then(|clip| {
                    presentation
                        .play_looping(&clip, self.config.audio.volume)
                        .map_err(StartupError::from)
                });
            if let Err(e) = music {
                presentation.teardown();
                return Err(e);
            }
        }

        let mut rng = StdRng::from_entropy();
        let frame_loop = FrameLoop::start(&mut presentation, &CATALOG, asset_root, &mut rng)?;
        Ok((presentation, frame_loop))
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: StartupError) {
        log::error!("Startup failed: {}", err);
        self.exit_code = EXIT_FAILURE;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presentation.is_some() || self.exit_code != 0 {
            return;
        }

        let started = self.start(event_loop);
        self.exit_code = startup_exit_code(&started);
        match started {
            Ok((presentation, frame_loop)) => {
                log::info!("Started with {} bodies", frame_loop.registry().len());
                self.next_tick = Instant::now();
                presentation.request_redraw();
                self.presentation = Some(presentation);
                self.frame_loop = Some(frame_loop);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(presentation) = &mut self.presentation else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                presentation.input_mut().push(InputMapper::map_close_requested());
            }

            WindowEvent::Resized(physical_size) => {
                presentation.resize(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        presentation.input_mut().push(action);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(frame_loop) = &mut self.frame_loop else {
                    return;
                };
                let now = Instant::now();
                if now < self.next_tick {
                    return;
                }
                self.next_tick = now + TICK_INTERVAL;

                if frame_loop.tick(presentation) == LoopState::Stopped {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(presentation), Some(frame_loop)) = (&self.presentation, &self.frame_loop) else {
            return;
        };
        if !frame_loop.is_running() {
            return;
        }

        if Instant::now() >= self.next_tick {
            presentation.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        match (&mut self.frame_loop, &mut self.presentation) {
            (Some(frame_loop), Some(presentation)) => frame_loop.stop(presentation),
            (None, Some(presentation)) => presentation.teardown(),
            _ => {}
        }
        self.frame_loop = None;
        self.presentation = None;
    }
}

fn main() {
    let config = AppConfig::load();
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting {}", config.window.title);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("{}", orrery_core::PresentationInitError::EventLoop(e.to_string()));
            std::process::exit(EXIT_FAILURE);
        }
    };
    event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + TICK_INTERVAL));

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(EXIT_FAILURE);
    }

    if app.exit_code != 0 {
        std::process::exit(app.exit_code);
    }
}
