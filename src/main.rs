//! Tile Blend viewer window
//!
//! Renders the tiled image effect full-window and redraws only when a
//! slider, the variant, the source image, the window size or the config
//! file changes.

mod gpu;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use gpu::GpuState;
use tileblend::{Response, Viewer, command_for_key};
use tileblend_config::{Config, ConfigEvent, ConfigWatcher};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::ModifiersState,
    window::{Window, WindowId},
};

/// How often the config watcher channel is polled while idle
const WATCH_POLL_INTERVAL: Duration = Duration::from_millis(250);

struct App {
    config: Config,
    config_dir: PathBuf,
    viewer: Viewer,
    watcher: Option<ConfigWatcher>,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    modifiers: ModifiersState,
}

impl App {
    fn new() -> Result<Self> {
        let config_dir = Config::config_dir()?;
        let config = Config::load().unwrap_or_else(|e| {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        });

        let watcher = ConfigWatcher::new()
            .inspect_err(|e| log::warn!("Config hot-reload disabled: {}", e))
            .ok();

        let viewer = Viewer::from_config(&config, &config_dir);

        Ok(Self {
            config,
            config_dir,
            viewer,
            watcher,
            window: None,
            gpu: None,
            modifiers: ModifiersState::default(),
        })
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.viewer.title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(event_loop.create_window(attrs)?);
        let gpu = GpuState::new(window.clone())?;
        log::info!("Window created");

        self.viewer.request_redraw();
        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn respond(&mut self, response: Response, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else { return };
        match response {
            Response::Nothing => {}
            Response::Retitle => window.set_title(&self.viewer.title()),
            Response::Redraw => {
                window.set_title(&self.viewer.title());
                window.request_redraw();
            }
            Response::Quit => event_loop.exit(),
        }
    }

    fn poll_config(&mut self, event_loop: &ActiveEventLoop) {
        let events = self.watcher.as_ref().map(ConfigWatcher::drain_events).unwrap_or_default();

        for event in events {
            match event {
                ConfigEvent::Reloaded(config) => {
                    log::info!("Applying reloaded configuration");
                    let response = self.viewer.reload(&config, &self.config_dir);
                    self.config = config;
                    self.respond(response, event_loop);
                }
                ConfigEvent::ReloadError(e) => {
                    log::warn!("Keeping previous configuration: {}", e);
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("Failed to start viewer: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
                self.viewer.request_redraw();
                self.respond(Response::Redraw, event_loop);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(command) = command_for_key(&event.logical_key, self.modifiers.shift_key()) {
                    log::debug!("Command: {:?}", command);
                    let response = self.viewer.handle(command);
                    self.respond(response, event_loop);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(gpu) = &mut self.gpu else { return };
                let start = Instant::now();
                if let Err(e) = gpu.render(&mut self.viewer) {
                    log::error!("Render failed: {:#}", e);
                }
                log::trace!("Frame took {:?}", start.elapsed());

                // Surface was lost mid-frame; try again
                if self.viewer.needs_redraw()
                    && let Some(window) = &self.window
                {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_config(event_loop);

        if self.watcher.is_some() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + WATCH_POLL_INTERVAL));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn,tileblend=info")).init();
    log::info!("Tile Blend starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut App::new()?)?;
    Ok(())
}
