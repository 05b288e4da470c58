//! Native window shell
//!
//! Owns the window, the GPU state, and the population. Creates the window
//! first, then the GPU surface, then the balls, and from there steps one
//! frame each time the pacer says one is due until the window is closed or
//! Escape is pressed. Repaints between scheduled frames redraw the balls in
//! place, and nothing is scheduled while the window is occluded.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use super::pacer::FramePacer;
use crate::config::SimConfig;
use crate::error::{GpuError, RunError};
use crate::renderer::RenderState;
use crate::sim::{self, Board, Population, RngState};

/// Open a window and run the simulation until it is closed
pub fn run(config: SimConfig, rng_state: RngState) -> Result<(), RunError> {
    let mut app = App::new(config, rng_state)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn create_render_state(window: Arc<Window>, board: Board) -> Result<RenderState, GpuError> {
    let size = window.inner_size();

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::PRIMARY,
        ..Default::default()
    });

    let surface = instance.create_surface(window)?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    RenderState::new(surface, &adapter, size.width, size.height, board).await
}

/// winit application state
pub struct App {
    config: SimConfig,
    rng_state: RngState,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    population: Option<Population>,
    pacer: Option<FramePacer>,
    /// Window fully hidden; no frames are scheduled
    occluded: bool,
    error: Option<RunError>,
}

impl App {
    pub fn new(config: SimConfig, rng_state: RngState) -> Result<Self, RunError> {
        config.validate()?;
        Ok(Self {
            config,
            rng_state,
            window: None,
            render_state: None,
            population: None,
            pacer: None,
            occluded: false,
            error: None,
        })
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RunError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        log::info!(
            "Window created: {}x{} \"{}\"",
            self.config.width,
            self.config.height,
            self.config.title
        );

        let board = Board::new(self.config.width, self.config.height);
        let render_state = pollster::block_on(create_render_state(window.clone(), board))?;

        self.pacer = Some(FramePacer::new(self.config.fps, Instant::now()));
        log::info!("Target frame rate: {} fps", self.config.fps);

        let mut rng = self.rng_state.to_rng();
        let population = Population::random(&self.config, &mut rng);
        if let Some((index, followers)) = population.most_admired() {
            log::debug!("Most admired ball: #{} with {} followers", index, followers);
        }
        log::info!(
            "Population ready: {} balls, leader view {}",
            population.len(),
            population.leader_view().as_str()
        );

        self.window = Some(window);
        self.render_state = Some(render_state);
        self.population = Some(population);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RunError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    /// Step and present when the pacer says a frame is due; otherwise
    /// repaint the current positions (expose events, live resize).
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let due = self.pacer.as_ref().is_some_and(|p| p.is_due(Instant::now()));
        let (Some(render_state), Some(population)) =
            (self.render_state.as_mut(), self.population.as_mut())
        else {
            return;
        };

        let mut batch = render_state.begin_frame();
        if due {
            sim::draw_frame(population, &mut batch, self.config.background);
        } else {
            sim::present_frame(population, &mut batch, self.config.background);
        }

        match render_state.end_frame(&batch) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, RunError::OutOfMemory);
                return;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if !due {
            return;
        }
        if let Some(pacer) = self.pacer.as_mut() {
            if pacer.frame_presented(Instant::now()).is_some() {
                log::debug!("Frame {}: {:.1} fps", pacer.frames(), pacer.fps());
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                log::info!("Escape pressed");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(physical_size.width, physical_size.height);
                }
            }
            WindowEvent::Occluded(occluded) => {
                log::debug!("Window occluded: {}", occluded);
                self.occluded = occluded;
                if !occluded {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(pacer)) = (&self.window, &self.pacer) else {
            return;
        };
        if self.occluded {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }
        if pacer.is_due(Instant::now()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(pacer.deadline()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(pacer) = &self.pacer {
            log::info!(
                "Closing window after {} frames (last measured {:.1} fps)",
                pacer.frames(),
                pacer.fps()
            );
        }
        // Surface must go before the window it draws to
        self.render_state = None;
        self.window = None;
    }
}
