//! Block Breaker entry point
//!
//! Opens the window, runs fixed ticks on the event loop and presents each
//! frame through the wgpu pipeline.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use block_breaker::consts::{HEIGHT, WIDTH};
use block_breaker::platform::{Ticker, canvas_position, click_between, key_from_code};
use block_breaker::renderer::{Font, MeshCanvas, RenderState, render_frame};
use block_breaker::sim::TickHost;
use block_breaker::{Game, Input, Key, Settings};

/// The window as the tick driver sees it
struct WindowHost {
    window: Arc<Window>,
    pointer: Option<Vec2>,
    /// Pointer at the last left-button press
    pressed_at: Option<Vec2>,
}

impl TickHost for WindowHost {
    fn pointer_position(&self) -> Option<Vec2> {
        self.pointer
    }

    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }
}

/// Window-bound state, created on first resume
struct Gfx {
    host: WindowHost,
    render_state: RenderState,
}

struct App {
    settings: Settings,
    font: Font,
    game: Game,
    ticker: Ticker,
    last_wake: Instant,
    gfx: Option<Gfx>,
    /// Fatal setup error, reported once the event loop exits
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let font = Font::load_or_builtin(&settings.font_path);
        let game = Game::new(settings.resolve_seed());
        log::info!("Game initialized with seed: {}", game.seed());

        let ticker = Ticker::from_millis(settings.tick_interval_ms);
        Self {
            settings,
            font,
            game,
            ticker,
            last_wake: Instant::now(),
            gfx: None,
            error: None,
        }
    }

    /// Render the current frame
    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        let frame = self.game.snapshot();
        let mut canvas = MeshCanvas::new(&self.font);
        render_frame(&mut canvas, &frame);

        match gfx.render_state.render(canvas.vertices()) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

async fn init_gpu(window: Arc<Window>, vsync: bool) -> anyhow::Result<RenderState> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let surface = instance
        .create_surface(window.clone())
        .context("Failed to create surface")?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context("Failed to get adapter")?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let size = window.inner_size();
    RenderState::new(surface, &adapter, size.width, size.height, vsync)
        .await
        .context("Failed to create device")
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Block Breaker")
            .with_inner_size(LogicalSize::new(WIDTH as f64, HEIGHT as f64))
            .with_resizable(false);

        let setup = event_loop
            .create_window(attributes)
            .context("Failed to create window")
            .map(Arc::new)
            .and_then(|window| {
                let render_state =
                    pollster::block_on(init_gpu(window.clone(), self.settings.vsync))?;
                Ok((window, render_state))
            });

        match setup {
            Ok((window, render_state)) => {
                window.request_redraw();
                self.gfx = Some(Gfx {
                    host: WindowHost {
                        window,
                        pointer: None,
                        pressed_at: None,
                    },
                    render_state,
                });
                self.last_wake = Instant::now();
                log::info!("Block Breaker running!");
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let Some(gfx) = self.gfx.as_mut() {
                    let scale = gfx.host.window.scale_factor();
                    gfx.host.pointer = Some(canvas_position(position, scale));
                }
            }
            WindowEvent::CursorLeft { .. } => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.host.pointer = None;
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let Some(gfx) = self.gfx.as_mut() else {
                    return;
                };
                match state {
                    ElementState::Pressed => gfx.host.pressed_at = gfx.host.pointer,
                    ElementState::Released => {
                        let pressed = gfx.host.pressed_at.take();
                        if let Some(input) = click_between(pressed, gfx.host.pointer) {
                            self.game.post_input(input);
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match key_from_code(event.physical_key) {
                    Key::Other => {}
                    key => self.game.post_input(Input::KeyPress(key)),
                }
            }
            WindowEvent::RedrawRequested => self.render(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };

        let now = Instant::now();
        let steps = self.ticker.advance(now - self.last_wake);
        self.last_wake = now;

        for _ in 0..steps {
            let report = self.game.tick(&mut gfx.host);
            if let Some(transition) = report.transition {
                log::info!(
                    "{:?} at tick {}, now {}",
                    transition,
                    report.tick,
                    self.game.phase().as_str()
                );
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(now + self.ticker.until_next()));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Block Breaker starting...");

    let settings = Settings::load(&Settings::default_path());
    let mut app = App::new(settings);

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
