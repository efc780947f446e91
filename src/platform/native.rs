//! Desktop shell: winit window, wgpu surface, rodio audio

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::FrameDriver;
use crate::audio::AudioManager;
use crate::consts::*;
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::Key;

/// Map a physical key to a game key
pub fn map_key(key_code: KeyCode) -> Option<Key> {
    match key_code {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(Key::Digit1),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(Key::Digit2),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(Key::Digit3),
        KeyCode::ArrowUp => Some(Key::Up),
        KeyCode::ArrowDown => Some(Key::Down),
        KeyCode::ArrowLeft => Some(Key::Left),
        KeyCode::ArrowRight => Some(Key::Right),
        KeyCode::Space => Some(Key::Space),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::Escape => Some(Key::Escape),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(Key::Enter),
        _ => None,
    }
}

/// Seed from the settings, or from the wall clock
fn session_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

struct Gfx {
    window: Arc<Window>,
    render_state: RenderState,
}

impl Gfx {
    fn new(event_loop: &ActiveEventLoop) -> anyhow::Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let size = window.inner_size();
        log::info!("Window created: {}x{}", size.width, size.height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
        ))?;

        Ok(Self {
            window,
            render_state,
        })
    }
}

struct App {
    driver: FrameDriver,
    gfx: Option<Gfx>,
    started: Instant,
    last_frame: Option<Instant>,
    /// First fatal error; ends the event loop
    error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: &Settings) -> Self {
        let audio = AudioManager::load(settings);
        Self {
            driver: FrameDriver::new(settings, session_seed(settings), audio),
            gfx: None,
            started: Instant::now(),
            last_frame: None,
            error: None,
        }
    }

    fn redraw(&mut self) {
        let frame_start = Instant::now();
        let dt = match self.last_frame {
            Some(last) => (frame_start - last).as_secs_f32(),
            None => SIM_DT,
        };
        self.last_frame = Some(frame_start);

        let now = (frame_start - self.started).as_secs_f64();
        self.driver.advance(dt, now);

        let Some(gfx) = self.gfx.as_mut() else {
            return;
        };
        let vertices = self.driver.frame();
        match gfx.render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gfx.render_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
            }
            Err(e) => {
                log::warn!("Render error: {:?}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gfx.is_some() {
            return;
        }
        match Gfx::new(event_loop) {
            Ok(gfx) => self.gfx = Some(gfx),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gfx) = &self.gfx {
            gfx.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting.");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.render_state
                        .resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => self.driver.key_down(key, event.repeat),
                            ElementState::Released => self.driver.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }
    }
}

/// Open the window and run until it is closed
pub fn run(settings: Settings) -> anyhow::Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&settings);
    event_loop.run_app(&mut app).context("event loop error")?;

    match app.error.take() {
        Some(e) => Err(e),
        None => {
            log::info!("Goodbye");
            Ok(())
        }
    }
}
