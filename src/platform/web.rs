//! Browser shell: canvas, WebGPU surface, keyboard listeners and the
//! requestAnimationFrame loop

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::{FrameDriver, key_from_code};
use crate::audio::AudioManager;
use crate::consts::*;
use crate::renderer::RenderState;
use crate::settings::Settings;
use crate::sim::Key;

/// Game instance holding all state
struct Game {
    driver: FrameDriver,
    render_state: RenderState,
    last_time: f64,
    started: f64,
}

impl Game {
    fn update(&mut self, time: f64) {
        let dt = if self.last_time > 0.0 {
            ((time - self.last_time) / 1000.0) as f32
        } else {
            SIM_DT
        };
        self.last_time = time;
        self.driver.advance(dt, (time - self.started) / 1000.0);
    }

    fn render(&mut self) {
        let vertices = self.driver.frame();
        match self.render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.render_state.reconfigure();
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

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub async fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Hoop Shot starting...");
    if let Err(e) = start().await {
        log::error!("Startup failed: {:#}", e);
    }
}

async fn start() -> anyhow::Result<()> {
    let window = web_sys::window().context("no window")?;
    let document = window.document().context("no document")?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .context("no canvas")?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#canvas is not a canvas"))?;
    let (width, height) = (CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32);
    canvas.set_width(width);
    canvas.set_height(height);

    let settings = Settings::default();
    let seed = js_sys::Date::now() as u64;
    let audio = AudioManager::load(&settings);
    let driver = FrameDriver::new(&settings, seed, audio);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU,
        ..Default::default()
    });
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .context("failed to create surface")?;
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .context("no suitable GPU adapter")?;
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let render_state = RenderState::new(surface, &adapter, width, height).await?;

    // rAF timestamps share the performance clock, not Date
    let started = window.performance().map(|p| p.now()).unwrap_or(0.0);
    let game = Rc::new(RefCell::new(Game {
        driver,
        render_state,
        last_time: 0.0,
        started,
    }));

    setup_input_handlers(&window, game.clone())?;
    request_animation_frame(game);

    log::info!("Hoop Shot running!");
    Ok(())
}

/// Keys whose browser default (scrolling) must be suppressed
fn swallows_default(key: Key) -> bool {
    matches!(key, Key::Up | Key::Down | Key::Left | Key::Right | Key::Space)
}

fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> anyhow::Result<()> {
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let Some(key) = key_from_code(&event.code()) else {
                return;
            };
            if swallows_default(key) {
                event.prevent_default();
            }
            game.borrow_mut().driver.key_down(key, event.repeat());
        });
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if let Some(key) = key_from_code(&event.code()) {
                game.borrow_mut().driver.key_up(key);
            }
        });
        window
            .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
    {
        let mut g = game.borrow_mut();
        g.update(time);
        g.render();
    }

    request_animation_frame(game);
}
