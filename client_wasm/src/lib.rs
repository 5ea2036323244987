//! WebGPU client for the goal viewer and the goal-scoring game
//!
//! Engine-free rendering using wgpu for WebGPU API.
//! Note: Canvas variant is only available when compiling for wasm32 target

#![cfg(target_arch = "wasm32")]

mod camera;
mod input;
mod mesh;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use goal_core::{CardLayout, Demo, GameConfig, GoalGame, GoalViewer, ViewerConfig};
use input::Drag;
use renderer::Renderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, WheelEvent};

/// Running demo plus everything needed to draw it
struct App {
    demo: Box<dyn Demo>,
    renderer: Renderer,
    drag: Drag,
}

impl App {
    fn frame(&mut self, now_ms: f64) {
        if let Some(summary) = self.demo.tick(now_ms) {
            alert(&summary.message());
        }

        let scene = self.demo.scene();
        let (view, eye, wireframe) = (self.demo.view(), self.demo.eye(), self.demo.wireframe());
        if let Err(e) = self.renderer.draw(&scene, view, eye, wireframe) {
            log::error!("Render failed: {}", e);
        }
    }

    fn key_down(&mut self, event: &KeyboardEvent) {
        let Some(command) = input::key_command(self.demo.keymap(), event) else {
            return;
        };
        if input::suppresses_default(command) {
            event.prevent_default();
        }
        self.demo.handle(command, js_sys::Date::now());
    }

    fn mouse_move(&mut self, event: &MouseEvent) {
        let height = self.renderer.size.1 as f32;
        if let Some((dx, dy)) = self.drag.moved(event) {
            if let Some(orbit) = self.demo.orbit_mut() {
                orbit.rotate(dx, dy, height);
            }
        }
    }

    fn wheel(&mut self, event: &WheelEvent) {
        if let Some(orbit) = self.demo.orbit_mut() {
            event.prevent_default();
            orbit.zoom(input::wheel_direction(event));
        }
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Run `f` against the app if it is started and not already borrowed
fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            if let Some(app) = slot.as_mut() {
                f(app);
            }
        }
    });
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Alert failed: {:?}", e);
        }
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Full-viewport canvas appended to the page body, sized once
fn create_canvas() -> Result<HtmlCanvasElement, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No document body"))?;

    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    let width = window.inner_width()?.as_f64().unwrap_or(800.0);
    let height = window.inner_height()?.as_f64().unwrap_or(600.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    canvas.set_attribute("style", "display: block")?;
    body.append_child(&canvas)?;
    Ok(canvas)
}

fn attach_listeners(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        with_app(|app| app.key_down(&event));
    });
    window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    let on_press = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        with_app(|app| app.drag.press(&event));
    });
    canvas.add_event_listener_with_callback("mousedown", on_press.as_ref().unchecked_ref())?;
    on_press.forget();

    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        with_app(|app| app.mouse_move(&event));
    });
    window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_release = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        with_app(|app| app.drag.release());
    });
    window.add_event_listener_with_callback("mouseup", on_release.as_ref().unchecked_ref())?;
    on_release.forget();

    let on_wheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
        with_app(|app| app.wheel(&event));
    });
    canvas.add_event_listener_with_callback("wheel", on_wheel.as_ref().unchecked_ref())?;
    on_wheel.forget();

    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Queue the next frame: on the next display refresh, or after 1/rate seconds
fn request_frame(callback: &FrameCallback, tick_rate: Option<f64>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let borrowed = callback.borrow();
    let closure = borrowed
        .as_ref()
        .ok_or_else(|| JsValue::from_str("Frame callback missing"))?;
    match tick_rate {
        Some(rate) if rate > 0.0 => {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                (1000.0 / rate) as i32,
            )?;
        }
        _ => {
            window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        }
    }
    Ok(())
}

fn start_loop(tick_rate: Option<f64>) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    *callback.borrow_mut() = Some(Closure::new(move || {
        with_app(|app| app.frame(js_sys::Date::now()));
        if let Err(e) = request_frame(&next, tick_rate) {
            log::error!("Failed to schedule frame: {:?}", e);
        }
    }));
    request_frame(&callback, tick_rate)
}

async fn start(demo: Box<dyn Demo>) -> Result<(), JsValue> {
    init_logging();

    let running = APP.with(|cell| cell.borrow().is_some());
    if running {
        return Err(JsValue::from_str("A demo is already running"));
    }

    let canvas = create_canvas()?;
    let scene = demo.scene();
    let renderer = Renderer::new(canvas.clone(), &scene)
        .await
        .map_err(|e| JsValue::from_str(&format!("Failed to initialise renderer: {}", e)))?;

    let tick_rate = demo.tick_rate();
    log::info!("{}: initialized ({} scene items)", demo.name(), scene.items.len());

    APP.with(|cell| {
        *cell.borrow_mut() = Some(App {
            demo,
            renderer,
            drag: Drag::default(),
        });
    });

    attach_listeners(&canvas)?;
    start_loop(tick_rate)
}

#[wasm_bindgen]
pub fn start_viewer() -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        start(Box::new(GoalViewer::new(ViewerConfig::new()))).await?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Start the game; a seed shuffles the card layout
#[wasm_bindgen]
pub fn start_game(shuffle_seed: Option<u32>) -> js_sys::Promise {
    let layout = match shuffle_seed {
        Some(seed) => CardLayout::Shuffled {
            seed: u64::from(seed),
        },
        None => CardLayout::Classic,
    };
    wasm_bindgen_futures::future_to_promise(async move {
        let config = GameConfig::new().with_card_layout(layout);
        start(Box::new(GoalGame::new(config))).await?;
        Ok(JsValue::UNDEFINED)
    })
}
