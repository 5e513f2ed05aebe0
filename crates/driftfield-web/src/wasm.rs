#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use driftfield_core::{FrameLoop, ParticleField, PointerInput, Viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::canvas::CanvasSurface;
use crate::error::WebError;
use crate::events::WindowEvent;
use crate::listeners::ListenerSet;
use crate::options::parse_options;

struct Inner {
    field: ParticleField,
    frame_loop: FrameLoop,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
    window: Window,
}

type Shared = Rc<RefCell<Option<Inner>>>;

/// Particle backdrop bound to a `<canvas>`.
///
/// The canvas is sized to the window and tracks window resizes. The page
/// drives frames:
///
/// ```js
/// const field = new DriftFieldWeb(canvas);
/// const tick = (t) => { field.frame(t); requestAnimationFrame(tick); };
/// requestAnimationFrame(tick);
/// ```
#[wasm_bindgen]
pub struct DriftFieldWeb {
    inner: Shared,
    listeners: Option<ListenerSet>,
}

#[wasm_bindgen]
impl DriftFieldWeb {
    /// Bind to `canvas`, register window listeners, and start the loop.
    ///
    /// `options` is an optional JSON object of parameter overrides. Fails if
    /// the options are invalid or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        options: Option<String>,
    ) -> Result<DriftFieldWeb, JsValue> {
        let params = parse_options(options.as_deref())?;
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let viewport = fit_canvas(&window, &canvas);
        let surface = CanvasSurface::from_canvas(&canvas)?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let field = ParticleField::seeded(viewport, params, seed).map_err(WebError::from)?;
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();

        let mut this = Self {
            inner: Rc::new(RefCell::new(Some(Inner {
                field,
                frame_loop,
                surface,
                canvas,
                window,
            }))),
            listeners: None,
        };
        this.attach()?;
        Ok(this)
    }

    /// Register the window listeners. No-op if already attached or destroyed.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_some() {
            return Ok(());
        }
        let window = self
            .inner
            .borrow()
            .as_ref()
            .map(|inner| inner.window.clone());
        let Some(window) = window else {
            return Ok(());
        };

        let mut listeners = ListenerSet::new();
        for event in WindowEvent::ALL {
            let shared = Rc::clone(&self.inner);
            let callback = Closure::<dyn FnMut(Event)>::new(move |dom_event: Event| {
                on_window_event(&shared, event, &dom_event);
            });
            listeners.add(&window, event, callback)?;
        }
        driftfield_core::debug!(count = listeners.len(), "window listeners attached");
        self.listeners = Some(listeners);
        Ok(())
    }

    /// Step and draw one frame. Call from `requestAnimationFrame`.
    ///
    /// Returns `false` when the loop is stopped or the field is gone.
    pub fn frame(&mut self, time_ms: f64) -> bool {
        with_inner(&self.inner, |inner| {
            inner
                .frame_loop
                .tick(&mut inner.field, &mut inner.surface, time_ms)
                .is_some()
        })
        .unwrap_or(false)
    }

    /// Resume ticking. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        with_inner(&self.inner, |inner| inner.frame_loop.start()).unwrap_or(false)
    }

    /// Stop ticking without touching the particles. Returns `false` if
    /// already stopped.
    pub fn stop(&mut self) -> bool {
        with_inner(&self.inner, |inner| inner.frame_loop.stop()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> bool {
        with_inner(&self.inner, |inner| inner.field.toggle_pause()).unwrap_or(false)
    }

    #[wasm_bindgen(js_name = changeColorMode)]
    pub fn change_color_mode(&mut self) -> u8 {
        with_inner(&self.inner, |inner| inner.field.change_color_mode()).unwrap_or(0)
    }

    /// Glyph for the active palette, for a toggle button.
    #[wasm_bindgen(js_name = colorModeLabel)]
    pub fn color_mode_label(&self) -> String {
        self.inner
            .borrow()
            .as_ref()
            .map(|inner| inner.field.color_mode().label())
            .unwrap_or_default()
            .to_string()
    }

    /// Glyph for the pause toggle: play while paused, pause otherwise.
    #[wasm_bindgen(js_name = pauseLabel)]
    pub fn pause_label(&self) -> String {
        let paused = self
            .inner
            .borrow()
            .as_ref()
            .is_some_and(|inner| inner.field.is_paused());
        let label = if paused { "▶️" } else { "⏸️" };
        label.to_string()
    }

    pub fn reset(&mut self) {
        with_inner(&self.inner, |inner| inner.field.reset());
    }

    /// Apply a JSON-encoded pointer event, e.g. `{"kind":"move","x":1,"y":2}`.
    pub fn input(&mut self, json: &str) -> Result<(), JsValue> {
        let input = PointerInput::from_json_str(json).map_err(WebError::from)?;
        with_inner(&self.inner, |inner| inner.field.handle_input(input));
        Ok(())
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> u32 {
        self.inner
            .borrow()
            .as_ref()
            .map_or(0, |inner| inner.field.particles().len() as u32)
    }

    /// Explicit teardown for JS callers. Stops the loop, removes every window
    /// listener, and drops the canvas and field.
    pub fn destroy(&mut self) {
        if let Some(mut listeners) = self.listeners.take() {
            listeners.release();
        }
        let taken = match self.inner.try_borrow_mut() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        if let Some(mut inner) = taken {
            inner.frame_loop.stop();
            inner.field.destroy();
        }
    }
}

/// Run `f` on the live state. `None` once destroyed, or when the state is
/// already borrowed by a re-entrant callback.
fn with_inner<T>(shared: &Shared, f: impl FnOnce(&mut Inner) -> T) -> Option<T> {
    let Ok(mut slot) = shared.try_borrow_mut() else {
        driftfield_core::debug!("field busy; call skipped");
        return None;
    };
    slot.as_mut().map(f)
}

fn on_window_event(shared: &Shared, event: WindowEvent, dom_event: &Event) {
    if event == WindowEvent::Resize {
        with_inner(shared, |inner| {
            let viewport = fit_canvas(&inner.window, &inner.canvas);
            inner.field.resize(viewport.width(), viewport.height());
        });
        return;
    }
    if event == WindowEvent::TouchMove {
        dom_event.prevent_default();
    }
    let position = if event.needs_position() {
        client_position(dom_event)
    } else {
        None
    };
    if let Some(input) = event.pointer_input(position) {
        with_inner(shared, |inner| inner.field.handle_input(input));
    }
}

/// Client position of a mouse event or of the first touch.
fn client_position(event: &Event) -> Option<(f64, f64)> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())));
    }
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Size the canvas backing store to the window and return the viewport.
fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) -> Viewport {
    let extent = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0)
    };
    let width = extent(window.inner_width());
    let height = extent(window.inner_height());
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Viewport::new(width, height)
}
