use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, HtmlCanvasElement, MouseEvent, Window};

use crate::domain::{FieldConfig, FieldError, Viewport};
use crate::host::DrawSurface;
use crate::simulation::{FrameDriver, FrameStats, ParticleField};

use super::animation_frame::AnimationFrameScheduler;
use super::canvas::CanvasSurface;

fn to_js(err: FieldError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn window_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// Background particle field bound to a `<canvas>`
///
/// ```js
/// const field = new ParticleField(canvas, JSON.stringify({ quality: "premium" }));
/// field.start();
/// // on unmount
/// field.stop();
/// ```
#[wasm_bindgen(js_name = ParticleField)]
pub struct ParticleFieldHandle {
    window: Window,
    canvas: HtmlCanvasElement,
    driver: FrameDriver<AnimationFrameScheduler>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen(js_class = ParticleField)]
impl ParticleFieldHandle {
    /// Build a stopped field. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<ParticleFieldHandle, JsValue> {
        let config = if config_json.trim().is_empty() {
            FieldConfig::default()
        } else {
            FieldConfig::from_json(config_json).map_err(to_js)?
        };
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let field = ParticleField::with_seed(config).map_err(to_js)?;
        let driver = FrameDriver::new(field, AnimationFrameScheduler::new(window.clone()));

        Ok(Self {
            window,
            canvas,
            driver,
            listeners: Vec::new(),
        })
    }

    /// Size the canvas to the window, spawn the pool and begin animating.
    /// Returns false (and does nothing) when the canvas has no 2D context.
    pub fn start(&mut self) -> bool {
        if self.driver.is_running() {
            return true;
        }

        let surface = CanvasSurface::from_canvas(self.canvas.clone())
            .map(|s| Box::new(s) as Box<dyn DrawSurface>);
        if !self.driver.start(window_viewport(&self.window), surface) {
            return false;
        }

        let field = self.driver.field();
        let profile = *field.borrow().profile();

        let (f, win) = (Rc::clone(&field), self.window.clone());
        self.listen("resize", false, move |_| {
            let vp = window_viewport(&win);
            f.borrow_mut().resize(vp.width, vp.height);
        });

        if profile.pointer_attraction {
            let f = Rc::clone(&field);
            self.listen("mousemove", true, move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    f.borrow_mut()
                        .pointer_moved(mouse.client_x() as f64, mouse.client_y() as f64);
                }
            });
        }

        if profile.sparkles {
            let (f, win) = (Rc::clone(&field), self.window.clone());
            self.listen("scroll", true, move |_| {
                if let Ok(y) = win.scroll_y() {
                    f.borrow_mut().scrolled(y);
                }
            });
        }

        true
    }

    /// Cancel the frame loop and detach every listener.
    pub fn stop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = self.window.remove_event_listener_with_callback(
                listener.event,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
        self.driver.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.driver.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.driver.field().borrow().particle_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> u64 {
        self.driver.field().borrow().frames()
    }

    pub fn enable_stats(&mut self, enabled: bool) {
        self.driver.field().borrow_mut().enable_stats(enabled);
    }

    pub fn stats(&self) -> FrameStats {
        self.driver.field().borrow().stats()
    }

    #[wasm_bindgen(getter)]
    pub fn stats_json(&self) -> String {
        self.driver.field().borrow().stats().to_json()
    }
}

impl ParticleFieldHandle {
    fn listen(&mut self, event: &'static str, passive: bool, handler: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let result = if passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            self.window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            self.window
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        };

        match result {
            Ok(()) => self.listeners.push(Listener { event, closure }),
            Err(_) => field_warn!("could not register '{}' listener", event),
        }
    }
}

impl Drop for ParticleFieldHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
