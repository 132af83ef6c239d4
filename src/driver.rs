// Per-frame orchestration: spawn, clear, step and draw every circle, then
// resolve collisions against the moved positions. Also owns the browser
// requestAnimationFrame loop that keeps calling it.

use crate::config::{Config, Viewport};
use crate::input;
use crate::particle_set::ParticleSet;
use crate::spawner::Spawner;
use crate::surface::Surface;
use crate::{collision, Sandbox};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

pub struct Simulation<R: Rng> {
    pub config: Config,
    pub viewport: Viewport,
    pub particles: ParticleSet,
    pub spawner: Spawner,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    pub fn new(viewport: Viewport, config: Config, rng: R) -> Self {
        Simulation {
            config,
            viewport,
            particles: ParticleSet::new(),
            spawner: Spawner::new(),
            rng,
        }
    }

    pub fn spawn_circles(&mut self, count: u32) {
        self.spawner.arm(count);
    }

    /// Runs one frame at timestamp `now` (ms) and returns the number of new
    /// collisions. Every circle finishes moving before any pair is tested.
    pub fn tick<S: Surface + ?Sized>(&mut self, now: f64, surface: &S) -> Result<usize, JsValue> {
        self.spawner.spawn_due(
            now,
            self.viewport,
            &self.config,
            &mut self.rng,
            &mut self.particles,
        );

        surface.clear(self.viewport.width, self.viewport.height);
        for particle in self.particles.iter_mut() {
            particle.expire_flash(now);
            particle.step(self.viewport, &self.config);
            particle.draw(surface, &self.config)?;
        }

        Ok(collision::detect_collisions(
            self.particles.as_mut_slice(),
            now,
            &self.config,
        ))
    }

    pub fn click(&mut self, x: f64, y: f64) -> usize {
        input::handle_click(&mut self.particles, x, y)
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(f.as_ref().unchecked_ref::<js_sys::Function>())
}

/// Hooks the sandbox up to the page: clicks on `canvas` remove circles and
/// every display refresh runs one tick against `context`. Runs until the page
/// goes away; a failing frame is reported to the console and ends the loop.
pub fn run(
    sandbox: Sandbox,
    canvas: &HtmlCanvasElement,
    context: CanvasRenderingContext2d,
) -> Result<(), JsValue> {
    let sandbox = Rc::new(RefCell::new(sandbox));

    {
        let sandbox = sandbox.clone();
        let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
            sandbox
                .borrow_mut()
                .click(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>);
        canvas.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // The frame closure has to reschedule itself, so it lives in a shared
    // slot that it can reach from inside its own body
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let first_frame = frame.clone();

    *first_frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if let Err(err) = sandbox.borrow_mut().tick(now, &context) {
            log_error!(&err);
            return;
        }
        if let Some(callback) = frame.borrow().as_ref() {
            if let Err(err) = request_animation_frame(callback) {
                log_error!(&err);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let result = match first_frame.borrow().as_ref() {
        Some(callback) => request_animation_frame(callback).map(|_| ()),
        None => Err(JsValue::from_str("frame callback missing")),
    };
    result
}
