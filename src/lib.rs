#[macro_use]
mod utils;
pub mod collision;
pub mod color;
pub mod config;
pub mod driver;
pub mod input;
pub mod particle;
pub mod particle_set;
pub mod spawner;
pub mod surface;

use config::{Config, Viewport};
use driver::Simulation;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

/// Finds the canvas with id `canvas_id`, stretches it over the window, drops
/// the default batch of circles in and starts animating. Circles can be
/// clicked away.
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id `{}`", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("`{}` is not a canvas", canvas_id)))?;

    // Sized once, later resizes are ignored
    let width = window_extent(window.inner_width()?.as_f64(), "innerWidth")
        .map_err(|err| JsValue::from_str(&err))?;
    let height = window_extent(window.inner_height()?.as_f64(), "innerHeight")
        .map_err(|err| JsValue::from_str(&err))?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let config = Config::default();
    canvas.style().set_property("background", config.background)?;

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    log!("starting sandbox on a {}x{} canvas", width, height);
    let mut sandbox = Sandbox::new(width, height);
    sandbox.spawn_circles(config.circle_count);
    driver::run(sandbox, &canvas, context)
}

// Window dimensions come back as untyped JS values
fn window_extent(value: Option<f64>, name: &str) -> Result<f64, String> {
    match value {
        Some(extent) if extent.is_finite() && extent >= 0.0 => Ok(extent),
        Some(extent) => Err(format!("window.{} is {}", name, extent)),
        None => Err(format!("window.{} is not a number", name)),
    }
}

/// Sandbox state exposed to JavaScript, for pages that want to run their own
/// animation loop instead of calling `start`.
#[wasm_bindgen]
pub struct Sandbox {
    simulation: Simulation<StdRng>,
}

#[wasm_bindgen]
impl Sandbox {
    pub fn new(width: f64, height: f64) -> Sandbox {
        Sandbox {
            simulation: Simulation::new(
                Viewport::new(width, height),
                Config::default(),
                StdRng::from_entropy(),
            ),
        }
    }

    pub fn with_seed(width: f64, height: f64, seed: u64) -> Sandbox {
        Sandbox {
            simulation: Simulation::new(
                Viewport::new(width, height),
                Config::default(),
                StdRng::seed_from_u64(seed),
            ),
        }
    }

    // Queues `count` circles, released one every half second
    pub fn spawn_circles(&mut self, count: u32) {
        self.simulation.spawn_circles(count);
    }

    pub fn tick(&mut self, now: f64, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        #[cfg(debug_assertions)]
        let _timer = Timer::new("Sandbox::tick");
        let collisions = self.simulation.tick(now, ctx)?;
        if collisions > 0 {
            log!("{} new collision(s) at {:.0}ms", collisions, now);
        }
        Ok(())
    }

    pub fn click(&mut self, x: f64, y: f64) -> usize {
        let removed = self.simulation.click(x, y);
        if removed > 0 {
            log!(
                "click at ({}, {}) removed {} circle(s), {} left",
                x,
                y,
                removed,
                self.simulation.particles.len()
            );
        }
        removed
    }

    pub fn particle_count(&self) -> usize {
        self.simulation.particles.len()
    }

    pub fn pending_spawns(&self) -> u32 {
        self.simulation.spawner.pending()
    }
}
