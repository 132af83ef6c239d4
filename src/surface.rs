// Drawing target for the sandbox. The browser implementation forwards to a
// 2d canvas context, tests use a recorder that keeps every call.

use crate::color::Color;
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&self, width: f64, height: f64);
    fn stroke_circle(&self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), JsValue>;
    fn label(&self, text: &str, center: Vector2<f64>, font: &str) -> Result<(), JsValue>;
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_circle(&self, center: Vector2<f64>, radius: f64, color: Color) -> Result<(), JsValue> {
        self.begin_path();
        self.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)?;
        self.stroke();
        self.close_path();
        Ok(())
    }

    fn label(&self, text: &str, center: Vector2<f64>, font: &str) -> Result<(), JsValue> {
        self.set_text_align("center");
        self.set_text_baseline("middle");
        self.set_font(font);
        self.fill_text(text, center[0], center[1])
    }
}
