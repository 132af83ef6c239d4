// Tunable constants for the sandbox. Everything here is fixed at build time,
// tests build their own Config to shorten delays.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    pub circle_count: u32,
    pub spawn_interval_ms: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    // Fraction of vertical speed kept after hitting the floor
    pub floor_damping: f64,
    // Below this vertical speed a floor bounce becomes a permanent rest
    pub rest_speed: f64,
    pub flash_ms: f64,
    pub flash_color: Color,
    pub font: &'static str,
    pub background: &'static str,
}

impl Config {
    pub const CIRCLE_COUNT: u32 = 10;
    pub const SPAWN_INTERVAL_MS: f64 = 500.0;
    pub const FLASH_MS: f64 = 200.0;
    pub const FLASH_COLOR: Color = Color::from_u32(0x0000ffff);
}

impl Default for Config {
    fn default() -> Self {
        Config {
            circle_count: Config::CIRCLE_COUNT,
            spawn_interval_ms: Config::SPAWN_INTERVAL_MS,
            min_radius: 20.0,
            max_radius: 50.0,
            min_speed: 1.0,
            max_speed: 5.0,
            floor_damping: 0.8,
            rest_speed: 0.5,
            flash_ms: Config::FLASH_MS,
            flash_color: Config::FLASH_COLOR,
            font: "20px Arial",
            background: "#ff8",
        }
    }
}

// Drawable area in CSS pixels, read once at startup
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }
}
