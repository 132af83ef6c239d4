// Circle particle that keeps track of its own position, velocity, color and
// label, and knows how to move, draw and bounce off other circles

use crate::color::Color;
use crate::config::{Config, Viewport};
use crate::surface::Surface;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    radius: f64,
    pub color: Color,
    pub original_color: Color,
    pub label: String,
    pub in_collision: bool,
    pub resting_on_floor: bool,
    // Tick timestamp (ms) at which the collision flash ends
    pub flash_until: Option<f64>,
}

impl Particle {
    pub fn new(
        pos: Vector2<f64>,
        vel: Vector2<f64>,
        radius: f64,
        color: Color,
        label: String,
    ) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
            original_color: color,
            label,
            in_collision: false,
            resting_on_floor: false,
            flash_until: None,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Advances the particle by one frame.
    ///
    /// Side walls reflect `dx` without clamping, so the circle can poke past
    /// the edge on the frame it turns around. The ceiling reflects `dy`. The
    /// floor clamps the circle onto it and keeps `floor_damping` of the
    /// vertical speed; once that drops below `rest_speed` the particle rests
    /// on the floor for good and only moves sideways.
    pub fn step(&mut self, viewport: Viewport, config: &Config) {
        self.pos[0] += self.vel[0];
        if self.pos[0] + self.radius > viewport.width || self.pos[0] - self.radius < 0.0 {
            self.vel[0] = -self.vel[0];
        }

        if self.resting_on_floor {
            return;
        }

        self.pos[1] += self.vel[1];
        if self.pos[1] - self.radius < 0.0 {
            self.vel[1] = -self.vel[1];
        }
        if self.pos[1] + self.radius >= viewport.height {
            self.vel[1] = -self.vel[1] * config.floor_damping;
            self.pos[1] = viewport.height - self.radius;
            if self.vel[1].abs() < config.rest_speed {
                self.vel[1] = 0.0;
                self.resting_on_floor = true;
            }
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &S, config: &Config) -> Result<(), JsValue> {
        surface.stroke_circle(self.pos, self.radius, self.color)?;
        surface.label(&self.label, self.pos, config.font)
    }

    /// Flashes both circles and sends them back the way they came if they
    /// overlap. Only `self`'s flag guards the trigger, so a pair where just
    /// `other` is still flashing collides again and restarts its flash.
    ///
    /// Returns true when a new collision was triggered.
    pub fn collide_with(&mut self, other: &mut Particle, now: f64, config: &Config) -> bool {
        let distance = vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos));
        if distance >= self.radius + other.radius || self.in_collision {
            return false;
        }

        for p in [&mut *self, &mut *other].iter_mut() {
            p.in_collision = true;
            p.color = config.flash_color;
            p.vel = vecmath::vec2_scale(p.vel, -1.0);
            p.flash_until = Some(now + config.flash_ms);
        }
        true
    }

    // Ends the collision flash once its deadline has passed
    pub fn expire_flash(&mut self, now: f64) {
        match self.flash_until {
            Some(deadline) if now >= deadline => {
                self.color = self.original_color;
                self.in_collision = false;
                self.flash_until = None;
            }
            _ => {}
        }
    }

    // Used for checking if the user's click is inside this circle
    pub fn is_hit(&self, x: f64, y: f64) -> bool {
        vecmath::vec2_len(vecmath::vec2_sub([x, y], self.pos)) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawCall, RecordingSurface};

    const RED: Color = Color::from_u32(0xff0000ff);
    const GREEN: Color = Color::from_u32(0x00ff00ff);

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn circle(x: f64, y: f64, radius: f64) -> Particle {
        Particle::new([x, y], [0.0, 0.0], radius, RED, "C1".to_owned())
    }

    #[test]
    fn step_moves_by_velocity() {
        let mut p = Particle::new([100.0, 100.0], [3.0, -2.0], 20.0, RED, "C1".to_owned());
        p.step(viewport(), &Config::default());
        assert_eq!(p.pos, [103.0, 98.0]);
        assert_eq!(p.vel, [3.0, -2.0]);
    }

    #[test]
    fn side_walls_reflect_without_clamping() {
        let config = Config::default();
        let mut p = Particle::new([778.0, 300.0], [4.0, 0.0], 20.0, RED, "C1".to_owned());
        p.step(viewport(), &config);
        assert_eq!(p.pos[0], 782.0);
        assert_eq!(p.vel[0], -4.0);

        let mut p = Particle::new([22.0, 300.0], [-4.0, 0.0], 20.0, RED, "C1".to_owned());
        p.step(viewport(), &config);
        assert_eq!(p.pos[0], 18.0);
        assert_eq!(p.vel[0], 4.0);
    }

    #[test]
    fn ceiling_reflects_dy() {
        let mut p = Particle::new([100.0, 21.0], [0.0, -3.0], 20.0, RED, "C1".to_owned());
        p.step(viewport(), &Config::default());
        assert_eq!(p.pos[1], 18.0);
        assert_eq!(p.vel[1], 3.0);
    }

    #[test]
    fn floor_bounce_is_damped_and_clamped() {
        let mut p = Particle::new([100.0, 578.0], [0.0, 4.0], 20.0, RED, "C1".to_owned());
        p.step(viewport(), &Config::default());
        assert_eq!(p.pos[1], 580.0);
        assert!((p.vel[1] + 3.2).abs() < 1e-9);
        assert!(!p.resting_on_floor);
    }

    #[test]
    fn slow_floor_bounce_comes_to_rest() {
        let mut p = Particle::new([100.0, 579.6], [0.0, 0.5], 20.0, RED, "C1".to_owned());
        p.step(viewport(), &Config::default());
        assert!(p.resting_on_floor);
        assert_eq!(p.vel[1], 0.0);
        assert_eq!(p.pos[1], 580.0);
    }

    #[test]
    fn resting_particle_keeps_its_height() {
        let config = Config::default();
        let mut p = Particle::new([100.0, 579.6], [2.0, 0.5], 20.0, RED, "C1".to_owned());
        p.step(viewport(), &config);
        assert!(p.resting_on_floor);

        // Height stays pinned whatever dy holds
        p.vel[1] = -5.0;
        for _ in 0..500 {
            p.step(viewport(), &config);
            assert_eq!(p.pos[1], 580.0);
        }
        p.vel[1] = 0.0;
        p.step(viewport(), &config);
        assert_eq!(p.vel[1], 0.0);
    }

    #[test]
    fn spawned_below_floor_rises_into_view() {
        let config = Config::default();
        let mut p = Particle::new([100.0, 630.0], [0.0, -3.0], 30.0, RED, "C1".to_owned());
        for _ in 0..20 {
            p.step(viewport(), &config);
        }
        assert!(p.vel[1] < 0.0);
        assert!(p.pos[1] + p.radius() < 600.0);
        assert!(!p.resting_on_floor);
    }

    #[test]
    fn long_runs_stay_finite_with_constant_radius() {
        let config = Config::default();
        let mut p = Particle::new([400.0, 620.0], [4.7, -3.9], 25.0, RED, "C1".to_owned());
        for _ in 0..20_000 {
            p.step(viewport(), &config);
            assert!(p.pos[0].is_finite() && p.pos[1].is_finite());
            assert_eq!(p.radius(), 25.0);
        }
        assert!(p.resting_on_floor);
    }

    #[test]
    fn overlapping_circles_collide() {
        let config = Config::default();
        let mut a = Particle::new([100.0, 100.0], [2.0, -1.0], 20.0, RED, "C1".to_owned());
        let mut b = Particle::new([130.0, 100.0], [-3.0, 4.0], 20.0, GREEN, "C2".to_owned());

        assert!(a.collide_with(&mut b, 1_000.0, &config));

        assert!(a.in_collision && b.in_collision);
        assert_eq!(a.color, Config::FLASH_COLOR);
        assert_eq!(b.color, Config::FLASH_COLOR);
        assert_eq!(a.vel, [-2.0, 1.0]);
        assert_eq!(b.vel, [3.0, -4.0]);
        assert_eq!(a.flash_until, Some(1_200.0));
        assert_eq!(b.flash_until, Some(1_200.0));
    }

    #[test]
    fn distant_circles_do_not_collide() {
        let config = Config::default();
        let mut a = circle(100.0, 100.0, 20.0);
        let mut c = circle(200.0, 100.0, 20.0);
        assert!(!a.collide_with(&mut c, 0.0, &config));
        assert!(!a.in_collision && !c.in_collision);
        assert_eq!(a.color, RED);
    }

    #[test]
    fn touching_circles_do_not_collide() {
        let mut a = circle(100.0, 100.0, 20.0);
        let mut b = circle(140.0, 100.0, 20.0);
        assert!(!a.collide_with(&mut b, 0.0, &Config::default()));
    }

    #[test]
    fn flashing_particle_does_not_retrigger() {
        let config = Config::default();
        let mut a = Particle::new([100.0, 100.0], [2.0, 0.0], 20.0, RED, "C1".to_owned());
        let mut b = Particle::new([110.0, 100.0], [-2.0, 0.0], 20.0, GREEN, "C2".to_owned());
        assert!(a.collide_with(&mut b, 0.0, &config));
        assert!(!a.collide_with(&mut b, 16.0, &config));
        assert_eq!(a.vel, [-2.0, 0.0]);
        assert_eq!(b.vel, [2.0, 0.0]);
    }

    #[test]
    fn idle_particle_retriggers_a_flashing_one() {
        let config = Config::default();
        let mut a = Particle::new([100.0, 100.0], [2.0, 0.0], 20.0, RED, "C1".to_owned());
        let mut b = Particle::new([110.0, 100.0], [-2.0, 1.0], 20.0, GREEN, "C2".to_owned());
        let mut d = Particle::new([120.0, 100.0], [0.0, 3.0], 20.0, RED, "C3".to_owned());
        assert!(a.collide_with(&mut b, 0.0, &config));
        assert_eq!(b.vel, [2.0, -1.0]);

        // Only the caller's flag guards, so an idle circle still hits b
        assert!(d.collide_with(&mut b, 100.0, &config));
        assert_eq!(b.vel, [-2.0, 1.0]);
        assert_eq!(d.vel, [0.0, -3.0]);
        assert_eq!(b.flash_until, Some(300.0));
        assert_eq!(d.flash_until, Some(300.0));

        b.expire_flash(200.0);
        assert!(b.in_collision);
        assert_eq!(b.color, Config::FLASH_COLOR);
        b.expire_flash(300.0);
        assert!(!b.in_collision);
        assert_eq!(b.color, GREEN);
    }

    #[test]
    fn flash_expires_after_duration() {
        let config = Config::default();
        let mut a = Particle::new([100.0, 100.0], [0.0, 0.0], 20.0, RED, "C1".to_owned());
        let mut b = Particle::new([130.0, 100.0], [0.0, 0.0], 20.0, GREEN, "C2".to_owned());
        a.collide_with(&mut b, 50.0, &config);

        a.expire_flash(249.0);
        assert!(a.in_collision);
        assert_eq!(a.color, Config::FLASH_COLOR);

        a.expire_flash(250.0);
        b.expire_flash(250.0);
        assert!(!a.in_collision && !b.in_collision);
        assert_eq!(a.color, RED);
        assert_eq!(b.color, GREEN);
        assert_eq!(a.flash_until, None);
    }

    #[test]
    fn hit_test_is_strictly_inside() {
        let p = circle(100.0, 100.0, 20.0);
        assert!(p.is_hit(100.0, 100.0));
        assert!(p.is_hit(115.0, 110.0));
        assert!(!p.is_hit(120.0, 100.0));
        assert!(!p.is_hit(0.0, 0.0));
    }

    #[test]
    fn draw_outlines_circle_then_label() {
        let surface = RecordingSurface::default();
        let p = circle(10.0, 20.0, 30.0);
        p.draw(&surface, &Config::default()).unwrap();
        assert_eq!(
            surface.take(),
            vec![
                DrawCall::Circle { center: [10.0, 20.0], radius: 30.0, color: RED },
                DrawCall::Label { text: "C1".to_owned(), center: [10.0, 20.0] },
            ]
        );
    }
}
