// Staggered spawner. Circles are released one at a time, `spawn_interval_ms`
// apart, measured against the frame timestamps handed to `spawn_due`.

use crate::color::Color;
use crate::config::{Config, Viewport};
use crate::particle::Particle;
use crate::particle_set::ParticleSet;
use rand::Rng;

#[derive(Clone, Debug, Default)]
pub struct Spawner {
    // Total circles ever requested, across every batch
    requested: u32,
    spawned: u32,
    // Timestamp of the next release, set on the first tick after arming
    next_at: Option<f64>,
}

impl Spawner {
    pub fn new() -> Self {
        Spawner::default()
    }

    // Queues `count` more circles behind any still waiting
    pub fn arm(&mut self, count: u32) {
        self.requested = self.requested.saturating_add(count);
    }

    pub fn pending(&self) -> u32 {
        self.requested - self.spawned
    }

    pub fn is_finished(&self) -> bool {
        self.pending() == 0
    }

    /// Creates every circle whose release time has arrived and appends it to
    /// `particles`. The first circle of a batch is released on the tick that
    /// first sees it pending, the rest follow at fixed intervals from there.
    pub fn spawn_due<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        viewport: Viewport,
        config: &Config,
        rng: &mut R,
        particles: &mut ParticleSet,
    ) -> usize {
        if self.is_finished() {
            self.next_at = None;
            return 0;
        }

        let mut next_at = self.next_at.unwrap_or(now);
        let mut released = 0;
        while self.pending() > 0 && next_at <= now {
            let particle = Spawner::generate(self.spawned, viewport, config, rng);
            log!(
                "spawned {} at x={:.1} r={:.1}",
                particle.label,
                particle.pos[0],
                particle.radius()
            );
            particles.push(particle);
            self.spawned += 1;
            released += 1;
            next_at += config.spawn_interval_ms;
        }
        self.next_at = Some(next_at);
        released
    }

    /// Builds circle number `index` (zero based) just below the bottom edge,
    /// heading up and randomly left or right.
    pub fn generate<R: Rng + ?Sized>(
        index: u32,
        viewport: Viewport,
        config: &Config,
        rng: &mut R,
    ) -> Particle {
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;
        let pos_x = rng.gen::<f64>() * (viewport.width - radius * 2.0).max(0.0) + radius;
        let pos_y = viewport.height + radius;
        let color = Color::random(rng);
        let speed = rng.gen::<f64>() * (config.max_speed - config.min_speed) + config.min_speed;
        let vel_x = if rng.gen_bool(0.5) { -speed } else { speed };
        let vel_y = -speed;
        Particle::new(
            [pos_x, pos_y],
            [vel_x, vel_y],
            radius,
            color,
            format!("C{}", index + 1),
        )
    }
}
