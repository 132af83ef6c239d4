// Pointer handling. A click removes every circle under the pointer, not just
// the topmost one.

use crate::particle_set::ParticleSet;

pub fn handle_click(particles: &mut ParticleSet, x: f64, y: f64) -> usize {
    particles.remove_where(|p| p.is_hit(x, y))
}
