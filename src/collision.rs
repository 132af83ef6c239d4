// Brute force pairwise collision pass. Every unordered pair is checked once
// per frame, which is fine for the few dozen circles on screen.

use crate::config::Config;
use crate::particle::Particle;

// Returns the number of collisions triggered during this pass
pub fn detect_collisions(particles: &mut [Particle], now: f64, config: &Config) -> usize {
    let mut collisions = 0;
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let current = &mut head[i];
        for other in tail.iter_mut() {
            if current.collide_with(other, now, config) {
                collisions += 1;
            }
        }
    }
    collisions
}
