// Ordered collection of the live particles. Insertion order is draw order.

use crate::particle::Particle;

#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        ParticleSet {
            particles: Vec::new(),
        }
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    // Drops every particle matching the predicate, returns how many went away
    pub fn remove_where<F: FnMut(&Particle) -> bool>(&mut self, mut remove: F) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !remove(p));
        before - self.particles.len()
    }
}
