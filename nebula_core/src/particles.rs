//! Particle store: short-lived, gravity-integrated discs with fading alpha.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{Rgba, Vec2};

/// Seconds a particle lives before it is removed.
pub const PARTICLE_MAX_LIFETIME: f32 = 2.0;
/// Disc radius of every particle.
pub const PARTICLE_RADIUS: f32 = 3.0;
/// Downward acceleration in units/s².
pub const PARTICLE_GRAVITY: f32 = 30.0;
/// Initial speed range in units/s.
pub const PARTICLE_MIN_SPEED: f32 = 20.0;
pub const PARTICLE_MAX_SPEED: f32 = 50.0;

/// A single particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Seconds since emission.
    pub elapsed: f32,
    pub max_lifetime: f32,
    pub color: Rgba,
    pub radius: f32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            elapsed: 0.0,
            max_lifetime: PARTICLE_MAX_LIFETIME,
            color,
            radius: PARTICLE_RADIUS,
        }
    }

    /// Advances the particle by `dt`. Returns false once it has expired.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.max_lifetime {
            return false;
        }

        self.position += self.velocity * dt;
        self.velocity.y += PARTICLE_GRAVITY * dt;
        self.color.a = (255.0 * (1.0 - self.elapsed / self.max_lifetime)) as u8;
        true
    }
}

/// Owns every live particle.
#[derive(Debug)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    rng: StdRng,
    capacity: Option<usize>,
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ParticleStore {
    /// Creates a store seeded from OS entropy. `capacity` of `None` means unbounded.
    pub fn new(capacity: Option<usize>) -> Self {
        Self::with_rng(StdRng::from_entropy(), capacity)
    }

    /// Creates a store with a fixed seed so emission is reproducible.
    pub fn with_seed(seed: u64, capacity: Option<usize>) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), capacity)
    }

    fn with_rng(rng: StdRng, capacity: Option<usize>) -> Self {
        Self {
            particles: Vec::with_capacity(capacity.unwrap_or(0).min(1024)),
            rng,
            capacity,
        }
    }

    /// Emits one particle at `position` heading in a random direction.
    ///
    /// Returns false when the store is at capacity and the particle was dropped.
    pub fn emit(&mut self, position: Vec2, base_color: Rgba) -> bool {
        if self.is_full() {
            tracing::trace!(live = self.particles.len(), "particle store full, emission dropped");
            return false;
        }

        let angle = self.rng.gen_range(0.0..TAU);
        let speed = self.rng.gen_range(PARTICLE_MIN_SPEED..=PARTICLE_MAX_SPEED);
        self.particles
            .push(Particle::new(position, Vec2::from_polar(angle, speed), base_color));
        true
    }

    /// Emits `count` particles at the same position. Returns how many were stored.
    pub fn burst(&mut self, position: Vec2, base_color: Rgba, count: usize) -> usize {
        (0..count).filter(|_| self.emit(position, base_color)).count()
    }

    /// Integrates all particles and drops the expired ones.
    ///
    /// Removal uses `swap_remove`, so particle order is not preserved.
    pub fn update(&mut self, dt: f32) {
        let mut i = 0;
        while i < self.particles.len() {
            if self.particles[i].advance(dt) {
                i += 1;
            } else {
                self.particles.swap_remove(i);
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|limit| self.particles.len() >= limit)
    }
}
