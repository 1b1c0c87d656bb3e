//! Firework particle system.
//!
//! Particles are not simulated step by step. Each burst draws a velocity and
//! color per particle, and positions are a closed-form function of the time
//! since the burst began, so a renderer can evaluate them per vertex.

use glam::{Vec3, Vec4};
use heapless::Vec;
use rolling_sphere_hal::EntropySource;

use crate::scene::config::FireworkConfig;

/// Number of particles in one burst.
pub const PARTICLE_COUNT: usize = 300;

/// One particle's per-burst constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub velocity: Vec3,
    pub color: Vec4,
}

impl Particle {
    /// Draw a particle from six entropy bytes: velocity x, y, z then color
    /// r, g, b.
    pub fn random<E: EntropySource>(entropy: &mut E) -> Self {
        let vx = 2.0 * (unit(entropy) - 0.5);
        let vy = 1.2 * 2.0 * unit(entropy);
        let vz = 2.0 * (unit(entropy) - 0.5);
        let r = unit(entropy);
        let g = unit(entropy);
        let b = unit(entropy);
        Self {
            velocity: Vec3::new(vx, vy, vz),
            color: Vec4::new(r, g, b, 1.0),
        }
    }
}

/// A byte mapped onto `[0, 1)` in steps of 1/256.
fn unit<E: EntropySource>(entropy: &mut E) -> f32 {
    f32::from(entropy.next_byte()) / 256.0
}

/// Closed-form particle position `elapsed_ms` after the burst began.
pub fn position_at(config: &FireworkConfig, particle: &Particle, elapsed_ms: f32) -> Vec3 {
    let t = elapsed_ms;
    let gravity = Vec3::new(0.0, config.gravity, 0.0);
    config.origin + particle.velocity * (config.velocity_scale * t) + gravity * (0.5 * t * t)
}

/// Repeating firework bursts.
#[derive(Clone, Debug)]
pub struct Firework {
    config: FireworkConfig,
    particles: Vec<Particle, PARTICLE_COUNT>,
    active: bool,
    burst_start_ms: u64,
    elapsed_ms: f32,
    bursts: u32,
}

impl Firework {
    /// An inactive system with no particles.
    pub fn new(config: FireworkConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            active: false,
            burst_start_ms: 0,
            elapsed_ms: 0.0,
            bursts: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FireworkConfig {
        &self.config
    }

    /// Milliseconds since the current burst started, as of the last update.
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    /// Bursts started since creation.
    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    /// Turn the system on or off. Switching on an inactive system starts a
    /// fresh burst at `now_ms`.
    pub fn set_active<E: EntropySource>(&mut self, active: bool, now_ms: u64, entropy: &mut E) {
        if active && !self.active {
            self.start(now_ms, entropy);
        }
        self.active = active;
    }

    /// Draw new particles and restart the burst clock.
    pub fn start<E: EntropySource>(&mut self, now_ms: u64, entropy: &mut E) {
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(entropy))
            .collect();
        self.burst_start_ms = now_ms;
        self.elapsed_ms = 0.0;
        self.bursts = self.bursts.wrapping_add(1);
        log::debug!("firework burst {} at {} ms", self.bursts, now_ms);
    }

    /// Advance the burst clock. Restarts the burst once it has run too long
    /// or nearly every particle has fallen back below the ground threshold.
    /// Returns `true` when a new burst was started.
    pub fn update<E: EntropySource>(&mut self, now_ms: u64, entropy: &mut E) -> bool {
        if !self.active {
            return false;
        }

        let t = now_ms.saturating_sub(self.burst_start_ms) as f32;
        self.elapsed_ms = t;

        let landed = self
            .particles
            .iter()
            .filter(|p| position_at(&self.config, p, t).y < self.config.ground_threshold)
            .count();

        let limit = PARTICLE_COUNT.saturating_sub(self.config.airborne_min);
        if t > self.config.max_lifetime_ms || landed > limit {
            self.start(now_ms, entropy);
            return true;
        }
        false
    }
}
