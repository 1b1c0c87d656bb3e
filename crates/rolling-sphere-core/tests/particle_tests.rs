//! Tests for the firework particle system.

use glam::{Vec3, Vec4};
use rolling_sphere_core::scene::config::FireworkConfig;
use rolling_sphere_core::scene::particles::{position_at, Firework, Particle, PARTICLE_COUNT};
use rolling_sphere_hal::EntropySource;

/// Replays a byte sequence, cycling.
struct SequenceEntropy {
    bytes: Vec<u8>,
    next: usize,
}

impl SequenceEntropy {
    fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            next: 0,
        }
    }
}

impl EntropySource for SequenceEntropy {
    fn next_byte(&mut self) -> u8 {
        let b = self.bytes[self.next % self.bytes.len()];
        self.next += 1;
        b
    }
}

mod emission {
    use super::*;

    #[test]
    fn byte_order_is_velocity_then_color() {
        let mut e = SequenceEntropy::new(&[0, 128, 192, 64, 32, 16]);
        let p = Particle::random(&mut e);
        assert_eq!(p.velocity, Vec3::new(-1.0, 1.2, 0.5));
        assert_eq!(p.color, Vec4::new(0.25, 0.125, 0.0625, 1.0));
    }

    #[test]
    fn velocities_stay_in_range() {
        let mut e = SequenceEntropy::new(&[0, 255, 7, 200, 99]);
        for _ in 0..50 {
            let p = Particle::random(&mut e);
            assert!(p.velocity.x >= -1.0 && p.velocity.x < 1.0);
            assert!(p.velocity.y >= 0.0 && p.velocity.y < 2.4);
            assert!(p.velocity.z >= -1.0 && p.velocity.z < 1.0);
            assert_eq!(p.color.w, 1.0);
        }
    }

    #[test]
    fn start_fills_every_particle() {
        let mut fw = Firework::new(FireworkConfig::default());
        fw.start(0, &mut SequenceEntropy::new(&[128]));
        assert_eq!(fw.particles().len(), PARTICLE_COUNT);
        assert_eq!(fw.bursts(), 1);
    }
}

mod trajectory {
    use super::*;

    fn straight_up() -> Particle {
        Particle {
            velocity: Vec3::new(0.0, 1.2, 0.0),
            color: Vec4::ONE,
        }
    }

    #[test]
    fn starts_at_origin() {
        let config = FireworkConfig::default();
        assert_eq!(position_at(&config, &straight_up(), 0.0), config.origin);
    }

    #[test]
    fn gravity_pulls_down() {
        let config = FireworkConfig::default();
        let p = position_at(&config, &straight_up(), 2000.0);
        let expected = 0.1 + 0.001 * 1.2 * 2000.0 - 0.5 * 4.9e-7 * 2000.0 * 2000.0;
        assert!((p.y - expected).abs() < 1e-4, "{p}");
    }

    #[test]
    fn sideways_motion_is_linear() {
        let config = FireworkConfig::default();
        let particle = Particle {
            velocity: Vec3::new(-0.5, 0.0, 0.25),
            color: Vec4::ONE,
        };
        let p = position_at(&config, &particle, 1000.0);
        assert!((p.x + 0.5).abs() < 1e-5);
        assert!((p.z - 0.25).abs() < 1e-5);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn inactive_never_updates() {
        let mut fw = Firework::new(FireworkConfig::default());
        let mut e = SequenceEntropy::new(&[128]);
        assert!(!fw.update(50_000, &mut e));
        assert!(fw.particles().is_empty());
    }

    #[test]
    fn enabling_starts_a_burst_once() {
        let mut fw = Firework::new(FireworkConfig::default());
        let mut e = SequenceEntropy::new(&[128]);
        fw.set_active(true, 10, &mut e);
        fw.set_active(true, 20, &mut e);
        assert!(fw.is_active());
        assert_eq!(fw.bursts(), 1);

        fw.set_active(false, 30, &mut e);
        fw.set_active(true, 40, &mut e);
        assert_eq!(fw.bursts(), 2);
    }

    #[test]
    fn airborne_burst_keeps_running() {
        let mut fw = Firework::new(FireworkConfig::default());
        let mut e = SequenceEntropy::new(&[128]);
        fw.set_active(true, 1000, &mut e);
        assert!(!fw.update(5000, &mut e));
        assert_eq!(fw.elapsed_ms(), 4000.0);
    }

    #[test]
    fn restarts_when_nearly_all_landed() {
        // vy = 1.2 lands just before 4900 ms.
        let mut fw = Firework::new(FireworkConfig::default());
        let mut e = SequenceEntropy::new(&[128]);
        fw.set_active(true, 0, &mut e);
        assert!(fw.update(5000, &mut e));
        assert_eq!(fw.bursts(), 2);
        assert_eq!(fw.elapsed_ms(), 0.0);
    }

    #[test]
    fn restarts_after_max_lifetime() {
        // Fast particles are still airborne, but the burst has run too long.
        let config = FireworkConfig {
            gravity: 0.0,
            ..FireworkConfig::default()
        };
        let mut fw = Firework::new(config);
        let mut e = SequenceEntropy::new(&[255]);
        fw.set_active(true, 0, &mut e);
        assert!(!fw.update(10_000, &mut e));
        assert!(fw.update(10_001, &mut e));
    }

    #[test]
    fn a_few_airborne_particles_do_not_hold_the_burst() {
        let mut fw = Firework::new(FireworkConfig::default());
        // Most particles fall straight down (vy = 0); every 30th flies high.
        let mut bytes = Vec::new();
        for i in 0..PARTICLE_COUNT {
            let vy = if i % 30 == 0 { 255 } else { 0 };
            bytes.extend_from_slice(&[128, vy, 128, 0, 0, 0]);
        }
        let mut e = SequenceEntropy::new(&bytes);
        fw.set_active(true, 0, &mut e);
        // 290 have landed, 10 are airborne: not more than N - 10, keep going.
        assert!(!fw.update(100, &mut e));
    }

    #[test]
    fn restart_redraws_a_full_burst() {
        let mut fw = Firework::new(FireworkConfig::default());
        let mut e = SequenceEntropy::new(&[128]);
        fw.set_active(true, 0, &mut e);
        let first = fw.particles()[0];

        let mut e = SequenceEntropy::new(&[0]);
        assert!(fw.update(20_000, &mut e));
        assert_eq!(fw.bursts(), 2);
        assert_eq!(fw.particles().len(), PARTICLE_COUNT);
        assert_ne!(fw.particles()[0], first);
        assert_eq!(fw.elapsed_ms(), 0.0);
    }
}
