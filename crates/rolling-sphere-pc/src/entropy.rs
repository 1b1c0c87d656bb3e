//! Random bytes for the firework, backed by `rand`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rolling_sphere_hal::EntropySource;

pub struct RandEntropy {
    rng: StdRng,
}

impl RandEntropy {
    /// Reproducible sequence for a given seed; OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl EntropySource for RandEntropy {
    fn next_byte(&mut self) -> u8 {
        self.rng.random()
    }
}
