use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct UniformDataset {
    rng: StdRng,
}

impl UniformDataset {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    // Values drawn uniformly from [0, size); duplicates expected.
    pub fn generate(&mut self, size: usize) -> Vec<u64> {
        debug_assert!(size >= 1);
        let bound = size as u64;
        (0..size).map(|_| self.rng.random_range(0..bound)).collect()
    }
}
