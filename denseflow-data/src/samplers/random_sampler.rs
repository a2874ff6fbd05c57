// denseflow-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Visits every index once per epoch, in a shuffled order.
///
/// The generator advances between epochs, so consecutive calls to
/// [`Sampler::indices`] give different permutations. Two samplers built
/// with the same seed produce the same sequence of permutations.
#[derive(Debug)]
pub struct RandomSampler {
    rng: Mutex<StdRng>,
}

impl RandomSampler {
    /// Seeds from system entropy.
    pub fn new() -> Self {
        RandomSampler {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomSampler {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn indices(&self, dataset_len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        // Recover the generator from a poisoned lock.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        indices.shuffle(&mut *rng);
        indices
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
