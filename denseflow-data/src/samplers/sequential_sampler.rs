use super::traits::Sampler;

/// Visits indices in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn indices(&self, dataset_len: usize) -> Vec<usize> {
        (0..dataset_len).collect()
    }
}
