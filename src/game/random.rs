use rand::Rng;

/// The random choices grid construction needs. Implemented for every
/// [`rand::Rng`]; tests substitute scripted sequences.
pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn next_in_range(&mut self, low: usize, high: usize) -> usize;

    /// Unbiased coin flip.
    fn next_bool(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }

    fn next_bool(&mut self) -> bool {
        self.random_bool(0.5)
    }
}
