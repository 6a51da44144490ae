use super::Entropy;
use crate::Error;
use crate::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// Cryptographically secure entropy: a ChaCha-based [`StdRng`] seeded from
/// the operating system. Every playout gets its own stream.
#[derive(Debug, Clone)]
pub struct Secure(StdRng);

impl Secure {
    /// Seeds a fresh stream from the OS. Failure here is fatal to the caller.
    pub fn new() -> Result<Self> {
        StdRng::try_from_os_rng()
            .map(Self)
            .map_err(|e| Error::Entropy(e.to_string()))
    }
}

impl Entropy for Secure {
    fn below(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.0).copied()
    }
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}
